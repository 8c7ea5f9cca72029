//! Property-based tests for the visual derivations and the transform.

use proptest::prelude::*;

use crate::style::{DepthBucket, color_for_depth, marker_size};
use crate::transform::transform;
use crate::types::{BoundaryCollection, EarthquakeFeature, EarthquakeFeed};

fn feature_strategy() -> impl Strategy<Value = EarthquakeFeature> {
    (
        any::<bool>(),
        -180.0..180.0f64,
        -90.0..90.0f64,
        -5.0..700.0f64,
        -1.0..9.5f64,
    )
        .prop_map(|(located, lon, lat, depth, mag)| {
            if located {
                EarthquakeFeature::new(lon, lat, depth, mag, format!("M {mag:.1}"))
            } else {
                EarthquakeFeature::unlocated(mag, "unlocated")
            }
        })
}

proptest! {
    #[test]
    fn test_marker_size_is_seventh_power(m in 1e-3..10.0f64) {
        prop_assert_eq!(marker_size(m), m.powi(7));
    }

    #[test]
    fn test_marker_size_non_positive_is_one(m in -10.0..=0.0f64) {
        prop_assert_eq!(marker_size(m), 1.0);
    }

    #[test]
    fn test_depth_bucket_ranges(d in -50.0..800.0f64) {
        let expected = if d <= 10.0 {
            DepthBucket::Shallow
        } else if d <= 30.0 {
            DepthBucket::Moderate
        } else if d <= 50.0 {
            DepthBucket::Intermediate
        } else if d <= 70.0 {
            DepthBucket::Deep
        } else if d <= 90.0 {
            DepthBucket::VeryDeep
        } else {
            DepthBucket::Deepest
        };
        prop_assert_eq!(color_for_depth(d), expected);
    }

    #[test]
    fn test_transform_counts_located_features(
        features in proptest::collection::vec(feature_strategy(), 0..40)
    ) {
        let located = features.iter().filter(|f| f.geometry.is_some()).count();
        let total = features.len();
        let overlays = transform(&EarthquakeFeed::new(features), BoundaryCollection::empty());

        prop_assert_eq!(overlays.markers.len(), located);
        prop_assert_eq!(overlays.heat.len(), located);
        prop_assert_eq!(overlays.circles.len(), located);
        prop_assert_eq!(overlays.skipped, total - located);
    }

    #[test]
    fn test_transform_preserves_order(
        features in proptest::collection::vec(feature_strategy(), 0..40)
    ) {
        let expected: Vec<[f64; 2]> = features
            .iter()
            .filter_map(|f| f.geometry.as_ref().and_then(|g| g.lat_lon()))
            .collect();
        let overlays = transform(&EarthquakeFeed::new(features), BoundaryCollection::empty());

        let markers: Vec<[f64; 2]> = overlays.markers.iter().map(|m| m.position).collect();
        let circles: Vec<[f64; 2]> = overlays.circles.iter().map(|c| c.position).collect();
        let heat: Vec<[f64; 2]> = overlays.heat.iter().map(|h| h.0).collect();
        prop_assert_eq!(&markers, &expected);
        prop_assert_eq!(&circles, &expected);
        prop_assert_eq!(&heat, &expected);
    }
}
