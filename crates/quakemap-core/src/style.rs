//! Visual encodings: magnitude to marker size, depth to colour.
//!
//! Both derivations are pure functions over primitives so they can be
//! tested without building any feed.

use serde::{Deserialize, Serialize};

/// Exponent applied to magnitude when sizing circles.
pub const MAGNITUDE_EXPONENT: i32 = 7;

/// Circle radius for an event of the given magnitude.
///
/// Positive magnitudes are raised to the seventh power; zero, negative and
/// `NaN` magnitudes give `1.0`. No clamping is applied, so a magnitude 6
/// event yields 279 936.
pub fn marker_size(magnitude: f64) -> f64 {
    if magnitude > 0.0 {
        magnitude.powi(MAGNITUDE_EXPONENT)
    } else {
        1.0
    }
}

/// One of the six depth ranges shown on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepthBucket {
    /// Depth up to and including 10 km (negative depths included).
    Shallow,
    /// Above 10 km, up to 30 km.
    Moderate,
    /// Above 30 km, up to 50 km.
    Intermediate,
    /// Above 50 km, up to 70 km.
    Deep,
    /// Above 70 km, up to 90 km.
    VeryDeep,
    /// Above 90 km, and anything that compares false against every bound.
    Deepest,
}

impl DepthBucket {
    /// All buckets, shallowest first. This is also the legend order.
    pub const ALL: [DepthBucket; 6] = [
        DepthBucket::Shallow,
        DepthBucket::Moderate,
        DepthBucket::Intermediate,
        DepthBucket::Deep,
        DepthBucket::VeryDeep,
        DepthBucket::Deepest,
    ];

    /// Inclusive upper bound in km; `None` for the open-ended bucket.
    pub const fn upper_bound(self) -> Option<f64> {
        match self {
            DepthBucket::Shallow => Some(10.0),
            DepthBucket::Moderate => Some(30.0),
            DepthBucket::Intermediate => Some(50.0),
            DepthBucket::Deep => Some(70.0),
            DepthBucket::VeryDeep => Some(90.0),
            DepthBucket::Deepest => None,
        }
    }

    /// Hex colour code drawn on the map.
    pub const fn color(self) -> &'static str {
        match self {
            DepthBucket::Shallow => "#98EE00",
            DepthBucket::Moderate => "#D4EE00",
            DepthBucket::Intermediate => "#EECC00",
            DepthBucket::Deep => "#EE9C00",
            DepthBucket::VeryDeep => "#EA822C",
            DepthBucket::Deepest => "#EA2C2C",
        }
    }

    /// Legend label for the bucket.
    pub const fn label(self) -> &'static str {
        match self {
            DepthBucket::Shallow => "-10–10",
            DepthBucket::Moderate => "10–30",
            DepthBucket::Intermediate => "30–50",
            DepthBucket::Deep => "50–70",
            DepthBucket::VeryDeep => "70–90",
            DepthBucket::Deepest => "90+",
        }
    }
}

/// Bucket for a hypocentre depth in km.
///
/// First match wins over ascending inclusive upper bounds.
pub fn color_for_depth(depth_km: f64) -> DepthBucket {
    DepthBucket::ALL
        .into_iter()
        .find(|bucket| bucket.upper_bound().is_some_and(|bound| depth_km <= bound))
        .unwrap_or(DepthBucket::Deepest)
}

/// Stroke and fill settings shared by every event circle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CircleStyle {
    /// Outline colour.
    pub color: String,
    /// Outline width in pixels.
    pub weight: f64,
    /// Fill opacity in `0.0..=1.0`.
    #[serde(alias = "fill_opacity")]
    pub fill_opacity: f64,
}

impl Default for CircleStyle {
    fn default() -> Self {
        Self {
            color: "white".to_string(),
            weight: 0.5,
            fill_opacity: 0.75,
        }
    }
}

/// Fixed line style of the plate-boundary layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundaryStyle {
    /// Line colour.
    pub color: String,
    /// Line width in pixels.
    pub weight: f64,
}

impl Default for BoundaryStyle {
    fn default() -> Self {
        Self {
            color: "firebrick".to_string(),
            weight: 5.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_size_positive() {
        assert_eq!(marker_size(2.0), 128.0);
        assert_eq!(marker_size(6.0), 279_936.0);
        assert_eq!(marker_size(4.5), 37_366.945_312_5);
    }

    #[test]
    fn test_marker_size_non_positive() {
        assert_eq!(marker_size(0.0), 1.0);
        assert_eq!(marker_size(-0.5), 1.0);
        assert_eq!(marker_size(-3.0), 1.0);
        assert_eq!(marker_size(f64::NAN), 1.0);
    }

    #[test]
    fn test_marker_size_fractional_below_one() {
        // Small positive magnitudes shrink below the non-positive fallback.
        assert!(marker_size(0.5) < 1.0);
        assert_eq!(marker_size(1.0), 1.0);
    }

    #[test]
    fn test_depth_bucket_boundaries() {
        assert_eq!(color_for_depth(10.0), DepthBucket::Shallow);
        assert_eq!(color_for_depth(10.000_1), DepthBucket::Moderate);
        assert_eq!(color_for_depth(30.0), DepthBucket::Moderate);
        assert_eq!(color_for_depth(50.0), DepthBucket::Intermediate);
        assert_eq!(color_for_depth(70.0), DepthBucket::Deep);
        assert_eq!(color_for_depth(70.01), DepthBucket::VeryDeep);
        assert_eq!(color_for_depth(90.0), DepthBucket::VeryDeep);
        assert_eq!(color_for_depth(90.5), DepthBucket::Deepest);
    }

    #[test]
    fn test_depth_colors() {
        assert_eq!(color_for_depth(5.0).color(), "#98EE00");
        assert_eq!(color_for_depth(70.0).color(), "#EE9C00");
        assert_eq!(color_for_depth(70.01).color(), "#EA822C");
        assert_eq!(color_for_depth(650.0).color(), "#EA2C2C");
    }

    #[test]
    fn test_negative_and_nan_depths() {
        assert_eq!(color_for_depth(-3.2), DepthBucket::Shallow);
        assert_eq!(color_for_depth(f64::NAN), DepthBucket::Deepest);
    }

    #[test]
    fn test_legend_order_matches_bounds() {
        let bounds: Vec<f64> = DepthBucket::ALL
            .iter()
            .filter_map(|b| b.upper_bound())
            .collect();
        assert_eq!(bounds, vec![10.0, 30.0, 50.0, 70.0, 90.0]);
        assert_eq!(DepthBucket::ALL[5].label(), "90+");
    }

    #[test]
    fn test_boundary_style_default() {
        let style = BoundaryStyle::default();
        assert_eq!(style.color, "firebrick");
        assert_eq!(style.weight, 5.0);
    }
}
