//! Standalone HTML rendering.
//!
//! The page template is kept as a `&'static str` and bundled with the
//! binary. The [`MapDocument`] is embedded as JSON; the page script builds
//! the Leaflet layers from it.

use quakemap_core::escape_html;

use crate::Result;
use crate::document::MapDocument;

/// Id of the element the map is mounted into.
pub const MAP_CONTAINER_ID: &str = "map";

const TITLE_SLOT: &str = "__QUAKEMAP_TITLE__";
const DOCUMENT_SLOT: &str = "__QUAKEMAP_DOCUMENT__";

const PAGE_TEMPLATE: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>__QUAKEMAP_TITLE__</title>
  <link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css" crossorigin="" />
  <link rel="stylesheet" href="https://unpkg.com/leaflet.markercluster@1.5.3/dist/MarkerCluster.css" />
  <link rel="stylesheet" href="https://unpkg.com/leaflet.markercluster@1.5.3/dist/MarkerCluster.Default.css" />
  <style>
    html, body { height: 100%; margin: 0; padding: 0; }
    #map { height: 100%; width: 100%; }
    .legend { background: white; padding: 8px 10px; border-radius: 4px; line-height: 20px; color: #333; box-shadow: 0 0 12px rgba(0, 0, 0, 0.25); }
    .legend h4 { margin: 0 0 6px; }
    .legend i { width: 18px; height: 18px; float: left; margin-right: 8px; opacity: 0.9; }
  </style>
</head>
<body>
  <div id="map"></div>
  <script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js" crossorigin=""></script>
  <script src="https://unpkg.com/leaflet.markercluster@1.5.3/dist/leaflet.markercluster.js"></script>
  <script src="https://unpkg.com/leaflet.heat@0.2.0/dist/leaflet-heat.js"></script>
  <script>
    const doc = __QUAKEMAP_DOCUMENT__;

    const baseLayers = {};
    doc.baseLayers.forEach((layer) => {
      baseLayers[layer.name] = L.tileLayer(layer.url, {
        attribution: layer.attribution,
        maxZoom: layer.maxZoom
      });
    });

    const markers = L.markerClusterGroup();
    doc.overlays.markers.forEach((m) => {
      markers.addLayer(L.marker(m.position).bindPopup(m.popup));
    });

    const heat = L.heatLayer(doc.overlays.heat, {
      radius: doc.heat.radius,
      blur: doc.heat.blur
    });

    const circles = L.layerGroup(doc.overlays.circles.map((c) =>
      L.circle(c.position, {
        radius: c.radius,
        fillColor: c.color,
        color: doc.circle.color,
        weight: doc.circle.weight,
        fillOpacity: doc.circle.fillOpacity
      }).bindPopup(c.popup)
    ));

    const plates = L.geoJSON(doc.overlays.boundaries.data, {
      style: doc.overlays.boundaries.style
    });

    const layersByKind = { earthquakes: markers, heatmap: heat, circles: circles, plates: plates };
    const overlayLayers = {};
    const initialLayers = [baseLayers[doc.baseLayers[0].name]];
    doc.overlayToggles.forEach((toggle) => {
      overlayLayers[toggle.label] = layersByKind[toggle.kind];
      if (toggle.visible) {
        initialLayers.push(layersByKind[toggle.kind]);
      }
    });

    const map = L.map("map", {
      center: doc.view.center,
      zoom: doc.view.zoom,
      layers: initialLayers
    });

    L.control.layers(baseLayers, overlayLayers, { collapsed: false }).addTo(map);

    const legend = L.control({ position: doc.legend.position });
    legend.onAdd = function () {
      const div = L.DomUtil.create("div", "legend");
      const rows = doc.legend.entries.map((e) =>
        '<i style="background:' + e.color + '"></i>' + e.label
      );
      div.innerHTML = "<h4>" + doc.legend.title + "</h4>" + rows.join("<br>");
      return div;
    };
    legend.addTo(map);
  </script>
</body>
</html>
"#;

/// Renders the document as a complete HTML page.
pub fn render_html(doc: &MapDocument<'_>) -> Result<String> {
    let json = serde_json::to_string(doc)?;
    let title = escape_html(doc.title);
    let data = script_safe(&json);
    let page = fill_slots(PAGE_TEMPLATE, &[(TITLE_SLOT, &title), (DOCUMENT_SLOT, &data)]);

    tracing::debug!(bytes = page.len(), "Rendered map page");
    Ok(page)
}

/// Substitutes every slot in one pass; inserted values are never rescanned.
fn fill_slots(template: &str, slots: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some((pos, slot, value)) = slots
        .iter()
        .filter_map(|(slot, value)| rest.find(slot).map(|pos| (pos, *slot, *value)))
        .min_by_key(|(pos, ..)| *pos)
    {
        out.push_str(&rest[..pos]);
        out.push_str(value);
        rest = &rest[pos + slot.len()..];
    }
    out.push_str(rest);
    out
}

/// Makes JSON safe to inline in a `<script>` element.
///
/// `<` is escaped so no `</script>` or `<!--` sequence can appear, and the
/// line separators JavaScript treats as newlines are escaped too.
fn script_safe(json: &str) -> String {
    json.replace('<', "\\u003c")
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029")
}
