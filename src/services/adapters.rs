//! External surfaces: the map widget adapter.

/// Default view before any marker is placed (central Kochi).
pub const DEFAULT_CENTER: (f64, f64) = (9.9312, 76.2673);
pub const DEFAULT_ZOOM: u8 = 13;
pub const MARKER_ZOOM: u8 = 14;

pub trait MapAdapter {
    /// Replace the single marker and recenter the view on it.
    fn update(&mut self, latitude: f64, longitude: f64);
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    pub center: (f64, f64),
    pub zoom: u8,
    pub marker: Option<(f64, f64)>,
}

/// Terminal-side map surface. The view is created lazily on first update;
/// there is never more than one marker.
#[derive(Debug, Default)]
pub struct TerminalMap {
    view: Option<MapView>,
}

impl TerminalMap {
    #[allow(dead_code)] // Read by orchestration tests
    pub fn view(&self) -> Option<&MapView> {
        self.view.as_ref()
    }
}

impl MapAdapter for TerminalMap {
    fn update(&mut self, latitude: f64, longitude: f64) {
        let view = self.view.get_or_insert(MapView {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            marker: None,
        });
        view.marker = Some((latitude, longitude));
        view.center = (latitude, longitude);
        view.zoom = MARKER_ZOOM;
        tracing::info!(latitude, longitude, zoom = MARKER_ZOOM, "map marker updated");
    }
}
