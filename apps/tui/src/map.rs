//! Map viewport and marker placement.

use crate::api::models::PozoDetail;
use crate::domain::StatusCategory;
use crate::status::StatusClassifier;

pub const INITIAL_LONGITUDE: f64 = -68.059167;
pub const INITIAL_LATITUDE: f64 = -38.951944;
pub const INITIAL_ZOOM: u8 = 6;
pub const MIN_ZOOM: u8 = 1;
pub const MAX_ZOOM: u8 = 14;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapViewport {
    pub center_lon: f64,
    pub center_lat: f64,
    pub zoom: u8,
}

impl Default for MapViewport {
    fn default() -> Self {
        Self {
            center_lon: INITIAL_LONGITUDE,
            center_lat: INITIAL_LATITUDE,
            zoom: INITIAL_ZOOM,
        }
    }
}

impl MapViewport {
    /// Degrees of longitude visible at the current zoom. Latitude spans half.
    pub fn span(&self) -> f64 {
        360.0 / f64::from(1_u32 << self.zoom)
    }

    /// `([west, east], [south, north])`
    pub fn bounds(&self) -> ([f64; 2], [f64; 2]) {
        let half_lon = self.span() / 2.0;
        let half_lat = self.span() / 4.0;
        (
            [self.center_lon - half_lon, self.center_lon + half_lon],
            [self.center_lat - half_lat, self.center_lat + half_lat],
        )
    }

    pub fn contains(&self, lon: f64, lat: f64) -> bool {
        let ([west, east], [south, north]) = self.bounds();
        (west..=east).contains(&lon) && (south..=north).contains(&lat)
    }

    /// Moves the center by a fraction of the visible span.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        let span = self.span();
        self.center_lon = (dx.mul_add(span, self.center_lon)).clamp(-180.0, 180.0);
        self.center_lat = (dy.mul_add(span / 2.0, self.center_lat)).clamp(-90.0, 90.0);
    }

    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + 1).min(MAX_ZOOM);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = self.zoom.saturating_sub(1).max(MIN_ZOOM);
    }

    pub fn center_on(&mut self, lon: f64, lat: f64) {
        self.center_lon = lon;
        self.center_lat = lat;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// A drawable well: position in the well list plus map coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct WellMarker {
    pub index: usize,
    pub well_id: String,
    pub lon: f64,
    pub lat: f64,
    pub category: StatusCategory,
}

/// Markers for the given well indices; wells without usable coordinates
/// are skipped.
pub fn build_markers(
    wells: &[PozoDetail],
    indices: &[usize],
    classifier: &StatusClassifier,
) -> Vec<WellMarker> {
    indices
        .iter()
        .filter_map(|&index| {
            let well = wells.get(index)?;
            let (lon, lat) = well.coordinates()?;
            Some(WellMarker {
                index,
                well_id: well.well_id.clone(),
                lon,
                lat,
                category: classifier.classify(well.status.as_deref()),
            })
        })
        .collect()
}
