use serde::Serialize;

/// A point in map-native order (latitude first).
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Converts a `[longitude, latitude]` geometry pair.
    pub fn from_lon_lat([lon, lat]: [f64; 2]) -> Self {
        Self::new(lat, lon)
    }

    pub fn to_lon_lat(self) -> [f64; 2] {
        [self.lng, self.lat]
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct LatLngBounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl LatLngBounds {
    /// Smallest box holding every point. A single point gives a zero-area box.
    pub fn from_points(points: &[LatLng]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let init = Self {
            south: first.lat,
            west: first.lng,
            north: first.lat,
            east: first.lng,
        };
        Some(rest.iter().fold(init, |bounds, p| Self {
            south: bounds.south.min(p.lat),
            west: bounds.west.min(p.lng),
            north: bounds.north.max(p.lat),
            east: bounds.east.max(p.lng),
        }))
    }

    pub fn contains(&self, point: LatLng) -> bool {
        (self.south..=self.north).contains(&point.lat)
            && (self.west..=self.east).contains(&point.lng)
    }

    pub fn is_degenerate(&self) -> bool {
        self.south == self.north && self.west == self.east
    }
}
