use serde::Serialize;

use super::geometry::Coordinate;

/// Axis-aligned bounding box in degrees.
///
/// A box always encloses at least one coordinate: it is built from a
/// first coordinate and grown from there, so "no coordinates" is
/// represented by the absence of a box rather than an empty one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    southwest: Coordinate,
    northeast: Coordinate,
}

impl BoundingBox {
    /// A degenerate box around a single coordinate
    pub fn from_coordinate(coord: Coordinate) -> Self {
        Self { southwest: coord, northeast: coord }
    }

    /// The smallest box containing both corners, in any order
    pub fn from_corners(a: Coordinate, b: Coordinate) -> Self {
        let mut bbox = Self::from_coordinate(a);
        bbox.extend(b);
        bbox
    }

    pub fn southwest(&self) -> Coordinate {
        self.southwest
    }

    pub fn northeast(&self) -> Coordinate {
        self.northeast
    }

    /// Grow the box to include `coord`
    pub fn extend(&mut self, coord: Coordinate) {
        self.southwest.lon = self.southwest.lon.min(coord.lon);
        self.southwest.lat = self.southwest.lat.min(coord.lat);
        self.northeast.lon = self.northeast.lon.max(coord.lon);
        self.northeast.lat = self.northeast.lat.max(coord.lat);
    }

    /// The smallest box containing both boxes
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        let mut merged = *self;
        merged.extend(other.southwest);
        merged.extend(other.northeast);
        merged
    }

    /// Inclusive containment check
    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.lon >= self.southwest.lon
            && coord.lon <= self.northeast.lon
            && coord.lat >= self.southwest.lat
            && coord.lat <= self.northeast.lat
    }

    pub fn width(&self) -> f64 {
        self.northeast.lon - self.southwest.lon
    }

    pub fn height(&self) -> f64 {
        self.northeast.lat - self.southwest.lat
    }

    pub fn center(&self) -> Coordinate {
        Coordinate::new(
            (self.southwest.lon + self.northeast.lon) / 2.0,
            (self.southwest.lat + self.northeast.lat) / 2.0,
        )
    }

    /// True when the box covers a single coordinate
    pub fn is_degenerate(&self) -> bool {
        self.southwest == self.northeast
    }

    /// `[[min_lng, min_lat], [max_lng, max_lat]]`, the form map widgets take
    /// when fitting the viewport
    pub fn as_lng_lat_pairs(&self) -> [[f64; 2]; 2] {
        [self.southwest.into(), self.northeast.into()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_corners_normalizes() {
        let bbox =
            BoundingBox::from_corners(Coordinate::new(10.0, -5.0), Coordinate::new(-2.0, 8.0));
        assert_eq!(bbox.southwest(), Coordinate::new(-2.0, -5.0));
        assert_eq!(bbox.northeast(), Coordinate::new(10.0, 8.0));
        assert_eq!(bbox.width(), 12.0);
        assert_eq!(bbox.height(), 13.0);
    }

    #[test]
    fn test_single_coordinate_is_degenerate() {
        let bbox = BoundingBox::from_coordinate(Coordinate::new(74.3, 31.5));
        assert!(bbox.is_degenerate());
        assert!(bbox.contains(Coordinate::new(74.3, 31.5)));
        assert_eq!(bbox.as_lng_lat_pairs(), [[74.3, 31.5], [74.3, 31.5]]);
    }

    #[test]
    fn test_union_and_center() {
        let a = BoundingBox::from_coordinate(Coordinate::new(0.0, 0.0));
        let b = BoundingBox::from_coordinate(Coordinate::new(4.0, 2.0));
        let merged = a.union(&b);
        assert_eq!(merged.center(), Coordinate::new(2.0, 1.0));
        assert!(!merged.contains(Coordinate::new(4.1, 1.0)));
    }
}
