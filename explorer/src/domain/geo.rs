//! Geographic value objects shared by the controllers and adapters.
//!
//! Latitude and longitude ranges are not enforced: the remote
//! search service is authoritative, so out-of-range values pass through
//! untouched. Only non-finite values and inverted or wrapping boxes are
//! rejected.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Validation errors raised by geographic constructors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeoValidationError {
    /// A coordinate or edge was NaN or infinite.
    #[error("{field} must be finite, got {value}")]
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
        /// Rejected value.
        value: f64,
    },
    /// The northern edge lies south of the southern edge.
    #[error("bounding box north ({north}) must not be below south ({south})")]
    InvertedLatitude {
        /// Northern edge.
        north: f64,
        /// Southern edge.
        south: f64,
    },
    /// The box wraps across the antimeridian (`east < west`).
    #[error("bounding box crosses the antimeridian (east {east} < west {west})")]
    CrossesAntimeridian {
        /// Eastern edge.
        east: f64,
        /// Western edge.
        west: f64,
    },
}

fn ensure_finite(value: f64, field: &'static str) -> Result<f64, GeoValidationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GeoValidationError::NonFinite { field, value })
    }
}

/// A WGS84 latitude/longitude pair.
///
/// # Examples
///
/// ```
/// use explorer::domain::Coordinates;
///
/// let point = Coordinates::new(22.7, 75.8)?;
/// assert_eq!(point.lat(), 22.7);
/// assert_eq!(point.lng(), 75.8);
/// # Ok::<(), explorer::domain::GeoValidationError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CoordinatesDto", into = "CoordinatesDto")]
pub struct Coordinates {
    lat: f64,
    lng: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct CoordinatesDto {
    lat: f64,
    lng: f64,
}

impl Coordinates {
    /// Construct a coordinate pair, rejecting non-finite components.
    pub fn new(lat: f64, lng: f64) -> Result<Self, GeoValidationError> {
        Ok(Self {
            lat: ensure_finite(lat, "lat")?,
            lng: ensure_finite(lng, "lng")?,
        })
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lng(&self) -> f64 {
        self.lng
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.lat, self.lng)
    }
}

impl TryFrom<CoordinatesDto> for Coordinates {
    type Error = GeoValidationError;

    fn try_from(dto: CoordinatesDto) -> Result<Self, Self::Error> {
        Self::new(dto.lat, dto.lng)
    }
}

impl From<Coordinates> for CoordinatesDto {
    fn from(value: Coordinates) -> Self {
        Self {
            lat: value.lat,
            lng: value.lng,
        }
    }
}

/// Visible map region expressed as four edges.
///
/// Wrapping boxes are rejected; a viewport spanning the antimeridian must be
/// clamped to one side by the map adapter before it reaches the controller.
///
/// # Examples
///
/// ```
/// use explorer::domain::BoundingBox;
///
/// let bounds = BoundingBox::new(22.73, 22.70, 75.90, 75.85)?;
/// assert!(bounds.contains_lat_lng(22.72, 75.87));
/// assert!(BoundingBox::new(10.0, 20.0, 5.0, 0.0).is_err());
/// # Ok::<(), explorer::domain::GeoValidationError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BoundingBoxDto", into = "BoundingBoxDto")]
pub struct BoundingBox {
    north: f64,
    south: f64,
    east: f64,
    west: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct BoundingBoxDto {
    north: f64,
    south: f64,
    east: f64,
    west: f64,
}

impl BoundingBox {
    /// Creates a validated bounding box.
    pub fn new(north: f64, south: f64, east: f64, west: f64) -> Result<Self, GeoValidationError> {
        let north = ensure_finite(north, "north")?;
        let south = ensure_finite(south, "south")?;
        let east = ensure_finite(east, "east")?;
        let west = ensure_finite(west, "west")?;

        if north < south {
            return Err(GeoValidationError::InvertedLatitude { north, south });
        }
        if east < west {
            return Err(GeoValidationError::CrossesAntimeridian { east, west });
        }

        Ok(Self {
            north,
            south,
            east,
            west,
        })
    }

    /// Northern edge.
    pub fn north(&self) -> f64 {
        self.north
    }

    /// Southern edge.
    pub fn south(&self) -> f64 {
        self.south
    }

    /// Eastern edge.
    pub fn east(&self) -> f64 {
        self.east
    }

    /// Western edge.
    pub fn west(&self) -> f64 {
        self.west
    }

    /// Whether the point lies inside the box, edges included.
    pub fn contains_lat_lng(&self, lat: f64, lng: f64) -> bool {
        (self.south..=self.north).contains(&lat) && (self.west..=self.east).contains(&lng)
    }
}

impl TryFrom<BoundingBoxDto> for BoundingBox {
    type Error = GeoValidationError;

    fn try_from(dto: BoundingBoxDto) -> Result<Self, Self::Error> {
        Self::new(dto.north, dto.south, dto.east, dto.west)
    }
}

impl From<BoundingBox> for BoundingBoxDto {
    fn from(value: BoundingBox) -> Self {
        Self {
            north: value.north,
            south: value.south,
            east: value.east,
            west: value.west,
        }
    }
}

/// Named zoom levels; numeric values come from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZoomPreset {
    /// Wide campus view used for the initial and reset views.
    Overview,
    /// Close-up view used when focusing a single landmark or coordinate.
    Close,
}

/// Request to move the map, independent of search and filtering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecenterIntent {
    /// Target map centre.
    pub center: Coordinates,
    /// Zoom level to apply.
    pub zoom: ZoomPreset,
}

impl RecenterIntent {
    /// Recenter at close zoom.
    pub fn close(center: Coordinates) -> Self {
        Self {
            center,
            zoom: ZoomPreset::Close,
        }
    }

    /// Recenter at overview zoom.
    pub fn overview(center: Coordinates) -> Self {
        Self {
            center,
            zoom: ZoomPreset::Overview,
        }
    }
}
