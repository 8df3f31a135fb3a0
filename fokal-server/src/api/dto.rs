//! Data Transfer Objects for the API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use fokal::models::{DominantColor, GeoPoint, Photo};
use fokal::search::FusedScore;

/// Photo DTO for API responses
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PhotoDto {
    /// Unique identifier for the photo
    pub id: i64,

    pub title: String,

    pub description: String,

    pub tags: Vec<String>,

    /// Username of the uploader
    pub owner: String,

    /// When the photo was uploaded
    pub uploaded_at: DateTime<Utc>,

    /// Whether editors featured the photo
    pub featured: bool,

    pub views: u64,

    pub favorites: u64,

    /// Dominant colours, largest share first
    pub colors: Vec<ColorDto>,

    /// Where the photo was taken
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<LocationDto>,
}

impl From<Photo> for PhotoDto {
    fn from(photo: Photo) -> Self {
        Self {
            id: photo.id,
            title: photo.title,
            description: photo.description,
            tags: photo.tags,
            owner: photo.owner,
            uploaded_at: photo.uploaded_at,
            featured: photo.featured,
            views: photo.views,
            favorites: photo.favorites,
            colors: photo.colors.into_iter().map(ColorDto::from).collect(),
            location: photo.location.map(LocationDto::from),
        }
    }
}

/// A dominant colour of a photo
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ColorDto {
    /// Six hex digits, no leading `#`
    pub hex: String,

    /// Share of the image's pixels in this colour
    pub pixel_fraction: f64,
}

impl From<DominantColor> for ColorDto {
    fn from(color: DominantColor) -> Self {
        Self {
            hex: color.hex,
            pixel_fraction: color.pixel_fraction,
        }
    }
}

/// A WGS84 location
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LocationDto {
    pub lat: f64,
    pub lng: f64,
    pub srid: i32,
}

impl From<GeoPoint> for LocationDto {
    fn from(point: GeoPoint) -> Self {
        Self {
            lat: point.lat,
            lng: point.lng,
            srid: point.srid,
        }
    }
}

/// One ranked search hit
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SearchHitDto {
    pub id: i64,

    /// Sum of the scores from every signal that matched the photo
    pub score: f64,

    pub photo: Option<PhotoDto>,
}

impl From<FusedScore> for SearchHitDto {
    fn from(hit: FusedScore) -> Self {
        Self {
            id: hit.id,
            score: hit.score,
            photo: hit.photo.map(PhotoDto::from),
        }
    }
}

/// Search query parameters
///
/// Any combination of signals may be given; a signal only runs when all of
/// its parameters are present.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[allow(dead_code)]
pub struct SearchParams {
    /// Full-text query; terms are OR-ed
    pub q: Option<String>,

    /// Dominant colour as six hex digits, without `#`
    pub hex: Option<String>,

    /// Minimum share of pixels for a colour match (default 0.005)
    pub pixel_fraction: Option<f64>,

    /// Latitude in degrees
    pub lat: Option<f64>,

    /// Longitude in degrees
    pub lng: Option<f64>,

    /// Radius in metres
    pub radius: Option<f64>,

    /// Maximum number of results (default and maximum 500)
    pub limit: Option<i64>,
}

/// Listing query parameters
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[allow(dead_code)]
pub struct LimitParams {
    /// Maximum number of photos (default and maximum 500)
    pub limit: Option<i64>,
}

/// Service health and served signals
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthDto {
    pub status: String,
    pub version: String,
    pub signals: Vec<String>,
    pub default_limit: usize,
    pub max_limit: usize,
}
