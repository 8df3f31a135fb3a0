use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{DominantColor, GeoPoint};

/// Identifier of a photo; the key that search fusion accumulates on.
pub type PhotoId = i64;

/// A photo as stored in the catalog and returned by hydration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Photo {
    pub id: PhotoId,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub tags: Vec<String>,

    /// Username of the uploader
    #[serde(default)]
    pub owner: String,

    pub uploaded_at: DateTime<Utc>,

    /// Curated by editors for the featured listing
    #[serde(default)]
    pub featured: bool,

    #[serde(default)]
    pub views: u64,

    #[serde(default)]
    pub favorites: u64,

    /// Dominant colours extracted at upload, largest share first
    #[serde(default)]
    pub colors: Vec<DominantColor>,

    /// Where the photo was taken, if known
    #[serde(default)]
    pub location: Option<GeoPoint>,
}

impl Photo {
    /// Popularity used by the trending listing.
    pub fn trending_score(&self) -> u64 {
        self.favorites.saturating_mul(2).saturating_add(self.views)
    }
}

/// Builder for [`Photo`], mostly useful in tests and seed data.
#[derive(Debug, Clone)]
pub struct PhotoBuilder {
    photo: Photo,
}

impl PhotoBuilder {
    pub fn new(id: PhotoId) -> Self {
        Self {
            photo: Photo {
                id,
                title: String::new(),
                description: String::new(),
                tags: Vec::new(),
                owner: String::new(),
                uploaded_at: Utc::now(),
                featured: false,
                views: 0,
                favorites: 0,
                colors: Vec::new(),
                location: None,
            },
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.photo.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.photo.description = description.into();
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.photo.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn owner(mut self, owner: impl Into<String>) -> Self {
        self.photo.owner = owner.into();
        self
    }

    pub fn uploaded_at(mut self, at: DateTime<Utc>) -> Self {
        self.photo.uploaded_at = at;
        self
    }

    pub fn featured(mut self, featured: bool) -> Self {
        self.photo.featured = featured;
        self
    }

    pub fn views(mut self, views: u64) -> Self {
        self.photo.views = views;
        self
    }

    pub fn favorites(mut self, favorites: u64) -> Self {
        self.photo.favorites = favorites;
        self
    }

    pub fn color(mut self, hex: impl Into<String>, pixel_fraction: f64) -> Self {
        self.photo.colors.push(DominantColor {
            hex: hex.into(),
            pixel_fraction,
        });
        self
    }

    pub fn location(mut self, lat: f64, lng: f64) -> Self {
        self.photo.location = Some(GeoPoint::wgs84(lat, lng));
        self
    }

    pub fn build(self) -> Photo {
        self.photo
    }
}
