//! In-memory photo catalog.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::config::CatalogConfig;
use crate::models::{Photo, PhotoId, Rgb};
use crate::search::ranking;
use crate::search::signals::{
    ColorQuery, ColorSignal, GeoQuery, GeoSignal, Hydrator, PhotoListings, ScoredCandidate,
    SignalKind, TextQuery, TextSignal,
};
use crate::{FokalError, Result};

use super::text;

/// A read-only catalog held entirely in memory.
///
/// Photos keep their load order; ids are unique (later duplicates are dropped
/// with a warning).
#[derive(Debug, Clone)]
pub struct InMemoryCatalog {
    photos: Vec<Photo>,
    by_id: HashMap<PhotoId, usize>,
    terms: Vec<HashSet<String>>,
    color_max_distance: f64,
}

impl InMemoryCatalog {
    pub fn new(photos: Vec<Photo>, config: &CatalogConfig) -> Self {
        let mut kept = Vec::with_capacity(photos.len());
        let mut by_id = HashMap::with_capacity(photos.len());

        for photo in photos {
            if by_id.contains_key(&photo.id) {
                warn!(id = photo.id, "Duplicate photo id in catalog, keeping the first");
                continue;
            }
            by_id.insert(photo.id, kept.len());
            kept.push(photo);
        }

        let terms = kept
            .iter()
            .map(|p| text::index_terms(&p.title, &p.description, &p.tags))
            .collect();

        Self {
            photos: kept,
            by_id,
            terms,
            color_max_distance: config.color_max_distance,
        }
    }

    /// Load a JSON array of photos.
    pub fn from_json_file(path: impl AsRef<Path>, config: &CatalogConfig) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            FokalError::Catalog(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let photos: Vec<Photo> = serde_json::from_str(&contents).map_err(|e| {
            FokalError::Catalog(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        debug!(path = %path.display(), photos = photos.len(), "Loaded catalog file");
        Ok(Self::new(photos, config))
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    pub fn get(&self, id: PhotoId) -> Option<&Photo> {
        self.by_id.get(&id).map(|&index| &self.photos[index])
    }

    fn text_score(&self, index: usize, terms: &[String]) -> f64 {
        let matched = terms
            .iter()
            .filter(|term| self.terms[index].contains(term.as_str()))
            .count();
        matched as f64 / terms.len() as f64
    }

    fn color_score(&self, photo: &Photo, target: &Rgb, min_fraction: f64) -> Option<f64> {
        let nearest = photo
            .colors
            .iter()
            .filter(|color| color.pixel_fraction >= min_fraction)
            .filter_map(|color| Rgb::from_hex(&color.hex))
            .map(|rgb| rgb.distance(target))
            .min_by(f64::total_cmp)?;

        (nearest <= self.color_max_distance).then(|| 1.0 - nearest / self.color_max_distance)
    }

    /// Photos sorted by `key` descending, ties by id ascending.
    fn listing<K, F>(&self, filter: F, key: impl Fn(&Photo) -> K, limit: usize) -> Vec<Photo>
    where
        K: Ord,
        F: Fn(&Photo) -> bool,
    {
        let mut selected: Vec<&Photo> = self.photos.iter().filter(|p| filter(p)).collect();
        selected.sort_by(|a, b| key(b).cmp(&key(a)).then_with(|| a.id.cmp(&b.id)));
        selected.into_iter().take(limit).cloned().collect()
    }
}

/// Score descending, id ascending, then truncate.
fn top(mut candidates: Vec<ScoredCandidate>, limit: usize) -> Vec<ScoredCandidate> {
    candidates.sort_by(ranking::compare_candidates);
    candidates.truncate(limit);
    candidates
}

#[async_trait]
impl TextSignal for InMemoryCatalog {
    async fn search_text(&self, query: &TextQuery, limit: usize) -> Result<Vec<ScoredCandidate>> {
        let mut terms: Vec<String> = query.terms.iter().map(|t| t.to_lowercase()).collect();
        terms.sort();
        terms.dedup();
        if terms.is_empty() {
            return Ok(Vec::new());
        }

        let candidates = self
            .photos
            .iter()
            .enumerate()
            .map(|(index, photo)| ScoredCandidate::new(photo.id, self.text_score(index, &terms)))
            .filter(|candidate| candidate.score > 0.0)
            .collect();

        Ok(top(candidates, limit))
    }
}

#[async_trait]
impl ColorSignal for InMemoryCatalog {
    async fn search_color(
        &self,
        query: &ColorQuery,
        limit: usize,
    ) -> Result<Vec<ScoredCandidate>> {
        let target = Rgb::from_hex(&query.hex).ok_or_else(|| FokalError::Signal {
            signal: SignalKind::Color,
            message: format!("'{}' is not a hex colour", query.hex),
        })?;

        let candidates = self
            .photos
            .iter()
            .filter_map(|photo| {
                self.color_score(photo, &target, query.pixel_fraction)
                    .map(|score| ScoredCandidate::new(photo.id, score))
            })
            .collect();

        Ok(top(candidates, limit))
    }
}

#[async_trait]
impl GeoSignal for InMemoryCatalog {
    async fn search_geo(&self, query: &GeoQuery, limit: usize) -> Result<Vec<ScoredCandidate>> {
        let candidates = self
            .photos
            .iter()
            .filter_map(|photo| {
                let distance = photo.location?.distance_meters(&query.point);
                if distance > query.radius {
                    return None;
                }
                let score = if query.radius > 0.0 {
                    1.0 - distance / query.radius
                } else {
                    1.0
                };
                Some(ScoredCandidate::new(photo.id, score))
            })
            .collect();

        Ok(top(candidates, limit))
    }
}

#[async_trait]
impl Hydrator for InMemoryCatalog {
    async fn hydrate(&self, id: PhotoId) -> Result<Photo> {
        self.get(id).cloned().ok_or(FokalError::NotFound(id))
    }
}

#[async_trait]
impl PhotoListings for InMemoryCatalog {
    async fn recent(&self, limit: usize) -> Result<Vec<Photo>> {
        Ok(self.listing(|_| true, |p| p.uploaded_at, limit))
    }

    async fn featured(&self, limit: usize) -> Result<Vec<Photo>> {
        Ok(self.listing(|p| p.featured, |p| p.uploaded_at, limit))
    }

    async fn trending(&self, limit: usize) -> Result<Vec<Photo>> {
        Ok(self.listing(|_| true, Photo::trending_score, limit))
    }
}
