//! Retrieval signals and the collaborator traits the pipeline calls.
//!
//! Every signal returns its own ordered candidate list. Scores from different
//! signals live on different scales; fusion adds them as-is.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::Result;
use crate::models::{GeoPoint, Photo, PhotoId};

/// A photo proposed by a single signal, with that signal's score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub id: PhotoId,
    pub score: f64,
}

impl ScoredCandidate {
    pub fn new(id: PhotoId, score: f64) -> Self {
        Self { id, score }
    }
}

/// The retrieval strategies a search request can activate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalKind {
    Text,
    Color,
    Geo,
}

impl SignalKind {
    pub const ALL: [SignalKind; 3] = [SignalKind::Text, SignalKind::Color, SignalKind::Geo];

    pub fn as_str(&self) -> &'static str {
        match self {
            SignalKind::Text => "text",
            SignalKind::Color => "color",
            SignalKind::Geo => "geo",
        }
    }
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full-text query.
#[derive(Debug, Clone, PartialEq)]
pub struct TextQuery {
    /// The query exactly as the caller sent it
    pub raw: String,

    /// Whitespace-separated terms; a photo matching any one of them is a candidate
    pub terms: Vec<String>,
}

impl TextQuery {
    /// Split a raw query into terms. Returns `None` when no term remains.
    pub fn parse(raw: &str) -> Option<Self> {
        let terms: Vec<String> = raw.split_whitespace().map(str::to_string).collect();
        if terms.is_empty() {
            return None;
        }
        Some(Self {
            raw: raw.to_string(),
            terms,
        })
    }
}

/// Dominant-colour query.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorQuery {
    /// Six hex digits, no leading `#`
    pub hex: String,

    /// Only dominant colours covering at least this share of pixels count
    pub pixel_fraction: f64,
}

/// Radius query around a point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoQuery {
    pub point: GeoPoint,

    /// Radius in metres
    pub radius: f64,
}

/// Full-text relevance signal.
#[async_trait]
pub trait TextSignal: Send + Sync {
    async fn search_text(&self, query: &TextQuery, limit: usize) -> Result<Vec<ScoredCandidate>>;
}

/// Dominant-colour similarity signal.
#[async_trait]
pub trait ColorSignal: Send + Sync {
    async fn search_color(&self, query: &ColorQuery, limit: usize)
    -> Result<Vec<ScoredCandidate>>;
}

/// Geographic proximity signal.
#[async_trait]
pub trait GeoSignal: Send + Sync {
    async fn search_geo(&self, query: &GeoQuery, limit: usize) -> Result<Vec<ScoredCandidate>>;
}

/// Fetches full photo records for ranked ids.
#[async_trait]
pub trait Hydrator: Send + Sync {
    /// A missing photo is an error, typically [`crate::FokalError::NotFound`].
    async fn hydrate(&self, id: PhotoId) -> Result<Photo>;
}

/// Single-signal listings that need no fusion.
#[async_trait]
pub trait PhotoListings: Send + Sync {
    /// Most recently uploaded first
    async fn recent(&self, limit: usize) -> Result<Vec<Photo>>;

    /// Editor-curated photos
    async fn featured(&self, limit: usize) -> Result<Vec<Photo>>;

    /// Most popular first
    async fn trending(&self, limit: usize) -> Result<Vec<Photo>>;
}

/// A backend that provides every collaborator at once.
pub trait SearchBackend:
    TextSignal + ColorSignal + GeoSignal + Hydrator + PhotoListings + 'static
{
}

impl<T> SearchBackend for T where
    T: TextSignal + ColorSignal + GeoSignal + Hydrator + PhotoListings + 'static
{
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_query_terms() {
        let query = TextQuery::parse("  harbour   sunset ").unwrap();
        assert_eq!(query.terms, vec!["harbour", "sunset"]);
        assert_eq!(query.raw, "  harbour   sunset ");
    }

    #[test]
    fn test_text_query_blank() {
        assert!(TextQuery::parse("").is_none());
        assert!(TextQuery::parse(" \t ").is_none());
    }

    #[test]
    fn test_signal_kind_display() {
        assert_eq!(SignalKind::Color.to_string(), "color");
        assert_eq!(
            serde_json::to_string(&SignalKind::Geo).unwrap(),
            "\"geo\""
        );
    }
}
