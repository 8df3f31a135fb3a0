//! Multi-signal search
//!
//! This module turns raw request parameters into a fused, ranked and hydrated
//! list of photos.
//!
//! # Overview
//!
//! A request may activate up to three signals:
//! - **Text**: the `q` parameter, split into OR-ed terms
//! - **Colour**: the `hex` parameter with an optional `pixel_fraction`
//! - **Geo**: `lat`, `lng` and `radius` together
//!
//! Activated signals are queried concurrently. Their candidate lists are fused
//! by adding scores per photo, ranked by score descending with the photo id
//! breaking ties, truncated to the resolved limit and hydrated in rank order.
//!
//! # Example
//!
//! ```no_run
//! use fokal::search::{QueryParams, SearchEngine};
//!
//! async fn top_hits(engine: &SearchEngine) -> fokal::Result<()> {
//!     let params = QueryParams::from_pairs([("q", "lighthouse"), ("limit", "20")]);
//!     let hits = engine.search(&params).await?;
//!     assert!(hits.len() <= 20);
//!     Ok(())
//! }
//! ```

pub mod activation;
pub mod engine;
pub mod fusion;
pub mod hydration;
pub mod observer;
pub mod params;
pub mod ranking;
pub mod signals;

pub use activation::ActivatedSignals;
pub use engine::{Listing, SearchEngine};
pub use fusion::{FusedScore, fuse};
pub use hydration::hydrate_ranking;
pub use observer::{SearchObserver, TracingObserver};
pub use params::{QueryParams, resolve_limit};
pub use ranking::rank;
pub use signals::{
    ColorQuery, ColorSignal, GeoQuery, GeoSignal, Hydrator, PhotoListings, ScoredCandidate,
    SearchBackend, SignalKind, TextQuery, TextSignal,
};
