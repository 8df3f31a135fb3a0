//! The multi-signal search engine.
//!
//! Control flow for one request:
//!
//! ```text
//! params -> activation -> signals (concurrent) -> fusion -> ranking -> hydration
//! ```
//!
//! Any failure along the way fails the whole request; partial results are
//! never returned.

use std::fmt;
use std::sync::Arc;

use futures::future::{BoxFuture, try_join_all};
use tracing::Instrument;

use crate::Result;
use crate::config::SearchConfig;
use crate::models::{Photo, PhotoId};

use super::activation::ActivatedSignals;
use super::fusion::{self, FusedScore};
use super::hydration::hydrate_ranking;
use super::observer::{SearchObserver, TracingObserver};
use super::params::{QueryParams, resolve_limit};
use super::ranking;
use super::signals::{
    ColorSignal, GeoSignal, Hydrator, PhotoListings, ScoredCandidate, SearchBackend, SignalKind,
    TextSignal,
};

/// Which single-signal listing to serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing {
    Recent,
    Featured,
    Trending,
}

/// Fuses text, colour and geo signals into one ranked, hydrated result.
///
/// Every collaborator is behind an `Arc`; no state is kept between requests.
#[derive(Clone)]
pub struct SearchEngine {
    text: Arc<dyn TextSignal>,
    color: Arc<dyn ColorSignal>,
    geo: Arc<dyn GeoSignal>,
    hydrator: Arc<dyn Hydrator>,
    listings: Arc<dyn PhotoListings>,
    observer: Arc<dyn SearchObserver>,
    config: SearchConfig,
}

impl SearchEngine {
    /// Use one backend for every signal, hydration and the listings.
    pub fn from_backend<B: SearchBackend>(backend: Arc<B>, config: SearchConfig) -> Self {
        Self {
            text: backend.clone(),
            color: backend.clone(),
            geo: backend.clone(),
            hydrator: backend.clone(),
            listings: backend,
            observer: Arc::new(TracingObserver),
            config,
        }
    }

    pub fn with_text_signal(mut self, signal: Arc<dyn TextSignal>) -> Self {
        self.text = signal;
        self
    }

    pub fn with_color_signal(mut self, signal: Arc<dyn ColorSignal>) -> Self {
        self.color = signal;
        self
    }

    pub fn with_geo_signal(mut self, signal: Arc<dyn GeoSignal>) -> Self {
        self.geo = signal;
        self
    }

    pub fn with_hydrator(mut self, hydrator: Arc<dyn Hydrator>) -> Self {
        self.hydrator = hydrator;
        self
    }

    pub fn with_listings(mut self, listings: Arc<dyn PhotoListings>) -> Self {
        self.listings = listings;
        self
    }

    pub fn with_observer(mut self, observer: Arc<dyn SearchObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Run a search from raw query parameters.
    ///
    /// Resolves the limit (never fails), activates signals (fails on malformed
    /// coordinates or colour), then runs [`SearchEngine::search_signals`].
    pub async fn search(&self, params: &QueryParams) -> Result<Vec<FusedScore>> {
        let limit = resolve_limit(params, &self.config);
        let signals = ActivatedSignals::detect(params, &self.config)?;
        self.search_signals(&signals, limit).await
    }

    /// Retrieve, fuse, rank and hydrate for already-activated signals.
    pub async fn search_signals(
        &self,
        signals: &ActivatedSignals,
        limit: usize,
    ) -> Result<Vec<FusedScore>> {
        let kinds = signals.kinds();
        let span = tracing::info_span!("search", signals = ?kinds, limit);

        async move {
            self.observer.signals_activated(&kinds, limit);
            if signals.is_empty() {
                return Ok(Vec::new());
            }

            let per_signal = limit.saturating_mul(self.config.signal_oversample);
            let lists = self.retrieve(signals, per_signal).await?;

            let fused = fusion::fuse(lists.iter().map(Vec::as_slice));
            let fused_count = fused.len();
            let ranked = ranking::rank(fused, limit);
            self.observer.ranked(fused_count, ranked.len(), limit);

            let hydrated = hydrate_ranking(
                self.hydrator.as_ref(),
                ranked,
                self.config.hydration_concurrency,
            )
            .await?;
            self.observer.hydrated(hydrated.len());

            Ok(hydrated)
        }
        .instrument(span)
        .await
    }

    /// Query every activated signal concurrently. Resolves once all have
    /// answered, or as soon as the first one fails.
    async fn retrieve(
        &self,
        signals: &ActivatedSignals,
        limit: usize,
    ) -> Result<Vec<Vec<ScoredCandidate>>> {
        let mut calls: Vec<BoxFuture<'_, Result<Vec<ScoredCandidate>>>> = Vec::with_capacity(3);

        if let Some(query) = &signals.text {
            calls.push(self.observed(SignalKind::Text, self.text.search_text(query, limit)));
        }
        if let Some(query) = &signals.color {
            calls.push(self.observed(SignalKind::Color, self.color.search_color(query, limit)));
        }
        if let Some(query) = &signals.geo {
            calls.push(self.observed(SignalKind::Geo, self.geo.search_geo(query, limit)));
        }

        try_join_all(calls).await
    }

    fn observed<'a>(
        &'a self,
        signal: SignalKind,
        call: BoxFuture<'a, Result<Vec<ScoredCandidate>>>,
    ) -> BoxFuture<'a, Result<Vec<ScoredCandidate>>> {
        Box::pin(async move {
            match call.await {
                Ok(candidates) => {
                    self.observer.signal_completed(signal, candidates.len());
                    Ok(candidates)
                }
                Err(error) => {
                    self.observer.signal_failed(signal, &error);
                    Err(error)
                }
            }
        })
    }

    /// Serve a single-signal listing with the same soft `limit` handling as search.
    pub async fn listing(&self, listing: Listing, params: &QueryParams) -> Result<Vec<Photo>> {
        let limit = resolve_limit(params, &self.config);
        tracing::debug!(?listing, limit, "Serving listing");

        match listing {
            Listing::Recent => self.listings.recent(limit).await,
            Listing::Featured => self.listings.featured(limit).await,
            Listing::Trending => self.listings.trending(limit).await,
        }
    }

    /// Fetch one photo by id.
    pub async fn photo(&self, id: PhotoId) -> Result<Photo> {
        self.hydrator.hydrate(id).await
    }
}

impl fmt::Debug for SearchEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchEngine")
            .field("config", &self.config)
            .field("observer", &self.observer)
            .finish_non_exhaustive()
    }
}
