//! Diagnostics hooks for the search pipeline.
//!
//! The engine reports what it did to an injected [`SearchObserver`] instead of
//! logging from inside fusion and ranking. Every method has a no-op default,
//! so an observer only implements the events it cares about.
//!
//! # Examples
//!
//! ```
//! use fokal::search::{SearchObserver, SignalKind};
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! #[derive(Debug, Default)]
//! struct CandidateCounter(AtomicUsize);
//!
//! impl SearchObserver for CandidateCounter {
//!     fn signal_completed(&self, _signal: SignalKind, candidates: usize) {
//!         self.0.fetch_add(candidates, Ordering::Relaxed);
//!     }
//! }
//! ```

use tracing::{debug, warn};

use crate::FokalError;

use super::signals::SignalKind;

/// Receives pipeline events for one search request at a time.
pub trait SearchObserver: Send + Sync + std::fmt::Debug {
    /// Activation finished; `signals` is empty when nothing will run
    fn signals_activated(&self, _signals: &[SignalKind], _limit: usize) {}

    /// A signal returned its candidate list
    fn signal_completed(&self, _signal: SignalKind, _candidates: usize) {}

    /// A signal failed; the request fails with this error
    fn signal_failed(&self, _signal: SignalKind, _error: &FokalError) {}

    /// Fusion produced `fused` distinct photos and ranking kept `kept` of them
    fn ranked(&self, _fused: usize, _kept: usize, _limit: usize) {}

    /// Every kept photo was hydrated
    fn hydrated(&self, _photos: usize) {}
}

/// Default observer: forwards events to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl SearchObserver for TracingObserver {
    fn signals_activated(&self, signals: &[SignalKind], limit: usize) {
        debug!(?signals, limit, "Signals activated");
    }

    fn signal_completed(&self, signal: SignalKind, candidates: usize) {
        debug!(%signal, candidates, "Signal returned candidates");
    }

    fn signal_failed(&self, signal: SignalKind, error: &FokalError) {
        warn!(%signal, error = %error, "Signal failed, aborting search");
    }

    fn ranked(&self, fused: usize, kept: usize, limit: usize) {
        debug!(fused, kept, limit, "Ranked fused scores");
    }

    fn hydrated(&self, photos: usize) {
        debug!(photos, "Hydrated ranking");
    }
}
