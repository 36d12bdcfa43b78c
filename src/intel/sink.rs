//! Observers that receive every published intel entry.
//!
//! The match publishes to exactly one sink, injected at construction.
//! State machines never log; structured logging happens here.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, info};

use super::snapshot::Intel;
use crate::core::PlayerId;

/// Receives ledger entries in timestamp order, right after they are appended.
pub trait IntelSink: Send + Sync {
    fn publish(&self, intel: &Intel);
}

impl<S: IntelSink + ?Sized> IntelSink for Arc<S> {
    fn publish(&self, intel: &Intel) {
        (**self).publish(intel);
    }
}

/// Emits one `tracing` event per entry under target `truco_core::intel`.
///
/// Hand and match boundaries log at `info`, moves at `debug`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl IntelSink for TracingSink {
    fn publish(&self, intel: &Intel) {
        let first = intel.scores[PlayerId::FIRST];
        let second = intel.scores[PlayerId::SECOND];
        if intel.event.is_boundary() {
            info!(
                target: "truco_core::intel",
                match_id = %intel.match_id,
                timestamp = intel.timestamp.0,
                hand = intel.hand_number,
                event = ?intel.event,
                score_unit = intel.score_unit.points(),
                first_score = first,
                second_score = second,
                "hand boundary"
            );
        } else {
            debug!(
                target: "truco_core::intel",
                match_id = %intel.match_id,
                timestamp = intel.timestamp.0,
                hand = intel.hand_number,
                event = ?intel.event,
                score_unit = intel.score_unit.points(),
                to_act = ?intel.to_act,
                "move"
            );
        }
    }
}

/// Discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl IntelSink for NullSink {
    fn publish(&self, _intel: &Intel) {}
}

/// Keeps every published entry in memory, e.g. for a spectator feed.
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<Vec<Intel>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything published so far.
    #[must_use]
    pub fn entries(&self) -> Vec<Intel> {
        self.entries.lock().clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Remove and return everything published so far.
    pub fn drain(&self) -> Vec<Intel> {
        std::mem::take(&mut *self.entries.lock())
    }
}

impl IntelSink for MemorySink {
    fn publish(&self, intel: &Intel) {
        self.entries.lock().push(intel.clone());
    }
}
