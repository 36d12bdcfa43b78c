//! Checkpoint queries over hand histories.
//!
//! Each hand keeps its own append-only `im::Vector<Intel>`. Cloning one is
//! O(1) and shares structure, so a [`LedgerView`] is a consistent,
//! already-published snapshot that readers can query without holding any
//! lock on the match.

use im::Vector;

use super::snapshot::{Intel, Tick};

/// Entries of `history` strictly after `checkpoint`, in order.
#[must_use]
pub fn entries_after(history: &Vector<Intel>, checkpoint: Tick) -> Vec<Intel> {
    history
        .iter()
        .filter(|intel| intel.timestamp > checkpoint)
        .cloned()
        .collect()
}

/// Read-only view over the previous and current hand histories.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LedgerView {
    previous: Option<Vector<Intel>>,
    current: Vector<Intel>,
}

impl LedgerView {
    #[must_use]
    pub fn new(previous: Option<Vector<Intel>>, current: Vector<Intel>) -> Self {
        Self { previous, current }
    }

    /// Most recent entry.
    #[must_use]
    pub fn latest(&self) -> Option<&Intel> {
        self.current.back()
    }

    #[must_use]
    pub fn current(&self) -> &Vector<Intel> {
        &self.current
    }

    #[must_use]
    pub fn previous(&self) -> Option<&Vector<Intel>> {
        self.previous.as_ref()
    }

    /// Everything strictly after `checkpoint`.
    ///
    /// Starts with the current hand. If nothing of the current hand was
    /// filtered out, the checkpoint lies before this hand began, so the
    /// previous hand's matching entries are prepended. Without a previous
    /// hand the prefix is empty.
    #[must_use]
    pub fn since(&self, checkpoint: Tick) -> Vec<Intel> {
        let current = entries_after(&self.current, checkpoint);
        if current.len() < self.current.len() {
            return current;
        }

        let mut result = self
            .previous
            .as_ref()
            .map(|previous| entries_after(previous, checkpoint))
            .unwrap_or_default();
        result.extend(current);
        result
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::core::PlayerMap;
    use crate::intel::IntelEvent;
    use crate::truco::ScoreUnit;

    fn entry(tick: u64) -> Intel {
        Intel {
            timestamp: Tick(tick),
            event: IntelEvent::ScoresUpdated,
            match_id: Uuid::nil(),
            hand_number: 1,
            vira: "4D".parse().unwrap(),
            open_cards: Vec::new(),
            card_on_table: None,
            rounds: Vec::new(),
            score_unit: ScoreUnit::One,
            pending_request: None,
            scores: PlayerMap::with_value(0),
            to_act: None,
            available_moves: Vec::new(),
            hand_result: None,
            match_winner: None,
        }
    }

    fn history(ticks: std::ops::RangeInclusive<u64>) -> Vector<Intel> {
        ticks.map(entry).collect()
    }

    fn ticks(entries: &[Intel]) -> Vec<u64> {
        entries.iter().map(|i| i.timestamp.0).collect()
    }

    #[test]
    fn test_since_within_current_hand() {
        let view = LedgerView::new(Some(history(1..=4)), history(5..=8));
        assert_eq!(ticks(&view.since(Tick(6))), vec![7, 8]);
        assert!(view.since(Tick(8)).is_empty());
    }

    #[test]
    fn test_since_reaches_into_previous_hand() {
        let view = LedgerView::new(Some(history(1..=4)), history(5..=8));
        assert_eq!(ticks(&view.since(Tick(2))), vec![3, 4, 5, 6, 7, 8]);
        assert_eq!(ticks(&view.since(Tick(4))), vec![5, 6, 7, 8]);
    }

    #[test]
    fn test_since_without_previous_hand() {
        let view = LedgerView::new(None, history(1..=3));
        assert_eq!(ticks(&view.since(Tick::ORIGIN)), vec![1, 2, 3]);
        assert_eq!(view.latest().map(|i| i.timestamp), Some(Tick(3)));
        assert!(view.previous().is_none());
    }

    #[test]
    fn test_empty_view() {
        let view = LedgerView::default();
        assert!(view.latest().is_none());
        assert!(view.since(Tick::ORIGIN).is_empty());
    }
}
