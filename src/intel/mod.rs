//! The intel ledger: append-only, timestamp-ordered snapshots.
//!
//! Every hand transition appends one [`Intel`] to that hand's history. The
//! match stitches histories across hand boundaries for checkpoint queries
//! ([`LedgerView::since`]) and forwards each new entry to an injected
//! [`IntelSink`].
//!
//! ## Spectating
//!
//! A spectator keeps the timestamp of the last entry it saw and asks for
//! everything after it. Reconnecting right after a hand boundary still
//! works because the previous hand's history is consulted when the
//! checkpoint predates the current hand.

mod ledger;
mod sink;
mod snapshot;

pub use ledger::{entries_after, LedgerView};
pub use sink::{IntelSink, MemorySink, NullSink, TracingSink};
pub use snapshot::{Intel, IntelEvent, Tick};
