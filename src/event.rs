//! Store events — the change-notification messages emitted on mutation.
//!
//! DESIGN
//! ======
//! Components do not poll the store; they hold an event receiver and re-query
//! a snapshot when an event arrives. Events therefore carry just enough to
//! decide whether a re-render is needed, never the state itself — the
//! snapshot is the single source of truth and events are only edge triggers.

use serde::{Deserialize, Serialize};

// =============================================================================
// EVENTS
// =============================================================================

/// Emitted to every subscriber after an effective store mutation.
///
/// "Effective" matters for [`StoreEvent::StreamingChanged`]: setting the flag
/// to its current value emits nothing, so subscribers never see a no-op edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StoreEvent {
    /// The streaming flag flipped to `active`.
    StreamingChanged { active: bool },
    /// A message was appended at `index` (zero-based, equals old length).
    MessageAppended { index: usize },
    /// The config slot was replaced with a new configuration.
    SimConfigReplaced,
    /// The config slot was cleared.
    SimConfigCleared,
}

// =============================================================================
// ERROR CODES
// =============================================================================

/// Grepable error code for typed errors surfaced to the UI.
///
/// Display gives the human-readable message; `error_code` gives a stable
/// string the UI can key styling and retry behavior on.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;
}

#[cfg(test)]
#[path = "event_test.rs"]
mod tests;
