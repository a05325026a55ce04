//! Shared observable state for a chat-driven simulation-configuration UI.
//!
//! ARCHITECTURE
//! ============
//! One store, three fields: a streaming flag, an append-only chat transcript,
//! and a zero-or-one simulation-configuration slot. UI components read
//! coherent snapshots and subscribe for change events; chat and simulation
//! producers call the three sanctioned mutations. Nothing here talks to a
//! network or runs a simulation — producers and renderers are the callers.
//!
//! - [`model`]    — transcript and configuration wire shapes
//! - [`store`]    — the [`ChatStore`] container and subscriptions
//! - [`event`]    — [`StoreEvent`] notifications and the [`ErrorCode`] trait
//! - [`validate`] — referential-integrity checks run by config producers

pub mod event;
pub mod model;
pub mod store;
pub mod validate;

pub use event::{ErrorCode, StoreEvent};
pub use model::{
    AttrMap, AttrValue, Message, Role, SimConfig, SimInsightRule, SimMetric, SimProcess, SimResource,
};
pub use store::{ChatState, ChatStore, Subscription};
pub use validate::{InvalidConfig, ValidationReport, Violation, Warning, validate};
