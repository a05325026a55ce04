//! Data model — chat transcript and simulation-configuration shapes.
//!
//! DESIGN
//! ======
//! These structs mirror the wire shapes exchanged with the chat backend and
//! the simulation runner, so field names follow the wire exactly (snake_case,
//! `loop` via serde rename). Optional fields are omitted from JSON when
//! absent rather than serialized as null, so a value that round-trips through
//! the store serializes byte-for-byte like the producer emitted it.
//!
//! The store accepts any well-formed `SimConfig`; cross-reference checks
//! (process → resource, process → process, rule → metric) live in
//! [`crate::validate`] and are run by the config producer, never here.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// =============================================================================
// CHAT TRANSCRIPT
// =============================================================================

/// Who authored a chat message. Closed set; anything else is a wire error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

/// One entry in the chat transcript. Append-only once handed to the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    /// Set by the assistant when the conversation has produced a runnable
    /// configuration. Absent means not ready.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ready_to_simulate: Option<bool>,
}

impl Message {
    /// Convenience constructor for a message without the ready flag.
    #[must_use]
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self { role, content: content.into(), ready_to_simulate: None }
    }

    /// Whether the ready flag is present and set.
    #[must_use]
    pub fn is_ready_to_simulate(&self) -> bool {
        self.ready_to_simulate == Some(true)
    }
}

// =============================================================================
// ENTITY ATTRIBUTES
// =============================================================================

/// A typed attribute value. Replaces the producer's free-form JSON bag with a
/// closed sum so downstream code never pattern-matches on raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Flag(bool),
    Number(f64),
    Text(String),
    Map(BTreeMap<String, AttrValue>),
}

/// Open key-value bag attached to simulated entities.
pub type AttrMap = BTreeMap<String, AttrValue>;

// =============================================================================
// SIMULATION CONFIGURATION
// =============================================================================

/// A consumable or occupiable resource (staff, machines, counters).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimResource {
    /// Key other parts of the config refer to. Uniqueness is encouraged but
    /// not enforced here; see [`crate::validate`].
    pub name: String,
    pub capacity: f64,
    pub cost_per_unit: f64,
    pub efficiency_threshold: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared: Option<bool>,
}

/// A target metric the simulation reports against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimMetric {
    pub name: String,
    pub target_value: f64,
    pub unit: String,
    pub description: String,
    /// Aggregation hint ("sum", "avg", ...). Open set; passed through verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregation: Option<String>,
}

/// Maps an observed metric, via a condition and threshold, to advice text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimInsightRule {
    /// Must name a [`SimMetric`] in the same config (checked by the validator).
    pub metric: String,
    /// Comparison operator as a string ("above_threshold", ">", ...). Open set.
    pub condition: String,
    pub threshold: f64,
    pub recommendation: String,
}

/// One stage in the process-flow graph.
///
/// `next_processes` edges plus the `loop` flag describe a directed graph over
/// process names. A self-edge with `loop` set is a valid repeating stage. The
/// graph is data only at this layer; nothing here executes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimProcess {
    pub name: String,
    pub duration: f64,
    /// Names of [`SimResource`] entries this stage occupies.
    pub required_resources: Vec<String>,
    pub expected_service_time: f64,
    pub max_acceptable_wait: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    /// Successor stage names. Absent means terminal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_processes: Option<Vec<String>>,
    /// Wire name is `loop` (a keyword here, hence the rename).
    #[serde(default, rename = "loop", skip_serializing_if = "Option::is_none")]
    pub loops: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_resources: Option<bool>,
}

/// A full discrete-event simulation scenario as produced by the chat flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    pub title: String,
    pub description: String,
    pub duration: f64,
    pub resources: Vec<SimResource>,
    pub processes: Vec<SimProcess>,
    pub entities_per_hour: f64,
    pub target_metrics: Vec<SimMetric>,
    pub insight_rules: Vec<SimInsightRule>,
    pub business_context: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_attributes: Option<AttrMap>,
}

// =============================================================================
// TEST FIXTURES
// =============================================================================

#[cfg(test)]
pub mod test_fixtures {
    use super::*;

    pub fn resource(name: &str) -> SimResource {
        SimResource {
            name: name.into(),
            capacity: 2.0,
            cost_per_unit: 10.0,
            efficiency_threshold: 0.8,
            priority: None,
            shared: None,
        }
    }

    pub fn process(name: &str, required: &[&str], next: Option<&[&str]>) -> SimProcess {
        SimProcess {
            name: name.into(),
            duration: 5.0,
            required_resources: required.iter().map(|&r| r.into()).collect(),
            expected_service_time: 5.0,
            max_acceptable_wait: 10.0,
            condition: None,
            next_processes: next.map(|n| n.iter().map(|&p| p.into()).collect()),
            loops: None,
            release_resources: None,
        }
    }

    pub fn metric(name: &str) -> SimMetric {
        SimMetric {
            name: name.into(),
            target_value: 100.0,
            unit: "count".into(),
            description: "test metric".into(),
            aggregation: None,
        }
    }

    pub fn rule(metric: &str) -> SimInsightRule {
        SimInsightRule {
            metric: metric.into(),
            condition: "above_threshold".into(),
            threshold: 50.0,
            recommendation: "Increase capacity".into(),
        }
    }

    /// A small, fully wired config: queue → checkout, one resource, one
    /// metric with one rule. Passes validation with no warnings.
    pub fn bank_config() -> SimConfig {
        SimConfig {
            title: "Bank Branch".into(),
            description: "Tellers serving a walk-in queue".into(),
            duration: 100.0,
            resources: vec![resource("teller")],
            processes: vec![
                process("Queue", &[], Some(&["Checkout"])),
                process("Checkout", &["teller"], None),
            ],
            entities_per_hour: 10.0,
            target_metrics: vec![metric("wait_time")],
            insight_rules: vec![rule("wait_time")],
            business_context: "Retail banking".into(),
            entity_attributes: None,
        }
    }

    /// A config whose single process routes to itself with the loop flag set.
    pub fn checkout_loop_config() -> SimConfig {
        let mut checkout = process("Checkout", &["register"], Some(&["Checkout"]));
        checkout.loops = Some(true);
        SimConfig {
            title: "Looping Checkout".into(),
            description: "One stage that repeats".into(),
            duration: 60.0,
            resources: vec![resource("register")],
            processes: vec![checkout],
            entities_per_hour: 30.0,
            target_metrics: vec![metric("throughput")],
            insight_rules: vec![],
            business_context: "Self-service kiosk".into(),
            entity_attributes: None,
        }
    }
}

#[cfg(test)]
#[path = "model_test.rs"]
mod tests;
