//! Common test utilities for building field trees, conditions and queue
//! entries.
use fieldgate::prelude::*;
use serde_json::Value;

/// Creates a plain text control with the given id.
#[allow(dead_code)]
pub fn text_field(id: &str) -> FieldNode {
    FieldNode::control(id, ControlType::Text)
}

/// Creates a control of the given type with a declared default.
#[allow(dead_code)]
pub fn field_with_default(id: &str, control: ControlType, default: Value) -> FieldNode {
    let mut field = FieldNode::control(id, control);
    field.default = Some(default);
    field
}

/// Attaches a single AND-group of conditions to a field.
#[allow(dead_code)]
pub fn gated(mut field: FieldNode, group: Vec<Condition>) -> FieldNode {
    field.conditions.push(group);
    field
}

/// Creates an attribute-backed condition.
#[allow(dead_code)]
pub fn cond(id: &str, operator: &str, value: Value) -> Condition {
    Condition {
        id: Some(id.to_string()),
        env_key: None,
        operator: Operator::parse(operator),
        value,
        scope: ConditionScope::Current,
    }
}

/// Creates a condition that reads from the outer (parent) attributes.
#[allow(dead_code)]
pub fn outer_cond(id: &str, operator: &str, value: Value) -> Condition {
    Condition {
        scope: ConditionScope::Outer,
        ..cond(id, operator, value)
    }
}

/// Creates a condition against an environment key.
#[allow(dead_code)]
pub fn env_cond(key: &str, operator: &str, value: Value) -> Condition {
    Condition {
        id: None,
        env_key: Some(key.to_string()),
        operator: Operator::parse(operator),
        value,
        scope: ConditionScope::Current,
    }
}

/// Creates attributes from `(id, value)` pairs.
#[allow(dead_code)]
pub fn attrs(pairs: &[(&str, Value)]) -> Attributes {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

/// Creates a queue entry carrying only changed-page/changed-block lists.
/// The recording sinks in the queue tests require one swap per changed
/// page.
#[allow(dead_code)]
pub fn entry(fingerprint: &str, changed_pages: &[&str], changed_blocks: &[&str]) -> QueueEntry {
    QueueEntry {
        fingerprint: fingerprint.to_string(),
        changed_pages: changed_pages.iter().map(|s| s.to_string()).collect(),
        changed_blocks: changed_blocks.iter().map(|s| s.to_string()).collect(),
        ..QueueEntry::default()
    }
}
