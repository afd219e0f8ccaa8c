//! The defaults resolver: seeds a block instance's attribute map.
//!
//! Runs once at block-registration time over the same field tree the
//! evaluator walks. Structural containers flatten their children into one
//! shared namespace; it is the schema author's responsibility to keep ids
//! unique within a block.

use crate::attributes::{is_truthy, Attributes};
use crate::error::TemplateError;
use crate::evaluator::operator::values_equal;
use crate::schema::{BlockSchema, FieldKind, FieldNode};
use serde_json::{Map, Value};

/// Key under which [`defaults_from_template`] nests the merged attribute
/// map, alongside the flat top-level copy.
pub const NAMESPACE_KEY: &str = "fieldgate";

/// Resolves the initial attribute value map for a field tree.
///
/// Existing values always win over declared defaults (truthy check), which
/// supports override composition. Fields without an id are skipped.
pub fn resolve_defaults(fields: &[FieldNode], existing: &Attributes) -> Attributes {
    let mut out = Attributes::new();
    collect_defaults(fields, existing, &mut out);
    out
}

fn collect_defaults(fields: &[FieldNode], existing: &Attributes, out: &mut Attributes) {
    for field in fields {
        match &field.kind {
            FieldKind::Group { children } => collect_defaults(children, existing, out),
            FieldKind::Tabs { tabs } => {
                for tab in tabs {
                    collect_defaults(&tab.children, existing, out);
                }
            }
            FieldKind::Control(control) => {
                let Some(id) = &field.id else {
                    continue;
                };
                if let Some(value) = existing.get(id) {
                    if is_truthy(value) {
                        out.insert(id.clone(), value.clone());
                        continue;
                    }
                }
                let value = match &field.default {
                    None => Value::String(String::new()),
                    Some(Value::Bool(false)) => Value::Bool(false),
                    Some(default) => {
                        if control.is_numeric() && matches_an_option(field, default) {
                            // Malformed numeric defaults fail safe to empty.
                            coerce_number(default).unwrap_or(Value::String(String::new()))
                        } else {
                            default.clone()
                        }
                    }
                };
                out.insert(id.clone(), value);
            }
        }
    }
}

/// The numeric coercion guard: coerce only when the field has no options,
/// or the default corresponds to one of them.
fn matches_an_option(field: &FieldNode, default: &Value) -> bool {
    field.options.is_empty()
        || field
            .options
            .iter()
            .any(|option| values_equal(&option.value, default))
}

fn coerce_number(value: &Value) -> Option<Value> {
    match value {
        Value::Number(_) => Some(value.clone()),
        Value::String(s) => {
            let trimmed = s.trim();
            if let Ok(i) = trimmed.parse::<i64>() {
                return Some(Value::Number(i.into()));
            }
            trimmed
                .parse::<f64>()
                .ok()
                .and_then(serde_json::Number::from_f64)
                .map(Value::Number)
        }
        _ => None,
    }
}

/// Inline attribute overrides supplied where a template uses a block.
#[derive(Debug, Clone, Default)]
pub struct TemplateUsage {
    pub attributes: Attributes,
}

impl TemplateUsage {
    /// Parses inline overrides from their raw JSON form.
    pub fn from_value(block: &str, value: Value) -> Result<Self, TemplateError> {
        match value {
            Value::Object(map) => Ok(Self {
                attributes: map.into_iter().collect(),
            }),
            _ => Err(TemplateError::OverridesNotAnObject {
                block: block.to_string(),
            }),
        }
    }
}

/// Resolves a block's full default map for a template usage.
///
/// Inline overrides win over declared defaults. The merged map is returned
/// flat, with a copy nested under `NAMESPACE_KEY.attributes` for the
/// dual-access pattern consumers rely on.
pub fn defaults_from_template(schema: &BlockSchema, usage: &TemplateUsage) -> Attributes {
    let mut merged = resolve_defaults(&schema.fields, &usage.attributes);
    for (key, value) in &usage.attributes {
        merged.insert(key.clone(), value.clone());
    }

    let nested: Map<String, Value> = merged
        .iter()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();
    let mut namespace = Map::new();
    namespace.insert("attributes".to_string(), Value::Object(nested));
    merged.insert(NAMESPACE_KEY.to_string(), Value::Object(namespace));

    merged
}
