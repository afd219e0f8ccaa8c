//! Conversion from the raw serde model into the canonical field tree.
//!
//! Conversion is deliberately permissive: a structural field without
//! children becomes an empty container, an unknown operator becomes a
//! skipped condition, an unknown control type is carried as
//! [`ControlType::Other`]. Broken authored config degrades to "render
//! everything, default to empty" rather than refusing to load.

use super::field::{
    BlockSchema, Condition, ConditionScope, ControlType, FieldKind, FieldNode, FieldOption,
    Operator, TabDefinition,
};
use super::raw::{RawCondition, RawField, RawSchema, RawTab};
use crate::error::SchemaError;
use serde_json::Value;

impl BlockSchema {
    /// Parses an authored schema JSON document into the canonical model.
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        let raw: RawSchema = serde_json::from_str(json)?;
        Ok(raw.into_schema())
    }
}

impl RawSchema {
    pub fn into_schema(self) -> BlockSchema {
        BlockSchema {
            name: self.name,
            fields: self.attributes.into_iter().map(RawField::into_node).collect(),
        }
    }
}

impl RawField {
    pub fn into_node(self) -> FieldNode {
        let kind = match self.field_type.as_str() {
            "group" => FieldKind::Group {
                children: self
                    .attributes
                    .unwrap_or_default()
                    .into_iter()
                    .map(RawField::into_node)
                    .collect(),
            },
            "tabs" => FieldKind::Tabs {
                tabs: self
                    .tabs
                    .unwrap_or_default()
                    .into_iter()
                    .map(RawTab::into_tab)
                    .collect(),
            },
            other => FieldKind::Control(ControlType::parse(other)),
        };

        FieldNode {
            id: self.id,
            label: self.label,
            hidden: self.hidden,
            conditions: self
                .conditions
                .unwrap_or_default()
                .into_iter()
                .map(|group| group.into_iter().map(RawCondition::into_condition).collect())
                .collect(),
            default: self.default,
            options: self
                .options
                .unwrap_or_default()
                .into_iter()
                .map(|o| FieldOption {
                    value: o.value,
                    label: o.label,
                })
                .collect(),
            kind,
        }
    }
}

impl RawTab {
    fn into_tab(self) -> TabDefinition {
        TabDefinition {
            title: self.title.unwrap_or_default(),
            children: self.attributes.into_iter().map(RawField::into_node).collect(),
        }
    }
}

impl RawCondition {
    pub fn into_condition(self) -> Condition {
        let scope = match self.context.as_deref() {
            Some("main") => ConditionScope::Outer,
            _ => ConditionScope::Current,
        };
        Condition {
            id: self.id,
            env_key: self.env_key,
            operator: self.operator.as_deref().and_then(Operator::parse),
            value: self.value.unwrap_or(Value::Null),
            scope,
        }
    }
}
