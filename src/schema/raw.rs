//! Serde model for authored schema JSON.
//!
//! These structs match the on-disk block configuration format and are only
//! an intake layer; conversion into the canonical [`FieldNode`] tree happens
//! in [`super::conversion`]. Unknown control types and operator strings must
//! survive deserialization so a schema authored against a newer engine does
//! not fail to load.
//!
//! [`FieldNode`]: super::field::FieldNode

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct RawSchema {
    pub name: String,
    #[serde(default)]
    pub attributes: Vec<RawField>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RawField {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub field_type: String,
    pub label: Option<String>,
    #[serde(default)]
    pub hidden: bool,
    pub conditions: Option<Vec<Vec<RawCondition>>>,
    pub attributes: Option<Vec<RawField>>,
    pub tabs: Option<Vec<RawTab>>,
    pub default: Option<Value>,
    pub options: Option<Vec<RawOption>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RawTab {
    pub title: Option<String>,
    #[serde(default)]
    pub attributes: Vec<RawField>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RawOption {
    pub value: Value,
    pub label: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RawCondition {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub env_key: Option<String>,
    pub operator: Option<String>,
    pub value: Option<Value>,
    pub context: Option<String>,
}
