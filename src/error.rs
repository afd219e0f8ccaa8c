use thiserror::Error;

/// Errors that can occur while loading a block schema.
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Failed to parse schema JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while evaluating a single condition.
///
/// These never escape the public evaluator API: visibility is fail-open, so
/// any `ConditionError` makes the affected field render. The type exists so
/// the internal comparison helpers can propagate with `?` instead of
/// signalling through sentinel values.
#[derive(Error, Debug, Clone)]
pub enum ConditionError {
    #[error("Operator '{operator}' expects an array-like check value, but found '{found}'")]
    NotAnArray { operator: String, found: String },

    #[error("Operator '{operator}' could not parse '{found}' as an integer")]
    NotAnInteger { operator: String, found: String },
}

/// Errors that can occur when composing defaults for a template usage.
#[derive(Error, Debug, Clone)]
pub enum TemplateError {
    #[error("Template overrides for block '{block}' are not a JSON object")]
    OverridesNotAnObject { block: String },
}
