//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types so consumers can bring the core
//! API into scope with a single `use fieldgate::prelude::*;`.

// Schema model
pub use crate::schema::{
    BlockSchema, Condition, ConditionScope, ControlType, FieldKind, FieldNode, FieldOption,
    Operator, TabDefinition,
};

// Evaluation and defaults
pub use crate::defaults::{defaults_from_template, resolve_defaults, TemplateUsage};
pub use crate::evaluator::ConditionEvaluator;

// Attribute values and environment
pub use crate::attributes::Attributes;
pub use crate::environment::Environment;

// Preview batching
pub use crate::queue::{PreviewSink, QueueConfig, QueueEntry, UpdateQueue};

// Error types
pub use crate::error::{ConditionError, SchemaError, TemplateError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
