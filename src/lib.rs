//! # Fieldgate - Field Visibility, Defaults and Preview Batching
//!
//! **Fieldgate** is the core engine behind a file-based block editor: it
//! evaluates which controls of a schema-driven field tree should render,
//! seeds new block instances with their default attribute values, and
//! batches live-preview updates behind a debounced, single-in-flight queue.
//!
//! ## Core Workflow
//!
//! 1.  **Load a schema**: parse an authored block schema (JSON) into the
//!     canonical [`schema::BlockSchema`] field tree, or build one
//!     programmatically.
//! 2.  **Resolve defaults**: run [`defaults::resolve_defaults`] once at
//!     block-registration time to produce the initial attribute map.
//! 3.  **Evaluate visibility**: on every attribute edit, ask
//!     [`evaluator::ConditionEvaluator`] which fields are allowed to render.
//! 4.  **Batch preview updates**: feed file-change entries into
//!     [`queue::UpdateQueue`]; it coalesces bursts and serializes preview
//!     swaps through your [`queue::PreviewSink`].
//!
//! ## Quick Start
//!
//! ```rust
//! use fieldgate::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let schema = BlockSchema::from_json(
//!         r#"{
//!             "name": "demo/hero",
//!             "attributes": [
//!                 { "id": "layout", "type": "select", "default": "wide",
//!                   "options": [ { "value": "wide" }, { "value": "boxed" } ] },
//!                 { "id": "columns", "type": "number", "default": "3",
//!                   "conditions": [[ { "id": "layout", "operator": "==", "value": "wide" } ]] }
//!             ]
//!         }"#,
//!     )?;
//!
//!     // Seed a fresh block instance.
//!     let defaults = resolve_defaults(&schema.fields, &Attributes::new());
//!     assert_eq!(defaults["columns"], serde_json::json!(3));
//!
//!     // Decide what renders for the current attribute values.
//!     let env = Environment::new();
//!     let evaluator = ConditionEvaluator::new(&env).with_defaults(&defaults);
//!     let visible = evaluator.visible_fields(&schema.fields, &defaults, None);
//!     assert_eq!(visible.len(), 2);
//!
//!     Ok(())
//! }
//! ```

pub mod attributes;
pub mod defaults;
pub mod environment;
pub mod error;
pub mod evaluator;
pub mod prelude;
pub mod queue;
pub mod schema;
