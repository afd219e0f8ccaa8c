//! The condition evaluator: decides per-field render visibility.
//!
//! Visibility conditions are an OR-of-ANDs over the block's current (and
//! optionally its parent's) attribute values. The evaluator is a pure
//! function of its inputs; environment data that the original host exposed
//! globally is injected through [`Environment`].
//!
//! The failure policy is fail-open: a malformed condition never hides a
//! field. Internally the operator helpers propagate [`ConditionError`] with
//! `?`, and the public API absorbs it as "visible", logging at debug level.

pub(crate) mod operator;

use crate::attributes::{unwrap_option_value, Attributes};
use crate::environment::Environment;
use crate::error::ConditionError;
use crate::schema::{Condition, ConditionScope, ControlType, FieldKind, FieldNode, Operator};
use operator::{is_empty_value, parse_int, value_includes, values_equal};
use serde_json::Value;

/// Evaluates field visibility against attribute maps.
pub struct ConditionEvaluator<'a> {
    env: &'a Environment,
    defaults: Option<&'a Attributes>,
}

impl<'a> ConditionEvaluator<'a> {
    pub fn new(env: &'a Environment) -> Self {
        Self {
            env,
            defaults: None,
        }
    }

    /// Supplies the block's resolved defaults as a fallback source for
    /// condition check values whose attribute has not been set yet.
    pub fn with_defaults(mut self, defaults: &'a Attributes) -> Self {
        self.defaults = Some(defaults);
        self
    }

    /// Decides whether a field should render.
    ///
    /// `outer` carries the parent block's attributes for conditions with
    /// [`ConditionScope::Outer`]; pass `None` for top-level blocks.
    pub fn is_allowed_to_render(
        &self,
        field: &FieldNode,
        attributes: &Attributes,
        outer: Option<&Attributes>,
    ) -> bool {
        if field.hidden {
            return false;
        }
        // Rich text is rendered inline in the canvas, never through the
        // sidebar field path.
        if matches!(field.kind, FieldKind::Control(ControlType::RichText)) {
            return false;
        }
        if field.conditions.is_empty() {
            return true;
        }

        match self.evaluate_groups(&field.conditions, attributes, outer) {
            Ok(visible) => visible,
            Err(err) => {
                tracing::debug!(
                    field = field.id.as_deref().unwrap_or("<anonymous>"),
                    error = %err,
                    "condition evaluation failed, rendering field"
                );
                true
            }
        }
    }

    /// Walks a field tree and returns the leaf controls that would render,
    /// descending only into containers whose own conditions pass.
    pub fn visible_fields<'f>(
        &self,
        fields: &'f [FieldNode],
        attributes: &Attributes,
        outer: Option<&Attributes>,
    ) -> Vec<&'f FieldNode> {
        let mut out = Vec::new();
        self.collect_visible(fields, attributes, outer, &mut out);
        out
    }

    fn collect_visible<'f>(
        &self,
        fields: &'f [FieldNode],
        attributes: &Attributes,
        outer: Option<&Attributes>,
        out: &mut Vec<&'f FieldNode>,
    ) {
        for field in fields {
            if !self.is_allowed_to_render(field, attributes, outer) {
                continue;
            }
            match &field.kind {
                FieldKind::Group { children } => {
                    self.collect_visible(children, attributes, outer, out)
                }
                FieldKind::Tabs { tabs } => {
                    for tab in tabs {
                        self.collect_visible(&tab.children, attributes, outer, out);
                    }
                }
                FieldKind::Control(_) => out.push(field),
            }
        }
    }

    /// OR over condition groups; a group passes iff all of its evaluated
    /// conditions pass. Conditions without a recognized operator are
    /// skipped, not counted as failures.
    fn evaluate_groups(
        &self,
        groups: &[Vec<Condition>],
        attributes: &Attributes,
        outer: Option<&Attributes>,
    ) -> Result<bool, ConditionError> {
        for group in groups {
            let mut passed = true;
            for condition in group {
                let Some(operator) = condition.operator else {
                    continue;
                };
                if !self.evaluate_condition(condition, operator, attributes, outer)? {
                    passed = false;
                    break;
                }
            }
            if passed {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn evaluate_condition(
        &self,
        condition: &Condition,
        operator: Operator,
        attributes: &Attributes,
        outer: Option<&Attributes>,
    ) -> Result<bool, ConditionError> {
        let check = self.resolve_check_value(condition, attributes, outer);
        let expected = &condition.value;

        match operator {
            Operator::Eq => Ok(values_equal(&check, expected)),
            Operator::Ne => Ok(!values_equal(&check, expected)),
            Operator::Includes => value_includes("includes", &check, expected),
            Operator::NotIncludes => value_includes("!includes", &check, expected).map(|b| !b),
            Operator::Empty => Ok(is_empty_value(&check)),
            Operator::NotEmpty => Ok(!is_empty_value(&check)),
            Operator::Lt => Ok(parse_int("<", &check)? < parse_int("<", expected)?),
            Operator::Gt => Ok(parse_int(">", &check)? > parse_int(">", expected)?),
            Operator::Le => Ok(parse_int("<=", &check)? <= parse_int("<=", expected)?),
            Operator::Ge => Ok(parse_int(">=", &check)? >= parse_int(">=", expected)?),
        }
    }

    /// Resolves the value a condition compares against.
    ///
    /// Environment keys win over attribute lookups. Attribute lookups honor
    /// the condition's scope, unwrap option objects, and fall back to the
    /// block's resolved defaults when the attribute is not set.
    fn resolve_check_value(
        &self,
        condition: &Condition,
        attributes: &Attributes,
        outer: Option<&Attributes>,
    ) -> Value {
        if let Some(key) = &condition.env_key {
            if let Some(value) = self.env.get(key) {
                return value.clone();
            }
        }

        if let Some(id) = &condition.id {
            let source = match condition.scope {
                ConditionScope::Outer => outer.unwrap_or(attributes),
                ConditionScope::Current => attributes,
            };
            if let Some(value) = source.get(id) {
                return unwrap_option_value(value).clone();
            }
            if let Some(defaults) = self.defaults {
                if let Some(value) = defaults.get(id) {
                    return unwrap_option_value(value).clone();
                }
            }
        }

        Value::Null
    }
}
