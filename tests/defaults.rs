//! Tests for the defaults resolver and template composition.
mod common;
use common::*;
use fieldgate::defaults::NAMESPACE_KEY;
use fieldgate::prelude::*;
use serde_json::json;

#[test]
fn declared_default_is_used() {
    let fields = vec![field_with_default("x", ControlType::Text, json!("hi"))];
    let defaults = resolve_defaults(&fields, &Attributes::new());
    assert_eq!(defaults["x"], json!("hi"));
}

#[test]
fn existing_value_wins_over_default() {
    let fields = vec![field_with_default("x", ControlType::Text, json!("hi"))];
    let existing = attrs(&[("x", json!("existing"))]);
    let defaults = resolve_defaults(&fields, &existing);
    assert_eq!(defaults["x"], json!("existing"));
}

#[test]
fn falsy_existing_value_does_not_win() {
    let fields = vec![field_with_default("x", ControlType::Text, json!("hi"))];
    let existing = attrs(&[("x", json!(""))]);
    let defaults = resolve_defaults(&fields, &existing);
    assert_eq!(defaults["x"], json!("hi"));
}

#[test]
fn number_defaults_are_coerced() {
    let fields = vec![field_with_default("n", ControlType::Number, json!("5"))];
    let defaults = resolve_defaults(&fields, &Attributes::new());
    assert_eq!(defaults["n"], json!(5));

    let fields = vec![field_with_default("r", ControlType::Range, json!("2.5"))];
    let defaults = resolve_defaults(&fields, &Attributes::new());
    assert_eq!(defaults["r"], json!(2.5));
}

#[test]
fn unparseable_number_default_fails_safe_to_empty() {
    let fields = vec![field_with_default("n", ControlType::Number, json!("abc"))];
    let defaults = resolve_defaults(&fields, &Attributes::new());
    assert_eq!(defaults["n"], json!(""));
}

#[test]
fn number_coercion_respects_the_options_guard() {
    // Default matches one of the options: coerced.
    let mut field = field_with_default("n", ControlType::Number, json!("5"));
    field.options = vec![
        FieldOption {
            value: json!("5"),
            label: None,
        },
        FieldOption {
            value: json!("10"),
            label: None,
        },
    ];
    let defaults = resolve_defaults(&[field], &Attributes::new());
    assert_eq!(defaults["n"], json!(5));

    // Default matches none of the options: passed through untouched.
    let mut field = field_with_default("n", ControlType::Number, json!("7"));
    field.options = vec![FieldOption {
        value: json!("5"),
        label: None,
    }];
    let defaults = resolve_defaults(&[field], &Attributes::new());
    assert_eq!(defaults["n"], json!("7"));
}

#[test]
fn false_default_is_preserved() {
    let fields = vec![field_with_default("t", ControlType::Toggle, json!(false))];
    let defaults = resolve_defaults(&fields, &Attributes::new());
    assert_eq!(defaults["t"], json!(false));
}

#[test]
fn missing_default_resolves_to_empty_string() {
    let fields = vec![text_field("x")];
    let defaults = resolve_defaults(&fields, &Attributes::new());
    assert_eq!(defaults["x"], json!(""));
}

#[test]
fn fields_without_an_id_are_skipped() {
    let mut anonymous = text_field("ignored");
    anonymous.id = None;
    let defaults = resolve_defaults(&[anonymous], &Attributes::new());
    assert!(defaults.is_empty());
}

#[test]
fn groups_flatten_into_one_namespace() {
    let fields = vec![FieldNode::group(
        "layout",
        vec![
            field_with_default("columns", ControlType::Number, json!("3")),
            FieldNode::group(
                "spacing",
                vec![field_with_default("gap", ControlType::Text, json!("1rem"))],
            ),
        ],
    )];
    let defaults = resolve_defaults(&fields, &Attributes::new());

    assert_eq!(defaults["columns"], json!(3));
    assert_eq!(defaults["gap"], json!("1rem"));
    // The group ids themselves contribute no entries.
    assert!(!defaults.contains_key("layout"));
    assert!(!defaults.contains_key("spacing"));
}

#[test]
fn tabs_flatten_like_groups() {
    let schema = BlockSchema::from_json(
        r##"{
            "name": "demo/tabs",
            "attributes": [
                { "id": "appearance", "type": "tabs", "tabs": [
                    { "title": "Colors", "attributes": [
                        { "id": "background", "type": "color", "default": "#fff" }
                    ] },
                    { "title": "Type", "attributes": [
                        { "id": "size", "type": "number", "default": "16" }
                    ] }
                ] }
            ]
        }"##,
    )
    .unwrap();

    let defaults = resolve_defaults(&schema.fields, &Attributes::new());
    assert_eq!(defaults["background"], json!("#fff"));
    assert_eq!(defaults["size"], json!(16));
}

#[test]
fn sibling_fields_sharing_an_id_overwrite_in_order() {
    let fields = vec![
        field_with_default("x", ControlType::Text, json!("first")),
        field_with_default("x", ControlType::Text, json!("second")),
    ];
    let defaults = resolve_defaults(&fields, &Attributes::new());
    assert_eq!(defaults["x"], json!("second"));
}

#[test]
fn template_composition_nests_and_keeps_flat_copy() {
    let schema = BlockSchema {
        name: "demo/hero".to_string(),
        fields: vec![
            field_with_default("layout", ControlType::Select, json!("wide")),
            field_with_default("columns", ControlType::Number, json!("3")),
        ],
    };
    let usage = TemplateUsage {
        attributes: attrs(&[("layout", json!("boxed"))]),
    };

    let merged = defaults_from_template(&schema, &usage);

    // Inline overrides win, declared defaults fill the rest.
    assert_eq!(merged["layout"], json!("boxed"));
    assert_eq!(merged["columns"], json!(3));

    // Dual access: the same map is nested under the namespace key.
    let nested = &merged[NAMESPACE_KEY]["attributes"];
    assert_eq!(nested["layout"], json!("boxed"));
    assert_eq!(nested["columns"], json!(3));
}

#[test]
fn template_overrides_must_be_an_object() {
    let err = TemplateUsage::from_value("demo/hero", json!(["not", "a", "map"]));
    assert!(err.is_err());

    let usage = TemplateUsage::from_value("demo/hero", json!({"layout": "boxed"})).unwrap();
    assert_eq!(usage.attributes["layout"], json!("boxed"));
}
