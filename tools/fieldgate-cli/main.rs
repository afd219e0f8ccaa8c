use clap::Parser;
use fieldgate::prelude::*;
use std::fs;
use std::time::Instant;

/// Inspect a block schema: resolved defaults and field visibility
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the block schema JSON file
    schema_path: String,
    /// Optional path to a JSON object of current attribute values
    attributes_path: Option<String>,
    /// Optional path to a JSON object of environment values (admin flags)
    #[arg(short, long)]
    environment_path: Option<String>,
}

fn main() {
    let cli = Cli::parse();
    let total_start = Instant::now();

    // --- 1. File Loading ---
    let schema_json = fs::read_to_string(&cli.schema_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read schema file '{}': {}",
            &cli.schema_path, e
        ))
    });

    let attributes = match &cli.attributes_path {
        Some(path) => load_json_object(path, "attributes"),
        None => Attributes::new(),
    };
    let env: Environment = match &cli.environment_path {
        Some(path) => load_json_object(path, "environment").into_iter().collect(),
        None => Environment::new(),
    };

    // --- 2. Parsing and Conversion ---
    let parse_start = Instant::now();
    let schema = BlockSchema::from_json(&schema_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse schema: {}", e)));
    let parse_duration = parse_start.elapsed();

    // --- 3. Defaults Resolution ---
    let defaults_start = Instant::now();
    let defaults = resolve_defaults(&schema.fields, &attributes);
    let defaults_duration = defaults_start.elapsed();

    // --- 4. Visibility Evaluation ---
    let eval_start = Instant::now();
    let evaluator = ConditionEvaluator::new(&env).with_defaults(&defaults);
    let visible = evaluator.visible_fields(&schema.fields, &attributes, None);
    let eval_duration = eval_start.elapsed();

    // --- 5. Results and Summary ---
    println!("Block: {}", schema.name);

    println!("\n--- Resolved Defaults ---");
    let mut ids: Vec<&String> = defaults.keys().collect();
    ids.sort();
    for id in ids {
        println!("  {} = {}", id, defaults[id]);
    }

    println!("\n--- Visible Controls ---");
    if visible.is_empty() {
        println!("  (none)");
    }
    for field in &visible {
        println!(
            "  {} ({:?})",
            field.id.as_deref().unwrap_or("<anonymous>"),
            field.kind
        );
    }

    println!("\n--- Performance Summary ---");
    println!("Schema Parsing:       {:?}", parse_duration);
    println!("Defaults Resolution:  {:?}", defaults_duration);
    println!("Visibility Pass:      {:?}", eval_duration);
    println!("-----------------------------");
    println!("Total Execution:      {:?}", total_start.elapsed());
}

/// Loads a JSON file that must contain a top-level object.
fn load_json_object(path: &str, what: &str) -> Attributes {
    let json = fs::read_to_string(path).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to read {} file '{}': {}", what, path, e))
    });
    let value: serde_json::Value = serde_json::from_str(&json).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to parse {} JSON '{}': {}", what, path, e))
    });
    match value {
        serde_json::Value::Object(map) => map.into_iter().collect(),
        _ => exit_with_error(&format!("{} file '{}' must be a JSON object", what, path)),
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
