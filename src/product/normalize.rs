use super::types::Product;
use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load a raw product input document from a JSON file.
pub fn load_input(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file at {}", path.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Invalid JSON in input file {}", path.display()))
}

/// Build a `Product` from a flat key-value document with aliased field names.
///
/// Recognized aliases:
/// - name: `product_name`, `name`
/// - ingredients: `key_ingredients`, `ingredients`, `keyIngredients`
/// - usage: `how_to_use`, `usage`, `howToUse`
/// - side effects: `side_effects`, `sideEffects`
///
/// List-valued fields also accept a single string. Missing or unparsable
/// fields fall back to defaults (empty text, empty list, price 0) rather
/// than failing; the only hard error is input that is not a JSON object.
pub fn normalize(raw: &Value) -> Result<Product> {
    let fields = raw
        .as_object()
        .context("Product input must be a JSON object")?;

    let name = first_text(fields, &["product_name", "name"])
        .unwrap_or_else(|| "Unknown Product".to_string());

    let product = Product {
        name,
        concentration: first_text(fields, &["concentration"]).unwrap_or_default(),
        skin_type: string_or_list(fields, &["skin_type"]),
        ingredients: string_or_list(fields, &["key_ingredients", "ingredients", "keyIngredients"]),
        benefits: string_or_list(fields, &["benefits"]),
        usage: first_text(fields, &["how_to_use", "usage", "howToUse"]).unwrap_or_default(),
        side_effects: first_text(fields, &["side_effects", "sideEffects"]).unwrap_or_default(),
        price: parse_price(fields.get("price")),
    };

    debug!(
        name = %product.name,
        ingredients = product.ingredient_count(),
        benefits = product.benefit_count(),
        price = product.price,
        "normalized product input"
    );

    Ok(product)
}

/// First non-empty string value among the aliased keys.
fn first_text(fields: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| fields.get(*key))
        .filter_map(Value::as_str)
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

/// Field that may be a single string or a list of strings.
fn string_or_list(fields: &Map<String, Value>, keys: &[&str]) -> Vec<String> {
    for key in keys {
        match fields.get(*key) {
            Some(Value::String(s)) if !s.is_empty() => return vec![s.clone()],
            Some(Value::Array(items)) if !items.is_empty() => {
                return items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect();
            }
            _ => {}
        }
    }
    Vec::new()
}

/// Price may arrive as a number or a numeric string; anything else is 0.
/// Negative values clamp to 0.
fn parse_price(value: Option<&Value>) -> u64 {
    match value {
        Some(Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                i.max(0) as u64
            } else {
                n.as_f64().map(|f| f.max(0.0) as u64).unwrap_or(0)
            }
        }
        Some(Value::String(s)) => s.trim().parse::<i64>().map(|i| i.max(0) as u64).unwrap_or(0),
        _ => 0,
    }
}
