use crate::product::Product;
use serde_json::{json, Value};
use std::collections::BTreeSet;

/// SEO metadata for any page about this product.
pub fn seo_metadata(product: &Product) -> Value {
    let title = format!("{} - Benefits, Usage & Review", product.name);

    let mut description_parts = Vec::new();
    if !product.benefits.is_empty() {
        let top: Vec<&str> = product.benefits.iter().take(2).map(String::as_str).collect();
        description_parts.push(format!("Benefits include {}", top.join(", ")));
    }
    if !product.ingredients.is_empty() {
        description_parts.push(format!("Key ingredients: {}", product.ingredients.join(", ")));
    }
    let description = format!(
        "{}. Price: {}",
        description_parts.join(". "),
        product.price_formatted()
    );

    // Sorted set keeps keyword output stable across runs.
    let keywords: Vec<String> = product
        .name
        .split_whitespace()
        .map(str::to_lowercase)
        .chain(product.ingredients.iter().map(|i| i.to_lowercase()))
        .chain(product.benefits.iter().map(|b| b.to_lowercase()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .take(10)
        .collect();

    json!({
        "title": title,
        "meta_description": truncate(&description, 160),
        "keywords": keywords,
        "og_tags": {
            "og:title": title,
            "og:description": truncate(&description, 300),
            "og:type": "product",
        },
    })
}

// Character-based, not byte-based: descriptions carry the rupee sign.
fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::reference_product;

    #[test]
    fn test_title_and_description() {
        let seo = seo_metadata(&reference_product());
        assert_eq!(seo["title"], "RadiantX Serum - Benefits, Usage & Review");
        let description = seo["meta_description"].as_str().unwrap();
        assert!(description.starts_with("Benefits include Basic Brightening, Light Hydration"));
        assert!(description.ends_with("Price: ₹899"));
    }

    #[test]
    fn test_keywords_lowercased_sorted_capped() {
        let seo = seo_metadata(&reference_product());
        let keywords: Vec<&str> = seo["keywords"]
            .as_array()
            .unwrap()
            .iter()
            .map(|k| k.as_str().unwrap())
            .collect();
        assert!(keywords.len() <= 10);
        assert!(keywords.contains(&"radiantx"));
        assert!(keywords.contains(&"vitamin c"));
        let mut sorted = keywords.clone();
        sorted.sort_unstable();
        assert_eq!(keywords, sorted);
    }

    #[test]
    fn test_meta_description_truncates_on_char_boundary() {
        let mut product = reference_product();
        product.ingredients = vec!["₹".repeat(200)];
        let seo = seo_metadata(&product);
        assert_eq!(seo["meta_description"].as_str().unwrap().chars().count(), 160);
    }

    #[test]
    fn test_empty_lists_still_produce_metadata() {
        let mut product = reference_product();
        product.ingredients = Vec::new();
        product.benefits = Vec::new();
        let seo = seo_metadata(&product);
        assert_eq!(seo["meta_description"], ". Price: ₹899");
    }
}
