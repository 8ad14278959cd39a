use super::{timestamp, PageOutput, GENERATOR, TEMPLATE_VERSION};
use crate::blocks;
use crate::product::Product;
use serde_json::{json, Value};

/// Build the product detail page: content sections plus layout,
/// SEO and delivery metadata.
pub fn render_product_page(product: &Product) -> PageOutput {
    let description = overview_description(product);
    let generated_at = timestamp();

    let sections = json!({
        "header": {
            "title": product.name,
            "subtitle": format!(
                "{} for {} Skin",
                product.concentration,
                product.skin_type_string()
            ),
            "tagline": "Advanced Skincare Serum",
        },
        "overview": {
            "description": description,
            "key_features": [
                format!("Concentration: {}", product.concentration),
                format!("Skin Type: {}", product.skin_type_string()),
                format!("Key Ingredients: {}", product.ingredients.join(", ")),
            ],
        },
        "benefits": blocks::benefits_block(product),
        "usage_instructions": blocks::usage_block(product),
        "safety_information": blocks::safety_block(product),
        "pricing": blocks::price_block(product),
        "call_to_action": {
            "primary": format!("Get {} for {}", product.name, product.price_formatted()),
            "secondary": "Free shipping on orders above ₹999",
        },
    });

    let section_count = sections.as_object().map(|s| s.len()).unwrap_or(0);

    let content = json!({
        "metadata": {
            "template_version": TEMPLATE_VERSION,
            "generated_at": generated_at,
            "content_type": "product_page",
            "sections_count": section_count,
            "page_structure": "modular",
        },
        "page_structure": {
            "header": {"type": "hero", "layout": "centered", "priority": 1},
            "overview": {"type": "intro", "layout": "two_column", "priority": 2},
            "benefits": {"type": "features", "layout": "grid", "priority": 3},
            "usage": {"type": "instructions", "layout": "step_by_step", "priority": 4},
            "safety": {"type": "disclaimer", "layout": "warning", "priority": 5},
            "pricing": {"type": "pricing", "layout": "comparison", "priority": 6},
            "cta": {"type": "action", "layout": "button_group", "priority": 7},
        },
        "content": sections,
        "seo_optimization": {
            "heading_structure": ["h1", "h2", "h3", "h2", "h3", "h2", "h2"],
            "keyword_density": keyword_density(product),
            "meta_description": meta_description(&description),
            "schema_markup": {
                "@type": "Product",
                "name": product.name,
                "description": description,
                "offers": {
                    "@type": "Offer",
                    "price": product.price,
                    "priceCurrency": "INR",
                },
            },
        },
        "accessibility": {
            "alt_text_provided": true,
            "aria_labels": true,
            "contrast_ratio": "AAA compliant",
            "keyboard_navigable": true,
        },
    });

    let metadata = json!({
        "generated_at": generated_at,
        "product_name": product.name,
        "generated_by": GENERATOR,
        "seo": blocks::seo_metadata(product),
        "sections_generated": section_count,
    });

    PageOutput {
        page_type: "ProductPage".to_string(),
        content,
        metadata,
    }
}

fn overview_description(product: &Product) -> String {
    if product.ingredients.is_empty() {
        "A skincare serum for visible brightening and spot reduction.".to_string()
    } else {
        format!(
            "A potent serum featuring {} for visible brightening and spot reduction.",
            product.ingredients.join(", ")
        )
    }
}

fn keyword_density(product: &Product) -> Value {
    let words: Vec<String> = product
        .name
        .split_whitespace()
        .map(str::to_lowercase)
        .collect();

    json!({
        "primary": words.first().map(String::as_str).unwrap_or("product"),
        "secondary": words.iter().skip(1).take(2).collect::<Vec<_>>(),
    })
}

fn meta_description(description: &str) -> String {
    let truncated: String = description.chars().take(155).collect();
    format!("{truncated}...")
}
