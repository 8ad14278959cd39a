use crate::product::Product;
use serde_json::{json, Value};

/// Structured benefits content for a product page.
pub fn benefits_block(product: &Product) -> Value {
    let detailed: Vec<Value> = product
        .benefits
        .iter()
        .map(|benefit| {
            json!({
                "benefit": benefit,
                "description": describe(benefit),
                "timeframe": "Visible results in 4-8 weeks with regular use",
            })
        })
        .collect();

    json!({
        "benefits_list": product.benefits,
        "detailed_benefits": detailed,
        "benefits_summary": summary_sentence(product),
        "key_advantage": format!(
            "Combines {} active ingredients for multiple benefits",
            product.ingredient_count()
        ),
        "usage_tip": "For best results, use consistently as part of your daily skincare routine",
    })
}

fn describe(benefit: &str) -> String {
    match benefit {
        "Brightening" => "Reduces dullness and evens out skin tone for a radiant glow".to_string(),
        "Fades dark spots" => "Targets hyperpigmentation and sun spots over time".to_string(),
        "Hydration" => "Locks in moisture for plump, supple skin".to_string(),
        "Anti-aging" => "Reduces appearance of fine lines and wrinkles".to_string(),
        "Protection" => {
            "Provides antioxidant protection against environmental damage".to_string()
        }
        other => format!(
            "Provides {} benefits for improved skin health",
            other.to_lowercase()
        ),
    }
}

// Oxford-joins the benefit list; an empty list degrades to a generic
// sentence instead of failing.
fn summary_sentence(product: &Product) -> String {
    let benefits = &product.benefits;
    match benefits.len() {
        0 => format!(
            "{} offers comprehensive skincare benefits through its advanced formulation.",
            product.name
        ),
        1 => format!(
            "{} offers comprehensive skincare benefits including {} through its advanced formulation.",
            product.name,
            benefits[0].to_lowercase()
        ),
        n => format!(
            "{} offers comprehensive skincare benefits including {}, and {} through its advanced formulation.",
            product.name,
            benefits[..n - 1].join(", "),
            benefits[n - 1].to_lowercase()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::reference_product;

    #[test]
    fn test_known_benefit_gets_specific_description() {
        let mut product = reference_product();
        product.benefits = vec!["Brightening".to_string()];
        let block = benefits_block(&product);
        let description = block["detailed_benefits"][0]["description"].as_str().unwrap();
        assert!(description.contains("radiant glow"));
    }

    #[test]
    fn test_unknown_benefit_gets_generic_description() {
        let mut product = reference_product();
        product.benefits = vec!["Soothing".to_string()];
        let block = benefits_block(&product);
        let description = block["detailed_benefits"][0]["description"].as_str().unwrap();
        assert_eq!(description, "Provides soothing benefits for improved skin health");
    }

    #[test]
    fn test_summary_joins_multiple_benefits() {
        let product = reference_product();
        let block = benefits_block(&product);
        let summary = block["benefits_summary"].as_str().unwrap();
        assert!(summary.contains("Basic Brightening, and light hydration"));
    }

    #[test]
    fn test_empty_benefits_degrade_gracefully() {
        let mut product = reference_product();
        product.benefits = Vec::new();
        let block = benefits_block(&product);
        let summary = block["benefits_summary"].as_str().unwrap();
        assert!(summary.ends_with("advanced formulation."));
        assert_eq!(block["detailed_benefits"].as_array().unwrap().len(), 0);
    }
}
