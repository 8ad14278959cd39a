use super::types::Product;

/// Check business rules on a normalized product.
/// Returns all findings at once (not just the first). Findings are
/// warnings: normalization default-fills missing input, so a sparse
/// product still flows through the pipeline.
pub fn check_product(product: &Product) -> Vec<String> {
    let mut warnings = Vec::new();

    if product.price == 0 {
        warnings.push("product.price: missing or unparsable, defaulted to 0".to_string());
    }

    if product.ingredients.is_empty() {
        warnings.push("product.ingredients: expected at least one ingredient".to_string());
    }

    if product.benefits.is_empty() {
        warnings.push("product.benefits: expected at least one benefit".to_string());
    }

    if product.skin_type.is_empty() {
        warnings.push("product.skin_type: no skin types listed".to_string());
    }

    warnings
}
