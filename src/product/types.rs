use serde::{Deserialize, Serialize};

/// Normalized skincare product record.
///
/// Built once by the input normalizer and treated as read-only by every
/// downstream step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub concentration: String,
    pub skin_type: Vec<String>,
    pub ingredients: Vec<String>,
    pub benefits: Vec<String>,
    pub usage: String,
    pub side_effects: String,
    pub price: u64, // INR
}

impl Product {
    pub fn ingredient_count(&self) -> usize {
        self.ingredients.len()
    }

    pub fn benefit_count(&self) -> usize {
        self.benefits.len()
    }

    /// Skin types as a comma-separated string
    pub fn skin_type_string(&self) -> String {
        self.skin_type.join(", ")
    }

    /// Price formatted in rupees
    pub fn price_formatted(&self) -> String {
        format!("₹{}", self.price)
    }

    /// One-line product summary
    pub fn summary(&self) -> String {
        format!(
            "{} - {} for {} skin",
            self.name,
            self.concentration,
            self.skin_type_string()
        )
    }
}

/// The fictional competitor every comparison page runs against, unless the
/// config provides its own reference product.
pub fn reference_product() -> Product {
    Product {
        name: "RadiantX Serum".to_string(),
        concentration: "5% Vitamin C".to_string(),
        skin_type: vec!["All Skin Types".to_string()],
        ingredients: vec!["Vitamin C".to_string(), "Glycerin".to_string()],
        benefits: vec![
            "Basic Brightening".to_string(),
            "Light Hydration".to_string(),
        ],
        usage: "Apply once daily, preferably in the morning".to_string(),
        side_effects: "Minimal to none for most users".to_string(),
        price: 899,
    }
}
