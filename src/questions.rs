use crate::product::Product;
use serde::Serialize;

/// Categorized question set generated from a product record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionSet {
    pub informational: Vec<String>,
    pub safety: Vec<String>,
    pub usage: Vec<String>,
    pub purchase: Vec<String>,
    pub comparison: Vec<String>,
}

impl QuestionSet {
    pub fn total_count(&self) -> usize {
        self.by_category().iter().map(|(_, list)| list.len()).sum()
    }

    pub fn category_names(&self) -> Vec<&'static str> {
        self.by_category().into_iter().map(|(name, _)| name).collect()
    }

    /// Categories in fixed presentation order.
    pub fn by_category(&self) -> Vec<(&'static str, &[String])> {
        vec![
            ("informational", self.informational.as_slice()),
            ("safety", self.safety.as_slice()),
            ("usage", self.usage.as_slice()),
            ("purchase", self.purchase.as_slice()),
            ("comparison", self.comparison.as_slice()),
        ]
    }
}

/// Generate the fixed question catalogue, parameterized by product name.
pub fn generate_questions(product: &Product) -> QuestionSet {
    let owned = |items: &[&str]| -> Vec<String> {
        items.iter().map(|q| q.to_string()).collect()
    };

    QuestionSet {
        informational: vec![
            format!("What is {}?", product.name),
            "What does Vitamin C do for skin?".to_string(),
            "Who is this serum suitable for?".to_string(),
            "What skin types benefit most from this serum?".to_string(),
            "How long does one bottle typically last?".to_string(),
        ],
        safety: owned(&[
            "Are there any side effects?",
            "Is it safe for sensitive skin?",
            "Can I use it with other active ingredients?",
            "What should I do if I experience irritation?",
            "Is it safe to use during pregnancy?",
        ]),
        usage: owned(&[
            "How should I apply this serum?",
            "Can I use it both day and night?",
            "How many drops should I use per application?",
            "Should I follow with moisturizer?",
            "How long should I wait before applying other products?",
        ]),
        purchase: owned(&[
            "Is it worth the price?",
            "Where can I buy it?",
            "Is there a return policy?",
            "How does it compare to cheaper alternatives?",
            "Are there any discounts available?",
        ]),
        comparison: owned(&[
            "How does it compare to other Vitamin C serums?",
            "What makes it different from drugstore options?",
            "Is it better than DIY Vitamin C solutions?",
            "How does it compare to professional treatments?",
            "What are the alternatives in this price range?",
        ]),
    }
}
