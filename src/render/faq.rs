use super::{timestamp, PageOutput, GENERATOR, TEMPLATE_VERSION};
use crate::blocks;
use crate::product::Product;
use crate::questions::QuestionSet;
use serde_json::{json, Map, Value};

/// Build the FAQ page from the question set and product record.
///
/// One question is answered per category. Empty product fields shorten
/// the answers but never fail the render.
pub fn render_faq(product: &Product, questions: &QuestionSet) -> PageOutput {
    let qa_pairs = answer_questions(product, questions);
    let generated_at = timestamp();

    let items: Vec<Value> = qa_pairs
        .iter()
        .enumerate()
        .map(|(idx, (question, answer))| {
            json!({
                "id": format!("faq_{:03}", idx + 1),
                "question": question,
                "answer": answer,
                "category": categorize_question(question),
                "importance": if idx < 3 { "high" } else { "medium" },
                "last_updated": generated_at,
            })
        })
        .collect();

    // Insertion order, so the first category answered stays first.
    let mut categories: Vec<(String, Vec<String>)> = Vec::new();
    for item in &items {
        let category = item["category"].as_str().unwrap_or("general").to_string();
        let id = item["id"].as_str().unwrap_or_default().to_string();
        match categories.iter_mut().find(|(name, _)| *name == category) {
            Some((_, ids)) => ids.push(id),
            None => categories.push((category, vec![id])),
        }
    }

    // First category in insertion order wins ties.
    let mut most_common = "general";
    let mut most_common_len = 0;
    for (name, ids) in &categories {
        if ids.len() > most_common_len {
            most_common = name;
            most_common_len = ids.len();
        }
    }

    let summary = json!({
        "total_questions": items.len(),
        "categories_count": categories.len(),
        "most_common_category": most_common,
        "coverage_score": (items.len() * 10).min(100),
    });

    let by_category: Map<String, Value> = categories
        .iter()
        .map(|(name, ids)| (name.clone(), json!(ids)))
        .collect();

    let ids_with_importance = |level: &str| -> Vec<Value> {
        items
            .iter()
            .filter(|item| item["importance"] == level)
            .map(|item| item["id"].clone())
            .collect()
    };
    let high = ids_with_importance("high");
    let medium = ids_with_importance("medium");
    let low = ids_with_importance("low");

    let category_index: Vec<Value> = categories
        .iter()
        .map(|(name, ids)| {
            json!({
                "name": name,
                "question_count": ids.len(),
                "question_ids": ids,
            })
        })
        .collect();

    let content = json!({
        "metadata": {
            "template_version": TEMPLATE_VERSION,
            "generated_at": generated_at,
            "content_type": "faq",
        },
        "summary": summary,
        "categories": category_index,
        "questions": items,
        "navigation": {
            "by_category": by_category,
            "by_importance": {
                "high": high,
                "medium": medium,
                "low": low,
            },
        },
    });

    let metadata = json!({
        "generated_at": generated_at,
        "total_questions": qa_pairs.len(),
        "categories_covered": questions.category_names(),
        "seo": blocks::seo_metadata(product),
        "generated_by": GENERATOR,
    });

    PageOutput {
        page_type: "FAQ".to_string(),
        content,
        metadata,
    }
}

// The first question of each category, answered from product fields.
fn answer_questions(product: &Product, questions: &QuestionSet) -> Vec<(String, String)> {
    let mut pairs = Vec::new();

    if let Some(question) = questions.informational.first() {
        pairs.push((
            question.clone(),
            format!(
                "{} is a {} serum designed for {} skin types. It features {} for effective skincare.",
                product.name,
                product.concentration,
                product.skin_type_string(),
                product.ingredients.join(", ")
            ),
        ));
    }

    if let Some(question) = questions.safety.first() {
        pairs.push((question.clone(), blocks::side_effect_summary(product)));
    }

    if let Some(question) = questions.usage.first() {
        let answer = if product.usage.is_empty() {
            "Apply as directed by the instructions".to_string()
        } else {
            product.usage.clone()
        };
        pairs.push((question.clone(), answer));
    }

    if let Some(question) = questions.purchase.first() {
        pairs.push((
            question.clone(),
            format!(
                "At {}, it offers good value compared to similar serums with {}.",
                product.price_formatted(),
                product.concentration
            ),
        ));
    }

    if let Some(question) = questions.comparison.first() {
        let answer = match product.ingredients.first() {
            Some(first) => format!(
                "{} contains {} key ingredients including {}, making it more comprehensive than basic Vitamin C serums that typically have only one active ingredient.",
                product.name,
                product.ingredient_count(),
                first
            ),
            None => format!(
                "{} focuses on a streamlined formulation compared to other Vitamin C serums.",
                product.name
            ),
        };
        pairs.push((question.clone(), answer));
    }

    pairs
}

/// Keyword-based question categorization.
pub fn categorize_question(question: &str) -> &'static str {
    let question = question.to_lowercase();
    let contains_any =
        |keywords: &[&str]| keywords.iter().any(|keyword| question.contains(keyword));

    if contains_any(&["what is", "what does", "explain", "describe"]) {
        "informational"
    } else if contains_any(&["how to", "how do i", "instructions", "apply"]) {
        "usage"
    } else if contains_any(&["safe", "side effect", "risk", "pregnant"]) {
        "safety"
    } else if contains_any(&["price", "buy", "purchase", "cost", "worth"]) {
        "purchase"
    } else if contains_any(&["compare", "vs", "difference", "alternative"]) {
        "comparison"
    } else if contains_any(&["ingredient", "formula", "composition"]) {
        "ingredients"
    } else {
        "general"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::reference_product;
    use crate::questions::generate_questions;

    fn render() -> PageOutput {
        let product = reference_product();
        let questions = generate_questions(&product);
        render_faq(&product, &questions)
    }

    #[test]
    fn test_page_envelope() {
        let page = render();
        assert_eq!(page.page_type, "FAQ");
        assert_eq!(page.metadata["generated_by"], "pagegen");
        assert_eq!(page.metadata["total_questions"], 5);
        assert!(page.metadata["generated_at"].is_string());
    }

    #[test]
    fn test_one_answer_per_category() {
        let page = render();
        let items = page.content["questions"].as_array().unwrap();
        assert_eq!(items.len(), 5);
        assert_eq!(items[0]["id"], "faq_001");
        assert_eq!(items[4]["id"], "faq_005");
    }

    #[test]
    fn test_importance_split() {
        let page = render();
        let high = page.content["navigation"]["by_importance"]["high"]
            .as_array()
            .unwrap();
        let medium = page.content["navigation"]["by_importance"]["medium"]
            .as_array()
            .unwrap();
        assert_eq!(high.len(), 3);
        assert_eq!(medium.len(), 2);
    }

    #[test]
    fn test_summary_coverage() {
        let page = render();
        assert_eq!(page.content["summary"]["coverage_score"], 50);
        assert_eq!(page.content["summary"]["total_questions"], 5);
    }

    #[test]
    fn test_categorize_question_keywords() {
        assert_eq!(categorize_question("What is this serum?"), "informational");
        assert_eq!(categorize_question("How should I apply this serum?"), "usage");
        assert_eq!(categorize_question("Are there any side effects?"), "safety");
        assert_eq!(categorize_question("Is it worth the price?"), "purchase");
        assert_eq!(
            categorize_question("How does it compare to other serums?"),
            "comparison"
        );
        assert_eq!(categorize_question("Which ingredient matters most?"), "ingredients");
        assert_eq!(categorize_question("Tell me more"), "general");
    }

    #[test]
    fn test_empty_product_fields_still_render() {
        let product = crate::product::Product {
            name: "Unknown Product".to_string(),
            concentration: String::new(),
            skin_type: Vec::new(),
            ingredients: Vec::new(),
            benefits: Vec::new(),
            usage: String::new(),
            side_effects: String::new(),
            price: 0,
        };
        let questions = generate_questions(&product);
        let page = render_faq(&product, &questions);

        let items = page.content["questions"].as_array().unwrap();
        assert_eq!(items.len(), 5);
        let usage_answer = items[2]["answer"].as_str().unwrap();
        assert_eq!(usage_answer, "Apply as directed by the instructions");
    }
}
