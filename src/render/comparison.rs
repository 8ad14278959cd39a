use super::{timestamp, PageOutput, GENERATOR, TEMPLATE_VERSION};
use crate::product::Product;
use crate::scoring::{Category, ComparisonFacts, OverallWinner, Side};
use serde_json::{json, Value};

/// Build the comparison page from two products and their computed facts.
///
/// The renderer is a pure mapping from facts to document structure; it
/// never recomputes winners and never fails on sparse products.
pub fn render_comparison(a: &Product, b: &Product, facts: &ComparisonFacts) -> PageOutput {
    let table = comparison_table(a, b, facts);
    let rows = table["rows"].as_array().cloned().unwrap_or_default();
    let count_wins = |side: &str| rows.iter().filter(|row| row["winner"] == side).count();
    let a_wins = count_wins("A");
    let b_wins = count_wins("B");
    let ties = count_wins("Tie");

    let verdict = &facts.verdict;
    let confidence =
        ((verdict.score_a.max(verdict.score_b) as f64 / Category::ALL.len() as f64) * 100.0)
            .min(100.0);

    let detailed_analysis = detailed_analysis(a, b, facts);
    let overall_value_name = match verdict.overall {
        OverallWinner::A => &a.name,
        _ => &b.name,
    };
    let cheaper_name = if a.price < b.price { &a.name } else { &b.name };

    let winning_rows = match verdict.overall {
        OverallWinner::A => a_wins,
        _ => b_wins,
    };

    let generated_at = timestamp();

    let content = json!({
        "metadata": {
            "template_version": TEMPLATE_VERSION,
            "generated_at": generated_at,
            "content_type": "comparison_page",
            "products_compared": [a.name, b.name],
            "analysis_depth": "comprehensive",
        },
        "summary": {
            "total_comparisons": rows.len(),
            "a_wins": a_wins,
            "b_wins": b_wins,
            "ties": ties,
            "overall_winner": verdict.overall,
            "confidence_score": confidence,
        },
        "products": {
            &a.name: a,
            &b.name: b,
        },
        "comparison_table": table,
        "detailed_analysis": detailed_analysis,
        "recommendations": {
            "by_audience": [
                {
                    "audience": "Budget-conscious buyers",
                    "recommendation": format!("{cheaper_name} (lower price)"),
                    "reasoning": "Based on price comparison and value analysis",
                    "priority": "high",
                },
                {
                    "audience": "Ingredient-focused users",
                    "recommendation": format!(
                        "{} (more unique ingredients)",
                        ingredient_conscious_pick(a, b, facts)
                    ),
                    "reasoning": "Based on unique ingredient analysis",
                    "priority": "medium",
                },
                {
                    "audience": "First-time users",
                    "recommendation": format!("Start with {cheaper_name}"),
                    "reasoning": "Lower investment for trying Vitamin C serums",
                    "priority": "medium",
                },
            ],
            "final_verdict": {
                "winner": overall_value_name,
                "reason": format!("Wins {winning_rows} out of {} categories", rows.len()),
                "confidence": format!("{confidence:.0}%"),
            },
        },
        "methodology": {
            "scoring_system": "Category-based comparison with weighted scoring",
            "factors_considered": [
                "Price",
                "Ingredients",
                "Benefits",
                "Skin Compatibility",
                "Value",
            ],
            "weight_assignment": "Equal weighting for simplicity",
            "limitations": [
                "Does not consider personal skin sensitivity",
                "Brand reputation not factored",
                "User reviews not included in analysis",
            ],
        },
        "interactive_features": {
            "sortable_table": true,
            "filter_by_category": true,
            "export_options": ["JSON", "CSV", "PDF"],
            "shareable": true,
        },
        "seo_optimization": {
            "title": format!("{} vs {} - Detailed Comparison", a.name, b.name),
            "meta_description": format!(
                "Comprehensive comparison between {} and {}. We analyze price, ingredients, benefits, and determine which is better for your needs.",
                a.name, b.name
            ),
            "keywords": [
                format!("{} vs {}", a.name, b.name),
                "comparison".to_string(),
                "which is better".to_string(),
                "skincare serum comparison".to_string(),
            ],
            "schema_markup": {
                "@type": "ComparativeAnalysis",
                "comparedProducts": [
                    {"@type": "Product", "name": a.name},
                    {"@type": "Product", "name": b.name},
                ],
                "datePublished": generated_at,
            },
        },
    });

    let metadata = json!({
        "generated_at": generated_at,
        "compared_products": [a.name, b.name],
        "generated_by": GENERATOR,
        "analysis_depth": "comprehensive",
    });

    PageOutput {
        page_type: "ComparisonPage".to_string(),
        content,
        metadata,
    }
}

fn side_str(side: Side) -> &'static str {
    match side {
        Side::A => "A",
        Side::B => "B",
    }
}

// One row per comparison axis, plus two text-only rows (skin type and
// concentration) that can genuinely tie.
fn comparison_table(a: &Product, b: &Product, facts: &ComparisonFacts) -> Value {
    let verdict = &facts.verdict;

    let skin_type_winner = if a.skin_type.iter().any(|s| s == "Combination") {
        "A"
    } else if b.skin_type.iter().any(|s| s == "Combination") {
        "B"
    } else {
        "Tie"
    };

    let concentration_winner = if a.concentration.contains("10%") {
        "A"
    } else if b.concentration.contains("10%") {
        "B"
    } else {
        "Tie"
    };

    json!({
        "headers": ["Feature", a.name, b.name, "Winner"],
        "rows": [
            {
                "feature": "Price",
                "value_a": a.price_formatted(),
                "value_b": b.price_formatted(),
                "winner": side_str(verdict.winner_of(Category::Price)),
                "difference": format!("₹{}", facts.price_difference.abs()),
                "importance": "high",
            },
            {
                "feature": "Ingredients",
                "value_a": a.ingredient_count().to_string(),
                "value_b": b.ingredient_count().to_string(),
                "winner": side_str(verdict.winner_of(Category::IngredientsCount)),
                "difference": a.ingredient_count().abs_diff(b.ingredient_count()).to_string(),
                "importance": "high",
            },
            {
                "feature": "Benefits",
                "value_a": a.benefit_count().to_string(),
                "value_b": b.benefit_count().to_string(),
                "winner": side_str(verdict.winner_of(Category::BenefitsCount)),
                "difference": a.benefit_count().abs_diff(b.benefit_count()).to_string(),
                "importance": "medium",
            },
            {
                "feature": "Skin Type",
                "value_a": a.skin_type_string(),
                "value_b": b.skin_type_string(),
                "winner": skin_type_winner,
                "difference": "Specialized vs General",
                "importance": "medium",
            },
            {
                "feature": "Concentration",
                "value_a": a.concentration,
                "value_b": b.concentration,
                "winner": concentration_winner,
                "difference": "Higher is better for efficacy",
                "importance": "medium",
            },
        ],
    })
}

fn detailed_analysis(a: &Product, b: &Product, facts: &ComparisonFacts) -> Value {
    let verdict = &facts.verdict;

    json!({
        "summary": {
            "total_score_a": verdict.score_a,
            "total_score_b": verdict.score_b,
            "overall_winner": verdict.overall,
            "recommendation": verdict.recommendation(&a.name, &b.name),
        },
        "ingredients_analysis": {
            "common_ingredients": facts.ingredients.common,
            "unique_to_a": facts.ingredients.unique_to_a,
            "unique_to_b": facts.ingredients.unique_to_b,
            "total_a": facts.ingredients.total_a,
            "total_b": facts.ingredients.total_b,
            "winner": verdict.winner_of(Category::IngredientsCount),
        },
        "benefits_analysis": {
            "common_benefits": facts.benefits.common,
            "unique_to_a": facts.benefits.unique_to_a,
            "unique_to_b": facts.benefits.unique_to_b,
            "total_a": facts.benefits.total_a,
            "total_b": facts.benefits.total_b,
            "winner": verdict.winner_of(Category::BenefitsCount),
        },
        "price_analysis": {
            "price_a": facts.price_a,
            "price_b": facts.price_b,
            "difference": facts.price_difference.abs(),
            "percentage_difference": facts.percentage_difference,
            "value_score_a": facts.value_score_a,
            "value_score_b": facts.value_score_b,
            "winner": verdict.winner_of(Category::Price),
        },
        "category_recommendations": {
            "for_budget_shoppers": format!(
                "{} (lower price)",
                if a.price < b.price { &a.name } else { &b.name }
            ),
            "for_ingredient_conscious": format!(
                "{} (more unique ingredients)",
                ingredient_conscious_pick(a, b, facts)
            ),
            "for_sensitive_skin": "Consult ingredient list for potential irritants",
            "for_quick_results": format!(
                "{} (specific targeting)",
                if a.benefits.iter().any(|benefit| benefit == "Brightening") {
                    &a.name
                } else {
                    &b.name
                }
            ),
        },
        "pros_and_cons": {
            &a.name: pros_and_cons_a(a, b),
            &b.name: pros_and_cons_b(a, b),
        },
        "final_verdict": {
            "best_for_budget": if a.price < b.price { &a.name } else { &b.name },
            "best_for_ingredients": if a.ingredient_count() > b.ingredient_count() {
                &a.name
            } else {
                &b.name
            },
            "best_for_skin_type": if a.skin_type.iter().any(|s| s == "Combination") {
                &a.name
            } else {
                &b.name
            },
            "overall_value": match verdict.overall {
                OverallWinner::A => &a.name,
                _ => &b.name,
            },
        },
    })
}

fn ingredient_conscious_pick<'a>(a: &'a Product, b: &'a Product, facts: &ComparisonFacts) -> &'a str {
    if facts.ingredients.unique_to_a.len() > facts.ingredients.unique_to_b.len() {
        &a.name
    } else {
        &b.name
    }
}

fn pros_and_cons_a(a: &Product, b: &Product) -> Value {
    let price_line = if a.price < b.price {
        format!("{} - more affordable", a.price_formatted())
    } else {
        format!("{} - premium formulation", a.price_formatted())
    };

    let pros = vec![
        price_line,
        format!("{} key ingredients", a.ingredient_count()),
        format!("Specifically for {} skin", a.skin_type_string()),
        format!("Benefits: {}", top_benefits(a)),
    ];

    let mut cons = vec![a.side_effects.clone()];
    if !a.skin_type.is_empty() && a.skin_type.len() < 3 {
        cons.push(format!("Limited to {} skin types", a.skin_type_string()));
    }

    json!({
        "pros": non_empty(pros),
        "cons": non_empty(cons),
    })
}

fn pros_and_cons_b(a: &Product, b: &Product) -> Value {
    let pros = vec![
        format!("{} - competitive pricing", b.price_formatted()),
        format!("Suitable for {}", b.skin_type_string()),
        format!("Benefits: {}", top_benefits(b)),
        format!("{} concentration", b.concentration),
    ];

    let mut cons = Vec::new();
    if b.ingredient_count() < a.ingredient_count() {
        cons.push(format!(
            "{} ingredients (fewer than {})",
            b.ingredient_count(),
            a.name
        ));
    }
    cons.push("Fictional product for comparison purposes".to_string());

    json!({
        "pros": non_empty(pros),
        "cons": non_empty(cons),
    })
}

fn top_benefits(product: &Product) -> String {
    product
        .benefits
        .iter()
        .take(2)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

fn non_empty(lines: Vec<String>) -> Vec<String> {
    lines.into_iter().filter(|line| !line.is_empty()).collect()
}
