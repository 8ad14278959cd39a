use super::voter::{self, CategoryMetrics, Verdict};
use crate::product::Product;
use serde::Serialize;
use std::collections::BTreeSet;

/// Set-level overlap between two case-folded attribute lists.
///
/// Entries are lowercased before comparison, so "Vitamin C" and
/// "vitamin c" count as the same item. Ordered sets keep serialization
/// deterministic.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SetComparison {
    pub common: BTreeSet<String>,
    pub unique_to_a: BTreeSet<String>,
    pub unique_to_b: BTreeSet<String>,
    pub total_a: usize,
    pub total_b: usize,
}

/// Everything the renderers need to know about a product pair.
///
/// Computed fresh on every call and never persisted. The function of the
/// (A, B) pair is pure but not commutative: swapping the operands swaps
/// which side's unique sets and price sign are reported.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonFacts {
    pub ingredients: SetComparison,
    pub benefits: SetComparison,
    pub price_a: u64,
    pub price_b: u64,
    /// Signed delta, product B minus product A.
    pub price_difference: i64,
    /// |priceA / priceB - 1| x 100, one decimal. 0.0 when product B is
    /// free, where the ratio is undefined.
    pub percentage_difference: f64,
    /// Combined value scores, three decimals. The voter compares the
    /// unrounded figures.
    pub value_score_a: f64,
    pub value_score_b: f64,
    pub verdict: Verdict,
}

/// Compare two products across ingredients, benefits, price and value.
pub fn compute_comparison(a: &Product, b: &Product) -> ComparisonFacts {
    let ingredients = compare_sets(&a.ingredients, &b.ingredients);
    let benefits = compare_sets(&a.benefits, &b.benefits);

    let price_difference = b.price as i64 - a.price as i64;
    let percentage_difference = if b.price > 0 {
        round1((a.price as f64 / b.price as f64 - 1.0).abs() * 100.0)
    } else {
        0.0
    };

    let value_a = value_score(a);
    let value_b = value_score(b);

    let verdict = voter::vote(&CategoryMetrics {
        ingredients_a: a.ingredient_count(),
        ingredients_b: b.ingredient_count(),
        benefits_a: a.benefit_count(),
        benefits_b: b.benefit_count(),
        price_a: a.price,
        price_b: b.price,
        value_a,
        value_b,
    });

    ComparisonFacts {
        ingredients,
        benefits,
        price_a: a.price,
        price_b: b.price,
        price_difference,
        percentage_difference,
        value_score_a: round3(value_a),
        value_score_b: round3(value_b),
        verdict,
    }
}

/// Ingredient and benefit counts normalized by price in hundreds of
/// rupees. Both terms are 0 for a free product, keeping the function
/// total.
fn value_score(product: &Product) -> f64 {
    if product.price == 0 {
        return 0.0;
    }
    let per_hundred = product.price as f64 / 100.0;
    product.ingredient_count() as f64 / per_hundred + product.benefit_count() as f64 / per_hundred
}

fn compare_sets(a: &[String], b: &[String]) -> SetComparison {
    let fold = |items: &[String]| -> BTreeSet<String> {
        items.iter().map(|item| item.to_lowercase()).collect()
    };
    let set_a = fold(a);
    let set_b = fold(b);

    SetComparison {
        common: set_a.intersection(&set_b).cloned().collect(),
        unique_to_a: set_a.difference(&set_b).cloned().collect(),
        unique_to_b: set_b.difference(&set_a).cloned().collect(),
        total_a: a.len(),
        total_b: b.len(),
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::reference_product;
    use crate::scoring::voter::{Category, OverallWinner, Side};
    use proptest::prelude::*;

    fn glowboost() -> Product {
        Product {
            name: "GlowBoost Vitamin C Serum".to_string(),
            concentration: "10% Vitamin C".to_string(),
            skin_type: vec!["Oily".to_string(), "Combination".to_string()],
            ingredients: vec!["Vitamin C".to_string(), "Hyaluronic Acid".to_string()],
            benefits: vec!["Brightening".to_string(), "Fades dark spots".to_string()],
            usage: "Apply 2-3 drops in the morning before sunscreen".to_string(),
            side_effects: "Mild tingling for sensitive skin".to_string(),
            price: 699,
        }
    }

    fn with_price(price: u64) -> Product {
        Product {
            price,
            ..glowboost()
        }
    }

    #[test]
    fn test_scenario_against_reference() {
        let a = glowboost();
        let b = reference_product();
        let facts = compute_comparison(&a, &b);

        let common: Vec<&str> = facts.ingredients.common.iter().map(String::as_str).collect();
        assert_eq!(common, vec!["vitamin c"]);
        let unique_a: Vec<&str> = facts
            .ingredients
            .unique_to_a
            .iter()
            .map(String::as_str)
            .collect();
        assert_eq!(unique_a, vec!["hyaluronic acid"]);
        let unique_b: Vec<&str> = facts
            .ingredients
            .unique_to_b
            .iter()
            .map(String::as_str)
            .collect();
        assert_eq!(unique_b, vec!["glycerin"]);

        assert_eq!(facts.price_difference, 200);
        assert_eq!(facts.verdict.winner_of(Category::Price), Side::A);
        // Both products list two ingredients; equal counts fall to B.
        assert_eq!(facts.verdict.winner_of(Category::IngredientsCount), Side::B);
        assert_eq!(facts.verdict.winner_of(Category::BenefitsCount), Side::B);
        assert_eq!(facts.verdict.winner_of(Category::ValueScore), Side::A);
        assert_eq!(facts.verdict.overall, OverallWinner::Tie);
    }

    #[test]
    fn test_case_insensitive_ingredient_match() {
        let mut a = glowboost();
        a.ingredients = vec!["Vitamin C".to_string()];
        let mut b = glowboost();
        b.ingredients = vec!["vitamin c".to_string()];

        let facts = compute_comparison(&a, &b);
        assert_eq!(facts.ingredients.common.len(), 1);
        assert!(facts.ingredients.unique_to_a.is_empty());
        assert!(facts.ingredients.unique_to_b.is_empty());
    }

    #[test]
    fn test_value_scores_for_scenario() {
        let facts = compute_comparison(&glowboost(), &reference_product());
        // 2 / 6.99 + 2 / 6.99 and 2 / 8.99 + 2 / 8.99, three decimals.
        assert_eq!(facts.value_score_a, 0.572);
        assert_eq!(facts.value_score_b, 0.445);
    }

    #[test]
    fn test_percentage_difference_one_decimal() {
        let facts = compute_comparison(&glowboost(), &reference_product());
        // |699 / 899 - 1| x 100 = 22.247...
        assert_eq!(facts.percentage_difference, 22.2);
    }

    #[test]
    fn test_zero_price_on_either_side_is_total() {
        let free = with_price(0);
        let paid = with_price(899);

        let facts = compute_comparison(&free, &paid);
        assert_eq!(facts.value_score_a, 0.0);
        // 0 / 899 gives a full 100% gap, but no panic anywhere.
        assert_eq!(facts.percentage_difference, 100.0);

        let reversed = compute_comparison(&paid, &free);
        assert_eq!(reversed.value_score_b, 0.0);
        assert_eq!(reversed.percentage_difference, 0.0);
    }

    #[test]
    fn test_both_free_products() {
        let facts = compute_comparison(&with_price(0), &with_price(0));
        assert_eq!(facts.value_score_a, 0.0);
        assert_eq!(facts.value_score_b, 0.0);
        assert_eq!(facts.percentage_difference, 0.0);
        // Equal everywhere resolves every category to B.
        assert_eq!(facts.verdict.score_b, 4);
    }

    #[test]
    fn test_idempotent_byte_identical() {
        let a = glowboost();
        let b = reference_product();
        let first = serde_json::to_vec(&compute_comparison(&a, &b)).unwrap();
        let second = serde_json::to_vec(&compute_comparison(&a, &b)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_inputs_not_mutated() {
        let a = glowboost();
        let b = reference_product();
        let a_before = a.clone();
        let b_before = b.clone();
        let _ = compute_comparison(&a, &b);
        assert_eq!(a, a_before);
        assert_eq!(b, b_before);
    }

    #[test]
    fn test_duplicate_entries_dedup_but_totals_keep_raw_len() {
        let mut a = glowboost();
        a.ingredients = vec![
            "Vitamin C".to_string(),
            "vitamin c".to_string(),
            "Glycerin".to_string(),
        ];
        let b = reference_product();

        let facts = compute_comparison(&a, &b);
        assert_eq!(facts.ingredients.common.len(), 2);
        assert_eq!(facts.ingredients.total_a, 3);
    }

    #[test]
    fn test_equal_counts_fall_to_b_on_both_orderings() {
        let a = glowboost();
        let b = reference_product();
        let ab = compute_comparison(&a, &b);
        let ba = compute_comparison(&b, &a);
        // Two ingredients on each side: B wins regardless of operand
        // order, the one place a swap does not invert the winner.
        assert_eq!(ab.verdict.winner_of(Category::IngredientsCount), Side::B);
        assert_eq!(ba.verdict.winner_of(Category::IngredientsCount), Side::B);
    }

    fn product_strategy() -> impl Strategy<Value = Product> {
        (
            proptest::collection::vec("[a-z]{1,8}", 0..5),
            proptest::collection::vec("[a-z]{1,8}", 0..5),
            0u64..2000,
        )
            .prop_map(|(ingredients, benefits, price)| Product {
                name: "Test Serum".to_string(),
                concentration: "10% Vitamin C".to_string(),
                skin_type: vec!["Oily".to_string()],
                ingredients,
                benefits,
                usage: String::new(),
                side_effects: String::new(),
                price,
            })
    }

    proptest! {
        #[test]
        fn prop_swap_mirrors_sets_and_sign(a in product_strategy(), b in product_strategy()) {
            let ab = compute_comparison(&a, &b);
            let ba = compute_comparison(&b, &a);

            prop_assert_eq!(&ab.ingredients.common, &ba.ingredients.common);
            prop_assert_eq!(&ab.ingredients.unique_to_a, &ba.ingredients.unique_to_b);
            prop_assert_eq!(&ab.ingredients.unique_to_b, &ba.ingredients.unique_to_a);
            prop_assert_eq!(&ab.benefits.unique_to_a, &ba.benefits.unique_to_b);
            prop_assert_eq!(ab.price_difference, -ba.price_difference);
            prop_assert_eq!(ab.value_score_a, ba.value_score_b);
            prop_assert_eq!(ab.value_score_b, ba.value_score_a);
        }

        #[test]
        fn prop_strictly_unequal_categories_invert_on_swap(
            a in product_strategy(),
            b in product_strategy(),
        ) {
            let ab = compute_comparison(&a, &b);
            let ba = compute_comparison(&b, &a);

            if a.ingredient_count() != b.ingredient_count() {
                prop_assert_ne!(
                    ab.verdict.winner_of(Category::IngredientsCount),
                    ba.verdict.winner_of(Category::IngredientsCount)
                );
            }
            if a.benefit_count() != b.benefit_count() {
                prop_assert_ne!(
                    ab.verdict.winner_of(Category::BenefitsCount),
                    ba.verdict.winner_of(Category::BenefitsCount)
                );
            }
            if a.price != b.price {
                prop_assert_ne!(
                    ab.verdict.winner_of(Category::Price),
                    ba.verdict.winner_of(Category::Price)
                );
            }
        }
    }
}
