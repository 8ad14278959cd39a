use serde::Serialize;
use std::collections::BTreeMap;

/// The four fixed comparison axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    IngredientsCount,
    BenefitsCount,
    Price,
    ValueScore,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::IngredientsCount,
        Category::BenefitsCount,
        Category::Price,
        Category::ValueScore,
    ];
}

/// Which operand won a category. Equal metrics resolve to B, so there is
/// no category-level tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Side {
    A,
    B,
}

/// Aggregate outcome across all four categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OverallWinner {
    A,
    B,
    Tie,
}

/// Raw per-category metrics for a product pair.
///
/// Value scores are the unrounded figures; rounding only applies to the
/// reported numbers, never to the comparison itself.
#[derive(Debug, Clone, Copy)]
pub struct CategoryMetrics {
    pub ingredients_a: usize,
    pub ingredients_b: usize,
    pub benefits_a: usize,
    pub benefits_b: usize,
    pub price_a: u64,
    pub price_b: u64,
    pub value_a: f64,
    pub value_b: f64,
}

/// Per-category winners plus the majority verdict.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict {
    pub per_category: BTreeMap<Category, Side>,
    pub score_a: u32,
    pub score_b: u32,
    pub overall: OverallWinner,
}

impl Verdict {
    pub fn winner_of(&self, category: Category) -> Side {
        self.per_category[&category]
    }

    /// Human-readable recommendation naming the winning product.
    pub fn recommendation(&self, name_a: &str, name_b: &str) -> String {
        match self.overall {
            OverallWinner::A => format!("{name_a} is recommended for better overall value"),
            OverallWinner::B => format!("{name_b} is recommended for better overall value"),
            OverallWinner::Tie => {
                "Both products are comparable; choose based on specific needs".to_string()
            }
        }
    }
}

/// Decide every category independently, then take the majority.
///
/// More ingredients win, more benefits win, the lower price wins and the
/// higher value score wins. A 2-2 split is the only way to reach a tie.
pub fn vote(metrics: &CategoryMetrics) -> Verdict {
    let mut per_category = BTreeMap::new();
    per_category.insert(
        Category::IngredientsCount,
        higher_wins(metrics.ingredients_a as f64, metrics.ingredients_b as f64),
    );
    per_category.insert(
        Category::BenefitsCount,
        higher_wins(metrics.benefits_a as f64, metrics.benefits_b as f64),
    );
    per_category.insert(
        Category::Price,
        if metrics.price_a < metrics.price_b {
            Side::A
        } else {
            Side::B
        },
    );
    per_category.insert(
        Category::ValueScore,
        higher_wins(metrics.value_a, metrics.value_b),
    );

    let score_a = per_category.values().filter(|side| **side == Side::A).count() as u32;
    let score_b = Category::ALL.len() as u32 - score_a;

    let overall = if score_a > score_b {
        OverallWinner::A
    } else if score_b > score_a {
        OverallWinner::B
    } else {
        OverallWinner::Tie
    };

    Verdict {
        per_category,
        score_a,
        score_b,
        overall,
    }
}

// Equal falls to B.
fn higher_wins(a: f64, b: f64) -> Side {
    if a > b {
        Side::A
    } else {
        Side::B
    }
}
