pub mod engine;
pub mod voter;

pub use engine::{compute_comparison, ComparisonFacts, SetComparison};
pub use voter::{vote, Category, CategoryMetrics, OverallWinner, Side, Verdict};
