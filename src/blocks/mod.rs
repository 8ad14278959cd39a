pub mod benefits;
pub mod price;
pub mod safety;
pub mod seo;
pub mod usage;

pub use benefits::benefits_block;
pub use price::price_block;
pub use safety::{safety_block, side_effect_summary};
pub use seo::seo_metadata;
pub use usage::usage_block;
