pub mod comparison;
pub mod faq;
pub mod product_page;

pub use comparison::render_comparison;
pub use faq::render_faq;
pub use product_page::render_product_page;

use chrono::Utc;
use serde::Serialize;
use serde_json::Value;

/// Standard envelope for a generated page document.
#[derive(Debug, Clone, Serialize)]
pub struct PageOutput {
    pub page_type: String,
    pub content: Value,
    pub metadata: Value,
}

pub(crate) const TEMPLATE_VERSION: &str = "1.0.0";
pub(crate) const GENERATOR: &str = "pagegen";

pub(crate) fn timestamp() -> String {
    Utc::now().to_rfc3339()
}
