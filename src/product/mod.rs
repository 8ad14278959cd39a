pub mod normalize;
pub mod types;
pub mod validation;

pub use normalize::{load_input, normalize};
pub use types::{reference_product, Product};
pub use validation::check_product;
