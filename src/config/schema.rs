use crate::product::{reference_product, Product};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration.
///
/// All fields are optional in the YAML file. A missing config file means
/// the defaults below, which is the documented zero-setup behavior.
///
/// Example YAML:
/// ```yaml
/// output_dir: outputs
/// pretty_print: true
/// pages:
///   faq: true
///   product: true
///   comparison: true
/// reference:
///   name: HouseBrand Serum
///   concentration: 8% Vitamin C
///   skin_type: [All Skin Types]
///   ingredients: [Vitamin C]
///   benefits: [Brightening]
///   usage: Apply once daily
///   side_effects: None reported
///   price: 799
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct Config {
    /// Directory the three JSON documents are written to.
    pub output_dir: PathBuf,

    /// Pretty-print the output files (default: true).
    pub pretty_print: bool,

    /// Which pages to generate.
    pub pages: PagesConfig,

    /// Optional replacement for the built-in comparison reference
    /// product.
    pub reference: Option<Product>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("outputs"),
            pretty_print: true,
            pages: PagesConfig::default(),
            reference: None,
        }
    }
}

impl Config {
    /// The competitor used for comparison pages.
    pub fn reference_product(&self) -> Product {
        self.reference.clone().unwrap_or_else(reference_product)
    }
}

/// Per-page enable flags.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct PagesConfig {
    pub faq: bool,
    pub product: bool,
    pub comparison: bool,
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            faq: true,
            product: true,
            comparison: true,
        }
    }
}
