use crate::product::Product;
use serde_json::{json, Value};

/// Expanded usage instructions built from the product's own usage text.
pub fn usage_block(product: &Product) -> Value {
    let usage_lower = product.usage.to_lowercase();

    let steps: Vec<&str> = if usage_lower.contains("drops") {
        vec![
            "Cleanse your face thoroughly and pat dry",
            "Dispense 2-3 drops onto your fingertips",
            "Gently pat and press onto face and neck",
            "Allow to absorb for 1-2 minutes",
            "Follow with moisturizer and sunscreen",
        ]
    } else {
        vec!["Apply as directed by the instructions"]
    };

    let mentions_morning = usage_lower.contains("morning");
    let mentions_night = usage_lower.contains("night");
    let frequency = match (mentions_morning, mentions_night) {
        (true, false) => "Once daily (morning)",
        (false, true) => "Once daily (night)",
        (true, true) => "Twice daily (morning and night)",
        (false, false) => "Daily",
    };
    let best_time = if mentions_morning { "Morning" } else { "Evening" };

    json!({
        "basic_instruction": product.usage,
        "detailed_steps": steps,
        "frequency": frequency,
        "best_time": best_time,
        "precautions": [
            "Perform a patch test before first use",
            "Avoid contact with eyes",
            "Store in a cool, dry place away from direct sunlight",
            "Use within 6 months of opening",
        ],
        "product_compatibility": {
            "compatible_with": ["Moisturizers", "Sunscreens", "Most serums"],
            "incompatible_with": [
                "Strong acids (AHA/BHA) in same routine",
                "Retinol (unless specified)",
            ],
            "recommended_order": "After cleansing, before moisturizing",
        },
        "results_timeline": {
            "immediate": "Instant hydration and glow",
            "1_week": "Improved skin texture",
            "4_weeks": "Visible brightening and even tone",
            "8_weeks": "Reduced dark spots and full benefits",
        },
        "storage_instructions": "Keep lid tightly closed, store below 25°C",
        "shelf_life": "24 months unopened, 6 months after opening",
    })
}
