use crate::product::Product;
use serde_json::{json, Value};

/// Safety content derived from the product's side-effects text.
pub fn safety_block(product: &Product) -> Value {
    let side_effects = side_effect_entries(product);

    let mut contraindications: Vec<&str> = Vec::new();
    if product.side_effects.to_lowercase().contains("sensitive") {
        contraindications.push("Extremely sensitive skin");
    }
    contraindications.extend([
        "Open wounds or broken skin",
        "Known allergy to any ingredients",
        "Active skin infections",
    ]);

    json!({
        "side_effects": side_effects,
        "contraindications": contraindications,
        "precautions": [
            "Always perform a patch test before first use",
            "Apply to clean, dry skin",
            "Start with every other day use for first week",
            "Avoid sun exposure without sunscreen",
            "Consult dermatologist if pregnant or breastfeeding",
        ],
        "first_aid_measures": {
            "eye_contact": "Rinse immediately with plenty of water for 15 minutes",
            "skin_irritation": "Wash with mild soap and water, apply soothing cream",
            "ingestion": "Rinse mouth, drink water, seek medical attention",
            "allergic_reaction": "Discontinue use immediately, seek medical help if severe",
        },
        "safety_ratings": {
            "dermatologist_tested": true,
            "hypoallergenic": "suitable for most skin types",
            "cruelty_free": true,
            "paraben_free": "check ingredient list",
            "fragrance_free": "unscented formulation",
        },
        "patch_test_instructions": "Apply small amount to inner forearm, wait 24 hours",
        "discontinuation_advice": "Stop use if severe irritation occurs and consult professional",
        "storage_warning": "Keep out of reach of children, store in original container",
    })
}

/// One-line side-effect answer for FAQ use.
pub fn side_effect_summary(product: &Product) -> String {
    let entries = side_effect_entries(product);
    let first = &entries[0];
    let effect = first["effect"].as_str().unwrap_or_default();
    let action = first["action"].as_str().unwrap_or_default();
    if action == "None required" {
        format!("{effect}. {}", first["frequency"].as_str().unwrap_or_default())
    } else {
        format!("{effect}. {action}")
    }
}

// Keyword scan over the free-text side effects field. Always returns at
// least one entry.
fn side_effect_entries(product: &Product) -> Vec<Value> {
    let text = product.side_effects.to_lowercase();
    let mut entries = Vec::new();

    if text.contains("tingling") {
        entries.push(json!({
            "effect": "Mild tingling sensation",
            "frequency": "Common for sensitive skin",
            "severity": "Mild",
            "action": "Usually subsides within minutes. Reduce frequency if persistent.",
        }));
    }

    if text.contains("irritation") {
        entries.push(json!({
            "effect": "Skin irritation or redness",
            "frequency": "Rare",
            "severity": "Mild to moderate",
            "action": "Discontinue use and consult dermatologist",
        }));
    }

    if entries.is_empty() {
        entries.push(json!({
            "effect": "Generally well-tolerated",
            "frequency": "Most users experience no side effects",
            "severity": "None",
            "action": "None required",
        }));
    }

    entries
}
