use crate::product::Product;
use serde_json::{json, Value};

const MARKET_AVERAGE: i64 = 1000;
const ESTIMATED_USES: u64 = 150; // typical for a 30ml serum

/// Price tier, value scoring and cost breakdown for a product.
pub fn price_block(product: &Product) -> Value {
    let price = product.price;

    let (category, category_description) = if price < 500 {
        ("Budget", "Affordable skincare option")
    } else if price < 1000 {
        ("Mid-range", "Good value for quality ingredients")
    } else if price < 2000 {
        ("Premium", "High-end formulation with advanced ingredients")
    } else {
        ("Luxury", "Premium skincare with exceptional quality")
    };

    let value_score = value_score(product);
    let (value_assessment, recommendation) = if value_score >= 80.0 {
        ("Excellent value", "Highly recommended for the price")
    } else if value_score >= 60.0 {
        ("Good value", "Worth considering")
    } else if value_score >= 40.0 {
        ("Fair value", "Consider alternatives in same range")
    } else {
        ("Poor value", "Explore other options")
    };

    let price_difference = price as i64 - MARKET_AVERAGE;
    let position = if price_difference < 0 { "below" } else { "above" };

    let cost_per_use = round2(price as f64 / ESTIMATED_USES as f64);
    let usage_lower = product.usage.to_lowercase();
    let applications_per_day =
        if usage_lower.contains("morning") && usage_lower.contains("night") {
            2.0
        } else {
            1.0
        };

    json!({
        "price_details": {
            "amount": price,
            "currency": "INR",
            "formatted": product.price_formatted(),
            "category": category,
            "category_description": category_description,
        },
        "value_analysis": {
            "value_score": value_score.round() as i64,
            "value_assessment": value_assessment,
            "recommendation": recommendation,
            "ingredients_per_rupee": per_hundred_rupees(product.ingredient_count(), price),
            "benefits_per_rupee": per_hundred_rupees(product.benefit_count(), price),
        },
        "market_position": {
            "market_average": MARKET_AVERAGE,
            "price_difference": price_difference.abs(),
            "position": format!("{position} market average"),
            "competitiveness": if price_difference.abs() < 200 {
                "Competitive"
            } else {
                "Premium priced"
            },
        },
        "cost_analysis": {
            "estimated_uses": ESTIMATED_USES,
            "cost_per_use": cost_per_use,
            "daily_cost": round2(cost_per_use * applications_per_day),
            "monthly_cost": round2(cost_per_use * 30.0),
        },
        "roi_factors": {
            "ingredient_quality": if product.ingredients.iter().any(|i| i == "Hyaluronic Acid") {
                "High"
            } else {
                "Medium"
            },
            "concentration": if product.concentration.contains("10%") {
                "Optimal"
            } else {
                "Standard"
            },
            "brand_reputation": if product.name.split_whitespace().count() > 1 {
                "Established"
            } else {
                "Emerging"
            },
            "clinical_backing": if price > 700 {
                "Dermatologist recommended"
            } else {
                "User recommended"
            },
        },
        "purchase_advice": {
            "best_time": "During festive sales or brand promotions",
            "discount_frequency": "Quarterly sales common",
            "bundle_offers": "Often available with moisturizer combos",
        },
        "payment_options": [
            "Credit/Debit Card",
            "UPI",
            "EMI available above ₹2000",
            "Cash on Delivery",
        ],
    })
}

// Capped composite of ingredient and benefit counts against price.
fn value_score(product: &Product) -> f64 {
    let raw = product.ingredient_count() as f64 * 10.0 + product.benefit_count() as f64 * 15.0
        - product.price as f64 / 20.0;
    raw.min(100.0)
}

fn per_hundred_rupees(count: usize, price: u64) -> f64 {
    if price == 0 {
        return 0.0;
    }
    round2(count as f64 / (price as f64 / 100.0))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
