//! Subscription plan and revenue stream reference data
//!
//! Static tables, never mutated. Prices are either a fixed INR amount or
//! "Custom" (negotiated per client), modeled as a tagged variant so every
//! display site must handle both cases.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A plan price: a fixed monthly/yearly amount or negotiated per client
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Price {
    Fixed(f64),
    Custom,
}

// Wire shape matches the source data: a bare number or the string "Custom"
impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Price::Fixed(amount) => serializer.serialize_f64(*amount),
            Price::Custom => serializer.serialize_str("Custom"),
        }
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PriceVisitor;

        impl<'de> Visitor<'de> for PriceVisitor {
            type Value = Price;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a number or the string \"Custom\"")
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Price, E> {
                Ok(Price::Fixed(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Price, E> {
                Ok(Price::Fixed(v as f64))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Price, E> {
                Ok(Price::Fixed(v as f64))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Price, E> {
                if v == "Custom" {
                    Ok(Price::Custom)
                } else {
                    Err(E::invalid_value(de::Unexpected::Str(v), &self))
                }
            }
        }

        deserializer.deserialize_any(PriceVisitor)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Fixed(amount) => write!(f, "{}", crate::report::format_inr(*amount)),
            Price::Custom => write!(f, "Custom"),
        }
    }
}

/// A subscription pricing tier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionPlan {
    pub name: String,
    pub monthly: Price,
    pub yearly: Price,
    pub features: String,
}

impl SubscriptionPlan {
    fn new(name: &str, monthly: Price, yearly: Price, features: &str) -> Self {
        Self {
            name: name.to_string(),
            monthly,
            yearly,
            features: features.to_string(),
        }
    }
}

/// The four SmartBudget pricing tiers
pub fn subscription_plans() -> Vec<SubscriptionPlan> {
    vec![
        SubscriptionPlan::new(
            "Free Tier",
            Price::Fixed(0.0),
            Price::Fixed(0.0),
            "Basic tracking, manual entry, group creation, limited AI insights",
        ),
        SubscriptionPlan::new(
            "Smart Tier",
            Price::Fixed(99.0),
            Price::Fixed(999.0),
            "Bill uploads, basic predictions, badges, dark mode",
        ),
        SubscriptionPlan::new(
            "Pro Tier",
            Price::Fixed(199.0),
            Price::Fixed(1999.0),
            "Advanced AI, financial insights, early payer score, full analytics",
        ),
        SubscriptionPlan::new(
            "Enterprise/Group",
            Price::Custom,
            Price::Custom,
            "Custom features for colleges, housing societies, or startups",
        ),
    ]
}

/// Labels for every defined revenue stream
pub const REVENUE_STREAMS: [&str; 6] = [
    "Freemium Subscriptions",
    "Group Plans",
    "Ad Revenue",
    "Affiliate Partnerships",
    "Data Insights (Anonymized)",
    "Consulting Services",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_plans_defined() {
        let plans = subscription_plans();
        assert_eq!(plans.len(), 4);
        assert_eq!(plans[0].name, "Free Tier");
        assert_eq!(plans[3].monthly, Price::Custom);
    }

    #[test]
    fn test_price_display() {
        assert_eq!(Price::Fixed(99.0).to_string(), "Rs. 99.00");
        assert_eq!(Price::Custom.to_string(), "Custom");
    }

    #[test]
    fn test_price_serde_matches_source_shape() {
        // Fixed prices serialize as bare numbers, Custom as the sentinel string
        assert_eq!(serde_json::to_string(&Price::Fixed(199.0)).unwrap(), "199.0");
        assert_eq!(serde_json::to_string(&Price::Custom).unwrap(), "\"Custom\"");

        let p: Price = serde_json::from_str("99.0").unwrap();
        assert_eq!(p, Price::Fixed(99.0));
        let c: Price = serde_json::from_str("\"Custom\"").unwrap();
        assert_eq!(c, Price::Custom);
        assert!(serde_json::from_str::<Price>("\"Negotiable\"").is_err());
    }
}
