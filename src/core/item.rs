//! Line-item types and input sanitization

use serde::{Deserialize, Serialize};

/// Opaque identity of a sheet entry. Used only for lookup and removal;
/// carries no meaning beyond uniqueness within its sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub(crate) u64);

/// Tax terms for one line item. The carried value is interpreted per
/// variant: percentage points, or a fixed currency amount per gram.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tax {
    Percent(f64),
    Fixed(f64),
}

impl Default for Tax {
    fn default() -> Self {
        Tax::Percent(0.0)
    }
}

impl Tax {
    pub fn value(&self) -> f64 {
        match self {
            Tax::Percent(v) | Tax::Fixed(v) => *v,
        }
    }

    fn sanitized(self) -> Self {
        match self {
            Tax::Percent(v) => Tax::Percent(sanitize_amount(v)),
            Tax::Fixed(v) => Tax::Fixed(sanitize_amount(v)),
        }
    }
}

fn default_quantity() -> u32 {
    1
}

/// One gold batch entry: weight in grams per unit, unit count, price per
/// gram, tax terms, and an optional flat provider fee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(default)]
    pub weight: f64,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    pub price_per_gram: f64,
    #[serde(default, with = "serde_yaml::with::singleton_map")]
    pub tax: Tax,
    #[serde(default)]
    pub provider_fee: f64,
}

impl LineItem {
    /// A fresh entry: zero weight, a single unit, no tax, no fee.
    pub fn new(price_per_gram: f64) -> Self {
        LineItem {
            weight: 0.0,
            quantity: 1,
            price_per_gram: sanitize_amount(price_per_gram),
            tax: Tax::default(),
            provider_fee: 0.0,
        }
    }

    /// Clamps every numeric field back into its invariant range:
    /// non-negative finite amounts, quantity of at least one.
    pub fn sanitized(self) -> Self {
        LineItem {
            weight: sanitize_amount(self.weight),
            quantity: self.quantity.max(1),
            price_per_gram: sanitize_amount(self.price_per_gram),
            tax: self.tax.sanitized(),
            provider_fee: sanitize_amount(self.provider_fee),
        }
    }
}

/// Coerces an amount into the non-negative finite range. NaN, infinities
/// and negative values all collapse to zero.
pub fn sanitize_amount(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Parses user-typed numeric text, coercing anything invalid to zero.
pub fn parse_amount(text: &str) -> f64 {
    text.trim().parse::<f64>().map_or(0.0, sanitize_amount)
}

/// Parses a quantity, coercing anything invalid to the minimum of one.
pub fn parse_quantity(text: &str) -> u32 {
    text.trim().parse::<u32>().map_or(1, |q| q.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_defaults() {
        let item = LineItem::new(60.0);
        assert_eq!(item.weight, 0.0);
        assert_eq!(item.quantity, 1);
        assert_eq!(item.price_per_gram, 60.0);
        assert_eq!(item.tax, Tax::Percent(0.0));
        assert_eq!(item.provider_fee, 0.0);
    }

    #[test]
    fn test_sanitize_amount_coerces_invalid_values() {
        assert_eq!(sanitize_amount(12.5), 12.5);
        assert_eq!(sanitize_amount(0.0), 0.0);
        assert_eq!(sanitize_amount(-3.0), 0.0);
        assert_eq!(sanitize_amount(f64::NAN), 0.0);
        assert_eq!(sanitize_amount(f64::INFINITY), 0.0);
    }

    #[test]
    fn test_sanitized_item_clamps_fields() {
        let item = LineItem {
            weight: -1.0,
            quantity: 0,
            price_per_gram: f64::NAN,
            tax: Tax::Fixed(-2.0),
            provider_fee: -10.0,
        }
        .sanitized();

        assert_eq!(item.weight, 0.0);
        assert_eq!(item.quantity, 1);
        assert_eq!(item.price_per_gram, 0.0);
        assert_eq!(item.tax, Tax::Fixed(0.0));
        assert_eq!(item.provider_fee, 0.0);
    }

    #[test]
    fn test_parse_amount_coercion() {
        assert_eq!(parse_amount("12.5"), 12.5);
        assert_eq!(parse_amount(" 7 "), 7.0);
        assert_eq!(parse_amount("-4"), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount(""), 0.0);
    }

    #[test]
    fn test_parse_quantity_coercion() {
        assert_eq!(parse_quantity("3"), 3);
        assert_eq!(parse_quantity("0"), 1);
        assert_eq!(parse_quantity("-2"), 1);
        assert_eq!(parse_quantity("many"), 1);
    }

    #[test]
    fn test_tax_yaml_forms() {
        let percent: Tax = serde_yaml::from_str("percent: 5.0").unwrap();
        assert_eq!(percent, Tax::Percent(5.0));

        let fixed: Tax = serde_yaml::from_str("fixed: 2.0").unwrap();
        assert_eq!(fixed, Tax::Fixed(2.0));
    }

    #[test]
    fn test_item_yaml_defaults() {
        let item: LineItem = serde_yaml::from_str(
            r#"
weight: 10.0
price_per_gram: 60.0
"#,
        )
        .unwrap();

        assert_eq!(item.quantity, 1);
        assert_eq!(item.tax, Tax::Percent(0.0));
        assert_eq!(item.provider_fee, 0.0);
    }
}
