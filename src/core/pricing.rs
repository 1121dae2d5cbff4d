//! Pure pricing computation over line items.
//!
//! Tax is assessed per gram of total weight, not on the monetary subtotal:
//! a percentage rate applies to each gram's price, and a fixed tax is a
//! currency amount per gram. The provider fee is flat per item and does not
//! scale with weight or quantity.

use crate::core::item::{LineItem, Tax};
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Price breakdown for one item, or summed across a whole sheet.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Totals {
    pub subtotal: f64,
    pub tax: f64,
    pub provider_fee: f64,
    pub total: f64,
}

impl Totals {
    pub const ZERO: Totals = Totals {
        subtotal: 0.0,
        tax: 0.0,
        provider_fee: 0.0,
        total: 0.0,
    };
}

impl Add for Totals {
    type Output = Totals;

    fn add(self, other: Totals) -> Totals {
        Totals {
            subtotal: self.subtotal + other.subtotal,
            tax: self.tax + other.tax,
            provider_fee: self.provider_fee + other.provider_fee,
            total: self.total + other.total,
        }
    }
}

impl AddAssign for Totals {
    fn add_assign(&mut self, other: Totals) {
        *self = *self + other;
    }
}

impl Sum for Totals {
    fn sum<I: Iterator<Item = Totals>>(iter: I) -> Totals {
        iter.fold(Totals::ZERO, Add::add)
    }
}

/// Prices a single line item. Degenerate zero inputs yield zero
/// contributions; there are no failure cases.
pub fn item_total(item: &LineItem) -> Totals {
    let weight_total = item.weight * f64::from(item.quantity);
    let subtotal = weight_total * item.price_per_gram;

    let tax = match item.tax {
        Tax::Percent(rate) => weight_total * (rate / 100.0) * item.price_per_gram,
        Tax::Fixed(amount) => weight_total * amount,
    };

    let provider_fee = item.provider_fee;

    Totals {
        subtotal,
        tax,
        provider_fee,
        total: subtotal + tax + provider_fee,
    }
}

/// Sums `item_total` across a collection. Empty input yields all zeros and
/// the result is independent of item order.
pub fn grand_total<'a, I>(items: I) -> Totals
where
    I: IntoIterator<Item = &'a LineItem>,
{
    items.into_iter().map(item_total).sum()
}
