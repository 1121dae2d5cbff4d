//! The item collection controller.
//!
//! A `Sheet` owns the line items of one calculation. Every mutation is a
//! structural replacement of the affected entry; neighbouring entries are
//! never touched in place. Totals are derived on every read and never
//! cached, so the display always reflects the latest edit.

use crate::core::item::{ItemId, LineItem, Tax, sanitize_amount};
use crate::core::pricing::{self, Totals};

/// One sheet entry: an item plus its sheet-local identity.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub id: ItemId,
    pub item: LineItem,
}

/// A single field edit. Applying one replaces the whole entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Edit {
    Weight(f64),
    Quantity(u32),
    PricePerGram(f64),
    Tax(Tax),
    ProviderFee(f64),
}

#[derive(Debug, Default)]
pub struct Sheet {
    default_price_per_gram: f64,
    id_counter: u64,
    entries: Vec<Entry>,
}

impl Sheet {
    pub fn new(default_price_per_gram: f64) -> Self {
        Sheet {
            default_price_per_gram: sanitize_amount(default_price_per_gram),
            id_counter: 0,
            entries: Vec::new(),
        }
    }

    /// Builds a sheet from pre-existing items, e.g. the config file.
    pub fn from_items<I>(default_price_per_gram: f64, items: I) -> Self
    where
        I: IntoIterator<Item = LineItem>,
    {
        let mut sheet = Sheet::new(default_price_per_gram);
        for item in items {
            sheet.push(item);
        }
        sheet
    }

    fn allocate_id(&mut self) -> ItemId {
        self.id_counter += 1;
        ItemId(self.id_counter)
    }

    /// Appends a fresh item with the sheet's default price per gram.
    pub fn add(&mut self) -> ItemId {
        let item = LineItem::new(self.default_price_per_gram);
        self.push(item)
    }

    /// Appends an explicit item. The item is sanitized on the way in so the
    /// collection invariants hold regardless of the source.
    pub fn push(&mut self, item: LineItem) -> ItemId {
        let id = self.allocate_id();
        self.entries.push(Entry {
            id,
            item: item.sanitized(),
        });
        id
    }

    /// Removes exactly the entry with the given id. Removing an id that is
    /// no longer present is a no-op and reports `false`.
    pub fn remove(&mut self, id: ItemId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    /// Replaces the identified entry with an edited copy. Reports `false`
    /// when the id is not present; no other entry is affected either way.
    pub fn update(&mut self, id: ItemId, edit: Edit) -> bool {
        let Some(index) = self.entries.iter().position(|entry| entry.id == id) else {
            return false;
        };

        let mut item = self.entries[index].item.clone();
        match edit {
            Edit::Weight(value) => item.weight = value,
            Edit::Quantity(value) => item.quantity = value,
            Edit::PricePerGram(value) => item.price_per_gram = value,
            Edit::Tax(tax) => item.tax = tax,
            Edit::ProviderFee(value) => item.provider_fee = value,
        }

        self.entries[index] = Entry {
            id,
            item: item.sanitized(),
        };
        true
    }

    pub fn get(&self, id: ItemId) -> Option<&LineItem> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| &entry.item)
    }

    /// Id of the entry at a zero-based display position.
    pub fn id_at(&self, index: usize) -> Option<ItemId> {
        self.entries.get(index).map(|entry| entry.id)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn items(&self) -> impl Iterator<Item = &LineItem> {
        self.entries.iter().map(|entry| &entry.item)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Recomputed on every call from the current entries.
    pub fn grand_total(&self) -> Totals {
        pricing::grand_total(self.items())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_uses_defaults() {
        let mut sheet = Sheet::new(60.0);
        let id = sheet.add();

        let item = sheet.get(id).unwrap();
        assert_eq!(item.weight, 0.0);
        assert_eq!(item.quantity, 1);
        assert_eq!(item.price_per_gram, 60.0);
        assert_eq!(item.tax, Tax::Percent(0.0));
        assert_eq!(sheet.grand_total(), Totals::ZERO);
    }

    #[test]
    fn test_ids_are_unique_and_stable() {
        let mut sheet = Sheet::new(60.0);
        let first = sheet.add();
        let second = sheet.add();
        assert_ne!(first, second);

        sheet.remove(first);
        let third = sheet.add();
        assert_ne!(second, third);
    }

    #[test]
    fn test_add_does_not_mutate_existing_items() {
        let mut sheet = Sheet::new(60.0);
        let first = sheet.add();
        sheet.update(first, Edit::Weight(10.0));
        sheet.update(first, Edit::Tax(Tax::Percent(5.0)));
        let before = sheet.get(first).unwrap().clone();

        sheet.add();
        assert_eq!(sheet.get(first), Some(&before));
    }

    #[test]
    fn test_update_replaces_only_the_target() {
        let mut sheet = Sheet::new(60.0);
        let first = sheet.add();
        let second = sheet.add();

        assert!(sheet.update(second, Edit::Weight(10.0)));
        assert_eq!(sheet.get(first).unwrap().weight, 0.0);
        assert_eq!(sheet.get(second).unwrap().weight, 10.0);
    }

    #[test]
    fn test_update_is_last_write_wins() {
        let mut sheet = Sheet::new(60.0);
        let id = sheet.add();

        sheet.update(id, Edit::Weight(10.0));
        sheet.update(id, Edit::Weight(4.0));
        assert_eq!(sheet.get(id).unwrap().weight, 4.0);
        assert_eq!(sheet.grand_total().subtotal, 4.0 * 60.0);
    }

    #[test]
    fn test_update_sanitizes_values() {
        let mut sheet = Sheet::new(60.0);
        let id = sheet.add();

        sheet.update(id, Edit::Weight(-5.0));
        sheet.update(id, Edit::Quantity(0));
        assert_eq!(sheet.get(id).unwrap().weight, 0.0);
        assert_eq!(sheet.get(id).unwrap().quantity, 1);
    }

    #[test]
    fn test_remove_subtracts_exactly_one_contribution() {
        let mut sheet = Sheet::new(60.0);
        let kept = sheet.add();
        sheet.update(kept, Edit::Weight(10.0));
        sheet.update(kept, Edit::Tax(Tax::Percent(5.0)));

        let removed = sheet.add();
        sheet.update(removed, Edit::Weight(3.0));
        sheet.update(removed, Edit::ProviderFee(12.0));

        let kept_totals = pricing::item_total(sheet.get(kept).unwrap());
        assert!(sheet.remove(removed));
        assert_eq!(sheet.grand_total(), kept_totals);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut sheet = Sheet::new(60.0);
        let id = sheet.add();

        assert!(sheet.remove(id));
        let total_after = sheet.grand_total();
        assert!(!sheet.remove(id));
        assert_eq!(sheet.grand_total(), total_after);
        assert!(sheet.is_empty());
    }

    #[test]
    fn test_update_missing_id_is_a_no_op() {
        let mut sheet = Sheet::new(60.0);
        let id = sheet.add();
        sheet.remove(id);

        assert!(!sheet.update(id, Edit::Weight(10.0)));
        assert!(sheet.is_empty());
    }

    #[test]
    fn test_from_items_sanitizes_config_input() {
        let sheet = Sheet::from_items(
            60.0,
            vec![LineItem {
                weight: 10.0,
                quantity: 0,
                price_per_gram: -1.0,
                tax: Tax::Percent(5.0),
                provider_fee: 0.0,
            }],
        );

        let item = sheet.items().next().unwrap();
        assert_eq!(item.quantity, 1);
        assert_eq!(item.price_per_gram, 0.0);
    }

    #[test]
    fn test_id_at_follows_display_order() {
        let mut sheet = Sheet::new(60.0);
        let first = sheet.add();
        let second = sheet.add();

        assert_eq!(sheet.id_at(0), Some(first));
        assert_eq!(sheet.id_at(1), Some(second));
        assert_eq!(sheet.id_at(2), None);

        sheet.remove(first);
        assert_eq!(sheet.id_at(0), Some(second));
    }
}
