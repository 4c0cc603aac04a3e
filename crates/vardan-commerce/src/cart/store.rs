//! Cart store: the ordered line-item list and its persisted mirror.

use std::rc::Rc;

use serde_json::Value;
use vardan_cache::{Cache, KvStore};
use vardan_observability::StructuredLogger;

use crate::cart::{parse_price_text, CartLineItem};
use crate::catalog::PriceLookup;
use crate::config::StoreConfig;
use crate::money::Money;

/// A caller-supplied price used when the catalog has no answer.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PriceSource {
    /// Nothing declared; the price falls back to zero.
    #[default]
    Undeclared,
    /// A display string such as `"₹249"` (attribute or option price).
    Text(String),
    /// A numeric amount.
    Amount(Money),
}

impl PriceSource {
    fn resolve(&self) -> Option<Money> {
        match self {
            PriceSource::Undeclared => None,
            PriceSource::Text(text) => parse_price_text(text),
            PriceSource::Amount(amount) => Some(*amount),
        }
    }
}

impl From<Option<String>> for PriceSource {
    fn from(text: Option<String>) -> Self {
        match text {
            Some(t) if !t.trim().is_empty() => PriceSource::Text(t),
            _ => PriceSource::Undeclared,
        }
    }
}

/// Result of adding one unit to the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddOutcome {
    /// Position of the affected line.
    pub index: usize,
    /// Quantity of that line after the add.
    pub quantity: u32,
    /// Unit price applied.
    pub price: Money,
    /// Whether a new line was appended.
    pub created: bool,
}

/// Owned cart state mirrored to a key-value store.
///
/// The in-memory list is the writable copy; every mutation is followed by a
/// save. Storage failures are logged and never surface to callers.
pub struct CartStore<S: KvStore> {
    cache: Cache<S>,
    key: String,
    placeholder_image: String,
    items: Vec<CartLineItem>,
    catalog: Option<Rc<dyn PriceLookup>>,
    logger: StructuredLogger,
}

impl<S: KvStore> CartStore<S> {
    /// Create an empty store. Call [`load`](Self::load) to read saved state.
    pub fn new(store: S, config: &StoreConfig) -> Self {
        Self {
            cache: Cache::new(store),
            key: config.storage_key.clone(),
            placeholder_image: config.placeholder_image.clone(),
            items: Vec::new(),
            catalog: None,
            logger: StructuredLogger::new("cart"),
        }
    }

    /// Attach a price catalog.
    pub fn with_catalog(mut self, catalog: Rc<dyn PriceLookup>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Whether a catalog is attached.
    pub fn has_catalog(&self) -> bool {
        self.catalog.is_some()
    }

    /// Underlying key-value store.
    pub fn backend(&self) -> &S {
        self.cache.store()
    }

    /// Read the persisted cart, replacing the in-memory list.
    ///
    /// Unreadable or malformed state yields an empty cart. Entries are
    /// normalized, then re-priced against the catalog when one is attached.
    pub fn load(&mut self) {
        self.items = self.read_stored();
        if self.catalog.is_some() {
            self.sync_prices();
        }
    }

    fn read_stored(&self) -> Vec<CartLineItem> {
        let raw = match self.cache.get_raw(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                self.logger
                    .warn_builder("Failed to read stored cart")
                    .field("error", err.to_string())
                    .emit();
                return Vec::new();
            }
        };

        let entries = match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Array(entries)) => entries,
            Ok(_) => {
                self.logger
                    .warn_builder("Stored cart is not a list; starting empty")
                    .field("key", self.key.as_str())
                    .emit();
                return Vec::new();
            }
            Err(err) => {
                self.logger
                    .warn_builder("Stored cart is malformed; starting empty")
                    .field("error", err.to_string())
                    .emit();
                return Vec::new();
            }
        };

        let total = entries.len();
        let items: Vec<_> = entries
            .iter()
            .filter_map(|entry| CartLineItem::normalize(entry, &self.placeholder_image))
            .collect();
        if items.len() < total {
            self.logger
                .warn_builder("Dropped unreadable cart entries")
                .field_i64("dropped", (total - items.len()) as i64)
                .emit();
        }
        items
    }

    /// Write the full list to storage. Returns whether the write succeeded.
    pub fn save(&self) -> bool {
        let stored: Vec<_> = self.items.iter().map(CartLineItem::to_stored).collect();
        match self.cache.set(&self.key, &stored) {
            Ok(()) => true,
            Err(err) => {
                self.logger
                    .warn_builder("Failed to save cart")
                    .field("error", err.to_string())
                    .field_i64("items", self.items.len() as i64)
                    .emit();
                false
            }
        }
    }

    /// Add one unit of `(name, variant)`.
    ///
    /// The price comes from the catalog, then from `fallback`, then zero.
    /// An existing line is incremented and re-priced; otherwise a line with
    /// quantity 1 is appended.
    pub fn add(&mut self, name: &str, variant: &str, image: &str, fallback: PriceSource) -> AddOutcome {
        let resolved = self
            .catalog
            .as_ref()
            .and_then(|c| c.price(name, Some(variant)))
            .or_else(|| fallback.resolve());

        let outcome = match self.items.iter().position(|i| i.matches(name, variant)) {
            Some(index) => {
                let item = &mut self.items[index];
                item.quantity = item.quantity.saturating_add(1);
                if let Some(price) = resolved {
                    item.set_price(price);
                }
                AddOutcome {
                    index,
                    quantity: item.quantity,
                    price: item.unit_price(),
                    created: false,
                }
            }
            None => {
                let price = resolved.unwrap_or_default();
                let image = if image.is_empty() {
                    self.placeholder_image.as_str()
                } else {
                    image
                };
                self.items.push(CartLineItem::new(name, variant, price, image));
                AddOutcome {
                    index: self.items.len() - 1,
                    quantity: 1,
                    price,
                    created: true,
                }
            }
        };

        self.save();
        outcome
    }

    /// Add one unit priced by the catalog only.
    pub fn add_variant(&mut self, name: &str, variant: &str, image: &str) -> AddOutcome {
        self.add(name, variant, image, PriceSource::Undeclared)
    }

    /// Add one unit with an explicit display price as the fallback.
    pub fn add_priced(&mut self, name: &str, price_text: &str, variant: &str, image: &str) -> AddOutcome {
        self.add(name, variant, image, PriceSource::Text(price_text.to_string()))
    }

    /// Change the quantity of the line at `index` by `delta`.
    ///
    /// A resulting quantity of zero or less removes the line. Returns false
    /// for an out-of-range index.
    pub fn update_quantity(&mut self, index: usize, delta: i64) -> bool {
        let Some(item) = self.items.get_mut(index) else {
            return false;
        };

        let next = i64::from(item.quantity).saturating_add(delta);
        if next <= 0 {
            self.items.remove(index);
        } else {
            item.quantity = u32::try_from(next).unwrap_or(u32::MAX);
        }
        self.save();
        true
    }

    /// Remove the line at `index`, if any.
    pub fn remove(&mut self, index: usize) -> Option<CartLineItem> {
        if index >= self.items.len() {
            return None;
        }
        let removed = self.items.remove(index);
        self.save();
        Some(removed)
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.items.clear();
        self.save();
    }

    /// Re-price every line from the catalog.
    ///
    /// Lines the catalog does not know keep their stored price. Saves only
    /// when something changed; returns the number of lines updated.
    pub fn sync_prices(&mut self) -> usize {
        let Some(catalog) = self.catalog.clone() else {
            return 0;
        };

        let mut updated = 0;
        for item in &mut self.items {
            let Some(price) = catalog.price(&item.name, Some(&item.variant)) else {
                continue;
            };
            if price.display() != item.price_text || price != item.price {
                self.logger
                    .info_builder("Cart price updated")
                    .field("product", item.name.as_str())
                    .field("variant", item.variant.as_str())
                    .field("from", item.price_text.as_str())
                    .field("to", price.display())
                    .emit();
                item.set_price(price);
                updated += 1;
            }
        }

        if updated > 0 {
            self.save();
        }
        updated
    }

    /// Sum of `unit_price * quantity` over all lines.
    pub fn total(&self) -> Money {
        self.items.iter().map(CartLineItem::subtotal).sum()
    }

    /// Sum of quantities, shown on the cart badge.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Line at `index`.
    pub fn get(&self, index: usize) -> Option<&CartLineItem> {
        self.items.get(index)
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
