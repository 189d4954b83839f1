use std::collections::{BTreeMap, BTreeSet};

use crate::catalog::{Catalog, ProductId};
use crate::mvi::UiState;

use super::snapshot::ViewSnapshot;

/// Product → quantity and product → liked flag.
///
/// A quantity of 0 may be physically present; every derived value treats it
/// exactly like an absent entry. Totals are never cached, they are recomputed
/// from the maps on each read.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CartState {
    pub(crate) quantities: BTreeMap<ProductId, u32>,
    pub(crate) likes: BTreeMap<ProductId, bool>,
}

impl UiState for CartState {}

impl CartState {
    pub fn quantity(&self, id: ProductId) -> u32 {
        self.quantities.get(&id).copied().unwrap_or(0)
    }

    pub fn is_liked(&self, id: ProductId) -> bool {
        self.likes.get(&id).copied().unwrap_or(false)
    }

    /// Sum of all quantities.
    pub fn total_item_count(&self) -> u64 {
        self.quantities.values().map(|&q| u64::from(q)).sum()
    }

    /// Sum of `quantity * price`. Entries missing from the catalog contribute nothing.
    ///
    /// Each line fits in a `u64`; the sum is kept in a `u128` so any number of
    /// `u32` quantities at `u32` prices adds up without overflow.
    pub fn total_cost(&self, catalog: &Catalog) -> u128 {
        self.quantities
            .iter()
            .filter_map(|(&id, &qty)| {
                catalog
                    .price_of(id)
                    .map(|price| u128::from(u64::from(qty) * u64::from(price)))
            })
            .sum()
    }

    pub fn liked_product_ids(&self) -> BTreeSet<ProductId> {
        self.likes
            .iter()
            .filter(|(_, liked)| **liked)
            .map(|(&id, _)| id)
            .collect()
    }

    /// Non-zero quantities only.
    pub fn quantity_by_product_id(&self) -> BTreeMap<ProductId, u32> {
        self.quantities
            .iter()
            .filter(|(_, qty)| **qty > 0)
            .map(|(&id, &qty)| (id, qty))
            .collect()
    }

    /// True when nothing is in the cart and nothing is liked.
    pub fn is_empty(&self) -> bool {
        self.quantities.values().all(|&q| q == 0) && self.likes.values().all(|&l| !l)
    }

    pub fn snapshot(&self, catalog: &Catalog) -> ViewSnapshot {
        ViewSnapshot {
            total_item_count: self.total_item_count(),
            total_cost: self.total_cost(catalog),
            liked_product_ids: self.liked_product_ids(),
            quantity_by_product_id: self.quantity_by_product_id(),
        }
    }
}
