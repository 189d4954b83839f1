use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::catalog::{Catalog, Product, ProductId};

/// Derived view state carried by `OutputEvent::ViewUpdated`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ViewSnapshot {
    pub total_item_count: u64,
    pub total_cost: u128,
    pub liked_product_ids: BTreeSet<ProductId>,
    pub quantity_by_product_id: BTreeMap<ProductId, u32>,
}

impl ViewSnapshot {
    pub fn quantity(&self, id: ProductId) -> u32 {
        self.quantity_by_product_id.get(&id).copied().unwrap_or(0)
    }

    pub fn is_liked(&self, id: ProductId) -> bool {
        self.liked_product_ids.contains(&id)
    }

    /// Section header text.
    pub fn header_title(&self) -> String {
        format!("Number of items: {}", self.total_item_count)
    }

    /// Section footer text.
    pub fn footer_title(&self) -> String {
        format!("Total Cost: {}", self.total_cost)
    }

    /// One row model per catalog entry, in catalog order.
    pub fn rows<'a>(&self, catalog: &'a Catalog) -> Vec<RowModel<'a>> {
        catalog
            .products()
            .iter()
            .map(|product| self.row(product))
            .collect()
    }

    pub fn row<'a>(&self, product: &'a Product) -> RowModel<'a> {
        RowModel {
            product,
            quantity: self.quantity(product.id),
            is_liked: self.is_liked(product.id),
        }
    }
}

/// Everything one list row needs to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowModel<'a> {
    pub product: &'a Product,
    pub quantity: u32,
    pub is_liked: bool,
}

impl RowModel<'_> {
    /// Row label, e.g. `"MacBook -$10"`.
    pub fn label(&self) -> String {
        format!("{} -${}", self.product.name, self.product.price)
    }
}
