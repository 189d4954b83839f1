//! Product catalog.
//!
//! The catalog is built once at startup and shared read-only (`Arc<Catalog>`)
//! between the view model and the view binding.

use serde::{Deserialize, Serialize};

/// Stable product identity.
pub type ProductId = u32;

/// Immutable product record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Image reference (SF Symbol name in the reference app).
    #[serde(rename = "image")]
    pub image_ref: String,
    pub price: u32,
}

impl Product {
    pub fn new(id: ProductId, name: &str, image_ref: &str, price: u32) -> Self {
        Self {
            id,
            name: name.to_string(),
            image_ref: image_ref.to_string(),
            price,
        }
    }
}

/// Fixed, ordered list of purchasable products.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Products in display order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    pub fn price_of(&self, id: ProductId) -> Option<u32> {
        self.get(id).map(|p| p.price)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(default_products())
    }
}

/// The built-in five-product catalog.
pub fn default_products() -> Vec<Product> {
    vec![
        Product::new(1, "iPhone", "iphone", 1),
        Product::new(2, "iPad", "ipad", 3),
        Product::new(3, "MacBook", "macbook", 10),
        Product::new(4, "XBOX", "xbox.logo", 5),
        Product::new(5, "PlayStation", "playstation.logo", 7),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_has_five_products_in_order() {
        let catalog = Catalog::default();
        let names: Vec<&str> = catalog.products().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["iPhone", "iPad", "MacBook", "XBOX", "PlayStation"]);
    }

    #[test]
    fn default_catalog_prices() {
        let catalog = Catalog::default();
        let pairs: Vec<(ProductId, u32)> =
            catalog.products().iter().map(|p| (p.id, p.price)).collect();
        assert_eq!(pairs, [(1, 1), (2, 3), (3, 10), (4, 5), (5, 7)]);
    }

    #[test]
    fn lookup_by_id() {
        let catalog = Catalog::default();
        assert_eq!(catalog.get(3).map(|p| p.name.as_str()), Some("MacBook"));
        assert_eq!(catalog.price_of(4), Some(5));
        assert!(!catalog.contains(42));
        assert_eq!(catalog.price_of(42), None);
    }

    #[test]
    fn product_deserializes_image_field() {
        let product: Product =
            toml::from_str("id = 9\nname = \"Switch\"\nimage = \"gamecontroller\"\nprice = 4\n")
                .unwrap();
        assert_eq!(product, Product::new(9, "Switch", "gamecontroller", 4));
    }
}
