use serde::Serialize;

use crate::cart::{CartIntent, ViewSnapshot};
use crate::catalog::{Product, ProductId};

/// Gesture raised by a single list row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellAction {
    /// Stepper value changed.
    QuantityChanged(u32),
    /// Heart button tapped.
    HeartToggled,
}

/// Signals consumed by the view model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// The view is ready for its first data.
    Initialize,
    Cell {
        product_id: ProductId,
        action: CellAction,
    },
    Reset,
}

impl InputEvent {
    pub fn quantity_changed(product_id: ProductId, quantity: u32) -> Self {
        Self::Cell {
            product_id,
            action: CellAction::QuantityChanged(quantity),
        }
    }

    pub fn heart_toggled(product_id: ProductId) -> Self {
        Self::Cell {
            product_id,
            action: CellAction::HeartToggled,
        }
    }

    /// Cart intent carried by this event. `Initialize` only triggers a load.
    pub fn intent(&self) -> Option<CartIntent> {
        match *self {
            InputEvent::Initialize => None,
            InputEvent::Cell {
                product_id,
                action: CellAction::QuantityChanged(quantity),
            } => Some(CartIntent::SetQuantity {
                product_id,
                quantity,
            }),
            InputEvent::Cell {
                product_id,
                action: CellAction::HeartToggled,
            } => Some(CartIntent::ToggleLike { product_id }),
            InputEvent::Reset => Some(CartIntent::Clear),
        }
    }
}

/// Snapshots emitted by the view model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum OutputEvent {
    /// Full catalog, sets the row count and row content source.
    ProductsLoaded { products: Vec<Product> },
    /// Derived state after a change.
    ViewUpdated(ViewSnapshot),
}
