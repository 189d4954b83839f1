use crate::catalog::ProductId;
use crate::mvi::Intent;

/// Intents that mutate the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartIntent {
    /// Stepper moved. The value is stored as-is, including 0.
    SetQuantity { product_id: ProductId, quantity: u32 },
    /// Heart button tapped.
    ToggleLike { product_id: ProductId },
    /// Reset control activated: drop every quantity and like.
    Clear,
}

impl Intent for CartIntent {}
