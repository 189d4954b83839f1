use crate::mvi::Reducer;

use super::intent::CartIntent;
use super::state::CartState;

/// Reducer for cart and likes.
///
/// Accepts any quantity without validation; bounds are the view's concern.
pub struct CartReducer;

impl Reducer for CartReducer {
    type State = CartState;
    type Intent = CartIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CartIntent::SetQuantity {
                product_id,
                quantity,
            } => {
                state.quantities.insert(product_id, quantity);
                state
            }
            CartIntent::ToggleLike { product_id } => {
                let liked = state.likes.entry(product_id).or_insert(false);
                *liked = !*liked;
                state
            }
            CartIntent::Clear => CartState::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_quantity_keeps_zero_entries() {
        let state = CartReducer::reduce_all(
            CartState::default(),
            [
                CartIntent::SetQuantity {
                    product_id: 2,
                    quantity: 4,
                },
                CartIntent::SetQuantity {
                    product_id: 2,
                    quantity: 0,
                },
            ],
        );
        assert_eq!(state.quantities.get(&2), Some(&0));
        assert_eq!(state.total_item_count(), 0);
    }

    #[test]
    fn toggle_from_absent_likes() {
        let state = CartReducer::reduce(
            CartState::default(),
            CartIntent::ToggleLike { product_id: 5 },
        );
        assert!(state.is_liked(5));
    }

    #[test]
    fn toggle_from_unliked_likes_again() {
        let state = CartReducer::reduce_all(
            CartState::default(),
            [
                CartIntent::ToggleLike { product_id: 5 },
                CartIntent::ToggleLike { product_id: 5 },
                CartIntent::ToggleLike { product_id: 5 },
            ],
        );
        assert!(state.is_liked(5));
    }

    #[test]
    fn clear_returns_default() {
        let state = CartReducer::reduce_all(
            CartState::default(),
            [
                CartIntent::SetQuantity {
                    product_id: 1,
                    quantity: 9,
                },
                CartIntent::ToggleLike { product_id: 1 },
                CartIntent::Clear,
            ],
        );
        assert_eq!(state, CartState::default());
    }
}
