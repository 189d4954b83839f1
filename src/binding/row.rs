use crate::catalog::ProductId;

use super::events::CellAction;
use super::stream::{InputSender, SubscriptionClosed};

/// Subscription handle owned by one reusable list row.
///
/// A row is rebound whenever it starts showing a different product; the old
/// handle is dropped first so a recycled row can never report gestures for
/// the product it used to show.
#[derive(Debug, Default)]
pub struct RowBinding {
    bound: Option<(ProductId, InputSender)>,
}

impl RowBinding {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point this row at `product_id`, replacing any previous binding.
    pub fn bind(&mut self, product_id: ProductId, sender: &InputSender) {
        self.unbind();
        self.bound = Some((product_id, sender.clone()));
    }

    pub fn unbind(&mut self) {
        if let Some((product_id, _)) = self.bound.take() {
            tracing::trace!(product_id, "row unbound");
        }
    }

    pub fn product_id(&self) -> Option<ProductId> {
        self.bound.as_ref().map(|(id, _)| *id)
    }

    /// Forward a gesture for the bound product. Gestures on an unbound row
    /// are dropped.
    pub fn emit(&self, action: CellAction) -> Result<(), SubscriptionClosed> {
        match &self.bound {
            Some((product_id, sender)) => sender.cell(*product_id, action),
            None => {
                tracing::trace!(?action, "gesture on unbound row ignored");
                Ok(())
            }
        }
    }
}
