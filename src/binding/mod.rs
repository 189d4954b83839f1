//! Event interface between a view binding and the cart view model.
//!
//! The view binding sends [`InputEvent`]s through an [`InputSender`]; the
//! view model answers with [`OutputEvent`]s on an [`OutputStream`]. Data only
//! flows that way round.

mod events;
mod row;
mod stream;
mod view_model;

pub use events::{CellAction, InputEvent, OutputEvent};
pub use row::RowBinding;
pub use stream::{input_channel, InputReceiver, InputSender, OutputStream, SubscriptionClosed};
pub use view_model::ViewModel;
