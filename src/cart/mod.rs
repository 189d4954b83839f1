//! Cart/Likes state and its reducer.

mod intent;
mod reducer;
mod snapshot;
mod state;

pub use intent::CartIntent;
pub use reducer::CartReducer;
pub use snapshot::{RowModel, ViewSnapshot};
pub use state::CartState;
