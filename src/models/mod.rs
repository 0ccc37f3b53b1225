//! Data models for the theater, its seats and prices.
//!
//! Models are independent of the UI and of the booking flow.

pub mod price;
pub mod scope;
pub mod seat;
pub mod theater;

// Re-export all model types
pub use price::{Price, PriceParseError};
pub use scope::ViewScope;
pub use seat::{row_index, row_label, Block, SeatId, SeatIdError, SeatStatus, MAX_ROWS};
pub use theater::{BlockColumns, TheaterLayout};
