//! Seatmap Library
//!
//! This library provides the seat-state model, the sectioned layout
//! projection, selection and pricing for an interactive theater seat
//! picker, plus the terminal and command-line front ends built on it.

// Module declarations
pub mod booking;
pub mod cli;
pub mod config;
pub mod constants;
pub mod logging;
pub mod models;
pub mod registry;
pub mod shortcuts;
pub mod tui;
pub mod view;

pub use booking::{BookingError, BookingReceipt, SeatMapSnapshot, SelectionController};
pub use registry::{RandomSource, SeatRegistry};
