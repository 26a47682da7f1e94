//! Interactive dashboard over a table of electric vehicle specifications.
//!
//! The [`data`] module is the UI-independent core (loading, normalisation,
//! filtering, aggregation); [`ui`] and [`app`] render it with egui.

pub mod app;
pub mod color;
pub mod config;
pub mod data;
pub mod state;
pub mod ui;
