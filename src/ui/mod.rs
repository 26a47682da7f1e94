//! Presenters: each chart reads only the [`DashboardSummary`] for the
//! current selection and redraws completely every frame.
//!
//! [`DashboardSummary`]: crate::data::aggregate::DashboardSummary

pub mod panels;
pub mod pie;
pub mod plot;
