//! Dashboard UI components
//!
//! Individual rendering components for the dashboard

pub mod alerts;
pub mod data_card;
pub mod footer;
pub mod header;
pub mod logs;
