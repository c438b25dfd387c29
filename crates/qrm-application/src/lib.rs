//! Application layer for QRM.
//!
//! This crate provides the menu use case that coordinates the host
//! capability, the aggregation logic, and the persisted settings.

pub mod menu_service;
pub mod view;

pub use menu_service::MenuService;
pub use view::{MenuItem, MenuPanel, MenuView};
