//! List page state: pure state machines plus the Leptos hook wiring them.

pub mod controller;
pub mod delete_flow;
pub mod highlight;
pub mod loader;
pub mod notification;

pub use controller::{notify, use_list_controller, ListController};
pub use notification::{Notification, NotificationKind};
