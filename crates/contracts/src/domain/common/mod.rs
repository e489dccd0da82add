//! Common types and traits for all school entities

pub mod entity;
pub mod resource;

// Re-exports
pub use entity::Entity;
pub use resource::Resource;
