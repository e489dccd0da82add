pub mod aggregate;

pub use aggregate::{Grade, GradeDraft};
