pub mod aggregate;

pub use aggregate::{Cycle, CycleDraft};
