pub mod aggregate;

pub use aggregate::{Student, StudentDraft};
