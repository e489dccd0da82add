pub mod aggregate;

pub use aggregate::{Course, CourseDraft};
