pub mod aggregate;

pub use aggregate::{AcademicLevel, AcademicLevelDraft};
