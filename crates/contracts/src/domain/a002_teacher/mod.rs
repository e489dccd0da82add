pub mod aggregate;

pub use aggregate::{Teacher, TeacherDraft};
