pub mod aggregate;

pub use aggregate::{Shift, ShiftDraft};
