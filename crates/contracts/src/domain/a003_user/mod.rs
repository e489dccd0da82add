pub mod aggregate;

pub use aggregate::{User, UserDraft, ROLES};
