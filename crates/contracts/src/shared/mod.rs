pub mod list_envelope;
pub mod list_state;
pub mod validation;
