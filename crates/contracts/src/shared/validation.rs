//! Client-side checks that run before a create/update request is sent.
//!
//! Failures are collected per field and rendered inline next to the
//! offending input; nothing is sent to the server while any error remains.

use chrono::{NaiveDate, NaiveTime};
use std::collections::BTreeMap;

pub const REQUIRED: &str = "Campo requerido";

/// Validation errors keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an error; the first message for a field wins
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    // ------------------------------------------------------------------
    // Reusable checks
    // ------------------------------------------------------------------

    pub fn require(&mut self, field: &'static str, value: &str) -> bool {
        if value.trim().is_empty() {
            self.add(field, REQUIRED);
            false
        } else {
            true
        }
    }

    pub fn min_len(&mut self, field: &'static str, value: &str, min: usize) {
        if value.trim().chars().count() < min {
            self.add(field, format!("Debe tener al menos {} caracteres", min));
        }
    }

    /// Fixed-length numeric identifiers (DPI, phone numbers)
    pub fn exact_digits(&mut self, field: &'static str, value: &str, digits: usize) {
        let value = value.trim();
        if value.len() != digits || !value.chars().all(|c| c.is_ascii_digit()) {
            self.add(field, format!("Debe contener exactamente {} dígitos", digits));
        }
    }

    pub fn optional_exact_digits(&mut self, field: &'static str, value: Option<&str>, digits: usize) {
        if let Some(v) = value.filter(|v| !v.trim().is_empty()) {
            self.exact_digits(field, v, digits);
        }
    }

    pub fn email(&mut self, field: &'static str, value: &str) {
        let value = value.trim();
        let valid = match value.split_once('@') {
            Some((user, domain)) => {
                !user.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
            }
            None => false,
        };
        if !valid {
            self.add(field, "Correo electrónico inválido");
        }
    }

    pub fn date(&mut self, field: &'static str, value: &str) -> Option<NaiveDate> {
        match parse_date(value) {
            Some(d) => Some(d),
            None => {
                self.add(field, "Fecha inválida (AAAA-MM-DD)");
                None
            }
        }
    }

    pub fn time(&mut self, field: &'static str, value: &str) -> Option<NaiveTime> {
        match parse_time(value) {
            Some(t) => Some(t),
            None => {
                self.add(field, "Hora inválida (HH:MM)");
                None
            }
        }
    }
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// "HH:MM" as typed in a time input, or "HH:MM:SS" as the API returns it
pub fn parse_time(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .ok()
}

/// Implemented by create/update request bodies
pub trait Validate {
    /// Checks shared by create and update
    fn validate(&self) -> FieldErrors;

    /// Checks for a create request; defaults to `validate`
    fn validate_create(&self) -> FieldErrors {
        self.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_error_per_field_wins() {
        let mut errors = FieldErrors::new();
        errors.require("nombre", "  ");
        errors.min_len("nombre", "", 3);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("nombre"), Some(REQUIRED));
    }

    #[test]
    fn exact_digits_rejects_wrong_length_and_letters() {
        let mut errors = FieldErrors::new();
        errors.exact_digits("dpi", "1234567890123", 13);
        assert!(errors.is_empty());
        errors.exact_digits("dpi", "123456789012", 13);
        errors.exact_digits("telefono", "5555abcd", 8);
        assert!(errors.get("dpi").is_some());
        assert!(errors.get("telefono").is_some());
    }

    #[test]
    fn email_needs_user_and_dotted_domain() {
        let mut ok = FieldErrors::new();
        ok.email("correo", "ana@ceic.edu.gt");
        assert!(ok.is_empty());

        for bad in ["ana", "@ceic.edu", "ana@ceic", "ana@.gt"] {
            let mut errors = FieldErrors::new();
            errors.email("correo", bad);
            assert!(errors.get("correo").is_some(), "{bad} should be rejected");
        }
    }

    #[test]
    fn dates_and_times_use_iso_formats() {
        let mut errors = FieldErrors::new();
        assert!(errors.date("fecha", "2024-02-29").is_some());
        assert!(errors.date("otra", "29/02/2024").is_none());
        assert!(errors.time("hora", "07:30").is_some());
        assert!(errors.time("hora", "07:30:00").is_some());
        assert!(errors.time("hora_fin", "7h30").is_none());
        assert_eq!(errors.len(), 2);
    }
}
