use serde::{Deserialize, Serialize};

use crate::domain::a001_student::aggregate::PHONE_DIGITS;
use crate::domain::common::{Entity, Resource};
use crate::shared::validation::{FieldErrors, Validate};

/// Documento Personal de Identificación
pub const DPI_DIGITS: usize = 13;

// ============================================================================
// Entity
// ============================================================================

/// Catedrático (docente)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    pub id_catedratico: i64,
    pub dpi: String,
    pub nombres: String,
    pub apellidos: String,
    #[serde(default)]
    pub telefono: Option<String>,
    #[serde(default)]
    pub correo: Option<String>,
    #[serde(default = "default_true")]
    pub estado: bool,
}

fn default_true() -> bool {
    true
}

impl Entity for Teacher {
    const RESOURCE: Resource = Resource::Teachers;

    fn id(&self) -> i64 {
        self.id_catedratico
    }

    fn display_name(&self) -> String {
        format!("{} {}", self.nombres, self.apellidos)
    }
}

impl Teacher {
    pub fn to_draft(&self) -> TeacherDraft {
        TeacherDraft {
            dpi: self.dpi.clone(),
            nombres: self.nombres.clone(),
            apellidos: self.apellidos.clone(),
            telefono: self.telefono.clone(),
            correo: self.correo.clone(),
            estado: self.estado,
        }
    }
}

// ============================================================================
// Create / update body
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeacherDraft {
    pub dpi: String,
    pub nombres: String,
    pub apellidos: String,
    pub telefono: Option<String>,
    pub correo: Option<String>,
    pub estado: bool,
}

impl Default for TeacherDraft {
    fn default() -> Self {
        Self {
            dpi: String::new(),
            nombres: String::new(),
            apellidos: String::new(),
            telefono: None,
            correo: None,
            estado: true,
        }
    }
}

impl Validate for TeacherDraft {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if errors.require("dpi", &self.dpi) {
            errors.exact_digits("dpi", &self.dpi, DPI_DIGITS);
        }
        errors.require("nombres", &self.nombres);
        errors.require("apellidos", &self.apellidos);
        errors.optional_exact_digits("telefono", self.telefono.as_deref(), PHONE_DIGITS);
        if let Some(correo) = self.correo.as_deref().filter(|c| !c.trim().is_empty()) {
            errors.email("correo", correo);
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> TeacherDraft {
        TeacherDraft {
            dpi: "2547896320101".into(),
            nombres: "Carlos".into(),
            apellidos: "Méndez".into(),
            telefono: Some("42424242".into()),
            correo: Some("cmendez@ceic.edu.gt".into()),
            estado: true,
        }
    }

    #[test]
    fn valid_draft_passes() {
        assert!(valid().validate().is_empty());
    }

    #[test]
    fn dpi_must_have_thirteen_digits() {
        for dpi in ["254789632010", "25478963201011", "25478963201a1"] {
            let draft = TeacherDraft { dpi: dpi.into(), ..valid() };
            assert!(draft.validate().get("dpi").is_some(), "{dpi}");
        }
    }

    #[test]
    fn optional_contact_fields_may_be_blank() {
        let draft = TeacherDraft {
            telefono: Some(String::new()),
            correo: None,
            ..valid()
        };
        assert!(draft.validate().is_empty());

        let draft = TeacherDraft {
            correo: Some("sin-arroba".into()),
            ..valid()
        };
        assert!(draft.validate().get("correo").is_some());
    }
}
