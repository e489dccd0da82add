use serde::{Deserialize, Serialize};

use crate::domain::common::{Entity, Resource};
use crate::shared::validation::{FieldErrors, Validate};

/// Nivel académico (Primaria, Básicos, Diversificado)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcademicLevel {
    pub id_nivel_academico: i64,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
}

impl Entity for AcademicLevel {
    const RESOURCE: Resource = Resource::AcademicLevels;

    fn id(&self) -> i64 {
        self.id_nivel_academico
    }

    fn display_name(&self) -> String {
        self.nombre.clone()
    }
}

impl AcademicLevel {
    pub fn to_draft(&self) -> AcademicLevelDraft {
        AcademicLevelDraft {
            nombre: self.nombre.clone(),
            descripcion: self.descripcion.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AcademicLevelDraft {
    pub nombre: String,
    pub descripcion: Option<String>,
}

impl Validate for AcademicLevelDraft {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.require("nombre", &self.nombre);
        if self.descripcion.as_deref().is_some_and(|d| d.chars().count() > 255) {
            errors.add("descripcion", "Máximo 255 caracteres");
        }
        errors
    }
}
