use serde::{Deserialize, Serialize};

use crate::domain::common::{Entity, Resource};
use crate::shared::validation::{FieldErrors, Validate};

/// Grado (por ejemplo "Primero Básico", sección "A")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grade {
    pub id_grado: i64,
    pub nombre: String,
    #[serde(default)]
    pub seccion: Option<String>,
    #[serde(default)]
    pub id_nivel_academico: Option<i64>,
    #[serde(default)]
    pub id_jornada: Option<i64>,
}

impl Entity for Grade {
    const RESOURCE: Resource = Resource::Grades;

    fn id(&self) -> i64 {
        self.id_grado
    }

    fn display_name(&self) -> String {
        match self.seccion.as_deref().filter(|s| !s.is_empty()) {
            Some(seccion) => format!("{} {}", self.nombre, seccion),
            None => self.nombre.clone(),
        }
    }
}

impl Grade {
    pub fn to_draft(&self) -> GradeDraft {
        GradeDraft {
            nombre: self.nombre.clone(),
            seccion: self.seccion.clone(),
            id_nivel_academico: self.id_nivel_academico,
            id_jornada: self.id_jornada,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GradeDraft {
    pub nombre: String,
    pub seccion: Option<String>,
    pub id_nivel_academico: Option<i64>,
    pub id_jornada: Option<i64>,
}

impl Validate for GradeDraft {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.require("nombre", &self.nombre);
        if let Some(seccion) = self.seccion.as_deref().filter(|s| !s.is_empty()) {
            let mut chars = seccion.chars();
            let single_letter = matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_uppercase());
            if !single_letter {
                errors.add("seccion", "Una letra mayúscula (A-Z)");
            }
        }
        if self.id_nivel_academico.is_none() {
            errors.add("id_nivel_academico", crate::shared::validation::REQUIRED);
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_is_a_single_uppercase_letter() {
        let mut draft = GradeDraft {
            nombre: "Primero Básico".into(),
            seccion: Some("A".into()),
            id_nivel_academico: Some(1),
            id_jornada: None,
        };
        assert!(draft.validate().is_empty());

        for bad in ["a", "AB", "1"] {
            draft.seccion = Some(bad.into());
            assert!(draft.validate().get("seccion").is_some(), "{bad}");
        }
    }

    #[test]
    fn level_is_required() {
        let draft = GradeDraft {
            nombre: "Cuarto".into(),
            ..GradeDraft::default()
        };
        assert!(draft.validate().get("id_nivel_academico").is_some());
    }

    #[test]
    fn display_name_appends_section() {
        let grade = Grade {
            id_grado: 1,
            nombre: "Segundo".into(),
            seccion: Some("B".into()),
            id_nivel_academico: None,
            id_jornada: None,
        };
        assert_eq!(grade.display_name(), "Segundo B");
    }
}
