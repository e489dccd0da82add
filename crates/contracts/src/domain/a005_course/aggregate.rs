use serde::{Deserialize, Serialize};

use crate::domain::common::{Entity, Resource};
use crate::shared::validation::{FieldErrors, Validate, REQUIRED};

pub const MAX_SCORE_LIMIT: f64 = 100.0;

/// Curso impartido en un grado por un catedrático
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id_curso: i64,
    pub nombre: String,
    #[serde(default)]
    pub id_grado: Option<i64>,
    #[serde(default)]
    pub id_catedratico: Option<i64>,
    pub nota_aprobacion: f64,
    pub nota_maxima: f64,
}

impl Entity for Course {
    const RESOURCE: Resource = Resource::Courses;

    fn id(&self) -> i64 {
        self.id_curso
    }

    fn display_name(&self) -> String {
        self.nombre.clone()
    }
}

impl Course {
    pub fn to_draft(&self) -> CourseDraft {
        CourseDraft {
            nombre: self.nombre.clone(),
            id_grado: self.id_grado,
            id_catedratico: self.id_catedratico,
            nota_aprobacion: self.nota_aprobacion,
            nota_maxima: self.nota_maxima,
        }
    }

    pub fn is_passing(&self, score: f64) -> bool {
        score >= self.nota_aprobacion
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseDraft {
    pub nombre: String,
    pub id_grado: Option<i64>,
    pub id_catedratico: Option<i64>,
    pub nota_aprobacion: f64,
    pub nota_maxima: f64,
}

impl Default for CourseDraft {
    fn default() -> Self {
        Self {
            nombre: String::new(),
            id_grado: None,
            id_catedratico: None,
            nota_aprobacion: 60.0,
            nota_maxima: 100.0,
        }
    }
}

impl Validate for CourseDraft {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.require("nombre", &self.nombre);
        if self.id_grado.is_none() {
            errors.add("id_grado", REQUIRED);
        }
        if self.id_catedratico.is_none() {
            errors.add("id_catedratico", REQUIRED);
        }
        if !(self.nota_maxima > 0.0 && self.nota_maxima <= MAX_SCORE_LIMIT) {
            errors.add(
                "nota_maxima",
                format!("Debe estar entre 1 y {}", MAX_SCORE_LIMIT),
            );
        }
        if self.nota_aprobacion <= 0.0 {
            errors.add("nota_aprobacion", "Debe ser mayor que 0");
        } else if self.nota_aprobacion >= self.nota_maxima {
            errors.add("nota_aprobacion", "Debe ser menor que la nota máxima");
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> CourseDraft {
        CourseDraft {
            nombre: "Matemática".into(),
            id_grado: Some(2),
            id_catedratico: Some(5),
            ..CourseDraft::default()
        }
    }

    #[test]
    fn valid_draft_passes() {
        assert!(valid().validate().is_empty());
    }

    #[test]
    fn passing_grade_must_be_below_maximum() {
        let draft = CourseDraft {
            nota_aprobacion: 100.0,
            nota_maxima: 100.0,
            ..valid()
        };
        assert_eq!(
            draft.validate().get("nota_aprobacion"),
            Some("Debe ser menor que la nota máxima")
        );
    }

    #[test]
    fn maximum_is_bounded() {
        let draft = CourseDraft {
            nota_maxima: 150.0,
            ..valid()
        };
        assert!(draft.validate().get("nota_maxima").is_some());
    }

    #[test]
    fn references_are_required() {
        let draft = CourseDraft {
            id_grado: None,
            id_catedratico: None,
            ..valid()
        };
        let errors = draft.validate();
        assert!(errors.get("id_grado").is_some());
        assert!(errors.get("id_catedratico").is_some());
    }
}
