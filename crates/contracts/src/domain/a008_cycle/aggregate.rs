use serde::{Deserialize, Serialize};

use crate::domain::common::{Entity, Resource};
use crate::shared::validation::{FieldErrors, Validate};

pub const MIN_YEAR: i32 = 2000;
pub const MAX_YEAR: i32 = 2100;

/// Ciclo escolar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cycle {
    pub id_ciclo: i64,
    pub anio: i32,
    #[serde(default)]
    pub descripcion: Option<String>,
    pub fecha_inicio: String,
    pub fecha_fin: String,
    #[serde(default)]
    pub activo: bool,
}

impl Entity for Cycle {
    const RESOURCE: Resource = Resource::Cycles;

    fn id(&self) -> i64 {
        self.id_ciclo
    }

    fn display_name(&self) -> String {
        match self.descripcion.as_deref().filter(|d| !d.is_empty()) {
            Some(d) => format!("{} - {}", self.anio, d),
            None => self.anio.to_string(),
        }
    }
}

impl Cycle {
    pub fn to_draft(&self) -> CycleDraft {
        CycleDraft {
            anio: self.anio,
            descripcion: self.descripcion.clone(),
            fecha_inicio: self.fecha_inicio.clone(),
            fecha_fin: self.fecha_fin.clone(),
            activo: self.activo,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleDraft {
    pub anio: i32,
    pub descripcion: Option<String>,
    pub fecha_inicio: String,
    pub fecha_fin: String,
    pub activo: bool,
}

impl Default for CycleDraft {
    fn default() -> Self {
        Self {
            anio: MIN_YEAR,
            descripcion: None,
            fecha_inicio: String::new(),
            fecha_fin: String::new(),
            activo: false,
        }
    }
}

impl Validate for CycleDraft {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if !(MIN_YEAR..=MAX_YEAR).contains(&self.anio) {
            errors.add("anio", format!("Debe estar entre {} y {}", MIN_YEAR, MAX_YEAR));
        }
        let start = if errors.require("fecha_inicio", &self.fecha_inicio) {
            errors.date("fecha_inicio", &self.fecha_inicio)
        } else {
            None
        };
        let end = if errors.require("fecha_fin", &self.fecha_fin) {
            errors.date("fecha_fin", &self.fecha_fin)
        } else {
            None
        };
        if let (Some(start), Some(end)) = (start, end) {
            if end <= start {
                errors.add("fecha_fin", "Debe ser posterior a la fecha de inicio");
            }
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> CycleDraft {
        CycleDraft {
            anio: 2025,
            descripcion: Some("Ciclo 2025".into()),
            fecha_inicio: "2025-01-15".into(),
            fecha_fin: "2025-10-20".into(),
            activo: true,
        }
    }

    #[test]
    fn valid_draft_passes() {
        assert!(valid().validate().is_empty());
    }

    #[test]
    fn end_date_must_follow_start() {
        let draft = CycleDraft {
            fecha_fin: "2025-01-15".into(),
            ..valid()
        };
        assert!(draft.validate().get("fecha_fin").is_some());
    }

    #[test]
    fn year_and_dates_are_checked() {
        let draft = CycleDraft {
            anio: 1999,
            fecha_inicio: "".into(),
            fecha_fin: "20-10-2025".into(),
            ..valid()
        };
        let errors = draft.validate();
        assert!(errors.get("anio").is_some());
        assert!(errors.get("fecha_inicio").is_some());
        assert!(errors.get("fecha_fin").is_some());
    }
}
