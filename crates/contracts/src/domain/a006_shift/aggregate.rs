use serde::{Deserialize, Serialize};

use crate::domain::common::{Entity, Resource};
use crate::shared::validation::{FieldErrors, Validate};

/// Jornada (matutina, vespertina, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    pub id_jornada: i64,
    pub nombre: String,
    #[serde(default)]
    pub hora_inicio: Option<String>,
    #[serde(default)]
    pub hora_fin: Option<String>,
}

impl Entity for Shift {
    const RESOURCE: Resource = Resource::Shifts;

    fn id(&self) -> i64 {
        self.id_jornada
    }

    fn display_name(&self) -> String {
        self.nombre.clone()
    }
}

impl Shift {
    pub fn to_draft(&self) -> ShiftDraft {
        ShiftDraft {
            nombre: self.nombre.clone(),
            hora_inicio: self.hora_inicio.clone(),
            hora_fin: self.hora_fin.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShiftDraft {
    pub nombre: String,
    pub hora_inicio: Option<String>,
    pub hora_fin: Option<String>,
}

impl Validate for ShiftDraft {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.require("nombre", &self.nombre);

        let start = self
            .hora_inicio
            .as_deref()
            .filter(|h| !h.is_empty())
            .and_then(|h| errors.time("hora_inicio", h));
        let end = self
            .hora_fin
            .as_deref()
            .filter(|h| !h.is_empty())
            .and_then(|h| errors.time("hora_fin", h));
        if let (Some(start), Some(end)) = (start, end) {
            if end <= start {
                errors.add("hora_fin", "Debe ser posterior a la hora de inicio");
            }
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_must_follow_start() {
        let draft = ShiftDraft {
            nombre: "Matutina".into(),
            hora_inicio: Some("12:30".into()),
            hora_fin: Some("07:00".into()),
        };
        assert!(draft.validate().get("hora_fin").is_some());

        let draft = ShiftDraft {
            hora_fin: Some("13:00".into()),
            ..draft
        };
        assert!(draft.validate().is_empty());
    }

    #[test]
    fn hours_with_seconds_from_the_api_are_accepted() {
        let shift = Shift {
            id_jornada: 1,
            nombre: "Matutina".into(),
            hora_inicio: Some("07:30:00".into()),
            hora_fin: Some("12:30:00".into()),
        };
        assert!(shift.to_draft().validate().is_empty());

        let reversed = ShiftDraft {
            hora_inicio: Some("12:30:00".into()),
            hora_fin: Some("07:30".into()),
            ..shift.to_draft()
        };
        assert!(reversed.validate().get("hora_fin").is_some());
    }

    #[test]
    fn hours_are_optional() {
        let draft = ShiftDraft {
            nombre: "Fin de semana".into(),
            ..ShiftDraft::default()
        };
        assert!(draft.validate().is_empty());
    }
}
