use serde::{Deserialize, Serialize};

use crate::domain::common::{Entity, Resource};
use crate::shared::validation::{parse_date, FieldErrors, Validate};

/// Phone numbers are national 8-digit numbers
pub const PHONE_DIGITS: usize = 8;

// ============================================================================
// Entity
// ============================================================================

/// Alumno inscrito
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id_alumno: i64,
    pub carne: String,
    pub nombres: String,
    pub apellidos: String,
    #[serde(default)]
    pub fecha_nacimiento: Option<String>,
    #[serde(default)]
    pub genero: Option<String>,
    #[serde(default)]
    pub id_grado: Option<i64>,
    #[serde(default)]
    pub telefono_encargado: Option<String>,
    #[serde(default = "default_true")]
    pub estado: bool,
}

fn default_true() -> bool {
    true
}

impl Entity for Student {
    const RESOURCE: Resource = Resource::Students;

    fn id(&self) -> i64 {
        self.id_alumno
    }

    fn display_name(&self) -> String {
        format!("{} {}", self.nombres, self.apellidos)
    }
}

impl Student {
    pub fn to_draft(&self) -> StudentDraft {
        StudentDraft {
            carne: self.carne.clone(),
            nombres: self.nombres.clone(),
            apellidos: self.apellidos.clone(),
            fecha_nacimiento: self.fecha_nacimiento.clone(),
            genero: self.genero.clone(),
            id_grado: self.id_grado,
            telefono_encargado: self.telefono_encargado.clone(),
            estado: self.estado,
        }
    }
}

// ============================================================================
// Create / update body
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentDraft {
    pub carne: String,
    pub nombres: String,
    pub apellidos: String,
    pub fecha_nacimiento: Option<String>,
    pub genero: Option<String>,
    pub id_grado: Option<i64>,
    pub telefono_encargado: Option<String>,
    pub estado: bool,
}

impl Default for StudentDraft {
    fn default() -> Self {
        Self {
            carne: String::new(),
            nombres: String::new(),
            apellidos: String::new(),
            fecha_nacimiento: None,
            genero: None,
            id_grado: None,
            telefono_encargado: None,
            estado: true,
        }
    }
}

impl Validate for StudentDraft {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if errors.require("carne", &self.carne)
            && !self.carne.trim().chars().all(|c| c.is_ascii_alphanumeric())
        {
            errors.add("carne", "Solo letras y números");
        }
        errors.require("nombres", &self.nombres);
        errors.require("apellidos", &self.apellidos);

        if let Some(fecha) = self.fecha_nacimiento.as_deref().filter(|f| !f.trim().is_empty()) {
            if let Some(date) = errors.date("fecha_nacimiento", fecha) {
                if date >= chrono::Utc::now().date_naive() {
                    errors.add("fecha_nacimiento", "La fecha debe ser anterior a hoy");
                }
            }
        }
        if let Some(genero) = self.genero.as_deref().filter(|g| !g.is_empty()) {
            if genero != "M" && genero != "F" {
                errors.add("genero", "Valores permitidos: M, F");
            }
        }
        errors.optional_exact_digits(
            "telefono_encargado",
            self.telefono_encargado.as_deref(),
            PHONE_DIGITS,
        );
        errors
    }
}

/// Age in whole years at `today`, if the birth date is known and valid
pub fn age_on(student: &Student, today: chrono::NaiveDate) -> Option<u32> {
    let born = parse_date(student.fecha_nacimiento.as_deref()?)?;
    today.years_since(born)
}
