use serde::{Deserialize, Serialize};

use crate::domain::common::{Entity, Resource};
use crate::shared::validation::{FieldErrors, Validate};

pub const ROLES: [&str; 3] = ["admin", "docente", "secretaria"];
pub const MIN_PASSWORD_LEN: usize = 8;

// ============================================================================
// Entity
// ============================================================================

/// Usuario de la consola
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id_usuario: i64,
    pub nombre_usuario: String,
    pub correo: String,
    pub rol: String,
    #[serde(default = "default_true")]
    pub estado: bool,
}

fn default_true() -> bool {
    true
}

impl Entity for User {
    const RESOURCE: Resource = Resource::Users;

    fn id(&self) -> i64 {
        self.id_usuario
    }

    fn display_name(&self) -> String {
        self.nombre_usuario.clone()
    }
}

impl User {
    /// The password is never read back; updates leave it unchanged unless
    /// a new one is typed.
    pub fn to_draft(&self) -> UserDraft {
        UserDraft {
            nombre_usuario: self.nombre_usuario.clone(),
            correo: self.correo.clone(),
            rol: self.rol.clone(),
            contrasena: None,
            estado: self.estado,
        }
    }
}

// ============================================================================
// Create / update body
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDraft {
    pub nombre_usuario: String,
    pub correo: String,
    pub rol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contrasena: Option<String>,
    pub estado: bool,
}

impl Default for UserDraft {
    fn default() -> Self {
        Self {
            nombre_usuario: String::new(),
            correo: String::new(),
            rol: "docente".to_string(),
            contrasena: None,
            estado: true,
        }
    }
}

impl Validate for UserDraft {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if errors.require("nombre_usuario", &self.nombre_usuario) {
            errors.min_len("nombre_usuario", &self.nombre_usuario, 4);
            if self.nombre_usuario.chars().any(char::is_whitespace) {
                errors.add("nombre_usuario", "No puede contener espacios");
            }
        }
        if errors.require("correo", &self.correo) {
            errors.email("correo", &self.correo);
        }
        if !ROLES.contains(&self.rol.as_str()) {
            errors.add("rol", format!("Valores permitidos: {}", ROLES.join(", ")));
        }
        if let Some(pass) = self.contrasena.as_deref().filter(|p| !p.is_empty()) {
            errors.min_len("contrasena", pass, MIN_PASSWORD_LEN);
        }
        errors
    }

    fn validate_create(&self) -> FieldErrors {
        let mut errors = self.validate();
        if self.contrasena.as_deref().map_or(true, str::is_empty) {
            errors.add("contrasena", crate::shared::validation::REQUIRED);
        }
        errors
    }
}
