use contracts::domain::a003_user::{User, UserDraft};

use crate::shared::entity_view::{
    status_label, Column, EditableEntity, FieldKind, FormField, ListColumns,
};

const ROLE_CHOICES: &[(&str, &str)] = &[
    ("admin", "Administrador"),
    ("docente", "Docente"),
    ("secretaria", "Secretaría"),
];

fn role_label(rol: &str) -> String {
    ROLE_CHOICES
        .iter()
        .find(|(value, _)| *value == rol)
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| rol.to_string())
}

const COLUMNS: &[Column] = &[
    Column::new("Usuario", "nombre_usuario"),
    Column::new("Correo", "correo"),
    Column::new("Rol", "rol"),
    Column::new("Estado", "estado"),
];

impl ListColumns for User {
    fn columns() -> &'static [Column] {
        COLUMNS
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.nombre_usuario.clone(),
            self.correo.clone(),
            role_label(&self.rol),
            status_label(self.estado),
        ]
    }
}

const FIELDS: &[FormField] = &[
    FormField::required("nombre_usuario", "Usuario", FieldKind::Text),
    FormField::required("correo", "Correo", FieldKind::Email),
    FormField::required("rol", "Rol", FieldKind::Select(ROLE_CHOICES)),
    FormField::optional("contrasena", "Contraseña", FieldKind::Password),
    FormField::required("estado", "Activo", FieldKind::Bool),
];

impl EditableEntity for User {
    type Draft = UserDraft;

    /// The password is only sent when typed; it is mandatory on create
    fn form_fields() -> &'static [FormField] {
        FIELDS
    }

    fn to_draft(&self) -> UserDraft {
        User::to_draft(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_user::ROLES;

    #[test]
    fn every_role_has_a_label() {
        for role in ROLES {
            assert!(ROLE_CHOICES.iter().any(|(value, _)| *value == role));
        }
        assert_eq!(role_label("docente"), "Docente");
        assert_eq!(role_label("otro"), "otro");
    }
}
