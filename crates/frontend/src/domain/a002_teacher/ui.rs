use contracts::domain::a002_teacher::{Teacher, TeacherDraft};

use crate::shared::entity_view::{
    or_dash, status_label, Column, EditableEntity, FieldKind, FormField, ListColumns,
};

const COLUMNS: &[Column] = &[
    Column::new("DPI", "dpi"),
    Column::new("Nombres", "nombres"),
    Column::new("Apellidos", "apellidos"),
    Column::new("Teléfono", "telefono"),
    Column::new("Correo", "correo"),
    Column::new("Estado", "estado"),
];

impl ListColumns for Teacher {
    fn columns() -> &'static [Column] {
        COLUMNS
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.dpi.clone(),
            self.nombres.clone(),
            self.apellidos.clone(),
            or_dash(self.telefono.as_deref()),
            or_dash(self.correo.as_deref()),
            status_label(self.estado),
        ]
    }
}

const FIELDS: &[FormField] = &[
    FormField::required("dpi", "DPI", FieldKind::Text),
    FormField::required("nombres", "Nombres", FieldKind::Text),
    FormField::required("apellidos", "Apellidos", FieldKind::Text),
    FormField::optional("telefono", "Teléfono", FieldKind::Text),
    FormField::optional("correo", "Correo", FieldKind::Email),
    FormField::required("estado", "Activo", FieldKind::Bool),
];

impl EditableEntity for Teacher {
    type Draft = TeacherDraft;

    fn form_fields() -> &'static [FormField] {
        FIELDS
    }

    fn to_draft(&self) -> TeacherDraft {
        Teacher::to_draft(self)
    }
}
