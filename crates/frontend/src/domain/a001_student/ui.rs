use contracts::domain::a001_student::{Student, StudentDraft};
use contracts::domain::common::Resource;

use crate::shared::date_utils::format_date;
use crate::shared::entity_view::{
    or_dash, status_label, Column, EditableEntity, FieldKind, FormField, ListColumns,
};

const GENDERS: &[(&str, &str)] = &[("M", "Masculino"), ("F", "Femenino")];

const COLUMNS: &[Column] = &[
    Column::new("Carné", "carne"),
    Column::new("Nombres", "nombres"),
    Column::new("Apellidos", "apellidos"),
    Column::new("Grado", "id_grado"),
    Column::new("Estado", "estado"),
];

impl ListColumns for Student {
    fn columns() -> &'static [Column] {
        COLUMNS
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.carne.clone(),
            self.nombres.clone(),
            self.apellidos.clone(),
            or_dash(self.id_grado),
            status_label(self.estado),
        ]
    }

    fn detail_rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("ID", self.id_alumno.to_string()),
            ("Carné", self.carne.clone()),
            ("Nombres", self.nombres.clone()),
            ("Apellidos", self.apellidos.clone()),
            ("Fecha de nacimiento", or_dash(self.fecha_nacimiento.as_deref().map(format_date))),
            ("Género", or_dash(self.genero.as_deref())),
            ("Grado", or_dash(self.id_grado)),
            ("Teléfono del encargado", or_dash(self.telefono_encargado.as_deref())),
            ("Estado", status_label(self.estado)),
        ]
    }
}

const FIELDS: &[FormField] = &[
    FormField::required("carne", "Carné", FieldKind::Text),
    FormField::required("nombres", "Nombres", FieldKind::Text),
    FormField::required("apellidos", "Apellidos", FieldKind::Text),
    FormField::optional("fecha_nacimiento", "Fecha de nacimiento", FieldKind::Date),
    FormField::optional("genero", "Género", FieldKind::Select(GENDERS)),
    FormField::optional("id_grado", "Grado", FieldKind::Reference(Resource::Grades)),
    FormField::optional("telefono_encargado", "Teléfono del encargado", FieldKind::Text),
    FormField::required("estado", "Activo", FieldKind::Bool),
];

impl EditableEntity for Student {
    type Draft = StudentDraft;

    fn form_fields() -> &'static [FormField] {
        FIELDS
    }

    fn to_draft(&self) -> StudentDraft {
        Student::to_draft(self)
    }
}
