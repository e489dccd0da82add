use contracts::domain::a005_course::{Course, CourseDraft};
use contracts::domain::common::Resource;

use crate::shared::entity_view::{or_dash, Column, EditableEntity, FieldKind, FormField, ListColumns};

const COLUMNS: &[Column] = &[
    Column::new("ID", "id_curso"),
    Column::new("Nombre", "nombre"),
    Column::new("Grado", "id_grado"),
    Column::new("Catedrático", "id_catedratico"),
    Column::new("Nota de aprobación", "nota_aprobacion"),
    Column::new("Nota máxima", "nota_maxima"),
];

impl ListColumns for Course {
    fn columns() -> &'static [Column] {
        COLUMNS
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id_curso.to_string(),
            self.nombre.clone(),
            or_dash(self.id_grado),
            or_dash(self.id_catedratico),
            format!("{:.2}", self.nota_aprobacion),
            format!("{:.2}", self.nota_maxima),
        ]
    }
}

// grade and teacher are mandatory, enforced by validation
const FIELDS: &[FormField] = &[
    FormField::required("nombre", "Nombre", FieldKind::Text),
    FormField::optional("id_grado", "Grado", FieldKind::Reference(Resource::Grades)),
    FormField::optional(
        "id_catedratico",
        "Catedrático",
        FieldKind::Reference(Resource::Teachers),
    ),
    FormField::required("nota_aprobacion", "Nota de aprobación", FieldKind::Decimal),
    FormField::required("nota_maxima", "Nota máxima", FieldKind::Decimal),
];

impl EditableEntity for Course {
    type Draft = CourseDraft;

    fn form_fields() -> &'static [FormField] {
        FIELDS
    }

    fn to_draft(&self) -> CourseDraft {
        Course::to_draft(self)
    }
}
