use serde::{Deserialize, Serialize};

/// CRUD resources exposed by the school backend.
///
/// Every per-resource string the client needs (REST path, envelope field
/// names, durable storage keys, default sort) lives in this table so that
/// pages never spell them out by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resource {
    Students,
    Teachers,
    Users,
    Grades,
    Courses,
    Shifts,
    AcademicLevels,
    Cycles,
}

impl Resource {
    pub const ALL: [Resource; 8] = [
        Resource::Students,
        Resource::Teachers,
        Resource::Users,
        Resource::Grades,
        Resource::Courses,
        Resource::Shifts,
        Resource::AcademicLevels,
        Resource::Cycles,
    ];

    /// REST path segment: `GET /{path}`, `DELETE /{path}/{id}`
    pub fn path(self) -> &'static str {
        match self {
            Resource::Students => "alumno",
            Resource::Teachers => "catedratico",
            Resource::Users => "usuario",
            Resource::Grades => "grado",
            Resource::Courses => "curso",
            Resource::Shifts => "jornada",
            Resource::AcademicLevels => "nivel-academico",
            Resource::Cycles => "ciclo",
        }
    }

    /// Name of the array field in the list envelope
    pub fn list_field(self) -> &'static str {
        match self {
            Resource::Students => "alumnos",
            Resource::Teachers => "catedraticos",
            Resource::Users => "usuarios",
            Resource::Grades => "grados",
            Resource::Courses => "cursos",
            Resource::Shifts => "jornadas",
            Resource::AcademicLevels => "nivelesAcademicos",
            Resource::Cycles => "ciclos",
        }
    }

    /// Name of the single-entity field in `GET /{path}/{id}`.
    /// The backend is not consistent about its casing, so lookups
    /// compare case-insensitively.
    pub fn entity_field(self) -> &'static str {
        match self {
            Resource::Students => "Alumno",
            Resource::Teachers => "catedratico",
            Resource::Users => "usuario",
            Resource::Grades => "grado",
            Resource::Courses => "curso",
            Resource::Shifts => "jornada",
            Resource::AcademicLevels => "nivelAcademico",
            Resource::Cycles => "ciclo",
        }
    }

    /// Primary key field, sent inline in `PUT /{path}` bodies
    pub fn id_field(self) -> &'static str {
        match self {
            Resource::Students => "id_alumno",
            Resource::Teachers => "id_catedratico",
            Resource::Users => "id_usuario",
            Resource::Grades => "id_grado",
            Resource::Courses => "id_curso",
            Resource::Shifts => "id_jornada",
            Resource::AcademicLevels => "id_nivel_academico",
            Resource::Cycles => "id_ciclo",
        }
    }

    pub fn default_sort_field(self) -> &'static str {
        match self {
            Resource::Students => "apellidos",
            Resource::Teachers => "apellidos",
            Resource::Users => "nombre_usuario",
            Resource::Grades => "nombre",
            Resource::Courses => "nombre",
            Resource::Shifts => "nombre",
            Resource::AcademicLevels => "nombre",
            Resource::Cycles => "anio",
        }
    }

    /// Durable slot holding the JSON-encoded `ListViewState`
    pub fn filters_key(self) -> &'static str {
        match self {
            Resource::Students => "studentsFilters",
            Resource::Teachers => "teachersFilters",
            Resource::Users => "usersFilters",
            Resource::Grades => "gradesFilters",
            Resource::Courses => "coursesFilters",
            Resource::Shifts => "shiftsFilters",
            Resource::AcademicLevels => "academicLevelsFilters",
            Resource::Cycles => "cyclesFilters",
        }
    }

    /// Durable slot holding the id of the row opened last
    pub fn last_viewed_key(self) -> &'static str {
        match self {
            Resource::Students => "lastViewedStudent",
            Resource::Teachers => "lastViewedTeacher",
            Resource::Users => "lastViewedUser",
            Resource::Grades => "lastViewedGrade",
            Resource::Courses => "lastViewedCourse",
            Resource::Shifts => "lastViewedShift",
            Resource::AcademicLevels => "lastViewedAcademicLevel",
            Resource::Cycles => "lastViewedCycle",
        }
    }

    /// URL segment of the console pages (`/alumnos`, `/alumnos/:id`)
    pub fn route_segment(self) -> &'static str {
        match self {
            Resource::Students => "alumnos",
            Resource::Teachers => "catedraticos",
            Resource::Users => "usuarios",
            Resource::Grades => "grados",
            Resource::Courses => "cursos",
            Resource::Shifts => "jornadas",
            Resource::AcademicLevels => "niveles-academicos",
            Resource::Cycles => "ciclos",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Resource::Students => "Alumnos",
            Resource::Teachers => "Catedráticos",
            Resource::Users => "Usuarios",
            Resource::Grades => "Grados",
            Resource::Courses => "Cursos",
            Resource::Shifts => "Jornadas",
            Resource::AcademicLevels => "Niveles académicos",
            Resource::Cycles => "Ciclos",
        }
    }

    pub fn singular_label(self) -> &'static str {
        match self {
            Resource::Students => "alumno",
            Resource::Teachers => "catedrático",
            Resource::Users => "usuario",
            Resource::Grades => "grado",
            Resource::Courses => "curso",
            Resource::Shifts => "jornada",
            Resource::AcademicLevels => "nivel académico",
            Resource::Cycles => "ciclo",
        }
    }

    pub fn list_route(self) -> String {
        format!("/{}", self.route_segment())
    }

    pub fn detail_route(self, id: &str) -> String {
        format!("/{}/{}", self.route_segment(), id)
    }

    pub fn from_route_segment(segment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.route_segment() == segment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn storage_keys_are_unique_per_resource() {
        let filters: HashSet<_> = Resource::ALL.iter().map(|r| r.filters_key()).collect();
        let viewed: HashSet<_> = Resource::ALL.iter().map(|r| r.last_viewed_key()).collect();
        assert_eq!(filters.len(), Resource::ALL.len());
        assert_eq!(viewed.len(), Resource::ALL.len());
        assert!(filters.is_disjoint(&viewed));
    }

    #[test]
    fn storage_keys_follow_the_durable_contract() {
        assert_eq!(Resource::Students.filters_key(), "studentsFilters");
        assert_eq!(Resource::Students.last_viewed_key(), "lastViewedStudent");
        assert_eq!(Resource::Cycles.filters_key(), "cyclesFilters");
    }

    #[test]
    fn route_segments_round_trip() {
        for r in Resource::ALL {
            assert_eq!(Resource::from_route_segment(r.route_segment()), Some(r));
        }
        assert_eq!(Resource::from_route_segment("unknown"), None);
        assert_eq!(Resource::Grades.detail_route("7"), "/grados/7");
    }
}
