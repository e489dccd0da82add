pub mod a001_student;
pub mod a002_teacher;
pub mod a003_user;
pub mod a004_grade;
pub mod a005_course;
pub mod a006_shift;
pub mod a007_academic_level;
pub mod a008_cycle;

use contracts::domain::a001_student::Student;
use contracts::domain::a002_teacher::Teacher;
use contracts::domain::a003_user::User;
use contracts::domain::a004_grade::Grade;
use contracts::domain::a005_course::Course;
use contracts::domain::a006_shift::Shift;
use contracts::domain::a007_academic_level::AcademicLevel;
use contracts::domain::a008_cycle::Cycle;
use contracts::domain::common::Resource;
use leptos::prelude::*;

use crate::shared::entity_view::{entity_details_page, entity_list_page};

/// List page of a resource
pub fn list_view(resource: Resource) -> AnyView {
    match resource {
        Resource::Students => entity_list_page::<Student>().into_any(),
        Resource::Teachers => entity_list_page::<Teacher>().into_any(),
        Resource::Users => entity_list_page::<User>().into_any(),
        Resource::Grades => entity_list_page::<Grade>().into_any(),
        Resource::Courses => entity_list_page::<Course>().into_any(),
        Resource::Shifts => entity_list_page::<Shift>().into_any(),
        Resource::AcademicLevels => entity_list_page::<AcademicLevel>().into_any(),
        Resource::Cycles => entity_list_page::<Cycle>().into_any(),
    }
}

/// Detail page of one entity of a resource
pub fn details_view(resource: Resource, id: String) -> AnyView {
    match resource {
        Resource::Students => entity_details_page::<Student>(id).into_any(),
        Resource::Teachers => entity_details_page::<Teacher>(id).into_any(),
        Resource::Users => entity_details_page::<User>(id).into_any(),
        Resource::Grades => entity_details_page::<Grade>(id).into_any(),
        Resource::Courses => entity_details_page::<Course>(id).into_any(),
        Resource::Shifts => entity_details_page::<Shift>(id).into_any(),
        Resource::AcademicLevels => entity_details_page::<AcademicLevel>(id).into_any(),
        Resource::Cycles => entity_details_page::<Cycle>(id).into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::entity_view::EditableEntity;

    fn assert_layout<E: EditableEntity>() {
        let columns = E::columns();
        assert!(!columns.is_empty(), "{:?} has no columns", E::RESOURCE);
        assert!(columns.iter().all(|c| !c.sort_field.is_empty()));

        let fields = E::form_fields();
        assert!(!fields.is_empty(), "{:?} has no form fields", E::RESOURCE);
        let mut names: Vec<_> = fields.iter().map(|f| f.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), fields.len(), "{:?} repeats a field", E::RESOURCE);
    }

    #[test]
    fn every_resource_has_table_and_form_layout() {
        assert_layout::<Student>();
        assert_layout::<Teacher>();
        assert_layout::<User>();
        assert_layout::<Grade>();
        assert_layout::<Course>();
        assert_layout::<Shift>();
        assert_layout::<AcademicLevel>();
        assert_layout::<Cycle>();
    }
}
