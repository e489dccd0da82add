pub mod a001_student;
pub mod a002_teacher;
pub mod a003_user;
pub mod a004_grade;
pub mod a005_course;
pub mod a006_shift;
pub mod a007_academic_level;
pub mod a008_cycle;
pub mod common;
