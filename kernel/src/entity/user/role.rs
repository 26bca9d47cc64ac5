use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

const STUDENT_LABEL: &str = "Student";
const INSTRUCTOR_LABEL: &str = "Instructor";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct CourseName(String);

impl CourseName {
    pub fn new(course: impl Into<String>) -> Self {
        Self(course.into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct DepartmentName(String);

impl DepartmentName {
    pub fn new(department: impl Into<String>) -> Self {
        Self(department.into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "role")]
pub enum UserRole {
    Student { course: CourseName },
    Instructor { department: DepartmentName },
}

impl UserRole {
    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Student { .. } => STUDENT_LABEL,
            UserRole::Instructor { .. } => INSTRUCTOR_LABEL,
        }
    }
}
