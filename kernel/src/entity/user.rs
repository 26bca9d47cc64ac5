mod id;
mod name;
mod role;

use std::fmt::{Display, Formatter};

pub use self::{id::*, name::*, role::*};
use destructure::Destructure;
use serde::{Deserialize, Serialize};
use vodca::References;

/// A patron who can hold loans. Fields are fixed at construction.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Destructure, References)]
pub struct User {
    id: UserId,
    name: UserName,
    role: UserRole,
}

impl User {
    pub fn new(id: UserId, name: UserName, role: UserRole) -> Self {
        Self { id, name, role }
    }

    pub fn student(id: UserId, name: UserName, course: CourseName) -> Self {
        Self::new(id, name, UserRole::Student { course })
    }

    pub fn instructor(id: UserId, name: UserName, department: DepartmentName) -> Self {
        Self::new(id, name, UserRole::Instructor { department })
    }

    pub fn role_label(&self) -> &'static str {
        self.role.label()
    }

    pub fn display_name(&self) -> String {
        self.to_string()
    }
}

impl Display for User {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name.as_ref(), self.role_label())
    }
}
