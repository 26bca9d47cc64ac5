use kernel::prelude::entity::{User, UserRole};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserRoleDto {
    Student { course: String },
    Instructor { department: String },
}

impl From<&UserRole> for UserRoleDto {
    fn from(value: &UserRole) -> Self {
        match value {
            UserRole::Student { course } => Self::Student {
                course: course.clone().into(),
            },
            UserRole::Instructor { department } => Self::Instructor {
                department: department.clone().into(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDto {
    pub id: u32,
    pub name: String,
    pub role: UserRoleDto,
    pub role_label: String,
    pub display_name: String,
}

impl From<&User> for UserDto {
    fn from(value: &User) -> Self {
        Self {
            id: (*value.id()).into(),
            name: value.name().clone().into(),
            role: UserRoleDto::from(value.role()),
            role_label: value.role_label().to_string(),
            display_name: value.display_name(),
        }
    }
}

pub struct GetUserDto {
    pub id: u32,
}

pub struct CreateUserDto {
    pub id: u32,
    pub name: String,
    pub role: UserRoleDto,
}
