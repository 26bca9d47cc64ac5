use crate::controller::Intake;
use application::transfer::{CreateUserDto, GetUserDto, UserRoleDto};

#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    name: String,
    id: u32,
    role: UserRoleDto,
}

impl CreateUserRequest {
    pub fn student(name: impl Into<String>, id: u32, course: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id,
            role: UserRoleDto::Student {
                course: course.into(),
            },
        }
    }

    pub fn instructor(name: impl Into<String>, id: u32, department: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id,
            role: UserRoleDto::Instructor {
                department: department.into(),
            },
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GetUserRequest {
    id: u32,
}

impl GetUserRequest {
    pub fn new(id: u32) -> Self {
        Self { id }
    }
}

pub struct UserTransformer;

impl Intake<CreateUserRequest> for UserTransformer {
    type To = CreateUserDto;
    fn emit(&self, CreateUserRequest { name, id, role }: CreateUserRequest) -> Self::To {
        CreateUserDto { id, name, role }
    }
}

impl Intake<GetUserRequest> for UserTransformer {
    type To = GetUserDto;
    fn emit(&self, GetUserRequest { id }: GetUserRequest) -> Self::To {
        GetUserDto { id }
    }
}
