use kernel::interface::query::{DependOnUserQuery, UserQuery};
use kernel::interface::update::{DependOnUserModifier, UserModifier};
use kernel::prelude::entity::{CourseName, DepartmentName, User, UserId, UserName};
use kernel::KernelError;

use crate::transfer::{CreateUserDto, GetUserDto, UserDto, UserRoleDto};

#[async_trait::async_trait]
pub trait GetUserService: 'static + Sync + Send + DependOnUserQuery {
    async fn get_user(&self, dto: GetUserDto) -> error_stack::Result<Option<UserDto>, KernelError> {
        let id = UserId::new(dto.id);
        let user = self.user_query().find_by_id(&id).await?;
        Ok(user.map(|user| UserDto::from(user.as_ref())))
    }
}

impl<T> GetUserService for T where T: DependOnUserQuery {}

#[async_trait::async_trait]
pub trait CreateUserService: 'static + Sync + Send + DependOnUserModifier {
    async fn create_user(&self, dto: CreateUserDto) -> error_stack::Result<UserDto, KernelError> {
        let id = UserId::new(dto.id);
        let name = UserName::new(dto.name);
        let user = match dto.role {
            UserRoleDto::Student { course } => User::student(id, name, CourseName::new(course)),
            UserRoleDto::Instructor { department } => {
                User::instructor(id, name, DepartmentName::new(department))
            }
        };
        let user = self.user_modifier().create(user).await?;
        tracing::debug!(id = ?user.id(), role = user.role_label(), "user registered");
        Ok(UserDto::from(user.as_ref()))
    }
}

impl<T> CreateUserService for T where T: DependOnUserModifier {}
