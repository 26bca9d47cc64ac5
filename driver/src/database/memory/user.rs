use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use error_stack::Report;
use kernel::interface::query::UserQuery;
use kernel::interface::update::UserModifier;
use kernel::prelude::entity::{User, UserId};
use kernel::KernelError;

use crate::error::ConvertError;

#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<UserId, Arc<User>>>,
}

#[async_trait::async_trait]
impl UserQuery for InMemoryUserRepository {
    async fn find_by_id(
        &self,
        id: &UserId,
    ) -> error_stack::Result<Option<Arc<User>>, KernelError> {
        let users = self.users.read().convert_error()?;
        Ok(users.get(id).cloned())
    }
}

#[async_trait::async_trait]
impl UserModifier for InMemoryUserRepository {
    async fn create(&self, user: User) -> error_stack::Result<Arc<User>, KernelError> {
        let mut users = self.users.write().convert_error()?;
        if users.contains_key(user.id()) {
            return Err(Report::new(KernelError::Conflict)
                .attach_printable(format!("User id {:?} is already registered", user.id())));
        }
        let user = Arc::new(user);
        users.insert(*user.id(), Arc::clone(&user));
        Ok(user)
    }
}
