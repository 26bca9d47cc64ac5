use std::sync::Arc;

use crate::entity::User;
use crate::KernelError;

#[async_trait::async_trait]
pub trait UserModifier: 'static + Sync + Send {
    /// Registers a user. Fails with [`KernelError::Conflict`] on a duplicated id.
    async fn create(&self, user: User) -> error_stack::Result<Arc<User>, KernelError>;
}

pub trait DependOnUserModifier: 'static + Sync + Send {
    type UserModifier: UserModifier;
    fn user_modifier(&self) -> &Self::UserModifier;
}
