use std::fmt::Display;

use error_stack::Context;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelError {
    /// Another actor already claimed the resource.
    Concurrency,
    /// An operation was called out of the order its contract requires.
    Contract,
    NotFound,
    Conflict,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::Concurrency => write!(f, "Concurrency error"),
            KernelError::Contract => write!(f, "Contract violation"),
            KernelError::NotFound => write!(f, "Entity not found"),
            KernelError::Conflict => write!(f, "Entity already exists"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}
