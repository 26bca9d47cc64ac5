use crate::entity::{Rent, RentId, RentSummary};
use crate::KernelError;

/// What closing a stored loan did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RentClosing {
    /// The loan was open and is now closed.
    Closed(RentSummary),
    /// The loan had been closed before. Nothing changed.
    AlreadyClosed(RentSummary),
}

impl RentClosing {
    pub fn is_closed_now(&self) -> bool {
        matches!(self, RentClosing::Closed(_))
    }

    pub fn into_summary(self) -> RentSummary {
        match self {
            RentClosing::Closed(summary) | RentClosing::AlreadyClosed(summary) => summary,
        }
    }
}

#[async_trait::async_trait]
pub trait RentModifier: 'static + Sync + Send {
    /// Takes ownership of a freshly opened loan.
    async fn create(&self, rent: Rent) -> error_stack::Result<(), KernelError>;

    /// Closes the stored loan in place, or returns `None` if it is unknown.
    async fn close(&self, id: &RentId) -> error_stack::Result<Option<RentClosing>, KernelError>;
}

pub trait DependOnRentModifier: 'static + Sync + Send {
    type RentModifier: RentModifier;
    fn rent_modifier(&self) -> &Self::RentModifier;
}
