use std::sync::atomic::{AtomicU8, Ordering};

use error_stack::Report;

use crate::KernelError;

const AVAILABLE: u8 = 0;
const BORROWED: u8 = 1;
const LENT: u8 = 2;

/// Availability of a single book copy.
///
/// Transitions are only reachable from inside the kernel so every change goes
/// through [`Book::try_borrow`](crate::entity::Book::try_borrow),
/// [`Book::release`](crate::entity::Book::release) or an opening loan.
///
/// ```text
/// Available --try_borrow--> Borrowed --lend--> Lent
///     ^                        |                 |
///     +--------release---------+-----release-----+
/// ```
#[derive(Debug)]
pub struct BookAvailability(AtomicU8);

impl BookAvailability {
    pub(crate) fn new() -> Self {
        Self(AtomicU8::new(AVAILABLE))
    }

    pub fn is_available(&self) -> bool {
        self.0.load(Ordering::Acquire) == AVAILABLE
    }

    pub(crate) fn try_borrow(&self) -> bool {
        self.0
            .compare_exchange(AVAILABLE, BORROWED, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    pub(crate) fn lend(&self) -> error_stack::Result<(), KernelError> {
        match self
            .0
            .compare_exchange(BORROWED, LENT, Ordering::AcqRel, Ordering::Acquire)
        {
            Ok(_) => Ok(()),
            Err(AVAILABLE) => Err(Report::new(KernelError::Contract)
                .attach_printable("Book must be borrowed before a loan is opened")),
            Err(_) => Err(Report::new(KernelError::Concurrency)
                .attach_printable("Book is already held by an open loan")),
        }
    }

    pub(crate) fn release(&self) {
        self.0.store(AVAILABLE, Ordering::Release);
    }
}
