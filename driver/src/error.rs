use std::sync::PoisonError;

use error_stack::Report;
use kernel::KernelError;

pub(crate) trait ConvertError {
    type Ok;
    fn convert_error(self) -> error_stack::Result<Self::Ok, KernelError>;
}

impl<T, Guard> ConvertError for Result<T, PoisonError<Guard>> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|_| {
            Report::new(KernelError::Internal).attach_printable("In-memory store lock is poisoned")
        })
    }
}
