use std::fmt::{Display, Formatter};

use crate::controller::Exhaust;
use application::transfer::RentDto;
use uuid::Uuid;

/// What a patron sees after asking for a book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoanOutcome {
    Lent { id: Uuid, summary: String },
    NotAvailable,
}

impl Display for LoanOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LoanOutcome::Lent { summary, .. } => {
                writeln!(f, "Book lent successfully!")?;
                writeln!(f)?;
                write!(f, "{summary}")
            }
            LoanOutcome::NotAvailable => write!(f, "Could not lend: the book is not available."),
        }
    }
}

pub struct RentPresenter;

impl Exhaust<RentDto> for RentPresenter {
    type To = String;
    fn emit(&self, input: RentDto) -> Self::To {
        let mut summary = format!(
            "Loan summary:\nBook: {}\nPatron: {}\nLoaned on: {}",
            input.title,
            input.user,
            day(&input.rented_at)
        );
        if let Some(returned_at) = input.returned_at {
            summary.push_str(&format!("\nReturned on: {}", day(&returned_at)));
        }
        summary
    }
}

impl Exhaust<Option<RentDto>> for RentPresenter {
    type To = LoanOutcome;
    fn emit(&self, input: Option<RentDto>) -> Self::To {
        match input {
            Some(rent) => LoanOutcome::Lent {
                id: rent.id,
                summary: Exhaust::<RentDto>::emit(self, rent),
            },
            None => LoanOutcome::NotAvailable,
        }
    }
}

fn day(at: &time::OffsetDateTime) -> String {
    format!("{:02}/{:02}/{}", at.day(), u8::from(at.month()), at.year())
}

#[cfg(test)]
mod test {
    use crate::controller::Exhaust;
    use crate::response::{LoanOutcome, RentPresenter};
    use application::transfer::RentDto;
    use time::macros::datetime;

    fn rent() -> RentDto {
        RentDto {
            id: uuid::Uuid::nil(),
            isbn: "978-85-333-1234-5".to_string(),
            title: "Introdução à POO".to_string(),
            user_id: 1,
            user: "João Silva (Student)".to_string(),
            rented_at: datetime!(2025-06-13 10:00 UTC),
            returned_at: None,
        }
    }

    #[test]
    fn open_loan_summary() {
        let summary = RentPresenter.emit(rent());
        assert_eq!(
            summary,
            "Loan summary:\nBook: Introdução à POO\nPatron: João Silva (Student)\nLoaned on: 13/06/2025"
        );
    }

    #[test]
    fn closed_loan_summary_has_return_day() {
        let mut rent = rent();
        rent.returned_at = Some(datetime!(2025-06-20 09:30 UTC));
        let summary = RentPresenter.emit(rent);
        assert!(summary.ends_with("\nReturned on: 20/06/2025"));
    }

    #[test]
    fn missing_loan_is_not_available() {
        let outcome = RentPresenter.emit(None::<RentDto>);
        assert_eq!(outcome, LoanOutcome::NotAvailable);
        assert_eq!(
            outcome.to_string(),
            "Could not lend: the book is not available."
        );
    }
}
