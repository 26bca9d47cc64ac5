use application::service::{
    CreateBookService, CreateUserService, GetBookService, GetUserService, RentService,
    ReturnService,
};
use kernel::KernelError;

use crate::controller::Controller;
use crate::handler::AppModule;
use crate::request::{
    BookTransformer, CreateBookRequest, CreateUserRequest, GetAllBookRequest, GetBookRequest,
    GetUserRequest, RentRequest, RentTransformer, ReturnRequest, UserTransformer,
};
use crate::response::{BookPresenter, LoanOutcome, RentPresenter, UserPresenter};

const FIRST_ISBN: &str = "978-85-333-1234-5";
const SECOND_ISBN: &str = "978-85-333-5678-9";
const STUDENT_ID: u32 = 1;
const INSTRUCTOR_ID: u32 = 2;

/// Walks the catalog through one full loan: register, lend, refuse a second
/// loan, return, and list the user roles.
pub async fn run(app: &AppModule) -> error_stack::Result<(), KernelError> {
    seed(app).await?;

    match lend(app, RentRequest::new(FIRST_ISBN, STUDENT_ID)).await? {
        outcome @ LoanOutcome::Lent { id, .. } => {
            println!("{outcome}");

            println!("\n-- Book state after the loan --");
            print_book(app, FIRST_ISBN).await?;

            println!("\nLending the same book to another patron...");
            println!("{}", lend(app, RentRequest::new(FIRST_ISBN, INSTRUCTOR_ID)).await?);

            println!("\nProcessing return...");
            let summary = Controller::new(RentTransformer, RentPresenter)
                .intake(ReturnRequest::new(id))
                .handle(|dto| app.library().return_book(dto))
                .await?;
            println!("Book returned successfully!\n{summary}");

            println!("\n-- Book state after the return --");
            print_book(app, FIRST_ISBN).await?;
        }
        outcome @ LoanOutcome::NotAvailable => println!("{outcome}"),
    }

    println!("\n-- User roles in the system --");
    for id in [STUDENT_ID, INSTRUCTOR_ID] {
        let user = Controller::new(UserTransformer, UserPresenter)
            .intake(GetUserRequest::new(id))
            .handle(|dto| app.library().get_user(dto))
            .await?;
        if let Some(user) = user {
            println!("{}", user.role_label);
        }
    }

    println!("\n-- Catalog --");
    let books: Vec<String> = Controller::new(BookTransformer, BookPresenter)
        .intake(GetAllBookRequest)
        .handle(|dto| app.library().get_books(dto))
        .await?;
    books.iter().for_each(|line| println!("{line}"));

    Ok(())
}

async fn seed(app: &AppModule) -> error_stack::Result<(), KernelError> {
    let books = [
        CreateBookRequest::new("Introdução à POO", "José da Silva", FIRST_ISBN),
        CreateBookRequest::new("Estruturas de Dados", "Maria Souza", SECOND_ISBN),
    ];
    for request in books {
        let line: String = Controller::new(BookTransformer, BookPresenter)
            .intake(request)
            .handle(|dto| app.library().create_book(dto))
            .await?;
        tracing::debug!("registered {line}");
    }

    let users = [
        CreateUserRequest::student("João Silva", STUDENT_ID, "Engenharia de Software"),
        CreateUserRequest::instructor("Dra. Ana Costa", INSTRUCTOR_ID, "Computação"),
    ];
    for request in users {
        let user = Controller::new(UserTransformer, UserPresenter)
            .intake(request)
            .handle(|dto| app.library().create_user(dto))
            .await?;
        tracing::debug!("registered {}", user.display_name);
    }
    Ok(())
}

/// Unknown books are reported the same way as books already on loan.
async fn lend(
    app: &AppModule,
    request: RentRequest,
) -> error_stack::Result<LoanOutcome, KernelError> {
    let outcome = Controller::new(RentTransformer, RentPresenter)
        .intake(request)
        .handle(|dto| app.library().rent_book(dto))
        .await;
    match outcome {
        Err(report) if *report.current_context() == KernelError::NotFound => {
            tracing::debug!("lend refused: {report:?}");
            Ok(LoanOutcome::NotAvailable)
        }
        outcome => outcome,
    }
}

async fn print_book(app: &AppModule, isbn: &str) -> error_stack::Result<(), KernelError> {
    let line = Controller::new(BookTransformer, BookPresenter)
        .intake(GetBookRequest::new(isbn))
        .handle(|dto| app.library().get_book(dto))
        .await?;
    match line {
        Some(line) => println!("{line}"),
        None => println!("Book {isbn} is not in the catalog."),
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use crate::handler::AppModule;
    use crate::request::RentRequest;
    use crate::response::LoanOutcome;
    use crate::scenario::{lend, run, seed, FIRST_ISBN, INSTRUCTOR_ID, STUDENT_ID};
    use kernel::KernelError;

    #[tokio::test]
    async fn scenario_runs_to_completion() -> error_stack::Result<(), KernelError> {
        run(&AppModule::new()).await
    }

    #[tokio::test]
    async fn unknown_and_lent_books_look_the_same() -> error_stack::Result<(), KernelError> {
        let app = AppModule::new();
        seed(&app).await?;

        let first = lend(&app, RentRequest::new(FIRST_ISBN, STUDENT_ID)).await?;
        assert!(matches!(first, LoanOutcome::Lent { .. }));

        let lent = lend(&app, RentRequest::new(FIRST_ISBN, INSTRUCTOR_ID)).await?;
        let unknown = lend(&app, RentRequest::new("000-0", INSTRUCTOR_ID)).await?;
        assert_eq!(lent, LoanOutcome::NotAvailable);
        assert_eq!(unknown, lent);
        Ok(())
    }
}
