use std::future::IntoFuture;

// Inspired by: https://github.com/HalsekiRaika/architectured/blob/e5caa5c7ae801d1aaac6e275b3ea0ef26d6ff26b/server/src/controller.rs
pub trait Intake<I>: 'static + Sync + Send {
    type To;
    fn emit(&self, input: I) -> Self::To;
}

pub trait Exhaust<I>: 'static + Sync + Send {
    type To;
    fn emit(&self, input: I) -> Self::To;
}

/// Turns a request into a DTO, hands it to a service and renders the result.
pub struct Controller<T, P> {
    transformer: T,
    presenter: P,
}

impl<T, P> Controller<T, P> {
    pub fn new(transformer: T, presenter: P) -> Self {
        Self {
            transformer,
            presenter,
        }
    }

    pub fn intake<I>(self, input: I) -> Transformed<T::To, P>
    where
        T: Intake<I>,
    {
        Transformed {
            transformed: self.transformer.emit(input),
            presenter: self.presenter,
        }
    }
}

pub struct Transformed<D, P> {
    transformed: D,
    presenter: P,
}

impl<D, P> Transformed<D, P> {
    pub async fn handle<F, Fut, O, E>(self, f: F) -> Result<P::To, E>
    where
        P: Exhaust<O>,
        F: FnOnce(D) -> Fut,
        Fut: IntoFuture<Output = Result<O, E>>,
    {
        Ok(self.presenter.emit(f(self.transformed).await?))
    }
}

#[cfg(test)]
mod test {
    use crate::controller::{Controller, Exhaust, Intake};

    struct Doubler;

    impl Intake<i32> for Doubler {
        type To = i64;
        fn emit(&self, input: i32) -> Self::To {
            i64::from(input) * 2
        }
    }

    struct Printer;

    impl Exhaust<i64> for Printer {
        type To = String;
        fn emit(&self, input: i64) -> Self::To {
            format!("<{input}>")
        }
    }

    #[tokio::test]
    async fn pipes_input_through_service() {
        let out: Result<String, ()> = Controller::new(Doubler, Printer)
            .intake(21)
            .handle(|doubled| async move { Ok(doubled + 1) })
            .await;
        assert_eq!(out, Ok("<43>".to_string()));
    }

    #[tokio::test]
    async fn service_error_skips_presenter() {
        let out: Result<String, &str> = Controller::new(Doubler, Printer)
            .intake(1)
            .handle(|_| async move { Err::<i64, _>("unavailable") })
            .await;
        assert_eq!(out, Err("unavailable"));
    }
}
