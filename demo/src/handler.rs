use driver::database::InMemoryDatabase;
use std::ops::Deref;
use std::sync::Arc;
use vodca::References;

#[derive(Clone)]
pub struct AppModule(Arc<Handler>);

impl AppModule {
    pub fn new() -> Self {
        Self(Arc::new(Handler::init()))
    }
}

impl Deref for AppModule {
    type Target = Handler;
    fn deref(&self) -> &Self::Target {
        Deref::deref(&self.0)
    }
}

#[derive(References)]
pub struct Handler {
    library: InMemoryDatabase,
}

impl Handler {
    pub fn init() -> Self {
        Self {
            library: InMemoryDatabase::new(),
        }
    }
}
