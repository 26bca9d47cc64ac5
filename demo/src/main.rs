use crate::config::DemoConfig;
use crate::error::StackTrace;
use crate::handler::AppModule;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

mod config;
mod controller;
mod error;
mod handler;
mod request;
mod response;
mod scenario;

#[tokio::main]
async fn main() -> Result<(), StackTrace> {
    let config = DemoConfig::load();
    let appender = tracing_appender::rolling::daily(config.log_dir(), config.log_file());
    let (non_blocking_appender, _guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(tracing_subscriber::EnvFilter::new(config.log_filter())),
        )
        .with(
            tracing_subscriber::fmt::Layer::default()
                .with_writer(non_blocking_appender)
                .with_ansi(false)
                .with_filter(tracing_subscriber::filter::LevelFilter::DEBUG),
        )
        .init();

    let app = AppModule::new();
    scenario::run(&app).await?;

    Ok(())
}
