use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Фильтр по умолчанию, если `RUST_LOG` не задан.
pub const DEFAULT_FILTER: &str = "rummy_engine=info";

/// Подключить вывод логов в stderr. Повторный вызов ничего не делает.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
