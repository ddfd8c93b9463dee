// Логирование

use tracing_subscriber::EnvFilter;

/// Установить глобальный subscriber для бинарника.
///
/// Уровень берётся из `RUST_LOG`, по умолчанию `default_level`.
/// Повторный вызов ничего не делает.
pub fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
