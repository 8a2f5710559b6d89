use log::LevelFilter;

/// Инициализация логгера для бинарников.
///
/// По умолчанию `info`, `verbose` поднимает до `debug`.
/// Переменная `RUST_LOG` имеет приоритет над обоими.
/// Библиотечный код логгер никогда не инициализирует.
pub fn init_logging(verbose: bool) {
    let default = if verbose { LevelFilter::Debug } else { LevelFilter::Info };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(default)
        .format_timestamp(None)
        .format_target(false)
        .parse_default_env();

    // Повторная инициализация (например, из тестов) – не ошибка.
    let _ = builder.try_init();
}
