use std::sync::Once;

/// Logger configuration.
///
/// `fallback_filter` is applied when `RUST_LOG` is unset and follows the
/// `env_logger` filter syntax (e.g. "info", "pexeso_glsl=debug,winit=warn").
/// Game progress (round banners, match lines) is reported at info level.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub fallback_filter: String,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            fallback_filter: "info".to_string(),
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// This function is idempotent; subsequent calls are ignored.
/// Intended usage is early in `main`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match std::env::var("RUST_LOG") {
            Ok(filter) => builder.parse_filters(&filter),
            Err(_) => builder.parse_filters(&config.fallback_filter),
        };

        builder.write_style(config.write_style);
        builder.init();

        log::debug!("logging initialized");
    });
}
