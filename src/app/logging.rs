//! Logging configuration and initialization

use crate::app::config::AppConfig;
use tracing::{debug, trace, warn};
use tracing_subscriber::{fmt, prelude::*, reload, EnvFilter, Registry};

/// Handle to the installed filter, for applying the settings-file level
/// once settings are loaded
pub struct LoggingHandle {
    filter: reload::Handle<EnvFilter, Registry>,
    env_override: bool,
}

impl LoggingHandle {
    /// Switch to the configured level when neither `-v` nor `RUST_LOG` chose one
    pub fn apply(&self, config: &AppConfig) {
        if let Some(directive) = reload_directive(config, self.env_override) {
            match self.filter.reload(EnvFilter::new(&directive)) {
                Ok(()) => debug!("Log filter set to '{}' from settings", directive),
                Err(e) => warn!("Could not apply log level '{}': {}", directive, e),
            }
        }
    }
}

/// The filter to swap in after settings load, if any
fn reload_directive(config: &AppConfig, env_override: bool) -> Option<String> {
    if env_override || config.verbose > 0 {
        return None;
    }
    config.log_level.as_ref().map(|_| config.log_level())
}

/// Initialize tracing for the application
///
/// `RUST_LOG` takes precedence over the verbosity-derived filter.
pub fn init_logging(config: &AppConfig) -> LoggingHandle {
    let (filter, env_override) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, true),
        Err(_) => (EnvFilter::new(config.log_level()), false),
    };
    let (filter_layer, filter) = reload::Layer::new(filter);

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_target(config.verbose >= 2)
                .with_thread_ids(config.verbose >= 3)
                .with_line_number(config.verbose >= 3)
                .with_writer(std::io::stderr),
        )
        .init();

    debug!("pulseboard started with verbosity level: {}", config.verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());

    LoggingHandle {
        filter,
        env_override,
    }
}
