use clap::Parser;

use pulseboard::app::{handle_fatal_error, init_logging, AppConfig};
use pulseboard::cli::{execute_command, Cli};
use pulseboard::config::ConfigLoader;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let verbose = cli.verbose;

    // Logging starts from the flags so settings loading is traced too
    let app_config = AppConfig::new(verbose);
    let logging = init_logging(&app_config);

    let working_dir = std::env::current_dir().unwrap_or_else(|_| ".".into());
    let settings = match ConfigLoader::new(working_dir)
        .load(cli.config.as_deref())
        .await
    {
        Ok(settings) => settings,
        Err(e) => handle_fatal_error(e.into(), verbose),
    };

    logging.apply(&app_config.with_log_level(settings.log_level.clone()));

    if let Err(e) = execute_command(cli.command, settings).await {
        handle_fatal_error(e, verbose);
    }
}
