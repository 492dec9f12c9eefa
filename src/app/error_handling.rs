//! Error handling utilities

use tracing::error;

use crate::error::DashboardError;

/// Report a fatal error and exit with its status code
///
/// A `DashboardError` prints its user message, plus the full cause chain
/// when `verbose >= 1`. Any other error prints as-is and exits with 1.
pub fn handle_fatal_error(error: anyhow::Error, verbose: u8) -> ! {
    error!("Fatal error: {}", error);

    let exit_code = if let Some(dashboard_err) = error.downcast_ref::<DashboardError>() {
        eprintln!("{}", dashboard_err.user_message());
        if verbose >= 1 {
            eprintln!("\nContext Chain:\n{}", dashboard_err.developer_message());
        }
        dashboard_err.exit_code()
    } else {
        eprintln!("Error: {error}");
        if verbose >= 1 {
            eprintln!("\nError chain:");
            for (i, cause) in error.chain().enumerate() {
                eprintln!("  {}: {}", i, cause);
            }
        }
        1
    };

    std::process::exit(exit_code)
}
