use crate::entrypoints::cli::parse_args;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, Default)]
#[clap(author, version, about, long_about = None)]
/// Jeep Route Finder - Highlights the stops shared between jeepney routes
pub struct Settings {
    /// JSON file mapping route codes to their ordered stops (defaults to the bundled routes)
    #[clap(short, long, value_name = "FILE")]
    pub routes_file: Option<PathBuf>,

    /// Comma-separated route codes to search for on startup
    #[clap(short, long, value_name = "CODES")]
    pub query: Option<String>,

    /// Hide the panel listing every known route code
    #[clap(long, default_value = "false")]
    pub hide_routes: bool,
}

impl Settings {
    /// Parse settings from the command line (native) or the page URL (web)
    pub fn from_cli() -> Self {
        match parse_args::<Settings>() {
            Ok(args) => args,
            Err(e) => {
                #[cfg(not(target_arch = "wasm32"))]
                e.exit();
                #[cfg(target_arch = "wasm32")]
                {
                    let user_msg = format!(
                        "Error parsing CLI:\n{}\n
    You should change the GET params, using the cli prefix.\n
    Starting anyway without args.",
                        e
                    );
                    if let Some(window) = web_sys::window() {
                        window.alert_with_message(&user_msg).unwrap_or(());
                    } else {
                        tracing::error!(user_msg);
                    }
                    Settings::default()
                }
            }
        }
    }
}
