use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::{redirect::DEFAULT_APP_REDIRECT_URI, state::CallbackMode};

/// Bridges an OAuth authorization callback to the Muscu Tracker mobile app
/// For debug logs, set RUST_LOG=debug
#[derive(Parser, Debug, Serialize, Deserialize)]
#[command(author, version, about, long_about = None)]
pub struct CallbackOpts {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Commands,
}

impl CallbackOpts {
    pub fn parse() -> Self {
        CallbackOpts::parse_from(std::env::args())
    }
}

#[derive(Args, Debug, Serialize, Deserialize)]
pub struct GlobalOpts {
    /// OpenTelemetry collector endpoint (only used when built with the `otel`
    /// feature)
    #[arg(
        long,
        env = "OTEL_EXPORTER_OTLP_ENDPOINT",
        default_value = "http://127.0.0.1:4317"
    )]
    pub(crate) otel_collector_endpoint: Option<String>,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
pub struct RedirectOpts {
    /// Application URI the authorization code is forwarded to
    #[arg(
        long,
        env = "APP_REDIRECT_URI",
        default_value = DEFAULT_APP_REDIRECT_URI,
        value_parser = parse_app_redirect_uri
    )]
    pub(crate) app_redirect_uri: String,

    /// Percent-encode the code before forwarding it (it is passed through
    /// verbatim otherwise)
    #[arg(long, default_value_t = false)]
    pub(crate) encode_code: bool,
}

#[derive(Subcommand, Debug, Serialize, Deserialize)]
pub enum Commands {
    /// Start the server
    Start {
        /// Hostname or IP address to bind to
        #[arg(long, env = "HOST", default_value = "0.0.0.0")]
        hostname: String,

        /// Port to bind to
        #[arg(short, long, env = "PORT", default_value = "10000")]
        port: u16,

        /// Whether to forward the code to the app or only display it
        #[arg(long, value_enum, default_value_t = CallbackMode::Redirect)]
        mode: CallbackMode,

        #[command(flatten)]
        redirect: RedirectOpts,

        /// Number of HTTP workers (defaults to the number of physical CPUs)
        #[arg(long)]
        workers: Option<usize>,

        /// Certificate .PEM to be used by the server for TLS
        /// Specify both '--cert' and '--key' to enable TLS
        #[arg(long, requires("key"))]
        cert: Option<PathBuf>,

        /// Key .PEM to be used by the server for TLS
        /// Specify both '--cert' and '--key' to enable TLS
        #[arg(long, requires("cert"))]
        key: Option<PathBuf>,
    },
    /// Print the app link the server would redirect to for a given code
    RedirectUrl {
        /// Authorization code to forward
        code: String,

        #[command(flatten)]
        redirect: RedirectOpts,
    },
}

fn parse_app_redirect_uri(value: &str) -> Result<String, String> {
    url::Url::parse(value)
        .map(|_| value.to_string())
        .map_err(|e| format!("not an absolute URI: {e}"))
}
