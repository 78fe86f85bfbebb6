mod cli;
mod errors;
mod health;
mod oauth;
mod redirect;
mod state;
mod telemetry;
mod templates;
mod tls;

use std::path::PathBuf;

use actix_web::{middleware, web, App, HttpServer};
use tracing::info;

use crate::{
    cli::{CallbackOpts, Commands, GlobalOpts, RedirectOpts},
    errors::CallbackError,
    state::{AppState, CallbackMode},
};

struct ServerOpts {
    hostname: String,
    port: u16,
    mode: CallbackMode,
    redirect: RedirectOpts,
    workers: Option<usize>,
    tls: Option<(PathBuf, PathBuf)>,
}

async fn start(global: GlobalOpts, opts: ServerOpts) -> Result<(), CallbackError> {
    telemetry::init_tracer(global.otel_collector_endpoint.as_deref())?;

    let state = web::Data::new(AppState {
        app_redirect_uri: opts.redirect.app_redirect_uri,
        mode: opts.mode,
        encode_code: opts.redirect.encode_code,
    });

    info!(
        hostname = %opts.hostname,
        port = opts.port,
        mode = ?state.mode,
        app_redirect_uri = %state.app_redirect_uri,
        tls = opts.tls.is_some(),
        "starting callback server"
    );

    let server = HttpServer::new(move || {
        let app = App::new()
            .app_data(state.clone())
            .wrap(middleware::Logger::default())
            .service(health::index)
            .service(health::check)
            .configure(oauth::configure);
        #[cfg(feature = "otel")]
        let app = app.wrap(actix_web_opentelemetry::RequestTracing::new());
        app
    });
    let server = match opts.workers {
        Some(workers) => server.workers(workers),
        None => server,
    };
    let server = match opts.tls {
        Some((cert, key)) => {
            let config = tls::load_rustls_config(&cert, &key)?;
            server.bind_rustls_021((opts.hostname.as_str(), opts.port), config)?
        }
        None => server.bind((opts.hostname.as_str(), opts.port))?,
    };

    let result = server.run().await;
    info!("server stopped");

    telemetry::shutdown_tracer();

    Ok(result?)
}

#[tokio::main]
async fn main() -> Result<(), CallbackError> {
    let opts = CallbackOpts::parse();
    telemetry::init_logging();

    match opts.command {
        Commands::Start {
            hostname,
            port,
            mode,
            redirect,
            workers,
            cert,
            key,
        } => {
            let server_opts = ServerOpts {
                hostname,
                port,
                mode,
                redirect,
                workers,
                tls: cert.zip(key),
            };
            start(opts.global, server_opts).await
        }
        Commands::RedirectUrl { code, redirect } => {
            println!(
                "{}",
                redirect::app_redirect_url(&redirect.app_redirect_uri, &code, redirect.encode_code)
            );
            Ok(())
        }
    }
}
