use crate::app::App;
use crate::config::Config;
use crate::domain::{seed_entries, BookingEditor};
use crate::router::handle;
use astra::Server;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod app;
mod config;
mod domain;
mod errors;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "booking_editor=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 1️⃣ Load the hard-coded bookings
    let entries = match seed_entries() {
        Ok(entries) => entries,
        Err(e) => {
            tracing::error!(error = %e, "seed data rejected");
            std::process::exit(1);
        }
    };
    tracing::info!(count = entries.len(), "bookings loaded");

    let app = App::new(BookingEditor::new(entries));

    // 2️⃣ Start the server
    let addr = config.addr();
    tracing::info!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(config.max_workers);

    // 3️⃣ Serve requests, passing the app handle into the closure
    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => responses::html_error_response(err),
    });

    if let Err(e) = result {
        tracing::error!(error = %e, "server ended with error");
    }

    tracing::info!("Server shut down cleanly.");
}
