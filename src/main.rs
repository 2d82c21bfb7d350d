use clap::Parser;
use tokio::net::TcpListener;

mod api;
mod app_context;
mod cli;
mod game;
mod health;
mod http;
mod logging;
mod sessions;
mod storage;

#[tokio::main]
async fn main() {
    let args = cli::Args::parse();
    logging::init(&args);
    let app_context = app_context::init(&args);
    let router = http::router::new(&args, app_context);
    let listener = TcpListener::bind(args.listen_address)
        .await
        .expect("Failed to bind the listen address.");
    tracing::info!(listen_address = %args.listen_address, "Listening.");
    axum::serve(listener, router)
        .await
        .expect("HTTP server stopped unexpectedly.");
}
