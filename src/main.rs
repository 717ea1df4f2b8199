use tracing::info;
use tracing_subscriber::EnvFilter;

mod api;
mod commands;
mod models;
mod services;
mod utils;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("podlytics=debug".parse().unwrap())
                .add_directive("reqwest=warn".parse().unwrap()),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("📈 Starting podlytics - podcast listener chart generator");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let code = commands::handle_args(&args).await;
    std::process::exit(code);
}
