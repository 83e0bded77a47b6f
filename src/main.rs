use std::error::Error;
use std::net::IpAddr;
use std::path::Path;
use std::sync::{Arc, RwLock};
use tokio::signal;
use tokio::sync::oneshot;
use wardbook::api::rest::RestApi;
use wardbook::config::{load_config, Config};
use wardbook::registry::Hospital;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = match load_config(Path::new("config.yaml")) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Using default config ({})", err);
            Config::default()
        }
    };

    println!("Starting Wardbook for {}", config.hospital.name);

    let mut hospital = Hospital::new();
    if config.hospital.seed_demo {
        wardbook::demo::run(&mut hospital);
    }
    let hospital = Arc::new(RwLock::new(hospital));

    let api = RestApi::new(Arc::clone(&hospital));
    let routes = api.routes();

    println!("Starting server on {}:{}", config.api.host, config.api.port);

    let host: IpAddr = config.api.host.parse()?;
    let addr = (host, config.api.port);

    // Create a channel for shutdown signal
    let (shutdown_tx, shutdown_rx) = oneshot::channel();

    let (_, server) = warp::serve(routes)
        .bind_with_graceful_shutdown(addr, async move {
            shutdown_rx.await.ok();
            println!("Shutting down server...");
        });

    let server_handle = tokio::spawn(server);

    // Wait for Ctrl+C
    signal::ctrl_c().await?;
    println!("Ctrl+C received, starting graceful shutdown");

    shutdown_tx.send(()).ok();
    server_handle.await?;

    let hospital = hospital.read().unwrap();
    println!(
        "Final census: {} patients, {} doctors, {} pending emergencies",
        hospital.patient_count(),
        hospital.doctor_count(),
        hospital.pending_emergencies()
    );
    println!("Server shutdown complete");
    Ok(())
}
