//! HomeView - Main Entry Point
//!
//! Smart-home control panel demo with a spatial floor-plan device view

use homeview::app::application::run_app;

fn main() {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting HomeView...");

    // Run the GPUI application
    run_app();
}
