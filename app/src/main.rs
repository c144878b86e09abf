//! WeFarm Pipeline - Headless Driver
//!
//! Loads the stored session, resolves the active location, and prints the
//! current weather card and satellite tile for it. Useful for checking
//! configuration and connectivity without a UI attached.

use shared::Location;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wefarm_app::flow::location::DEFAULT_COORDINATES;
use wefarm_app::flow::satellite::{self, IMAGERY_ZOOM};
use wefarm_app::flow::weather::WeatherFlow;
use wefarm_app::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wefarm_app=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = wefarm_app::Config::load()?;
    tracing::info!("Environment: {}", config.environment);

    let app = App::from_config(config);
    let data = app.store.load()?;

    if data.is_logged_in() {
        tracing::info!("Session: {}", data.session.display_name());
    } else {
        tracing::info!("Session: not logged in");
    }

    let location = data.location.clone().unwrap_or_else(|| {
        Location::new(DEFAULT_COORDINATES.latitude, DEFAULT_COORDINATES.longitude)
    });
    tracing::info!("Location: {}", location.display_label());

    let weather = WeatherFlow::new(&app.weather, &app.store);
    let report = weather.report_for(&location).await;
    println!(
        "{} | {}C (feels like {}C) | humidity {}% | wind {} km/h",
        report.condition,
        report.temperature_celsius,
        report.feels_like_celsius,
        report.humidity_percent,
        report.wind_speed_kmh
    );
    println!("{}", report.advisory());
    println!("Imagery tile: {}", satellite::tile_url(&location, IMAGERY_ZOOM));

    Ok(())
}
