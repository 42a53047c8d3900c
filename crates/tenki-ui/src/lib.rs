//! Two-pane forecast window: region list on the left, forecast cards on the right.

pub mod app;
pub mod error_mapping;
pub mod models;
pub mod services;
pub mod view;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use iced::Size;
use tenki_core::{Config, JmaConfig};
use tenki_jma::{ClientOptions, Endpoints, JmaClient};

pub use app::{App, Message};

/// Client settings derived from the `[jma]` config section
pub fn client_options(jma: &JmaConfig) -> ClientOptions {
    ClientOptions {
        endpoints: Endpoints {
            area_url: jma.area_url.clone(),
            forecast_url_template: jma.forecast_url_template.clone(),
        },
        timeout: Duration::from_secs(jma.timeout_secs),
        user_agent: jma.user_agent.clone(),
    }
}

/// Open the main window and block until it is closed.
pub fn run(config: Config) -> anyhow::Result<()> {
    let client = JmaClient::new(client_options(&config.jma))
        .context("Failed to build JMA HTTP client")?;
    let client = Arc::new(client);

    let size = Size::new(
        config.ui.window_width as f32,
        config.ui.window_height as f32,
    );

    tracing::info!(
        "Opening window ({}x{}), catalog at {}",
        config.ui.window_width,
        config.ui.window_height,
        client.endpoints().area_url
    );

    iced::application("Tenki", App::update, App::view)
        .theme(App::theme)
        .window_size(size)
        .run_with(move || App::new(config.ui, client))
        .context("Window event loop failed")
}
