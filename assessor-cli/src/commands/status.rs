//! Status command handler
//!
//! Mounts the health status view, waits for the health check to settle and
//! prints the result.

use std::sync::Arc;

use anyhow::{Context, Result};
use assessor_client::BackendClient;
use assessor_core::domain::display::{DisplayState, STATUS_PREFIX};
use assessor_core::dto::health::STATUS_OK;
use colored::*;
use reqwest::Client;

use crate::config::Config;
use crate::view::{HealthStatusView, Rendered};

/// Fetch backend health once and print it
///
/// An unreachable backend is a display state, not a command failure.
pub async fn show_status(config: &Config) -> Result<()> {
    let http_client = Client::builder()
        .timeout(config.timeout)
        .build()
        .context("Failed to build HTTP client")?;
    let client = BackendClient::with_client(&config.backend_url, http_client);

    let mut view = HealthStatusView::new();
    view.mount(Arc::new(client));
    view.settled().await;

    print_view(&view.render(), &view.state());
    view.unmount();

    Ok(())
}

/// Print the rendered view with the status value coloured
fn print_view(rendered: &Rendered, state: &DisplayState) {
    println!("{}", rendered.heading.bold());
    println!("{}{}", STATUS_PREFIX, colorize_status(state));
}

/// Colorize a display state for the terminal
fn colorize_status(state: &DisplayState) -> ColoredString {
    let text = state.status_text();
    match state {
        DisplayState::Loading => text.dimmed(),
        DisplayState::Resolved(status) if status == STATUS_OK => text.green(),
        DisplayState::Resolved(_) => text.yellow(),
        DisplayState::Unreachable(_) => text.red(),
    }
}
