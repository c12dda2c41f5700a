mod app;
mod auth;
mod config;
mod error;
mod filter;
mod form;
mod listing;
mod model;
mod screens;
mod store;

use app::App;
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("school_portal=info")),
        )
        .init();

    iced::application("Success House of English", App::update, App::view)
        .theme(|app: &App| app.theme.clone())
        .window_size(iced::Size::new(1400.0, 800.0))
        .run()
}
