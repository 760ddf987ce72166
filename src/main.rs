mod app;
mod config;
mod controller;
mod error;
mod submit;
mod ui;

use app::State;
use controller::Options;
use tracing_subscriber::EnvFilter;

fn main() -> error::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = config::load();

    // Nothing to attach the dropdown to: refuse to start
    let options = Options::new(config.options.clone())?;

    tracing::info!(
        "Starting searchdrop: {} options, submit policy {:?}",
        options.len(),
        config.submit.policy
    );

    let size = iced::Size::new(config.window.width, config.window.height);

    iced::application(
        move || State::new(options.clone(), &config),
        State::update,
        State::view,
    )
    .title(State::title)
    .subscription(State::subscription)
    .theme(State::theme)
    .window_size(size)
    .run()?;

    Ok(())
}
