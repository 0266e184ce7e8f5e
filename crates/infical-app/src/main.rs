use infical_app::render::{CalendarInputs, render, write_output};
use infical_calendar::date::DateKey;
use infical_calendar::theme::Theme;
use infical_core::config::load_config;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    let config = load_config()?;

    tracing::debug!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping info");
    }

    let today = DateKey::from_naive(chrono::Local::now().date_naive());
    let inputs = CalendarInputs::from_settings(&config, today)?;
    let theme = Theme::from(&config.theme);
    let rendered = render(&config, &inputs, &theme)?;

    println!("{}", write_output(&rendered, config.render.format)?);

    Ok(())
}
