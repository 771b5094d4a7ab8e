use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tracing_web::MakeConsoleWriter;

/// Subscriber that writes library events to the browser console.
pub fn subscriber() -> impl tracing::Subscriber + Send + Sync + 'static {
    let level = if cfg!(debug_assertions) {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    let format_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeConsoleWriter);

    tracing_subscriber::registry().with(level).with(format_layer)
}

/// Installs [`subscriber`] globally. Call once, before rendering.
pub fn init_tracing() {
    if let Err(e) = subscriber().try_init() {
        gloo::console::warn!(&format!("Tracing not initialised: {e}"));
    }
}
