/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Base URL of the prices API, overridable at build time with `PRICES_API_URL`
    pub const API_URL: &'static str = match option_env!("PRICES_API_URL") {
        Some(url) => url,
        None => "http://127.0.0.1:8080",
    };

    /// Value added tax applied on top of the raw spot price (percent)
    pub const TAX_PERCENT: f64 = 25.5;

    /// Display prices above this are drawn in the "high" color (c/kWh)
    pub const HIGH_PRICE_THRESHOLD: f64 = 100.0;

    /// Display prices below this are drawn in the "low" color (c/kWh)
    pub const LOW_PRICE_THRESHOLD: f64 = 65.0;

    /// Minimum height of the highlight bars (c/kWh)
    pub const HIGHLIGHT_FLOOR: f64 = 10.0;

    /// Local hour from which next-day prices are considered published
    pub const NEXT_DAY_PUBLISH_HOUR: u32 = 3;

    /// Clock tick driving the "now" highlight and countdown (1 second)
    pub const CLOCK_TICK_MS: u32 = 1_000;

    /// Storage key of the "show only prices after now" toggle
    pub const SHOW_ONLY_AFTER_NOW_KEY: &'static str = "showOnlyAfterNow";
}
