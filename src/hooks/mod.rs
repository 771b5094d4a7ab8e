pub mod use_breakpoint;
pub mod use_clock;
pub mod use_prices;
pub mod use_settings;
