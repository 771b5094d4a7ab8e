use crate::config::Config;

/// Returns the tax amount for a raw price. No rounding is applied.
pub fn calculate_tax(price: f64) -> f64 {
    price * Config::TAX_PERCENT / 100.0
}

/// Rescales a tax-inclusive per-MWh price to c/kWh and formats it with two decimals.
pub fn to_display_price(tax_inclusive_price: f64) -> String {
    format!("{:.2}", tax_inclusive_price / 10.0)
}

/// Adds tax to a raw price, then rescales and formats it.
pub fn format_display_price(raw_price: f64) -> String {
    to_display_price(raw_price + calculate_tax(raw_price))
}

/// Unformatted tax-inclusive c/kWh price, used wherever prices are compared numerically.
pub fn display_price(raw_price: f64) -> f64 {
    (raw_price + calculate_tax(raw_price)) / 10.0
}

/// Rounds a display price to whole cents for charting.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
