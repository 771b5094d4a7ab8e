pub mod price_math;
pub mod time_format;
