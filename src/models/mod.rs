pub mod breakpoint;
pub mod chart;
pub mod error;
pub mod prices;
