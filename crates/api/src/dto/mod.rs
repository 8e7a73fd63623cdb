pub mod error;
pub mod forecast;

pub use error::ErrorResponse;
pub use forecast::{format_temp_f, ForecastResponse};
