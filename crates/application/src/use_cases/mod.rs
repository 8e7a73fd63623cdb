pub mod forecast;

// Re-export use cases
pub use forecast::{Forecast, GetForecastUseCase};
