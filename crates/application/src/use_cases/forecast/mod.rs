pub mod get_forecast;

pub use get_forecast::{Forecast, GetForecastUseCase};
