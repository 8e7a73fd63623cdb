pub mod forecast;
pub mod health;

pub use forecast::get_forecast;
pub use health::health_check;
