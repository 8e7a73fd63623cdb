use std::sync::Arc;
use zipcast_application::use_cases::GetForecastUseCase;

#[derive(Clone)]
pub struct AppState {
    pub get_forecast: Arc<GetForecastUseCase>,
}
