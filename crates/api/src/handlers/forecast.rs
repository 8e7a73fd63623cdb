use crate::dto::{ErrorResponse, ForecastResponse};
use crate::state::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};
use serde::Deserialize;
use tracing::{instrument, warn};
use zipcast_domain::DomainError;

#[derive(Debug, Deserialize)]
pub struct ForecastRequest {
    #[serde(default)]
    pub address: String,
}

#[instrument(skip(state, request), name = "api_get_forecast")]
pub async fn get_forecast(
    State(state): State<AppState>,
    Form(request): Form<ForecastRequest>,
) -> Response {
    match state.get_forecast.execute(&request.address).await {
        Ok(Some(forecast)) => {
            (StatusCode::OK, Json(ForecastResponse::from(&forecast))).into_response()
        }
        Ok(None) => error_response(StatusCode::NOT_FOUND, "address not found"),
        Err(e) => {
            warn!(error = %e, "Forecast request failed");
            map_error(&e)
        }
    }
}

fn map_error(error: &DomainError) -> Response {
    match error {
        DomainError::InvalidAddress(_) => {
            error_response(StatusCode::UNPROCESSABLE_ENTITY, "address is required")
        }
        DomainError::GeocodingFailed(_) => {
            error_response(StatusCode::BAD_GATEWAY, "unable to process address")
        }
        // Weather failures, and anything a malformed upstream payload
        // produced downstream of geocoding.
        _ => error_response(StatusCode::BAD_GATEWAY, "unable to retrieve weather data"),
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}
