use actix_web::{
    dev::ServiceResponse,
    error::JsonPayloadError,
    http::StatusCode,
    middleware::{ErrorHandlerResponse, ErrorHandlers},
    HttpRequest, HttpResponse, ResponseError,
};
use bmiadvisor_model::{advisor, wire::ErrorResponse};
use log::{debug, error};

pub const MISSING_FIELDS: &str = "Missing required fields: gender, height, weight";
pub const INVALID_VALUES: &str = "Invalid input values";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("An internal error occurred")]
    Internal,
}

impl From<advisor::Error> for ApiError {
    fn from(err: advisor::Error) -> Self {
        ApiError::Validation(err.to_string())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse::new(self.to_string()))
    }
}

pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!("Rejecting request body: {}", err);
    ApiError::Validation(INVALID_VALUES.to_owned()).into()
}

/// Replaces the body of every 500 response with the generic error envelope.
pub fn handlers<B: 'static>() -> ErrorHandlers<B> {
    ErrorHandlers::new().handler(StatusCode::INTERNAL_SERVER_ERROR, render_internal_error)
}

fn render_internal_error<B>(res: ServiceResponse<B>) -> actix_web::Result<ErrorHandlerResponse<B>> {
    error!("Internal error while handling {}", res.request().path());
    let (req, _) = res.into_parts();
    let res = ServiceResponse::new(req, ApiError::Internal.error_response()).map_into_right_body();
    Ok(ErrorHandlerResponse::Response(res))
}
