//! HTTP response handling for errors

use super::types::GatewayError;
use crate::core::chat::ResponseShaper;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

impl ResponseError for GatewayError {
    fn status_code(&self) -> StatusCode {
        // Downstream failures always answer 500, whatever status the provider used.
        match self {
            GatewayError::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ResponseShaper::shape_error(self))
    }
}
