use actix_web::{http::StatusCode, HttpResponse};
use derive_more::Display;

#[derive(Debug, Display, PartialEq, Eq)]
pub enum ServerError {
    DieselError,
    EnvironmentError,
    R2D2Error,
    BlockingError,
    NotFound,
    BadRequest,
}

impl From<r2d2::Error> for ServerError {
    fn from(err: r2d2::Error) -> ServerError {
        log::error!("connection pool: {err}");
        ServerError::R2D2Error
    }
}

impl From<diesel::result::Error> for ServerError {
    fn from(err: diesel::result::Error) -> ServerError {
        log::error!("diesel: {err}");
        ServerError::DieselError
    }
}

impl From<actix_web::error::BlockingError> for ServerError {
    fn from(err: actix_web::error::BlockingError) -> ServerError {
        log::error!("blocking pool: {err}");
        ServerError::BlockingError
    }
}

impl actix_web::error::ResponseError for ServerError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServerError::NotFound => StatusCode::NOT_FOUND,
            ServerError::BadRequest => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ServerError::DieselError => {
                HttpResponse::InternalServerError().body("Library Error: Diesel Error.")
            }
            ServerError::EnvironmentError => HttpResponse::InternalServerError()
                .body("Server Error: Use of an uninitialized environment variable."),
            ServerError::R2D2Error => {
                HttpResponse::InternalServerError().body("Server Error: Pooling Error.")
            }
            ServerError::BlockingError => {
                HttpResponse::InternalServerError().body("Server Error: Worker Pool Error.")
            }
            // not-found and bad-request carry no body, only the status
            ServerError::NotFound => HttpResponse::NotFound().finish(),
            ServerError::BadRequest => HttpResponse::BadRequest().finish(),
        }
    }
}
