#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("Json is rejected")]
    JsonRejection(#[from] JsonRejection),

    #[error("Caller is not an admin")]
    AuthError(#[source] anyhow::Error),

    #[error("Entry not found")]
    EntryNotFound,

    #[error("Bad request")]
    BadRequest,

    #[error("Event with this name and date already exists")]
    DuplicateEvent,

    #[error("Unsupported theme: {0}")]
    UnsupportedTheme(String),

    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let trace_message = match &self {
            Self::JsonRejection(rejection) => {
                format!("{}: {}", self, rejection)
            }
            Self::UnexpectedError(e) => format!("{}: {:?}", self, e),
            Self::AuthError(e) => format!("{}: {}", self, e),
            _ => self.to_string(),
        };
        tracing::error!("{}", trace_message);

        match &self {
            Self::JsonRejection(_e) => StatusCode::BAD_REQUEST,
            Self::AuthError(_e) => StatusCode::UNAUTHORIZED,
            Self::EntryNotFound => StatusCode::NOT_FOUND,
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::DuplicateEvent => StatusCode::CONFLICT,
            Self::UnsupportedTheme(_) => StatusCode::BAD_REQUEST,
            Self::UnexpectedError(_e) => StatusCode::INTERNAL_SERVER_ERROR,
        }
        .into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

use axum::{
    extract::rejection::JsonRejection,
    response::{IntoResponse, Response},
};
use hyper::StatusCode;
