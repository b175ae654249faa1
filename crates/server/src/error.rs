// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! HTTP API errors.
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API route.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The hand doesn't exist.
    #[error("Hand with ID {0} not found")]
    NotFound(String),
    /// A hand with the same id exists.
    #[error("Hand with ID {0} already exists")]
    Conflict(String),
    /// The request is invalid.
    #[error("{0}")]
    Validation(String),
    /// Storage or other internal error.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "detail": self.to_string() }))
    }
}
