use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::{DbErr, RuntimeErr, SqlxError};
use thiserror::Error;

use crate::render;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Not found")]
    NotFound,
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    #[error("Constraint violation: {0}")]
    Constraint(DbErr),
    #[error("Could not reach the database: {0}")]
    Connection(DbErr),
    #[error("Database error: {0}")]
    Database(DbErr),
}

impl From<DbErr> for Error {
    fn from(value: DbErr) -> Self {
        if is_constraint_violation(&value) {
            return Error::Constraint(value);
        }
        match value {
            DbErr::Conn(_) => Error::Connection(value),
            value => Error::Database(value),
        }
    }
}

// SQLite reports the primary code 19 (possibly extended), Postgres and MySQL
// use the SQLSTATE class 23
fn is_constraint_violation(err: &DbErr) -> bool {
    let runtime = match err {
        DbErr::Exec(e) | DbErr::Query(e) => e,
        _ => return false,
    };
    let code = match runtime {
        RuntimeErr::SqlxError(SqlxError::Database(e)) => e.code(),
        _ => return false,
    };
    match code {
        Some(code) => {
            code.starts_with("23")
                || code
                    .parse::<i32>()
                    .map_or(false, |c| c & 0xff == 19)
        }
        None => false,
    }
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::NotFound => StatusCode::NOT_FOUND,
            Error::BadRequest(_) => StatusCode::BAD_REQUEST,
            Error::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::Constraint(_) | Error::Connection(_) | Error::Database(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, %status, "Request rejected");
        }
        let detail = match &self {
            Error::BadRequest(reason) => Some(reason.as_str()),
            _ => None,
        };
        (status, render::error_page(status, detail)).into_response()
    }
}
