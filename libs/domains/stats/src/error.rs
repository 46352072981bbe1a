use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use datastore::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatsError {
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type StatsResult<T> = Result<T, StatsError>;

impl From<StatsError> for AppError {
    fn from(err: StatsError) -> Self {
        match err {
            StatsError::Store(store) => match store {
                corrupt @ StoreError::Corrupt(_) => AppError::Internal(corrupt.to_string()),
                StoreError::Io(io) => AppError::Io(io),
            },
        }
    }
}

impl IntoResponse for StatsError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
