use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use datastore::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ItemError {
    #[error("Invalid item ID")]
    InvalidId,

    #[error("Item not found")]
    NotFound { id: i64 },

    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type ItemResult<T> = Result<T, ItemError>;

/// Convert ItemError to AppError for the shared error envelope
impl From<ItemError> for AppError {
    fn from(err: ItemError) -> Self {
        match err {
            ItemError::InvalidId => AppError::BadRequest("Invalid item ID".to_string()),
            ItemError::NotFound { id } => {
                tracing::debug!(item_id = id, "item lookup missed");
                AppError::NotFound("Item not found".to_string())
            }
            ItemError::Validation(message) => AppError::BadRequest(message),
            ItemError::Store(store) => match store {
                corrupt @ StoreError::Corrupt(_) => AppError::Internal(corrupt.to_string()),
                StoreError::Io(io) => AppError::Io(io),
            },
        }
    }
}

impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
