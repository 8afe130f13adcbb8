mod categories;
mod questions;
mod quizzes;

use std::collections::BTreeMap;

use axum::Json;

pub use categories::category_router;
pub use questions::questions_router;
pub use quizzes::quizzes_router;

use crate::db::Category;

use super::error::ApiError;

pub type ApiResponse<T> = Result<Json<T>, ApiError>;

/// `{id: type}` mapping as sent to clients, ordered by id.
pub(crate) fn categories_by_id(categories: Vec<Category>) -> BTreeMap<i64, String> {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}
