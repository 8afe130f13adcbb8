use std::collections::BTreeMap;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::{
            categories::{count_categories, get_all_categories},
            questions::{count_questions, get_questions_for_category},
        },
        Question,
    },
    server::{app::AppState, error::ApiError, extractors::PathParam},
};

use super::{categories_by_id, ApiResponse};

#[derive(Serialize)]
struct CategoriesList {
    success: bool,
    categories: BTreeMap<i64, String>,
    total_category: i64,
}

#[derive(Serialize)]
struct CategoryQuestions {
    success: bool,
    questions: Vec<Question>,
    // counts every stored question, not only the ones in this category
    total_questions: i64,
    current_category: i64,
}

async fn get_categories(State(pool): State<SqlitePool>) -> ApiResponse<CategoriesList> {
    let categories = get_all_categories(&pool).await?;
    if categories.is_empty() {
        return Err(ApiError::NotFound);
    }
    let total_category = count_categories(&pool).await?;
    Ok(Json(CategoriesList {
        success: true,
        categories: categories_by_id(categories),
        total_category,
    }))
}

async fn category_questions(
    State(pool): State<SqlitePool>,
    PathParam(category_id): PathParam<i64>,
) -> ApiResponse<CategoryQuestions> {
    let (questions, total_questions) = load_category_questions(&pool, category_id)
        .await
        .map_err(ApiError::into_not_found)?;
    Ok(Json(CategoryQuestions {
        success: true,
        questions,
        total_questions,
        current_category: category_id,
    }))
}

// the category table is not consulted: unknown ids simply match nothing
async fn load_category_questions(
    pool: &SqlitePool,
    category_id: i64,
) -> Result<(Vec<Question>, i64), ApiError> {
    let questions = get_questions_for_category(pool, &category_id.to_string()).await?;
    let total = count_questions(pool).await?;
    Ok((questions, total))
}

pub fn category_router(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(get_categories))
        .route(
            "/categories/{category_id}/questions",
            get(category_questions),
        )
        .with_state(state)
}
