use std::collections::BTreeMap;

use axum::{
    extract::State,
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::{categories::get_all_categories, questions},
        NewQuestion, Question,
    },
    server::{
        app::AppState,
        deserializers::Loose,
        error::ApiError,
        extractors::{JsonBody, PathParam, QueryParams},
        pagination::paginate,
    },
};

use super::{categories_by_id, ApiResponse};

#[derive(Deserialize)]
struct PageQuery {
    page: Option<u32>,
}

#[derive(Deserialize)]
struct QuestionBody {
    #[serde(default)]
    question: Loose,
    #[serde(default)]
    answer: Loose,
    #[serde(default)]
    difficulty: Loose,
    #[serde(default)]
    category: Loose,
}

impl QuestionBody {
    // only explicit "" values are rejected here; absent fields get through
    fn has_empty_field(&self) -> bool {
        [
            &self.question,
            &self.answer,
            &self.difficulty,
            &self.category,
        ]
        .iter()
        .any(|field| field.is_empty_string())
    }

    fn into_new_question(self) -> Option<NewQuestion> {
        Some(NewQuestion {
            question: self.question.as_text()?,
            answer: self.answer.as_text()?,
            difficulty: self.difficulty.as_integer()?,
            category: self.category.as_key()?,
        })
    }
}

#[derive(Deserialize)]
struct SearchBody {
    #[serde(rename = "searchTerm", default)]
    search_term: Option<String>,
}

#[derive(Serialize)]
struct QuestionsPage {
    success: bool,
    questions: Vec<Question>,
    total_question: usize,
    categories: BTreeMap<i64, String>,
    current_category: Option<i64>,
}

#[derive(Serialize)]
struct SearchResults {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    current_category: Option<i64>,
}

#[derive(Serialize)]
struct Deleted {
    success: bool,
    deleted: i64,
}

#[derive(Serialize)]
struct Created {
    success: bool,
    created: i64,
}

async fn questions_page(
    State(pool): State<SqlitePool>,
    QueryParams(PageQuery { page }): QueryParams<PageQuery>,
) -> ApiResponse<QuestionsPage> {
    let all = questions::get_all_questions(&pool).await?;
    let current = paginate(&all, page.unwrap_or(1));
    if current.is_empty() {
        return Err(ApiError::NotFound);
    }
    let categories = get_all_categories(&pool).await?;

    Ok(Json(QuestionsPage {
        success: true,
        questions: current.to_vec(),
        total_question: all.len(),
        categories: categories_by_id(categories),
        current_category: None,
    }))
}

async fn delete_question(
    State(pool): State<SqlitePool>,
    PathParam(question_id): PathParam<i64>,
) -> ApiResponse<Deleted> {
    // a missing question is reported like any other failure of the deletion
    remove_question(&pool, question_id)
        .await
        .map_err(ApiError::into_unprocessable)?;
    tracing::info!(question_id, "Deleted question");
    Ok(Json(Deleted {
        success: true,
        deleted: question_id,
    }))
}

async fn remove_question(pool: &SqlitePool, id: i64) -> Result<(), ApiError> {
    if questions::get_question(pool, id).await?.is_none() {
        return Err(ApiError::NotFound);
    }
    questions::delete_question(pool, id).await?;
    Ok(())
}

async fn create_question(
    State(pool): State<SqlitePool>,
    JsonBody(body): JsonBody<QuestionBody>,
) -> ApiResponse<Created> {
    if body.has_empty_field() {
        return Err(ApiError::MethodNotAllowed);
    }
    let id = insert_question(&pool, body)
        .await
        .map_err(ApiError::into_unprocessable)?;
    tracing::info!(question_id = id, "Created question");
    Ok(Json(Created {
        success: true,
        created: id,
    }))
}

async fn insert_question(pool: &SqlitePool, body: QuestionBody) -> Result<i64, ApiError> {
    let new_question = body.into_new_question().ok_or(ApiError::Unprocessable)?;
    Ok(questions::create_question(pool, &new_question).await?)
}

async fn search_questions(
    State(pool): State<SqlitePool>,
    JsonBody(body): JsonBody<SearchBody>,
) -> ApiResponse<SearchResults> {
    let term = match body.search_term.as_deref() {
        None | Some("") | Some(" ") => return Err(ApiError::NotFound),
        Some(term) => term,
    };
    let found = questions::search_questions(&pool, term).await?;
    if found.is_empty() {
        return Err(ApiError::NotFound);
    }
    Ok(Json(SearchResults {
        success: true,
        total_questions: found.len(),
        questions: found,
        current_category: None,
    }))
}

pub fn questions_router(state: AppState) -> Router {
    Router::new()
        .route("/questions", get(questions_page).post(create_question))
        .route("/questions/search", post(search_questions))
        .route("/questions/{question_id}", delete(delete_question))
        .with_state(state)
}
