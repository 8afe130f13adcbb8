use std::collections::HashSet;

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_number_from_string;
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::{
            categories::get_category,
            questions::{get_all_questions, get_questions_for_category},
        },
        Question,
    },
    server::{app::AppState, error::ApiError, extractors::JsonBody, quiz::pick_question},
    telemetry::QUIZ_QUESTIONS_CNTR,
};

use super::ApiResponse;

/// Category id 0 stands for every category.
const ALL_CATEGORIES: i64 = 0;

#[derive(Deserialize)]
struct QuizCategory {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    id: i64,
}

#[derive(Deserialize)]
struct QuizRound {
    quiz_category: QuizCategory,
    previous_questions: Vec<i64>,
}

#[derive(Serialize)]
struct NextQuestion {
    success: bool,
    question: Question,
}

async fn play_quiz(
    State(pool): State<SqlitePool>,
    JsonBody(round): JsonBody<QuizRound>,
) -> ApiResponse<NextQuestion> {
    let category_id = round.quiz_category.id;
    let candidates = quiz_candidates(&pool, category_id).await?;
    let previous: HashSet<i64> = round.previous_questions.into_iter().collect();
    let question = pick_question(candidates, &previous, &mut rand::thread_rng())?;

    // labelled by the requested category, which has been checked to exist (or is 0)
    QUIZ_QUESTIONS_CNTR
        .with_label_values(&[category_id.to_string().as_str()])
        .inc();
    tracing::debug!(
        question_id = question.id,
        asked = previous.len(),
        "Serving quiz question"
    );
    Ok(Json(NextQuestion {
        success: true,
        question,
    }))
}

async fn quiz_candidates(pool: &SqlitePool, category_id: i64) -> Result<Vec<Question>, ApiError> {
    if category_id == ALL_CATEGORIES {
        return Ok(get_all_questions(pool).await?);
    }
    let category = get_category(pool, category_id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(get_questions_for_category(pool, &category.id.to_string()).await?)
}

pub fn quizzes_router(state: AppState) -> Router {
    Router::new()
        .route("/quizzes", post(play_quiz))
        .with_state(state)
}
