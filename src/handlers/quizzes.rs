use axum::{extract::State, routing::post, Json, Router};
use axum_extra::extract::WithRejection;
use serde::Serialize;

use crate::{
    db::Question,
    models::{QuizBody, QuizRequest},
    names,
    quiz::{self, Draw, QuizPool},
    rejections::{AppError, ResultExt},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route(names::QUIZZES_URL, post(play_quiz))
}

#[derive(Serialize)]
struct QuizResponse {
    success: bool,
    /// Absent once every question in the pool has been served.
    #[serde(skip_serializing_if = "Option::is_none")]
    question: Option<Question>,
    total_questions: usize,
}

async fn play_quiz(
    State(state): State<AppState>,
    WithRejection(Json(body), _): WithRejection<Json<QuizBody>, AppError>,
) -> Result<Json<QuizResponse>, AppError> {
    let category_label = body.quiz_category.kind.clone();
    let request = QuizRequest::from(body);

    if let QuizPool::Category(id) = request.pool {
        state
            .db
            .category(id)
            .await
            .reject("could not get category")?
            .ok_or(AppError::BadRequest("unknown quiz category"))?;
    }

    let questions = state
        .db
        .questions()
        .await
        .reject("could not get questions")?;
    let pool = request.pool.select(questions);

    let next = match quiz::draw(&pool, &request.previous, &mut rand::rng()) {
        Draw::Next(question) => Some(question.clone()),
        Draw::Exhausted => None,
    };

    tracing::debug!(
        pool = ?request.pool,
        category = category_label.as_deref().unwrap_or_default(),
        previous = request.previous.len(),
        exhausted = next.is_none(),
        "drew quiz question"
    );

    Ok(Json(QuizResponse {
        success: true,
        question: next,
        total_questions: pool.len(),
    }))
}
