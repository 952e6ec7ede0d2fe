use std::collections::BTreeMap;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use axum_extra::extract::WithRejection;
use serde::Serialize;

use super::categories::category_map;
use crate::{
    db::Question,
    extractors::PageNumber,
    filters,
    models::{NewQuestionBody, SearchBody},
    names,
    pagination::QuestionPage,
    rejections::{AppError, ResultExt},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::QUESTIONS_URL, get(list_questions).post(create_question))
        .route(names::QUESTION_URL, delete(delete_question))
        .route(names::SEARCH_QUESTIONS_URL, post(search_questions))
}

#[derive(Serialize)]
struct QuestionsResponse<'a> {
    success: bool,
    #[serde(flatten)]
    page: QuestionPage<'a, Question>,
    categories: BTreeMap<i64, String>,
    current_category: Option<String>,
}

async fn list_questions(
    State(state): State<AppState>,
    PageNumber(page): PageNumber,
) -> Result<Response, AppError> {
    let questions = state
        .db
        .questions()
        .await
        .reject("could not get questions")?;

    if questions.is_empty() {
        return Err(AppError::NotFound("no questions stored"));
    }

    let categories = state
        .db
        .categories()
        .await
        .reject("could not get categories")?;

    Ok(Json(QuestionsResponse {
        success: true,
        page: QuestionPage::new(page, &questions),
        categories: category_map(categories),
        current_category: None,
    })
    .into_response())
}

#[derive(Serialize)]
struct DeleteResponse<'a> {
    success: bool,
    deleted: i64,
    #[serde(flatten)]
    page: QuestionPage<'a, Question>,
}

async fn delete_question(
    State(state): State<AppState>,
    PageNumber(page): PageNumber,
    WithRejection(Path(question_id), _): WithRejection<Path<i64>, AppError>,
) -> Result<Response, AppError> {
    let deleted = state
        .db
        .delete_question(question_id)
        .await
        .reject("could not delete question")?;

    if !deleted {
        return Err(AppError::Unprocessable("question does not exist"));
    }

    let questions = state
        .db
        .questions()
        .await
        .reject("could not get questions")?;

    Ok(Json(DeleteResponse {
        success: true,
        deleted: question_id,
        page: QuestionPage::new(page, &questions),
    })
    .into_response())
}

#[derive(Serialize)]
struct CreateResponse {
    success: bool,
    question: Question,
    created: i64,
    total_questions: i64,
}

async fn create_question(
    State(state): State<AppState>,
    body: Result<Json<NewQuestionBody>, JsonRejection>,
) -> Result<Json<CreateResponse>, AppError> {
    let Json(body) = body.reject_input("could not read new question")?;

    let new = body.validate().map_err(|reason| {
        tracing::warn!("invalid new question: {reason}");
        AppError::Unprocessable(reason)
    })?;

    state
        .db
        .category(new.category)
        .await
        .reject("could not get category")?
        .ok_or(AppError::Unprocessable("unknown category"))?;

    let question = state
        .db
        .insert_question(&new)
        .await
        .reject("could not create question")?;

    let total_questions = state
        .db
        .questions_count()
        .await
        .reject("could not count questions")?;

    Ok(Json(CreateResponse {
        success: true,
        created: question.id,
        question,
        total_questions,
    }))
}

#[derive(Serialize)]
struct SearchResponse<'a> {
    success: bool,
    #[serde(flatten)]
    page: QuestionPage<'a, Question>,
}

async fn search_questions(
    State(state): State<AppState>,
    PageNumber(page): PageNumber,
    WithRejection(Json(body), _): WithRejection<Json<SearchBody>, AppError>,
) -> Result<Response, AppError> {
    let questions = state
        .db
        .questions()
        .await
        .reject("could not get questions")?;
    let matches = filters::search_text(questions, body.term());

    if matches.is_empty() {
        return Err(AppError::NotFound("no questions match the search term"));
    }

    tracing::debug!(term = body.term(), total = matches.len(), "searched questions");

    Ok(Json(SearchResponse {
        success: true,
        page: QuestionPage::new(page, &matches),
    })
    .into_response())
}
