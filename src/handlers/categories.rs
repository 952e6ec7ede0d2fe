use std::collections::BTreeMap;

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use axum_extra::extract::WithRejection;
use serde::Serialize;

use crate::{
    db::{Category, Question},
    extractors::PageNumber,
    filters, names,
    pagination::QuestionPage,
    rejections::{AppError, ResultExt},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::CATEGORIES_URL, get(list_categories))
        .route(names::CATEGORY_QUESTIONS_URL, get(category_questions))
}

/// Categories keyed by id, the shape the listing endpoints share.
pub(crate) fn category_map(categories: Vec<Category>) -> BTreeMap<i64, String> {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}

#[derive(Serialize)]
struct CategoriesResponse {
    success: bool,
    categories: BTreeMap<i64, String>,
}

async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<CategoriesResponse>, AppError> {
    let categories = state
        .db
        .categories()
        .await
        .reject("could not get categories")?;

    Ok(Json(CategoriesResponse {
        success: true,
        categories: category_map(categories),
    }))
}

#[derive(Serialize)]
struct CategoryQuestionsResponse<'a> {
    success: bool,
    #[serde(flatten)]
    page: QuestionPage<'a, Question>,
    current_category: String,
}

async fn category_questions(
    State(state): State<AppState>,
    PageNumber(page): PageNumber,
    WithRejection(Path(category_id), _): WithRejection<Path<i64>, AppError>,
) -> Result<Response, AppError> {
    let category = state
        .db
        .category(category_id)
        .await
        .reject("could not get category")?
        .ok_or(AppError::Unprocessable("unknown category"))?;

    let questions = state
        .db
        .questions()
        .await
        .reject("could not get questions")?;
    let questions = filters::by_category(questions, category.id);

    tracing::debug!(
        category = category.id,
        total = questions.len(),
        page,
        "listing questions by category"
    );

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        page: QuestionPage::new(page, &questions),
        current_category: category.kind,
    })
    .into_response())
}
