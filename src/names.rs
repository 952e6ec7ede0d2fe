pub const CATEGORIES_URL: &str = "/categories";
pub const CATEGORY_QUESTIONS_URL: &str = "/categories/{id}/questions";
pub const QUESTIONS_URL: &str = "/questions";
pub const QUESTION_URL: &str = "/questions/{id}";
pub const SEARCH_QUESTIONS_URL: &str = "/questions/search";
pub const QUIZZES_URL: &str = "/quizzes";

pub fn question_url(id: i64) -> String {
    format!("/questions/{id}")
}

pub fn category_questions_url(id: i64) -> String {
    format!("/categories/{id}/questions")
}

// Paging
pub const QUESTIONS_PER_PAGE: usize = 10;
pub const DEFAULT_PAGE: usize = 1;

// Quiz
/// Category id a quiz request sends to play across every category.
pub const ALL_CATEGORIES_ID: i64 = 0;

// Question validation
pub const MIN_DIFFICULTY: i64 = 1;
pub const MAX_DIFFICULTY: i64 = 5;

// CORS
pub const CORS_ALLOW_ORIGIN: &str = "*";
pub const CORS_ALLOW_HEADERS: &str = "Content-Type, Authorization, True";
pub const CORS_ALLOW_METHODS: &str = "GET, POST, DELETE, OPTIONS";
