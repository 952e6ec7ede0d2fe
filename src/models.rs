use std::collections::HashSet;

use serde::Deserialize;

use crate::{names, quiz::QuizPool};

/// Deserialize a value that may be either a JSON number or a string containing a number.
/// Browser forms often send ids and difficulty as strings.
fn deserialize_string_or_i64<'de, D: serde::Deserializer<'de>>(d: D) -> Result<i64, D::Error> {
    struct Vis;
    impl<'de> serde::de::Visitor<'de> for Vis {
        type Value = i64;
        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            f.write_str("number or numeric string")
        }
        fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<i64, E> {
            Ok(v)
        }
        fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<i64, E> {
            i64::try_from(v).map_err(E::custom)
        }
        fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<i64, E> {
            v.trim().parse().map_err(E::custom)
        }
    }
    d.deserialize_any(Vis)
}

/// An integer that arrived either as a JSON number or as a numeric string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LooseInt(pub i64);

impl<'de> Deserialize<'de> for LooseInt {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        deserialize_string_or_i64(d).map(LooseInt)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct NewQuestionBody {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub difficulty: Option<LooseInt>,
    #[serde(default)]
    pub category: Option<LooseInt>,
}

/// A create request that passed shape validation. The category may still be unknown to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub difficulty: i64,
    pub category: i64,
}

impl NewQuestionBody {
    pub fn validate(self) -> Result<NewQuestion, &'static str> {
        let question = non_blank(self.question).ok_or("question text is required")?;
        let answer = non_blank(self.answer).ok_or("answer text is required")?;

        let LooseInt(difficulty) = self.difficulty.ok_or("difficulty is required")?;
        if !(names::MIN_DIFFICULTY..=names::MAX_DIFFICULTY).contains(&difficulty) {
            return Err("difficulty out of range");
        }

        let LooseInt(category) = self.category.ok_or("category is required")?;

        Ok(NewQuestion {
            question,
            answer,
            difficulty,
            category,
        })
    }
}

fn non_blank(text: Option<String>) -> Option<String> {
    text.map(|t| t.trim().to_string()).filter(|t| !t.is_empty())
}

#[derive(Debug, Deserialize)]
pub struct SearchBody {
    #[serde(rename = "searchTerm", default)]
    pub search_term: Option<String>,
}

impl SearchBody {
    pub fn term(&self) -> &str {
        self.search_term.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
pub struct QuizBody {
    pub previous_questions: Vec<LooseInt>,
    pub quiz_category: QuizCategoryBody,
}

#[derive(Debug, Deserialize)]
pub struct QuizCategoryBody {
    pub id: LooseInt,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Explicit "play every category" flag; takes precedence over `id`.
    #[serde(default)]
    pub all: bool,
}

/// A quiz request in typed form: the pool to draw from and the ids already served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRequest {
    pub pool: QuizPool,
    pub previous: HashSet<i64>,
}

impl From<QuizBody> for QuizRequest {
    fn from(body: QuizBody) -> Self {
        let LooseInt(id) = body.quiz_category.id;
        let pool = if body.quiz_category.all || id == names::ALL_CATEGORIES_ID {
            QuizPool::All
        } else {
            QuizPool::Category(id)
        };

        QuizRequest {
            pool,
            previous: body.previous_questions.into_iter().map(|LooseInt(id)| id).collect(),
        }
    }
}
