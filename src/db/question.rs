use color_eyre::Result;

use super::models::Question;
use super::Db;
use crate::models::NewQuestion;

impl Db {
    /// Every stored question, ordered by id.
    pub async fn questions(&self) -> Result<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            "SELECT id, question, answer, category, difficulty FROM questions ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    pub async fn questions_count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    pub async fn insert_question(&self, new: &NewQuestion) -> Result<Question> {
        let id = sqlx::query(
            "INSERT INTO questions (question, answer, category, difficulty) VALUES (?, ?, ?, ?)",
        )
        .bind(&new.question)
        .bind(&new.answer)
        .bind(new.category)
        .bind(new.difficulty)
        .execute(&self.pool)
        .await?
        .last_insert_rowid();

        tracing::info!("new question created with id: {id} in category: {}", new.category);

        Ok(Question {
            id,
            question: new.question.clone(),
            answer: new.answer.clone(),
            category: new.category,
            difficulty: new.difficulty,
        })
    }

    /// Returns `false` when no question with `id` exists.
    pub async fn delete_question(&self, id: i64) -> Result<bool> {
        let deleted = sqlx::query("DELETE FROM questions WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected()
            > 0;

        if deleted {
            tracing::info!("question deleted: {id}");
        }

        Ok(deleted)
    }
}
