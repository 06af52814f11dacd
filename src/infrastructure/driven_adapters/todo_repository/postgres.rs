//! PostgreSQL Todo Repository Implementation
//!
//! Implements the TodoRepository trait using SQLx for PostgreSQL.
//! Mutations are scoped by `id` and `user_id` inside a single statement.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::gateways::TodoRepository;
use crate::domain::models::todo::{NewTodo, SubjectId, Todo, TodoChanges, TodoId};
use crate::shared::errors::RepositoryError;

/// Database row representation for todos table
#[derive(Debug, sqlx::FromRow)]
struct TodoRow {
    id: i64,
    title: String,
    completed: bool,
    user_id: String,
}

impl From<TodoRow> for Todo {
    fn from(row: TodoRow) -> Self {
        Todo::restore(
            TodoId::from_i64(row.id),
            row.title,
            row.completed,
            SubjectId::new(row.user_id),
        )
    }
}

/// PostgreSQL implementation of TodoRepository
pub struct PostgresTodoRepository {
    pool: PgPool,
}

impl PostgresTodoRepository {
    /// Create a new PostgresTodoRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoRepository for PostgresTodoRepository {
    async fn find_all(&self) -> Result<Vec<Todo>, RepositoryError> {
        let rows = sqlx::query_as::<_, TodoRow>(
            r#"
            SELECT id, title, completed, user_id
            FROM todos
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Todo::from).collect())
    }

    async fn find_by_owner(&self, owner: &SubjectId) -> Result<Vec<Todo>, RepositoryError> {
        let rows = sqlx::query_as::<_, TodoRow>(
            r#"
            SELECT id, title, completed, user_id
            FROM todos
            WHERE user_id = $1
            ORDER BY id ASC
            "#,
        )
        .bind(owner.as_str())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Todo::from).collect())
    }

    async fn create(&self, todo: &NewTodo) -> Result<Todo, RepositoryError> {
        let row = sqlx::query_as::<_, TodoRow>(
            r#"
            INSERT INTO todos (title, completed, user_id)
            VALUES ($1, false, $2)
            RETURNING id, title, completed, user_id
            "#,
        )
        .bind(&todo.title)
        .bind(todo.owner.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(Todo::from(row))
    }

    async fn update_owned(
        &self,
        id: TodoId,
        owner: &SubjectId,
        changes: &TodoChanges,
    ) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE todos
            SET title = $1, completed = $2
            WHERE id = $3 AND user_id = $4
            "#,
        )
        .bind(&changes.title)
        .bind(changes.completed)
        .bind(id.as_i64())
        .bind(owner.as_str())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_owned(&self, id: TodoId, owner: &SubjectId) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r#"
            DELETE FROM todos
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id.as_i64())
        .bind(owner.as_str())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
