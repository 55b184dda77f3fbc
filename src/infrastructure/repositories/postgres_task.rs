// src/infrastructure/repositories/postgres_task.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::Slug;
use crate::domain::task::{
    NewTask, Priority, Task, TaskContent, TaskId, TaskRepository, TaskTitle, TaskUpdate,
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const TASK_COLUMNS: &str = "id, title, content, priority, completed, slug, user_id";

#[derive(Clone)]
pub struct PostgresTaskRepository {
    pool: PgPool,
}

impl PostgresTaskRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn build_update_query(update: TaskUpdate) -> QueryBuilder<'static, Postgres> {
        let TaskUpdate {
            id,
            title,
            content,
            priority,
        } = update;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE tasks SET ");
        let mut first = true;

        if let Some(title) = title {
            first = false;
            builder.push("title = ");
            builder.push_bind(title.into_inner());
        }

        if let Some(content) = content {
            if !first {
                builder.push(", ");
            }
            first = false;
            builder.push("content = ");
            builder.push_bind(content.into_inner());
        }

        if let Some(priority) = priority {
            if !first {
                builder.push(", ");
            }
            builder.push("priority = ");
            builder.push_bind(i32::from(priority));
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));

        builder
    }
}

#[derive(Debug, FromRow)]
struct TaskRow {
    id: i64,
    title: String,
    content: String,
    priority: i32,
    completed: bool,
    slug: String,
    user_id: i64,
}

impl TryFrom<TaskRow> for Task {
    type Error = DomainError;

    fn try_from(row: TaskRow) -> Result<Self, Self::Error> {
        Ok(Task {
            id: TaskId::new(row.id)?,
            title: TaskTitle::new(row.title)?,
            content: TaskContent::new(row.content),
            priority: Priority(row.priority),
            completed: row.completed,
            slug: Slug::new(row.slug)?,
            user_id: UserId::new(row.user_id)?,
        })
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn list(&self) -> DomainResult<Vec<Task>> {
        let rows = sqlx::query_as::<_, TaskRow>(&format!("SELECT {TASK_COLUMNS} FROM tasks"))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Task::try_from).collect()
    }

    async fn find_by_id(&self, id: TaskId) -> DomainResult<Option<Task>> {
        let row = sqlx::query_as::<_, TaskRow>(&format!(
            "SELECT {TASK_COLUMNS} FROM tasks WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Task::try_from).transpose()
    }

    async fn count_by_user(&self, user_id: UserId) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(1) FROM tasks WHERE user_id = $1")
            .bind(i64::from(user_id))
            .fetch_one(&self.pool)
            .await
            .map(|count| u64::try_from(count).unwrap_or_default())
            .map_err(map_sqlx)
    }

    async fn insert(&self, new_task: NewTask) -> DomainResult<Task> {
        let NewTask {
            title,
            content,
            priority,
            completed,
            slug,
            user_id,
        } = new_task;

        let row = sqlx::query_as::<_, TaskRow>(&format!(
            "INSERT INTO tasks (title, content, priority, completed, slug, user_id)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {TASK_COLUMNS}"
        ))
        .bind(title.as_str())
        .bind(content.as_str())
        .bind(i32::from(priority))
        .bind(completed)
        .bind(slug.as_str())
        .bind(i64::from(user_id))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Task::try_from(row)
    }

    async fn update(&self, update: TaskUpdate) -> DomainResult<()> {
        if update.is_empty() {
            return Err(DomainError::validation("no fields provided for update"));
        }

        let mut builder = Self::build_update_query(update);
        let result = builder
            .build()
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("task was not found"));
        }
        Ok(())
    }

    async fn delete(&self, id: TaskId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("task was not found"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task_id() -> TaskId {
        TaskId::new(9).unwrap()
    }

    #[test]
    fn update_query_with_single_field() {
        let update = TaskUpdate::new(task_id()).with_priority(Priority(5));
        let builder = PostgresTaskRepository::build_update_query(update);
        assert_eq!(builder.sql(), "UPDATE tasks SET priority = $1 WHERE id = $2");
    }

    #[test]
    fn update_query_with_every_field() {
        let update = TaskUpdate::new(task_id())
            .with_title(TaskTitle::new("Renamed").unwrap())
            .with_content(TaskContent::new("body"))
            .with_priority(Priority(-1));
        let builder = PostgresTaskRepository::build_update_query(update);
        assert_eq!(
            builder.sql(),
            "UPDATE tasks SET title = $1, content = $2, priority = $3 WHERE id = $4"
        );
    }

    #[test]
    fn update_query_never_touches_slug() {
        let update = TaskUpdate::new(task_id())
            .with_title(TaskTitle::new("Renamed").unwrap())
            .with_content(TaskContent::new("body"));
        let builder = PostgresTaskRepository::build_update_query(update);
        assert_eq!(
            builder.sql(),
            "UPDATE tasks SET title = $1, content = $2 WHERE id = $3"
        );
        assert!(!builder.sql().contains("slug"));
    }
}
