// src/application/commands/tasks/create.rs
use super::TaskCommandService;
use crate::{
    application::{
        dto::TaskDto,
        error::{ApplicationError, ApplicationResult},
        lookup::{self, USER_NOT_FOUND},
    },
    domain::{
        slug::Slug,
        task::{NewTask, Priority, TaskContent, TaskTitle},
    },
};
use tracing::info;

pub struct CreateTaskCommand {
    pub user_id: i64,
    pub title: String,
    pub content: String,
    pub priority: i32,
}

impl CreateTaskCommand {
    pub fn builder() -> CreateTaskCommandBuilder {
        CreateTaskCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateTaskCommandBuilder {
    user_id: Option<i64>,
    title: Option<String>,
    content: String,
    priority: i32,
}

impl CreateTaskCommandBuilder {
    pub fn user_id(mut self, user_id: i64) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn build(self) -> Result<CreateTaskCommand, &'static str> {
        Ok(CreateTaskCommand {
            user_id: self.user_id.ok_or("user_id is required")?,
            title: self.title.ok_or("title is required")?,
            content: self.content,
            priority: self.priority,
        })
    }
}

impl TaskCommandService {
    /// Create a task owned by an existing user. The slug is derived from the title.
    ///
    /// A user deleted between the lookup and the insert is caught by the foreign
    /// key and reported as `NotFound` as well.
    pub async fn create_task(&self, command: CreateTaskCommand) -> ApplicationResult<TaskDto> {
        let user_id = lookup::user_id(command.user_id)?;
        let title = TaskTitle::new(command.title)?;
        let content = TaskContent::new(command.content);
        let priority = Priority(command.priority);

        if self.user_repo.find_by_id(user_id).await?.is_none() {
            return Err(ApplicationError::not_found(USER_NOT_FOUND));
        }

        let slug = Slug::new(self.slugger.slugify(title.as_str()))?;
        let new_task = NewTask::new(title, content, priority, slug, user_id);

        let task = self.task_repo.insert(new_task).await?;
        info!(task_id = %task.id, user_id = %user_id, slug = %task.slug, "task created");
        Ok(task.into())
    }
}
