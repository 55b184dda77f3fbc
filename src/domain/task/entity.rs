// src/domain/task/entity.rs
use crate::domain::slug::Slug;
use crate::domain::task::value_objects::{Priority, TaskContent, TaskId, TaskTitle};
use crate::domain::user::UserId;

#[derive(Debug, Clone)]
pub struct Task {
    pub id: TaskId,
    pub title: TaskTitle,
    pub content: TaskContent,
    pub priority: Priority,
    pub completed: bool,
    pub slug: Slug,
    pub user_id: UserId,
}

#[derive(Debug, Clone)]
pub struct NewTask {
    pub title: TaskTitle,
    pub content: TaskContent,
    pub priority: Priority,
    pub completed: bool,
    pub slug: Slug,
    pub user_id: UserId,
}

impl NewTask {
    pub fn new(
        title: TaskTitle,
        content: TaskContent,
        priority: Priority,
        slug: Slug,
        user_id: UserId,
    ) -> Self {
        Self {
            title,
            content,
            priority,
            completed: false,
            slug,
            user_id,
        }
    }
}

/// Partial overwrite of a task. The slug keeps its creation-time value even
/// when the title changes.
#[derive(Debug, Clone)]
pub struct TaskUpdate {
    pub id: TaskId,
    pub title: Option<TaskTitle>,
    pub content: Option<TaskContent>,
    pub priority: Option<Priority>,
}

impl TaskUpdate {
    pub fn new(id: TaskId) -> Self {
        Self {
            id,
            title: None,
            content: None,
            priority: None,
        }
    }

    pub fn with_title(mut self, title: TaskTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_content(mut self, content: TaskContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.priority.is_none()
    }

    pub fn apply_to(&self, task: &mut Task) {
        if let Some(title) = &self.title {
            task.title = title.clone();
        }
        if let Some(content) = &self.content {
            task.content = content.clone();
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
    }
}
