use super::TaskQueryService;
use crate::application::{dto::TaskDto, error::ApplicationResult};

impl TaskQueryService {
    pub async fn list_tasks(&self) -> ApplicationResult<Vec<TaskDto>> {
        let tasks = self.task_repo.list().await?;
        Ok(tasks.into_iter().map(Into::into).collect())
    }
}
