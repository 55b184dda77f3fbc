use super::TaskQueryService;
use crate::application::{
    dto::TaskDto,
    error::{ApplicationError, ApplicationResult},
    lookup::{self, TASK_NOT_FOUND},
};

pub struct GetTaskByIdQuery {
    pub id: i64,
}

impl TaskQueryService {
    pub async fn get_task_by_id(&self, query: GetTaskByIdQuery) -> ApplicationResult<TaskDto> {
        let id = lookup::task_id(query.id)?;
        let task = self
            .task_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(TASK_NOT_FOUND))?;
        Ok(task.into())
    }
}
