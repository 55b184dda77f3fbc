use std::sync::Arc;

use crate::domain::task::TaskRepository;

pub struct TaskQueryService {
    pub(super) task_repo: Arc<dyn TaskRepository>,
}

impl TaskQueryService {
    pub fn new(task_repo: Arc<dyn TaskRepository>) -> Self {
        Self { task_repo }
    }
}
