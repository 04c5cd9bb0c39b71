use sea_orm::DatabaseConnection;

use crate::{
    db::dao::DaoContext,
    services::{
        post_service::PostService, system_service::SystemService, todo_service::TodoService,
        user_service::UserService,
    },
    state::AppState,
};

#[derive(Clone)]
pub struct ServiceContext {
    daos: DaoContext,
}

impl ServiceContext {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self {
            daos: DaoContext::new(db),
        }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(&state.db)
    }

    pub fn todo(&self) -> TodoService {
        TodoService::new(self.daos.todo())
    }

    pub fn user(&self) -> UserService {
        UserService::new(self.daos.user(), self.daos.post())
    }

    pub fn post(&self) -> PostService {
        PostService::new(self.daos.post(), self.daos.user())
    }

    pub fn system(&self) -> SystemService {
        SystemService::new(self.daos.stats())
    }

    pub fn daos(&self) -> &DaoContext {
        &self.daos
    }
}
