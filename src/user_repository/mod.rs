//! User storage, symmetric to [`book_repository`](crate::book_repository).

pub mod entity;
mod queries;

pub use queries::*;

use crate::error::Result;
use crate::framework::{InMemoryRepository, QueryHandler, Repository};
use crate::model::{User, UserRole};

/// In-memory store of [`User`]s keyed by id.
#[derive(Debug, Clone, Default)]
pub struct UserRepository {
    users: InMemoryRepository<User>,
}

impl UserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Searches `field` (named as a string) for `value`.
    ///
    /// # Errors
    /// `InvalidArgument` if `field` is not name or email.
    pub fn search_by(&self, field: &str, value: &str) -> Result<Vec<User>> {
        let field = field.parse::<UserField>()?;
        Ok(self.search(field, value))
    }

    /// Case-insensitive substring search, in stored order.
    pub fn search(&self, field: UserField, value: &str) -> Vec<User> {
        let needle = value.to_lowercase();
        self.users
            .filtered(|user| field.value_of(user).to_lowercase().contains(&needle))
    }

    pub fn find_by_role(&self, role: UserRole) -> Vec<User> {
        self.users.filtered(|user| user.role() == role)
    }
}

impl Repository<User> for UserRepository {
    fn save(&mut self, user: User) -> Result<User> {
        self.users.save(user)
    }

    fn find_by_id(&self, id: &u32) -> Option<User> {
        self.users.find_by_id(id)
    }

    fn find_all(&self) -> Vec<User> {
        self.users.find_all()
    }

    fn delete(&mut self, user: &User) {
        self.users.delete(user)
    }

    fn update(&mut self, user: User) -> Result<User> {
        self.users.update(user)
    }

    fn count(&self) -> usize {
        self.users.count()
    }
}

impl QueryHandler<User> for UserRepository {
    type Query = UserQuery;

    fn handle_query(&self, query: UserQuery) -> Result<Vec<User>> {
        match query {
            UserQuery::SearchBy { field, value } => Ok(self.search(field, &value)),
            UserQuery::ByRole(role) => Ok(self.find_by_role(role)),
        }
    }
}
