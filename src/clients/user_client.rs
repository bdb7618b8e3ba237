use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, RepositoryClient};
use crate::model::{User, UserRole};
use crate::user_repository::{UserField, UserQuery};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the User repository actor.
#[derive(Clone)]
pub struct UserClient {
    inner: RepositoryClient<User, UserQuery>,
}

impl UserClient {
    pub fn new(inner: RepositoryClient<User, UserQuery>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn search_by(&self, field: &str, value: &str) -> Result<Vec<User>, FrameworkError> {
        let field = field.parse::<UserField>()?;
        debug!("Sending request");
        self.inner
            .query(UserQuery::SearchBy { field, value: value.to_string() })
            .await
    }

    #[instrument(skip(self))]
    pub async fn find_by_role(&self, role: UserRole) -> Result<Vec<User>, FrameworkError> {
        debug!("Sending request");
        self.inner.query(UserQuery::ByRole(role)).await
    }
}

#[async_trait]
impl ActorClient<User> for UserClient {
    type Query = UserQuery;

    fn inner(&self) -> &RepositoryClient<User, UserQuery> {
        &self.inner
    }
}
