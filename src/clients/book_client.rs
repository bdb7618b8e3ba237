use crate::book_repository::{BookQuery, SearchField};
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, RepositoryClient};
use crate::model::Book;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Book repository actor.
#[derive(Clone)]
pub struct BookClient {
    inner: RepositoryClient<Book, BookQuery>,
}

impl BookClient {
    pub fn new(inner: RepositoryClient<Book, BookQuery>) -> Self {
        Self { inner }
    }

    /// Searches a field given by name (`title`, `author`, `genre`).
    ///
    /// An unknown field name fails before any request reaches the actor.
    #[instrument(skip(self))]
    pub async fn search_by(&self, field: &str, value: &str) -> Result<Vec<Book>, FrameworkError> {
        let field = field.parse::<SearchField>()?;
        self.search(field, value).await
    }

    #[instrument(skip(self, value))]
    pub async fn search(
        &self,
        field: SearchField,
        value: impl Into<String> + Send,
    ) -> Result<Vec<Book>, FrameworkError> {
        debug!("Sending request");
        let value = value.into();
        self.inner.query(BookQuery::SearchBy { field, value }).await
    }

    #[instrument(skip(self))]
    pub async fn find_available(&self) -> Result<Vec<Book>, FrameworkError> {
        debug!("Sending request");
        self.inner.query(BookQuery::Available).await
    }
}

#[async_trait]
impl ActorClient<Book> for BookClient {
    type Query = BookQuery;

    fn inner(&self) -> &RepositoryClient<Book, BookQuery> {
        &self.inner
    }
}
