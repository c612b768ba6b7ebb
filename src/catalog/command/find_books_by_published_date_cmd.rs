use std::collections::HashMap;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::validation::{parse_query_param, validate_published_date};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct FindBooksByPublishedDateCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl FindBooksByPublishedDateCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct FindBooksByPublishedDateCommandRequest {
    pub(crate) published_date: Option<String>,
}

impl FindBooksByPublishedDateCommandRequest {
    pub fn new(published_date: Option<String>) -> Self {
        Self {
            published_date,
        }
    }

    pub fn from_query(params: &HashMap<String, String>) -> Self {
        Self::new(params.get("published_date").cloned())
    }
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub(crate) struct FindBooksByPublishedDateCommandResponse {
    pub books: Vec<BookDto>,
}

impl FindBooksByPublishedDateCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl Command<FindBooksByPublishedDateCommandRequest, FindBooksByPublishedDateCommandResponse> for FindBooksByPublishedDateCommand {
    async fn execute(&self, req: FindBooksByPublishedDateCommandRequest) -> Result<FindBooksByPublishedDateCommandResponse, CommandError> {
        let published_date = parse_query_param("published_date", req.published_date.as_ref(), validate_published_date)?;
        self.catalog_service.find_books_by_published_date(published_date).await
            .map_err(CommandError::from).map(FindBooksByPublishedDateCommandResponse::new)
    }
}
