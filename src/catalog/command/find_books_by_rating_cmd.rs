use std::collections::HashMap;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::validation::{parse_query_param, validate_rating};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct FindBooksByRatingCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl FindBooksByRatingCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct FindBooksByRatingCommandRequest {
    pub(crate) rating: Option<String>,
}

impl FindBooksByRatingCommandRequest {
    pub fn new(rating: Option<String>) -> Self {
        Self {
            rating,
        }
    }

    pub fn from_query(params: &HashMap<String, String>) -> Self {
        Self::new(params.get("rating").cloned())
    }
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub(crate) struct FindBooksByRatingCommandResponse {
    pub books: Vec<BookDto>,
}

impl FindBooksByRatingCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl Command<FindBooksByRatingCommandRequest, FindBooksByRatingCommandResponse> for FindBooksByRatingCommand {
    async fn execute(&self, req: FindBooksByRatingCommandRequest) -> Result<FindBooksByRatingCommandResponse, CommandError> {
        let rating = parse_query_param("rating", req.rating.as_ref(), validate_rating)?;
        self.catalog_service.find_books_by_rating(rating).await
            .map_err(CommandError::from).map(FindBooksByRatingCommandResponse::new)
    }
}
