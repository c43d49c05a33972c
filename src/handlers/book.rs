use crate::core::gateway::{GatewayRequest, GatewayResponse};
use crate::core::repository::Repository;
use crate::domain::model::Book;
use crate::domain::ports::{Handler, ItemStore};
use crate::utils::error::{ApiError, Result};
use crate::utils::validation::validate_isbn;
use async_trait::async_trait;
use http::StatusCode;

pub const ISBN_PARAM: &str = "isbn";

/// `GET /books?isbn=...`. Books are read-only through the gateway.
pub struct BookHandler<S: ItemStore> {
    books: Repository<Book, S>,
}

impl<S: ItemStore> BookHandler<S> {
    pub fn new(books: Repository<Book, S>) -> Self {
        Self { books }
    }

    async fn show(&self, request: &GatewayRequest) -> Result<GatewayResponse> {
        let isbn = request.query_parameter(ISBN_PARAM).unwrap_or_default();
        validate_isbn(ISBN_PARAM, isbn)?;

        match self.books.fetch(isbn).await? {
            Some(book) => GatewayResponse::json(StatusCode::OK, &book),
            None => Err(ApiError::NotFound {
                table: self.books.table().to_string(),
                key: isbn.to_string(),
            }),
        }
    }
}

#[async_trait]
impl<S: ItemStore> Handler for BookHandler<S> {
    async fn handle(&self, request: GatewayRequest) -> GatewayResponse {
        tracing::info!(method = %request.http_method, "Handling book request");

        let result = match request.http_method.as_str() {
            "GET" => self.show(&request).await,
            other => Err(ApiError::MethodNotAllowed {
                method: other.to_string(),
            }),
        };

        result.unwrap_or_else(GatewayResponse::from)
    }
}
