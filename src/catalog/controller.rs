use std::collections::HashMap;
use axum::{
    body::HttpBody,
    extract::{Path, Query, State},
    extract::rejection::JsonRejection,
    response::Json,
    routing::{get, post, put},
    BoxError, Router,
};
use serde_json::{Value};
use tower_http::trace::TraceLayer;
use tracing::debug;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest, AddBookCommandResponse};
use crate::catalog::command::find_books_by_published_date_cmd::{FindBooksByPublishedDateCommand, FindBooksByPublishedDateCommandRequest, FindBooksByPublishedDateCommandResponse};
use crate::catalog::command::find_books_by_rating_cmd::{FindBooksByRatingCommand, FindBooksByRatingCommandRequest, FindBooksByRatingCommandResponse};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest, GetBookCommandResponse};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest, ListBooksCommandResponse};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest, RemoveBookCommandResponse};
use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest, UpdateBookCommandResponse};
use crate::catalog::domain::CatalogService;
use crate::catalog::factory;
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, method_not_allowed, not_found, rejection_to_server_error, ServerError};

fn build_service(state: &AppState) -> Box<dyn CatalogService> {
    factory::create_catalog_service(&state.config, state.books.clone())
}

// generic over the request body so the same routes serve both hyper and lambda requests
pub(crate) fn build_router<B>(state: AppState) -> Router<(), B>
    where B: HttpBody + Send + 'static,
          B::Data: Send,
          B::Error: Into<BoxError> {
    Router::new()
        .route("/books", get(list_books).fallback(method_not_allowed))
        .route("/books/", get(find_books_by_rating).fallback(method_not_allowed))
        .route("/books/published/", get(find_books_by_published_date).fallback(method_not_allowed))
        .route("/books/update_book", put(update_book).fallback(method_not_allowed))
        .route("/books/:book_id",
               get(find_book_by_id).delete(remove_book).fallback(method_not_allowed))
        .route("/create-book", post(add_book).fallback(method_not_allowed))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub(crate) async fn list_books(
    State(state): State<AppState>) -> Result<Json<ListBooksCommandResponse>, ServerError> {
    let svc = build_service(&state);
    let res = ListBooksCommand::new(svc).execute(ListBooksCommandRequest::default()).await?;
    Ok(Json(res))
}

pub(crate) async fn find_book_by_id(
    State(state): State<AppState>,
    Path(book_id): Path<String>) -> Result<Json<GetBookCommandResponse>, ServerError> {
    debug!(book_id = %book_id, "find book by id");
    let req = GetBookCommandRequest { book_id };
    let svc = build_service(&state);
    let res = GetBookCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn find_books_by_rating(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>) -> Result<Json<FindBooksByRatingCommandResponse>, ServerError> {
    debug!(?params, "find books by rating");
    let req = FindBooksByRatingCommandRequest::from_query(&params);
    let svc = build_service(&state);
    let res = FindBooksByRatingCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn find_books_by_published_date(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>) -> Result<Json<FindBooksByPublishedDateCommandResponse>, ServerError> {
    debug!(?params, "find books by published date");
    let req = FindBooksByPublishedDateCommandRequest::from_query(&params);
    let svc = build_service(&state);
    let res = FindBooksByPublishedDateCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn add_book(
    State(state): State<AppState>,
    json: Result<Json<Value>, JsonRejection>) -> Result<Json<AddBookCommandResponse>, ServerError> {
    let json = json.map_err(rejection_to_server_error)?;
    let req: AddBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    debug!(title = %req.book.title, "add book");
    let svc = build_service(&state);
    let res = AddBookCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn update_book(
    State(state): State<AppState>,
    json: Result<Json<Value>, JsonRejection>) -> Result<Json<UpdateBookCommandResponse>, ServerError> {
    let json = json.map_err(rejection_to_server_error)?;
    let req: UpdateBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    debug!(book_id = ?req.book.id, "update book");
    let svc = build_service(&state);
    let res = UpdateBookCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn remove_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>) -> Result<Json<RemoveBookCommandResponse>, ServerError> {
    debug!(book_id = %book_id, "remove book");
    let req = RemoveBookCommandRequest { book_id };
    let svc = build_service(&state);
    let res = RemoveBookCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use axum::Router;
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use crate::catalog::controller::build_router;
    use crate::core::controller::AppState;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    fn app() -> Router {
        build_router(AppState::new(Configuration::new("127.0.0.1", 8000), RepositoryStore::SeededMemory))
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let req = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }.expect("should build request");
        let res = app.clone().oneshot(req).await.expect("should respond");
        let status = res.status();
        let bytes = hyper::body::to_bytes(res.into_body()).await.expect("should read body");
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("should be json")
        };
        (status, json)
    }

    fn ids(json: &Value) -> Vec<i64> {
        json.as_array().expect("should be array").iter()
            .map(|b| b["id"].as_i64().expect("should have id")).collect()
    }

    #[tokio::test]
    async fn test_should_list_books() {
        let app = app();
        let (status, first) = send(&app, Method::GET, "/books", None).await;
        assert_eq!(StatusCode::OK, status);
        assert_eq!(vec![1, 2, 3, 4, 5, 6], ids(&first));
        assert_eq!("Be Fast with FastAPI", first[1]["title"]);

        let (_, second) = send(&app, Method::GET, "/books", None).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_should_get_book_by_id() {
        let app = app();
        let (status, book) = send(&app, Method::GET, "/books/4", None).await;
        assert_eq!(StatusCode::OK, status);
        assert_eq!(json!({
            "id": 4,
            "title": "HP1",
            "author": "Author 1",
            "description": "Book Description",
            "rating": 2,
            "published_date": 2028,
        }), book);
    }

    #[tokio::test]
    async fn test_should_not_get_missing_book() {
        let app = app();
        let (status, body) = send(&app, Method::GET, "/books/99", None).await;
        assert_eq!(StatusCode::NOT_FOUND, status);
        assert_eq!(json!({"detail": "Book does not exist"}), body);
    }

    #[tokio::test]
    async fn test_should_reject_non_positive_id() {
        let app = app();
        let (status, _) = send(&app, Method::GET, "/books/0", None).await;
        assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, status);
        let (status, _) = send(&app, Method::DELETE, "/books/abc", None).await;
        assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, status);
    }

    #[tokio::test]
    async fn test_should_filter_by_rating() {
        let app = app();
        let (status, books) = send(&app, Method::GET, "/books/?rating=5", None).await;
        assert_eq!(StatusCode::OK, status);
        assert_eq!(vec![1, 2, 3], ids(&books));

        let (status, body) = send(&app, Method::GET, "/books/?rating=4", None).await;
        assert_eq!(StatusCode::NOT_FOUND, status);
        assert_eq!(json!({"detail": "Books not found by rating"}), body);

        let (status, _) = send(&app, Method::GET, "/books/", None).await;
        assert_eq!(StatusCode::NOT_FOUND, status);

        let (status, _) = send(&app, Method::GET, "/books/?rating=6", None).await;
        assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, status);
    }

    #[tokio::test]
    async fn test_should_filter_by_published_date() {
        let app = app();
        let (status, books) = send(&app, Method::GET, "/books/published/?published_date=2027", None).await;
        assert_eq!(StatusCode::OK, status);
        assert_eq!(vec![5], ids(&books));

        let (status, body) = send(&app, Method::GET, "/books/published/?published_date=2010", None).await;
        assert_eq!(StatusCode::NOT_FOUND, status);
        assert_eq!(json!({"detail": "Books not found by published date"}), body);

        let (status, _) = send(&app, Method::GET, "/books/published/?published_date=2031", None).await;
        assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, status);
    }

    #[tokio::test]
    async fn test_should_create_book() {
        let app = app();
        let (status, book) = send(&app, Method::POST, "/create-book", Some(json!({
            "id": 1,
            "title": "T1A",
            "author": "A1",
            "description": "D1",
            "rating": 3,
            "published_date": 2020,
        }))).await;
        assert_eq!(StatusCode::OK, status);
        assert_eq!(7, book["id"]);
        assert_eq!("T1A", book["title"]);

        let (_, books) = send(&app, Method::GET, "/books", None).await;
        assert_eq!(vec![1, 2, 3, 4, 5, 6, 7], ids(&books));
        let (status, loaded) = send(&app, Method::GET, "/books/7", None).await;
        assert_eq!(StatusCode::OK, status);
        assert_eq!(book, loaded);
    }

    #[tokio::test]
    async fn test_should_reject_invalid_book() {
        let app = app();
        let (status, _) = send(&app, Method::POST, "/create-book", Some(json!({
            "title": "T1A",
            "author": "A1",
            "description": "x".repeat(101),
            "rating": 3,
            "published_date": 2020,
        }))).await;
        assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, status);

        let (status, _) = send(&app, Method::POST, "/create-book", Some(json!({"title": "T1A"}))).await;
        assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, status);

        let (_, books) = send(&app, Method::GET, "/books", None).await;
        assert_eq!(6, ids(&books).len());
    }

    #[tokio::test]
    async fn test_should_require_integer_fields() {
        let app = app();
        let (status, _) = send(&app, Method::POST, "/create-book", Some(json!({
            "title": "T1A",
            "author": "A1",
            "description": "D1",
            "rating": "3",
            "published_date": 2020,
        }))).await;
        assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, status);

        let (status, _) = send(&app, Method::POST, "/create-book", Some(json!({
            "title": "T1A",
            "author": "A1",
            "description": "D1",
            "rating": 3,
            "published_date": 2020.0,
        }))).await;
        assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, status);
    }

    #[tokio::test]
    async fn test_should_reject_malformed_json() {
        let app = app();
        let req = Request::builder().method(Method::POST).uri("/create-book")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json")).expect("should build request");
        let res = app.clone().oneshot(req).await.expect("should respond");
        assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, res.status());
    }

    #[tokio::test]
    async fn test_should_update_book() {
        let app = app();
        let update = json!({
            "id": 2,
            "title": "Be Faster",
            "author": "Jane Doe",
            "description": "Second edition",
            "rating": 4,
            "published_date": 2025,
        });
        let (status, book) = send(&app, Method::PUT, "/books/update_book", Some(update.clone())).await;
        assert_eq!(StatusCode::OK, status);
        assert_eq!(update, book);

        let (_, loaded) = send(&app, Method::GET, "/books/2", None).await;
        assert_eq!(update, loaded);
    }

    #[tokio::test]
    async fn test_should_not_update_missing_book() {
        let app = app();
        let (_, before) = send(&app, Method::GET, "/books", None).await;
        let (status, body) = send(&app, Method::PUT, "/books/update_book", Some(json!({
            "id": 60,
            "title": "Ghost",
            "author": "Nobody",
            "description": "Nothing",
            "rating": 1,
            "published_date": 2001,
        }))).await;
        assert_eq!(StatusCode::NOT_FOUND, status);
        assert_eq!(json!({"detail": "Book not found"}), body);
        let (_, after) = send(&app, Method::GET, "/books", None).await;
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn test_should_delete_book() {
        let app = app();
        let (status, body) = send(&app, Method::DELETE, "/books/3", None).await;
        assert_eq!(StatusCode::OK, status);
        assert_eq!(json!({"message": "Book deleted"}), body);

        let (status, _) = send(&app, Method::GET, "/books/3", None).await;
        assert_eq!(StatusCode::NOT_FOUND, status);
        let (_, books) = send(&app, Method::GET, "/books", None).await;
        assert_eq!(vec![1, 2, 4, 5, 6], ids(&books));

        let (status, body) = send(&app, Method::DELETE, "/books/3", None).await;
        assert_eq!(StatusCode::NOT_FOUND, status);
        assert_eq!(json!({"detail": "Book not found"}), body);
    }

    #[tokio::test]
    async fn test_should_answer_unknown_path_with_json() {
        let app = app();
        let (status, body) = send(&app, Method::GET, "/nope", None).await;
        assert_eq!(StatusCode::NOT_FOUND, status);
        assert_eq!(json!({"detail": "Not Found"}), body);

        let (status, body) = send(&app, Method::GET, "/books/published", None).await;
        assert_eq!(StatusCode::NOT_FOUND, status);
        assert_eq!(json!({"detail": "Not Found"}), body);
    }

    #[tokio::test]
    async fn test_should_answer_wrong_method_with_json() {
        let app = app();
        let (status, body) = send(&app, Method::DELETE, "/books/update_book", None).await;
        assert_eq!(StatusCode::METHOD_NOT_ALLOWED, status);
        assert_eq!(json!({"detail": "Method Not Allowed"}), body);

        let (status, body) = send(&app, Method::POST, "/books", Some(json!({"title": "T1A"}))).await;
        assert_eq!(StatusCode::METHOD_NOT_ALLOWED, status);
        assert_eq!(json!({"detail": "Method Not Allowed"}), body);

        let (_, books) = send(&app, Method::GET, "/books", None).await;
        assert_eq!(6, ids(&books).len());
    }
}
