use axum::{
    handler::Handler,
    middleware::from_fn_with_state,
    routing::get,
    Router,
};

use crate::{middleware::validate_api_key::validate_api_key, state::ApiState};

use super::{
    create_book::create_book,
    delete_book::delete_book,
    get_book::get_book,
    get_books::{get_all_books, search_books},
    update_book::update_book,
};

/// Book routes.
///
/// `GET /books` and `GET /books/search` are anonymous, every other route goes through the API key layer.
pub fn app(state: ApiState) -> Router<ApiState> {
    let api_key = from_fn_with_state(state, validate_api_key);

    Router::<ApiState>::new()
        .route(
            "/books",
            get(get_all_books).post(create_book.layer(api_key.clone())),
        )
        .route("/books/search", get(search_books))
        .route(
            "/books/:isbn",
            get(get_book.layer(api_key.clone()))
                .put(update_book.layer(api_key.clone()))
                .delete(delete_book.layer(api_key)),
        )
}
