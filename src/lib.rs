// Library crate for the portfolio CMS client core
// Exports the typed client and stores, plus the development backend used by tests and the mock-server binary

pub mod client;
pub mod config;
pub mod error;
pub mod format;
pub mod handlers;
pub mod inbox;
pub mod middlewares;
pub mod models;
pub mod resource;
pub mod schema;
pub mod services;
pub mod session;
pub mod state;
pub mod store;
pub mod unread;
pub mod upload;
pub mod validators;

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post, put, MethodRouter},
    Extension, Router,
};

use crate::handlers::{
    bulk_create, create_item, delete_item, get_item, get_singleton, list_items, list_published,
    login, mark_read, me, unread, update_item, update_singleton, upload_file,
};
use crate::middlewares::require_admin;
use crate::resource::Collection;
use crate::state::AppState;
use crate::upload::MAX_FILE_SIZE;

/// Require a valid admin bearer token on every method of `route`
fn protected(route: MethodRouter<AppState>, state: &AppState) -> MethodRouter<AppState> {
    route.route_layer(middleware::from_fn_with_state(
        state.clone(),
        require_admin,
    ))
}

/// Build the development backend's router with the given state.
///
/// Reads of public sections are open (projects only list published ones);
/// everything else needs the admin token, except `POST /api/messages` which
/// is the public contact form.
pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/", get(|| async { "Portfolio CMS development backend" }))
        // Auth routes
        .route("/api/auth/login", post(login))
        .route("/api/auth/me", protected(get(me), &state));

    for collection in Collection::ALL {
        let base = format!("/api/{}", collection);
        let item = format!("/api/{}/{{id}}", collection);

        if collection.is_singleton() {
            let route = get(get_singleton).merge(protected(put(update_singleton), &state));
            router = router.route(&base, route.layer(Extension(collection)));
            continue;
        }

        let (list_route, item_route) = match collection {
            Collection::Messages => (
                protected(get(list_items), &state).merge(post(create_item)),
                protected(get(get_item).put(update_item).delete(delete_item), &state),
            ),
            Collection::Projects => (
                get(list_published).merge(protected(post(create_item), &state)),
                get(get_item).merge(protected(put(update_item).delete(delete_item), &state)),
            ),
            _ => (
                get(list_items).merge(protected(post(create_item), &state)),
                get(get_item).merge(protected(put(update_item).delete(delete_item), &state)),
            ),
        };
        router = router
            .route(&base, list_route.layer(Extension(collection)))
            .route(&item, item_route.layer(Extension(collection)));
    }

    router
        // Section-specific routes
        .route(
            "/api/projects/all",
            protected(get(list_items), &state).layer(Extension(Collection::Projects)),
        )
        .route(
            "/api/skills/bulk",
            protected(post(bulk_create), &state).layer(Extension(Collection::Skills)),
        )
        .route("/api/messages/unread", protected(get(unread), &state))
        .route("/api/messages/{id}/read", protected(put(mark_read), &state))
        // Upload routes
        .route(
            "/api/upload/{section}",
            protected(post(upload_file), &state),
        )
        .route(
            "/api/upload/{section}/{kind}",
            protected(post(upload_file), &state),
        )
        .route(
            "/api/upload/{section}/{kind}/{id}",
            protected(post(upload_file), &state),
        )
        .layer(DefaultBodyLimit::max(MAX_FILE_SIZE + 1024 * 1024))
        .with_state(state)
}
