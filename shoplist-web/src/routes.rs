//! HTTP route handlers for the list page.

use axum::Router;
use axum::extract::rejection::FormRejection;
use axum::extract::{Form, State};
use axum::response::{Html, Redirect};
use axum::routing::get;
use shoplist::core::action::ActionForm;
use shoplist::io::dispatch::dispatch;
use tracing::debug;

use crate::error::ServerError;
use crate::state::AppState;

/// Build the router.
pub fn app_router() -> Router<AppState> {
    Router::new()
        .route("/", get(show_list).post(submit_action))
        .route("/health", get(health))
}

async fn health() -> &'static str {
    "ok"
}

/// GET / - render the current list.
async fn show_list(State(state): State<AppState>) -> Result<Html<String>, ServerError> {
    let list = state.store.load()?;
    let page = state.renderer.render_list(&state.title, &list)?;
    Ok(Html(page))
}

/// POST / - apply one submitted action, then redirect back to the list.
///
/// Always answers `303 See Other` so a refresh never resubmits the form.
/// Only storage failures turn into an error response.
async fn submit_action(
    State(state): State<AppState>,
    form: Result<Form<ActionForm>, FormRejection>,
) -> Result<Redirect, ServerError> {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            debug!(error = %rejection, "unreadable form, treating as no-op");
            ActionForm::default()
        }
    };
    dispatch(&state.store, &form)?;
    Ok(Redirect::to("/"))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use shoplist::io::config::CorruptPolicy;
    use shoplist::io::list_store::ListStore;
    use shoplist::list::ShoppingList;
    use shoplist::test_support::{item, list_of, seeded_store, store_in};
    use tower::ServiceExt;

    use super::*;
    use crate::render::PageRenderer;

    fn app(store: ListStore) -> Router {
        let renderer = PageRenderer::new().expect("renderer");
        app_router().with_state(AppState::new(store, renderer, "Shopping list"))
    }

    fn post_form(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .expect("request")
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request")
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body")
            .to_bytes();
        String::from_utf8(bytes.to_vec()).expect("utf8")
    }

    fn assert_redirect(response: &axum::response::Response) {
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(header::LOCATION).expect("location"),
            "/"
        );
    }

    #[tokio::test]
    async fn get_renders_current_list() {
        let temp = tempfile::tempdir().expect("tempdir");
        let store = seeded_store(temp.path(), vec![item(1, "Milk", false), item(2, "Bread", true)]);

        let response = app(store).oneshot(get("/")).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("value=\"Milk\""));
        assert!(html.contains("value=\"Bread\""));
        assert!(html.contains("value=\"delete_done\""));
    }

    #[tokio::test]
    async fn get_on_missing_file_renders_empty_list() {
        let temp = tempfile::tempdir().expect("tempdir");
        let store = store_in(temp.path());

        let response = app(store.clone()).oneshot(get("/")).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("The list is empty"));
        assert!(!store.path().exists());
    }

    #[tokio::test]
    async fn add_redirects_and_persists() {
        let temp = tempfile::tempdir().expect("tempdir");
        let store = store_in(temp.path());

        let response = app(store.clone())
            .oneshot(post_form("action=add&text=+Milk+"))
            .await
            .expect("response");
        assert_redirect(&response);
        assert!(body_text(response).await.is_empty());
        assert_eq!(
            store.load().expect("load"),
            list_of(vec![item(1, "Milk", false)])
        );
    }

    #[tokio::test]
    async fn update_toggle_delete_via_forms() {
        let temp = tempfile::tempdir().expect("tempdir");
        let store = seeded_store(
            temp.path(),
            vec![
                item(1, "Milk", false),
                item(2, "Bread", false),
                item(3, "Eggs", false),
            ],
        );

        for body in [
            "action=update&id=2&text=Rye%20bread",
            "action=toggle&id=3",
            "action=delete&id=1",
        ] {
            let response = app(store.clone())
                .oneshot(post_form(body))
                .await
                .expect("response");
            assert_redirect(&response);
        }

        assert_eq!(
            store.load().expect("load"),
            list_of(vec![item(2, "Rye bread", false), item(3, "Eggs", true)])
        );
    }

    #[tokio::test]
    async fn delete_done_removes_checked_items() {
        let temp = tempfile::tempdir().expect("tempdir");
        let store = seeded_store(
            temp.path(),
            vec![
                item(1, "Milk", true),
                item(2, "Bread", false),
                item(3, "Eggs", true),
            ],
        );

        let response = app(store.clone())
            .oneshot(post_form("action=delete_done"))
            .await
            .expect("response");
        assert_redirect(&response);
        assert_eq!(
            store.load().expect("load"),
            list_of(vec![item(2, "Bread", false)])
        );
    }

    #[tokio::test]
    async fn invalid_submissions_still_redirect() {
        let temp = tempfile::tempdir().expect("tempdir");
        let store = seeded_store(temp.path(), vec![item(1, "Milk", false)]);

        for body in [
            "action=add&text=+++",
            "action=update&id=0&text=Eggs",
            "action=toggle&id=abc",
            "action=explode",
            "",
        ] {
            let response = app(store.clone())
                .oneshot(post_form(body))
                .await
                .expect("response");
            assert_redirect(&response);
        }
        assert_eq!(
            store.load().expect("load"),
            list_of(vec![item(1, "Milk", false)])
        );
    }

    #[tokio::test]
    async fn wrong_content_type_is_absorbed() {
        let temp = tempfile::tempdir().expect("tempdir");
        let store = store_in(temp.path());

        let request = Request::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"action":"add","text":"Milk"}"#))
            .expect("request");
        let response = app(store.clone()).oneshot(request).await.expect("response");
        assert_redirect(&response);
        assert_eq!(store.load().expect("load"), ShoppingList::new());
    }

    #[tokio::test]
    async fn corrupt_file_answers_500() {
        let temp = tempfile::tempdir().expect("tempdir");
        let store = store_in(temp.path());
        fs::write(store.path(), "{{{").expect("write");

        let response = app(store.clone()).oneshot(get("/")).await.expect("response");
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = app(store.clone())
            .oneshot(post_form("action=add&text=Milk"))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(fs::read_to_string(store.path()).expect("read"), "{{{");
    }

    #[tokio::test]
    async fn write_failure_answers_500_not_redirect() {
        let temp = tempfile::tempdir().expect("tempdir");
        let store = seeded_store(temp.path(), vec![item(1, "Milk", false)]);
        fs::create_dir(temp.path().join("shopping_list.json.tmp")).expect("block temp path");

        let response = app(store.clone())
            .oneshot(post_form("action=add&text=Bread"))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.headers().get(header::LOCATION).is_none());
        assert_eq!(
            body_text(response).await,
            "shopping list storage failed"
        );
        assert_eq!(
            store.load().expect("load"),
            list_of(vec![item(1, "Milk", false)])
        );
    }

    #[tokio::test]
    async fn reset_policy_serves_empty_list() {
        let temp = tempfile::tempdir().expect("tempdir");
        let store = ListStore::new(temp.path().join("list.json"), CorruptPolicy::Reset);
        fs::write(store.path(), "{{{").expect("write");

        let response = app(store.clone()).oneshot(get("/")).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        assert!(temp.path().join("list.json.corrupt").is_file());
    }

    #[tokio::test]
    async fn health_is_ok() {
        let temp = tempfile::tempdir().expect("tempdir");
        let response = app(store_in(temp.path()))
            .oneshot(get("/health"))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "ok");
    }
}
