use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{DefaultBodyLimit, Path, Query, Request, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post, put};
use axum::{Form, Json, Router};
use axum_extra::extract::CookieJar;
use chrono::Utc;
use scribble_core::models::{NoteDraft, NoteId, OwnerNotes, ThemeMode};
use scribble_core::services::DatabaseService;
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::error::{invariant_response, AppError, ErrorReport};
use crate::pages::{
    note_not_found_message, owner_not_found_message, render_error_page, render_index_page,
    render_notes_page, render_profile_page, render_users_page, NoteEditorState, NotesOutlet,
};
use crate::theme::{safe_redirect, theme_cookie};
use crate::viewer::{resolve_viewer, OptionalUser, PageRequest};

/// Avatar shown for users without an uploaded image
const DEFAULT_AVATAR: &str = include_str!("../assets/user.svg");

/// Largest accepted avatar upload
const MAX_IMAGE_BYTES: usize = 3 * 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub db: DatabaseService,
}

impl AppState {
    pub fn new(config: Arc<AppConfig>, db: DatabaseService) -> Self {
        Self { config, db }
    }
}

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/", get(index))
        .route("/theme", post(set_theme))
        .route("/img/user.svg", get(default_avatar))
        .route("/resources/user-images/{image_id}", get(user_image))
        .route("/users", get(search_users))
        .route("/users/{username}", get(profile))
        .route(
            "/users/{username}/image",
            put(upload_user_image).layer(DefaultBodyLimit::max(MAX_IMAGE_BYTES)),
        )
        .route("/users/{username}/notes", get(notes_index))
        .route(
            "/users/{username}/notes/new",
            get(new_note_form).post(create_note),
        )
        .route("/users/{username}/notes/{note_id}", get(note_detail))
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(state.clone(), resolve_viewer))
        .layer(middleware::from_fn(render_error_pages))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Whether the client asked for JSON instead of a page
fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|accept| accept.contains("application/json"))
}

/// Turn error responses into HTML pages for clients that expect pages.
///
/// Runs outside viewer resolution so its failures render as pages too; the
/// viewer comes back on the response when it was resolved.
async fn render_error_pages(request: Request, next: Next) -> Response {
    let json = wants_json(request.headers());
    let (parts, body) = request.into_parts();
    let PageRequest(mut context) = PageRequest::from_parts(&parts);
    let response = next.run(Request::from_parts(parts, body)).await;

    let Some(report) = response.extensions().get::<ErrorReport>().cloned() else {
        return response;
    };
    if json {
        return response;
    }
    context.user = response
        .extensions()
        .get::<OptionalUser>()
        .and_then(|viewer| viewer.0.clone());
    (report.status, Html(render_error_page(context, &report))).into_response()
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp: i64,
}

async fn healthz() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: Utc::now().timestamp(),
    })
}

async fn not_found() -> AppError {
    AppError::not_found("Not found")
}

async fn default_avatar() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "image/svg+xml"),
            (header::CACHE_CONTROL, "public, max-age=86400"),
        ],
        DEFAULT_AVATAR,
    )
}

async fn user_image(
    State(state): State<AppState>,
    Path(image_id): Path<String>,
) -> Result<Response, AppError> {
    let image = state
        .db
        .find_user_image(&image_id)
        .await
        .map_err(AppError::from)
        .and_then(|image| invariant_response(image, "Image not found", StatusCode::NOT_FOUND))?;
    let headers = [
        (header::CONTENT_TYPE, image.content_type),
        (
            header::CACHE_CONTROL,
            "public, max-age=31536000, immutable".to_string(),
        ),
    ];
    Ok((headers, image.blob).into_response())
}

async fn index(PageRequest(context): PageRequest) -> Html<String> {
    Html(render_index_page(context))
}

#[derive(Debug, Deserialize)]
struct ThemeForm {
    theme: String,
    redirect_to: Option<String>,
}

async fn set_theme(jar: CookieJar, Form(form): Form<ThemeForm>) -> Result<impl IntoResponse, AppError> {
    let mode: ThemeMode = form.theme.parse().map_err(AppError::bad_request)?;
    let target = safe_redirect(form.redirect_to.as_deref()).to_string();
    tracing::debug!(theme = %mode, "Updated theme preference");
    Ok((jar.add(theme_cookie(mode)), Redirect::to(&target)))
}

#[derive(Debug, Default, Deserialize)]
struct SearchQuery {
    search: Option<String>,
}

async fn search_users(
    State(state): State<AppState>,
    PageRequest(context): PageRequest,
    Query(query): Query<SearchQuery>,
) -> Result<Html<String>, AppError> {
    let term = query.search.unwrap_or_default().trim().to_string();
    let users = state.db.search_users(&term, state.config.search_limit).await?;
    tracing::debug!(query = %term, results = users.len(), "Searched users");
    Ok(Html(render_users_page(context, term, users)))
}

fn owner_boundary(username: &str) -> impl FnOnce(StatusCode) -> Option<String> + '_ {
    move |status| (status == StatusCode::NOT_FOUND).then(|| owner_not_found_message(username))
}

async fn profile(
    State(state): State<AppState>,
    Path(username): Path<String>,
    PageRequest(context): PageRequest,
) -> Result<Html<String>, AppError> {
    let user = state
        .db
        .find_user_by_username(&username)
        .await
        .map_err(AppError::from)
        .and_then(|user| invariant_response(user, "User not found", StatusCode::NOT_FOUND))
        .map_err(|err| err.caught_by(owner_boundary(&username)))?;
    Ok(Html(render_profile_page(context, user)))
}

/// Replace the avatar of `username` with the request body.
///
/// The body is the raw image and `Content-Type` names its format.
async fn upload_user_image(
    State(state): State<AppState>,
    Path(username): Path<String>,
    viewer: OptionalUser,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let user = state
        .db
        .find_user_by_username(&username)
        .await
        .map_err(AppError::from)
        .and_then(|user| invariant_response(user, "User not found", StatusCode::NOT_FOUND))
        .map_err(|err| err.caught_by(owner_boundary(&username)))?;
    if viewer.id() != Some(&user.id) {
        return Err(AppError::forbidden("Only the owner can change the profile image"));
    }

    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    let image = state.db.set_user_image(&user.id, content_type, &body).await?;
    tracing::info!(username = %user.username, image_id = %image.id, bytes = body.len(), "Updated user image");
    Ok((StatusCode::CREATED, Json(image)))
}

/// Load the owner of a notes route, failing with 404 when there is none.
async fn load_owner(state: &AppState, username: &str) -> Result<OwnerNotes, AppError> {
    let owner = state
        .db
        .find_owner_with_notes(username)
        .await
        .map_err(AppError::from)
        .and_then(|owner| invariant_response(owner, "Owner not found", StatusCode::NOT_FOUND))
        .map_err(|err| err.caught_by(owner_boundary(username)))?;
    tracing::info!(
        username = %owner.username,
        note_count = owner.notes.len(),
        "Loaded owner notes"
    );
    Ok(owner)
}

#[derive(Debug, Serialize)]
struct OwnerResponse {
    owner: OwnerNotes,
}

async fn notes_index(
    State(state): State<AppState>,
    Path(username): Path<String>,
    PageRequest(context): PageRequest,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let owner = load_owner(&state, &username).await?;
    if wants_json(&headers) {
        return Ok(Json(OwnerResponse { owner }).into_response());
    }
    Ok(Html(render_notes_page(context, owner, NotesOutlet::Empty)).into_response())
}

async fn note_detail(
    State(state): State<AppState>,
    Path((username, note_id)): Path<(String, String)>,
    PageRequest(context): PageRequest,
) -> Result<Html<String>, AppError> {
    let owner = load_owner(&state, &username).await?;
    let note_id = NoteId::from(note_id);
    let note = state
        .db
        .get_note(&owner.id, &note_id)
        .await
        .map_err(AppError::from)
        .and_then(|note| invariant_response(note, "Note not found", StatusCode::NOT_FOUND))
        .map_err(|err| {
            err.caught_by(|status| {
                (status == StatusCode::NOT_FOUND).then(|| note_not_found_message(&note_id))
            })
        })?;
    Ok(Html(render_notes_page(context, owner, NotesOutlet::Note(note))))
}

fn require_owner(owner: &OwnerNotes, viewer: &OptionalUser) -> Result<(), AppError> {
    if owner.is_owned_by(viewer.id()) {
        Ok(())
    } else {
        Err(AppError::forbidden("Only the owner can add notes"))
    }
}

async fn new_note_form(
    State(state): State<AppState>,
    Path(username): Path<String>,
    viewer: OptionalUser,
    PageRequest(context): PageRequest,
) -> Result<Html<String>, AppError> {
    let owner = load_owner(&state, &username).await?;
    require_owner(&owner, &viewer)?;
    Ok(Html(render_notes_page(
        context,
        owner,
        NotesOutlet::Editor(NoteEditorState::default()),
    )))
}

#[derive(Debug, Default, Deserialize)]
struct NoteForm {
    #[serde(default)]
    title: String,
    #[serde(default)]
    content: String,
}

async fn create_note(
    State(state): State<AppState>,
    Path(username): Path<String>,
    viewer: OptionalUser,
    PageRequest(context): PageRequest,
    Form(form): Form<NoteForm>,
) -> Result<Response, AppError> {
    let owner = load_owner(&state, &username).await?;
    require_owner(&owner, &viewer)?;

    match NoteDraft::parse(&form.title, &form.content) {
        Ok(draft) => {
            let note = state.db.create_note(&owner.id, draft).await?;
            tracing::info!(username = %owner.username, note_id = %note.id, "Created note");
            let location = format!("/users/{}/notes/{}", owner.username, note.id);
            Ok(Redirect::to(&location).into_response())
        }
        Err(errors) => {
            let editor = NoteEditorState {
                title: form.title,
                content: form.content,
                errors,
            };
            let html = render_notes_page(context, owner, NotesOutlet::Editor(editor));
            Ok((StatusCode::BAD_REQUEST, Html(html)).into_response())
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use pretty_assertions::assert_eq;
    use scribble_core::models::User;
    use tower::ServiceExt;

    use super::*;

    const IDENTITY_HEADER: &str = "x-scribble-user";

    fn test_state() -> AppState {
        let config = AppConfig::from_lookup(|name| match name {
            "SCRIBBLE_IDENTITY_HEADER" => Some(IDENTITY_HEADER.to_string()),
            "SCRIBBLE_SEARCH_LIMIT" => Some("2".to_string()),
            _ => None,
        })
        .unwrap();
        AppState::new(Arc::new(config), DatabaseService::open_in_memory().unwrap())
    }

    async fn seed_alice(state: &AppState) -> (User, NoteId) {
        let alice = state.db.create_user("alice", None).await.unwrap();
        let draft = NoteDraft::parse("Groceries", "Milk").unwrap();
        let note = state.db.create_note(&alice.id, draft).await.unwrap();
        (alice, note.id)
    }

    async fn send(state: &AppState, request: Request<Body>) -> (StatusCode, HeaderMap, String) {
        let response = app_router(state.clone()).oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn get_as(uri: &str, user: &User) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .header(IDENTITY_HEADER, user.id.as_str())
            .body(Body::empty())
            .unwrap()
    }

    fn post_form(uri: &str, body: &str, user: Option<&User>) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(user) = user {
            builder = builder.header(IDENTITY_HEADER, user.id.as_str());
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    #[tokio::test]
    async fn healthz_reports_ok() {
        let state = test_state();
        let (status, _, body) = send(&state, get("/healthz")).await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn notes_route_lists_owner_notes() {
        let state = test_state();
        let (_, note_id) = seed_alice(&state).await;

        let (status, _, body) = send(&state, get("/users/alice/notes")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Groceries"));
        assert!(body.contains(&format!("href=\"/users/alice/notes/{note_id}\"")));
        assert!(!body.contains("New Note"));
        assert!(body.contains("Log In"));
    }

    #[tokio::test]
    async fn owner_sees_new_note_item() {
        let state = test_state();
        let (alice, _) = seed_alice(&state).await;

        let (status, _, body) = send(&state, get_as("/users/alice/notes", &alice)).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("New Note"));
        assert!(body.contains("href=\"/users/alice/notes/new\""));
        assert!(body.contains(LOGOUT_FORM_MARKER));
    }

    const LOGOUT_FORM_MARKER: &str = "action=\"/logout\"";

    #[tokio::test]
    async fn other_viewer_does_not_see_new_note_item() {
        let state = test_state();
        seed_alice(&state).await;
        let bob = state.db.create_user("bob", None).await.unwrap();

        let (_, _, body) = send(&state, get_as("/users/alice/notes", &bob)).await;
        assert!(!body.contains("New Note"));
    }

    #[tokio::test]
    async fn unknown_identity_is_anonymous() {
        let state = test_state();
        seed_alice(&state).await;
        let request = Request::builder()
            .uri("/users/alice/notes")
            .header(IDENTITY_HEADER, "nobody")
            .body(Body::empty())
            .unwrap();

        let (status, _, body) = send(&state, request).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Log In"));
    }

    #[tokio::test]
    async fn missing_owner_renders_boundary_message() {
        let state = test_state();

        let (status, headers, body) = send(&state, get("/users/ghost/notes")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(headers[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html"));
        assert!(body.contains("No user with the username &quot;ghost&quot; exists"));
        assert!(!body.contains("404 Owner not found"));
    }

    #[tokio::test]
    async fn notes_route_serves_json_loader_data() {
        let state = test_state();
        let (alice, note_id) = seed_alice(&state).await;
        let request = Request::builder()
            .uri("/users/alice/notes")
            .header(header::ACCEPT, "application/json")
            .body(Body::empty())
            .unwrap();

        let (status, _, body) = send(&state, request).await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["owner"]["id"], alice.id.as_str());
        assert_eq!(json["owner"]["username"], "alice");
        assert_eq!(json["owner"]["name"], serde_json::Value::Null);
        assert_eq!(json["owner"]["image"], serde_json::Value::Null);
        assert_eq!(
            json["owner"]["notes"],
            serde_json::json!([{ "id": note_id.as_str(), "title": "Groceries" }])
        );
    }

    #[tokio::test]
    async fn missing_owner_json_error() {
        let state = test_state();
        let request = Request::builder()
            .uri("/users/ghost/notes")
            .header(header::ACCEPT, "application/json")
            .body(Body::empty())
            .unwrap();

        let (status, _, body) = send(&state, request).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(
            json["error"],
            owner_not_found_message("ghost").as_str()
        );
    }

    #[tokio::test]
    async fn note_detail_shows_content() {
        let state = test_state();
        let (_, note_id) = seed_alice(&state).await;

        let (status, _, body) =
            send(&state, get(&format!("/users/alice/notes/{note_id}"))).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Milk"));
        assert!(body.contains("sidebar-nav-item--active"));
    }

    #[tokio::test]
    async fn unknown_note_is_not_found() {
        let state = test_state();
        seed_alice(&state).await;

        let (status, _, body) = send(&state, get("/users/alice/notes/missing")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("No note with the id"));
    }

    #[tokio::test]
    async fn new_note_form_requires_owner() {
        let state = test_state();
        let (alice, _) = seed_alice(&state).await;

        let (status, _, _) = send(&state, get("/users/alice/notes/new")).await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, _, body) = send(&state, get_as("/users/alice/notes/new", &alice)).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("name=\"title\""));
        assert!(body.contains("name=\"content\""));
    }

    #[tokio::test]
    async fn create_note_rejects_invalid_draft() {
        let state = test_state();
        let (alice, _) = seed_alice(&state).await;

        let (status, _, body) = send(
            &state,
            post_form("/users/alice/notes/new", "title=&content=Eggs", Some(&alice)),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("Title is required"));
        assert!(body.contains("aria-invalid=\"true\""));
        assert!(body.contains("Eggs"));
    }

    #[tokio::test]
    async fn create_note_redirects_to_new_note() {
        let state = test_state();
        let (alice, _) = seed_alice(&state).await;

        let (status, headers, _) = send(
            &state,
            post_form("/users/alice/notes/new", "title=Chores&content=Dishes", Some(&alice)),
        )
        .await;
        assert_eq!(status, StatusCode::SEE_OTHER);
        let location = headers[header::LOCATION].to_str().unwrap().to_string();
        assert!(location.starts_with("/users/alice/notes/"));

        let owner = state.db.find_owner_with_notes("alice").await.unwrap().unwrap();
        assert_eq!(owner.notes.len(), 2);
        assert!(owner.notes.iter().any(|note| note.title == "Chores"));
    }

    #[tokio::test]
    async fn create_note_forbidden_for_other_viewers() {
        let state = test_state();
        seed_alice(&state).await;

        let (status, _, _) = send(
            &state,
            post_form("/users/alice/notes/new", "title=Chores&content=Dishes", None),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn profile_and_missing_profile() {
        let state = test_state();
        seed_alice(&state).await;

        let (status, _, body) = send(&state, get("/users/alice")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("href=\"/users/alice/notes\""));

        let (status, _, body) = send(&state, get("/users/ghost")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("No user with the username"));
    }

    #[tokio::test]
    async fn search_respects_configured_limit() {
        let state = test_state();
        for username in ["anna", "annie", "anton"] {
            state.db.create_user(username, None).await.unwrap();
        }

        let (status, _, body) = send(&state, get("/users?search=an")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("href=\"/users/anna\""));
        assert!(body.contains("href=\"/users/annie\""));
        assert!(!body.contains("href=\"/users/anton\""));
    }

    #[tokio::test]
    async fn theme_post_sets_cookie_and_redirects() {
        let state = test_state();

        let (status, headers, _) = send(
            &state,
            post_form("/theme", "theme=dark&redirect_to=%2Fusers", None),
        )
        .await;
        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(headers[header::LOCATION], "/users");
        let cookie = headers[header::SET_COOKIE].to_str().unwrap();
        assert!(cookie.starts_with("theme=dark"));
    }

    #[tokio::test]
    async fn theme_cookie_sets_document_theme() {
        let state = test_state();
        let request = Request::builder()
            .uri("/")
            .header(header::COOKIE, "theme=dark")
            .body(Body::empty())
            .unwrap();

        let (_, _, body) = send(&state, request).await;
        assert!(body.contains("data-theme=\"dark\""));
    }

    #[tokio::test]
    async fn invalid_theme_is_bad_request() {
        let state = test_state();
        let (status, _, _) = send(&state, post_form("/theme", "theme=sepia", None)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn theme_switch_returns_to_search_with_query() {
        let state = test_state();

        let (_, _, body) = send(&state, get("/users?search=an")).await;
        assert!(body.contains("name=\"redirect_to\" value=\"/users?search=an\""));

        let (status, headers, _) = send(
            &state,
            post_form("/theme", "theme=dark&redirect_to=%2Fusers%3Fsearch%3Dan", None),
        )
        .await;
        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(headers[header::LOCATION], "/users?search=an");
    }

    #[tokio::test]
    async fn default_avatar_is_served() {
        let state = test_state();
        let (status, headers, body) = send(&state, get("/img/user.svg")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers[header::CONTENT_TYPE], "image/svg+xml");
        assert!(body.starts_with("<svg"));
    }

    fn put_image(uri: &str, content_type: &str, bytes: &[u8], user: Option<&User>) -> Request<Body> {
        let mut builder = Request::builder()
            .method("PUT")
            .uri(uri)
            .header(header::CONTENT_TYPE, content_type);
        if let Some(user) = user {
            builder = builder.header(IDENTITY_HEADER, user.id.as_str());
        }
        builder.body(Body::from(bytes.to_vec())).unwrap()
    }

    #[tokio::test]
    async fn uploaded_image_is_served_and_shown() {
        let state = test_state();
        let (alice, _) = seed_alice(&state).await;

        let (status, _, body) = send(
            &state,
            put_image("/users/alice/image", "image/png", b"png-bytes", Some(&alice)),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        let image_id = json["id"].as_str().unwrap().to_string();

        let (status, headers, body) =
            send(&state, get(&format!("/resources/user-images/{image_id}"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers[header::CONTENT_TYPE], "image/png");
        assert_eq!(body, "png-bytes");

        let (_, _, body) = send(&state, get("/users/alice")).await;
        assert!(body.contains(&format!("src=\"/resources/user-images/{image_id}\"")));
    }

    #[tokio::test]
    async fn image_upload_requires_owner_and_image_type() {
        let state = test_state();
        let (alice, _) = seed_alice(&state).await;
        let bob = state.db.create_user("bob", None).await.unwrap();

        let (status, _, _) =
            send(&state, put_image("/users/alice/image", "image/png", b"png", None)).await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, _, _) =
            send(&state, put_image("/users/alice/image", "image/png", b"png", Some(&bob))).await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, _, _) = send(
            &state,
            put_image("/users/alice/image", "text/plain", b"hello", Some(&alice)),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _, _) = send(&state, get("/resources/user-images/missing")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn error_pages_keep_signed_in_viewer() {
        let state = test_state();
        let (alice, _) = seed_alice(&state).await;

        let (status, _, body) = send(&state, get_as("/nowhere", &alice)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains(LOGOUT_FORM_MARKER));
    }

    #[tokio::test]
    async fn viewer_lookup_failure_renders_error_page() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("scribble.db");
        let config = AppConfig::from_lookup(|name| match name {
            "SCRIBBLE_IDENTITY_HEADER" => Some(IDENTITY_HEADER.to_string()),
            _ => None,
        })
        .unwrap();
        let state = AppState::new(Arc::new(config), DatabaseService::open_path(&path).unwrap());
        let alice = state.db.create_user("alice", None).await.unwrap();

        let conn = rusqlite::Connection::open(&path).unwrap();
        conn.execute_batch("DROP TABLE user_images;").unwrap();

        let (status, headers, body) = send(&state, get_as("/", &alice)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(headers[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html"));
        assert!(body.contains("500 Internal server error"));
        assert!(body.contains("Log In"));
    }

    #[tokio::test]
    async fn unknown_path_is_not_found_page() {
        let state = test_state();
        let (status, _, body) = send(&state, get("/nowhere")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("404 Not found"));
    }
}
