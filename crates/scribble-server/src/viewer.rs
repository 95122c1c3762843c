//! Viewer identity and the per-request page context

use std::convert::Infallible;

use axum::extract::{FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::CookieJar;
use scribble_core::models::{User, UserId};
use scribble_ui::RequestContext;

use crate::error::AppError;
use crate::routes::AppState;
use crate::theme::theme_from_jar;

/// The signed-in viewer, or `None` for anonymous requests
#[derive(Debug, Clone, Default)]
pub struct OptionalUser(pub Option<User>);

impl OptionalUser {
    pub fn id(&self) -> Option<&UserId> {
        self.0.as_ref().map(|user| &user.id)
    }
}

impl<S: Send + Sync> FromRequestParts<S> for OptionalUser {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .extensions
            .get::<Self>()
            .cloned()
            .unwrap_or_default())
    }
}

/// Everything a page needs to know about the request it renders for
#[derive(Debug, Clone)]
pub struct PageRequest(pub RequestContext);

impl PageRequest {
    pub fn from_parts(parts: &Parts) -> Self {
        let user = parts
            .extensions
            .get::<OptionalUser>()
            .and_then(|viewer| viewer.0.clone());
        let jar = CookieJar::from_headers(&parts.headers);
        Self(RequestContext {
            user,
            theme: theme_from_jar(&jar),
            path: parts.uri.path().to_string(),
            query: parts.uri.query().map(str::to_string),
        })
    }
}

impl<S: Send + Sync> FromRequestParts<S> for PageRequest {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_parts(parts))
    }
}

fn identity_from_headers(headers: &HeaderMap, state: &AppState) -> Option<UserId> {
    let header = state.config.identity_header.as_ref()?;
    let value = headers.get(header)?.to_str().ok()?.trim();
    if value.is_empty() {
        None
    } else {
        Some(UserId::from(value))
    }
}

/// Look the viewer up from the identity header and attach it to the request.
///
/// An id that matches no user is treated as anonymous. The viewer is also
/// attached to the response so outer layers can render pages for it.
pub async fn resolve_viewer(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = match identity_from_headers(request.headers(), &state) {
        Some(id) => {
            let user = state.db.find_user(&id).await?;
            if user.is_none() {
                tracing::debug!(user_id = %id, "Identity header names an unknown user");
            }
            user
        }
        None => None,
    };
    let viewer = OptionalUser(user);
    request.extensions_mut().insert(viewer.clone());
    let mut response = next.run(request).await;
    response.extensions_mut().insert(viewer);
    Ok(response)
}
