//! HTTP Handlers

use std::sync::Arc;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::State;
use axum::http::{HeaderMap, header};
use axum::response::{Html, IntoResponse, Response};
use uuid::Uuid;

use crate::application::config::AuthConfig;
use crate::domain::session::{SessionData, SessionStore};
use crate::error::{AuthError, AuthResult};
use crate::presentation::schema::AuthSchema;
use crate::presentation::session::{RequestSession, SessionCommit};

/// Shared state for the GraphQL endpoint
pub struct GraphQLState<S>
where
    S: SessionStore + Send + Sync + 'static,
{
    pub schema: AuthSchema,
    pub sessions: Arc<S>,
    pub config: Arc<AuthConfig>,
}

impl<S> Clone for GraphQLState<S>
where
    S: SessionStore + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            schema: self.schema.clone(),
            sessions: self.sessions.clone(),
            config: self.config.clone(),
        }
    }
}

// ============================================================================
// GraphQL
// ============================================================================

/// POST /graphql
pub async fn graphql_handler<S>(
    State(state): State<GraphQLState<S>>,
    headers: HeaderMap,
    req: GraphQLRequest,
) -> AuthResult<Response>
where
    S: SessionStore + Send + Sync + 'static,
{
    let session = Arc::new(load_session(&state, &headers).await?);

    let response = state
        .schema
        .execute(req.into_inner().data(session.clone()))
        .await;

    // The operation has already run; a store failure only costs the cookie
    let set_cookie = commit_session(&state, &session).await;

    let mut response = GraphQLResponse::from(response).into_response();
    if let Some(value) = set_cookie.as_deref().and_then(platform::cookie::to_header_value) {
        response.headers_mut().append(header::SET_COOKIE, value);
    }

    Ok(response)
}

/// GET /graphql
pub async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

// ============================================================================
// Session plumbing
// ============================================================================

/// Resolve the session cookie. Missing, forged or expired cookies yield an
/// anonymous session. An undecodable stored payload yields an empty session
/// under the same ID, so a later login or logout overwrites it.
async fn load_session<S>(state: &GraphQLState<S>, headers: &HeaderMap) -> AuthResult<RequestSession>
where
    S: SessionStore + Send + Sync + 'static,
{
    let Some(session_id) = session_id_from_cookie(&state.config, headers) else {
        return Ok(RequestSession::anonymous());
    };

    match state.sessions.load(session_id).await {
        Ok(Some(data)) => Ok(RequestSession::new(session_id, data)),
        Ok(None) => {
            tracing::debug!(session_id = %session_id, "Session cookie without stored session");
            Ok(RequestSession::anonymous())
        }
        Err(AuthError::SessionFormat(e)) => {
            tracing::warn!(session_id = %session_id, error = %e, "Discarding corrupt session payload");
            Ok(RequestSession::new(session_id, SessionData::default()))
        }
        Err(e) => Err(e),
    }
}

fn session_id_from_cookie(config: &AuthConfig, headers: &HeaderMap) -> Option<Uuid> {
    let token = platform::cookie::extract_cookie(headers, &config.session_cookie_name)?;
    let payload = platform::crypto::verify_token(&config.session_secret, &token)?;
    Uuid::parse_str(payload).ok()
}

/// Persist session changes, returning the `Set-Cookie` value to send.
///
/// Store failures are logged, never returned. A failed save sends no
/// cookie; a failed destroy still clears the cookie.
async fn commit_session<S>(state: &GraphQLState<S>, session: &RequestSession) -> Option<String>
where
    S: SessionStore + Send + Sync + 'static,
{
    let cookie = state.config.session_cookie();

    match session.commit() {
        SessionCommit::Unchanged => None,
        SessionCommit::Save { session_id, data } => {
            if let Err(e) = state
                .sessions
                .save(session_id, &data, state.config.session_ttl)
                .await
            {
                tracing::error!(session_id = %session_id, error = %e, "Failed to save session");
                return None;
            }

            let token = platform::crypto::sign_token(
                &state.config.session_secret,
                &session_id.to_string(),
            );
            Some(cookie.build_set_cookie(&token))
        }
        SessionCommit::Destroy { session_id } => {
            if let Some(session_id) = session_id {
                match state.sessions.destroy(session_id).await {
                    Ok(()) => tracing::info!(session_id = %session_id, "Session ended"),
                    Err(e) => {
                        tracing::error!(session_id = %session_id, error = %e, "Failed to destroy session")
                    }
                }
            }
            Some(cookie.build_delete_cookie())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_cookie(cookie: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(cookie).unwrap());
        headers
    }

    #[test]
    fn test_session_id_from_signed_cookie() {
        let config = AuthConfig::development();
        let id = Uuid::new_v4();
        let token = platform::crypto::sign_token(&config.session_secret, &id.to_string());

        let headers = headers_with_cookie(&format!("qid={token}"));
        assert_eq!(session_id_from_cookie(&config, &headers), Some(id));
    }

    #[test]
    fn test_forged_cookie_is_ignored() {
        let config = AuthConfig::development();
        let other = AuthConfig::development();
        let id = Uuid::new_v4();
        let token = platform::crypto::sign_token(&other.session_secret, &id.to_string());

        let headers = headers_with_cookie(&format!("qid={token}"));
        assert_eq!(session_id_from_cookie(&config, &headers), None);

        let headers = headers_with_cookie(&format!("qid={id}"));
        assert_eq!(session_id_from_cookie(&config, &headers), None);
    }
}
