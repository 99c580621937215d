//! Auth Router

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::service::{AuthService, Authenticator};
use crate::domain::hasher::CredentialHasher;
use crate::domain::repository::UserRepository;
use crate::domain::session::SessionStore;
use crate::error::AuthResult;
use crate::infra::{Argon2Hasher, PgUserRepository, RedisSessionStore};
use crate::presentation::handlers::{self, GraphQLState};
use crate::presentation::schema::build_schema;

/// Create the GraphQL router with PostgreSQL users and Redis sessions
pub fn auth_router(
    repo: PgUserRepository,
    sessions: RedisSessionStore,
    config: AuthConfig,
) -> AuthResult<Router> {
    let hasher = Argon2Hasher::from_config(&config)?;
    Ok(auth_router_generic(repo, hasher, sessions, config))
}

/// Create a generic GraphQL router for any repository, hasher and session
/// store implementation
pub fn auth_router_generic<U, H, S>(repo: U, hasher: H, sessions: S, config: AuthConfig) -> Router
where
    U: UserRepository + Send + Sync + 'static,
    H: CredentialHasher + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    let auth: Arc<dyn Authenticator> = Arc::new(AuthService::new(Arc::new(repo), Arc::new(hasher)));

    let state = GraphQLState {
        schema: build_schema(auth),
        sessions: Arc::new(sessions),
        config: Arc::new(config),
    };

    Router::new()
        .route(
            "/graphql",
            get(handlers::graphiql).post(handlers::graphql_handler::<S>),
        )
        .with_state(state)
}
