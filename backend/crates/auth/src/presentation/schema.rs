//! GraphQL Schema
//!
//! `register` and `login` return a [`UserResponse`]; user-correctable
//! problems come back as field errors in the payload, infrastructure
//! failures as GraphQL errors carrying `extensions.code`.

use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, ErrorExtensions, Object, Result, Schema};

use crate::application::service::Authenticator;
use crate::domain::outcome::AuthOutcome;
use crate::presentation::dto::{CredentialsInput, UserObject, UserResponse};
use crate::presentation::session::RequestSession;

pub type AuthSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema around an auth service
pub fn build_schema(auth: Arc<dyn Authenticator>) -> AuthSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(auth)
        .finish()
}

/// Establish the session for a freshly authenticated user
fn remember(ctx: &Context<'_>, outcome: &AuthOutcome) {
    if let (Some(user), Ok(session)) = (outcome.user(), ctx.data::<Arc<RequestSession>>()) {
        session.set_user_id(user.user_id);
    }
}

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// The user behind the current session, if any
    async fn me(&self, ctx: &Context<'_>) -> Result<Option<UserObject>> {
        let Some(user_id) = ctx
            .data_opt::<Arc<RequestSession>>()
            .and_then(|session| session.user_id())
        else {
            return Ok(None);
        };

        let auth = ctx.data::<Arc<dyn Authenticator>>()?;
        let user = auth.current_user(user_id).await.map_err(|e| e.extend())?;

        Ok(user.as_ref().map(UserObject::from))
    }
}

#[derive(Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create an account and log it in
    async fn register(&self, ctx: &Context<'_>, inputs: CredentialsInput) -> Result<UserResponse> {
        let auth = ctx.data::<Arc<dyn Authenticator>>()?;
        let outcome = auth.register(inputs.into()).await.map_err(|e| e.extend())?;

        remember(ctx, &outcome);
        Ok(outcome.into())
    }

    /// Check credentials and log the user in
    async fn login(&self, ctx: &Context<'_>, inputs: CredentialsInput) -> Result<UserResponse> {
        let auth = ctx.data::<Arc<dyn Authenticator>>()?;
        let outcome = auth.login(inputs.into()).await.map_err(|e| e.extend())?;

        remember(ctx, &outcome);
        Ok(outcome.into())
    }

    /// End the current session. Always succeeds.
    async fn logout(&self, ctx: &Context<'_>) -> bool {
        if let Some(session) = ctx.data_opt::<Arc<RequestSession>>() {
            session.destroy();
        }
        true
    }
}
