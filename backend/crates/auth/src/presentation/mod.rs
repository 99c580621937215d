//! Presentation Layer
//!
//! GraphQL schema, DTOs, HTTP handlers and router.

pub mod dto;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod session;

pub use handlers::GraphQLState;
pub use router::{auth_router, auth_router_generic};
pub use schema::{AuthSchema, build_schema};
pub use session::{RequestSession, SessionCommit};
