//! Admin session authentication
//!
//! Stateless signed sessions for the single administrative identity: the
//! token is the only session record, carried in an HTTP-only cookie and
//! re-verified on every request under `/admin`.

pub mod cookie;
pub mod guard;
pub mod session;

pub use cookie::SESSION_COOKIE_NAME;
pub use guard::{GuardDecision, admin_guard, guard_request};
pub use session::{SessionClaims, SessionRejection, issue_token, verify_token};
