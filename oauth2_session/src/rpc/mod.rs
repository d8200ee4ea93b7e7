//! Procedure dispatch
//!
//! Server-callable operations ("procedures") run through one of two callers:
//! `call_public` hands the procedure a context with whatever identity the
//! request resolved to, `call_protected` refuses to invoke at all unless the
//! request carries an authenticated user. Both share the same dispatch core,
//! which applies the development-only artificial delay and funnels every
//! failure into the uniform `ProcedureError` shape.

mod caller;
mod config;
mod errors;

pub use caller::{Auth, Context, ProtectedContext, call_protected, call_public};
pub use errors::{ErrorCode, ProcedureError};
