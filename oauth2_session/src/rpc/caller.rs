use std::future::Future;
use std::time::Duration;

use sqlx::SqlitePool;

use crate::config::IS_PRODUCTION;
use crate::session::{AuthState, Session};
use crate::storage::data_store_pool;
use crate::userdb::User;

use super::config::RPC_ARTIFICIAL_DELAY_MS;
use super::errors::ProcedureError;

/// Identity a request resolved to, memoized once per request and handed to
/// every procedure invoked while serving it.
#[derive(Clone, Debug, Default)]
pub struct Auth {
    pub user: Option<User>,
    pub session: Option<Session>,
}

impl Auth {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

impl From<AuthState> for Auth {
    fn from(state: AuthState) -> Self {
        Self {
            user: state.user,
            session: state.session,
        }
    }
}

/// Context handed to public procedures; identity may be absent.
#[derive(Clone, Debug)]
pub struct Context {
    pub auth: Auth,
    pub db: SqlitePool,
}

/// Context handed to protected procedures; identity is guaranteed present.
#[derive(Clone, Debug)]
pub struct ProtectedContext {
    pub user: User,
    pub session: Session,
    pub db: SqlitePool,
}

/// Invoke a procedure that tolerates anonymous callers.
pub async fn call_public<F, Fut, T>(auth: Auth, procedure: F) -> Result<T, ProcedureError>
where
    F: FnOnce(Context) -> Fut,
    Fut: Future<Output = Result<T, ProcedureError>>,
{
    let context = Context {
        auth,
        db: data_store_pool(),
    };
    invoke(context, procedure).await
}

/// Invoke a procedure that requires an authenticated caller.
///
/// The capability check runs before invocation, so a rejected call never
/// touches the database.
pub async fn call_protected<F, Fut, T>(auth: Auth, procedure: F) -> Result<T, ProcedureError>
where
    F: FnOnce(ProtectedContext) -> Fut,
    Fut: Future<Output = Result<T, ProcedureError>>,
{
    let (Some(user), Some(session)) = (auth.user, auth.session) else {
        return Err(ProcedureError::unauthorized());
    };

    let context = ProtectedContext {
        user,
        session,
        db: data_store_pool(),
    };
    invoke(context, procedure).await
}

/// Shared dispatch core for both caller variants.
async fn invoke<C, F, Fut, T>(context: C, procedure: F) -> Result<T, ProcedureError>
where
    F: FnOnce(C) -> Fut,
    Fut: Future<Output = Result<T, ProcedureError>>,
{
    artificial_delay().await;
    procedure(context).await
}

/// Development-only pause to make loading states visible in the UI.
async fn artificial_delay() {
    if *IS_PRODUCTION {
        return;
    }
    let ms = *RPC_ARTIFICIAL_DELAY_MS;
    if ms > 0 {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }
}
