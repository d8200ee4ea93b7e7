use crate::oauth2::types::OAuth2Account;
use crate::storage::DATA_STORE;
use crate::userdb::{errors::UserError, types::User};

use super::sqlite::*;

pub(crate) struct UserStore;

impl UserStore {
    /// Initialize the user database tables
    pub(crate) async fn init() -> Result<(), UserError> {
        create_tables_sqlite(DATA_STORE.pool()).await
    }

    /// Get a user by their ID
    #[tracing::instrument(fields(user_id = %id))]
    pub(crate) async fn get_user(id: &str) -> Result<Option<User>, UserError> {
        get_user_sqlite(DATA_STORE.pool(), id).await
    }

    /// Insert a new user and its linked OAuth2 account atomically
    #[tracing::instrument(skip(user, account), fields(user_id = %user.id, provider = %account.provider))]
    pub(crate) async fn create_user_with_oauth2_account(
        user: User,
        account: OAuth2Account,
    ) -> Result<User, UserError> {
        let result = create_user_with_account_sqlite(DATA_STORE.pool(), user, account).await;

        match &result {
            Ok(user) => tracing::info!(user_id = %user.id, "Created user with linked account"),
            Err(e) => tracing::error!(error = %e, "User creation failed"),
        }

        result
    }
}
