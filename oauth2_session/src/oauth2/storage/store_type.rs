use crate::oauth2::{errors::OAuth2Error, types::OAuth2Account};
use crate::storage::DATA_STORE;

use super::sqlite::*;

pub(crate) struct OAuth2Store;

impl OAuth2Store {
    /// Initialize the OAuth2 account table
    pub(crate) async fn init() -> Result<(), OAuth2Error> {
        create_tables_sqlite(DATA_STORE.pool()).await
    }

    /// Look up a linked account by its provider identity
    #[tracing::instrument(fields(provider = %provider, provider_account_id = %provider_account_id))]
    pub(crate) async fn get_account_by_provider(
        provider: &str,
        provider_account_id: &str,
    ) -> Result<Option<OAuth2Account>, OAuth2Error> {
        get_account_by_provider_sqlite(DATA_STORE.pool(), provider, provider_account_id).await
    }
}
