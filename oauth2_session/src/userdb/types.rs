use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::utils::gen_random_string;

use super::errors::UserError;

/// A local user identity
///
/// Created on first OAuth2 login when no linked account exists; never
/// mutated by the auth core after creation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct User {
    /// Opaque collision-resistant identifier
    pub id: String,
    /// Unique email address, if the provider disclosed one
    pub email: Option<String>,
    /// Unused by the OAuth2-only flow; never serialized
    #[serde(skip_serializing, default)]
    pub hashed_password: Option<String>,
    /// Display name
    pub name: Option<String>,
    /// Whether the provider reported the email as verified
    pub email_verified: bool,
    /// Avatar image URL
    pub image: Option<String>,
}

impl User {
    pub fn new(
        email: Option<String>,
        name: Option<String>,
        image: Option<String>,
        email_verified: bool,
    ) -> Result<Self, UserError> {
        Ok(Self {
            id: gen_random_string(12)?,
            email,
            hashed_password: None,
            name,
            email_verified,
            image,
        })
    }
}
