use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{Display, EnumString};

/// How the token is presented in the `Authorization` header.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum TokenType {
    /// The token is sent as-is.
    Raw,
    #[default]
    Bearer,
    /// Vendor token format issued by Wolke.
    Wolke,
}

impl TokenType {
    pub fn prefix(self) -> &'static str {
        match self {
            TokenType::Raw => "",
            TokenType::Bearer => "Bearer ",
            TokenType::Wolke => "Wolke ",
        }
    }
}

/// A token plus the scheme used to present it.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    token: String,
    token_type: TokenType,
}

impl Credential {
    pub fn new(token: impl Into<String>, token_type: TokenType) -> Self {
        Self {
            token: token.into(),
            token_type,
        }
    }

    pub fn bearer(token: impl Into<String>) -> Self {
        Self::new(token, TokenType::Bearer)
    }

    pub fn token_type(&self) -> TokenType {
        self.token_type
    }

    /// Value of the `Authorization` header for this credential.
    pub fn header_value(&self) -> String {
        format!("{}{}", self.token_type.prefix(), self.token)
    }

    pub fn redacted(&self) -> String {
        redact(&self.token)
    }
}

// Keep the token out of logs and panics.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("token", &self.redacted())
            .field("token_type", &self.token_type)
            .finish()
    }
}

pub(crate) fn redact(key: &str) -> String {
    let count = key.chars().count();
    if count <= 4 {
        return "****".to_string();
    }
    let suffix: String = key.chars().skip(count - 4).collect();
    format!("****{}", suffix)
}
