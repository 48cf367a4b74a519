//! Caller identity and the admin allow-list check.
//!
//! Identity is advisory: an id token is verified against a tokeninfo
//! endpoint when one is configured, otherwise the client-supplied email is
//! taken at face value (static hosting deployments). Authorization
//! is the allow-list lookup in the admins sheet.

use crate::error::ApiError;
use crate::sheets::SheetStore;
use serde::Deserialize;

pub static USER_EMAIL_HEADER: &str = "x-user-email";

pub struct TokenVerifier {
    http: reqwest::Client,
    token_info_url: Option<String>,
}

#[derive(Deserialize)]
struct TokenInfo {
    email: Option<String>,
}

impl TokenVerifier {
    pub fn new(token_info_url: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            token_info_url,
        }
    }

    async fn verify(&self, id_token: &str) -> Option<String> {
        let url = self.token_info_url.as_deref()?;

        let info = self
            .http
            .get(url)
            .query(&[("id_token", id_token)])
            .send()
            .await
            .and_then(reqwest::Response::error_for_status);

        match info {
            Ok(response) => match response.json::<TokenInfo>().await {
                Ok(info) => info.email,
                Err(e) => {
                    tracing::warn!("Tokeninfo returned unparseable body: {}", e);
                    None
                }
            },
            Err(e) => {
                tracing::warn!("Token verification failed: {}", e);
                None
            }
        }
    }

    /// Token-derived email wins over the client-supplied one.
    pub async fn resolve_email(
        &self,
        id_token: Option<&str>,
        client_email: Option<&str>,
    ) -> Option<String> {
        if let Some(token) = id_token {
            if let Some(email) = self.verify(token).await {
                return Some(email.to_lowercase());
            }
        }

        client_email.map(|email| email.trim().to_lowercase())
    }
}

pub async fn require_admin(
    sheets: &SheetStore,
    email: Option<String>,
) -> Result<String, ApiError> {
    let email = email.ok_or_else(|| {
        ApiError::AuthError(anyhow::anyhow!("no caller identity on the request"))
    })?;

    if sheets.is_admin(&email).await {
        Ok(email)
    } else {
        Err(ApiError::AuthError(anyhow::anyhow!(
            "{} is not in the admins sheet",
            email
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claim::{assert_err, assert_ok};

    #[tokio::test]
    async fn client_email_is_normalized_without_a_verifier() {
        let verifier = TokenVerifier::new(None);
        let email = verifier
            .resolve_email(None, Some(" Organizer@Example.COM "))
            .await;
        assert_eq!(email.as_deref(), Some("organizer@example.com"));
    }

    #[tokio::test]
    async fn token_without_verifier_falls_back_to_client_email() {
        let verifier = TokenVerifier::new(None);
        let email = verifier
            .resolve_email(Some("opaque-token"), Some("fallback@example.com"))
            .await;
        assert_eq!(email.as_deref(), Some("fallback@example.com"));
    }

    #[tokio::test]
    async fn admin_gate() {
        let sheets = SheetStore::init(None, "admin@example.com");

        assert_ok!(require_admin(&sheets, Some("admin@example.com".into())).await);
        assert_err!(require_admin(&sheets, Some("guest@example.com".into())).await);
        assert_err!(require_admin(&sheets, None).await);
    }
}
