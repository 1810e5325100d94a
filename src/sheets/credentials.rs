//! Service-account credential provider for the Sheets API.

use anyhow::{Context, Result};
use google_sheets4::hyper_rustls::HttpsConnector;
use google_sheets4::yup_oauth2::authenticator::Authenticator;
use google_sheets4::yup_oauth2::{self, ServiceAccountKey};
use hyper_util::client::legacy::connect::HttpConnector;

use crate::config::AppConfig;

const TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

/// Build an authenticator for the configured service identity.
///
/// Token acquisition itself is lazy; this validates the key material and
/// yields the process-lifetime credential source the sheets client holds.
pub async fn service_account_auth(
    config: &AppConfig,
) -> Result<Authenticator<HttpsConnector<HttpConnector>>> {
    let key = ServiceAccountKey {
        key_type: Some("service_account".to_string()),
        project_id: None,
        private_key_id: None,
        private_key: config.private_key.clone(),
        client_email: config.service_account_email.clone(),
        client_id: None,
        auth_uri: None,
        token_uri: TOKEN_URI.to_string(),
        auth_provider_x509_cert_url: None,
        client_x509_cert_url: None,
    };

    yup_oauth2::ServiceAccountAuthenticator::builder(key)
        .build()
        .await
        .context("Failed to build service-account authenticator")
}
