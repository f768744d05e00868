//! gxlu HTTP client.

use crate::error::ProbeError;
use crate::types::{email_for, CheckResult};
use reqwest::header::SET_COOKIE;
use reqwest::redirect::Policy;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Cookie-setting endpoint used as the registration side channel.
pub const DEFAULT_ENDPOINT: &str = "https://mail.google.com/mail/gxlu";

/// Default timeout for the outbound probe.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the gxlu registration probe.
///
/// The provider sets a cookie on this endpoint only for addresses it knows
/// about. The endpoint is undocumented, so the verdict is best-effort and
/// says nothing about other providers.
#[derive(Clone)]
pub struct GxluClient {
    client: Client,
    endpoint: String,
}

impl GxluClient {
    /// Create a client against the provider endpoint.
    pub fn new(timeout: Duration) -> Result<Self, ProbeError> {
        Self::with_endpoint(DEFAULT_ENDPOINT, timeout)
    }

    /// Create a client against an arbitrary endpoint URL.
    pub fn with_endpoint(
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ProbeError> {
        // The first response carries the signal; a redirect would replace its headers.
        let client = Client::builder()
            .timeout(timeout)
            .redirect(Policy::none())
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Get the configured endpoint.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Report whether `local_part@gmail.com` is already registered.
    ///
    /// Issues exactly one GET and inspects only the response headers.
    /// Any status code counts; only the presence of `Set-Cookie` matters.
    #[instrument(skip(self))]
    pub async fn check_availability(&self, local_part: &str) -> Result<CheckResult, ProbeError> {
        if local_part.is_empty() {
            return Err(ProbeError::EmptyLocalPart);
        }

        let email = email_for(local_part);
        debug!(email = %email, endpoint = %self.endpoint, "Sending gxlu probe");

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("email", email.as_str())])
            .send()
            .await?;

        let is_registered = response.headers().contains_key(SET_COOKIE);
        debug!(status = %response.status(), is_registered, "gxlu probe answered");
        drop(response);

        info!(email = %email, is_registered, "Registration probe complete");
        Ok(CheckResult::new(email, is_registered))
    }
}
