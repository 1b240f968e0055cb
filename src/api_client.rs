use {
    crate::domain::ActivationToken,
    reqwest::{header::CONTENT_TYPE, Client, StatusCode},
    std::time::Duration,
};

/// What the backend said about an activation attempt. Only the status is inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationResult {
    Activated,
    Rejected(StatusCode),
}

/// Client for the backend API the confirmation page talks to.
pub struct ApiClient {
    http_client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: String, timeout: Duration) -> Self {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build the HTTP client");
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// `{base_url}/users/activate/{token}`
    pub fn activation_url(&self, token: &ActivationToken) -> String {
        format!(
            "{}/users/activate/{}",
            self.base_url,
            token.as_path_segment()
        )
    }

    /// Ask the backend to activate the account behind `token`.
    ///
    /// Any non-2xx status is a rejection; failing to get a response at all is an error.
    #[tracing::instrument(name = "Activate user account", skip_all)]
    pub async fn activate_user(
        &self,
        token: &ActivationToken,
    ) -> Result<ActivationResult, reqwest::Error> {
        let response = self
            .http_client
            .put(&self.activation_url(token))
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(ActivationResult::Activated)
        } else {
            Ok(ActivationResult::Rejected(status))
        }
    }
}
