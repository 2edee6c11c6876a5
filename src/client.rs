use crate::Config;

const API_BASE: &str = "https://api.cloudflare.com/client/v4/accounts";

/// A failed API call. `status` is `None` when the request never produced a
/// response (transport error) or the response body could not be parsed.
#[derive(Debug)]
pub struct ApiFailure {
    pub url: String,
    pub status: Option<u16>,
    pub errors: Vec<serde_json::Value>,
}

impl std::fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.status {
            Some(status) => write!(f, "request to {} failed ({})", self.url, status)?,
            None => write!(f, "request to {} failed without a response", self.url)?,
        }
        for error in &self.errors {
            write!(f, ": {}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiFailure {}

#[derive(serde::Deserialize)]
struct ApiSuccessBody<T> {
    result: T,
}

#[derive(Default, serde::Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    errors: Vec<serde_json::Value>,
}

pub struct ApiClient {
    agent: ureq::Agent,
    token: String,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: Config) -> Self {
        Self {
            agent: ureq::agent(),
            token: format!("Bearer {}", config.api_token),
            base_url: format!("{}/{}", API_BASE, config.account_id),
        }
    }

    /// Issues one authenticated call against the account-scoped base url
    /// and returns the `result` field of the response body.
    ///
    /// Failures are logged here but whether one is fatal is the caller's
    /// decision: a failure to list projects should end the run, whereas a
    /// failure to delete a project may happen due to concurrent runs of
    /// this tool and should be tolerated.
    pub fn request<T>(
        &self,
        method: &str,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiFailure>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);

        let mut req = self
            .agent
            .request(method, &url)
            .set("authorization", &self.token);
        for (k, v) in query {
            req = req.query(k, v);
        }

        let resp = match req.call() {
            Ok(resp) => resp,
            Err(ureq::Error::Status(status, resp)) => {
                let reason = resp.status_text().to_string();
                let body: ApiErrorBody = resp.into_json().unwrap_or_default();
                tracing::error!(
                    %url,
                    status,
                    %reason,
                    errors = ?body.errors,
                    "api request failed"
                );
                return Err(ApiFailure {
                    url,
                    status: Some(status),
                    errors: body.errors,
                });
            }
            Err(err) => {
                tracing::error!(%url, %err, "api request failed");
                return Err(ApiFailure {
                    url,
                    status: None,
                    errors: Vec::new(),
                });
            }
        };

        match resp.into_json::<ApiSuccessBody<T>>() {
            Ok(body) => Ok(body.result),
            Err(err) => {
                tracing::error!(%url, %err, "could not parse api response");
                Err(ApiFailure {
                    url,
                    status: None,
                    errors: Vec::new(),
                })
            }
        }
    }
}
