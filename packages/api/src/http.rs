use serde::de::DeserializeOwned;
use store::{ClientConfig, Error, NewUser, Result, User, UserBackend, UserId, UserPatch};

/// UserBackend that talks to the REST endpoint over HTTP.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(client: reqwest::Client, config: &ClientConfig) -> Self {
        Self {
            client,
            base_url: config.base_url().to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/users`
    pub fn users_url(&self) -> String {
        format!("{}/users", self.base_url)
    }

    /// `{base}/users/{id}`
    pub fn user_url(&self, id: &UserId) -> String {
        format!("{}/users/{}", self.base_url, id)
    }
}

impl UserBackend for HttpBackend {
    async fn list_users(&self) -> Result<Vec<User>> {
        let url = self.users_url();
        tracing::debug!("GET {}", url);
        let response = self.client.get(&url).send().await.map_err(transport)?;
        decode(response).await
    }

    async fn create_user(&self, user: &NewUser) -> Result<User> {
        let url = self.users_url();
        tracing::debug!("POST {}", url);
        let response = self
            .client
            .post(&url)
            .json(user)
            .send()
            .await
            .map_err(transport)?;
        decode(response).await
    }

    async fn update_user(&self, id: &UserId, patch: &UserPatch) -> Result<User> {
        let url = self.user_url(id);
        tracing::debug!("PATCH {}", url);
        let response = self
            .client
            .patch(&url)
            .json(patch)
            .send()
            .await
            .map_err(transport)?;
        decode(response).await
    }
}

fn transport(e: reqwest::Error) -> Error {
    Error::Transport(e.to_string())
}

/// Check the status, then parse the body as JSON.
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        return Err(Error::Status {
            status: status.as_u16(),
        });
    }
    response
        .json::<T>()
        .await
        .map_err(|e| Error::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_from_config() {
        let backend = HttpBackend::new(&ClientConfig::new("http://localhost:3000/"));

        assert_eq!(backend.base_url(), "http://localhost:3000");
        assert_eq!(backend.users_url(), "http://localhost:3000/users");
        assert_eq!(
            backend.user_url(&UserId::Number(12)),
            "http://localhost:3000/users/12"
        );
        assert_eq!(
            backend.user_url(&UserId::from("5f3a")),
            "http://localhost:3000/users/5f3a"
        );
    }

    #[test]
    fn test_default_config_uses_default_endpoint() {
        let backend = HttpBackend::new(&ClientConfig::default());
        assert_eq!(
            backend.users_url(),
            format!("{}/users", store::config::DEFAULT_BASE_URL)
        );
    }

    #[test]
    fn test_create_body_shape() {
        let body = serde_json::to_value(NewUser {
            first: "Ada".into(),
            last: "Lovelace".into(),
            email: "ada@example.com".into(),
            role: "student".into(),
            actived: false,
        })
        .unwrap();

        assert_eq!(body["actived"], false);
        assert!(body.get("id").is_none());
    }

    #[tokio::test]
    async fn test_unsupported_scheme_is_transport_error() {
        let backend = HttpBackend::new(&ClientConfig::new("ftp://localhost"));
        let err = backend.list_users().await.unwrap_err();
        assert!(matches!(err, Error::Transport(_)));
    }
}
