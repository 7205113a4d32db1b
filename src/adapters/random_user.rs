use crate::domain::model::{Gender, Profile};
use crate::domain::ports::{ConfigProvider, ProfileSource};
use crate::utils::error::{GameError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

/// HTTP source for a randomuser.me-compatible endpoint.
pub struct RandomUserClient {
    client: Client,
    endpoint: String,
}

impl RandomUserClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self {
            client,
            endpoint: config.api_endpoint().to_string(),
        })
    }
}

#[async_trait]
impl ProfileSource for RandomUserClient {
    async fn fetch(&self, gender: Gender) -> Result<Profile> {
        // 跟原始服務相同的查詢參數
        let mut query: Vec<(&str, &str)> =
            vec![("results", "1"), ("inc", "name,gender,dob,picture")];
        if let Some(param) = gender.api_param() {
            query.push(("gender", param));
        }

        tracing::debug!(endpoint = %self.endpoint, gender = %gender, "requesting profile");
        let response = self
            .client
            .get(&self.endpoint)
            .query(&query)
            .send()
            .await?;
        tracing::debug!("API response status: {}", response.status());

        let payload: ApiResponse = response.error_for_status()?.json().await?;
        payload.into_profile()
    }
}

// Wire format of the remote service. Every field is optional; what the
// game cannot do without is checked in `into_profile`.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    results: Vec<ApiPerson>,
}

#[derive(Debug, Deserialize)]
struct ApiPerson {
    name: Option<ApiName>,
    dob: Option<ApiDob>,
    picture: Option<ApiPicture>,
}

#[derive(Debug, Deserialize)]
struct ApiName {
    title: Option<String>,
    first: Option<String>,
    last: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiDob {
    age: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct ApiPicture {
    large: Option<String>,
}

impl ApiResponse {
    fn into_profile(mut self) -> Result<Profile> {
        if self.results.is_empty() {
            return Err(GameError::ProfileDataError {
                message: "response contained no records".to_string(),
            });
        }
        let person = self.results.remove(0);

        // 沒有年齡就無法計分，名字和照片缺了可以湊合
        let age = person.dob.and_then(|dob| dob.age).ok_or_else(|| {
            GameError::ProfileDataError {
                message: "record has no age to guess".to_string(),
            }
        })?;
        let name = person.name.and_then(ApiName::join);
        let image_url = person.picture.and_then(|picture| picture.large);

        Ok(Profile {
            name,
            age,
            image_url,
        })
    }
}

impl ApiName {
    fn join(self) -> Option<String> {
        let parts: Vec<String> = [self.title, self.first, self.last]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_fetch_full_record() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/")
                .query_param("results", "1")
                .query_param("inc", "name,gender,dob,picture");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "results": [{
                        "gender": "female",
                        "name": {"title": "Ms", "first": "Jane", "last": "Doe"},
                        "dob": {"date": "1991-03-02T00:00:00.000Z", "age": 34},
                        "picture": {"large": "https://example.com/jane.jpg"}
                    }]
                }));
        });

        let client = RandomUserClient::new(server.url("/api/"));
        let profile = client.fetch(Gender::Any).await.unwrap();

        api_mock.assert();
        assert_eq!(profile.age, 34);
        assert_eq!(profile.name.as_deref(), Some("Ms Jane Doe"));
        assert_eq!(profile.image_url.as_deref(), Some("https://example.com/jane.jpg"));
    }

    #[tokio::test]
    async fn test_fetch_passes_gender_filter() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/api/").query_param("gender", "female");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "results": [{"dob": {"age": 28}}]
                }));
        });

        let client = RandomUserClient::new(server.url("/api/"));
        let profile = client.fetch(Gender::Female).await.unwrap();

        api_mock.assert();
        assert_eq!(profile.age, 28);
    }

    #[tokio::test]
    async fn test_missing_name_and_picture_degrade_to_none() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "results": [{"dob": {"age": 52}}]
                }));
        });

        let client = RandomUserClient::new(server.url("/api/"));
        let profile = client.fetch(Gender::Any).await.unwrap();

        assert_eq!(profile.age, 52);
        assert_eq!(profile.name, None);
        assert_eq!(profile.image_url, None);
    }

    #[tokio::test]
    async fn test_partial_name_is_joined_from_present_parts() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "results": [{
                        "name": {"first": "Jane"},
                        "dob": {"age": 34}
                    }]
                }));
        });

        let client = RandomUserClient::new(server.url("/api/"));
        let profile = client.fetch(Gender::Any).await.unwrap();
        assert_eq!(profile.name.as_deref(), Some("Jane"));
    }

    #[tokio::test]
    async fn test_missing_age_is_a_profile_data_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "results": [{"name": {"first": "Jane"}}]
                }));
        });

        let client = RandomUserClient::new(server.url("/api/"));
        let err = client.fetch(Gender::Any).await.unwrap_err();
        assert!(matches!(err, GameError::ProfileDataError { .. }));
    }

    #[tokio::test]
    async fn test_empty_results_is_a_profile_data_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"results": []}));
        });

        let client = RandomUserClient::new(server.url("/api/"));
        let err = client.fetch(Gender::Any).await.unwrap_err();
        assert!(matches!(err, GameError::ProfileDataError { .. }));
    }

    #[tokio::test]
    async fn test_server_error_maps_to_api_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/");
            then.status(500);
        });

        let client = RandomUserClient::new(server.url("/api/"));
        let err = client.fetch(Gender::Any).await.unwrap_err();
        assert!(matches!(err, GameError::ApiError(_)));
    }
}
