//! Vercel HTTP client for API interactions

use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::{Result, VercelError};
use crate::vercel::traits::CursorPage;

/// Vercel API client
pub struct VercelClient {
    client: Client,
    token: String,
    /// API root, e.g. `https://vercel.com/api` (or a mock server in tests)
    api_url: String,
}

impl VercelClient {
    /// Create a new Vercel client with sane connection settings
    pub fn new(token: String, api_url: String) -> Self {
        let client = Client::builder()
            // Connection pool settings - reuse connections
            .pool_max_idle_per_host(20)
            .pool_idle_timeout(Duration::from_secs(90))
            // TCP keepalive to maintain connections
            .tcp_keepalive(Duration::from_secs(60))
            // Timeouts
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            token,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build the base URL for API requests
    pub(crate) fn base_url(&self) -> &str {
        &self.api_url
    }

    /// Add standard headers to a request builder
    fn with_headers(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder.header("Authorization", format!("Bearer {}", self.token))
    }

    /// Create a GET request builder with standard headers
    pub(crate) fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.get(url))
    }

    /// Create a PATCH request builder with standard headers
    pub(crate) fn patch(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.patch(url))
    }

    /// Parse an API response, returning error for non-success status codes
    pub(crate) async fn parse_api_response<T>(
        &self,
        response: reqwest::Response,
        error_context: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        if !response.status().is_success() {
            return Err(VercelError::Api {
                status: response.status().as_u16(),
                message: format!("Failed to fetch {}", error_context),
            });
        }
        Ok(response.json().await?)
    }

    /// Fetch all pages from a cursor-paginated API endpoint
    ///
    /// Walks the `until` cursor iteratively: the first request carries no
    /// cursor, each following request uses `pagination.next` from the page
    /// before it, and a `next` of 0 (or no pagination block) terminates.
    /// Items are returned in page order. Any transport, decode, or API
    /// failure aborts the whole fetch; pages already received are discarded.
    ///
    /// # Arguments
    /// * `path` - API path, optionally with query params (e.g. "/v10/projects?teamId=abc")
    /// * `error_context` - Context for error messages (e.g., "projects for team 'abc'")
    ///
    /// # Type Parameters
    /// * `T` - The item type (e.g., Team, Project, Deployment)
    /// * `R` - The response envelope type that implements CursorPage<T>
    pub async fn fetch_all_pages<T, R>(&self, path: &str, error_context: &str) -> Result<Vec<T>>
    where
        T: Send,
        R: DeserializeOwned + CursorPage<T> + Send,
    {
        let separator = if path.contains('?') { "&" } else { "?" };

        let mut all_items: Vec<T> = Vec::new();
        let mut cursor: Option<i64> = None;
        let mut page_num: u32 = 1;

        loop {
            let url = match cursor {
                Some(until) => format!("{}{}{}until={}", self.base_url(), path, separator, until),
                None => format!("{}{}", self.base_url(), path),
            };

            debug!("Fetching page {} from: {}", page_num, url);

            let response = self.get(&url).send().await?;
            let page: R = self.parse_api_response(response, error_context).await?;

            let next = page.next_cursor();
            let items = page.into_items();
            debug!("Page {} returned {} items", page_num, items.len());
            all_items.extend(items);

            match next {
                Some(until) => {
                    cursor = Some(until);
                    page_num += 1;
                }
                None => break,
            }
        }

        debug!(
            "Fetched {} total items for {}",
            all_items.len(),
            error_context
        );
        Ok(all_items)
    }
}

#[cfg(test)]
impl VercelClient {
    /// Create a test client pointed at a mock server
    pub fn test_client(base_url: &str) -> Self {
        Self::new("test-token".to_string(), base_url.to_string())
    }
}


#[cfg(test)]
mod pagination_tests {
    use super::*;
    use serde::Deserialize;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::vercel::Pagination;

    /// Test item type
    #[derive(Deserialize, Debug, Clone)]
    struct TestItem {
        id: String,
        name: String,
    }

    /// Test envelope type
    #[derive(Deserialize, Debug)]
    struct TestItemsPage {
        items: Vec<TestItem>,
        #[serde(default)]
        pagination: Option<Pagination>,
    }

    impl CursorPage<TestItem> for TestItemsPage {
        fn into_items(self) -> Vec<TestItem> {
            self.items
        }

        fn pagination(&self) -> Option<&Pagination> {
            self.pagination.as_ref()
        }
    }

    fn test_item_json(id: &str, name: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "name": name
        })
    }

    #[tokio::test]
    async fn test_fetch_all_pages_single_page() {
        let mock_server = MockServer::start().await;
        let client = VercelClient::test_client(&mock_server.uri());

        let response_body = serde_json::json!({
            "items": [
                test_item_json("item-1", "Item 1"),
                test_item_json("item-2", "Item 2")
            ],
            "pagination": {
                "count": 2,
                "next": null,
                "prev": null
            }
        });

        Mock::given(method("GET"))
            .and(path("/test-items"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&response_body))
            .mount(&mock_server)
            .await;

        let items = client
            .fetch_all_pages::<TestItem, TestItemsPage>("/test-items", "test items")
            .await
            .unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Item 1");
        assert_eq!(items[1].name, "Item 2");
    }

    #[tokio::test]
    async fn test_fetch_all_pages_follows_cursor() {
        let mock_server = MockServer::start().await;
        let client = VercelClient::test_client(&mock_server.uri());

        // Page 1: no `until` param, points at cursor 2000
        Mock::given(method("GET"))
            .and(path("/test-items"))
            .and(query_param("until", "2000"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "items": [
                    test_item_json("item-3", "Item 3"),
                    test_item_json("item-4", "Item 4")
                ],
                "pagination": { "count": 2, "next": 1000, "prev": 2000 }
            })))
            .mount(&mock_server)
            .await;

        // Page 3: terminal (next == 0)
        Mock::given(method("GET"))
            .and(path("/test-items"))
            .and(query_param("until", "1000"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "items": [
                    test_item_json("item-5", "Item 5"),
                    test_item_json("item-6", "Item 6")
                ],
                "pagination": { "count": 2, "next": 0, "prev": 1000 }
            })))
            .mount(&mock_server)
            .await;

        // First request (no until) - mounted last so the query_param mocks
        // above take precedence for cursor requests
        Mock::given(method("GET"))
            .and(path("/test-items"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "items": [
                    test_item_json("item-1", "Item 1"),
                    test_item_json("item-2", "Item 2")
                ],
                "pagination": { "count": 2, "next": 2000, "prev": 3000 }
            })))
            .mount(&mock_server)
            .await;

        let items = client
            .fetch_all_pages::<TestItem, TestItemsPage>("/test-items", "test items")
            .await
            .unwrap();

        assert_eq!(items.len(), 6);

        // Verify order is maintained across pages
        let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(
            ids,
            ["item-1", "item-2", "item-3", "item-4", "item-5", "item-6"]
        );
    }

    #[tokio::test]
    async fn test_fetch_all_pages_no_pagination_block() {
        let mock_server = MockServer::start().await;
        let client = VercelClient::test_client(&mock_server.uri());

        // Response without a pagination block = single page
        let response_body = serde_json::json!({
            "items": [test_item_json("item-1", "Item 1")]
        });

        Mock::given(method("GET"))
            .and(path("/test-items"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&response_body))
            .expect(1)
            .mount(&mock_server)
            .await;

        let items = client
            .fetch_all_pages::<TestItem, TestItemsPage>("/test-items", "test items")
            .await
            .unwrap();

        assert_eq!(items.len(), 1);
    }

    #[tokio::test]
    async fn test_fetch_all_pages_api_error_on_first_page() {
        let mock_server = MockServer::start().await;
        let client = VercelClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/test-items"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&mock_server)
            .await;

        let result = client
            .fetch_all_pages::<TestItem, TestItemsPage>("/test-items", "test items")
            .await;

        assert!(result.is_err());
        match result.unwrap_err() {
            VercelError::Api { status, .. } => assert_eq!(status, 403),
            _ => panic!("Expected VercelError::Api"),
        }
    }

    #[tokio::test]
    async fn test_fetch_all_pages_api_error_on_subsequent_page() {
        let mock_server = MockServer::start().await;
        let client = VercelClient::test_client(&mock_server.uri());

        // Page 2 fails; page 1 already delivered items, which must be discarded
        Mock::given(method("GET"))
            .and(path("/test-items"))
            .and(query_param("until", "500"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/test-items"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "items": [test_item_json("item-1", "Item 1")],
                "pagination": { "count": 1, "next": 500, "prev": 900 }
            })))
            .mount(&mock_server)
            .await;

        let result = client
            .fetch_all_pages::<TestItem, TestItemsPage>("/test-items", "test items")
            .await;

        assert!(result.is_err());
        match result.unwrap_err() {
            VercelError::Api { status, .. } => assert_eq!(status, 500),
            _ => panic!("Expected VercelError::Api"),
        }
    }

    #[tokio::test]
    async fn test_fetch_all_pages_with_existing_query_params() {
        let mock_server = MockServer::start().await;
        let client = VercelClient::test_client(&mock_server.uri());

        // Path already has query params, cursor must be appended with &
        Mock::given(method("GET"))
            .and(path("/test-items"))
            .and(query_param("state", "DELETED"))
            .and(query_param("until", "42"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "items": [test_item_json("item-2", "Item 2")],
                "pagination": { "count": 1, "next": 0, "prev": 42 }
            })))
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/test-items"))
            .and(query_param("state", "DELETED"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "items": [test_item_json("item-1", "Item 1")],
                "pagination": { "count": 1, "next": 42, "prev": 99 }
            })))
            .mount(&mock_server)
            .await;

        let items = client
            .fetch_all_pages::<TestItem, TestItemsPage>("/test-items?state=DELETED", "test items")
            .await
            .unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, "item-1");
        assert_eq!(items[1].id, "item-2");
    }

    #[tokio::test]
    async fn test_fetch_all_pages_empty_result() {
        let mock_server = MockServer::start().await;
        let client = VercelClient::test_client(&mock_server.uri());

        let response_body = serde_json::json!({
            "items": [],
            "pagination": { "count": 0, "next": null, "prev": null }
        });

        Mock::given(method("GET"))
            .and(path("/test-items"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&response_body))
            .mount(&mock_server)
            .await;

        let items = client
            .fetch_all_pages::<TestItem, TestItemsPage>("/test-items", "test items")
            .await
            .unwrap();

        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_requests_carry_bearer_token() {
        use wiremock::matchers::header;

        let mock_server = MockServer::start().await;
        let client = VercelClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/test-items"))
            .and(header("Authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "items": []
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let result = client
            .fetch_all_pages::<TestItem, TestItemsPage>("/test-items", "test items")
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_fetch_all_pages_decode_error() {
        let mock_server = MockServer::start().await;
        let client = VercelClient::test_client(&mock_server.uri());

        // Items missing required fields fail the envelope decode
        Mock::given(method("GET"))
            .and(path("/test-items"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "items": [{"id": "item-1"}]
            })))
            .mount(&mock_server)
            .await;

        let result = client
            .fetch_all_pages::<TestItem, TestItemsPage>("/test-items", "test items")
            .await;

        assert!(result.is_err());
    }
}
