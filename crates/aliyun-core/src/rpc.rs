//! Generic signed-query RPC client.
//!
//! Every product client owns one [`RpcClient`] and dispatches each operation
//! through [`RpcClient::execute`]: common parameters are added, the query is
//! signed, exactly one HTTP request goes out, and the decoded body comes
//! back. The underlying HTTP client is built lazily, at most once, and a
//! single-flight guard rejects a second call while one is already active.

use crate::client::HttpConfig;
use crate::config::{Credentials, OpenApiConfig, Product};
use crate::sign;
use crate::{Error, Result};
use chrono::Utc;
use reqwest::{Client, ClientBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;
use tracing::{debug, info};
use url::Url;
use uuid::Uuid;

const USER_AGENT: &str = concat!("aliyun-core/", env!("CARGO_PKG_VERSION"));

/// Builder for [`RpcClient`].
#[derive(Debug, Clone)]
pub struct RpcClientBuilder {
    product: Product,
    endpoint: Url,
    credentials: Credentials,
    http_config: HttpConfig,
}

impl RpcClientBuilder {
    /// Create a builder for a product scoped to a region.
    ///
    /// The endpoint is derived as `<product>.<region-id>.aliyuncs.com`.
    ///
    /// # Errors
    ///
    /// Returns an error if the region id fails validation.
    pub fn new(
        product: Product,
        region_id: impl Into<String>,
        credentials: Credentials,
    ) -> Result<Self> {
        let config = OpenApiConfig::new(product, region_id)?;
        let endpoint = product.endpoint(&config.region_id)?;

        Ok(Self {
            product,
            endpoint,
            credentials,
            http_config: HttpConfig::new().with_timeout(config.timeout()),
        })
    }

    /// Override the endpoint URL entirely.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: Url) -> Self {
        self.endpoint = endpoint;
        self
    }

    /// Override the HTTP client configuration.
    #[must_use]
    pub fn with_http_config(mut self, config: HttpConfig) -> Self {
        self.http_config = config;
        self
    }

    /// Build the client instance.
    #[must_use]
    pub fn build(self) -> RpcClient {
        RpcClient {
            product: self.product,
            endpoint: self.endpoint,
            credentials: self.credentials,
            http_config: self.http_config,
            http: OnceLock::new(),
            in_flight: AtomicBool::new(false),
        }
    }
}

/// Signed-query client for one product endpoint.
///
/// Not `Clone`: the single-flight guard is a per-instance invariant.
pub struct RpcClient {
    product: Product,
    endpoint: Url,
    credentials: Credentials,
    http_config: HttpConfig,
    http: OnceLock<Client>,
    in_flight: AtomicBool,
}

impl RpcClient {
    /// The product this client is bound to.
    #[must_use]
    pub fn product(&self) -> Product {
        self.product
    }

    /// The endpoint requests are sent to.
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Dispatch one RPC action and decode the response body.
    ///
    /// # Errors
    ///
    /// Fails locally with [`Error::Busy`] if a call is already in flight on
    /// this client; otherwise the provider's failure propagates unchanged as
    /// [`Error::Api`] (or a transport error).
    pub async fn execute<R>(&self, action: &str, params: Vec<(String, String)>) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let _in_flight = self.begin()?;

        let query = self.signed_query(action, params);
        let http = self.http()?;

        info!(product = %self.product, action, "dispatching RPC");

        let response = http.get(self.endpoint.clone()).query(&query).send().await?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(|err| {
            Error::HttpError(format!("failed to read `{action}` response body: {err}"))
        })?;

        if status.is_success() {
            return serde_json::from_slice(&bytes).map_err(|err| {
                Error::ParseError(format!("`{action}` response body: {err}"))
            });
        }

        debug!(product = %self.product, action, %status, "RPC rejected");
        Err(self.error_from_response(status, &bytes))
    }

    /// Add common parameters and the signature to an action's parameters.
    fn signed_query(&self, action: &str, params: Vec<(String, String)>) -> Vec<(String, String)> {
        let mut pairs = params;
        pairs.push(("Action".to_string(), action.to_string()));
        pairs.push(("Version".to_string(), self.product.version().to_string()));
        pairs.push(("Format".to_string(), "JSON".to_string()));
        pairs.push((
            "AccessKeyId".to_string(),
            self.credentials.access_key_id.clone(),
        ));
        pairs.push(("SignatureMethod".to_string(), "HMAC-SHA1".to_string()));
        pairs.push(("SignatureVersion".to_string(), "1.0".to_string()));
        pairs.push(("SignatureNonce".to_string(), Uuid::new_v4().to_string()));
        pairs.push((
            "Timestamp".to_string(),
            Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
        ));

        let signature = sign::rpc_signature("GET", &pairs, self.credentials.secret());
        pairs.push(("Signature".to_string(), signature));
        pairs
    }

    fn error_from_response(&self, status: StatusCode, bytes: &[u8]) -> Error {
        if let Ok(body) = serde_json::from_slice::<ApiErrorBody>(bytes) {
            if let Some(code) = body.code {
                return Error::Api {
                    code,
                    message: body.message.unwrap_or_default(),
                    request_id: body.request_id.unwrap_or_default(),
                };
            }
        }

        let text = String::from_utf8_lossy(bytes).into_owned();
        if status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error() {
            Error::ServiceUnavailable(format!("{} returned {status}: {text}", self.product))
        } else {
            Error::HttpError(format!("{} returned {status}: {text}", self.product))
        }
    }

    /// Acquire the single-flight guard.
    fn begin(&self) -> Result<InFlight<'_>> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Acquire)
            .is_err()
        {
            return Err(Error::Busy(format!(
                "{} client already has a request in flight",
                self.product
            )));
        }
        Ok(InFlight {
            flag: &self.in_flight,
        })
    }

    /// Return the HTTP client, building it on first use.
    fn http(&self) -> Result<&Client> {
        if let Some(client) = self.http.get() {
            return Ok(client);
        }

        let mut builder = ClientBuilder::new()
            .timeout(self.http_config.timeout)
            .connect_timeout(self.http_config.connect_timeout)
            .user_agent(USER_AGENT)
            .pool_idle_timeout(self.http_config.pool_idle_timeout)
            .pool_max_idle_per_host(self.http_config.pool_max_idle_per_host);

        if !self.http_config.enable_compression {
            builder = builder.no_gzip();
        }

        let client = builder.build().map_err(|err| {
            Error::ConfigError(format!(
                "failed to build {} HTTP client: {err}",
                self.product
            ))
        })?;

        Ok(self.http.get_or_init(|| client))
    }
}

/// RAII guard clearing the in-flight flag, including on error paths.
struct InFlight<'a> {
    flag: &'a AtomicBool,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// Minimal response body carrying only the provider request id.
///
/// Many mutation actions acknowledge with nothing else.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AckResponse {
    /// Provider request id.
    #[serde(rename = "RequestId")]
    pub request_id: String,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    #[serde(rename = "Code")]
    code: Option<String>,
    #[serde(rename = "Message")]
    message: Option<String>,
    #[serde(rename = "RequestId")]
    request_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Arc;
    use std::time::Duration;
    use wiremock::matchers::{method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer, product: Product) -> RpcClient {
        RpcClientBuilder::new(product, "cn-hangzhou", Credentials::new("ak", "sk"))
            .unwrap()
            .with_endpoint(Url::parse(&server.uri()).unwrap())
            .build()
    }

    #[test]
    fn builder_rejects_invalid_region() {
        let result = RpcClientBuilder::new(Product::Ecs, "bad region", Credentials::new("a", "b"));
        assert!(matches!(result, Err(Error::ConfigError(_))));
    }

    #[test]
    fn builder_derives_product_endpoint() {
        let client = RpcClientBuilder::new(Product::Vpc, "ap-south-1", Credentials::new("a", "b"))
            .unwrap()
            .build();
        assert_eq!(
            client.endpoint().as_str(),
            "https://vpc.ap-south-1.aliyuncs.com/"
        );
        assert_eq!(client.product(), Product::Vpc);
    }

    #[tokio::test]
    async fn execute_sends_common_parameters() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("Action", "DescribeInstances"))
            .and(query_param("Version", "2014-05-26"))
            .and(query_param("Format", "JSON"))
            .and(query_param("AccessKeyId", "ak"))
            .and(query_param("SignatureMethod", "HMAC-SHA1"))
            .and(query_param("SignatureVersion", "1.0"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "RequestId": "req-1" })),
            )
            .mount(&server)
            .await;

        let client = client(&server, Product::Ecs);
        let ack: AckResponse = client
            .execute("DescribeInstances", Vec::new())
            .await
            .unwrap();
        assert_eq!(ack.request_id, "req-1");
    }

    #[tokio::test]
    async fn execute_surfaces_api_error_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "Code": "InvalidRegionId.NotFound",
                "Message": "The specified RegionId does not exist.",
                "RequestId": "req-err"
            })))
            .mount(&server)
            .await;

        let client = client(&server, Product::Ecs);
        let err = client
            .execute::<AckResponse>("DescribeInstances", Vec::new())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            Error::Api {
                code: "InvalidRegionId.NotFound".to_string(),
                message: "The specified RegionId does not exist.".to_string(),
                request_id: "req-err".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn execute_maps_unstructured_server_errors() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
            .mount(&server)
            .await;

        let client = client(&server, Product::Slb);
        let err = client
            .execute::<AckResponse>("DescribeLoadBalancers", Vec::new())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::ServiceUnavailable(_)));
    }

    #[tokio::test]
    async fn second_call_while_active_is_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "RequestId": "slow" }))
                    .set_delay(Duration::from_millis(300)),
            )
            .mount(&server)
            .await;

        let client = Arc::new(client(&server, Product::Ecs));
        let background = Arc::clone(&client);
        let first = tokio::spawn(async move {
            background
                .execute::<AckResponse>("DescribeInstances", Vec::new())
                .await
        });

        tokio::time::sleep(Duration::from_millis(100)).await;
        let err = client
            .execute::<AckResponse>("DescribeInstances", Vec::new())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Busy(_)));

        // The active call is unaffected and the guard releases afterwards.
        first.await.unwrap().unwrap();
        let ack: AckResponse = client
            .execute("DescribeInstances", Vec::new())
            .await
            .unwrap();
        assert_eq!(ack.request_id, "slow");
    }

    #[tokio::test]
    async fn guard_releases_after_failed_call() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "Code": "MissingParameter",
                "Message": "RegionId is mandatory.",
                "RequestId": "req-2"
            })))
            .mount(&server)
            .await;

        let client = client(&server, Product::Vpc);
        for _ in 0..2 {
            let err = client
                .execute::<AckResponse>("DescribeVpcs", Vec::new())
                .await
                .unwrap_err();
            // Busy would mean the guard leaked on the previous error.
            assert!(matches!(err, Error::Api { .. }));
        }
    }

    #[test]
    fn signed_query_appends_signature_last() {
        let client = RpcClientBuilder::new(Product::Ecs, "cn-hangzhou", Credentials::new("a", "b"))
            .unwrap()
            .build();
        let pairs = client.signed_query(
            "DescribeImages",
            vec![("RegionId".to_string(), "cn-hangzhou".to_string())],
        );

        let (last_key, last_value) = pairs.last().unwrap();
        assert_eq!(last_key, "Signature");
        assert!(!last_value.is_empty());
        assert!(pairs.iter().any(|(k, v)| k == "SignatureNonce" && !v.is_empty()));
        assert!(pairs
            .iter()
            .any(|(k, v)| k == "Timestamp" && v.ends_with('Z')));
    }
}
