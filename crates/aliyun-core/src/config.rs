//! Credentials, products, and endpoint construction.
//!
//! Every request is scoped by a region and addressed to a product-specific
//! endpoint of the form `<product>.<region-id>.aliyuncs.com`. Nothing here
//! talks to the network; this module only validates and assembles the values
//! the RPC client needs.

use crate::client::{ECS_DEFAULT_TIMEOUT, SLB_DEFAULT_TIMEOUT, VPC_DEFAULT_TIMEOUT};
use crate::Error;
use secrecy::{ExposeSecret, SecretString};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use url::Url;
use validator::Validate;

/// Domain suffix shared by all management API endpoints.
pub const ENDPOINT_SUFFIX: &str = "aliyuncs.com";

/// Access key pair used to sign requests.
///
/// The secret never appears in `Debug` output.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Access key id, sent with every request.
    pub access_key_id: String,
    /// Access key secret, used only to derive the request signature.
    pub access_key_secret: SecretString,
}

impl Credentials {
    /// Create a new credential pair.
    pub fn new(access_key_id: impl Into<String>, access_key_secret: impl Into<String>) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            access_key_secret: SecretString::from(access_key_secret.into()),
        }
    }

    /// Expose the secret for signing.
    #[must_use]
    pub fn secret(&self) -> &str {
        self.access_key_secret.expose_secret()
    }
}

/// A management API product family.
///
/// Each product has its own endpoint and its own API version string; an
/// unknown product name is rejected before any endpoint is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Product {
    /// Elastic Compute Service
    Ecs,
    /// Virtual Private Cloud
    Vpc,
    /// Server Load Balancer
    Slb,
}

impl Product {
    /// Lowercase service name used in endpoint hostnames.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ecs => "ecs",
            Self::Vpc => "vpc",
            Self::Slb => "slb",
        }
    }

    /// API `Version` common parameter for this product.
    #[must_use]
    pub const fn version(self) -> &'static str {
        match self {
            Self::Ecs => "2014-05-26",
            Self::Vpc => "2016-04-28",
            Self::Slb => "2014-05-15",
        }
    }

    /// Default request timeout for this product's API.
    #[must_use]
    pub const fn default_timeout(self) -> Duration {
        match self {
            Self::Ecs => Duration::from_secs(ECS_DEFAULT_TIMEOUT),
            Self::Vpc => Duration::from_secs(VPC_DEFAULT_TIMEOUT),
            Self::Slb => Duration::from_secs(SLB_DEFAULT_TIMEOUT),
        }
    }

    /// Build the region-scoped endpoint URL for this product.
    ///
    /// # Errors
    ///
    /// Returns an error if the region id is empty or contains characters
    /// outside `[a-z0-9-]`.
    pub fn endpoint(self, region_id: &str) -> Result<Url, Error> {
        validate_region_id(region_id)?;
        let host = [self.name(), region_id, ENDPOINT_SUFFIX].join(".");
        Url::parse(&format!("https://{host}/"))
            .map_err(|err| Error::InvalidEndpoint(format!("`{host}`: {err}")))
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Product {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ecs" => Ok(Self::Ecs),
            "vpc" => Ok(Self::Vpc),
            "slb" => Ok(Self::Slb),
            other => Err(Error::InvalidParameter(format!(
                "unknown product `{other}`, expected one of ecs, vpc, slb"
            ))),
        }
    }
}

/// Region-scoped client configuration.
#[derive(Debug, Clone, Validate)]
pub struct OpenApiConfig {
    /// Region id scoping every request, e.g. `cn-hangzhou`.
    #[validate(length(min = 1, max = 64))]
    pub region_id: String,

    /// Request timeout in seconds.
    #[validate(range(min = 1, max = 300))]
    pub request_timeout_secs: u64,
}

impl OpenApiConfig {
    /// Create a configuration for a region with the product's default timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the region id fails validation.
    pub fn new(product: Product, region_id: impl Into<String>) -> Result<Self, Error> {
        let config = Self {
            region_id: region_id.into(),
            request_timeout_secs: product.default_timeout().as_secs(),
        };
        config.validate()?;
        validate_region_id(&config.region_id)?;
        Ok(config)
    }

    /// Override the request timeout in seconds.
    #[must_use]
    pub const fn with_timeout(mut self, seconds: u64) -> Self {
        self.request_timeout_secs = seconds;
        self
    }

    /// Request timeout as a [`Duration`].
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn validate_region_id(region_id: &str) -> Result<(), Error> {
    if region_id.is_empty() {
        return Err(Error::ConfigError("region id must not be empty".into()));
    }
    if !region_id
        .bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
    {
        return Err(Error::ConfigError(format!(
            "region id `{region_id}` contains characters outside [a-z0-9-]"
        )));
    }
    Ok(())
}
