/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Endpoint resolution for Alexa for Business.
//!
//! An explicit endpoint URL on the [`Config`] always wins. Otherwise the endpoint is derived from
//! the configured region as `https://a4b.{region}.amazonaws.com`.

use crate::config::Config;
use std::error::Error;
use std::fmt;

/// Prefix of the service's regional hostnames.
const ENDPOINT_PREFIX: &str = "a4b";

/// Failure to determine where a request should be sent.
#[non_exhaustive]
#[derive(Debug)]
pub enum ResolveEndpointError {
    /// Neither a region nor an endpoint URL was configured.
    NoRegion,
    /// The resolved endpoint is not a valid URI.
    InvalidUri {
        /// The rejected endpoint.
        uri: String,
        /// The parse failure.
        source: http::uri::InvalidUri,
    },
}

impl fmt::Display for ResolveEndpointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveEndpointError::NoRegion => write!(
                f,
                "no region was configured; set a region or an endpoint URL on the config"
            ),
            ResolveEndpointError::InvalidUri { uri, .. } => {
                write!(f, "endpoint `{}` is not a valid URI", uri)
            }
        }
    }
}

impl Error for ResolveEndpointError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ResolveEndpointError::NoRegion => None,
            ResolveEndpointError::InvalidUri { source, .. } => Some(source),
        }
    }
}

/// Resolves the endpoint requests built with `config` are sent to.
pub fn resolve_endpoint(config: &Config) -> Result<http::Uri, ResolveEndpointError> {
    let endpoint = match (config.endpoint_url(), config.region()) {
        (Some(url), _) => with_default_scheme(url),
        (None, Some(region)) => format!("https://{}.{}.amazonaws.com", ENDPOINT_PREFIX, region),
        (None, None) => return Err(ResolveEndpointError::NoRegion),
    };
    match endpoint.parse::<http::Uri>() {
        Ok(uri) => {
            tracing::debug!(endpoint = %uri, "resolved endpoint");
            Ok(uri)
        }
        Err(source) => Err(ResolveEndpointError::InvalidUri {
            uri: endpoint,
            source,
        }),
    }
}

/// Endpoint overrides given without a scheme default to HTTPS.
fn with_default_scheme(url: &str) -> String {
    if url.contains("://") {
        url.to_string()
    } else {
        format!("https://{}", url)
    }
}

#[cfg(test)]
mod test {
    use super::{resolve_endpoint, ResolveEndpointError};
    use crate::config::Config;
    use aws_types::region::Region;
    use tracing_test::traced_test;

    #[test]
    fn regional_endpoint() {
        let config = Config::builder().region(Region::new("us-east-1")).build();
        let uri = resolve_endpoint(&config).expect("valid endpoint");
        assert_eq!(uri.scheme_str(), Some("https"));
        assert_eq!(uri.host(), Some("a4b.us-east-1.amazonaws.com"));
        assert_eq!(uri.path(), "/");
    }

    #[test]
    fn override_wins_over_region() {
        let config = Config::builder()
            .region(Region::new("us-east-1"))
            .endpoint_url("http://localhost:8080")
            .build();
        let uri = resolve_endpoint(&config).expect("valid endpoint");
        assert_eq!(uri.scheme_str(), Some("http"));
        assert_eq!(uri.host(), Some("localhost"));
        assert_eq!(uri.port_u16(), Some(8080));
    }

    #[test]
    fn override_without_scheme_uses_https() {
        let config = Config::builder()
            .endpoint_url("a4b.eu-west-1.amazonaws.com")
            .build();
        let uri = resolve_endpoint(&config).expect("valid endpoint");
        assert_eq!(uri.scheme_str(), Some("https"));
        assert_eq!(uri.host(), Some("a4b.eu-west-1.amazonaws.com"));
    }

    #[test]
    fn no_region() {
        let err = resolve_endpoint(&Config::builder().build()).expect_err("no region");
        assert!(matches!(err, ResolveEndpointError::NoRegion));
    }

    #[test]
    fn invalid_override() {
        let config = Config::builder().endpoint_url("https://exa mple.com").build();
        let err = resolve_endpoint(&config).expect_err("invalid uri");
        match err {
            ResolveEndpointError::InvalidUri { uri, .. } => assert_eq!(uri, "https://exa mple.com"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[traced_test]
    #[test]
    fn resolution_is_logged() {
        let config = Config::builder().region(Region::new("us-west-2")).build();
        resolve_endpoint(&config).expect("valid endpoint");
        assert!(logs_contain("resolved endpoint"));
        assert!(logs_contain("a4b.us-west-2.amazonaws.com"));
    }
}
