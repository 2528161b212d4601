/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Configuration for Alexa for Business requests.

use crate::idempotency_token::IdempotencyTokenProvider;
use aws_types::app_name::AppName;
use aws_types::region::Region;
use aws_types::SdkConfig;

/// Service config.
///
/// Config can be built from a shared [`SdkConfig`] or configured directly through
/// [`Config::builder`].
#[derive(Debug, Clone)]
pub struct Config {
    region: Option<Region>,
    endpoint_url: Option<String>,
    app_name: Option<AppName>,
    idempotency_token_provider: IdempotencyTokenProvider,
}

impl Config {
    /// Constructs a config builder.
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Creates a config from a shared [`SdkConfig`].
    pub fn new(config: &SdkConfig) -> Self {
        Builder::from(config).build()
    }

    /// The region requests are sent to, unless an endpoint URL overrides it.
    pub fn region(&self) -> Option<&Region> {
        self.region.as_ref()
    }

    /// The endpoint URL overriding the regional endpoint.
    pub fn endpoint_url(&self) -> Option<&str> {
        self.endpoint_url.as_deref()
    }

    /// The application name reported in the user agent.
    pub fn app_name(&self) -> Option<&AppName> {
        self.app_name.as_ref()
    }

    /// The provider used to fill unset idempotency tokens.
    pub fn idempotency_token_provider(&self) -> &IdempotencyTokenProvider {
        &self.idempotency_token_provider
    }
}

/// Builder for creating a `Config`.
#[derive(Default, Debug)]
pub struct Builder {
    region: Option<Region>,
    endpoint_url: Option<String>,
    app_name: Option<AppName>,
    idempotency_token_provider: Option<IdempotencyTokenProvider>,
}

impl Builder {
    /// Constructs a config builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the region requests are sent to.
    pub fn region(mut self, region: impl Into<Option<Region>>) -> Self {
        self.set_region(region.into());
        self
    }

    /// Sets the region requests are sent to.
    pub fn set_region(&mut self, region: Option<Region>) -> &mut Self {
        self.region = region;
        self
    }

    /// Overrides the endpoint requests are sent to.
    ///
    /// A URL without a scheme is treated as `https://`.
    pub fn endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.set_endpoint_url(Some(endpoint_url.into()));
        self
    }

    /// Overrides the endpoint requests are sent to.
    pub fn set_endpoint_url(&mut self, endpoint_url: Option<String>) -> &mut Self {
        self.endpoint_url = endpoint_url;
        self
    }

    /// Sets the application name reported in the user agent.
    pub fn app_name(mut self, app_name: AppName) -> Self {
        self.set_app_name(Some(app_name));
        self
    }

    /// Sets the application name reported in the user agent.
    pub fn set_app_name(&mut self, app_name: Option<AppName>) -> &mut Self {
        self.app_name = app_name;
        self
    }

    /// Sets the idempotency token provider.
    ///
    /// Defaults to a randomly seeded provider. A `&'static str` converts into a provider
    /// returning that fixed token.
    pub fn idempotency_token_provider(
        mut self,
        provider: impl Into<IdempotencyTokenProvider>,
    ) -> Self {
        self.set_idempotency_token_provider(Some(provider.into()));
        self
    }

    /// Sets the idempotency token provider.
    pub fn set_idempotency_token_provider(
        &mut self,
        provider: Option<IdempotencyTokenProvider>,
    ) -> &mut Self {
        self.idempotency_token_provider = provider;
        self
    }

    /// Builds a [`Config`].
    pub fn build(self) -> Config {
        Config {
            region: self.region,
            endpoint_url: self.endpoint_url,
            app_name: self.app_name,
            idempotency_token_provider: self
                .idempotency_token_provider
                .unwrap_or_else(crate::idempotency_token::default_provider),
        }
    }
}

impl From<&SdkConfig> for Builder {
    fn from(input: &SdkConfig) -> Self {
        let mut builder = Builder::default();
        builder
            .set_region(input.region().cloned())
            .set_endpoint_url(input.endpoint_url().map(str::to_string))
            .set_app_name(input.app_name().cloned());
        builder
    }
}

impl From<&SdkConfig> for Config {
    fn from(sdk_config: &SdkConfig) -> Self {
        Builder::from(sdk_config).build()
    }
}

#[cfg(test)]
mod test {
    use super::Config;
    use aws_types::app_name::AppName;
    use aws_types::region::Region;
    use aws_types::SdkConfig;

    #[test]
    fn builder_defaults() {
        let config = Config::builder().build();
        assert_eq!(config.region(), None);
        assert_eq!(config.endpoint_url(), None);
        assert!(config.app_name().is_none());
    }

    #[test]
    fn from_sdk_config() {
        let app_name = AppName::new("room-admin").expect("valid app name");
        let sdk_config = SdkConfig::builder()
            .region(Region::new("eu-west-1"))
            .endpoint_url("http://localhost:4566")
            .app_name(app_name.clone())
            .build();
        let config = Config::new(&sdk_config);
        assert_eq!(config.region(), Some(&Region::new("eu-west-1")));
        assert_eq!(config.endpoint_url(), Some("http://localhost:4566"));
        assert_eq!(config.app_name(), Some(&app_name));
    }

    #[test]
    fn fixed_token_provider() {
        let config = Config::builder()
            .idempotency_token_provider("00000000-0000-4000-8000-000000000000")
            .build();
        assert_eq!(
            config.idempotency_token_provider().make_idempotency_token(),
            "00000000-0000-4000-8000-000000000000"
        );
    }
}
