use url::Url;

use crate::error::ConfigError;

pub const SHOP_URL_VAR: &str = "SHOP_URL";
pub const ACCESS_TOKEN_VAR: &str = "STOREFRONT_ACCESS_TOKEN";

/// Validated connection parameters for the remote storefront API.
///
/// Built from explicit parameters rather than ambient globals; construction
/// fails fast when either value is absent or the endpoint is not a URL.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    shop_url: String,
    access_token: String,
}

impl StorefrontConfig {
    pub fn new(
        shop_url: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let shop_url = shop_url.into();
        let access_token = access_token.into();

        if shop_url.trim().is_empty() {
            return Err(ConfigError::MissingEndpoint);
        }
        if access_token.trim().is_empty() {
            return Err(ConfigError::MissingAccessToken);
        }
        if let Err(source) = Url::parse(&shop_url) {
            return Err(ConfigError::InvalidEndpoint {
                url: shop_url,
                source,
            });
        }

        Ok(Self {
            shop_url,
            access_token,
        })
    }

    /// Resolve the config from explicit overrides, falling back to the
    /// `SHOP_URL` / `STOREFRONT_ACCESS_TOKEN` environment variables for
    /// whichever piece is missing.
    pub fn resolve(
        shop_url: Option<String>,
        access_token: Option<String>,
    ) -> Result<Self, ConfigError> {
        let shop_url = shop_url
            .or_else(|| std::env::var(SHOP_URL_VAR).ok())
            .unwrap_or_default();
        let access_token = access_token
            .or_else(|| std::env::var(ACCESS_TOKEN_VAR).ok())
            .unwrap_or_default();
        Self::new(shop_url, access_token)
    }

    /// Environment-only variant of [`StorefrontConfig::resolve`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(None, None)
    }

    pub fn shop_url(&self) -> &str {
        &self.shop_url
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }
}
