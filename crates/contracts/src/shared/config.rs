use super::errors::ConfigError;

/// Build-time variable holding the table store endpoint
pub const URL_VAR: &str = "SUPABASE_URL";
/// Build-time variable holding the public access key
pub const ANON_KEY_VAR: &str = "SUPABASE_ANON_KEY";

/// Path under the store endpoint that serves table rows
const REST_PREFIX: &str = "/rest/v1";

/// Connection settings for the hosted table store.
///
/// Built once at startup and handed to the data access layer; a missing
/// value is fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    url: String,
    anon_key: String,
}

impl StoreConfig {
    /// Validate raw values.
    ///
    /// Surrounding whitespace is trimmed and a trailing `/` on the URL is
    /// dropped so table paths can be appended directly.
    pub fn new(url: Option<&str>, anon_key: Option<&str>) -> Result<Self, ConfigError> {
        let url = required(url, URL_VAR)?;
        let anon_key = required(anon_key, ANON_KEY_VAR)?;

        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(ConfigError::InvalidUrl {
                url: url.to_string(),
            });
        }

        Ok(Self {
            url: url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
        })
    }

    /// Read the values baked in at compile time.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::new(option_env!("SUPABASE_URL"), option_env!("SUPABASE_ANON_KEY"))
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn anon_key(&self) -> &str {
        &self.anon_key
    }

    /// Endpoint serving rows of `table`
    pub fn table_endpoint(&self, table: &str) -> String {
        format!("{}{}/{}", self.url, REST_PREFIX, table)
    }
}

fn required<'a>(value: Option<&'a str>, var: &'static str) -> Result<&'a str, ConfigError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ConfigError::Missing { var }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config_is_normalized() {
        let config =
            StoreConfig::new(Some(" https://demo.supabase.co/ "), Some("anon-key")).unwrap();
        assert_eq!(config.url(), "https://demo.supabase.co");
        assert_eq!(config.anon_key(), "anon-key");
        assert_eq!(
            config.table_endpoint("aluminum_products"),
            "https://demo.supabase.co/rest/v1/aluminum_products"
        );
    }

    #[test]
    fn test_missing_values_are_fatal() {
        assert_eq!(
            StoreConfig::new(None, Some("key")),
            Err(ConfigError::Missing { var: URL_VAR })
        );
        assert_eq!(
            StoreConfig::new(Some("https://demo.supabase.co"), Some("   ")),
            Err(ConfigError::Missing { var: ANON_KEY_VAR })
        );
    }

    #[test]
    fn test_url_must_be_http() {
        let err = StoreConfig::new(Some("demo.supabase.co"), Some("key")).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidUrl {
                url: "demo.supabase.co".into()
            }
        );
    }
}
