//! RapidAPI credentials for the job provider

/// API key plus host header expected by RapidAPI-hosted providers
#[derive(Clone)]
pub struct ProviderCredentials {
    api_key: String,
    api_host: String,
}

impl ProviderCredentials {
    /// Create credentials from an API key and the host header value
    pub fn new(api_key: impl Into<String>, api_host: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_host: api_host.into(),
        }
    }

    /// Header name/value pairs to attach to every provider request
    pub fn to_headers(&self) -> [(&'static str, String); 2] {
        [
            ("X-RapidAPI-Key", self.api_key.clone()),
            ("X-RapidAPI-Host", self.api_host.clone()),
        ]
    }
}

impl std::fmt::Debug for ProviderCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderCredentials")
            .field("api_key", &"<redacted>")
            .field("api_host", &self.api_host)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headers() {
        let creds = ProviderCredentials::new("secret-key", "jsearch.p.rapidapi.com");
        let [(key_header, key), (host_header, host)] = creds.to_headers();

        assert_eq!(key_header, "X-RapidAPI-Key");
        assert_eq!(key, "secret-key");
        assert_eq!(host_header, "X-RapidAPI-Host");
        assert_eq!(host, "jsearch.p.rapidapi.com");
    }

    #[test]
    fn test_debug_redacts_key() {
        let creds = ProviderCredentials::new("secret-key", "host");
        let debug = format!("{creds:?}");
        assert!(!debug.contains("secret-key"));
        assert!(debug.contains("<redacted>"));
    }
}
