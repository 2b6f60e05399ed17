//! Connection settings for the bark daemon.
//!
//! The only setting is the base address of bark's REST API, e.g.
//! `http://127.0.0.1:3000`. A path prefix is allowed when bark sits behind
//! a reverse proxy (`https://example.com/bark`); routes are resolved
//! relative to it.

use anyhow::{Context, Result, bail};
use reqwest::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base address, always ending with `/`
    pub address: Url,
}

impl Config {
    pub fn new(address: &str) -> Result<Self> {
        let mut url = Url::parse(address.trim())
            .with_context(|| format!("Invalid bark address '{}'", address))?;

        if !matches!(url.scheme(), "http" | "https") {
            bail!(
                "Unsupported scheme '{}' in bark address. Use http or https",
                url.scheme()
            );
        }
        if url.host_str().is_none_or(str::is_empty) {
            bail!("Bark address '{}' has no host", address);
        }

        url.set_query(None);
        url.set_fragment(None);
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        Ok(Self { address: url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_address() {
        let config = Config::new("http://127.0.0.1:3000").unwrap();
        assert_eq!(config.address.as_str(), "http://127.0.0.1:3000/");
    }

    #[test]
    fn test_address_with_prefix() {
        let config = Config::new("https://example.com/bark").unwrap();
        assert_eq!(config.address.as_str(), "https://example.com/bark/");

        let config = Config::new("https://example.com/bark/").unwrap();
        assert_eq!(config.address.as_str(), "https://example.com/bark/");
    }

    #[test]
    fn test_rejects_bad_addresses() {
        assert!(Config::new("not a url").is_err());
        assert!(Config::new("ftp://example.com").is_err());
        assert!(Config::new("").is_err());
    }

    #[test]
    fn test_strips_query() {
        let config = Config::new("http://localhost:3000/?debug=1").unwrap();
        assert_eq!(config.address.as_str(), "http://localhost:3000/");
    }
}
