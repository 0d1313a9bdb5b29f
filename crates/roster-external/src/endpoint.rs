//! Candidate profile endpoints

use reqwest::Url;

use crate::error::LookupError;

/// One place a profile can be fetched from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileEndpoint {
    /// Profile API queried directly with `?name=<nick>`
    Direct(String),
    /// CORS proxy queried with `?url=<direct url>`; answers with a `contents` envelope
    Proxied { proxy: String, target: String },
}

impl ProfileEndpoint {
    /// Build the attempt order: first API, the proxy wrapping it, then the remaining APIs
    pub fn chain(urls: &[String], proxy_url: Option<&str>) -> Vec<Self> {
        let mut endpoints = Vec::with_capacity(urls.len() + 1);
        let mut rest = urls.iter();

        if let Some(first) = rest.next() {
            endpoints.push(Self::Direct(first.clone()));
            if let Some(proxy) = proxy_url {
                endpoints.push(Self::Proxied {
                    proxy: proxy.to_string(),
                    target: first.clone(),
                });
            }
        }
        endpoints.extend(rest.cloned().map(Self::Direct));
        endpoints
    }

    /// Full request URL for `nick`, with every component percent-encoded
    pub fn url_for(&self, nick: &str) -> Result<Url, LookupError> {
        match self {
            Self::Direct(base) => direct_url(base, nick),
            Self::Proxied { proxy, target } => {
                let inner = direct_url(target, nick)?;
                Url::parse_with_params(proxy, &[("url", inner.as_str())])
                    .map_err(|e| LookupError::BadEndpoint(format!("{proxy}: {e}")))
            }
        }
    }

    /// Whether the response body is wrapped in a proxy envelope
    #[inline]
    pub fn is_proxied(&self) -> bool {
        matches!(self, Self::Proxied { .. })
    }
}

fn direct_url(base: &str, nick: &str) -> Result<Url, LookupError> {
    Url::parse_with_params(base, &[("name", nick)])
        .map_err(|e| LookupError::BadEndpoint(format!("{base}: {e}")))
}
