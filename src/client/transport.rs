use crate::error::{Result, YtrelloError};
use reqwest::blocking::Client;
use std::sync::Once;
use std::time::Duration;
use url::Url;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

static CRYPTO_PROVIDER: Once = Once::new();

/// Build the blocking HTTP client shared by both service clients.
pub(crate) fn http_client() -> Result<Client> {
    CRYPTO_PROVIDER.call_once(|| {
        // Fails only if another provider is already installed, which is fine.
        let _ = rustls::crypto::ring::default_provider().install_default();
    });

    let client = Client::builder()
        .user_agent(concat!("ytrello/", env!("CARGO_PKG_VERSION")))
        .timeout(REQUEST_TIMEOUT)
        .build()?;
    Ok(client)
}

/// Append path segments to a base URL, keeping any path the base already has.
pub(crate) fn join_path(base: &Url, segments: &[&str]) -> Result<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| YtrelloError::Config(format!("Not a base URL: {}", base)))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}
