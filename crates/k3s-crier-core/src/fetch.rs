//! Channel Fetcher
//!
//! One blocking GET against the channel endpoint, decoded into a
//! [`Collection`]. Single best-effort attempt: no retry, no caching.

use reqwest::blocking::Client;

use crate::channel::Collection;
use crate::error::Result;

/// Client for the channel endpoint
///
/// The endpoint URL is injected at construction so lookups can run
/// against any server, not just the public one.
pub struct ChannelClient {
    url: String,
}

impl ChannelClient {
    /// Create a client for the given channel endpoint
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// The endpoint this client queries
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the channel collection
    ///
    /// Transport failures (DNS, connection, non-success status) map to
    /// [`CrierError::Transport`]; a body that is not a valid channel
    /// document maps to [`CrierError::Decode`].
    ///
    /// [`CrierError::Transport`]: crate::error::CrierError::Transport
    /// [`CrierError::Decode`]: crate::error::CrierError::Decode
    pub fn fetch(&self) -> Result<Collection> {
        let body = Client::new()
            .get(&self.url)
            .send()?
            .error_for_status()?
            .text()?;

        let collection: Collection = serde_json::from_str(&body)?;
        Ok(collection)
    }
}

#[cfg(test)]
mod tests {
    use httpmock::Method::GET;
    use httpmock::MockServer;

    use super::*;
    use crate::error::CrierError;

    #[test]
    fn fetch_channel_collection() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/v1-release/channels");
            then.status(200)
                .header("content-type", "application/json")
                .body(
                    r#"{
  "type": "collection",
  "links": { "self": "https://update.k3s.io/v1-release/channels" },
  "actions": {},
  "resourceType": "channel",
  "data": [
    {
      "type": "channel",
      "id": "stable",
      "links": { "self": "https://update.k3s.io/v1-release/channels/stable" },
      "name": "stable",
      "latest": "v1.33.4+k3s1"
    },
    {
      "type": "channel",
      "id": "latest",
      "links": { "self": "https://update.k3s.io/v1-release/channels/latest" },
      "name": "latest",
      "latest": "v1.34.1+k3s1"
    }
  ]
}"#,
                );
        });

        let client = ChannelClient::new(server.url("/v1-release/channels"));
        let collection = client.fetch().expect("expected the fetch to succeed");

        assert_eq!(collection.channel_ids(), vec!["stable", "latest"]);
        assert_eq!(collection.find("stable").unwrap().latest, "v1.33.4+k3s1");
    }

    #[test]
    fn fetch_malformed_body_is_decode_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/v1-release/channels");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"type": "collection", "data": [{"id": "stab"#);
        });

        let client = ChannelClient::new(server.url("/v1-release/channels"));
        let err = client.fetch().unwrap_err();
        assert!(matches!(err, CrierError::Decode(_)), "got {:?}", err);
    }

    #[test]
    fn fetch_error_status_is_transport_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/v1-release/channels");
            then.status(503).body("upstream unavailable");
        });

        let client = ChannelClient::new(server.url("/v1-release/channels"));
        let err = client.fetch().unwrap_err();
        assert!(matches!(err, CrierError::Transport(_)), "got {:?}", err);
    }

    #[test]
    fn fetch_connection_refused_is_transport_error() {
        // grab a free port, then release it so nothing is listening
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = ChannelClient::new(format!("http://{}/v1-release/channels", addr));
        let err = client.fetch().unwrap_err();
        assert!(matches!(err, CrierError::Transport(_)), "got {:?}", err);
    }
}
