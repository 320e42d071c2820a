//! Release channel data model
//!
//! Mirrors the JSON document served by the K3s channel server:
//! a collection resource wrapping a list of channel resources.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Resource links as returned by the channel server
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Links {
    /// Canonical URL of the resource
    #[serde(rename = "self", default)]
    pub self_link: String,
}

/// One named release track
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Channel {
    /// Resource type tag (always "channel")
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Unique channel identifier, the lookup key (e.g. "stable")
    pub id: String,
    #[serde(default)]
    pub links: Links,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Version the server currently designates as newest for this track
    #[serde(default)]
    pub latest: String,
    /// Release-matching metadata, carried but never interpreted here
    #[serde(rename = "latestRegexp", skip_serializing_if = "Option::is_none")]
    pub latest_regexp: Option<String>,
    #[serde(rename = "excludeRegexp", skip_serializing_if = "Option::is_none")]
    pub exclude_regexp: Option<String>,
}

/// The full set of channels returned by one fetch
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Collection {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub links: Links,
    /// Action map passed through from the server, uninterpreted
    #[serde(default)]
    pub actions: HashMap<String, serde_json::Value>,
    #[serde(rename = "resourceType", default)]
    pub resource_type: String,
    #[serde(default)]
    pub data: Vec<Channel>,
}

impl Collection {
    /// Find a channel by identifier
    ///
    /// Case-sensitive exact match; identifiers are expected unique, so
    /// the first hit wins.
    pub fn find(&self, id: &str) -> Option<&Channel> {
        self.data.iter().find(|c| c.id == id)
    }

    /// All channel identifiers, in server order
    pub fn channel_ids(&self) -> Vec<&str> {
        self.data.iter().map(|c| c.id.as_str()).collect()
    }

    /// Whether the fetch returned any channels at all
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
