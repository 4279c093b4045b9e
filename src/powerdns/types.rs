use std::net::IpAddr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Result;
use crate::powerdns::kind::{AuthoritativeZoneKind, RecursiveZoneKind};
use crate::powerdns::record_type::RecordType;

// PowerDNS sends `null` for some empty lists.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Entry of `GET /api/v1/servers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Server {
    #[serde(rename = "type")]
    pub server_type: String, // "Server"
    pub id: String, // "localhost"
    pub url: String,
    pub daemon_type: String, // "authoritative" or "recursor"
    pub version: String,
    pub config_url: String,
    pub zones_url: String,
}

/// One setting from `GET /api/v1/servers/{id}/config`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(rename = "type")]
    pub config_type: String, // "ConfigSetting"
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    pub id: String,   // "example.com."
    pub name: String, // "example.com."
    #[serde(rename = "type", default)]
    pub zone_type: String, // "Zone"
    #[serde(default)]
    pub url: String,
    /// Kept as the raw wire token; see [`Zone::authoritative_kind`] and
    /// [`Zone::recursive_kind`].
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub serial: u32,
    #[serde(default)]
    pub notified_serial: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub masters: Vec<IpAddr>,
    #[serde(default)]
    pub dnssec: bool,
    /// Not supported by PowerDNS itself.
    #[serde(default)]
    pub nsec3param: bool,
    /// Not supported by PowerDNS itself.
    #[serde(default)]
    pub nsec3narrow: bool,
    #[serde(default)]
    pub presigned: bool,
    #[serde(default)]
    pub soa_edit: String,
    #[serde(default)]
    pub soa_edit_api: String,
    #[serde(default)]
    pub account: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nameservers: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub servers: Vec<String>,
    /// Recursor only.
    #[serde(default)]
    pub recursion_desired: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rrsets: Vec<RRSet>,
}

impl Zone {
    pub fn authoritative_kind(&self) -> Result<AuthoritativeZoneKind> {
        self.kind.parse()
    }

    pub fn recursive_kind(&self) -> Result<RecursiveZoneKind> {
        self.kind.parse()
    }

    /// First RRset with the given owner name and type.
    pub fn find_rrset(&self, name: &str, rtype: &RecordType) -> Option<&RRSet> {
        self.rrsets
            .iter()
            .find(|rr| rr.name == name && &rr.rtype == rtype)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RRSet {
    #[serde(alias = "Name")]
    pub name: String, // "www.example.com."
    #[serde(rename = "type", alias = "Type")]
    pub rtype: RecordType,
    #[serde(alias = "TTL")]
    pub ttl: u32,
    #[serde(default, alias = "Records", deserialize_with = "null_as_default")]
    pub records: Vec<Record>,
    #[serde(default, alias = "Comments", deserialize_with = "null_as_default")]
    pub comments: Vec<Comment>,
}

impl RRSet {
    pub fn enabled_records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter().filter(|r| !r.disabled)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(alias = "Content")]
    pub content: String, // "192.0.2.1" or "ns1.example.net."
    #[serde(default, alias = "Disabled")]
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(alias = "Content")]
    pub content: String,
    #[serde(default, alias = "Account")]
    pub account: String,
    /// Unix timestamp, seconds.
    #[serde(default, alias = "ModifiedAt")]
    pub modified_at: i64,
}

impl Comment {
    pub fn modified_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.modified_at, 0)
    }
}
