//! Typed schema and request builder for the PowerDNS HTTP API.
//!
//! The crate only prepares requests and describes payloads; sending them is
//! left to whatever `reqwest::Client` the caller owns.

pub mod config;
pub mod error;
pub mod powerdns;

pub use config::ClientConfig;
pub use error::{PdnsError, Result};
pub use powerdns::client::Client;
pub use powerdns::decode::{decode, decode_str};
pub use powerdns::endpoints;
pub use powerdns::kind::{AuthoritativeZoneKind, RecursiveZoneKind};
pub use powerdns::record_type::RecordType;
pub use powerdns::types::{Comment, Config, RRSet, Record, Server, Zone};
