//! PowerDNS HTTP API: request construction and wire types.

pub mod client;
pub mod decode;
pub mod endpoints;
pub mod kind;
pub mod record_type;
pub mod types;
