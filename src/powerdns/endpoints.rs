//! Paths of the read endpoints the schema types describe, ready to hand to
//! [`Client::prepare_request`](crate::Client::prepare_request).

pub const API_PREFIX: &str = "/api/v1";

/// `GET` returns a list of [`Server`](crate::Server).
pub fn servers() -> String {
    format!("{API_PREFIX}/servers")
}

pub fn server(server_id: &str) -> String {
    format!("{API_PREFIX}/servers/{server_id}")
}

/// `GET` returns a list of [`Config`](crate::Config).
pub fn server_config(server_id: &str) -> String {
    format!("{API_PREFIX}/servers/{server_id}/config")
}

/// `GET` returns a list of [`Zone`](crate::Zone) without RRsets.
pub fn zones(server_id: &str) -> String {
    format!("{API_PREFIX}/servers/{server_id}/zones")
}

pub fn zone(server_id: &str, zone_id: &str) -> String {
    format!("{API_PREFIX}/servers/{server_id}/zones/{zone_id}")
}
