//! Zone kinds. Authoritative and recursor servers accept different sets, so
//! each role gets its own enum.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PdnsError;

/// Replication role of a zone on an authoritative server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuthoritativeZoneKind {
    Native,
    Master,
    Slave,
}

impl AuthoritativeZoneKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthoritativeZoneKind::Native => "Native",
            AuthoritativeZoneKind::Master => "Master",
            AuthoritativeZoneKind::Slave => "Slave",
        }
    }
}

impl fmt::Display for AuthoritativeZoneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthoritativeZoneKind {
    type Err = PdnsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Native" => Ok(AuthoritativeZoneKind::Native),
            "Master" => Ok(AuthoritativeZoneKind::Master),
            "Slave" => Ok(AuthoritativeZoneKind::Slave),
            _ => Err(PdnsError::InvalidZoneKind {
                kind: s.to_string(),
                role: "authoritative",
            }),
        }
    }
}

/// Kind of a zone configured on a recursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecursiveZoneKind {
    Native,
    Forwarded,
}

impl RecursiveZoneKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecursiveZoneKind::Native => "Native",
            RecursiveZoneKind::Forwarded => "Forwarded",
        }
    }
}

impl fmt::Display for RecursiveZoneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecursiveZoneKind {
    type Err = PdnsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Native" => Ok(RecursiveZoneKind::Native),
            "Forwarded" => Ok(RecursiveZoneKind::Forwarded),
            _ => Err(PdnsError::InvalidZoneKind {
                kind: s.to_string(),
                role: "recursor",
            }),
        }
    }
}
