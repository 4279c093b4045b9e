use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// DNS record type of an RRset.
///
/// Types PowerDNS may return that are not listed here are kept verbatim in
/// [`RecordType::Unknown`], so a zone never fails to decode because of a
/// newer record type.
///
/// Equality and hashing go by the wire token, so `Unknown("A")` equals `A`.
#[derive(Debug, Clone)]
pub enum RecordType {
    A,
    AAAA,
    AFSDB,
    ALIAS,
    APL,
    CAA,
    CDNSKEY,
    CDS,
    CERT,
    CNAME,
    CSYNC,
    DHCID,
    DNAME,
    DNSKEY,
    DS,
    HINFO,
    HTTPS,
    KEY,
    LOC,
    LUA,
    MX,
    NAPTR,
    NS,
    NSEC,
    NSEC3,
    NSEC3PARAM,
    OPENPGPKEY,
    PTR,
    RP,
    RRSIG,
    SMIMEA,
    SOA,
    SPF,
    SRV,
    SSHFP,
    SVCB,
    TLSA,
    TXT,
    URI,
    ZONEMD,
    Unknown(String),
}

impl RecordType {
    pub fn as_str(&self) -> &str {
        match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::AFSDB => "AFSDB",
            RecordType::ALIAS => "ALIAS",
            RecordType::APL => "APL",
            RecordType::CAA => "CAA",
            RecordType::CDNSKEY => "CDNSKEY",
            RecordType::CDS => "CDS",
            RecordType::CERT => "CERT",
            RecordType::CNAME => "CNAME",
            RecordType::CSYNC => "CSYNC",
            RecordType::DHCID => "DHCID",
            RecordType::DNAME => "DNAME",
            RecordType::DNSKEY => "DNSKEY",
            RecordType::DS => "DS",
            RecordType::HINFO => "HINFO",
            RecordType::HTTPS => "HTTPS",
            RecordType::KEY => "KEY",
            RecordType::LOC => "LOC",
            RecordType::LUA => "LUA",
            RecordType::MX => "MX",
            RecordType::NAPTR => "NAPTR",
            RecordType::NS => "NS",
            RecordType::NSEC => "NSEC",
            RecordType::NSEC3 => "NSEC3",
            RecordType::NSEC3PARAM => "NSEC3PARAM",
            RecordType::OPENPGPKEY => "OPENPGPKEY",
            RecordType::PTR => "PTR",
            RecordType::RP => "RP",
            RecordType::RRSIG => "RRSIG",
            RecordType::SMIMEA => "SMIMEA",
            RecordType::SOA => "SOA",
            RecordType::SPF => "SPF",
            RecordType::SRV => "SRV",
            RecordType::SSHFP => "SSHFP",
            RecordType::SVCB => "SVCB",
            RecordType::TLSA => "TLSA",
            RecordType::TXT => "TXT",
            RecordType::URI => "URI",
            RecordType::ZONEMD => "ZONEMD",
            RecordType::Unknown(s) => s.as_str(),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, RecordType::Unknown(_))
    }
}

impl PartialEq for RecordType {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for RecordType {}

impl Hash for RecordType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "A" => RecordType::A,
            "AAAA" => RecordType::AAAA,
            "AFSDB" => RecordType::AFSDB,
            "ALIAS" => RecordType::ALIAS,
            "APL" => RecordType::APL,
            "CAA" => RecordType::CAA,
            "CDNSKEY" => RecordType::CDNSKEY,
            "CDS" => RecordType::CDS,
            "CERT" => RecordType::CERT,
            "CNAME" => RecordType::CNAME,
            "CSYNC" => RecordType::CSYNC,
            "DHCID" => RecordType::DHCID,
            "DNAME" => RecordType::DNAME,
            "DNSKEY" => RecordType::DNSKEY,
            "DS" => RecordType::DS,
            "HINFO" => RecordType::HINFO,
            "HTTPS" => RecordType::HTTPS,
            "KEY" => RecordType::KEY,
            "LOC" => RecordType::LOC,
            "LUA" => RecordType::LUA,
            "MX" => RecordType::MX,
            "NAPTR" => RecordType::NAPTR,
            "NS" => RecordType::NS,
            "NSEC" => RecordType::NSEC,
            "NSEC3" => RecordType::NSEC3,
            "NSEC3PARAM" => RecordType::NSEC3PARAM,
            "OPENPGPKEY" => RecordType::OPENPGPKEY,
            "PTR" => RecordType::PTR,
            "RP" => RecordType::RP,
            "RRSIG" => RecordType::RRSIG,
            "SMIMEA" => RecordType::SMIMEA,
            "SOA" => RecordType::SOA,
            "SPF" => RecordType::SPF,
            "SRV" => RecordType::SRV,
            "SSHFP" => RecordType::SSHFP,
            "SVCB" => RecordType::SVCB,
            "TLSA" => RecordType::TLSA,
            "TXT" => RecordType::TXT,
            "URI" => RecordType::URI,
            "ZONEMD" => RecordType::ZONEMD,
            other => RecordType::Unknown(other.to_string()),
        })
    }
}

impl From<&str> for RecordType {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(t) => t,
            Err(never) => match never {},
        }
    }
}

impl Serialize for RecordType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RecordType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(RecordType::from(s.as_str()))
    }
}
