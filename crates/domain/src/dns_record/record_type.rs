use crate::DomainError;
use rustc_hash::FxHashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Type code -> mnemonic, in the order ANY lookups walk it.
pub const RECORD_TYPES: &[(u16, &str)] = &[
    (1, "A"),
    (2, "NS"),
    (3, "MD"),
    (4, "MF"),
    (5, "CNAME"),
    (6, "SOA"),
    (7, "MB"),
    (8, "MG"),
    (9, "MR"),
    (10, "NULL"),
    (11, "WKS"),
    (12, "PTR"),
    (13, "HINFO"),
    (14, "MINFO"),
    (15, "MX"),
    (16, "TXT"),
    (17, "RP"),
    (18, "AFSDB"),
    (19, "X25"),
    (20, "ISDN"),
    (21, "RT"),
    (22, "NSAP"),
    (23, "NSAP-PTR"),
    (24, "SIG"),
    (25, "KEY"),
    (26, "PX"),
    (27, "GPOS"),
    (28, "AAAA"),
    (29, "LOC"),
    (30, "NXT"),
    (31, "EID"),
    (32, "NIMLOC"),
    (33, "SRV"),
    (34, "ATMA"),
    (35, "NAPTR"),
    (36, "KX"),
    (37, "CERT"),
    (38, "A6"),
    (39, "DNAME"),
    (40, "SINK"),
    (41, "OPT"),
    (42, "APL"),
    (43, "DS"),
    (44, "SSHFP"),
    (45, "IPSECKEY"),
    (46, "RRSIG"),
    (47, "NSEC"),
    (48, "DNSKEY"),
    (49, "DHCID"),
    (50, "NSEC3"),
    (51, "NSEC3PARAM"),
    (52, "TLSA"),
    (53, "SMIMEA"),
    (55, "HIP"),
    (56, "NINFO"),
    (57, "RKEY"),
    (58, "TALINK"),
    (59, "CDS"),
    (60, "CDNSKEY"),
    (61, "OPENPGPKEY"),
    (62, "CSYNC"),
    (63, "ZONEMD"),
    (64, "SVCB"),
    (65, "HTTPS"),
    (99, "SPF"),
    (100, "UINFO"),
    (101, "UID"),
    (102, "GID"),
    (103, "UNSPEC"),
    (104, "NID"),
    (105, "L32"),
    (106, "L64"),
    (107, "LP"),
    (108, "EUI48"),
    (109, "EUI64"),
    (249, "TKEY"),
    (250, "TSIG"),
    (251, "IXFR"),
    (252, "AXFR"),
    (253, "MAILB"),
    (254, "MAILA"),
    (255, "ANY"),
    (256, "URI"),
    (257, "CAA"),
    (258, "AVC"),
    (259, "DOA"),
    (260, "AMTRELAY"),
];

pub const RECORD_CLASSES: &[(u16, &str)] = &[
    (1, "IN"),
    (2, "CS"),
    (3, "CH"),
    (4, "HS"),
    (254, "NONE"),
    (255, "ANY"),
];

/// Types offered by the lookup form.
pub const SELECTABLE_RECORD_TYPES: &[&str] = &["A", "AAAA", "MX", "TXT", "NS", "CNAME", "SOA", "ANY"];

static TYPE_BY_CODE: LazyLock<FxHashMap<u16, &'static str>> =
    LazyLock::new(|| RECORD_TYPES.iter().copied().collect());

static CODE_BY_TYPE: LazyLock<FxHashMap<&'static str, u16>> =
    LazyLock::new(|| RECORD_TYPES.iter().map(|&(code, name)| (name, code)).collect());

static CLASS_BY_CODE: LazyLock<FxHashMap<u16, &'static str>> =
    LazyLock::new(|| RECORD_CLASSES.iter().copied().collect());

pub fn type_mnemonic(code: u16) -> String {
    match TYPE_BY_CODE.get(&code) {
        Some(name) => (*name).to_string(),
        None => format!("TYPE{}", code),
    }
}

pub fn class_mnemonic(code: u16) -> String {
    match CLASS_BY_CODE.get(&code) {
        Some(name) => (*name).to_string(),
        None => format!("CLASS{}", code),
    }
}

/// Accepts table mnemonics in any case and the generic `TYPE<N>` form.
pub fn type_code(mnemonic: &str) -> Option<u16> {
    let upper = mnemonic.trim().to_ascii_uppercase();
    if let Some(code) = CODE_BY_TYPE.get(upper.as_str()) {
        return Some(*code);
    }
    upper.strip_prefix("TYPE")?.parse().ok()
}

/// The record type a lookup asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordTypeFilter {
    Any,
    Single { code: u16, mnemonic: String },
}

impl RecordTypeFilter {
    pub fn as_str(&self) -> &str {
        match self {
            RecordTypeFilter::Any => "ANY",
            RecordTypeFilter::Single { mnemonic, .. } => mnemonic,
        }
    }

    pub fn matches(&self, mnemonic: &str) -> bool {
        match self {
            RecordTypeFilter::Any => true,
            RecordTypeFilter::Single { mnemonic: wanted, .. } => wanted == mnemonic,
        }
    }
}

impl fmt::Display for RecordTypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecordTypeFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("ANY") {
            return Ok(RecordTypeFilter::Any);
        }
        let code = type_code(s).ok_or_else(|| DomainError::InvalidRecordType(s.to_string()))?;
        Ok(RecordTypeFilter::Single {
            code,
            mnemonic: type_mnemonic(code),
        })
    }
}
