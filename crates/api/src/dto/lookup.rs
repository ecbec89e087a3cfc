use dnsdiff_domain::DomainError;
use serde::Deserialize;

/// Query string of `GET /api/lookup`. Every field is optional so that a
/// missing one reports as missing rather than as a malformed URL.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupQuery {
    pub domain: Option<String>,
    pub record_type: Option<String>,
    pub nameserver: Option<String>,
}

impl LookupQuery {
    pub fn into_parts(self) -> Result<(String, String, String), DomainError> {
        let present = |value: Option<String>| {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(DomainError::MissingParameters)
        };

        Ok((
            present(self.domain)?,
            present(self.record_type)?,
            present(self.nameserver)?,
        ))
    }
}
