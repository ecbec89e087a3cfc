use dnsdiff_application::use_cases::BatchRequest;
use dnsdiff_domain::DomainError;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchRequestDto {
    #[serde(default)]
    pub domains: Vec<String>,
    /// Alternative to `domains`: one domain per line.
    #[serde(default)]
    pub text: Option<String>,
    pub record_type: Option<String>,
    pub nameserver1: Option<String>,
    pub nameserver2: Option<String>,
    pub concurrency: Option<usize>,
}

impl BatchRequestDto {
    pub fn into_request(self) -> Result<BatchRequest, DomainError> {
        let mut domains = self.domains;
        if let Some(text) = self.text.as_deref() {
            domains.extend(BatchRequest::parse_domains(text));
        }

        let record_type = self
            .record_type
            .filter(|t| !t.trim().is_empty())
            .ok_or(DomainError::MissingParameters)?;
        let nameserver1 = self
            .nameserver1
            .filter(|ns| !ns.trim().is_empty())
            .ok_or(DomainError::MissingParameters)?;
        let nameserver2 = self
            .nameserver2
            .map(|ns| ns.trim().to_string())
            .filter(|ns| !ns.is_empty());

        Ok(BatchRequest {
            domains,
            record_type,
            nameserver1,
            nameserver2,
            concurrency: self.concurrency,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ExportQuery {
    pub format: Option<String>,
}
