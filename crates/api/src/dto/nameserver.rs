use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct NameserversQuery {
    #[serde(default)]
    pub resolve: bool,
}
