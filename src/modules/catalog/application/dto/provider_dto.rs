use serde::{Deserialize, Serialize};

/// Watch providers of a title in one country.
///
/// TMDB returns a map keyed by country code; the online source flattens it
/// into a list of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryProvidersDto {
    pub country_code: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub flatrate: Option<Vec<ProviderDto>>,
    #[serde(default)]
    pub rent: Option<Vec<ProviderDto>>,
    #[serde(default)]
    pub buy: Option<Vec<ProviderDto>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderDto {
    pub provider_id: u32,
    pub provider_name: String,
    #[serde(default)]
    pub logo_path: Option<String>,
    #[serde(default)]
    pub display_priority: Option<u32>,
}
