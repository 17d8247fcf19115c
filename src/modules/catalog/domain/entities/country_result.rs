use serde::{Deserialize, Serialize};

/// Where a title can be watched in one country
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryResult {
    /// ISO 3166-1 alpha-2 code
    pub country_code: String,
    pub link: Option<String>,
    pub streaming: Vec<WatchProvider>,
    pub rent: Vec<WatchProvider>,
    pub buy: Vec<WatchProvider>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchProvider {
    pub id: u32,
    pub name: String,
    pub logo_path: Option<String>,
    pub display_priority: u32,
}

impl CountryResult {
    pub fn has_any_offer(&self) -> bool {
        !(self.streaming.is_empty() && self.rent.is_empty() && self.buy.is_empty())
    }
}
