use serde::{Deserialize, Serialize};

use crate::modules::catalog::domain::value_objects::TitleId;

/// Playable trailer reference for a movie or series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trailer {
    /// Title the trailer belongs to
    pub id: TitleId,
    /// Video key on the hosting site; `None` when the title has no videos
    pub key: Option<String>,
    pub name: Option<String>,
    pub site: Option<String>,
}

impl Trailer {
    pub fn is_playable(&self) -> bool {
        self.key.is_some()
    }

    pub fn youtube_url(&self) -> Option<String> {
        match (self.site.as_deref(), self.key.as_deref()) {
            (Some("YouTube"), Some(key)) => Some(format!("https://www.youtube.com/watch?v={}", key)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_youtube_url_only_for_youtube() {
        let mut trailer = Trailer {
            id: TitleId::new(550).unwrap(),
            key: Some("SUXWAEX2jlg".to_string()),
            name: Some("Official Trailer".to_string()),
            site: Some("YouTube".to_string()),
        };
        assert_eq!(
            trailer.youtube_url().as_deref(),
            Some("https://www.youtube.com/watch?v=SUXWAEX2jlg")
        );

        trailer.site = Some("Vimeo".to_string());
        assert_eq!(trailer.youtube_url(), None);
        assert!(trailer.is_playable());
    }
}
