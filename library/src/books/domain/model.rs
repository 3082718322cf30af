use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;

pub const UNKNOWN_AUTHOR: &str = "Autor desconhecido";
pub const UNKNOWN_TITLE: &str = "Título indisponível";
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/128x196?text=Sem+imagem";

// BookSummary is the normalized view of one catalog volume. It is rebuilt from the payload on
// every search and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookSummary {
    pub id: String,
    pub title: String,
    pub authors: Vec<String>,
    pub image_url: String,
    pub description: Option<String>,
    pub published_date: Option<String>,
}

impl BookSummary {
    pub fn new(id: &str, title: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            authors: default_authors(),
            image_url: PLACEHOLDER_IMAGE.to_string(),
            description: None,
            published_date: None,
        }
    }
}

pub fn default_authors() -> Vec<String> {
    vec![UNKNOWN_AUTHOR.to_string()]
}

pub fn default_image() -> String {
    PLACEHOLDER_IMAGE.to_string()
}

impl Identifiable for BookSummary {
    fn id(&self) -> String {
        self.id.to_string()
    }
}

impl Book for BookSummary {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn authors(&self) -> &[String] {
        &self.authors
    }

    fn image_url(&self) -> &str {
        self.image_url.as_str()
    }
}
