use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::books::domain::model::{default_authors, BookSummary, PLACEHOLDER_IMAGE, UNKNOWN_TITLE};
use crate::books::html::sanitize_description;
use crate::books::image::normalize_image_url;

// VolumeListDto is the body of the catalog search endpoint. Items are kept raw so that one
// malformed entry does not sink the whole page.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeListDto {
    pub total_items: Option<u64>,
    pub items: Option<Vec<Value>>,
}

// VolumeDto is one catalog volume, used by both search items and the detail endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeDto {
    pub id: Option<String>,
    pub volume_info: Option<VolumeInfoDto>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeInfoDto {
    pub title: Option<String>,
    pub authors: Option<Vec<String>>,
    pub image_links: Option<ImageLinksDto>,
    pub description: Option<String>,
    pub published_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageLinksDto {
    pub small_thumbnail: Option<String>,
    pub thumbnail: Option<String>,
}

impl VolumeListDto {
    // Maps every well-formed item that carries an id; anything else is skipped.
    pub fn to_summaries(&self, image_proxy: Option<&str>) -> Vec<BookSummary> {
        let def_items = vec![];
        self.items.as_ref().unwrap_or(&def_items).iter()
            .filter_map(|raw| match serde_json::from_value::<VolumeDto>(raw.clone()) {
                Ok(volume) => volume.to_summary(image_proxy),
                Err(err) => {
                    tracing::debug!(error = %err, "skipping malformed catalog item");
                    None
                }
            })
            .collect()
    }
}

impl VolumeDto {
    pub fn to_summary(&self, image_proxy: Option<&str>) -> Option<BookSummary> {
        let id = self.id.as_deref().map(str::trim).filter(|id| !id.is_empty())?;
        let info = self.volume_info.clone().unwrap_or_default();
        Some(info.to_summary(id, image_proxy))
    }
}

impl VolumeInfoDto {
    pub fn to_summary(&self, id: &str, image_proxy: Option<&str>) -> BookSummary {
        let title = self.title.as_deref().map(str::trim).filter(|t| !t.is_empty())
            .unwrap_or(UNKNOWN_TITLE);
        let authors: Vec<String> = self.authors.as_ref()
            .map(|a| a.iter().map(|s| s.trim()).filter(|s| !s.is_empty()).map(str::to_string).collect())
            .unwrap_or_default();
        let image_url = self.image_links.as_ref()
            .and_then(|links| links.thumbnail.as_deref().or(links.small_thumbnail.as_deref()))
            .map(|url| normalize_image_url(url, image_proxy))
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());
        BookSummary {
            id: id.to_string(),
            title: title.to_string(),
            authors: if authors.is_empty() { default_authors() } else { authors },
            image_url,
            description: self.description.as_deref().and_then(sanitize_description),
            published_date: self.published_date.as_deref().map(str::trim)
                .filter(|d| !d.is_empty()).map(str::to_string),
        }
    }
}
