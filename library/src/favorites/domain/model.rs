use std::collections::HashSet;
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::books::domain::model::{default_image, BookSummary};
use crate::books::image::normalize_image_url;
use crate::core::domain::Identifiable;

// FavoriteRecord is the part of a BookSummary kept across sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteRecord {
    pub id: String,
    pub title: String,
    pub authors: Vec<String>,
    // older clients stored the cover under "image"
    #[serde(alias = "image", default = "default_image")]
    pub image_url: String,
}

impl FavoriteRecord {
    pub fn new(id: &str, title: &str, authors: &[&str], image_url: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            authors: authors.iter().map(|a| a.to_string()).collect(),
            image_url: image_url.to_string(),
        }
    }

    // Stored covers may predate https upgrades or proxying.
    pub fn with_normalized_image(mut self, image_proxy: Option<&str>) -> Self {
        self.image_url = normalize_image_url(self.image_url.as_str(), image_proxy);
        self
    }
}

impl From<&BookSummary> for FavoriteRecord {
    fn from(other: &BookSummary) -> Self {
        Self {
            id: other.id.to_string(),
            title: other.title.to_string(),
            authors: other.authors.clone(),
            image_url: other.image_url.to_string(),
        }
    }
}

impl Identifiable for FavoriteRecord {
    fn id(&self) -> String {
        self.id.to_string()
    }
}

impl Book for FavoriteRecord {
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

// FavoritesSet keeps insertion order and never holds two records with the same id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<FavoriteRecord>", into = "Vec<FavoriteRecord>")]
pub struct FavoritesSet {
    records: Vec<FavoriteRecord>,
    ids: HashSet<String>,
}

impl FavoritesSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FavoriteRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[FavoriteRecord] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&FavoriteRecord> {
        if !self.contains(id) {
            return None;
        }
        self.records.iter().find(|r| r.id == id)
    }

    // appends unless the id is already present; returns whether the set changed
    pub(crate) fn insert(&mut self, record: FavoriteRecord) -> bool {
        if self.ids.contains(&record.id) {
            return false;
        }
        self.ids.insert(record.id.clone());
        self.records.push(record);
        true
    }

    pub fn with_normalized_images(self, image_proxy: Option<&str>) -> Self {
        let records: Vec<FavoriteRecord> = self.records.into_iter()
            .map(|r| r.with_normalized_image(image_proxy))
            .collect();
        FavoritesSet::from(records)
    }

    pub(crate) fn remove(&mut self, id: &str) -> bool {
        if !self.ids.remove(id) {
            return false;
        }
        self.records.retain(|r| r.id != id);
        true
    }
}

impl PartialEq for FavoritesSet {
    fn eq(&self, other: &Self) -> bool {
        self.records == other.records
    }
}

impl From<Vec<FavoriteRecord>> for FavoritesSet {
    fn from(records: Vec<FavoriteRecord>) -> Self {
        let mut set = FavoritesSet::new();
        for record in records {
            set.insert(record);
        }
        set
    }
}

impl From<FavoritesSet> for Vec<FavoriteRecord> {
    fn from(set: FavoritesSet) -> Self {
        set.records
    }
}
