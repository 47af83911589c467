/// Domain entities
use super::base::Entity;
use super::value_objects::{null_as_default, SectionId, TranslatedText};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One editable block of a page: a title and a body in both languages.
///
/// `id` is the stable address other code uses to find or replace the
/// section; the position inside the page only matters for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSection {
    pub id: SectionId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<TranslatedText>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: TranslatedText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
}

impl PageSection {
    /// Create a section with a body and no explicit title
    pub fn new(id: SectionId, content: TranslatedText) -> Self {
        PageSection {
            id,
            title: None,
            content,
            image: None,
            metadata: None,
        }
    }

    /// Section carrying the derived title and placeholder body for `id`
    pub fn placeholder(id: SectionId) -> Self {
        let title = id.placeholder_title();
        let content = id.placeholder_content();
        PageSection::new(id, content).with_title(title)
    }

    pub fn with_title(mut self, title: TranslatedText) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Make sure the title exists and has both halves. Returns true if anything changed.
    pub fn normalize(&mut self) -> bool {
        let fallback = self.id.placeholder_title();
        match self.title.as_mut() {
            Some(title) => title.fill_missing(&fallback),
            None => {
                self.title = Some(fallback);
                true
            }
        }
    }
}

impl Entity for PageSection {
    type Id = SectionId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// A news article shown on the news page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: u64,
    pub title: TranslatedText,
    pub date: TranslatedText,
    pub author: TranslatedText,
    pub category: TranslatedText,
    pub excerpt: TranslatedText,
    pub image: String,
    pub slug: String,
    pub content: String,
}

impl Entity for NewsItem {
    type Id = u64;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// A downloadable document listed on the resources page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: u64,
    pub title: TranslatedText,
    pub description: TranslatedText,
    #[serde(rename = "type")]
    pub kind: String,
    pub format: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    pub download_url: String,
    pub date: TranslatedText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
}

impl Entity for Resource {
    type Id = u64;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Category or kind of a publication, labelled in both languages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicationType {
    pub id: String,
    pub fr: String,
    pub ar: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Publication {
    pub id: u64,
    pub title: TranslatedText,
    pub date: TranslatedText,
    pub excerpt: TranslatedText,
    pub category: PublicationType,
    #[serde(rename = "type")]
    pub kind: PublicationType,
    pub pages: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub slug: String,
    pub pdf_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub views: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub listens: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub downloads: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

impl Entity for Publication {
    type Id = u64;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// A reusable UI string (button label, form label, ...) addressed by category and key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalContent {
    pub id: String,
    pub category: String,
    pub key: String,
    pub text: TranslatedText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Entity for GlobalContent {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// An entry of the media library
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    pub id: String,
    pub name: String,
    pub path: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub alt: TranslatedText,
    #[serde(default)]
    pub tags: Vec<String>,
    pub upload_date: String,
}

impl Entity for MediaItem {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Navigation and footer layout of the site, stored as a single record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebsiteStructure {
    pub pages: Vec<String>,
    pub main_menu: Vec<MenuItem>,
    pub footer: Vec<FooterSection>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub title: TranslatedText,
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<MenuItem>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FooterSection {
    pub id: String,
    pub title: TranslatedText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<FooterLink>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<TranslatedText>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FooterLink {
    pub text: TranslatedText,
    pub href: String,
}
