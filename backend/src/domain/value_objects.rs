/// Value objects for the domain layer
use super::base::{DomainError, DomainResult, ValueObject};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Well-known storage keys
pub mod keys {
    pub const NEWS_ITEMS: &str = "newsItems";
    pub const RESOURCES: &str = "resources";
    pub const PUBLICATIONS: &str = "publications";
    pub const STRUCTURE: &str = "structure";
    pub const MEDIA_LIBRARY: &str = "media_library";
    pub const GLOBAL_CONTENT: &str = "global_content";
    pub const DB_INITIALIZED: &str = "dbInitialized";
    pub const ADMIN_AUTH: &str = "adminAuth";
    pub const LANGUAGE: &str = "language";

    /// Keys that survive a local storage reset
    pub const PRESERVED_ON_RESET: [&str; 2] = [ADMIN_AUTH, LANGUAGE];
}

/// Uppercase the first character, leaving the rest untouched
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Read an explicit `null` the same way as a missing field
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Identifier of a site page (`home`, `about`, `contact`, ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PageId(String);

impl PageId {
    pub fn new(id: impl Into<String>) -> DomainResult<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::InvalidValue("PageId cannot be empty".to_string()));
        }
        Ok(PageId(id))
    }

    /// Id from a literal in a built-in template
    pub(crate) fn literal(id: &'static str) -> Self {
        debug_assert!(!id.trim().is_empty());
        PageId(id.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Title used when a page is stored without one: capitalized id in French, raw id in Arabic
    pub fn placeholder_title(&self) -> TranslatedText {
        TranslatedText::new(capitalize(&self.0), self.0.clone())
    }
}

impl ValueObject for PageId {}

impl TryFrom<String> for PageId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        PageId::new(value)
    }
}

impl From<PageId> for String {
    fn from(id: PageId) -> Self {
        id.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a section, unique within its page
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SectionId(String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> DomainResult<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::InvalidValue("SectionId cannot be empty".to_string()));
        }
        Ok(SectionId(id))
    }

    /// Id from a literal in a built-in template
    pub(crate) fn literal(id: &'static str) -> Self {
        debug_assert!(!id.trim().is_empty());
        SectionId(id.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `contact_info` becomes `Contact info` / `contact_info`
    pub fn placeholder_title(&self) -> TranslatedText {
        TranslatedText::new(capitalize(&self.0.replace('_', " ")), self.0.clone())
    }

    /// Body text given to a required section that has no literal template
    pub fn placeholder_content(&self) -> TranslatedText {
        TranslatedText::new(
            format!("Contenu de la section {}", self.0),
            format!("محتوى القسم {}", self.0),
        )
    }
}

impl ValueObject for SectionId {}

impl TryFrom<String> for SectionId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        SectionId::new(value)
    }
}

impl From<SectionId> for String {
    fn from(id: SectionId) -> Self {
        id.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The two languages every piece of content carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Fr,
    Ar,
}

/// A text value carrying both language variants.
///
/// A missing or `null` half deserializes as an empty string; readers fill it
/// from a derived placeholder rather than failing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TranslatedText {
    #[serde(default, deserialize_with = "null_as_default")]
    pub fr: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ar: String,
}

impl TranslatedText {
    pub fn new(fr: impl Into<String>, ar: impl Into<String>) -> Self {
        TranslatedText {
            fr: fr.into(),
            ar: ar.into(),
        }
    }

    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::Fr => &self.fr,
            Language::Ar => &self.ar,
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.fr.is_empty() && !self.ar.is_empty()
    }

    /// Fill each empty half from `fallback`. Returns true if anything changed.
    pub fn fill_missing(&mut self, fallback: &TranslatedText) -> bool {
        let mut changed = false;
        if self.fr.is_empty() {
            self.fr = fallback.fr.clone();
            changed = true;
        }
        if self.ar.is_empty() {
            self.ar = fallback.ar.clone();
            changed = true;
        }
        changed
    }
}

impl ValueObject for TranslatedText {}

/// Which stored copy of a page is meant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Rendered to visitors, key `page_<id>`
    Published,
    /// Mutated in the admin editor, key `editor_<id>`
    Draft,
}

impl Variant {
    pub fn key_prefix(&self) -> &'static str {
        match self {
            Variant::Published => "page_",
            Variant::Draft => "editor_",
        }
    }
}

impl ValueObject for Variant {}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Published => write!(f, "published"),
            Variant::Draft => write!(f, "draft"),
        }
    }
}

/// A key in the key-value store
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StorageKey(String);

impl StorageKey {
    pub fn new(key: impl Into<String>) -> DomainResult<Self> {
        let key = key.into();
        if key.is_empty() {
            return Err(DomainError::InvalidValue("Storage key cannot be empty".to_string()));
        }
        Ok(StorageKey(key))
    }

    pub fn for_page(page_id: &PageId, variant: Variant) -> Self {
        StorageKey(format!("{}{}", variant.key_prefix(), page_id.as_str()))
    }

    pub fn published(page_id: &PageId) -> Self {
        Self::for_page(page_id, Variant::Published)
    }

    pub fn draft(page_id: &PageId) -> Self {
        Self::for_page(page_id, Variant::Draft)
    }

    /// Split a `page_<id>` / `editor_<id>` key into its variant and page id
    pub fn page_target(&self) -> Option<(Variant, PageId)> {
        [Variant::Published, Variant::Draft]
            .into_iter()
            .find_map(|variant| {
                self.0
                    .strip_prefix(variant.key_prefix())
                    .and_then(|rest| PageId::new(rest).ok())
                    .map(|page_id| (variant, page_id))
            })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for StorageKey {}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_rejects_empty() {
        assert!(PageId::new("").is_err());
        assert!(PageId::new("   ").is_err());
        assert_eq!(PageId::new("home").unwrap().as_str(), "home");
    }

    #[test]
    fn test_page_id_deserialization_validates() {
        let parsed: Result<PageId, _> = serde_json::from_str("\"\"");
        assert!(parsed.is_err());

        let parsed: PageId = serde_json::from_str("\"contact\"").unwrap();
        assert_eq!(parsed.as_str(), "contact");
    }

    #[test]
    fn test_placeholder_titles() {
        let page = PageId::new("about").unwrap();
        assert_eq!(page.placeholder_title(), TranslatedText::new("About", "about"));

        let section = SectionId::new("contact_info").unwrap();
        assert_eq!(
            section.placeholder_title(),
            TranslatedText::new("Contact info", "contact_info")
        );
    }

    #[test]
    fn test_capitalize_handles_unicode_and_empty() {
        assert_eq!(capitalize("équipe"), "Équipe");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_translated_text_missing_half_is_tolerated() {
        let text: TranslatedText = serde_json::from_str(r#"{"fr":"Bonjour"}"#).unwrap();
        assert_eq!(text.get(Language::Fr), "Bonjour");
        assert_eq!(text.get(Language::Ar), "");
        assert!(!text.is_complete());
    }

    #[test]
    fn test_translated_text_null_half_is_tolerated() {
        let text: TranslatedText = serde_json::from_str(r#"{"fr":"Contact","ar":null}"#).unwrap();
        assert_eq!(text, TranslatedText::new("Contact", ""));

        let text: TranslatedText = serde_json::from_str(r#"{"fr":null,"ar":null}"#).unwrap();
        assert_eq!(text, TranslatedText::default());
    }

    #[test]
    fn test_section_id_rejects_blank() {
        assert!(SectionId::new("").is_err());
        assert!(SectionId::new("  ").is_err());
        assert!(serde_json::from_str::<SectionId>("\" \"").is_err());
        assert_eq!(SectionId::new("form_title").unwrap().as_str(), "form_title");
    }

    #[test]
    fn test_fill_missing_only_touches_empty_halves() {
        let mut text = TranslatedText::new("Titre", "");
        let changed = text.fill_missing(&TranslatedText::new("Autre", "عنوان"));

        assert!(changed);
        assert_eq!(text, TranslatedText::new("Titre", "عنوان"));
        assert!(!text.fill_missing(&TranslatedText::new("x", "y")));
    }

    #[test]
    fn test_storage_key_for_page_variants() {
        let page = PageId::new("home").unwrap();
        assert_eq!(StorageKey::published(&page).as_str(), "page_home");
        assert_eq!(StorageKey::draft(&page).as_str(), "editor_home");
    }

    #[test]
    fn test_storage_key_page_target() {
        let key = StorageKey::new("editor_contact").unwrap();
        let (variant, page) = key.page_target().unwrap();
        assert_eq!(variant, Variant::Draft);
        assert_eq!(page.as_str(), "contact");

        assert!(StorageKey::new("newsItems").unwrap().page_target().is_none());
        assert!(StorageKey::new("page_").unwrap().page_target().is_none());
    }
}
