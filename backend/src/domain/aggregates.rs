/// Domain aggregates
use super::base::{DomainError, DomainResult, Entity};
use super::entities::PageSection;
use super::value_objects::{null_as_default, PageId, SectionId, TranslatedText};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The content of one page variant: a title and an ordered list of sections.
///
/// Each page id has two independent stored copies (published and draft); this
/// type is the payload of either.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageContent {
    pub id: PageId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: TranslatedText,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sections: Vec<PageSection>,
}

impl PageContent {
    /// Create a page with no sections
    pub fn new(id: PageId, title: TranslatedText) -> Self {
        PageContent {
            id,
            title,
            sections: Vec::new(),
        }
    }

    pub fn with_sections(mut self, sections: Vec<PageSection>) -> Self {
        self.sections = sections;
        self
    }

    /// Get a section by id
    pub fn section(&self, id: &SectionId) -> Option<&PageSection> {
        self.sections.iter().find(|s| &s.id == id)
    }

    /// Get a mutable reference to a section by id
    pub fn section_mut(&mut self, id: &SectionId) -> Option<&mut PageSection> {
        self.sections.iter_mut().find(|s| &s.id == id)
    }

    pub fn has_section(&self, id: &str) -> bool {
        self.sections.iter().any(|s| s.id.as_str() == id)
    }

    /// Section ids in display order
    pub fn section_ids(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.id.as_str()).collect()
    }

    /// Replace the section with the same id in place, or append it
    pub fn upsert_section(&mut self, section: PageSection) {
        match self.section_mut(section.id()) {
            Some(existing) => *existing = section,
            None => self.sections.push(section),
        }
    }

    /// Remove a section by id
    pub fn remove_section(&mut self, id: &SectionId) -> DomainResult<PageSection> {
        let index = self
            .sections
            .iter()
            .position(|s| &s.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("Section {} not found", id)))?;
        Ok(self.sections.remove(index))
    }

    /// Check the invariants a page must satisfy before it is written
    pub fn validate(&self) -> DomainResult<()> {
        let mut seen = HashSet::new();
        for section in &self.sections {
            if !seen.insert(section.id.as_str()) {
                return Err(DomainError::BusinessRuleViolation(format!(
                    "Section id {} appears twice in page {}",
                    section.id, self.id
                )));
            }
        }
        Ok(())
    }

    /// Fill every missing title half with its derived default.
    /// Returns true if anything changed.
    pub fn normalize(&mut self) -> bool {
        let mut changed = self.title.fill_missing(&self.id.placeholder_title());
        for section in &mut self.sections {
            changed |= section.normalize();
        }
        changed
    }

    /// Ids from `required` that are not present yet, in `required` order
    pub fn missing_section_ids<'a>(&self, required: &[&'a str]) -> Vec<&'a str> {
        required
            .iter()
            .copied()
            .filter(|id| !self.has_section(id))
            .collect()
    }

    /// Append every template whose id is not present yet.
    ///
    /// Existing sections are never removed, reordered or modified, so running
    /// this again once nothing is missing is a no-op. Returns the number of
    /// sections appended.
    pub fn ensure_sections<'a, I>(&mut self, templates: I) -> usize
    where
        I: IntoIterator<Item = &'a PageSection>,
    {
        let mut added = 0;
        for template in templates {
            if self.section(&template.id).is_none() {
                self.sections.push(template.clone());
                added += 1;
            }
        }
        added
    }
}

impl Entity for PageContent {
    type Id = PageId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(id: &str) -> PageSection {
        PageSection::new(
            SectionId::new(id).unwrap(),
            TranslatedText::new(format!("{} fr", id), format!("{} ar", id)),
        )
    }

    fn page(ids: &[&str]) -> PageContent {
        PageContent::new(PageId::new("test").unwrap(), TranslatedText::new("Test", "اختبار"))
            .with_sections(ids.iter().map(|id| section(id)).collect())
    }

    #[test]
    fn test_ensure_sections_appends_missing_at_end() {
        let mut content = page(&["a", "b"]);
        let templates = vec![section("a"), section("b"), section("c")];

        let added = content.ensure_sections(&templates);

        assert_eq!(added, 1);
        assert_eq!(content.section_ids(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_ensure_sections_never_touches_existing() {
        let mut content = page(&["b", "a"]);
        content.sections[0].content = TranslatedText::new("edited", "معدل");
        let templates = vec![section("a"), section("c"), section("b")];

        content.ensure_sections(&templates);

        assert_eq!(content.section_ids(), vec!["b", "a", "c"]);
        assert_eq!(content.sections[0].content.fr, "edited");
    }

    #[test]
    fn test_ensure_sections_is_idempotent() {
        let mut content = page(&["a"]);
        let templates = vec![section("a"), section("b")];

        assert_eq!(content.ensure_sections(&templates), 1);
        let after_first = content.clone();
        assert_eq!(content.ensure_sections(&templates), 0);
        assert_eq!(content, after_first);
    }

    #[test]
    fn test_missing_section_ids_keeps_required_order() {
        let content = page(&["b"]);
        assert_eq!(content.missing_section_ids(&["c", "b", "a"]), vec!["c", "a"]);
    }

    #[test]
    fn test_validate_rejects_duplicate_section_ids() {
        let content = page(&["a", "b", "a"]);
        assert!(matches!(
            content.validate(),
            Err(DomainError::BusinessRuleViolation(_))
        ));
        assert!(page(&["a", "b"]).validate().is_ok());
    }

    #[test]
    fn test_normalize_fills_page_and_section_titles() {
        let mut content = PageContent::new(PageId::new("contact").unwrap(), TranslatedText::default())
            .with_sections(vec![section("main_header")]);

        assert!(content.normalize());
        assert_eq!(content.title, TranslatedText::new("Contact", "contact"));
        assert_eq!(
            content.sections[0].title,
            Some(TranslatedText::new("Main header", "main_header"))
        );
        assert!(!content.normalize());
    }

    #[test]
    fn test_null_fields_read_as_empty() {
        let mut content: PageContent = serde_json::from_str(
            r#"{"id":"contact","title":null,"sections":[{"id":"main_header","title":{"fr":null,"ar":"رأس"},"content":null}]}"#,
        )
        .unwrap();

        assert_eq!(content.section_ids(), vec!["main_header"]);
        assert_eq!(content.sections[0].content, TranslatedText::default());
        content.normalize();
        assert_eq!(content.title, TranslatedText::new("Contact", "contact"));
        assert_eq!(
            content.sections[0].title,
            Some(TranslatedText::new("Main header", "رأس"))
        );

        let empty: PageContent = serde_json::from_str(r#"{"id":"news","sections":null}"#).unwrap();
        assert!(empty.sections.is_empty());
    }

    #[test]
    fn test_upsert_section_replaces_in_place() {
        let mut content = page(&["a", "b"]);
        let mut replacement = section("a");
        replacement.content = TranslatedText::new("new", "جديد");

        content.upsert_section(replacement);
        content.upsert_section(section("z"));

        assert_eq!(content.section_ids(), vec!["a", "b", "z"]);
        assert_eq!(content.sections[0].content.fr, "new");
    }

    #[test]
    fn test_remove_section() {
        let mut content = page(&["a", "b"]);
        let removed = content.remove_section(&SectionId::new("a").unwrap()).unwrap();

        assert_eq!(removed.id.as_str(), "a");
        assert_eq!(content.section_ids(), vec!["b"]);
        assert!(content.remove_section(&SectionId::new("a").unwrap()).is_err());
    }
}
