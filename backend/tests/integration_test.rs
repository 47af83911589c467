/// Integration tests for the domain layer
/// Walks a contact page through the section backfill an admin edit relies on

#[cfg(test)]
mod tests {
    use content_sync::domain::defaults::{
        default_page_content, default_value_for_key, required_sections, KNOWN_PAGE_IDS,
    };
    use content_sync::domain::*;

    fn section(id: &str, fr: &str, ar: &str) -> PageSection {
        PageSection::new(SectionId::new(id).unwrap(), TranslatedText::new(fr, ar))
    }

    /// A contact page that only holds the admin-edited header gets every
    /// required section appended after it, in template order, and keeps the
    /// edited header untouched.
    #[test]
    fn test_contact_page_backfill() {
        let page_id = PageId::new("contact").unwrap();
        let mut page = PageContent::new(page_id.clone(), TranslatedText::new("Contact", "اتصل بنا"))
            .with_sections(vec![section("main_header", "Écrivez-nous", "راسلونا")]);

        let templates = required_sections(page_id.as_str());
        let added = page.ensure_sections(&templates);

        assert_eq!(added, templates.len() - 1);
        assert_eq!(page.sections[0].content.fr, "Écrivez-nous");
        assert_eq!(page.section_ids()[1..3], ["intro", "contact_info"]);
        assert!(page.has_section("form_title"));
        assert!(page.validate().is_ok());

        // A second pass has nothing left to add
        assert_eq!(page.ensure_sections(&templates), 0);
    }

    #[test]
    fn test_every_known_page_has_a_valid_template() {
        for id in KNOWN_PAGE_IDS {
            let page_id = PageId::new(id).unwrap();
            let page = default_page_content(&page_id).unwrap();
            assert_eq!(page.id, page_id);
            assert!(page.validate().is_ok(), "template for {} is invalid", id);

            let mut backfilled = page.clone();
            backfilled.ensure_sections(&required_sections(id));
            assert!(backfilled.validate().is_ok(), "backfill for {} is invalid", id);
            assert!(backfilled.sections.iter().all(|s| s.title.is_some()));
        }
    }

    #[test]
    fn test_unknown_page_has_no_template() {
        let page_id = PageId::new("partners").unwrap();
        assert!(default_page_content(&page_id).is_none());
        assert!(required_sections("partners").is_empty());
        assert!(default_value_for_key("page_partners").is_none());
    }

    #[test]
    fn test_page_keys_resolve_both_variants() {
        let page_id = PageId::new("about").unwrap();

        let published = StorageKey::published(&page_id);
        let draft = StorageKey::draft(&page_id);
        assert_eq!(published.as_str(), "page_about");
        assert_eq!(draft.as_str(), "editor_about");
        assert_eq!(published.page_target(), Some((Variant::Published, page_id.clone())));
        assert_eq!(draft.page_target(), Some((Variant::Draft, page_id)));

        assert!(StorageKey::new("newsItems").unwrap().page_target().is_none());
    }

    #[test]
    fn test_storage_event_decodes_page_target() {
        let change = StorageChanged::new("editor_review", Some("{}".to_string()));
        let (variant, page_id) = change.page_target().unwrap();
        assert_eq!(variant, Variant::Draft);
        assert_eq!(page_id.as_str(), "review");

        let event = ContentEvent::Storage(change);
        assert_eq!(event.aggregate_id(), "editor_review");
    }

    #[test]
    fn test_duplicate_section_ids_are_rejected() {
        let page = PageContent::new(PageId::new("news").unwrap(), TranslatedText::new("Actualités", "الأخبار"))
            .with_sections(vec![section("intro", "a", "أ"), section("intro", "b", "ب")]);

        assert!(page.validate().is_err());
    }

    #[test]
    fn test_page_content_json_shape() {
        let page = PageContent::new(PageId::new("home").unwrap(), TranslatedText::new("Accueil", "الرئيسية"))
            .with_sections(vec![section("hero", "Bienvenue", "مرحبا")
                .with_title(TranslatedText::new("Héros", "البطل"))
                .with_image("/images/hero.jpg")]);

        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["id"], "home");
        assert_eq!(json["title"]["ar"], "الرئيسية");
        assert_eq!(json["sections"][0]["image"], "/images/hero.jpg");
        assert!(json["sections"][0].get("metadata").is_none());

        let parsed: PageContent = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, page);
    }
}
