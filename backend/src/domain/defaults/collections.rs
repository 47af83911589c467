/// Default records for the list keys and the site structure
use crate::domain::entities::{
    FooterLink, FooterSection, GlobalContent, MediaItem, MenuItem, NewsItem, Resource,
    WebsiteStructure,
};
use crate::domain::value_objects::TranslatedText;

fn text(fr: &str, ar: &str) -> TranslatedText {
    TranslatedText::new(fr, ar)
}

#[allow(clippy::too_many_arguments)]
fn news(
    id: u64,
    title: (&str, &str),
    date: (&str, &str),
    author: (&str, &str),
    category: (&str, &str),
    excerpt: (&str, &str),
    image: &str,
    slug: &str,
    content: &str,
) -> NewsItem {
    NewsItem {
        id,
        title: text(title.0, title.1),
        date: text(date.0, date.1),
        author: text(author.0, author.1),
        category: text(category.0, category.1),
        excerpt: text(excerpt.0, excerpt.1),
        image: image.to_string(),
        slug: slug.to_string(),
        content: content.to_string(),
    }
}

pub fn default_news_items() -> Vec<NewsItem> {
    vec![
        news(
            1,
            ("Formation sur les Droits Fondamentaux", "دورة تدريبية حول الحقوق الأساسية"),
            ("25 août 2023", "25 أغسطس 2023"),
            ("Équipe de Formation", "فريق التدريب"),
            ("Formation", "تدريب"),
            (
                "Nouvelle session de formation prévue à Alger pour les défenseurs des droits, axée sur les mécanismes de protection internationale.",
                "دورة تدريبية جديدة مقررة في الجزائر للمدافعين عن الحقوق، تركز على آليات الحماية الدولية.",
            ),
            "/images/training.jpg",
            "formation-droits-fondamentaux",
            "Contenu détaillé de la formation...",
        ),
        news(
            2,
            ("Table Ronde sur les Réformes Juridiques", "طاولة مستديرة حول الإصلاحات القانونية"),
            ("5 août 2023", "5 أغسطس 2023"),
            ("Équipe des Événements", "فريق الفعاليات"),
            ("Événements", "فعاليات"),
            (
                "Une journée d'étude consacrée aux récentes réformes juridiques et à leur impact sur les droits des citoyens.",
                "يوم دراسي مخصص للإصلاحات القانونية الأخيرة وتأثيرها على حقوق المواطنين.",
            ),
            "/images/round-table.jpg",
            "table-ronde-reformes-juridiques",
            "Contenu détaillé de la table ronde...",
        ),
        news(
            3,
            ("Journée internationale des droits des migrants", "اليوم العالمي لحقوق المهاجرين"),
            ("18 décembre 2023", "18 ديسمبر 2023"),
            ("Équipe de Sensibilisation", "فريق التوعية"),
            ("Rapports", "تقارير"),
            (
                "À l'occasion de la Journée internationale des droits des migrants, nous mettons en lumière les défis et les avancées concernant la protection des droits des personnes migrantes.",
                "بمناسبة اليوم العالمي لحقوق المهاجرين، نسلط الضوء على التحديات والتقدم المحرز في حماية حقوق المهاجرين.",
            ),
            "/images/migrants-rights.jpg",
            "journee-internationale-droits-migrants",
            "Contenu détaillé sur les droits des migrants...",
        ),
    ]
}

pub fn default_resources() -> Vec<Resource> {
    vec![
        Resource {
            id: 1,
            title: text("Guide des droits fondamentaux", "دليل الحقوق الأساسية"),
            description: text(
                "Un guide complet expliquant les droits fondamentaux garantis par la constitution et les conventions internationales.",
                "دليل شامل يشرح الحقوق الأساسية التي يضمنها الدستور والاتفاقيات الدولية.",
            ),
            kind: "guide".to_string(),
            format: "pdf".to_string(),
            thumbnail: Some("/images/resources/fundamental-rights-guide.jpg".to_string()),
            download_url: "/resources/guide-droits-fondamentaux.pdf".to_string(),
            date: text("10 janvier 2023", "10 يناير 2023"),
            file_size: Some("2.5 MB".to_string()),
            featured: Some(true),
        },
        Resource {
            id: 2,
            title: text("Rapport annuel 2023", "التقرير السنوي 2023"),
            description: text(
                "Notre rapport annuel présentant un aperçu complet de l'état des droits humains en Algérie.",
                "تقريرنا السنوي الذي يقدم نظرة شاملة عن حالة حقوق الإنسان في الجزائر.",
            ),
            kind: "report".to_string(),
            format: "pdf".to_string(),
            thumbnail: Some("/images/resources/annual-report.jpg".to_string()),
            download_url: "/resources/rapport-annuel-2023.pdf".to_string(),
            date: text("15 mars 2023", "15 مارس 2023"),
            file_size: Some("4.8 MB".to_string()),
            featured: Some(true),
        },
    ]
}

fn menu(id: &str, title: (&str, &str), href: &str) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        title: text(title.0, title.1),
        href: href.to_string(),
        children: None,
    }
}

fn link(label: (&str, &str), href: &str) -> FooterLink {
    FooterLink {
        text: text(label.0, label.1),
        href: href.to_string(),
    }
}

pub fn default_structure() -> WebsiteStructure {
    WebsiteStructure {
        pages: super::KNOWN_PAGE_IDS.iter().map(|id| id.to_string()).collect(),
        main_menu: vec![
            menu("home", ("Accueil", "الرئيسية"), "/"),
            menu("about", ("À Propos", "من نحن"), "/about"),
            menu("programs", ("Programmes", "البرامج"), "/programs"),
            menu("news", ("Actualités", "الأخبار"), "/news"),
            menu("review", ("Revue", "المراجعة"), "/review"),
            menu("resources", ("Ressources", "الموارد"), "/resources"),
            menu("testimonials", ("Témoignages", "الشهادات"), "/testimonials"),
            menu("contact", ("Contact", "اتصل بنا"), "/contact"),
        ],
        footer: vec![
            FooterSection {
                id: "quick-links".to_string(),
                title: text("Liens Rapides", "روابط سريعة"),
                links: Some(vec![
                    link(("Accueil", "الرئيسية"), "/"),
                    link(("À Propos", "من نحن"), "/about"),
                    link(("Programmes", "البرامج"), "/programs"),
                    link(("Actualités", "الأخبار"), "/news"),
                    link(("Revue", "المراجعة"), "/review"),
                ]),
                content: None,
            },
            FooterSection {
                id: "information".to_string(),
                title: text("Informations", "معلومات"),
                links: Some(vec![
                    link(("Ressources", "الموارد"), "/resources"),
                    link(("Témoignages", "الشهادات"), "/testimonials"),
                    link(("civil-society", "civil-society"), "#"),
                    link(("Contact", "اتصل بنا"), "/contact"),
                ]),
                content: None,
            },
        ],
    }
}

pub fn default_media_library() -> Vec<MediaItem> {
    vec![
        MediaItem {
            id: "logo".to_string(),
            name: "Logo principal".to_string(),
            path: "/images/logo.png".to_string(),
            url: "/images/logo.png".to_string(),
            kind: "image".to_string(),
            alt: text(
                "Logo de la Fondation pour la Promotion des Droits",
                "شعار مؤسسة ترقية الحقوق",
            ),
            tags: vec!["logo".to_string(), "identité".to_string(), "marque".to_string()],
            upload_date: "2023-01-01".to_string(),
        },
        MediaItem {
            id: "banner".to_string(),
            name: "Bannière principale".to_string(),
            path: "/images/banner.jpg".to_string(),
            url: "/images/banner.jpg".to_string(),
            kind: "image".to_string(),
            alt: text("Bannière principale du site", "شعار الموقع الرئيسي"),
            tags: vec!["bannière".to_string(), "accueil".to_string()],
            upload_date: "2023-01-02".to_string(),
        },
    ]
}

fn global(id: &str, category: &str, key: &str, label: (&str, &str)) -> GlobalContent {
    GlobalContent {
        id: id.to_string(),
        category: category.to_string(),
        key: key.to_string(),
        text: text(label.0, label.1),
        image: None,
    }
}

pub fn default_global_content() -> Vec<GlobalContent> {
    vec![
        global("button_1", "buttons", "read_more", ("Lire la suite", "إقرأ المزيد")),
        global("button_2", "buttons", "submit", ("Envoyer", "إرسال")),
        global("label_1", "labels", "name", ("Nom", "الاسم")),
        global("label_2", "labels", "email", ("Email", "البريد الإلكتروني")),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structure_lists_every_known_page() {
        let structure = default_structure();
        assert_eq!(structure.pages.len(), 8);
        assert_eq!(structure.main_menu.len(), 8);
        assert_eq!(structure.main_menu[0].href, "/");
        assert_eq!(structure.footer[0].id, "quick-links");
    }

    #[test]
    fn test_structure_serializes_with_stored_field_names() {
        let value = serde_json::to_value(default_structure()).unwrap();
        assert!(value.get("mainMenu").is_some());
        assert!(value["mainMenu"][0].get("children").is_none());
    }

    #[test]
    fn test_default_collections_sizes() {
        assert_eq!(default_news_items().len(), 3);
        assert_eq!(default_resources().len(), 2);
        assert_eq!(default_media_library().len(), 2);
        assert_eq!(default_global_content().len(), 4);
    }
}
