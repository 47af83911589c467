/// Built-in page templates and the required-section catalogue
use crate::domain::aggregates::PageContent;
use crate::domain::entities::PageSection;
use crate::domain::value_objects::{PageId, SectionId, TranslatedText};

/// Page ids the site ships with, in menu order
pub const KNOWN_PAGE_IDS: [&str; 8] = [
    "home",
    "about",
    "programs",
    "news",
    "review",
    "resources",
    "testimonials",
    "contact",
];

fn text(fr: &str, ar: &str) -> TranslatedText {
    TranslatedText::new(fr, ar)
}

fn section(id: &'static str, title: (&str, &str), content: (&str, &str)) -> PageSection {
    PageSection::new(SectionId::literal(id), text(content.0, content.1)).with_title(text(title.0, title.1))
}

/// Append a placeholder for every id not already covered by `templates`
fn with_placeholders(mut templates: Vec<PageSection>, ids: &[&'static str]) -> Vec<PageSection> {
    for &id in ids {
        if !templates.iter().any(|s| s.id.as_str() == id) {
            templates.push(PageSection::placeholder(SectionId::literal(id)));
        }
    }
    templates
}

/// Display title of a known page
pub fn known_page_title(page_id: &str) -> Option<TranslatedText> {
    let (fr, ar) = match page_id {
        "home" => ("Accueil", "الرئيسية"),
        "about" => ("À Propos", "من نحن"),
        "programs" => ("Programmes", "البرامج"),
        "news" => ("Actualités", "الأخبار"),
        "resources" => ("Ressources", "الموارد"),
        "testimonials" => ("Témoignages", "الشهادات"),
        "review" => ("Revue & Publications", "المراجعة والمنشورات"),
        "contact" => ("Contact", "اتصل بنا"),
        _ => return None,
    };
    Some(text(fr, ar))
}

/// Template a known page is created from on first read; `None` for unknown ids
pub fn default_page_content(page_id: &PageId) -> Option<PageContent> {
    let title = known_page_title(page_id.as_str())?;
    let sections = match page_id.as_str() {
        "home" => home_template(),
        "about" => vec![section(
            "history",
            ("Notre histoire", "تاريخنا"),
            (
                "Fondée en 2020, notre fondation travaille sans relâche pour défendre les droits humains.",
                "تأسست في عام 2020، تعمل مؤسستنا بلا كلل للدفاع عن حقوق الإنسان.",
            ),
        )],
        "programs" => programs_template(),
        "news" => news_template(),
        "testimonials" => testimonials_template(),
        "review" => review_template(),
        "resources" => resources_template(),
        _ => vec![PageSection::new(
            SectionId::literal("1"),
            text(
                &format!("Contenu de la page {}", title.fr),
                &format!("محتوى صفحة {}", title.ar),
            ),
        )
        .with_title(title.clone())],
    };
    Some(PageContent::new(page_id.clone(), title).with_sections(sections))
}

/// Minimal page returned for ids with no template
pub fn fallback_page_content(page_id: &PageId) -> PageContent {
    PageContent::new(page_id.clone(), text("Nouvelle Page", "صفحة جديدة")).with_sections(vec![
        section(
            "section1",
            ("Section 1", "القسم 1"),
            ("Contenu de la section", "محتوى القسم"),
        ),
    ])
}

/// Pages written by a first-run initialization
pub fn initial_pages() -> Vec<PageContent> {
    let about = PageContent::new(PageId::literal("about"), text("À Propos", "من نحن")).with_sections(vec![
        section(
            "mission",
            ("Notre Mission", "مهمتنا"),
            (
                "La Fondation pour la Promotion des Droits est une organisation indépendante œuvrant pour la protection et la promotion des droits fondamentaux en Algérie.",
                "مؤسسة ترقية الحقوق هي منظمة مستقلة تعمل من أجل حماية وتعزيز الحقوق الأساسية في الجزائر.",
            ),
        ),
        section(
            "vision",
            ("Notre Vision", "رؤيتنا"),
            (
                "Nous aspirons à une société où les droits fondamentaux de chaque individu sont pleinement respectés et protégés.",
                "نتطلع إلى مجتمع تُحترم فيه الحقوق الأساسية لكل فرد وتُحمى بشكل كامل.",
            ),
        ),
        section(
            "values",
            ("Nos Valeurs", "قيمنا"),
            (
                "Notre travail est guidé par les principes fondamentaux de la Déclaration universelle des droits de l'homme.",
                "يسترشد عملنا بالمبادئ الأساسية للإعلان العالمي لحقوق الإنسان.",
            ),
        ),
        section(
            "history",
            ("Notre Histoire", "تاريخنا"),
            (
                "Fondée par un groupe de juristes et défenseurs des droits humains, notre fondation a traversé plus d'une décennie d'engagement continu.",
                "تأسست من قبل مجموعة من المحامين والمدافعين عن حقوق الإنسان، وقد مرت مؤسستنا بأكثر من عقد من الالتزام المستمر.",
            ),
        ),
    ]);

    let home = PageContent::new(PageId::literal("home"), text("Accueil", "الرئيسية")).with_sections(vec![
        section(
            "hero",
            ("Fondation pour la Promotion des Droits", "مؤسسة ترقية الحقوق"),
            (
                "Défendre et promouvoir les droits fondamentaux pour tous",
                "الدفاع عن وتعزيز الحقوق الأساسية للجميع",
            ),
        ),
        section(
            "intro",
            ("Qui sommes-nous", "من نحن"),
            (
                "Organisation indépendante et non partisane, consacrée à la protection et à la promotion des droits fondamentaux.",
                "منظمة مستقلة وغير حزبية، مكرسة لحماية وتعزيز الحقوق الأساسية.",
            ),
        ),
        section(
            "objectives",
            ("Nos Objectifs", "أهدافنا"),
            (
                "Promouvoir la connaissance des droits fondamentaux, documenter les violations et soutenir les victimes.",
                "تعزيز المعرفة بالحقوق الأساسية، وتوثيق الانتهاكات، ودعم الضحايا.",
            ),
        ),
        section(
            "programs",
            ("Nos Programmes", "برامجنا"),
            (
                "Éducation aux droits humains, assistance juridique, plaidoyer législatif, observatoire des droits.",
                "التثقيف في مجال حقوق الإنسان، والمساعدة القانونية، والمناصرة التشريعية، ومرصد الحقوق.",
            ),
        ),
        section("stats", ("Notre Impact", "تأثيرنا"), ("Quelques chiffres", "بعض الأرقام")),
        section(
            "visual-identity",
            ("Notre Identité Visuelle", "هويتنا البصرية"),
            (
                "Notre logo et nos couleurs représentent nos valeurs fondamentales:",
                "شعارنا وألواننا تمثل قيمنا الأساسية:",
            ),
        ),
    ]);

    vec![about, home]
}

/// Sections every known page must carry, in the order they are appended.
///
/// Unknown pages have no requirements.
pub fn required_sections(page_id: &str) -> Vec<PageSection> {
    match page_id {
        "home" => with_placeholders(
            home_template(),
            &[
                "hero",
                "slogan",
                "mission",
                "droits_egaux",
                "objectives",
                "impact",
                "actualites",
                "objectifs_details",
                "mission_details",
                "programmes",
                "identite_visuelle",
                "newsletter",
            ],
        ),
        "about" => about_required(),
        "programs" => programs_template(),
        "news" => with_placeholders(
            vec![section(
                "intro",
                ("Actualités", "الأخبار"),
                (
                    "Restez informé des dernières initiatives et événements.",
                    "ابق على اطلاع بآخر المبادرات والأحداث.",
                ),
            )],
            &["intro", "latest", "archive"],
        ),
        "review" => with_placeholders(
            review_required(),
            &[
                "intro",
                "methodology",
                "reports",
                "testimonials",
                "impact",
                "timeline",
                "statistics",
                "recommendations",
                "process",
                "experts",
                "publications",
            ],
        ),
        "resources" => resources_required(),
        "testimonials" => with_placeholders(
            testimonials_required(),
            &[
                "intro",
                "header",
                "categories",
                "coming_soon",
                "share",
                "form",
                "newsletter",
            ],
        ),
        "contact" => with_placeholders(
            contact_required(),
            &[
                "main_header",
                "coordonnees_header",
                "bureau_card",
                "telephone_card",
                "email_card",
                "message_header",
                "form_title",
                "form_nom",
                "form_email",
                "form_sujet",
                "form_message",
                "form_button",
                "heures_ouverture",
                "map",
                "newsletter",
                "newsletter_email",
                "newsletter_options",
                "newsletter_button",
                "privacy_notice",
                "unsubscribe_notice",
                "footer_address",
                "footer_email",
                "footer_phone",
            ],
        ),
        _ => Vec::new(),
    }
}

fn home_template() -> Vec<PageSection> {
    vec![
        section(
            "hero",
            ("Bannière principale", "البانر الرئيسي"),
            ("Bienvenue sur notre site", "مرحبا بكم في موقعنا"),
        ),
        section(
            "slogan",
            ("Slogan", "شعار"),
            (
                "Ensemble, pour des droits connus, reconnus et défendus.",
                "معاً، من أجل حقوق معروفة ومعترف بها ومحمية.",
            ),
        ),
        section(
            "mission",
            ("Notre mission", "مهمتنا"),
            (
                "Nous œuvrons pour promouvoir les droits humains et la justice sociale à travers l'information, la sensibilisation et l'assistance juridique.",
                "نحن نعمل على تعزيز حقوق الإنسان والعدالة الاجتماعية من خلال المعلومات والتوعية والمساعدة القانونية.",
            ),
        ),
    ]
}

fn about_required() -> Vec<PageSection> {
    vec![
        section(
            "intro",
            ("Introduction", "مقدمة"),
            (
                "Découvrez notre mission, nos valeurs et notre équipe dédiée à la promotion et à la défense des droits humains.",
                "اكتشف مهمتنا وقيمنا وفريقنا المكرس لتعزيز وحماية حقوق الإنسان.",
            ),
        ),
        section(
            "mission",
            ("Notre mission", "مهمتنا"),
            (
                "Notre mission principale est de contribuer à la construction d'un État de droit solide et inclusif.",
                "مهمتنا هي تعزيز والدفاع عن الحقوق من خلال التوعية والتدريب وتوثيق الانتهاكات ودعم الفاعلين في المجتمع المدني.",
            ),
        ),
        section(
            "vision",
            ("Notre vision", "رؤيتنا"),
            (
                "\"Contribuer à l'édification d'une société où la dignité humaine est respectée et où les droits sont garantis pour tous, sans discrimination.\"",
                "\"المساهمة في بناء مجتمع تُحترم فيه كرامة الإنسان وتُضمن فيه الحقوق للجميع، دون تمييز.\"",
            ),
        ),
        section(
            "justice",
            ("Justice et Droits", "العدالة والحقوق"),
            (
                "Face aux défis, nous restons engagés et mobilisés pour faire avancer la justice et promouvoir le respect des droits fondamentaux.",
                "في مواجهة التحديات، نبقى ملتزمين ومجندين لدفع العدالة وتعزيز احترام الحقوق الأساسية.",
            ),
        )
        .with_image("/images/law/justice-law-scales.jpg"),
        section(
            "objectives",
            ("Nos objectifs", "أهدافنا"),
            (
                "Contribuer et œuvrer à la construction d'un État de droit en exhortant les citoyens à s'engager à faire appliquer et respecter la loi et à promouvoir les droits.",
                "المساهمة والعمل على بناء دولة القانون من خلال حث المواطنين على الالتزام بتطبيق واحترام القانون وتعزيز الحقوق.",
            ),
        ),
        section(
            "objectives_intro",
            ("Introduction aux objectifs", "مقدمة الأهداف"),
            (
                "La Fondation pour la promotion des droits poursuit les objectifs suivants pour concrétiser sa vision d'une société juste et respectueuse des droits fondamentaux.",
                "تسعى المؤسسة من اجل ترقية الحقوق لتحقيق الأهداف التالية لتجسيد رؤيتها لمجتمع عادل يحترم الحقوق الأساسية.",
            ),
        ),
        section(
            "target_audience",
            ("Notre public cible", "جمهورنا المستهدف"),
            (
                "Nos actions et programmes sont conçus pour répondre aux besoins spécifiques de différentes catégories de personnes concernées par les droits humains.",
                "تم تصميم إجراءاتنا وبرامجنا لتلبية الاحتياجات المحددة لمختلف فئات الأشخاص المعنيين بحقوق الإنسان.",
            ),
        ),
        section(
            "history",
            ("Notre histoire", "تاريخنا"),
            (
                "Notre histoire est avant tout celle d'un engagement collectif pour une structure indépendante, transparente et active.",
                "تاريخنا هو قبل كل شيء تاريخ التزام جماعي لإنشاء هيكل مستقل وشفاف ونشط.",
            ),
        ),
        section(
            "founder",
            ("Mot du Gérant", "كلمة المدير"),
            (
                "C'est avec une grande fierté et une profonde conviction que je vous adresse ces quelques mots en tant que gérant de la Fondation pour la promotion des droits.",
                "بكل فخر وقناعة عميقة أخاطبكم بهذه الكلمات القليلة كمدير للمؤسسة من اجل ترقية الحقوق.",
            ),
        )
        .with_image("/images/zakaria.jpg"),
    ]
}

fn programs_template() -> Vec<PageSection> {
    vec![
        section(
            "intro",
            ("Nos Programmes", "برامجنا"),
            (
                "Découvrez les différents programmes à travers lesquels nous travaillons pour promouvoir et protéger les droits fondamentaux.",
                "اكتشف البرامج المختلفة التي نعمل من خلالها على تعزيز وحماية الحقوق الأساسية.",
            ),
        ),
        section(
            "research",
            ("Recherche & Documentation", "البحث والتوثيق"),
            (
                "Notre programme de recherche documente systématiquement les situations des droits humains pour informer le plaidoyer et le développement des politiques.",
                "يوثق برنامج البحث لدينا بشكل منهجي حالات حقوق الإنسان لإثراء المناصرة وتطوير السياسات.",
            ),
        ),
        section(
            "training",
            ("Formation & Éducation", "التدريب والتعليم"),
            (
                "Nous organisons des formations nationales sur les mécanismes de défense des droits humains, destinées aux jeunes activistes et étudiants en droit.",
                "ننظم دورات تدريبية وطنية حول آليات الدفاع عن حقوق الإنسان، موجهة للناشطين الشباب وطلاب القانون.",
            ),
        ),
        section(
            "advocacy",
            ("Plaidoyer & Campagnes", "المناصرة والحملات"),
            (
                "Nous défendons des changements systémiques en engageant les décideurs politiques, en sensibilisant le public et en mobilisant des actions collectives pour les droits fondamentaux.",
                "ندافع عن التغييرات المنهجية من خلال إشراك صناع السياسات ورفع الوعي العام وتعبئة العمل الجماعي للحقوق الأساسية.",
            ),
        ),
        section(
            "implementation",
            ("Notre Approche de Mise en Œuvre", "منهجية التنفيذ"),
            (
                "Notre méthodologie assure que nos programmes sont efficaces, inclusifs et adaptés aux besoins locaux.",
                "تضمن منهجيتنا أن تكون برامجنا فعالة وشاملة ومكيفة للاحتياجات المحلية.",
            ),
        ),
        section(
            "implementation_subtitle",
            ("Sous-titre de mise en œuvre", "العنوان الفرعي للتنفيذ"),
            ("implementation.subtitle", "implementation.subtitle"),
        ),
        section(
            "participatory",
            ("Méthodologie Participative", "المنهجية التشاركية"),
            (
                "Nous utilisons des approches participatives qui impliquent les bénéficiaires dans la conception et la mise en œuvre des programmes.",
                "نستخدم مناهج تشاركية تشرك المستفيدين في تصميم وتنفيذ البرامج.",
            ),
        ),
        section(
            "results_based",
            ("Gestion Axée sur les Résultats", "الإدارة القائمة على النتائج"),
            (
                "Nous mettons en œuvre un cadre de gestion axée sur les résultats pour assurer l'efficacité et l'impact des programmes.",
                "نقوم بتنفيذ إطار الإدارة القائمة على النتائج لضمان فعالية وتأثير البرامج.",
            ),
        ),
        section(
            "implementation_cycle",
            ("Cycle de mise en œuvre", "دورة التنفيذ"),
            ("Notre cycle de mise en œuvre", "دورة التنفيذ لدينا"),
        ),
        section(
            "impact",
            ("Impact du Programme", "تأثير البرنامج"),
            (
                "Les chiffres qui reflètent notre engagement et notre impact dans la promotion et la défense des droits.",
                "الأرقام التي تعكس التزامنا وتأثيرنا في تعزيز والدفاع عن الحقوق.",
            ),
        ),
        section(
            "impact_trained",
            ("Personnes Formées", "الأشخاص المدربين"),
            (
                "760+\nPersonnes formées par nos programmes de renforcement des capacités",
                "+760\nشخص تم تدريبهم من خلال برامجنا لبناء القدرات",
            ),
        ),
        section(
            "impact_partners",
            ("Organisations Partenaires", "المنظمات الشريكة"),
            (
                "25+\nOrganisations partenaires collaborant à la mise en œuvre du programme",
                "+25\nمنظمة شريكة تتعاون في تنفيذ البرنامج",
            ),
        ),
        section(
            "impact_workshops",
            ("Ateliers de Formation", "ورش العمل التدريبية"),
            (
                "38+\nAteliers de formation organisés dans différentes régions",
                "+38\nورشة عمل تدريبية منظمة في مناطق مختلفة",
            ),
        ),
        section(
            "impact_regions",
            ("Impact Régional", "التأثير الإقليمي"),
            (
                "Nos programmes ont atteint diverses régions d'Algérie.",
                "وصلت برامجنا إلى مناطق مختلفة من الجزائر.",
            ),
        ),
        section(
            "partners",
            ("Nos Partenaires", "شركاؤنا"),
            (
                "Nous collaborons avec divers partenaires pour améliorer l'impact et la portée de nos programmes.",
                "نتعاون مع شركاء متنوعين لتحسين تأثير ومدى برامجنا.",
            ),
        ),
        section(
            "global_presence",
            ("Notre présence globale", "تواجدنا العالمي"),
            ("Nos partenaires à travers le monde", "شركاؤنا حول العالم"),
        ),
    ]
}

fn news_template() -> Vec<PageSection> {
    vec![
        section(
            "intro",
            ("Actualités", "الأخبار"),
            (
                "Restez informé des dernières initiatives, événements et développements concernant notre travail sur les droits humains.",
                "ابق على اطلاع بآخر المبادرات والأحداث والتطورات المتعلقة بعملنا في مجال حقوق الإنسان.",
            ),
        ),
        section(
            "categories",
            ("Catégories", "التصنيفات"),
            (
                "Formation\nRapports\nPartenariats\nÉvénements\nProgrammes",
                "تدريب\nتقارير\nشراكات\nفعاليات\nبرامج",
            ),
        ),
        section(
            "featured",
            ("À la une", "المميزة"),
            (
                "Découvrez nos actualités à la une, mettant en lumière nos principales initiatives.",
                "اكتشف أخبارنا المميزة، التي تسلط الضوء على مبادراتنا الرئيسية.",
            ),
        ),
        section(
            "recent",
            ("Actualités récentes", "الأخبار الحديثة"),
            (
                "Consultez nos dernières activités, projets et engagements en faveur des droits fondamentaux.",
                "اطلع على آخر أنشطتنا ومشاريعنا والتزاماتنا لصالح الحقوق الأساسية.",
            ),
        ),
    ]
}

fn testimonials_template() -> Vec<PageSection> {
    vec![
        section(
            "intro",
            ("Témoignages", "الشهادات"),
            (
                "Découvrez ce que disent nos partenaires et bénéficiaires sur notre travail",
                "اكتشف ما يقوله المستفيدون وشركاؤنا ومتطوعونا عن عملنا",
            ),
        ),
        section(
            "header",
            ("Ce qu'ils disent de nous", "ما يقولونه عنا"),
            (
                "Voici les témoignages de personnes et d'organisations qui ont bénéficié de nos programmes et collaboré avec nous.",
                "فيما يلي شهادات من الأشخاص والمنظمات التي استفادت من برامجنا وتعاونت معنا.",
            ),
        ),
        section(
            "categories",
            ("Catégories", "الفئات"),
            (
                "Tous\nBénéficiaires\nPartenaires\nVolontaires\nExperts",
                "الكل\nالمستفيدون\nالشركاء\nالمتطوعون\nالخبراء",
            ),
        ),
        section(
            "coming_soon",
            ("Témoignages à venir", "شهادات قادمة"),
            (
                "Nous sommes en train de recueillir des témoignages de nos bénéficiaires, partenaires et volontaires.",
                "نحن نجمع الشهادات من المستفيدين وشركائنا ومتطوعينا.",
            ),
        ),
        section(
            "share",
            ("Partagez votre expérience", "شارك تجربتك"),
            (
                "Avez-vous participé à l'un de nos programmes ou collaboré avec nous ? Nous serions ravis d'entendre votre histoire.",
                "هل شاركت في أحد برامجنا أو تعاونت معنا؟ يسعدنا سماع قصتك.",
            ),
        ),
        section(
            "form",
            ("Formulaire de témoignage", "نموذج الشهادة"),
            (
                "Nom complet\nEmail\nOrganisation\nRôle / Fonction\nVotre expérience avec nous\nVotre évaluation\nSoumettre votre témoignage",
                "الاسم الكامل\nالبريد الإلكتروني\nالمنظمة\nالدور / الوظيفة\nتجربتك معنا\nتقييمك\nإرسال شهادتك",
            ),
        ),
    ]
}

fn testimonials_required() -> Vec<PageSection> {
    vec![
        section(
            "intro",
            ("Témoignages", "الشهادات"),
            (
                "Découvrez ce que disent nos partenaires et bénéficiaires sur notre travail.",
                "اكتشف ما يقوله شركاؤنا والمستفيدون من عملنا.",
            ),
        ),
        section(
            "featured_testimonial",
            ("Témoignage Principal", "الشهادة الرئيسية"),
            (
                "\"La formation dispensée par la Fondation a transformé ma compréhension des droits humains.\"",
                "\"لقد غير التدريب الذي قدمته المؤسسة فهمي لحقوق الإنسان.\"",
            ),
        ),
    ]
}

fn review_template() -> Vec<PageSection> {
    vec![
        section(
            "intro",
            ("Revue & Publications", "المراجعة والمنشورات"),
            (
                "Explorez nos analyses et publications sur les droits humains et les enjeux juridiques actuels",
                "استكشف تحليلاتنا ومنشوراتنا حول حقوق الإنسان والقضايا القانونية الحالية",
            ),
        ),
        section(
            "coming_soon",
            ("Notre première revue arrive en juillet 2025 !", "تصدر مجلتنا الأولى في يوليو 2025!"),
            (
                "Nous avons le plaisir de vous annoncer que la première édition de notre revue sera publiée en juillet 2025.",
                "يسرنا أن نعلن أن العدد الأول من مجلتنا سيصدر في يوليو 2025.",
            ),
        ),
        section(
            "contribution",
            ("Vous souhaitez contribuer ?", "هل ترغب في المساهمة؟"),
            (
                "Nous invitons les chercheurs, juristes, académiciens et experts à contribuer à notre revue.",
                "ندعو الباحثين والمحامين والأكاديميين والخبراء للمساهمة في مجلتنا.",
            ),
        ),
        section(
            "recent_publications",
            ("Publications récentes", "المنشورات الحديثة"),
            (
                "Découvrez l'ensemble de nos ressources documentaires sur les droits humains et les questions juridiques.",
                "اكتشف جميع مواردنا الوثائقية حول حقوق الإنسان والقضايا القانونية.",
            ),
        ),
        section(
            "media_library",
            ("Médiathèque", "مكتبة الوسائط"),
            (
                "Explorez notre collection de ressources audiovisuelles sur les droits humains.",
                "استكشف مجموعتنا من الموارد السمعية البصرية حول حقوق الإنسان.",
            ),
        ),
        section(
            "featured",
            ("Publication à la une", "المنشور المميز"),
            (
                "Notre rapport annuel présente un aperçu complet de l'état des droits humains en Algérie.",
                "يقدم تقريرنا السنوي نظرة شاملة عن حالة حقوق الإنسان في الجزائر.",
            ),
        ),
    ]
}

fn review_required() -> Vec<PageSection> {
    vec![
        section(
            "intro",
            ("Introduction", "مقدمة"),
            (
                "Explorez nos analyses et publications sur les droits humains et les enjeux juridiques actuels",
                "استكشف تحليلاتنا ومنشوراتنا حول حقوق الإنسان والقضايا القانونية الحالية",
            ),
        ),
        section(
            "coming_soon",
            ("Notre première revue arrive en juillet 2025 !", "تصدر مجلتنا الأولى في يوليو 2025!"),
            (
                "Notre équipe travaille actuellement sur le premier numéro de notre revue juridique spécialisée.",
                "يعمل فريقنا حاليًا على العدد الأول من مجلتنا القانونية المتخصصة.",
            ),
        ),
        section(
            "media_library",
            ("Médiathèque", "مكتبة الوسائط"),
            (
                "Explorez notre collection de ressources audiovisuelles sur les droits humains.",
                "استكشف مجموعتنا من الموارد السمعية البصرية حول حقوق الإنسان.",
            ),
        ),
        section(
            "featured",
            ("Publication à la une", "المنشور المميز"),
            (
                "Notre rapport annuel présente un aperçu complet de l'état des droits humains en Algérie.",
                "يقدم تقريرنا السنوي نظرة شاملة عن حالة حقوق الإنسان في الجزائر.",
            ),
        ),
    ]
}

fn resources_template() -> Vec<PageSection> {
    vec![
        section(
            "intro",
            ("Ressources", "الموارد"),
            (
                "Découvrez nos ressources pour comprendre et défendre les droits fondamentaux.",
                "اكتشف مواردنا لفهم الحقوق الأساسية والدفاع عنها.",
            ),
        ),
        section(
            "guides",
            ("Guides pratiques", "أدلة عملية"),
            (
                "Nos guides expliquent les droits fondamentaux dans un langage accessible à tous.",
                "توضح أدلتنا الحقوق الأساسية بلغة يسهل فهمها للجميع.",
            ),
        ),
        section(
            "templates",
            ("Modèles de documents", "نماذج المستندات"),
            (
                "Utilisez nos modèles pour rédiger des lettres officielles, des plaintes ou des demandes de documentation.",
                "استخدم نماذجنا لكتابة الخطابات الرسمية أو الشكاوى أو طلبات الوثائق.",
            ),
        ),
        section(
            "reports",
            ("Rapports et études", "التقارير والدراسات"),
            (
                "Consultez nos rapports et études sur les différentes problématiques liées aux droits fondamentaux.",
                "راجع تقاريرنا ودراساتنا حول مختلف القضايا المتعلقة بالحقوق الأساسية.",
            ),
        ),
        section(
            "training",
            ("Matériel de formation", "مواد التدريب"),
            (
                "Accédez à notre matériel de formation pour approfondir vos connaissances sur les droits.",
                "الوصول إلى مواد التدريب الخاصة بنا لتعميق معرفتك بالحقوق.",
            ),
        ),
        section(
            "multimedia",
            ("Ressources multimédias", "موارد الوسائط المتعددة"),
            (
                "Explorez notre collection de vidéos, podcasts et infographies sur les droits fondamentaux.",
                "استكشف مجموعتنا من مقاطع الفيديو والبودكاست والرسوم المعلوماتية حول الحقوق الأساسية.",
            ),
        ),
    ]
}

fn resources_required() -> Vec<PageSection> {
    vec![
        section(
            "intro",
            ("Centre de Ressources", "مركز الموارد"),
            (
                "Accédez à notre bibliothèque de ressources sur les droits humains.",
                "الوصول إلى مكتبة مواردنا حول حقوق الإنسان.",
            ),
        ),
        section(
            "featured_resource",
            ("Ressource en Vedette", "المورد المميز"),
            (
                "Guide pratique sur les droits constitutionnels en Algérie",
                "دليل عملي حول الحقوق الدستورية في الجزائر",
            ),
        ),
        section(
            "categories",
            ("Catégories de Ressources", "فئات الموارد"),
            ("Parcourez nos ressources par catégorie", "تصفح مواردنا حسب الفئة"),
        ),
    ]
}

fn contact_required() -> Vec<PageSection> {
    vec![
        section(
            "intro",
            ("Contactez-nous", "اتصل بنا"),
            (
                "Nous sommes à votre disposition pour répondre à vos questions.",
                "نحن في خدمتكم للإجابة على أسئلتكم.",
            ),
        ),
        section(
            "contact_info",
            ("Informations de Contact", "معلومات الاتصال"),
            (
                "Email: contact@droitfin.com\nTéléphone: +123 456 789",
                "البريد الإلكتروني: contact@droitfin.com\nالهاتف: +123 456 789",
            ),
        ),
    ]
}
