use super::{Attribute, ComponentSchema, RelationKind};

const IMAGES: &[&str] = &["images"];

/// Components allowed in a `blocks` dynamic zone.
pub const BLOCK_COMPONENTS: &[&str] = &[
    "blocks.hero",
    "blocks.heading-section",
    "blocks.card-grid",
    "blocks.content-with-image",
    "blocks.faqs",
    "blocks.person-card",
    "blocks.markdown",
    "blocks.featured-articles",
    "blocks.newsletter",
];

const fn image() -> Attribute {
    Attribute::Media {
        multiple: false,
        allowed_types: IMAGES,
    }
}

const fn link(repeatable: bool) -> Attribute {
    Attribute::Component {
        component: "shared.link",
        repeatable,
    }
}

const fn logo(repeatable: bool) -> Attribute {
    Attribute::Component {
        component: "shared.logo",
        repeatable,
    }
}

pub static COMPONENTS: &[ComponentSchema] = &[
    ComponentSchema {
        uid: "blocks.card-grid",
        collection_name: "components_blocks_card_grids",
        display_name: "Card Grid",
        description: "",
        attributes: &[(
            "card",
            Attribute::Component {
                component: "shared.card",
                repeatable: true,
            },
        )],
    },
    ComponentSchema {
        uid: "blocks.content-with-image",
        collection_name: "components_blocks_content_with_images",
        display_name: "Content With Image",
        description: "",
        attributes: &[
            ("heading", Attribute::String),
            ("image", image()),
            ("link", link(false)),
            (
                "reversed",
                Attribute::Boolean {
                    default: Some(false),
                },
            ),
            ("text", Attribute::RichText),
        ],
    },
    ComponentSchema {
        uid: "blocks.faqs",
        collection_name: "components_blocks_faqs",
        display_name: "Faqs",
        description: "",
        attributes: &[(
            "faq",
            Attribute::Component {
                component: "shared.card",
                repeatable: true,
            },
        )],
    },
    ComponentSchema {
        uid: "blocks.featured-articles",
        collection_name: "components_blocks_featured_articles",
        display_name: "Featured Articles",
        description: "",
        attributes: &[(
            "articles",
            Attribute::Relation {
                relation: RelationKind::OneToMany,
                target: "api::article.article",
            },
        )],
    },
    ComponentSchema {
        uid: "blocks.heading-section",
        collection_name: "components_blocks_heading_sections",
        display_name: "Heading Section",
        description: "",
        attributes: &[
            ("anchorLink", Attribute::String),
            ("heading", Attribute::String),
            ("subHeading", Attribute::String),
        ],
    },
    ComponentSchema {
        uid: "blocks.hero",
        collection_name: "components_blocks_heroes",
        display_name: "Hero",
        description: "",
        attributes: &[
            ("heading", Attribute::String),
            ("image", image()),
            ("links", link(true)),
            ("text", Attribute::RichText),
        ],
    },
    ComponentSchema {
        uid: "blocks.markdown",
        collection_name: "components_blocks_markdowns",
        display_name: "Markdown",
        description: "",
        attributes: &[("content", Attribute::RichText)],
    },
    ComponentSchema {
        uid: "blocks.newsletter",
        collection_name: "components_blocks_newsletters",
        display_name: "Newsletter",
        description: "",
        attributes: &[
            ("formId", Attribute::String),
            ("heading", Attribute::String),
            ("label", Attribute::String),
            ("placeholder", Attribute::String),
            ("text", Attribute::Text),
        ],
    },
    ComponentSchema {
        uid: "blocks.person-card",
        collection_name: "components_blocks_person_cards",
        display_name: "Person Card",
        description: "",
        attributes: &[
            ("image", image()),
            ("personJob", Attribute::String),
            ("personName", Attribute::String),
            ("text", Attribute::Text),
        ],
    },
    ComponentSchema {
        uid: "layout.banner",
        collection_name: "components_layout_banners",
        display_name: "Banner",
        description: "",
        attributes: &[
            ("description", Attribute::Text),
            (
                "isVisible",
                Attribute::Boolean {
                    default: Some(true),
                },
            ),
            ("link", link(false)),
        ],
    },
    ComponentSchema {
        uid: "layout.footer",
        collection_name: "components_layout_footers",
        display_name: "Footer",
        description: "",
        attributes: &[
            ("logo", logo(false)),
            ("navItems", link(true)),
            ("socialLinks", logo(true)),
            ("text", Attribute::Text),
        ],
    },
    ComponentSchema {
        uid: "layout.header",
        collection_name: "components_layout_headers",
        display_name: "Header",
        description: "",
        attributes: &[
            ("cta", link(false)),
            ("logo", logo(false)),
            ("navItems", link(true)),
        ],
    },
    ComponentSchema {
        uid: "shared.card",
        collection_name: "components_shared_cards",
        display_name: "Card",
        description: "",
        attributes: &[("heading", Attribute::String), ("text", Attribute::Text)],
    },
    ComponentSchema {
        uid: "shared.link",
        collection_name: "components_shared_links",
        display_name: "Link",
        description: "",
        attributes: &[
            ("href", Attribute::String),
            (
                "isButtonLink",
                Attribute::Boolean {
                    default: Some(false),
                },
            ),
            (
                "isExternal",
                Attribute::Boolean {
                    default: Some(false),
                },
            ),
            ("label", Attribute::String),
            (
                "type",
                Attribute::Enumeration {
                    values: &["PRIMARY", "SECONDARY"],
                },
            ),
        ],
    },
    ComponentSchema {
        uid: "shared.logo",
        collection_name: "components_shared_logos",
        display_name: "Logo",
        description: "",
        attributes: &[
            ("image", image()),
            ("logoLink", Attribute::String),
            ("logoText", Attribute::String),
        ],
    },
];
