use super::components::BLOCK_COMPONENTS;
use super::{Attribute, ContentKind, ContentTypeSchema, RelationKind};

const BLOCKS: Attribute = Attribute::DynamicZone {
    components: BLOCK_COMPONENTS,
};

const IMAGE: Attribute = Attribute::Media {
    multiple: false,
    allowed_types: &["images"],
};

pub static CONTENT_TYPES: &[ContentTypeSchema] = &[
    ContentTypeSchema {
        uid: "api::global.global",
        kind: ContentKind::Single,
        collection_name: "globals",
        singular_name: "global",
        plural_name: "globals",
        display_name: "Global",
        draft_and_publish: false,
        attributes: &[
            ("title", Attribute::String),
            ("description", Attribute::Text),
            (
                "banner",
                Attribute::Component {
                    component: "layout.banner",
                    repeatable: false,
                },
            ),
            (
                "header",
                Attribute::Component {
                    component: "layout.header",
                    repeatable: false,
                },
            ),
            (
                "footer",
                Attribute::Component {
                    component: "layout.footer",
                    repeatable: false,
                },
            ),
        ],
    },
    ContentTypeSchema {
        uid: "api::landing-page.landing-page",
        kind: ContentKind::Single,
        collection_name: "landing_pages",
        singular_name: "landing-page",
        plural_name: "landing-pages",
        display_name: "Landing Page",
        draft_and_publish: true,
        attributes: &[
            ("title", Attribute::String),
            ("description", Attribute::Text),
            ("blocks", BLOCKS),
        ],
    },
    ContentTypeSchema {
        uid: "api::page.page",
        kind: ContentKind::Collection,
        collection_name: "pages",
        singular_name: "page",
        plural_name: "pages",
        display_name: "Page",
        draft_and_publish: true,
        attributes: &[
            ("title", Attribute::String),
            ("description", Attribute::Text),
            (
                "slug",
                Attribute::Uid {
                    target_field: "title",
                },
            ),
            ("blocks", BLOCKS),
        ],
    },
    ContentTypeSchema {
        uid: "api::article.article",
        kind: ContentKind::Collection,
        collection_name: "articles",
        singular_name: "article",
        plural_name: "articles",
        display_name: "Article",
        draft_and_publish: true,
        attributes: &[
            ("title", Attribute::String),
            ("description", Attribute::Text),
            (
                "slug",
                Attribute::Uid {
                    target_field: "title",
                },
            ),
            ("featuredImage", IMAGE),
            (
                "author",
                Attribute::Relation {
                    relation: RelationKind::ManyToOne,
                    target: "api::author.author",
                },
            ),
            (
                "contentTags",
                Attribute::Relation {
                    relation: RelationKind::ManyToMany,
                    target: "api::tag.tag",
                },
            ),
            ("blocks", BLOCKS),
        ],
    },
    ContentTypeSchema {
        uid: "api::author.author",
        kind: ContentKind::Collection,
        collection_name: "authors",
        singular_name: "author",
        plural_name: "authors",
        display_name: "Author",
        draft_and_publish: false,
        attributes: &[
            ("fullName", Attribute::String),
            ("image", IMAGE),
            (
                "articles",
                Attribute::Relation {
                    relation: RelationKind::OneToMany,
                    target: "api::article.article",
                },
            ),
        ],
    },
    ContentTypeSchema {
        uid: "api::tag.tag",
        kind: ContentKind::Collection,
        collection_name: "tags",
        singular_name: "tag",
        plural_name: "tags",
        display_name: "Tag",
        draft_and_publish: false,
        attributes: &[
            ("title", Attribute::String),
            (
                "articles",
                Attribute::Relation {
                    relation: RelationKind::ManyToMany,
                    target: "api::article.article",
                },
            ),
        ],
    },
];
