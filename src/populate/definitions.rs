//! The site's populate trees.
//!
//! `blocks_populate` is the one definition of the per-block rules; every
//! record type with a `blocks` dynamic zone reuses it.

use super::{PopulateNode, Relations};
use crate::model::ComponentType;
use once_cell::sync::Lazy;

static BLOCKS_POPULATE: Lazy<PopulateNode> = Lazy::new(|| {
    PopulateNode::dynamic_zone(
        ComponentType::ALL
            .iter()
            .map(|tag| (tag.as_str(), block_branch(*tag))),
    )
});

/// Populate rules for one block variant.
///
/// Exhaustive over [`ComponentType`]: adding a variant without a branch
/// does not compile.
fn block_branch(tag: ComponentType) -> PopulateNode {
    match tag {
        ComponentType::Hero => PopulateNode::nested([
            ("image", PopulateNode::media()),
            ("links", PopulateNode::include()),
        ]),
        ComponentType::HeadingSection => PopulateNode::include(),
        ComponentType::CardGrid => PopulateNode::nested([("card", PopulateNode::include())]),
        ComponentType::ContentWithImage => PopulateNode::nested([
            ("image", PopulateNode::media()),
            ("link", PopulateNode::include()),
        ]),
        ComponentType::Faqs => PopulateNode::nested([("faq", PopulateNode::include())]),
        ComponentType::PersonCard => PopulateNode::nested([("image", PopulateNode::media())]),
        ComponentType::Markdown => PopulateNode::include(),
        ComponentType::FeaturedArticles => PopulateNode::nested([(
            "articles",
            PopulateNode::nested([
                ("featuredImage", PopulateNode::media()),
                ("author", author_with_image()),
            ]),
        )]),
        ComponentType::Newsletter => PopulateNode::include(),
    }
}

fn author_with_image() -> PopulateNode {
    PopulateNode::nested([("image", PopulateNode::media())])
}

fn logo_with_image() -> PopulateNode {
    PopulateNode::nested([("image", PopulateNode::media())])
}

/// The `on` map for a `blocks` dynamic zone.
pub fn blocks_populate() -> &'static PopulateNode {
    &BLOCKS_POPULATE
}

/// The `global` single type: banner, header and footer with their logos and links.
pub fn global_populate() -> Relations {
    Relations::fields([
        (
            "banner",
            PopulateNode::nested([(
                "link",
                PopulateNode::fields(["href", "label", "isExternal"]),
            )]),
        ),
        (
            "header",
            PopulateNode::nested([
                ("logo", logo_with_image()),
                ("navItems", PopulateNode::include()),
                ("cta", PopulateNode::include()),
            ]),
        ),
        (
            "footer",
            PopulateNode::nested([
                ("logo", logo_with_image()),
                ("navItems", PopulateNode::include()),
                ("socialLinks", logo_with_image()),
            ]),
        ),
    ])
}

/// The `landing-page` single type.
pub fn landing_page_populate() -> Relations {
    Relations::fields([("blocks", blocks_populate().clone())])
}

/// Entries of the `page` collection.
pub fn page_populate() -> Relations {
    Relations::fields([("blocks", blocks_populate().clone())])
}

/// Entries of the `article` collection.
pub fn article_populate() -> Relations {
    Relations::fields([
        ("featuredImage", PopulateNode::media()),
        ("author", author_with_image()),
        ("contentTags", PopulateNode::all_relations()),
        ("blocks", blocks_populate().clone()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_every_variant_has_a_branch() {
        let blocks = blocks_populate();
        for tag in ComponentType::ALL {
            assert!(
                blocks.variant(tag.as_str()).is_some(),
                "missing branch for {}",
                tag
            );
        }
        assert_eq!(blocks.as_selection().unwrap().on.len(), ComponentType::ALL.len());
    }

    #[test]
    fn test_unknown_variant_has_no_branch() {
        assert!(blocks_populate().variant("blocks.testimonial").is_none());
    }

    #[test]
    fn test_featured_articles_branch() {
        let value = serde_json::to_value(
            blocks_populate()
                .variant("blocks.featured-articles")
                .unwrap(),
        )
        .unwrap();
        assert_eq!(
            value,
            json!({
                "populate": {
                    "articles": {
                        "populate": {
                            "featuredImage": { "fields": ["url", "alternativeText"] },
                            "author": {
                                "populate": {
                                    "image": { "fields": ["url", "alternativeText"] }
                                }
                            }
                        }
                    }
                }
            })
        );
    }

    #[test]
    fn test_page_and_landing_share_blocks_definition() {
        assert_eq!(page_populate(), landing_page_populate());
        assert_eq!(article_populate().get("blocks"), Some(blocks_populate()));
    }

    #[test]
    fn test_global_banner_link_fields() {
        let value = serde_json::to_value(global_populate()).unwrap();
        assert_eq!(
            value["banner"],
            json!({ "populate": { "link": { "fields": ["href", "label", "isExternal"] } } })
        );
        assert_eq!(value["header"]["populate"]["navItems"], json!(true));
        assert_eq!(
            value["footer"]["populate"]["socialLinks"]["populate"]["image"],
            json!({ "fields": ["url", "alternativeText"] })
        );
    }
}
