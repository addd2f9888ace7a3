//! Outbound query parameters in `qs` bracket notation.
//!
//! Strapi parses nested parameters the way the `qs` package writes them:
//! `populate[author][populate][image][fields][0]=url`. Keys are produced in
//! declaration order so requests are reproducible.

use super::{PopulateNode, Relations};
use serde::Serialize;

/// Page-based pagination for collection requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    pub page: u32,
    pub page_size: u32,
}

/// Everything sent with one request besides the path.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Query {
    #[serde(skip_serializing_if = "Relations::is_none")]
    pub populate: Relations,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PageRequest>,
}

impl Query {
    pub fn populate(populate: Relations) -> Self {
        Self {
            populate,
            pagination: None,
        }
    }

    pub fn with_page(mut self, page: u32, page_size: u32) -> Self {
        self.pagination = Some(PageRequest { page, page_size });
        self
    }

    /// Flattens the query into ordered `(key, value)` pairs.
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        encode_relations("populate", &self.populate, &mut params);
        if let Some(page) = self.pagination {
            params.push(("pagination[page]".to_string(), page.page.to_string()));
            params.push((
                "pagination[pageSize]".to_string(),
                page.page_size.to_string(),
            ));
        }
        params
    }

    /// The query string without percent-encoding, for logs.
    pub fn to_query_string(&self) -> String {
        self.to_params()
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&")
    }
}

fn encode_relations(prefix: &str, relations: &Relations, out: &mut Vec<(String, String)>) {
    match relations {
        Relations::None => {}
        Relations::All => out.push((prefix.to_string(), "*".to_string())),
        Relations::Fields(entries) => {
            for (name, node) in entries {
                encode_node(&format!("{}[{}]", prefix, name), node, out);
            }
        }
    }
}

fn encode_node(prefix: &str, node: &PopulateNode, out: &mut Vec<(String, String)>) {
    match node {
        PopulateNode::Include => out.push((prefix.to_string(), "true".to_string())),
        PopulateNode::Select(selection) => {
            for (i, field) in selection.fields.iter().enumerate() {
                out.push((format!("{}[fields][{}]", prefix, i), field.clone()));
            }
            encode_relations(&format!("{}[populate]", prefix), &selection.populate, out);
            for (tag, branch) in &selection.on {
                encode_node(&format!("{}[on][{}]", prefix, tag), branch, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::populate::{article_populate, landing_page_populate};

    #[test]
    fn test_encodes_media_selection() {
        let query = Query::populate(Relations::fields([(
            "author",
            PopulateNode::nested([("image", PopulateNode::media())]),
        )]));
        insta::assert_snapshot!(
            query.to_query_string(),
            @"populate[author][populate][image][fields][0]=url&populate[author][populate][image][fields][1]=alternativeText"
        );
    }

    #[test]
    fn test_encodes_wildcard_and_pagination() {
        let query = Query::populate(Relations::fields([(
            "contentTags",
            PopulateNode::all_relations(),
        )]))
        .with_page(2, 50);
        assert_eq!(
            query.to_params(),
            vec![
                ("populate[contentTags][populate]".to_string(), "*".to_string()),
                ("pagination[page]".to_string(), "2".to_string()),
                ("pagination[pageSize]".to_string(), "50".to_string()),
            ]
        );
    }

    #[test]
    fn test_landing_page_query_starts_with_hero_branch() {
        let params = Query::populate(landing_page_populate()).to_params();
        assert_eq!(
            params[0],
            (
                "populate[blocks][on][blocks.hero][populate][image][fields][0]".to_string(),
                "url".to_string()
            )
        );
        assert!(params.contains(&(
            "populate[blocks][on][blocks.heading-section]".to_string(),
            "true".to_string()
        )));
        assert!(params.contains(&(
            "populate[blocks][on][blocks.newsletter]".to_string(),
            "true".to_string()
        )));
    }

    #[test]
    fn test_article_query_order_follows_declaration() {
        let params = Query::populate(article_populate()).to_params();
        let keys: Vec<&str> = params.iter().map(|(k, _)| k.as_str()).take(3).collect();
        assert_eq!(
            keys,
            vec![
                "populate[featuredImage][fields][0]",
                "populate[featuredImage][fields][1]",
                "populate[author][populate][image][fields][0]",
            ]
        );
    }

    #[test]
    fn test_empty_query_has_no_params() {
        assert!(Query::default().to_params().is_empty());
        assert_eq!(Query::default().to_query_string(), "");
    }
}
