// src/analytics/mod.rs
//! Content measurement for loaded records.

use crate::collections::Collections;
use crate::model::{Block, ComponentType};
use indexmap::IndexMap;
use std::fmt;

/// Quick statistics for user-facing progress messages.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentSummary {
    pub posts: usize,
    pub pages: usize,
    pub blocks: usize,
}

/// Block counts by component tag, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlockCensus {
    pub by_component: IndexMap<String, usize>,
    /// Blocks whose tag is outside the known set.
    pub unknown: usize,
}

impl BlockCensus {
    pub fn record(&mut self, block: &Block) {
        *self
            .by_component
            .entry(block.component().to_string())
            .or_insert(0) += 1;
        if !block.is_known() {
            self.unknown += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.by_component.values().sum()
    }

    pub fn count(&self, tag: ComponentType) -> usize {
        self.by_component.get(tag.as_str()).copied().unwrap_or(0)
    }
}

impl fmt::Display for BlockCensus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .by_component
            .iter()
            .map(|(tag, count)| format!("{}×{}", tag, count))
            .collect();
        write!(f, "{} block(s)", self.total())?;
        if !parts.is_empty() {
            write!(f, ": {}", parts.join(", "))?;
        }
        Ok(())
    }
}

/// Counts blocks by component.
pub fn measure_blocks(blocks: &[Block]) -> BlockCensus {
    let mut census = BlockCensus::default();
    for block in blocks {
        census.record(block);
    }
    census
}

/// Block census across both collections.
pub fn measure_collections(collections: &Collections) -> BlockCensus {
    let mut census = BlockCensus::default();
    let post_blocks = collections.posts.iter().flat_map(|e| e.data.blocks.iter());
    let page_blocks = collections.pages.iter().flat_map(|e| e.data.blocks.iter());
    for block in post_blocks.chain(page_blocks) {
        census.record(block);
    }
    census
}

pub fn measure_content(collections: &Collections) -> ContentSummary {
    ContentSummary {
        posts: collections.posts.len(),
        pages: collections.pages.len(),
        blocks: measure_collections(collections).total(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collections::ContentEntry;
    use crate::model::Page;
    use serde_json::json;

    fn block(tag: &str) -> Block {
        Block::from_value(json!({ "__component": tag, "id": 1 })).unwrap()
    }

    #[test]
    fn test_census_counts_by_tag() {
        let census = measure_blocks(&[
            block("blocks.hero"),
            block("blocks.markdown"),
            block("blocks.hero"),
            block("blocks.testimonial"),
        ]);
        assert_eq!(census.count(ComponentType::Hero), 2);
        assert_eq!(census.count(ComponentType::Faqs), 0);
        assert_eq!(census.unknown, 1);
        assert_eq!(census.total(), 4);
        assert_eq!(
            census.to_string(),
            "4 block(s): blocks.hero×2, blocks.markdown×1, blocks.testimonial×1"
        );
    }

    #[test]
    fn test_empty_collections() {
        let summary = measure_content(&Collections::default());
        assert_eq!(summary, ContentSummary::default());
        assert_eq!(BlockCensus::default().to_string(), "0 block(s)");
    }

    #[test]
    fn test_summary_spans_collections() {
        let page = Page {
            blocks: vec![block("blocks.faqs"), block("blocks.newsletter")],
            ..Page::default()
        };
        let collections = Collections {
            posts: Vec::new(),
            pages: vec![ContentEntry {
                id: "p1".to_string(),
                data: page,
            }],
        };
        assert_eq!(
            measure_content(&collections),
            ContentSummary {
                posts: 0,
                pages: 1,
                blocks: 2
            }
        );
    }
}
