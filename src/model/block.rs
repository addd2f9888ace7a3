use super::blocks::*;
use super::common::BlockMeta;
use super::shape::{RelationShape, Shape};
use crate::constants::COMPONENT_DISCRIMINATOR;
use crate::types::ValidationError;
use serde::de::{DeserializeOwned, Error as DeError};
use serde::ser::Error as SerError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Macro to reduce boilerplate in Block enum methods
macro_rules! match_all_blocks {
    ($self:expr, $pattern:pat => $result:expr) => {
        match $self {
            Block::Hero($pattern) => $result,
            Block::HeadingSection($pattern) => $result,
            Block::CardGrid($pattern) => $result,
            Block::ContentWithImage($pattern) => $result,
            Block::Faqs($pattern) => $result,
            Block::PersonCard($pattern) => $result,
            Block::Markdown($pattern) => $result,
            Block::FeaturedArticles($pattern) => $result,
            Block::Newsletter($pattern) => $result,
            Block::Unknown($pattern) => $result,
        }
    };
}

/// The closed set of block components a page or article can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentType {
    Hero,
    HeadingSection,
    CardGrid,
    ContentWithImage,
    Faqs,
    PersonCard,
    Markdown,
    FeaturedArticles,
    Newsletter,
}

impl ComponentType {
    pub const ALL: [ComponentType; 9] = [
        ComponentType::Hero,
        ComponentType::HeadingSection,
        ComponentType::CardGrid,
        ComponentType::ContentWithImage,
        ComponentType::Faqs,
        ComponentType::PersonCard,
        ComponentType::Markdown,
        ComponentType::FeaturedArticles,
        ComponentType::Newsletter,
    ];

    /// The `__component` value Strapi uses for this block.
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentType::Hero => "blocks.hero",
            ComponentType::HeadingSection => "blocks.heading-section",
            ComponentType::CardGrid => "blocks.card-grid",
            ComponentType::ContentWithImage => "blocks.content-with-image",
            ComponentType::Faqs => "blocks.faqs",
            ComponentType::PersonCard => "blocks.person-card",
            ComponentType::Markdown => "blocks.markdown",
            ComponentType::FeaturedArticles => "blocks.featured-articles",
            ComponentType::Newsletter => "blocks.newsletter",
        }
    }

    pub fn parse(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == tag)
    }

    /// Relations the variant's type expects to be populated.
    pub fn relation_shape(&self) -> Shape {
        match self {
            ComponentType::Hero => HeroBlock::relation_shape(),
            ComponentType::HeadingSection => HeadingSectionBlock::relation_shape(),
            ComponentType::CardGrid => CardGridBlock::relation_shape(),
            ComponentType::ContentWithImage => ContentWithImageBlock::relation_shape(),
            ComponentType::Faqs => FaqsBlock::relation_shape(),
            ComponentType::PersonCard => PersonCardBlock::relation_shape(),
            ComponentType::Markdown => MarkdownBlock::relation_shape(),
            ComponentType::FeaturedArticles => FeaturedArticlesBlock::relation_shape(),
            ComponentType::Newsletter => NewsletterBlock::relation_shape(),
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ComponentType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ValidationError::UnknownComponent(s.to_string()))
    }
}

/// One entry of a page's or article's `blocks` dynamic zone.
///
/// Discriminated by `__component`. A tag outside [`ComponentType::ALL`]
/// becomes [`Block::Unknown`] carrying only the common attributes.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Hero(HeroBlock),
    HeadingSection(HeadingSectionBlock),
    CardGrid(CardGridBlock),
    ContentWithImage(ContentWithImageBlock),
    Faqs(FaqsBlock),
    PersonCard(PersonCardBlock),
    Markdown(MarkdownBlock),
    FeaturedArticles(FeaturedArticlesBlock),
    Newsletter(NewsletterBlock),
    Unknown(UnknownBlock),
}

impl Block {
    /// Get common block data
    pub fn meta(&self) -> &BlockMeta {
        match_all_blocks!(self, b => &b.meta)
    }

    pub fn id(&self) -> Option<u64> {
        self.meta().id
    }

    /// The `__component` tag, including tags outside the known set.
    pub fn component(&self) -> &str {
        match self {
            Block::Unknown(b) => &b.component,
            known => known
                .component_type()
                .map(|t| t.as_str())
                .unwrap_or_default(),
        }
    }

    pub fn component_type(&self) -> Option<ComponentType> {
        match self {
            Block::Hero(_) => Some(ComponentType::Hero),
            Block::HeadingSection(_) => Some(ComponentType::HeadingSection),
            Block::CardGrid(_) => Some(ComponentType::CardGrid),
            Block::ContentWithImage(_) => Some(ComponentType::ContentWithImage),
            Block::Faqs(_) => Some(ComponentType::Faqs),
            Block::PersonCard(_) => Some(ComponentType::PersonCard),
            Block::Markdown(_) => Some(ComponentType::Markdown),
            Block::FeaturedArticles(_) => Some(ComponentType::FeaturedArticles),
            Block::Newsletter(_) => Some(ComponentType::Newsletter),
            Block::Unknown(_) => None,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Block::Unknown(_))
    }

    /// Builds a block from one dynamic-zone JSON object.
    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        let tag = match value.get(COMPONENT_DISCRIMINATOR) {
            Some(serde_json::Value::String(tag)) => tag.clone(),
            Some(_) => {
                return Err(<serde_json::Error as DeError>::custom(format!(
                    "`{}` must be a string",
                    COMPONENT_DISCRIMINATOR
                )))
            }
            None => {
                return Err(<serde_json::Error as DeError>::custom(format!(
                    "missing `{}` discriminator",
                    COMPONENT_DISCRIMINATOR
                )))
            }
        };

        fn variant<T: DeserializeOwned>(value: serde_json::Value) -> serde_json::Result<T> {
            serde_json::from_value(value)
        }

        let block = match ComponentType::parse(&tag) {
            Some(ComponentType::Hero) => Block::Hero(variant(value)?),
            Some(ComponentType::HeadingSection) => Block::HeadingSection(variant(value)?),
            Some(ComponentType::CardGrid) => Block::CardGrid(variant(value)?),
            Some(ComponentType::ContentWithImage) => Block::ContentWithImage(variant(value)?),
            Some(ComponentType::Faqs) => Block::Faqs(variant(value)?),
            Some(ComponentType::PersonCard) => Block::PersonCard(variant(value)?),
            Some(ComponentType::Markdown) => Block::Markdown(variant(value)?),
            Some(ComponentType::FeaturedArticles) => Block::FeaturedArticles(variant(value)?),
            Some(ComponentType::Newsletter) => Block::Newsletter(variant(value)?),
            None => {
                log::debug!("Keeping only common attributes of unknown block {}", tag);
                let mut unknown: UnknownBlock = variant(value)?;
                unknown.component = tag;
                Block::Unknown(unknown)
            }
        };
        Ok(block)
    }

    /// Serialises the block back to its dynamic-zone JSON form.
    pub fn to_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        let mut value = match_all_blocks!(self, b => serde_json::to_value(b)?);
        match value.as_object_mut() {
            Some(object) => {
                object.insert(
                    COMPONENT_DISCRIMINATOR.to_string(),
                    serde_json::Value::String(self.component().to_string()),
                );
            }
            None => {
                return Err(<serde_json::Error as DeError>::custom(
                    "block did not serialise to an object",
                ))
            }
        }
        Ok(value)
    }
}

impl RelationShape for Block {
    fn relation_shape() -> Shape {
        Shape::Zone(
            ComponentType::ALL
                .iter()
                .map(|t| (t.as_str(), t.relation_shape()))
                .collect(),
        )
    }
}

impl Serialize for Block {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_value()
            .map_err(S::Error::custom)?
            .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Block {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Block::from_value(value).map_err(D::Error::custom)
    }
}
