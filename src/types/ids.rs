use super::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque Strapi v5 document identifier (`documentId`).
///
/// Stable across drafts, locales and publications of the same document.
/// This layer never interprets it beyond equality and display.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentId(String);

impl DocumentId {
    /// Parse a document identifier, rejecting blank values and whitespace.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyField("documentId"));
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(ValidationError::InvalidDocumentId(input.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for DocumentId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for DocumentId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        DocumentId::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_id_parsing() {
        let id = DocumentId::parse("  zx7ak1p2tyv0mw9ur3f4q6cb ").unwrap();
        assert_eq!(id.as_str(), "zx7ak1p2tyv0mw9ur3f4q6cb");
        assert!(DocumentId::parse("").is_err());
        assert!(DocumentId::parse("   ").is_err());
        assert!(DocumentId::parse("two words").is_err());
    }

    #[test]
    fn test_document_id_serde_is_transparent() {
        let id: DocumentId = serde_json::from_str("\"abc123\"").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc123\"");
        assert!(serde_json::from_str::<DocumentId>("\"\"").is_err());
    }
}
