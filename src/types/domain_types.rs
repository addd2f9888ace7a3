// src/types/domain_types.rs
//! Domain-specific newtypes for type safety and validation.

use super::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// Validated base URL of the Strapi server (scheme + host, optional path).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedUrl(Url);

impl Serialize for ValidatedUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.as_str().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ValidatedUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ValidatedUrl::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl ValidatedUrl {
    /// Create a new validated URL
    pub fn parse(url: &str) -> Result<Self, ValidationError> {
        match Url::parse(url) {
            Ok(parsed_url) => {
                if parsed_url.scheme() != "http" && parsed_url.scheme() != "https" {
                    return Err(ValidationError::InvalidUrl {
                        url: url.to_string(),
                        reason: "Only HTTP and HTTPS URLs are supported".to_string(),
                    });
                }
                if parsed_url.query().is_some() || parsed_url.fragment().is_some() {
                    return Err(ValidationError::InvalidUrl {
                        url: url.to_string(),
                        reason: "Base URL must not carry a query or fragment".to_string(),
                    });
                }
                Ok(Self(parsed_url))
            }
            Err(e) => Err(ValidationError::InvalidUrl {
                url: url.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Joins path segments onto the URL, normalising slashes.
    ///
    /// `http://host:1337/` + `["api", "global"]` → `http://host:1337/api/global`
    pub fn join_segments(&self, segments: &[&str]) -> String {
        let mut joined = self.0.as_str().trim_end_matches('/').to_string();
        for segment in segments {
            let segment = segment.trim_matches('/');
            if segment.is_empty() {
                continue;
            }
            joined.push('/');
            joined.push_str(segment);
        }
        joined
    }
}

impl fmt::Display for ValidatedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A Strapi content-type API identifier, e.g. `article` / `articles`.
///
/// Lowercase kebab-case, as Strapi requires for REST routes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentTypeName(String);

impl ContentTypeName {
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();

        if name.is_empty() {
            return Err(ValidationError::InvalidContentType {
                name,
                reason: "Content type name cannot be empty".to_string(),
            });
        }

        let valid = name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
        if !valid || name.starts_with('-') || name.ends_with('-') {
            return Err(ValidationError::InvalidContentType {
                name,
                reason: "Only lowercase letters, digits and inner hyphens are allowed".to_string(),
            });
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The collection route for this singular API id (`article` → `articles`).
    pub fn pluralize(&self) -> String {
        if self.0.ends_with('s') {
            self.0.clone()
        } else if let Some(stem) = self.0.strip_suffix('y') {
            format!("{}ies", stem)
        } else {
            format!("{}s", self.0)
        }
    }
}

impl fmt::Display for ContentTypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_validation() {
        assert!(ValidatedUrl::parse("https://cms.example.com").is_ok());
        assert!(ValidatedUrl::parse("http://localhost:1337").is_ok());
        assert!(ValidatedUrl::parse("ftp://example.com").is_err());
        assert!(ValidatedUrl::parse("not a url").is_err());
        assert!(ValidatedUrl::parse("http://localhost:1337/?x=1").is_err());
    }

    #[test]
    fn test_join_segments() {
        let url = ValidatedUrl::parse("http://localhost:1337/").unwrap();
        assert_eq!(
            url.join_segments(&["api", "/global"]),
            "http://localhost:1337/api/global"
        );

        let nested = ValidatedUrl::parse("https://example.com/cms").unwrap();
        assert_eq!(
            nested.join_segments(&["api", "articles"]),
            "https://example.com/cms/api/articles"
        );
    }

    #[test]
    fn test_content_type_name_validation() {
        assert!(ContentTypeName::new("article").is_ok());
        assert!(ContentTypeName::new("landing-page").is_ok());
        assert!(ContentTypeName::new("").is_err());
        assert!(ContentTypeName::new("Article").is_err());
        assert!(ContentTypeName::new("-page").is_err());
        assert!(ContentTypeName::new("blog post").is_err());
    }

    #[test]
    fn test_pluralize() {
        let plural = |s: &str| ContentTypeName::new(s).unwrap().pluralize();
        assert_eq!(plural("article"), "articles");
        assert_eq!(plural("page"), "pages");
        assert_eq!(plural("category"), "categories");
        assert_eq!(plural("news"), "news");
    }
}
