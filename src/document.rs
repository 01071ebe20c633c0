use std::io::Read;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Result;

/// A titled block of body text. Order within a document is meaningful.
/// A missing or `null` title or content reads as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,
}

impl Section {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// The content being scored.
///
/// Deserializes from the storage backend's camelCase shape. Fields unrelated
/// to scoring (ids, author, timestamps, image, version history) are ignored.
/// `sections`, `keywords` and `seoTags` must be present and non-null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub topic: String,
    pub sections: Vec<Section>,
    #[serde(
        default,
        alias = "meta_description",
        deserialize_with = "null_as_empty"
    )]
    pub meta_description: String,
    pub keywords: Vec<String>,
    #[serde(alias = "seo_tags")]
    pub seo_tags: Vec<String>,
}

impl Document {
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Section contents joined by a single space, in section order.
    pub fn combined_text(&self) -> String {
        self.sections
            .iter()
            .map(|s| s.content.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
