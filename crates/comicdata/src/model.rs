//! Catalog data model
//!
//! Mirrors the comics endpoint of the catalog API: a [`DataWrapper`]
//! envelope around a paged [`DataContainer`] of [`Comic`] records. Keys are
//! lower camel case on the wire and every field is optional. Zero-valued
//! fields are omitted when encoding.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::wire::{is_zero, lenient, lenient_int, lenient_seq};

/// Identifier of a comic in the catalog
pub type ComicId = i64;

/// A single catalog record for one published comic issue
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comic {
    /// Catalog identifier
    #[serde(default, deserialize_with = "lenient_int", skip_serializing_if = "is_zero")]
    pub id: ComicId,

    /// Digital edition identifier (0 when not available digitally)
    #[serde(default, deserialize_with = "lenient_int", skip_serializing_if = "is_zero")]
    pub digital_id: i64,

    /// Canonical title
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "String::is_empty")]
    pub title: String,

    /// Issue number within its series
    #[serde(default, deserialize_with = "lenient_int", skip_serializing_if = "is_zero")]
    pub issue_number: i64,

    /// Description of the variant cover, if any
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "String::is_empty")]
    pub variant_description: String,

    /// Preferred description text
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Publication format ("Comic", "Trade Paperback", ...)
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "String::is_empty")]
    pub format: String,

    /// Number of story pages
    #[serde(default, deserialize_with = "lenient_int", skip_serializing_if = "is_zero")]
    pub page_count: i64,

    /// Canonical API URL of this record
    #[serde(
        rename = "resourceURI",
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "String::is_empty"
    )]
    pub resource_uri: String,

    /// Variant issues of this comic
    #[serde(default, deserialize_with = "lenient_seq", skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<ComicSummary>,

    /// Collections that include this comic
    #[serde(default, deserialize_with = "lenient_seq", skip_serializing_if = "Vec::is_empty")]
    pub collections: Vec<ComicSummary>,

    /// Issues collected in this comic (for collections)
    #[serde(default, deserialize_with = "lenient_seq", skip_serializing_if = "Vec::is_empty")]
    pub collected_issues: Vec<ComicSummary>,

    /// Characters appearing in this comic
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "ItemList::is_empty")]
    pub characters: CharacterList,
}

/// Lightweight reference to a comic or other related entity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComicSummary {
    /// Identifier of the referenced entity, when the API supplies one
    #[serde(default, deserialize_with = "lenient_int", skip_serializing_if = "is_zero")]
    pub id: i64,

    /// Display name
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Canonical API URL of the referenced entity
    #[serde(
        rename = "resourceURI",
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "String::is_empty"
    )]
    pub resource_uri: String,
}

/// Reference to a character appearing in a comic
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSummary {
    #[serde(default, deserialize_with = "lenient_int", skip_serializing_if = "is_zero")]
    pub id: i64,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(
        rename = "resourceURI",
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "String::is_empty"
    )]
    pub resource_uri: String,

    /// Role of the character in the parent entity
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "String::is_empty")]
    pub role: String,
}

/// Paged list of summaries attached to a parent entity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "T: DeserializeOwned + Default"))]
pub struct ItemList<T> {
    #[serde(default, deserialize_with = "lenient_int", skip_serializing_if = "is_zero")]
    pub offset: i64,

    #[serde(default, deserialize_with = "lenient_int", skip_serializing_if = "is_zero")]
    pub limit: i64,

    #[serde(default, deserialize_with = "lenient_int", skip_serializing_if = "is_zero")]
    pub total: i64,

    #[serde(default, deserialize_with = "lenient_int", skip_serializing_if = "is_zero")]
    pub count: i64,

    /// Number of items available upstream
    #[serde(default, deserialize_with = "lenient_int", skip_serializing_if = "is_zero")]
    pub available: i64,

    /// Number of items returned in `items`
    #[serde(default, deserialize_with = "lenient_int", skip_serializing_if = "is_zero")]
    pub returned: i64,

    /// API URL of the full collection
    #[serde(
        rename = "collectionURI",
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "String::is_empty"
    )]
    pub collection_uri: String,

    #[serde(default, deserialize_with = "lenient_seq", skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<T>,
}

impl<T> ItemList<T> {
    /// True when no field carries a value
    pub fn is_empty(&self) -> bool {
        self.offset == 0
            && self.limit == 0
            && self.total == 0
            && self.count == 0
            && self.available == 0
            && self.returned == 0
            && self.collection_uri.is_empty()
            && self.items.is_empty()
    }
}

/// Comics related to a parent entity
pub type ComicList = ItemList<ComicSummary>;

/// Characters related to a parent entity
pub type CharacterList = ItemList<CharacterSummary>;

/// Result page of an API call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "T: DeserializeOwned + Default"))]
pub struct DataContainer<T> {
    #[serde(default, deserialize_with = "lenient_int", skip_serializing_if = "is_zero")]
    pub offset: i64,

    #[serde(default, deserialize_with = "lenient_int", skip_serializing_if = "is_zero")]
    pub limit: i64,

    #[serde(default, deserialize_with = "lenient_int", skip_serializing_if = "is_zero")]
    pub total: i64,

    #[serde(default, deserialize_with = "lenient_int", skip_serializing_if = "is_zero")]
    pub count: i64,

    /// Records in API response order
    #[serde(default, deserialize_with = "lenient_seq", skip_serializing_if = "Vec::is_empty")]
    pub results: Vec<T>,
}

impl<T> DataContainer<T> {
    /// True when no field carries a value
    pub fn is_empty(&self) -> bool {
        self.offset == 0
            && self.limit == 0
            && self.total == 0
            && self.count == 0
            && self.results.is_empty()
    }
}

/// Response envelope returned by every API call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    rename_all = "camelCase",
    bound(deserialize = "T: DeserializeOwned + Default")
)]
pub struct DataWrapper<T> {
    /// HTTP status code of the call
    #[serde(default, deserialize_with = "lenient_int", skip_serializing_if = "is_zero")]
    pub code: i64,

    /// Status description
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "String::is_empty")]
    pub status: String,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "String::is_empty")]
    pub copyright: String,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "String::is_empty")]
    pub attribution_text: String,

    #[serde(
        rename = "attributionHTML",
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "String::is_empty"
    )]
    pub attribution_html: String,

    /// Digest of the response, usable for conditional requests
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "String::is_empty")]
    pub etag: String,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "DataContainer::is_empty")]
    pub data: DataContainer<T>,
}

/// Envelope of the comics endpoint
pub type ComicsResponse = DataWrapper<Comic>;

impl ComicsResponse {
    /// Comics in the result page, in API response order
    pub fn comics(&self) -> &[Comic] {
        &self.data.results
    }

    /// Take ownership of the result page
    pub fn into_comics(self) -> Vec<Comic> {
        self.data.results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comic_camel_case_keys() {
        let comic = Comic {
            id: 7,
            digital_id: 70,
            issue_number: 3,
            page_count: 32,
            resource_uri: "http://example/comics/7".to_string(),
            ..Default::default()
        };

        let value = serde_json::to_value(&comic).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["digitalId"], 70);
        assert_eq!(value["issueNumber"], 3);
        assert_eq!(value["pageCount"], 32);
        assert_eq!(value["resourceURI"], "http://example/comics/7");
    }

    #[test]
    fn test_default_comic_encodes_empty() {
        let value = serde_json::to_value(Comic::default()).unwrap();
        assert_eq!(value, serde_json::json!({}));
    }

    #[test]
    fn test_character_list_items() {
        let list: CharacterList = serde_json::from_str(
            r#"{
                "available": 2,
                "returned": 2,
                "collectionURI": "http://example/comics/1/characters",
                "items": [
                    {"resourceURI": "http://example/characters/1", "name": "Thor", "role": "lead"},
                    {"name": "Loki"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(list.available, 2);
        assert_eq!(list.items.len(), 2);
        assert_eq!(list.items[0].role, "lead");
        assert_eq!(list.items[1].name, "Loki");
        assert!(!list.is_empty());
        assert!(CharacterList::default().is_empty());
    }

    #[test]
    fn test_response_comics_accessors() {
        let mut response = ComicsResponse::default();
        response.data.results.push(Comic {
            id: 1,
            ..Default::default()
        });

        assert_eq!(response.comics().len(), 1);
        assert_eq!(response.into_comics()[0].id, 1);
    }
}
