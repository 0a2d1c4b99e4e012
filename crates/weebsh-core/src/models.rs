use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use strum::{Display, EnumString};

/// An image record as returned by `/images/info/{id}` and `/images/random`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub base_type: String,
    pub file_type: String,
    pub mime_type: String,
    pub nsfw: bool,
    /// Id of the account that uploaded the image.
    pub account: String,
    /// Whether the image is private to the uploader.
    pub hidden: bool,
    pub url: String,
    #[serde(default)]
    pub tags: Vec<ImageTag>,
}

/// A tag attached to an image or listed by `/images/tags`.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ImageTagRepr")]
pub struct ImageTag {
    pub name: String,
    /// Whether the tag is private and only visible to its creator.
    pub hidden: bool,
    /// Id of the account that created the tag.
    pub user: Option<String>,
}

// The tags endpoint lists bare names while image records embed full objects.
#[derive(Deserialize)]
#[serde(untagged)]
enum ImageTagRepr {
    Name(String),
    Full {
        name: String,
        #[serde(default)]
        hidden: bool,
        #[serde(default)]
        user: Option<String>,
    },
}

impl From<ImageTagRepr> for ImageTag {
    fn from(repr: ImageTagRepr) -> Self {
        match repr {
            ImageTagRepr::Name(name) => ImageTag {
                name,
                hidden: false,
                user: None,
            },
            ImageTagRepr::Full { name, hidden, user } => ImageTag { name, hidden, user },
        }
    }
}

/// Envelope of `/images/types`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeListing {
    pub types: Vec<String>,
}

/// Envelope of `/images/tags`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagListing {
    pub tags: Vec<ImageTag>,
}

/// Which images the random endpoint may return with respect to nsfw content.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum NsfwFilter {
    /// Only images that are not nsfw.
    False,
    /// Both nsfw and non-nsfw images.
    True,
    /// Only nsfw images.
    Only,
}

/// Error envelope returned by the service on non-success statuses.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub status: Option<u16>,
    pub message: Option<String>,
    pub error: Option<String>,
}

impl ApiErrorBody {
    pub fn into_message(self) -> Option<String> {
        self.message
            .or(self.error)
            .filter(|m| !m.trim().is_empty())
    }
}
