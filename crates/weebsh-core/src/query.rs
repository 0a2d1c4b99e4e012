use crate::error::{Error, Result};
use crate::models::NsfwFilter;

/// Filters for `/images/random`. Either the type or the tags must be given;
/// the variant records which one is required. Values are built through the
/// constructors, which reject a blank required filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RandomImageQuery {
    #[non_exhaustive]
    ByType {
        kind: String,
        tags: Option<String>,
        nsfw: Option<NsfwFilter>,
        hidden: Option<bool>,
    },
    #[non_exhaustive]
    ByTags {
        tags: String,
        kind: Option<String>,
        nsfw: Option<NsfwFilter>,
        hidden: Option<bool>,
    },
}

impl RandomImageQuery {
    /// Fails when `kind` is blank.
    pub fn by_type(kind: impl Into<String>) -> Result<Self> {
        Ok(RandomImageQuery::ByType {
            kind: required("type", kind.into())?,
            tags: None,
            nsfw: None,
            hidden: None,
        })
    }

    /// `tags` is a comma separated list, e.g. `girl,cute`. Fails when blank.
    pub fn by_tags(tags: impl Into<String>) -> Result<Self> {
        Ok(RandomImageQuery::ByTags {
            tags: required("tags", tags.into())?,
            kind: None,
            nsfw: None,
            hidden: None,
        })
    }

    pub fn by_tag_list<I, S>(tags: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::by_tags(join_tags(tags))
    }

    /// Sets the type. A blank value clears an optional type and is rejected
    /// when the type is the required filter.
    pub fn with_type(mut self, value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        match &mut self {
            RandomImageQuery::ByType { kind, .. } => *kind = required("type", value)?,
            RandomImageQuery::ByTags { kind, .. } => *kind = optional(value),
        }
        Ok(self)
    }

    /// Sets the tags. A blank value clears optional tags and is rejected
    /// when the tags are the required filter.
    pub fn with_tags(mut self, value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        match &mut self {
            RandomImageQuery::ByType { tags, .. } => *tags = optional(value),
            RandomImageQuery::ByTags { tags, .. } => *tags = required("tags", value)?,
        }
        Ok(self)
    }

    pub fn with_tag_list<I, S>(self, tags: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.with_tags(join_tags(tags))
    }

    pub fn with_nsfw(mut self, value: NsfwFilter) -> Self {
        match &mut self {
            RandomImageQuery::ByType { nsfw, .. } | RandomImageQuery::ByTags { nsfw, .. } => {
                *nsfw = Some(value)
            }
        }
        self
    }

    pub fn with_hidden(mut self, value: bool) -> Self {
        match &mut self {
            RandomImageQuery::ByType { hidden, .. } | RandomImageQuery::ByTags { hidden, .. } => {
                *hidden = Some(value)
            }
        }
        self
    }

    pub fn kind(&self) -> Option<&str> {
        match self {
            RandomImageQuery::ByType { kind, .. } => Some(kind.as_str()),
            RandomImageQuery::ByTags { kind, .. } => kind.as_deref(),
        }
    }

    pub fn tags(&self) -> Option<&str> {
        match self {
            RandomImageQuery::ByType { tags, .. } => tags.as_deref(),
            RandomImageQuery::ByTags { tags, .. } => Some(tags.as_str()),
        }
    }

    pub fn nsfw(&self) -> Option<NsfwFilter> {
        match self {
            RandomImageQuery::ByType { nsfw, .. } | RandomImageQuery::ByTags { nsfw, .. } => *nsfw,
        }
    }

    pub fn hidden(&self) -> Option<bool> {
        match self {
            RandomImageQuery::ByType { hidden, .. } | RandomImageQuery::ByTags { hidden, .. } => {
                *hidden
            }
        }
    }

    /// Query parameters in the fixed order `type`, `tags`, `nsfw`, `hidden`.
    /// Absent filters contribute nothing; values are left unencoded.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(kind) = self.kind() {
            query.push(("type".to_string(), kind.to_string()));
        }
        if let Some(tags) = self.tags() {
            query.push(("tags".to_string(), tags.to_string()));
        }
        if let Some(nsfw) = self.nsfw() {
            query.push(("nsfw".to_string(), nsfw.to_string()));
        }
        if let Some(hidden) = self.hidden() {
            query.push(("hidden".to_string(), hidden.to_string()));
        }
        query
    }
}

fn join_tags<I, S>(tags: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tags.into_iter()
        .map(|t| t.as_ref().trim().to_string())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(",")
}

fn required(field: &str, value: String) -> Result<String> {
    if value.trim().is_empty() {
        return Err(Error::InvalidConfig(format!(
            "random image query needs a non-empty {field}"
        )));
    }
    Ok(value)
}

fn optional(value: String) -> Option<String> {
    (!value.trim().is_empty()).then_some(value)
}
