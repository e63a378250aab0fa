use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;
use serde_with::DefaultOnError;
use serde_with::VecSkipError;
use serde_with::serde_as;
use time::Date;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;

/// One project as returned by the showcase backend.
///
/// Every field is optional on the wire. A field holding the wrong JSON type
/// decodes to its default instead of rejecting the record, and list entries
/// that fail to decode are dropped. Engine code reads through the accessor
/// methods, which apply the documented defaults.
#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectRecord {
    #[serde(rename = "_id")]
    #[serde_as(as = "DefaultOnError")]
    pub id: String,
    /// Virtual `id` that some documents carry next to, or instead of, `_id`.
    #[serde(rename = "id", skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "DefaultOnError")]
    pub id_alias: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub title: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub description: Option<String>,
    #[serde(rename = "abstract")]
    #[serde_as(as = "DefaultOnError")]
    pub abstract_text: Option<String>,
    #[serde_as(as = "DefaultOnError<VecSkipError<_>>")]
    pub contributors: Vec<Contributor>,
    #[serde_as(as = "DefaultOnError<VecSkipError<_>>")]
    pub technologies_used: Vec<String>,
    #[serde_as(as = "DefaultOnError<VecSkipError<_>>")]
    pub tags: Vec<String>,
    #[serde_as(as = "DefaultOnError")]
    pub department: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub status: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub academic_year: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub created_at: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub updated_at: Option<String>,
    /// Either a creator id or a populated user document.
    pub creator: Option<Value>,
    #[serde_as(as = "DefaultOnError")]
    pub source_code_url: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub thumbnail_url: Option<String>,
    #[serde_as(as = "DefaultOnError<VecSkipError<_>>")]
    pub images: Vec<String>,
    #[serde_as(as = "DefaultOnError<VecSkipError<_>>")]
    pub categories: Vec<String>,
}

impl ProjectRecord {
    /// `_id` when present, else the virtual `id`.
    pub fn id(&self) -> &str {
        match self.id.as_str() {
            "" => self.id_alias.as_deref().unwrap_or_default(),
            id => id,
        }
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    pub fn abstract_text(&self) -> &str {
        self.abstract_text.as_deref().unwrap_or_default()
    }

    pub fn department(&self) -> Option<&str> {
        self.department.as_deref()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn academic_year(&self) -> Option<&str> {
        self.academic_year.as_deref()
    }

    /// Parsed `createdAt`; `None` stands for the invalid date.
    pub fn created_at(&self) -> Option<OffsetDateTime> {
        self.created_at.as_deref().and_then(parse_timestamp)
    }

    /// Strings the free-text search looks at besides title/description/abstract.
    pub fn contributor_terms(&self) -> impl Iterator<Item = &str> {
        self.contributors
            .iter()
            .flat_map(Contributor::search_terms)
    }

    /// `creator` as an id, whether the backend sent the id or the populated user.
    pub fn creator_id(&self) -> Option<&str> {
        match self.creator.as_ref()? {
            Value::String(id) => Some(id.as_str()),
            Value::Object(user) => user.get("_id").or_else(|| user.get("id"))?.as_str(),
            _ => None,
        }
    }
}

/// Parses the timestamp formats the backend emits: RFC 3339, or a bare
/// calendar date taken as midnight UTC.
pub fn parse_timestamp(raw: &str) -> Option<OffsetDateTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(timestamp) = OffsetDateTime::parse(trimmed, &Rfc3339) {
        return Some(timestamp);
    }
    Date::parse(trimmed, format_description!("[year]-[month]-[day]"))
        .ok()
        .map(|date| date.midnight().assume_utc())
}

/// A contributor entry: older records store plain names, newer ones store
/// an object with optional name, email and role.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Contributor {
    Name(String),
    Profile(ContributorProfile),
}

#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContributorProfile {
    #[serde_as(as = "DefaultOnError")]
    pub name: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub email: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub role: Option<String>,
}

impl Contributor {
    /// Name and email; role is not searchable.
    pub fn search_terms(&self) -> impl Iterator<Item = &str> {
        let (first, second) = match self {
            Contributor::Name(name) => (Some(name.as_str()), None),
            Contributor::Profile(profile) => (profile.name.as_deref(), profile.email.as_deref()),
        };
        first.into_iter().chain(second)
    }

    pub fn display_name(&self) -> &str {
        match self {
            Contributor::Name(name) if !name.is_empty() => name.as_str(),
            Contributor::Name(_) => "Contributor",
            Contributor::Profile(profile) => profile
                .name
                .as_deref()
                .filter(|name| !name.is_empty())
                .or_else(|| profile.email.as_deref().filter(|email| !email.is_empty()))
                .unwrap_or("Contributor"),
        }
    }

    pub fn role(&self) -> Option<&str> {
        match self {
            Contributor::Name(_) => None,
            Contributor::Profile(profile) => profile.role.as_deref(),
        }
    }
}
