//! # Records exchanged with the site backend
//!
//! The backend owns and persists four flat, unrelated collections. The types here
//! are the client's transient copies of them plus the payloads the client sends.
//! Field names follow the backend's JSON (`_id`, camelCase), so every record
//! type is `Serialize + Deserialize` with `rename_all = "camelCase"`.
//!
//! ## Records
//!
//! | Struct | Collection | Notes |
//! |--------|-----------|-------|
//! | [`Project`] | `/projects` | `image` is a server path or an absolute URL. |
//! | [`Client`] | `/clients` | A testimonial: adds `designation`. |
//! | [`ContactMessage`] | `/contact` | Read-only once created. |
//! | [`Subscription`] | `/newsletter` | Read-only once created. |
//!
//! ## Payloads
//!
//! - [`ContactForm`] is posted as JSON.
//! - [`ProjectDraft`] / [`ClientDraft`] become multipart text fields, with an
//!   optional [`ImageUpload`] attached as the `image` part.
//!
//! List endpoints wrap their records in an [`Envelope`]; error responses may carry
//! an [`ErrorBody`].
//!
//! Decoding is forgiving. Text fields accept null, numbers or nothing at all,
//! an unparseable `createdAt` becomes `None`, and a list entry that still cannot
//! be read is skipped so the rest of its collection survives.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A portfolio project shown on the landing page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id", alias = "id", default, deserialize_with = "lenient::text")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub image: Option<String>,
}

/// A client testimonial.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    #[serde(rename = "_id", alias = "id", default, deserialize_with = "lenient::text")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub designation: String,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub image: Option<String>,
}

/// A submission of the public contact form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    #[serde(rename = "_id", alias = "id", default, deserialize_with = "lenient::text")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub full_name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub mobile_number: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub city: String,
    #[serde(default, deserialize_with = "lenient::timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

/// A newsletter subscription.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    #[serde(rename = "_id", alias = "id", default, deserialize_with = "lenient::text")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient::timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

/// `{ "data": [...] }` wrapper used by every list endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    #[serde(default = "Vec::new", deserialize_with = "lenient::records")]
    pub data: Vec<T>,
}

impl<T> Envelope<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }
}

/// `{ "data": {...} }` wrapper used by the single-record endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Single<T> {
    pub data: T,
}

/// Optional error payload on non-2xx responses.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// The four text fields of the public contact form.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    pub full_name: String,
    pub email: String,
    pub mobile_number: String,
    pub city: String,
}

/// Text fields for creating or updating a project.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectDraft {
    pub name: String,
    pub description: String,
}

impl ProjectDraft {
    /// Multipart text fields, in form order.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.clone()),
            ("description", self.description.clone()),
        ]
    }
}

/// Text fields for creating or updating a client testimonial.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClientDraft {
    pub name: String,
    pub description: String,
    pub designation: String,
}

impl ClientDraft {
    /// Multipart text fields, in form order.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.clone()),
            ("description", self.description.clone()),
            ("designation", self.designation.clone()),
        ]
    }
}

/// An image picked in the admin form, attached as the multipart `image` part.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = content_type_from_name(&file_name).map(str::to_string);
        Self {
            file_name,
            content_type,
            bytes,
        }
    }
}

/// Guess an image MIME type from a file extension.
pub fn content_type_from_name(file_name: &str) -> Option<&'static str> {
    let ext = file_name.rsplit_once('.')?.1.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "svg" => Some("image/svg+xml"),
        _ => None,
    }
}

mod lenient {
    use chrono::{DateTime, Utc};
    use serde::de::IgnoredAny;
    use serde::{Deserialize, Deserializer};

    /// Any JSON scalar, read back as text.
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Int(i64),
        Float(f64),
        Bool(bool),
    }

    impl Scalar {
        fn into_text(self) -> String {
            match self {
                Scalar::Text(text) => text,
                Scalar::Int(n) => n.to_string(),
                Scalar::Float(n) => n.to_string(),
                Scalar::Bool(b) => b.to_string(),
            }
        }
    }

    /// A list entry that either decodes or is thrown away.
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Entry<T> {
        Record(T),
        Malformed(IgnoredAny),
    }

    pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        Ok(optional_text(deserializer)?.unwrap_or_default())
    }

    pub fn optional_text<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<String>, D::Error> {
        Ok(Option::<Scalar>::deserialize(deserializer)?.map(Scalar::into_text))
    }

    pub fn timestamp<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        Ok(match Option::<Scalar>::deserialize(deserializer)? {
            Some(Scalar::Text(text)) => text.parse().ok(),
            _ => None,
        })
    }

    pub fn records<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        let entries = Option::<Vec<Entry<T>>>::deserialize(deserializer)?.unwrap_or_default();
        let total = entries.len();
        let records: Vec<T> = entries
            .into_iter()
            .filter_map(|entry| match entry {
                Entry::Record(record) => Some(record),
                Entry::Malformed(_) => None,
            })
            .collect();
        if records.len() < total {
            tracing::warn!("Skipped {} of {} unreadable records", total - records.len(), total);
        }
        Ok(records)
    }
}

/// One of the four independent resource groups.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Resource {
    Projects,
    Clients,
    Contacts,
    Subscriptions,
}

impl Resource {
    pub const ALL: [Resource; 4] = [
        Resource::Projects,
        Resource::Clients,
        Resource::Contacts,
        Resource::Subscriptions,
    ];

    /// Collection path relative to the API base URL.
    pub fn path(self) -> &'static str {
        match self {
            Resource::Projects => "/projects",
            Resource::Clients => "/clients",
            Resource::Contacts => "/contact",
            Resource::Subscriptions => "/newsletter",
        }
    }

    /// Path of a single record.
    pub fn item_path(self, id: &str) -> String {
        format!("{}/{id}", self.path())
    }
}
