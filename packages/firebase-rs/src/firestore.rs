//! Firestore REST writes.
//!
//! Documents are sent in Firestore's typed-value JSON encoding, e.g.
//! `{"fields": {"user_input": {"stringValue": "hello"}}}`.

use std::{collections::BTreeMap, time::Duration};

use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Map, Value};
use tracing::debug;

use crate::auth::FirebaseAuth;
use crate::error::{check_status, Result};

pub const FIRESTORE_BASE_URL: &str = "https://firestore.googleapis.com/v1";
pub const DEFAULT_DATABASE: &str = "(default)";

/// A single Firestore field value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Boolean(bool),
    Integer(i64),
    Double(f64),
    String(String),
    Timestamp(DateTime<Utc>),
    Array(Vec<FieldValue>),
    Map(Document),
}

impl FieldValue {
    pub fn to_json(&self) -> Value {
        match self {
            FieldValue::Null => json!({ "nullValue": null }),
            FieldValue::Boolean(b) => json!({ "booleanValue": b }),
            // int64 travels as a decimal string
            FieldValue::Integer(i) => json!({ "integerValue": i.to_string() }),
            FieldValue::Double(d) => json!({ "doubleValue": d }),
            FieldValue::String(s) => json!({ "stringValue": s }),
            FieldValue::Timestamp(ts) => {
                json!({ "timestampValue": ts.to_rfc3339_opts(SecondsFormat::Micros, true) })
            }
            FieldValue::Array(values) => json!({
                "arrayValue": { "values": values.iter().map(FieldValue::to_json).collect::<Vec<_>>() }
            }),
            FieldValue::Map(document) => json!({ "mapValue": { "fields": document.fields_json() } }),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Boolean(b)
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Integer(i)
    }
}

impl From<f64> for FieldValue {
    fn from(d: f64) -> Self {
        FieldValue::Double(d)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(ts: DateTime<Utc>) -> Self {
        FieldValue::Timestamp(ts)
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => FieldValue::Null,
            Value::Bool(b) => FieldValue::Boolean(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => FieldValue::Integer(i),
                None => FieldValue::Double(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => FieldValue::String(s),
            Value::Array(values) => {
                FieldValue::Array(values.into_iter().map(FieldValue::from).collect())
            }
            Value::Object(map) => FieldValue::Map(
                map.into_iter()
                    .fold(Document::new(), |doc, (k, v)| doc.field(k, v)),
            ),
        }
    }
}

/// Ordered map of field name to value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    fields: BTreeMap<String, FieldValue>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The `fields` object of a Firestore document body.
    pub fn fields_json(&self) -> Value {
        Value::Object(
            self.fields
                .iter()
                .map(|(name, value)| (name.clone(), value.to_json()))
                .collect::<Map<_, _>>(),
        )
    }
}

#[derive(Deserialize)]
struct CreatedDocument {
    name: String,
}

#[derive(Clone)]
pub struct FirestoreClient {
    http_client: Client,
    auth: FirebaseAuth,
    base_url: String,
    project_id: String,
}

impl FirestoreClient {
    pub fn new(project_id: impl Into<String>, auth: FirebaseAuth) -> Result<Self> {
        Ok(Self {
            http_client: crate::http_client(crate::DEFAULT_TIMEOUT)?,
            auth,
            base_url: FIRESTORE_BASE_URL.to_string(),
            project_id: project_id.into(),
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self> {
        self.http_client = crate::http_client(timeout)?;
        Ok(self)
    }

    /// Point at an emulator or proxy instead of the public endpoint.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    fn documents_url(&self) -> String {
        format!(
            "{}/projects/{}/databases/{}/documents",
            self.base_url, self.project_id, DEFAULT_DATABASE
        )
    }

    /// Create a document with a server-assigned id in `collection`.
    ///
    /// Returns the full resource name of the new document.
    pub async fn add_document(&self, collection: &str, document: &Document) -> Result<String> {
        let url = format!("{}/{}", self.documents_url(), collection.trim_matches('/'));
        let body = json!({ "fields": document.fields_json() });

        let request = self.auth.authorize(self.http_client.post(&url)).await?;
        let response = check_status(request.json(&body).send().await?).await?;
        let created: CreatedDocument = response.json().await?;

        debug!(collection, name = %created.name, "Firestore document created");

        Ok(created.name)
    }
}
