//! Wire DTOs mirrored from the HabitHive backend.
//!
//! DESIGN
//! ======
//! The backend speaks camelCase JSON and is inconsistent about whether ids are
//! strings or integers, so ids are normalized to `String` on the way in.
//! Records also derive `Serialize` because `DataTable` renders cells from a
//! serialized row.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Backend identifier, normalized to its string form.
pub type Id = String;

fn id_from_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.is_i64() || n.is_u64() => Some(n.to_string()),
        _ => None,
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<Id, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    id_from_value(&value).ok_or_else(|| D::Error::custom(format!("expected string or integer id, got {value}")))
}

fn deserialize_opt_id<'de, D>(deserializer: D) -> Result<Option<Id>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(value) => id_from_value(&value)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("expected string or integer id, got {value}"))),
    }
}

/// Accept either `["roles.read"]` or `[{"name": "roles.read", ...}]`.
fn deserialize_permission_names<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    items
        .into_iter()
        .map(|item| match item {
            Value::String(name) => Ok(name),
            Value::Object(ref map) => map
                .get("name")
                .and_then(Value::as_str)
                .map(str::to_owned)
                .ok_or_else(|| D::Error::custom("permission object without name")),
            other => Err(D::Error::custom(format!("unexpected permission entry: {other}"))),
        })
        .collect()
}

// =============================================================================
// PROGRESS
// =============================================================================

/// Outcome recorded for a habit on a given day.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressStatus {
    #[default]
    Pending,
    Completed,
    Failed,
}

impl ProgressStatus {
    pub const ALL: [Self; 3] = [Self::Completed, Self::Failed, Self::Pending];

    /// Wire value, also used as the `status` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Pending => "pending",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Completed => "Completado",
            Self::Failed => "Fallido",
            Self::Pending => "Pendiente",
        }
    }
}

impl fmt::Display for ProgressStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProgressStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "completed" => Ok(Self::Completed),
            "failed" => Ok(Self::Failed),
            "pending" => Ok(Self::Pending),
            other => Err(format!("unknown progress status: {other}")),
        }
    }
}

/// Compact `{id, name}` reference embedded in other records.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedSummary {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: Id,
    #[serde(default)]
    pub name: String,
}

/// User reference embedded in progress records.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: Id,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// A single habit check-in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: Id,
    #[serde(deserialize_with = "deserialize_id")]
    pub hive_id: Id,
    #[serde(deserialize_with = "deserialize_id")]
    pub user_id: Id,
    #[serde(deserialize_with = "deserialize_id")]
    pub habit_id: Id,
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    pub status: ProgressStatus,
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub verified_by: Option<Id>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub user: Option<UserSummary>,
    #[serde(default)]
    pub habit: Option<NamedSummary>,
    #[serde(default)]
    pub hive: Option<NamedSummary>,
    #[serde(default)]
    pub verifier: Option<UserSummary>,
}

/// Binary attachment proving a habit was completed.
#[derive(Clone, PartialEq, Eq)]
pub struct EvidenceFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl fmt::Debug for EvidenceFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EvidenceFile")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Payload for `POST /progresses`.
///
/// `evidence_file` never serializes; its presence switches the request to
/// multipart encoding.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProgress {
    pub hive_id: Id,
    pub user_id: Id,
    pub habit_id: Id,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProgressStatus>,
    #[serde(skip)]
    pub evidence_file: Option<EvidenceFile>,
}

/// Payload for `PUT /progresses/{id}`; unset fields are left unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProgress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProgressStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified_by: Option<Id>,
}

// =============================================================================
// ROLES, PERMISSIONS, USERS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Create/update body shared by roles and permissions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct NamePayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: Id,
    pub name: String,
    pub email: String,
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub role_id: Option<Id>,
    #[serde(default)]
    pub role: Option<NamedSummary>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Create/update body for users. `password` is omitted when unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_id: Option<Id>,
}

// =============================================================================
// AUTH
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Successful `POST /auth/login` body.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
    #[serde(default, deserialize_with = "deserialize_permission_names")]
    pub permissions: Vec<String>,
}
