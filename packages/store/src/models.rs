//! # Domain models for user records
//!
//! Defines the data structures exchanged with the users REST endpoint and the
//! client-side state that mirrors them. Everything here is
//! `Serialize + Deserialize` so it can cross the HTTP boundary and be dumped as
//! JSON by the debug view.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`User`] | A persisted record as returned by the server. `id` is assigned server-side. |
//! | [`UserId`] | A server identifier. Accepts both numeric and string ids on the wire. |
//! | [`NewUser`] | The POST body for creating a record. Never carries an id; `actived` is always `false`. |
//! | [`UserPatch`] | The PATCH body for updating a record. The id travels in the URL, not the body. |
//! | [`EditBuffer`] | The single form-backed record being created or edited. `id == None` means create mode. |
//! | [`FilterType`] | Which subset of the list is displayed: all, active, or inactive. |
//! | [`FetchState`] | Lifecycle of the most recent list fetch. |
//!
//! ## Lenient decoding
//!
//! Text fields missing from a server payload, or sent as `null`, decode as
//! `""`; a missing or `null` `actived` decodes as `false`. Ids may be any JSON
//! number or a string. The only hard requirement on a list response
//! is that it is a JSON array of objects.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Role choices offered by the form, as `(value, label)` pairs.
pub const ROLES: &[(&str, &str)] = &[
    ("", "--Please choose a role--"),
    ("student", "Student"),
    ("professor", "Professor"),
];

/// Server-assigned identifier of a user.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Number(u64),
    Text(String),
    /// Negative or fractional ids, kept exactly as sent
    OtherNumber(serde_json::Number),
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserId::Number(n) => write!(f, "{n}"),
            UserId::Text(s) => f.write_str(s),
            UserId::OtherNumber(n) => write!(f, "{n}"),
        }
    }
}

impl From<u64> for UserId {
    fn from(n: u64) -> Self {
        UserId::Number(n)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        UserId::Text(s.to_string())
    }
}

/// A user record as stored on the server.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// None until the server has assigned one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub first: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub last: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub actived: bool,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl User {
    /// Whether this record carries the given server id.
    pub fn has_id(&self, id: &UserId) -> bool {
        self.id.as_ref() == Some(id)
    }
}

/// Request body for `POST /users`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub first: String,
    pub last: String,
    pub email: String,
    pub role: String,
    pub actived: bool,
}

impl From<&EditBuffer> for NewUser {
    fn from(buffer: &EditBuffer) -> Self {
        Self {
            first: buffer.first.clone(),
            last: buffer.last.clone(),
            email: buffer.email.clone(),
            role: buffer.role.clone(),
            actived: false,
        }
    }
}

/// Request body for `PATCH /users/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserPatch {
    pub first: String,
    pub last: String,
    pub email: String,
    pub role: String,
}

impl From<&EditBuffer> for UserPatch {
    fn from(buffer: &EditBuffer) -> Self {
        Self {
            first: buffer.first.clone(),
            last: buffer.last.clone(),
            email: buffer.email.clone(),
            role: buffer.role.clone(),
        }
    }
}

/// A form field of the edit buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftField {
    First,
    Last,
    Email,
    Role,
}

/// Whether saving the edit buffer creates a new record or updates an existing one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SaveMode {
    Create,
    Update(UserId),
}

impl SaveMode {
    /// Label for the form's submit button.
    pub fn label(&self) -> &'static str {
        match self {
            SaveMode::Create => "create user",
            SaveMode::Update(_) => "update user",
        }
    }
}

/// The record currently being created or edited in the form.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EditBuffer {
    pub id: Option<UserId>,
    pub first: String,
    pub last: String,
    pub email: String,
    pub role: String,
}

impl EditBuffer {
    pub fn mode(&self) -> SaveMode {
        match &self.id {
            Some(id) => SaveMode::Update(id.clone()),
            None => SaveMode::Create,
        }
    }

    /// Copy a user's editable fields into the buffer and switch to edit mode.
    pub fn load(&mut self, user: &User) {
        self.id = user.id.clone();
        self.first = user.first.clone();
        self.last = user.last.clone();
        self.email = user.email.clone();
        self.role = user.role.clone();
    }

    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::First => &self.first,
            DraftField::Last => &self.last,
            DraftField::Email => &self.email,
            DraftField::Role => &self.role,
        }
    }

    pub fn set_field(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::First => self.first = value,
            DraftField::Last => self.last = value,
            DraftField::Email => self.email = value,
            DraftField::Role => self.role = value,
        }
    }
}

/// Subset of the user list to display.
///
/// Parsing is case-insensitive. Any other string is kept as
/// [`FilterType::Unrecognized`], which matches no user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FilterType {
    #[default]
    All,
    Active,
    Inactive,
    Unrecognized(String),
}

impl FilterType {
    /// The filters offered by the filter selector, in display order.
    pub const CHOICES: [FilterType; 3] = [FilterType::All, FilterType::Active, FilterType::Inactive];

    pub fn label(&self) -> &str {
        match self {
            FilterType::All => "All",
            FilterType::Active => "Active",
            FilterType::Inactive => "Inactive",
            FilterType::Unrecognized(raw) => raw,
        }
    }

    pub fn matches(&self, user: &User) -> bool {
        match self {
            FilterType::All => true,
            FilterType::Active => user.actived,
            FilterType::Inactive => !user.actived,
            FilterType::Unrecognized(_) => false,
        }
    }
}

impl From<&str> for FilterType {
    fn from(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            FilterType::All
        } else if trimmed.eq_ignore_ascii_case("active") {
            FilterType::Active
        } else if trimmed.eq_ignore_ascii_case("inactive") {
            FilterType::Inactive
        } else {
            FilterType::Unrecognized(raw.to_string())
        }
    }
}

impl From<String> for FilterType {
    fn from(raw: String) -> Self {
        FilterType::from(raw.as_str())
    }
}

impl From<FilterType> for String {
    fn from(filter: FilterType) -> Self {
        filter.label().to_string()
    }
}

/// Lifecycle of the most recent list fetch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchState {
    #[default]
    Idle,
    Pending,
    Done,
    Error,
}

impl FetchState {
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchState::Idle => "idle",
            FetchState::Pending => "pending",
            FetchState::Done => "done",
            FetchState::Error => "error",
        }
    }
}

impl fmt::Display for FetchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_decodes_numeric_and_string_ids() {
        let users: Vec<User> = serde_json::from_str(
            r#"[{"id": 1, "first": "Ada"}, {"id": "b7f2", "first": "Alan", "actived": true}]"#,
        )
        .unwrap();

        assert_eq!(users[0].id, Some(UserId::Number(1)));
        assert_eq!(users[0].last, "");
        assert!(!users[0].actived);
        assert_eq!(users[1].id, Some(UserId::from("b7f2")));
        assert!(users[1].actived);
    }

    #[test]
    fn test_null_fields_decode_as_defaults() {
        let users: Vec<User> = serde_json::from_str(
            r#"[
                {"id": 1, "first": "A", "last": "Lovelace", "role": "student", "actived": false},
                {"id": 2, "first": "B", "last": null, "email": null, "role": null, "actived": true},
                {"id": 3, "first": null, "actived": null}
            ]"#,
        )
        .unwrap();

        assert_eq!(users.len(), 3);
        assert_eq!(users[1].role, "");
        assert_eq!(users[1].last, "");
        assert!(users[1].actived);
        assert_eq!(users[2].first, "");
        assert!(!users[2].actived);
    }

    #[test]
    fn test_signed_and_fractional_ids_decode() {
        let users: Vec<User> =
            serde_json::from_str(r#"[{"id": -1, "first": "neg"}, {"id": 1.5}, {"id": null}]"#).unwrap();

        assert_eq!(users[0].id.as_ref().unwrap().to_string(), "-1");
        assert_eq!(users[1].id.as_ref().unwrap().to_string(), "1.5");
        assert_eq!(users[2].id, None);
        assert!(matches!(users[0].id, Some(UserId::OtherNumber(_))));
        assert_eq!(serde_json::to_value(&users[0].id).unwrap(), serde_json::json!(-1));
    }

    #[test]
    fn test_new_user_has_no_id_and_is_inactive() {
        let buffer = EditBuffer {
            id: Some(UserId::Number(9)),
            first: "Grace".into(),
            last: "Hopper".into(),
            email: "grace@navy.mil".into(),
            role: "professor".into(),
        };

        let json = serde_json::to_value(NewUser::from(&buffer)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "first": "Grace",
                "last": "Hopper",
                "email": "grace@navy.mil",
                "role": "professor",
                "actived": false,
            })
        );
    }

    #[test]
    fn test_patch_omits_id() {
        let buffer = EditBuffer {
            id: Some(UserId::Number(3)),
            first: "Ada".into(),
            ..Default::default()
        };
        let json = serde_json::to_value(UserPatch::from(&buffer)).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["first"], "Ada");
    }

    #[test]
    fn test_edit_buffer_mode() {
        let mut buffer = EditBuffer::default();
        assert_eq!(buffer.mode(), SaveMode::Create);
        assert_eq!(buffer.mode().label(), "create user");

        buffer.id = Some(UserId::Number(4));
        assert_eq!(buffer.mode(), SaveMode::Update(UserId::Number(4)));
        assert_eq!(buffer.mode().label(), "update user");
    }

    #[test]
    fn test_filter_type_parsing() {
        assert_eq!(FilterType::from("all"), FilterType::All);
        assert_eq!(FilterType::from("Active"), FilterType::Active);
        assert_eq!(FilterType::from(" INACTIVE "), FilterType::Inactive);
        assert_eq!(
            FilterType::from("archived"),
            FilterType::Unrecognized("archived".to_string())
        );
    }

    #[test]
    fn test_unrecognized_filter_matches_nothing() {
        let active = User { actived: true, ..Default::default() };
        let inactive = User::default();
        let filter = FilterType::from("archived");
        assert!(!filter.matches(&active));
        assert!(!filter.matches(&inactive));
    }

    #[test]
    fn test_fetch_state_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&FetchState::Pending).unwrap(), "\"pending\"");
        assert_eq!(FetchState::Error.to_string(), "error");
    }
}
