//! Core types of notesvc.
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::{self, Display};
use std::num::ParseIntError;
use std::str::FromStr;

/// ID of notes.
///
/// IDs are assigned by the note store ([`crate::notestore`]) when a note is added,
/// and never change afterwards.
/// The default value, zero, means that no ID has been assigned yet.
#[derive(Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Clone, Copy, Hash)]
#[serde(transparent)]
pub struct NoteID(i64);

impl NoteID {
    pub fn new(id: i64) -> Self {
        NoteID(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }

    pub fn is_unassigned(&self) -> bool {
        self.0 == 0
    }
}

impl From<i64> for NoteID {
    fn from(id: i64) -> NoteID {
        NoteID::new(id)
    }
}

impl From<NoteID> for i64 {
    fn from(id: NoteID) -> i64 {
        id.0
    }
}

impl FromStr for NoteID {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(NoteID)
    }
}

impl Display for NoteID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn is_empty(s: &str) -> bool {
    s.is_empty()
}

/// `null` reads the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A persisted text note.
///
/// Zero IDs and empty strings are left out when serialized,
/// and missing or `null` fields take their default values when deserialized.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Note {
    #[serde(
        skip_serializing_if = "NoteID::is_unassigned",
        deserialize_with = "null_as_default"
    )]
    pub id: NoteID,
    #[serde(skip_serializing_if = "is_empty", deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(skip_serializing_if = "is_empty", deserialize_with = "null_as_default")]
    pub content: String,
}

impl Note {
    pub fn new(title: String, content: String) -> Self {
        Note {
            id: NoteID::default(),
            title,
            content,
        }
    }

    pub fn with_id(mut self, id: NoteID) -> Self {
        self.id = id;
        self
    }
}
