use chrono::NaiveDateTime;
use diesel::{AsChangeset, Insertable, Queryable};
use serde_derive::{Deserialize, Serialize};

use crate::schema::notes;

/// A note as it is stored, with its storage-assigned id.
#[derive(Clone, Debug, PartialEq, Eq, Queryable, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub header: String,
    pub description: String,
    #[serde(rename = "createdAt")]
    pub created_at: NaiveDateTime,
}

/// Request body for create and update.
///
/// `created_at` is stamped when the body is decoded, so a note keeps the
/// time its request arrived rather than the time its row was written.
#[derive(Clone, Debug, Deserialize)]
pub struct NoteBody {
    pub id: Option<i64>,
    pub header: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "createdAt", default = "now")]
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, PartialEq, Eq, Insertable, AsChangeset)]
#[diesel(table_name = notes)]
pub struct NewNote {
    pub header: String,
    pub description: String,
    pub created_at: NaiveDateTime,
}

pub fn now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

impl NoteBody {
    #[cfg(test)]
    pub fn new(header: Option<&str>, description: Option<&str>) -> Self {
        NoteBody {
            id: None,
            header: header.map(str::to_owned),
            description: description.map(str::to_owned),
            created_at: now(),
        }
    }

    /// Drops the id and yields the storable fields. Header and description
    /// must both be present; empty strings pass.
    pub fn into_new_note(self) -> Option<NewNote> {
        match (self.header, self.description) {
            (Some(header), Some(description)) => Some(NewNote {
                header,
                description,
                created_at: self.created_at,
            }),
            _ => None,
        }
    }
}
