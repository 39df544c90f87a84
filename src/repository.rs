use crate::{
    errors::ServerError,
    models::note::{NewNote, Note},
};

#[cfg(test)]
pub mod memory;
pub mod postgres;

pub use postgres::PgNoteRepository;

/// Keyed CRUD over the notes table.
///
/// Implementations are blocking; callers on the async side go through
/// `web::block`.
pub trait NoteRepository: Send + Sync {
    /// Insert-or-update. With `None`, or with an id that has no row, a new
    /// row is inserted and storage assigns its id. With an existing id every
    /// field is overwritten.
    fn save(&self, note_id: Option<i64>, note: NewNote) -> Result<Note, ServerError>;

    fn find_by_id(&self, note_id: i64) -> Result<Option<Note>, ServerError>;

    /// All rows, ordered by id.
    fn find_all(&self) -> Result<Vec<Note>, ServerError>;

    /// Deleting an id with no row is not an error.
    fn delete_by_id(&self, note_id: i64) -> Result<(), ServerError>;
}
