use std::sync::Arc;

use crate::{
    errors::ServerError,
    models::note::{NewNote, Note, NoteBody},
    repository::NoteRepository,
};

/// Sits between the handlers and storage. Only `add_note` validates.
#[derive(Clone)]
pub struct NoteService {
    repository: Arc<dyn NoteRepository>,
}

impl NoteService {
    pub fn new(repository: Arc<dyn NoteRepository>) -> Self {
        NoteService { repository }
    }

    pub fn get_all_notes(&self) -> Result<Vec<Note>, ServerError> {
        self.repository.find_all()
    }

    pub fn get_note_by_id(&self, note_id: i64) -> Result<Option<Note>, ServerError> {
        self.repository.find_by_id(note_id)
    }

    /// Returns `None` without touching storage when the body is invalid.
    /// Any id in the body is ignored.
    pub fn add_note(&self, body: NoteBody) -> Result<Option<Note>, ServerError> {
        match body.into_new_note() {
            Some(note) => self.repository.save(None, note).map(Some),
            None => {
                log::debug!("rejected note with missing header or description");
                Ok(None)
            }
        }
    }

    /// Persists unconditionally; callers check the id and the fields first.
    pub fn update_note(&self, note_id: i64, note: NewNote) -> Result<Note, ServerError> {
        self.repository.save(Some(note_id), note)
    }

    pub fn delete_note(&self, note_id: i64) -> Result<(), ServerError> {
        self.repository.delete_by_id(note_id)
    }
}
