use std::{collections::BTreeMap, sync::Mutex};

use super::NoteRepository;
use crate::{
    errors::ServerError,
    models::note::{NewNote, Note},
};

/// In-process stand-in for the notes table. Ids start at 1 and are never
/// reused, like a `BIGSERIAL` column.
#[derive(Default)]
pub struct MemoryNoteRepository {
    state: Mutex<State>,
}

#[derive(Default)]
struct State {
    last_id: i64,
    rows: BTreeMap<i64, Note>,
}

impl MemoryNoteRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NoteRepository for MemoryNoteRepository {
    fn save(&self, note_id: Option<i64>, note: NewNote) -> Result<Note, ServerError> {
        let mut state = self.state.lock().unwrap();

        let note_id = match note_id {
            Some(existing) if state.rows.contains_key(&existing) => existing,
            _ => {
                state.last_id += 1;
                state.last_id
            }
        };

        let stored = Note {
            id: note_id,
            header: note.header,
            description: note.description,
            created_at: note.created_at,
        };
        state.rows.insert(note_id, stored.clone());
        Ok(stored)
    }

    fn find_by_id(&self, note_id: i64) -> Result<Option<Note>, ServerError> {
        Ok(self.state.lock().unwrap().rows.get(&note_id).cloned())
    }

    fn find_all(&self) -> Result<Vec<Note>, ServerError> {
        Ok(self.state.lock().unwrap().rows.values().cloned().collect())
    }

    fn delete_by_id(&self, note_id: i64) -> Result<(), ServerError> {
        self.state.lock().unwrap().rows.remove(&note_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::note::now;

    fn new_note(header: &str) -> NewNote {
        NewNote {
            header: header.to_string(),
            description: format!("{header} description"),
            created_at: now(),
        }
    }

    #[test]
    fn ids_are_assigned_in_order() {
        let repository = MemoryNoteRepository::new();
        let first = repository.save(None, new_note("a")).unwrap();
        let second = repository.save(None, new_note("b")).unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(repository.find_all().unwrap(), vec![first, second]);
    }

    #[test]
    fn save_with_existing_id_overwrites() {
        let repository = MemoryNoteRepository::new();
        let original = repository.save(None, new_note("a")).unwrap();
        let replaced = repository
            .save(Some(original.id), new_note("b"))
            .unwrap();

        assert_eq!(replaced.id, original.id);
        assert_eq!(replaced.header, "b");
        assert_eq!(repository.find_all().unwrap().len(), 1);
    }

    #[test]
    fn save_with_unknown_id_inserts_fresh_row() {
        let repository = MemoryNoteRepository::new();
        let inserted = repository.save(Some(42), new_note("a")).unwrap();

        assert_eq!(inserted.id, 1);
        assert!(repository.find_by_id(42).unwrap().is_none());
    }

    #[test]
    fn deleted_ids_are_not_reused() {
        let repository = MemoryNoteRepository::new();
        let first = repository.save(None, new_note("a")).unwrap();
        repository.delete_by_id(first.id).unwrap();
        repository.delete_by_id(first.id).unwrap();
        let second = repository.save(None, new_note("b")).unwrap();

        assert!(repository.find_by_id(first.id).unwrap().is_none());
        assert_eq!(second.id, 2);
    }
}
