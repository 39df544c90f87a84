use diesel::{pg::PgConnection, prelude::*, r2d2::ConnectionManager};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use super::NoteRepository;
use crate::{
    errors::ServerError,
    models::note::{NewNote, Note},
    schema::notes::dsl::{id, notes},
};

pub type Pool = r2d2::Pool<ConnectionManager<PgConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub fn build_pool(database_url: &str, max_size: u32) -> Result<Pool, ServerError> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    Ok(r2d2::Pool::builder().max_size(max_size).build(manager)?)
}

pub fn run_migrations(pool: &Pool) -> Result<(), ServerError> {
    let mut connection = pool.get()?;
    let applied = connection
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| {
            log::error!("migrations: {err}");
            ServerError::DieselError
        })?;

    for version in applied {
        log::info!("applied migration {version}");
    }
    Ok(())
}

#[derive(Clone)]
pub struct PgNoteRepository {
    pool: Pool,
}

impl PgNoteRepository {
    pub fn new(pool: Pool) -> Self {
        PgNoteRepository { pool }
    }
}

impl NoteRepository for PgNoteRepository {
    fn save(&self, note_id: Option<i64>, note: NewNote) -> Result<Note, ServerError> {
        let mut connection = self.pool.get()?;

        if let Some(note_id) = note_id {
            let updated = diesel::update(notes.find(note_id))
                .set(&note)
                .get_result::<Note>(&mut connection)
                .optional()?;

            if let Some(updated) = updated {
                return Ok(updated);
            }
        }

        let inserted = diesel::insert_into(notes)
            .values(&note)
            .get_result::<Note>(&mut connection)?;
        Ok(inserted)
    }

    fn find_by_id(&self, note_id: i64) -> Result<Option<Note>, ServerError> {
        let mut connection = self.pool.get()?;

        Ok(notes
            .find(note_id)
            .first::<Note>(&mut connection)
            .optional()?)
    }

    fn find_all(&self) -> Result<Vec<Note>, ServerError> {
        let mut connection = self.pool.get()?;

        Ok(notes.order(id.asc()).load::<Note>(&mut connection)?)
    }

    fn delete_by_id(&self, note_id: i64) -> Result<(), ServerError> {
        let mut connection = self.pool.get()?;

        diesel::delete(notes.find(note_id)).execute(&mut connection)?;
        Ok(())
    }
}
