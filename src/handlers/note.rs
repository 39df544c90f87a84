use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::{
    errors::ServerError,
    models::note::{Note, NoteBody},
    services::NoteService,
};

pub async fn get_all(service: web::Data<NoteService>) -> Result<HttpResponse, ServerError> {
    let result = web::block(move || service.get_all_notes()).await??;
    Ok(HttpResponse::Ok().json(json!(result)))
}

pub async fn get(
    note_id: web::Path<i64>,
    service: web::Data<NoteService>,
) -> Result<HttpResponse, ServerError> {
    let note_id = note_id.into_inner();

    match web::block(move || service.get_note_by_id(note_id)).await?? {
        Some(note) => Ok(HttpResponse::Ok().json(json!(note))),
        None => Err(ServerError::NotFound),
    }
}

pub async fn new(
    input: web::Json<NoteBody>,
    service: web::Data<NoteService>,
) -> Result<HttpResponse, ServerError> {
    match web::block(move || service.add_note(input.into_inner())).await?? {
        Some(note) => Ok(HttpResponse::Ok().json(json!(note))),
        None => Err(ServerError::BadRequest),
    }
}

// An id with no row answers 400 here while delete answers 404; clients
// depend on that pair, so keep them apart.
pub async fn update(
    input: web::Json<NoteBody>,
    service: web::Data<NoteService>,
) -> Result<HttpResponse, ServerError> {
    let input = input.into_inner();
    let note_id = input.id.ok_or(ServerError::BadRequest)?;
    let note = input.into_new_note().ok_or(ServerError::BadRequest)?;

    let result = web::block(move || -> Result<Option<Note>, ServerError> {
        match service.get_note_by_id(note_id)? {
            Some(_) => service.update_note(note_id, note).map(Some),
            None => Ok(None),
        }
    })
    .await??;

    match result {
        Some(note) => Ok(HttpResponse::Ok().json(json!(note))),
        None => {
            log::debug!("update of unknown note id: {note_id}");
            Err(ServerError::BadRequest)
        }
    }
}

pub async fn del(
    note_id: web::Path<i64>,
    service: web::Data<NoteService>,
) -> Result<HttpResponse, ServerError> {
    let note_id = note_id.into_inner();

    let deleted = web::block(move || -> Result<bool, ServerError> {
        match service.get_note_by_id(note_id)? {
            Some(_) => service.delete_note(note_id).map(|_| true),
            None => Ok(false),
        }
    })
    .await??;

    if deleted {
        Ok(HttpResponse::Ok().finish())
    } else {
        Err(ServerError::NotFound)
    }
}
