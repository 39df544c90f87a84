use actix_web::web;

use crate::errors::ServerError;

pub mod note;

pub async fn index() -> impl actix_web::Responder {
    actix_web::HttpResponse::Ok().finish()
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        log::debug!("rejected request body: {err}");
        ServerError::BadRequest.into()
    }))
    .route("/", web::get().to(index))
    .service(
        web::scope("/notes")
            .route("", web::get().to(note::get_all))
            .route("", web::post().to(note::new))
            .route("", web::put().to(note::update))
            .route("/{id}", web::get().to(note::get))
            .route("/{id}", web::delete().to(note::del)),
    );
}
