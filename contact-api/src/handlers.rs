use actix_web::{
    http::{header, Method},
    web, HttpRequest, HttpResponse, Responder,
};
use common::validation::parse_contact;
use tracing::{error, info, warn};

use crate::{error::ApiError, AppState};

const JSON_CONTENT_TYPE: &str = "application/json";

/// Creates (POST) or updates (PUT) a single contact.
///
/// Responds 201 when the contact did not exist beforehand and 204 when it
/// did, whichever verb was used.
pub async fn upsert_contact(
    req: HttpRequest,
    body: web::Bytes,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let method = req.method().clone();
    if method != Method::POST && method != Method::PUT {
        warn!("Request failing due to incorrect HTTP verb: {}", method);
        return Err(ApiError::MethodNotAllowed);
    }

    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|value| value.as_bytes())
        .unwrap_or_default();
    if content_type != JSON_CONTENT_TYPE.as_bytes() {
        warn!(
            "Request failing due to incorrect Content-type: {}",
            String::from_utf8_lossy(content_type)
        );
        return Err(ApiError::UnsupportedMediaType);
    }

    let contact = parse_contact(&body).map_err(|e| {
        warn!("Request failing due to invalid data payload. {}", e);
        e
    })?;
    info!("Successfully unmarshalled and validated contact payload: {:?}", contact);

    let AppState { contacts } = &**app_state;

    let exists = contacts.contact_exists(contact.id).await.map_err(|e| {
        error!("Request failing due to persistence failure. {}", e);
        e
    })?;
    if exists && method == Method::POST {
        warn!("Refusing to create contact {}: id already exists", contact.id);
        return Err(ApiError::DuplicateContact);
    }

    let phone_rows = contacts.save_contact(&contact).await.map_err(|e| {
        error!("Request failing due to persistence failure. {}", e);
        e
    })?;
    info!("Saved contact {} with {} phone rows", contact.id, phone_rows);

    if exists {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Ok(HttpResponse::Created().finish())
    }
}

#[actix_web::get("/health")]
pub async fn health_check() -> impl Responder {
    info!("Health check request arrived");
    HttpResponse::Ok().content_type("text/plain").body("OK")
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(web::resource("/contact").route(web::route().to(upsert_contact)));
}
