use actix_cors::Cors;
use actix_web::http;

const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

pub fn configure_cors(allowed_origins: &[String]) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT"])
        .allowed_headers(vec![http::header::CONTENT_TYPE])
        .max_age(3600);

    if allowed_origins.is_empty() {
        // Default to localhost if no origins specified
        cors = cors.allowed_origin(DEFAULT_ALLOWED_ORIGIN);
    } else {
        for origin in allowed_origins {
            cors = cors.allowed_origin(origin);
        }
    }

    cors
}
