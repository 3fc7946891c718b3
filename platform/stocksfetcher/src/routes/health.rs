use actix_web::{get, HttpResponse};

#[get("/")]
pub async fn handler() -> HttpResponse {
    HttpResponse::Ok().body("Hello, World!")
}
