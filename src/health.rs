use actix_web::{get, HttpResponse, Responder};

pub const LIVENESS_MESSAGE: &str = "Muscu Tracker callback server is running";

#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(LIVENESS_MESSAGE)
}

#[get("/health")]
pub async fn check() -> impl Responder {
    HttpResponse::Ok().body("OK")
}

#[cfg(test)]
mod integration_tests {
    use actix_web::{http::StatusCode, test, App};

    use super::*;

    #[actix_web::test]
    async fn it_reports_liveness_at_root() {
        let app = test::init_service(App::new().service(index)).await;
        let req = test::TestRequest::with_uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        assert_eq!(body, LIVENESS_MESSAGE.as_bytes());
    }

    #[actix_web::test]
    async fn it_answers_health_checks() {
        let app = test::init_service(App::new().service(check)).await;
        let req = test::TestRequest::with_uri("/health").to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, "OK".as_bytes());
    }
}
