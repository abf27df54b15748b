//! tests/tracking_tests.rs
//! Pruebas del router completo sin base de datos: el contrato de los
//! trackers tiene que cumplirse igual con el almacenamiento caído.

use actix_web::{test, web, App};

use crate::app;
use crate::handlers::tracking_handler::PIXEL_PNG;
use crate::services::lead_service::LeadService;

macro_rules! degraded_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(LeadService::new(None)))
                .configure(app::init_app),
        )
        .await
    };
}

#[actix_web::test]
async fn healthz_responde_ok() {
    let app = degraded_app!();

    let req = test::TestRequest::get().uri("/healthz").to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body, serde_json::json!({ "ok": true }));
}

#[actix_web::test]
async fn el_pixel_se_sirve_identico_sin_almacenamiento() {
    let app = degraded_app!();

    let req = test::TestRequest::get().uri("/o/42.png").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    let headers = resp.headers();
    assert_eq!(headers.get("Content-Type").unwrap().to_str().unwrap(), "image/png");
    assert_eq!(
        headers.get("Cache-Control").unwrap().to_str().unwrap(),
        "no-cache, no-store, must-revalidate"
    );
    assert_eq!(headers.get("Pragma").unwrap().to_str().unwrap(), "no-cache");

    let body = test::read_body(resp).await;
    assert_eq!(&body[..], PIXEL_PNG);
}

#[actix_web::test]
async fn lead_id_no_numerico_es_error_de_cliente() {
    let app = degraded_app!();

    let req = test::TestRequest::get().uri("/o/abc.png").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_client_error());

    let req = test::TestRequest::get().uri("/u/abc").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_client_error());
}

#[actix_web::test]
async fn la_baja_confirma_aunque_no_haya_base() {
    let app = degraded_app!();

    let req = test::TestRequest::get().uri("/u/7").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    let body = test::read_body(resp).await;
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("Unsubscribed"));
}

#[actix_web::test]
async fn dbcheck_reporta_la_caida_sin_tumbar_el_proceso() {
    let app = degraded_app!();

    let req = test::TestRequest::get().uri("/dbcheck").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["dbConnected"], serde_json::json!(false));
    assert!(body["error"].is_string());
}
