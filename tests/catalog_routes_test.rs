mod common;

use actix_web::test;
use serde_json::Value;
use serial_test::serial;

use common::TestApp;

#[actix_rt::test]
#[serial]
async fn test_health_check() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
}

#[actix_rt::test]
#[serial]
async fn test_get_all_destinations() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/api/destinations").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let destinations = body.as_array().expect("array of destinations");
    assert_eq!(destinations.len(), 10);
    assert!(destinations.iter().any(|d| d["id"] == "pandora"));
}

#[actix_rt::test]
#[serial]
async fn test_filter_destinations_by_tag() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/destinations?tag=Cold")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let destinations = body.as_array().expect("array of destinations");
    assert!(!destinations.is_empty());
    assert!(destinations.iter().all(|d| {
        d["tags"]
            .as_array()
            .map(|tags| tags.iter().any(|t| t == "Cold"))
            .unwrap_or(false)
    }));
}

#[actix_rt::test]
#[serial]
async fn test_search_destinations_by_name() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/destinations?search=NAB")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let destinations = body.as_array().expect("array of destinations");
    assert_eq!(destinations.len(), 1);
    assert_eq!(destinations[0]["id"], "naboo");
}

#[actix_rt::test]
#[serial]
async fn test_get_destination_by_id() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/destinations/pandora")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["name"], "Pandora");
    assert_eq!(body["base_cost"], 25000);
    // Unlisted descriptive fields ride along via the metadata flattening
    assert_eq!(body["atmosphere"], "Breathable with mask");
}

#[actix_rt::test]
#[serial]
async fn test_unknown_destination_is_404() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/destinations/arrakis")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_rt::test]
#[serial]
async fn test_get_all_spaceships() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/api/spaceships").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let spaceships = body.as_array().expect("array of spaceships");
    assert_eq!(spaceships.len(), 5);
    assert!(spaceships.iter().any(|s| s["id"] == "starship"));
}

#[actix_rt::test]
#[serial]
async fn test_filter_spaceships_by_feature() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/spaceships?feature=restaurant")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let spaceships = body.as_array().expect("array of spaceships");
    assert!(!spaceships.is_empty());
    assert!(spaceships
        .iter()
        .all(|s| s["features"]["restaurant"] == true));
}

#[actix_rt::test]
#[serial]
async fn test_get_spaceship_by_id() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/spaceships/falcon")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["cost_multiplier"], 3.0);
    assert_eq!(body["capacity"], 8);
}

#[actix_rt::test]
#[serial]
async fn test_unknown_spaceship_is_404() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/spaceships/nostromo")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}
