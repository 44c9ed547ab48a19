//! In-process HTTP tests for the employee handlers.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::http::header::CONTENT_TYPE;
use actix_web::{App, test};
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::Trace;
use crate::domain::EmployeeService;
use crate::domain::ports::{
    EmployeeServiceError, MockEmployeeCommand, MockEmployeeQuery,
};
use crate::outbound::memory::InMemoryEmployeeRepository;

fn memory_state() -> HttpState {
    let repository = Arc::new(InMemoryEmployeeRepository::new());
    HttpState::from_service(Arc::new(EmployeeService::new(repository)))
}

fn mock_state(command: MockEmployeeCommand, query: MockEmployeeQuery) -> HttpState {
    HttpState::new(Arc::new(command), Arc::new(query))
}

macro_rules! init_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .wrap(Trace)
                .app_data(web::Data::new($state))
                .configure(configure),
        )
        .await
    };
}

fn employee_body(first: &str, last: &str, email: Option<&str>) -> Value {
    json!({ "firstName": first, "lastName": last, "email": email })
}

#[rstest]
#[actix_web::test]
async fn create_get_update_delete_scenario() {
    let app = init_app!(memory_state());

    let created = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/employees")
            .set_json(employee_body("salla", "mallesh", Some("salla@gmail.com")))
            .to_request(),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(created).await;
    assert_eq!(
        created,
        json!({"id": 1, "firstName": "salla", "lastName": "mallesh", "email": "salla@gmail.com"})
    );

    let fetched = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/employees/1").to_request(),
    )
    .await;
    assert_eq!(fetched.status(), StatusCode::OK);
    let fetched: Value = test::read_body_json(fetched).await;
    assert_eq!(fetched, created);

    let updated = test::call_service(
        &app,
        test::TestRequest::put()
            .uri("/api/employees/1")
            .set_json(json!({"id": 77, "firstName": "shiva", "lastName": "Gudeti", "email": null}))
            .to_request(),
    )
    .await;
    assert_eq!(updated.status(), StatusCode::OK);
    let updated: Value = test::read_body_json(updated).await;
    assert_eq!(
        updated,
        json!({"id": 1, "firstName": "shiva", "lastName": "Gudeti", "email": null})
    );

    let deleted = test::call_service(
        &app,
        test::TestRequest::delete().uri("/api/employees/1").to_request(),
    )
    .await;
    assert_eq!(deleted.status(), StatusCode::OK);
    assert!(
        deleted
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.starts_with("text/plain"))
    );
    let body = test::read_body(deleted).await;
    assert_eq!(body.as_ref(), DELETED_MESSAGE.as_bytes());

    let gone = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/employees/1").to_request(),
    )
    .await;
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);
    assert!(test::read_body(gone).await.is_empty());
}

#[rstest]
#[actix_web::test]
async fn duplicate_email_is_a_conflict() {
    let app = init_app!(memory_state());
    for expected in [StatusCode::CREATED, StatusCode::CONFLICT] {
        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/employees")
                .set_json(employee_body("salla", "mallesh", Some("salla@gmail.com")))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), expected);
        if expected == StatusCode::CONFLICT {
            assert!(res.headers().contains_key("trace-id"));
            let body: Value = test::read_body_json(res).await;
            assert_eq!(body["code"], "conflict");
            assert_eq!(body["details"]["code"], "duplicate_email");
            assert_eq!(body["details"]["email"], "salla@gmail.com");
        }
    }

    let list = test::call_service(&app, test::TestRequest::get().uri("/api/employees").to_request()).await;
    let list: Vec<Value> = test::read_body_json(list).await;
    assert_eq!(list.len(), 1);
}

#[rstest]
#[actix_web::test]
async fn update_to_taken_email_is_a_conflict_and_leaves_record_unchanged() {
    let app = init_app!(memory_state());
    for (first, email) in [("salla", "a@x.com"), ("shiva", "b@x.com")] {
        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/employees")
                .set_json(employee_body(first, "mallesh", Some(email)))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    let res = test::call_service(
        &app,
        test::TestRequest::put()
            .uri("/api/employees/2")
            .set_json(employee_body("shiva", "Gudeti", Some("a@x.com")))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CONFLICT);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["code"], "conflict");
    assert_eq!(body["details"]["code"], "duplicate_email");
    assert_eq!(body["details"]["email"], "a@x.com");

    let second = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/employees/2").to_request(),
    )
    .await;
    let second: Value = test::read_body_json(second).await;
    assert_eq!(
        second,
        json!({"id": 2, "firstName": "shiva", "lastName": "mallesh", "email": "b@x.com"})
    );
}

#[rstest]
#[actix_web::test]
async fn employees_without_email_never_collide() {
    let app = init_app!(memory_state());
    for name in ["salla", "suresh"] {
        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/employees")
                .set_json(json!({"firstName": name, "lastName": "kuruma"}))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::CREATED);
    }
}

#[rstest]
#[actix_web::test]
async fn update_of_missing_id_is_not_found_without_mutation() {
    let mut query = MockEmployeeQuery::new();
    query
        .expect_get_employee()
        .withf(|id: &EmployeeId| id.get() == 5)
        .times(1)
        .return_once(|_| Ok(None));
    let mut command = MockEmployeeCommand::new();
    command.expect_replace_employee().times(0);

    let app = init_app!(mock_state(command, query));
    let res = test::call_service(
        &app,
        test::TestRequest::put()
            .uri("/api/employees/5")
            .set_json(employee_body("shiva", "Gudeti", None))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert!(test::read_body(res).await.is_empty());
}

#[rstest]
#[case(json!({"firstName": "", "lastName": "mallesh"}), "firstName")]
#[case(json!({"firstName": "salla", "lastName": "   "}), "lastName")]
#[case(json!({"firstName": "salla", "lastName": "mallesh", "email": " "}), "email")]
#[actix_web::test]
async fn invalid_fields_are_rejected(#[case] body: Value, #[case] field: &str) {
    let mut command = MockEmployeeCommand::new();
    command.expect_create_employee().times(0);
    let app = init_app!(mock_state(command, MockEmployeeQuery::new()));

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/employees")
            .set_json(body)
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let payload: Value = test::read_body_json(res).await;
    assert_eq!(payload["code"], "invalid_request");
    assert_eq!(payload["details"]["field"], field);
}

#[rstest]
#[case("{not json")]
#[case(r#"{"firstName": 3, "lastName": "mallesh"}"#)]
#[case(r#"{"lastName": "mallesh"}"#)]
#[actix_web::test]
async fn malformed_bodies_are_bad_requests(#[case] raw: &'static str) {
    let app = init_app!(mock_state(MockEmployeeCommand::new(), MockEmployeeQuery::new()));
    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/employees")
            .insert_header((CONTENT_TYPE, "application/json"))
            .set_payload(raw)
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let payload: Value = test::read_body_json(res).await;
    assert_eq!(payload["code"], "invalid_request");
}

#[rstest]
#[case(EmployeeServiceError::store_unavailable("pool timed out"), StatusCode::SERVICE_UNAVAILABLE)]
#[case(EmployeeServiceError::store("relation missing"), StatusCode::INTERNAL_SERVER_ERROR)]
#[actix_web::test]
async fn store_faults_map_to_server_errors(
    #[case] failure: EmployeeServiceError,
    #[case] status: StatusCode,
) {
    let mut query = MockEmployeeQuery::new();
    query
        .expect_list_employees()
        .return_once(move || Err(failure));
    let app = init_app!(mock_state(MockEmployeeCommand::new(), query));

    let res = test::call_service(&app, test::TestRequest::get().uri("/api/employees").to_request()).await;
    assert_eq!(res.status(), status);
    let payload: Value = test::read_body_json(res).await;
    let message = payload["message"].as_str().expect("message");
    assert!(!message.contains("relation missing"));
    assert!(!message.contains("pool timed out"));
}

#[rstest]
#[actix_web::test]
async fn delete_of_missing_id_succeeds_twice() {
    let app = init_app!(memory_state());
    for _ in 0..2 {
        let res = test::call_service(
            &app,
            test::TestRequest::delete().uri("/api/employees/9").to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
    }
}

#[rstest]
#[actix_web::test]
async fn lookup_finds_by_exact_names() {
    let app = init_app!(memory_state());
    test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/employees")
            .set_json(employee_body("salla", "mallesh", None))
            .to_request(),
    )
    .await;

    let hit = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/employees/lookup?firstName=salla&lastName=mallesh")
            .to_request(),
    )
    .await;
    assert_eq!(hit.status(), StatusCode::OK);
    let hit: Value = test::read_body_json(hit).await;
    assert_eq!(hit["id"], 1);

    let miss = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/employees/lookup?firstName=salla&lastName=Mallesh")
            .to_request(),
    )
    .await;
    assert_eq!(miss.status(), StatusCode::NOT_FOUND);
}

#[rstest]
#[case("/api/employees/lookup?firstName=salla")]
#[case("/api/employees/lookup?firstName=&lastName=mallesh")]
#[actix_web::test]
async fn lookup_requires_both_names(#[case] uri: &str) {
    let mut query = MockEmployeeQuery::new();
    query.expect_find_employee_by_name().times(0);
    let app = init_app!(mock_state(MockEmployeeCommand::new(), query));

    let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}
