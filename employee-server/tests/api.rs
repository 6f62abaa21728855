//! HTTP API driven in-process through the axum router
//! Run: cargo test -p employee-server --test api

use axum::Router;
use axum::body::Body;
use chrono::{Duration, Local};
use employee_server::{Config, ServerState, build_app};
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

const SECRET: &str = "api-test-secret-0123456789abcdef0123456789";

struct TestApp {
    app: Router,
    token: String,
}

impl TestApp {
    async fn new() -> Self {
        let state = ServerState::initialize(&Config::for_tests(SECRET))
            .await
            .unwrap();
        let token = state
            .jwt_service
            .generate_token("tester", Some("Test User"))
            .unwrap();
        Self {
            app: build_app(state),
            token,
        }
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    async fn call(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.token));
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        self.send(request).await
    }

    async fn create(&self, body: Value) -> (StatusCode, Value) {
        self.call("POST", "/employees", Some(body)).await
    }
}

fn employee(id: &str, department: &str, salary: f64, joining_date: &str) -> Value {
    json!({
        "employee_id": id,
        "name": format!("Employee {}", id),
        "department": department,
        "salary": salary,
        "joining_date": joining_date,
        "skills": ["rust"],
    })
}

#[tokio::test]
async fn health_is_public() {
    let app = TestApp::new().await;
    let request = Request::get("/health").body(Body::empty()).unwrap();
    let (status, body) = app.send(request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"]["status"], "ok");
}

#[tokio::test]
async fn employees_require_bearer_token() {
    let app = TestApp::new().await;

    let request = Request::get("/employees").body(Body::empty()).unwrap();
    let (status, body) = app.send(request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], 1001);

    let request = Request::get("/employees")
        .header(header::AUTHORIZATION, "Bearer not-a-jwt")
        .body(Body::empty())
        .unwrap();
    let (status, _) = app.send(request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let request = Request::post("/employees")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(employee("E001", "Eng", 1.0, "2024-01-01").to_string()))
        .unwrap();
    let (status, _) = app.send(request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn token_for_another_audience_is_rejected() {
    let app = TestApp::new().await;
    let foreign = employee_server::JwtService::with_config(employee_server::auth::JwtConfig {
        secret: SECRET.to_string(),
        audience: "another-service".to_string(),
        ..Default::default()
    })
    .generate_token("tester", None)
    .unwrap();

    let request = Request::get("/employees")
        .header(header::AUTHORIZATION, format!("Bearer {}", foreign))
        .body(Body::empty())
        .unwrap();
    let (status, body) = app.send(request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], 1004);
}

#[tokio::test]
async fn create_and_fetch_employee() {
    let app = TestApp::new().await;
    let (status, created) = app
        .create(json!({
            "employee_id": " E001 ",
            "name": "Ada",
            "department": "Eng",
            "salary": 100,
            "joining_date": "2024-01-15",
        }))
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["employee_id"], "E001");
    assert_eq!(created["skills"], json!([]));

    let (status, fetched) = app.call("GET", "/employees/E001", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
    assert_eq!(fetched["joining_date"], "2024-01-15");
    assert_eq!(fetched["salary"], 100.0);
}

#[tokio::test]
async fn duplicate_employee_id_is_bad_request() {
    let app = TestApp::new().await;
    let (status, _) = app.create(employee("E001", "Eng", 100.0, "2024-01-01")).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = app.create(employee("E001", "Ops", 50.0, "2024-01-02")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Employee ID must be unique.");
}

#[tokio::test]
async fn validation_errors_are_collected() {
    let app = TestApp::new().await;
    let tomorrow = (Local::now().date_naive() + Duration::days(1)).to_string();

    let (status, body) = app
        .create(json!({
            "employee_id": "E001",
            "name": "Ada",
            "department": "Eng",
            "salary": -1,
            "joining_date": tomorrow,
        }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 2);
    assert_eq!(body["details"]["salary"], json!(["salary must be non-negative"]));
    assert_eq!(
        body["details"]["joining_date"],
        json!(["joining date cannot be in the future"])
    );
    assert_eq!(body["details"].as_object().unwrap().len(), 2);

    let (status, body) = app.create(json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["employee_id"], json!(["employee_id is required"]));
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let app = TestApp::new().await;
    let request = Request::post("/employees")
        .header(header::AUTHORIZATION, format!("Bearer {}", app.token))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = app.send(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 5);
}

#[tokio::test]
async fn wrong_field_types_are_reported_per_field() {
    let app = TestApp::new().await;
    let (status, body) = app
        .create(json!({
            "employee_id": 42,
            "name": "Ada",
            "department": "Eng",
            "salary": "abc",
            "joining_date": "2024-01-01",
        }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 2);
    assert_eq!(body["details"]["salary"], json!(["salary must be a number"]));
    assert_eq!(
        body["details"]["employee_id"],
        json!(["employee_id must be a string"])
    );
    assert_eq!(body["details"].as_object().unwrap().len(), 2);

    // A JSON array is not an employee object
    let (status, body) = app.create(json!([1, 2])).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 5);
}

#[tokio::test]
async fn missing_employee_is_not_found() {
    let app = TestApp::new().await;

    let (status, body) = app.call("GET", "/employees/E404", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 8001);
    assert_eq!(body["message"], "Not found.");
    assert_eq!(body["details"]["employee_id"], "E404");

    let (status, body) = app
        .call("PATCH", "/employees/E404", Some(json!({"salary": 1})))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 8001);

    let (status, body) = app.call("DELETE", "/employees/E404", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 8001);
}

#[tokio::test]
async fn unknown_route_is_json_not_found() {
    let app = TestApp::new().await;
    let request = Request::get("/nowhere").body(Body::empty()).unwrap();
    let (status, body) = app.send(request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 3);
    assert_eq!(body["details"]["resource"], "/nowhere");
}

#[tokio::test]
async fn patch_and_put_update_only_supplied_fields() {
    let app = TestApp::new().await;
    app.create(employee("E001", "Eng", 100.0, "2024-01-01")).await;

    let (status, body) = app
        .call("PATCH", "/employees/E001", Some(json!({"salary": 250})))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["salary"], 250.0);
    assert_eq!(body["department"], "Eng");
    assert_eq!(body["skills"], json!(["rust"]));

    let (status, body) = app
        .call(
            "PUT",
            "/employees/E001",
            Some(json!({"employee_id": "E001", "department": "Ops"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["department"], "Ops");
    assert_eq!(body["salary"], 250.0);

    let (status, body) = app
        .call("PATCH", "/employees/E001", Some(json!({"employee_id": "E999"})))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["details"]["employee_id"],
        json!(["employee_id cannot be changed"])
    );

    let (status, _) = app
        .call("PATCH", "/employees/E001", Some(json!({"salary": -3})))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn delete_returns_no_content() {
    let app = TestApp::new().await;
    app.create(employee("E001", "Eng", 100.0, "2024-01-01")).await;

    let (status, body) = app.call("DELETE", "/employees/E001", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = app.call("GET", "/employees/E001", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_is_paginated_newest_first() {
    let app = TestApp::new().await;
    for day in 1..=12 {
        let (status, _) = app
            .create(employee(
                &format!("E{:03}", day),
                if day % 2 == 0 { "Eng" } else { "Ops" },
                100.0,
                &format!("2024-01-{:02}", day),
            ))
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, page) = app.call("GET", "/employees", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["count"], 12);
    assert_eq!(page["page"], 1);
    assert_eq!(page["page_size"], 5);
    assert_eq!(page["total_pages"], 3);
    assert_eq!(page["next"], 2);
    assert_eq!(page["previous"], Value::Null);
    assert_eq!(page["results"][0]["employee_id"], "E012");

    let (_, page) = app.call("GET", "/employees?page=3", None).await;
    assert_eq!(page["results"].as_array().unwrap().len(), 2);
    assert_eq!(page["next"], Value::Null);
    assert_eq!(page["previous"], 2);

    let (_, page) = app.call("GET", "/employees?page_size=20", None).await;
    assert_eq!(page["results"].as_array().unwrap().len(), 12);

    // Non-numeric page_size falls back to the default
    let (_, page) = app.call("GET", "/employees?page_size=abc", None).await;
    assert_eq!(page["page_size"], 5);

    let (_, page) = app.call("GET", "/employees?department=Eng", None).await;
    assert_eq!(page["count"], 6);

    let (status, body) = app.call("GET", "/employees?page=4", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Invalid page.");

    let (status, _) = app.call("GET", "/employees?page=zero", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn empty_list_has_one_page() {
    let app = TestApp::new().await;
    let (status, page) = app.call("GET", "/employees", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["count"], 0);
    assert_eq!(page["total_pages"], 1);
    assert_eq!(page["results"], json!([]));
}

#[tokio::test]
async fn average_salary_by_department() {
    let app = TestApp::new().await;
    app.create(employee("E001", "Eng", 100.0, "2024-01-01")).await;
    app.create(employee("E002", "Eng", 200.0, "2024-01-02")).await;
    app.create(employee("E003", "Ops", 50.0, "2024-01-03")).await;

    let (status, body) = app.call("GET", "/employees/avg_salary", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {"department": "Eng", "avg_salary": 150.0},
            {"department": "Ops", "avg_salary": 50.0},
        ])
    );
}

#[tokio::test]
async fn search_by_skill() {
    let app = TestApp::new().await;
    let mut python = employee("E001", "Eng", 100.0, "2024-01-01");
    python["skills"] = json!(["python", "sql"]);
    app.create(python).await;
    app.create(employee("E002", "Eng", 100.0, "2024-01-02")).await;

    let (status, body) = app.call("GET", "/employees/search?skill=python", None).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["employee_id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["E001"]);

    let (status, body) = app.call("GET", "/employees/search", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Skill query parameter required.");

    let (status, _) = app.call("GET", "/employees/search?skill=", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
