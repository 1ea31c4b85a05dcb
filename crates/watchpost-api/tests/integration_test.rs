// Integration tests for the Watchpost API
// Run with: cargo test --test integration_test -- --ignored
// Requires a running server (DATABASE_URL configured, migrations applied).

use serde_json::json;

const API_BASE_URL: &str = "http://localhost:3000";

fn unique_email(prefix: &str) -> String {
    format!("{}+{}@acme.com", prefix, uuid::Uuid::now_v7().simple())
}

#[tokio::test]
#[ignore]
async fn test_register_login_and_tenant_isolation() {
    let client = reqwest::Client::new();

    // Register org "Acme" with an admin user
    let email = unique_email("a");
    let register = client
        .post(format!("{}/auth/register", API_BASE_URL))
        .json(&json!({
            "email": email,
            "password": "secret123",
            "org_name": "Acme"
        }))
        .send()
        .await
        .expect("Failed to register");
    assert_eq!(register.status(), 200);

    let registered: serde_json::Value = register.json().await.unwrap();
    let user_id = registered["user_id"].as_str().unwrap().to_string();
    let org_id = registered["org_id"].as_str().unwrap().to_string();
    assert!(registered["token"].as_str().is_some());
    let ingest_key = registered["ingest_key"].as_str().unwrap().to_string();
    assert!(ingest_key.starts_with("wpk_"));

    // Login with the same credentials resolves to the same identity
    let login = client
        .post(format!("{}/auth/login", API_BASE_URL))
        .json(&json!({ "email": email, "password": "secret123" }))
        .send()
        .await
        .expect("Failed to login");
    assert_eq!(login.status(), 200);

    let logged_in: serde_json::Value = login.json().await.unwrap();
    assert_eq!(logged_in["user_id"].as_str().unwrap(), user_id);
    assert_eq!(logged_in["org_id"].as_str().unwrap(), org_id);
    let token = logged_in["token"].as_str().unwrap().to_string();

    // Wrong password and unknown email fail identically
    for (email, password) in [(email.as_str(), "wrong"), ("nobody@acme.com", "secret123")] {
        let resp = client
            .post(format!("{}/auth/login", API_BASE_URL))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 401);
        let body: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(body["error"], "Invalid credentials");
    }

    // Dashboards are reachable within the tenant
    let list = client
        .get(format!(
            "{}/v1/organizations/{}/dashboards",
            API_BASE_URL, org_id
        ))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(list.status(), 200);

    // A second org cannot read the first org's dashboards
    let other = client
        .post(format!("{}/auth/register", API_BASE_URL))
        .json(&json!({
            "email": unique_email("b"),
            "password": "hunter22x",
            "org_name": "Globex"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(other.status(), 200);
    let other: serde_json::Value = other.json().await.unwrap();
    let other_token = other["token"].as_str().unwrap();

    let forbidden = client
        .get(format!(
            "{}/v1/organizations/{}/dashboards",
            API_BASE_URL, org_id
        ))
        .bearer_auth(other_token)
        .send()
        .await
        .unwrap();
    assert_eq!(forbidden.status(), 403);
}

#[tokio::test]
#[ignore]
async fn test_metric_ingestion_roundtrip() {
    let client = reqwest::Client::new();

    let register = client
        .post(format!("{}/auth/register", API_BASE_URL))
        .json(&json!({
            "email": unique_email("metrics"),
            "password": "secret123",
            "org_name": "Acme Metrics"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(register.status(), 200);
    let registered: serde_json::Value = register.json().await.unwrap();
    let token = registered["token"].as_str().unwrap();
    let ingest_key = registered["ingest_key"].as_str().unwrap();

    let payload = json!({
        "service_name": "api",
        "metrics": [{ "name": "latency_ms", "value": 42.0, "ts": "2024-01-01T00:00:00Z" }]
    });

    // Invalid key -> 401
    let rejected = client
        .post(format!("{}/v1/metrics", API_BASE_URL))
        .header("X-Org-Key", "wpk_invalid")
        .json(&payload)
        .send()
        .await
        .unwrap();
    assert_eq!(rejected.status(), 401);

    // Missing key -> 401
    let rejected = client
        .post(format!("{}/v1/metrics", API_BASE_URL))
        .json(&payload)
        .send()
        .await
        .unwrap();
    assert_eq!(rejected.status(), 401);

    // Valid key -> accepted
    let accepted = client
        .post(format!("{}/v1/metrics", API_BASE_URL))
        .header("X-Org-Key", ingest_key)
        .json(&payload)
        .send()
        .await
        .unwrap();
    assert_eq!(accepted.status(), 200);
    let body: serde_json::Value = accepted.json().await.unwrap();
    assert_eq!(body["status"], "accepted");
    assert_eq!(body["metric_count"], 1);

    // The authenticated query sees the row, scoped to the caller's org
    let metrics = client
        .get(format!("{}/v1/metrics", API_BASE_URL))
        .query(&[("metric_name", "latency_ms")])
        .bearer_auth(token)
        .send()
        .await
        .unwrap();
    assert_eq!(metrics.status(), 200);
    let body: serde_json::Value = metrics.json().await.unwrap();
    let rows = body["metrics"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["metric_name"], "latency_ms");
    assert_eq!(rows[0]["service_name"], "api");
    assert_eq!(rows[0]["environment"], "prod");
    assert_eq!(rows[0]["value"], 42.0);
}
