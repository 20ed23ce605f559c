mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};
use uuid::Uuid;

use common::{mint_jwt, TestServer};

async fn create(server: &TestServer, token: &str, body: Value) -> Result<Value> {
    let res = server
        .client
        .post(server.expenses_url("/create"))
        .bearer_auth(token)
        .json(&body)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    Ok(res.json::<Value>().await?["expense"].clone())
}

async fn list(server: &TestServer, token: &str) -> Result<Vec<Value>> {
    let body = server
        .client
        .get(server.expenses_url(""))
        .bearer_auth(token)
        .send()
        .await?
        .json::<Value>()
        .await?;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Expenses retrieved successfully");
    Ok(body["expenses"].as_array().cloned().unwrap_or_default())
}

#[tokio::test]
async fn create_returns_persisted_expense_owned_by_caller() -> Result<()> {
    let server = TestServer::spawn().await?;
    let user = Uuid::new_v4();
    let token = mint_jwt(user);

    let res = server
        .client
        .post(server.expenses_url("/create"))
        .bearer_auth(&token)
        .json(&json!({
            "title": "Lunch",
            "amount": 12.5,
            "date": "2024-01-01",
            "category": "Food",
            "ownerId": Uuid::new_v4(),
        }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::CREATED);
    let body = res.json::<Value>().await?;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Expense created successfully");

    let expense = &body["expense"];
    assert!(!expense["id"].as_str().unwrap_or_default().is_empty());
    assert_eq!(expense["ownerId"], user.to_string());
    assert_eq!(expense["title"], "Lunch");
    assert_eq!(expense["amount"], 12.5);
    assert_eq!(expense["category"], "Food");
    assert!(expense["date"].as_str().unwrap().starts_with("2024-01-01T00:00:00"));
    assert_eq!(expense["description"], Value::Null);
    Ok(())
}

#[tokio::test]
async fn list_only_returns_callers_expenses() -> Result<()> {
    let server = TestServer::spawn().await?;
    let alice = mint_jwt(Uuid::new_v4());
    let bob = mint_jwt(Uuid::new_v4());

    create(&server, &alice, json!({ "title": "Coffee", "amount": 3, "category": "Food" })).await?;
    create(&server, &alice, json!({ "title": "Bus", "amount": 2, "category": "Travel" })).await?;
    create(&server, &bob, json!({ "title": "Rent", "amount": 900, "category": "Housing" })).await?;

    let alice_expenses = list(&server, &alice).await?;
    assert_eq!(alice_expenses.len(), 2);
    assert!(alice_expenses.iter().all(|e| e["title"] != "Rent"));

    let bob_expenses = list(&server, &bob).await?;
    assert_eq!(bob_expenses.len(), 1);
    assert_eq!(bob_expenses[0]["title"], "Rent");
    Ok(())
}

#[tokio::test]
async fn update_overwrites_every_editable_field() -> Result<()> {
    let server = TestServer::spawn().await?;
    let token = mint_jwt(Uuid::new_v4());
    let created = create(
        &server,
        &token,
        json!({
            "title": "Lunch",
            "amount": 12.5,
            "date": "2024-01-01",
            "category": "Food",
            "description": "with team"
        }),
    )
    .await?;
    let id = created["id"].as_str().unwrap();

    let res = server
        .client
        .put(server.expenses_url(&format!("/{}", id)))
        .bearer_auth(&token)
        .json(&json!({ "title": "Brunch" }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["message"], "Expense updated successfully");
    let expense = &body["expense"];
    assert_eq!(expense["id"], created["id"]);
    assert_eq!(expense["ownerId"], created["ownerId"]);
    assert_eq!(expense["title"], "Brunch");
    assert_eq!(expense["amount"], Value::Null);
    assert_eq!(expense["date"], Value::Null);
    assert_eq!(expense["category"], Value::Null);
    assert_eq!(expense["description"], Value::Null);
    Ok(())
}

#[tokio::test]
async fn update_of_another_callers_expense_is_not_found() -> Result<()> {
    let server = TestServer::spawn().await?;
    let owner = mint_jwt(Uuid::new_v4());
    let intruder = mint_jwt(Uuid::new_v4());
    let created = create(&server, &owner, json!({ "title": "Gym", "amount": 40, "category": "Health" })).await?;
    let id = created["id"].as_str().unwrap();

    let res = server
        .client
        .put(server.expenses_url(&format!("/{}", id)))
        .bearer_auth(&intruder)
        .json(&json!({ "title": "Hijacked", "amount": 0 }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body = res.json::<Value>().await?;
    assert_eq!(body, json!({ "success": false, "message": "Expense not found", "error": "NOT_FOUND" }));

    let remaining = list(&server, &owner).await?;
    assert_eq!(remaining, vec![created]);
    Ok(())
}

#[tokio::test]
async fn delete_returns_removed_expense() -> Result<()> {
    let server = TestServer::spawn().await?;
    let token = mint_jwt(Uuid::new_v4());
    let created = create(&server, &token, json!({ "title": "Movie", "amount": 15, "category": "Fun" })).await?;
    let id = created["id"].as_str().unwrap();

    let res = server
        .client
        .delete(server.expenses_url(&format!("/{}", id)))
        .bearer_auth(&token)
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["message"], "Expense deleted successfully");
    assert_eq!(body["expense"], created);
    assert!(list(&server, &token).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn delete_of_nonexistent_id_is_not_found() -> Result<()> {
    let server = TestServer::spawn().await?;
    let token = mint_jwt(Uuid::new_v4());

    let res = server
        .client
        .delete(server.expenses_url(&format!("/{}", Uuid::new_v4())))
        .bearer_auth(&token)
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.json::<Value>().await?["success"], false);
    Ok(())
}

#[tokio::test]
async fn delete_of_another_callers_expense_leaves_it_intact() -> Result<()> {
    let server = TestServer::spawn().await?;
    let owner = mint_jwt(Uuid::new_v4());
    let intruder = mint_jwt(Uuid::new_v4());
    let created = create(&server, &owner, json!({ "title": "Books", "amount": 20, "category": "Study" })).await?;

    let res = server
        .client
        .delete(server.expenses_url(&format!("/{}", created["id"].as_str().unwrap())))
        .bearer_auth(&intruder)
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(list(&server, &owner).await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn malformed_id_is_a_generic_failure() -> Result<()> {
    let server = TestServer::spawn().await?;
    let token = mint_jwt(Uuid::new_v4());

    let res = server
        .client
        .delete(server.expenses_url("/not-a-valid-id"))
        .bearer_auth(&token)
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = res.json::<Value>().await?;
    assert_eq!(body["message"], "Error deleting expense");
    assert_eq!(body["error"], "STORE_FAILURE");
    assert!(!body.to_string().contains("not-a-valid-id"));
    Ok(())
}

#[tokio::test]
async fn non_numeric_amount_is_a_generic_failure() -> Result<()> {
    let server = TestServer::spawn().await?;
    let token = mint_jwt(Uuid::new_v4());

    let res = server
        .client
        .post(server.expenses_url("/create"))
        .bearer_auth(&token)
        .json(&json!({ "title": "Lunch", "amount": "twelve" }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = res.json::<Value>().await?;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Error creating expense");
    assert!(list(&server, &token).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn wrong_method_on_create_returns_json_envelope() -> Result<()> {
    let server = TestServer::spawn().await?;
    let token = mint_jwt(Uuid::new_v4());

    for method in [reqwest::Method::PUT, reqwest::Method::DELETE] {
        let res = server
            .client
            .request(method.clone(), server.expenses_url("/create"))
            .bearer_auth(&token)
            .json(&json!({ "title": "Lunch" }))
            .send()
            .await?;

        assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED, "{} /create", method);
        let body = res.json::<Value>().await?;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "METHOD_NOT_ALLOWED");
    }
    Ok(())
}

#[tokio::test]
async fn unknown_collection_paths_return_json_envelope() -> Result<()> {
    let server = TestServer::spawn().await?;
    let token = mint_jwt(Uuid::new_v4());

    for path in ["/", "/grouped/categories/extra", "/a/b/c"] {
        let res = server
            .client
            .get(server.expenses_url(path))
            .bearer_auth(&token)
            .send()
            .await?;

        assert_eq!(res.status(), StatusCode::NOT_FOUND, "GET {}", path);
        let body = res.json::<Value>().await?;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "NOT_FOUND");
    }
    Ok(())
}

#[tokio::test]
async fn base_path_without_leading_slash_is_served() -> Result<()> {
    let mut config = expense_api::config::AppConfig::development();
    config.api.base_path = "api/expenses".to_string();
    let server = TestServer::spawn_with_config(config).await?;
    let token = mint_jwt(Uuid::new_v4());

    assert!(list(&server, &token).await?.is_empty());
    Ok(())
}
