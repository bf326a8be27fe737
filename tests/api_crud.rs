//! End-to-end CRUD tests against a spawned directory server.

use serde_json::{json, Value};

mod common;

#[tokio::test]
async fn create_then_fetch_roundtrip() {
    let (addr, _shutdown) = common::spawn_server().await;
    let client = common::client();
    let base = format!("http://{}", addr);

    let res = client
        .post(format!("{base}/user"))
        .json(&json!({"id": "1", "name": "Ann", "email": "ann@x.com"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 201);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({"id": "1", "name": "Ann", "email": "ann@x.com"}));

    let res = client.get(format!("{base}/user/1")).send().await.unwrap();
    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["name"], "Ann");
    assert_eq!(body["email"], "ann@x.com");
}

#[tokio::test]
async fn duplicate_create_conflicts() {
    let (addr, _shutdown) = common::spawn_server().await;
    let client = common::client();
    let base = format!("http://{}", addr);
    let ann = json!({"id": "1", "name": "Ann", "email": "ann@x.com"});

    let res = client.post(format!("{base}/user")).json(&ann).send().await.unwrap();
    assert_eq!(res.status(), 201);

    let res = client.post(format!("{base}/user")).json(&ann).send().await.unwrap();
    assert_eq!(res.status(), 409);
}

#[tokio::test]
async fn fetch_unknown_user_is_404() {
    let (addr, _shutdown) = common::spawn_server().await;
    let client = common::client();

    let res = client
        .get(format!("http://{}/user/2", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 404);
}

#[tokio::test]
async fn malformed_json_is_400() {
    let (addr, _shutdown) = common::spawn_server().await;
    let client = common::client();

    let res = client
        .post(format!("http://{}/user", addr))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 400);
}

#[tokio::test]
async fn missing_or_empty_fields_are_400() {
    let (addr, _shutdown) = common::spawn_server().await;
    let client = common::client();
    let base = format!("http://{}", addr);

    // field absent entirely
    let res = client
        .post(format!("{base}/user"))
        .json(&json!({"id": "1", "name": "Ann"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 400);

    // field present but empty
    let res = client
        .post(format!("{base}/user"))
        .json(&json!({"id": "1", "name": "Ann", "email": ""}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 400);

    // nothing got stored along the way
    let res = client.get(format!("{base}/users")).send().await.unwrap();
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn update_replaces_name_and_email_but_not_id() {
    let (addr, _shutdown) = common::spawn_server().await;
    let client = common::client();
    let base = format!("http://{}", addr);

    client
        .post(format!("{base}/user"))
        .json(&json!({"id": "1", "name": "Ann", "email": "ann@x.com"}))
        .send()
        .await
        .unwrap();

    // id in the payload is ignored; the path id is authoritative
    let res = client
        .put(format!("{base}/user/1"))
        .json(&json!({"id": "999", "name": "Annie", "email": "a@x.com"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({"id": "1", "name": "Annie", "email": "a@x.com"}));

    let res = client.get(format!("{base}/user/1")).send().await.unwrap();
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["name"], "Annie");
}

#[tokio::test]
async fn update_unknown_user_is_404() {
    let (addr, _shutdown) = common::spawn_server().await;
    let client = common::client();

    let res = client
        .put(format!("http://{}/user/ghost", addr))
        .json(&json!({"name": "G", "email": "g@x.com"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 404);
}

#[tokio::test]
async fn update_with_empty_fields_is_400() {
    let (addr, _shutdown) = common::spawn_server().await;
    let client = common::client();
    let base = format!("http://{}", addr);

    client
        .post(format!("{base}/user"))
        .json(&json!({"id": "1", "name": "Ann", "email": "ann@x.com"}))
        .send()
        .await
        .unwrap();

    let res = client
        .put(format!("{base}/user/1"))
        .json(&json!({"name": "", "email": "a@x.com"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 400);
}

#[tokio::test]
async fn delete_then_fetch_is_404() {
    let (addr, _shutdown) = common::spawn_server().await;
    let client = common::client();
    let base = format!("http://{}", addr);

    client
        .post(format!("{base}/user"))
        .json(&json!({"id": "1", "name": "Ann", "email": "ann@x.com"}))
        .send()
        .await
        .unwrap();

    let res = client.delete(format!("{base}/user/1")).send().await.unwrap();
    assert_eq!(res.status(), 204);
    assert_eq!(res.text().await.unwrap(), "");

    let res = client.get(format!("{base}/user/1")).send().await.unwrap();
    assert_eq!(res.status(), 404);

    let res = client.get(format!("{base}/users")).send().await.unwrap();
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn delete_unknown_user_is_400() {
    let (addr, _shutdown) = common::spawn_server().await;
    let client = common::client();

    let res = client
        .delete(format!("http://{}/user/ghost", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 400);
}

#[tokio::test]
async fn list_reflects_all_created_users() {
    let (addr, _shutdown) = common::spawn_server().await;
    let client = common::client();
    let base = format!("http://{}", addr);

    let res = client.get(format!("{base}/users")).send().await.unwrap();
    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!([]));

    for (id, name) in [("1", "Ann"), ("2", "Ben"), ("3", "Cam")] {
        client
            .post(format!("{base}/user"))
            .json(&json!({"id": id, "name": name, "email": format!("{name}@x.com")}))
            .send()
            .await
            .unwrap();
    }

    let res = client.get(format!("{base}/users")).send().await.unwrap();
    let body: Value = res.json().await.unwrap();
    let mut ids: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["id"].as_str().unwrap().to_string())
        .collect();
    ids.sort();
    assert_eq!(ids, vec!["1", "2", "3"]);
}
