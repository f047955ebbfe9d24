//! Mock-server tests for the auth and candidate repositories.
//!
//! These drive the full stack: repository, credential store, client, and a
//! wiremock server standing in for the Vitesse API. Matchers pin the exact
//! paths, header values, and JSON bodies the server must see.

use std::sync::Arc;

use vitesse_client::prelude::*;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(ApiConfig::new(server.uri()))
}

fn store_with_token(token: &str) -> Arc<MemoryCredentialStore> {
    let store = MemoryCredentialStore::new();
    store.save(AUTH_TOKEN_KEY, token).unwrap();
    Arc::new(store)
}

fn candidate_json(id: Uuid) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "firstName": "Ada",
        "lastName": "Lovelace",
        "email": "ada@example.com",
        "phone": "0600000000",
        "linkedinURL": "https://linkedin.com/in/ada",
        "isFavorite": false,
    })
}

#[tokio::test]
async fn login_persists_the_token_and_builds_a_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/user/auth"))
        .and(body_json(serde_json::json!({
            "email": "admin@vitesse.com",
            "password": "test123",
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"token": "tok-1", "isAdmin": true})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let store = Arc::new(MemoryCredentialStore::new());
    let auth = AuthRepository::new(client_for(&server), store.clone());

    let session = auth.login("admin@vitesse.com", "test123").await.unwrap();

    assert!(session.is_admin());
    assert_eq!(session.token().expose_secret(), "tok-1");
    assert_eq!(store.retrieve(AUTH_TOKEN_KEY).unwrap(), "tok-1");
}

#[tokio::test]
async fn second_login_replaces_the_stored_token() {
    let store = store_with_token("tok-old");

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/user/auth"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"token": "tok-new", "isAdmin": false})),
        )
        .mount(&server)
        .await;

    let auth = AuthRepository::new(client_for(&server), store.clone());
    let session = auth.login("user@vitesse.com", "pw").await.unwrap();

    assert!(!session.is_admin());
    assert_eq!(store.retrieve(AUTH_TOKEN_KEY).unwrap(), "tok-new");
}

#[tokio::test]
async fn authenticate_sends_no_authorization_header() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/user/auth"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"token": "tok-1", "isAdmin": false})),
        )
        .mount(&server)
        .await;

    // The store already holds a token; authenticate must not attach it.
    let auth = AuthRepository::new(client_for(&server), store_with_token("stale"));
    auth.authenticate("a@b.c", "pw").await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn register_succeeds_on_an_empty_reply() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/user/register"))
        .and(body_json(serde_json::json!({
            "email": "ada@example.com",
            "password": "pw",
            "firstName": "Ada",
            "lastName": "Lovelace",
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let auth = AuthRepository::new(client_for(&server), Arc::new(MemoryCredentialStore::new()));
    auth.register(&RegisterRequest {
        email: "ada@example.com".into(),
        password: "pw".into(),
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
    })
    .await
    .unwrap();
}

#[tokio::test]
async fn list_attaches_the_stored_bearer_token() {
    let id = Uuid::new_v4();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/candidate"))
        .and(header("Authorization", "Bearer tok-7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            candidate_json(id)
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let repository = CandidateRepository::new(client_for(&server), store_with_token("tok-7"));
    let candidates = repository.list().await.unwrap();

    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].id, id);
    assert_eq!(candidates[0].first_name, "Ada");
    assert_eq!(
        candidates[0].linkedin_url.as_ref().map(|url| url.as_str()),
        Some("https://linkedin.com/in/ada")
    );
}

#[tokio::test]
async fn missing_token_never_reaches_the_server() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/candidate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let repository = CandidateRepository::new(
        client_for(&server),
        Arc::new(MemoryCredentialStore::new()),
    );
    let error = repository.list().await.unwrap_err();

    assert!(error.is_credential_missing());
}

#[tokio::test]
async fn get_decodes_a_single_candidate() {
    let id = Uuid::new_v4();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/candidate/{id}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_json(id)))
        .expect(1)
        .mount(&server)
        .await;

    let repository = CandidateRepository::new(client_for(&server), store_with_token("tok-1"));
    let candidate = repository.get(id).await.unwrap();

    assert_eq!(candidate.id, id);
    assert_eq!(candidate.phone.as_deref(), Some("0600000000"));
    assert_eq!(candidate.note, None);
}

#[tokio::test]
async fn create_posts_the_wire_form_and_returns_the_record() {
    let candidate = Candidate::new("Ada", "Lovelace", "ada@example.com");
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/candidate"))
        .and(body_json(serde_json::json!({
            "id": candidate.id,
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "isFavorite": false,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_json(candidate.id)))
        .expect(1)
        .mount(&server)
        .await;

    let repository = CandidateRepository::new(client_for(&server), store_with_token("tok-1"));
    let created = repository.create(&candidate).await.unwrap();

    assert_eq!(created.id, candidate.id);
    assert_eq!(created.phone.as_deref(), Some("0600000000"));
}

#[tokio::test]
async fn update_puts_to_the_candidate_path() {
    let mut candidate = Candidate::new("Ada", "Lovelace", "ada@example.com");
    candidate.note = Some("updated".into());
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path(format!("/candidate/{}", candidate.id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": candidate.id,
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "note": "updated",
            "isFavorite": false,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let repository = CandidateRepository::new(client_for(&server), store_with_token("tok-1"));
    let updated = repository.update(&candidate).await.unwrap();

    assert_eq!(updated.note.as_deref(), Some("updated"));
}

#[tokio::test]
async fn toggle_favorite_posts_and_returns_the_flipped_record() {
    let id = Uuid::new_v4();
    let server = MockServer::start().await;
    let mut flipped = candidate_json(id);
    flipped["isFavorite"] = serde_json::Value::Bool(true);
    Mock::given(method("POST"))
        .and(path(format!("/candidate/{id}/favorite")))
        .respond_with(ResponseTemplate::new(200).set_body_json(flipped))
        .expect(1)
        .mount(&server)
        .await;

    let repository = CandidateRepository::new(client_for(&server), store_with_token("tok-1"));
    let candidate = repository.toggle_favorite(id).await.unwrap();

    assert!(candidate.is_favorite);
}

#[tokio::test]
async fn delete_tolerates_an_empty_reply() {
    let id = Uuid::new_v4();
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(format!("/candidate/{id}")))
        .and(header("Authorization", "Bearer tok-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let repository = CandidateRepository::new(client_for(&server), store_with_token("tok-1"));
    repository.delete(id).await.unwrap();
}

#[tokio::test]
async fn batch_delete_keeps_going_past_failures() {
    let ids: Vec<Uuid> = (0..3).map(|_| Uuid::new_v4()).collect();
    let server = MockServer::start().await;
    for (index, id) in ids.iter().enumerate() {
        let status = if index == 1 { 500 } else { 204 };
        Mock::given(method("DELETE"))
            .and(path(format!("/candidate/{id}")))
            .respond_with(ResponseTemplate::new(status))
            .expect(1)
            .mount(&server)
            .await;
    }

    let repository = CandidateRepository::new(client_for(&server), store_with_token("tok-1"));
    let outcome = repository.delete_many(&ids).await;

    assert_eq!(outcome.succeeded, vec![ids[0], ids[2]]);
    assert_eq!(outcome.failure_count(), 1);
    assert_eq!(outcome.failed[0].0, ids[1]);
    assert_eq!(outcome.failed[0].1.http_status(), Some(500));
}

#[tokio::test]
async fn expired_session_surfaces_as_http_401() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/candidate"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let repository = CandidateRepository::new(client_for(&server), store_with_token("tok-expired"));
    let error = repository.list().await.unwrap_err();

    assert_eq!(error.http_status(), Some(401));
    assert!(!error.is_credential_missing());
}
