use crate::common::*;
use api::DishClient;
use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use shared_types::{
    DishDetails, PizzaDetails, PreparationTime, SandwichDetails, SubmissionPayload,
    SubmitErrorKind,
};

fn pizza() -> SubmissionPayload {
    SubmissionPayload {
        name: "Margherita".to_string(),
        preparation_time: PreparationTime::new(0, 45, 0).unwrap(),
        details: DishDetails::Pizza(PizzaDetails {
            no_of_slices: 4,
            diameter: 30.0,
        }),
    }
}

#[tokio::test]
async fn submit_posts_json_payload() {
    let stub = spawn_stub(StatusCode::CREATED, r#"{"id":1}"#).await;
    let client = DishClient::new(stub.url.clone());

    client.submit(&pizza()).await.unwrap();

    let received = stub.received().await;
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].content_type.as_deref(), Some("application/json"));
    assert_eq!(
        received[0].body,
        serde_json::json!({
            "name": "Margherita",
            "preparation_time": "00:45:00",
            "type": "pizza",
            "no_of_slices": 4,
            "diameter": 30.0,
        })
    );
}

#[tokio::test]
async fn submit_ignores_success_body() {
    let stub = spawn_stub(StatusCode::OK, "not json").await;
    let client = DishClient::new(stub.url.clone());
    assert!(client.submit(&pizza()).await.is_ok());
}

#[tokio::test]
async fn rejection_surfaces_server_message() {
    let stub = spawn_stub(
        StatusCode::UNPROCESSABLE_ENTITY,
        r#"{"message":"Dish already exists"}"#,
    )
    .await;
    let client = DishClient::new(stub.url.clone());

    let err = client.submit(&pizza()).await.unwrap_err();
    assert_eq!(err.kind, SubmitErrorKind::Rejected);
    assert_eq!(err.status, Some(422));
    assert_eq!(err.message, "Dish already exists");
}

#[tokio::test]
async fn rejection_without_message_uses_status_text() {
    let stub = spawn_stub(StatusCode::INTERNAL_SERVER_ERROR, "{}").await;
    let client = DishClient::new(stub.url.clone());

    let err = client.submit(&pizza()).await.unwrap_err();
    assert_eq!(err.kind, SubmitErrorKind::Rejected);
    assert_eq!(err.status, Some(500));
    assert_eq!(err.message, "Internal Server Error");
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_error() {
    let client = DishClient::new(dead_endpoint().await);

    let err = client.submit(&pizza()).await.unwrap_err();
    assert_eq!(err.kind, SubmitErrorKind::Transport);
    assert_eq!(err.status, None);
}

#[tokio::test]
async fn repeated_submits_are_not_deduplicated() {
    let stub = spawn_stub(StatusCode::OK, "{}").await;
    let client = DishClient::new(stub.url.clone());
    let sandwich = SubmissionPayload {
        name: "Club".to_string(),
        preparation_time: PreparationTime::new(0, 10, 0).unwrap(),
        details: DishDetails::Sandwich(SandwichDetails { slices_of_bread: 3 }),
    };

    client.submit(&sandwich).await.unwrap();
    client.submit(&sandwich).await.unwrap();

    let received = stub.received().await;
    assert_eq!(received.len(), 2);
    assert_eq!(received[0].body, received[1].body);
    assert_eq!(received[1].body["slices_of_bread"], 3);
}
