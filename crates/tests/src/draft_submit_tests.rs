use crate::common::*;
use api::DishClient;
use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use shared_types::{DishField, DraftDish, SubmitError, SubmitErrorKind};

/// Type into a draft the way the form's change handler does.
fn typed(entries: &[(DishField, &str)]) -> DraftDish {
    let mut draft = DraftDish::new();
    for (field, raw) in entries {
        draft.apply_input(*field, raw);
    }
    draft
}

/// Validate then send, the order the form's submit handler uses.
async fn send_draft(client: &DishClient, draft: &DraftDish) -> Result<(), SubmitError> {
    let payload = draft.to_payload()?;
    client.submit(&payload).await
}

#[tokio::test]
async fn soup_after_pizza_sends_only_soup_fields() {
    let stub = spawn_stub(StatusCode::OK, "{}").await;
    let client = DishClient::new(stub.url.clone());
    let draft = typed(&[
        (DishField::Name, "Tom Yum"),
        (DishField::PreparationTime, "003000"),
        (DishField::Type, "pizza"),
        (DishField::NoOfSlices, "6"),
        (DishField::Diameter, "2850"),
        (DishField::Type, "soup"),
        (DishField::SpicinessScale, "7"),
    ]);
    assert_eq!(draft.diameter, "28.50");

    send_draft(&client, &draft).await.unwrap();

    let received = stub.received().await;
    assert_eq!(
        received[0].body,
        serde_json::json!({
            "name": "Tom Yum",
            "preparation_time": "00:30:00",
            "type": "soup",
            "spiciness_scale": 7,
        })
    );
}

#[tokio::test]
async fn masked_diameter_reaches_the_wire_as_a_number() {
    let stub = spawn_stub(StatusCode::OK, "{}").await;
    let client = DishClient::new(stub.url.clone());
    let draft = typed(&[
        (DishField::Name, "Quattro Formaggi"),
        (DishField::PreparationTime, "01:05:00"),
        (DishField::Type, "pizza"),
        (DishField::NoOfSlices, "8"),
        (DishField::Diameter, "325"),
    ]);

    send_draft(&client, &draft).await.unwrap();

    let body = &stub.received().await[0].body;
    assert_eq!(body["diameter"].as_f64(), Some(32.5));
    assert_eq!(body["no_of_slices"], 8);
}

#[tokio::test]
async fn invalid_draft_never_reaches_the_endpoint() {
    let stub = spawn_stub(StatusCode::OK, "{}").await;
    let client = DishClient::new(stub.url.clone());
    let draft = typed(&[
        (DishField::Name, "Pho"),
        (DishField::PreparationTime, "25:00:00"),
        (DishField::Type, "soup"),
        (DishField::SpicinessScale, "4"),
    ]);
    assert!(draft.preparation_time_error.is_some());

    let err = send_draft(&client, &draft).await.unwrap_err();
    assert_eq!(err.kind, SubmitErrorKind::Validation);
    assert_eq!(
        err.field_error("preparation_time"),
        Some("Preparation Time cannot exceed 23:59:59")
    );
    assert!(stub.received().await.is_empty());

    // Fixing the field lets the same draft through.
    let mut draft = draft;
    draft.apply_input(DishField::PreparationTime, "02:00:00");
    send_draft(&client, &draft).await.unwrap();
    assert_eq!(stub.received().await.len(), 1);
}
