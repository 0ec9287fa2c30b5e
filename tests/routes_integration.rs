#![cfg(feature = "http-server")]

//! Integration checks for the HTTP layer wiring.

use std::sync::Arc;

use studyhub::db::repositories::LocalRepository;
use studyhub::db::repository::ScheduleRepository;
use studyhub::db::services;
use studyhub::http::dto::{EntryRequest, ScheduleEntryDto};
use studyhub::http::{create_router, AppState};
use studyhub::models::SessionType;

fn request(subject: &str) -> EntryRequest {
    EntryRequest {
        user_id: 1,
        semester_id: 2,
        subject_name: subject.to_string(),
        day_of_week: Some(2),
        start_time: "08:00".to_string(),
        end_time: "09:30".to_string(),
        room: Some("A101".to_string()),
        session_type: Some("lt".to_string()),
        campus_name: None,
        campus_address: None,
    }
}

#[test]
fn test_router_creation() {
    let repo = Arc::new(LocalRepository::new()) as Arc<dyn ScheduleRepository>;
    let state = AppState::new(repo);
    let _router = create_router(state);
    // If we got here, router was created successfully
}

#[tokio::test]
async fn test_entry_request_flows_through_service_layer() {
    let repo = LocalRepository::new();
    let entry = request("Giải tích").into_new_entry();
    let id = services::create_entry(&repo, &entry).await.unwrap();
    assert_eq!(id.value(), 1);

    let entries = services::list_entries(
        &repo,
        studyhub::api::SemesterId::new(2),
        studyhub::api::UserId::new(1),
    )
    .await
    .unwrap();
    let dto = ScheduleEntryDto::from(entries[0].clone());
    assert_eq!(dto.subject_name, "Giải tích");
    assert_eq!(dto.start_time, "08:00");
    assert_eq!(dto.session_type, SessionType::Lecture);
}

#[test]
fn test_entry_request_deserializes_with_optional_fields_absent() {
    let json = r#"{
        "user_id": 1,
        "semester_id": 2,
        "subject_name": "Toán",
        "start_time": "08:00",
        "end_time": "09:30"
    }"#;
    let request: EntryRequest = serde_json::from_str(json).unwrap();
    let entry = request.into_new_entry();
    assert_eq!(entry.day_of_week, None);
    assert_eq!(entry.session_type, SessionType::Lecture);
    assert_eq!(entry.room, None);
}
