//! Tests for the in-memory repository's store-side domain enforcement.

use studyhub::api::{EntryId, SemesterId, UserId};
use studyhub::db::repositories::LocalRepository;
use studyhub::db::repository::{RepositoryError, ScheduleRepository};
use studyhub::models::{NewScheduleEntry, SessionType};

fn entry(subject: &str, day: Option<i32>, start: &str, end: &str) -> NewScheduleEntry {
    NewScheduleEntry {
        user_id: UserId::new(1),
        semester_id: SemesterId::new(1),
        subject_name: subject.to_string(),
        day_of_week: day,
        start_time: start.to_string(),
        end_time: end.to_string(),
        room: None,
        session_type: SessionType::Lecture,
        campus_name: None,
        campus_address: None,
    }
}

#[tokio::test]
async fn test_create_assigns_sequential_ids() {
    let repo = LocalRepository::new();
    let first = repo
        .create_entry(&entry("Toán", Some(2), "08:00", "09:30"))
        .await
        .unwrap();
    let second = repo
        .create_entry(&entry("Lý", Some(3), "10:00", "11:30"))
        .await
        .unwrap();
    assert_eq!(first, EntryId::new(1));
    assert_eq!(second, EntryId::new(2));
    assert!(repo.has_entry(first));
}

#[tokio::test]
async fn test_day_of_week_domain_is_enforced_at_the_store() {
    let repo = LocalRepository::new();

    for day in [Some(0), Some(1), Some(9), None] {
        let err = repo
            .create_entry(&entry("Toán", day, "08:00", "09:30"))
            .await
            .unwrap_err();
        assert!(
            matches!(err, RepositoryError::ValidationError(_)),
            "day {day:?} should be rejected, got {err:?}"
        );
    }

    // Boundary values are accepted: 2 is Monday, 8 is Sunday.
    for day in [2, 8] {
        repo.create_entry(&entry("Toán", Some(day), "08:00", "09:30"))
            .await
            .unwrap();
    }
}

#[tokio::test]
async fn test_minute_precision_widens_to_seconds() {
    let repo = LocalRepository::new();
    repo.create_entry(&entry("Toán", Some(2), "08:00", "09:30"))
        .await
        .unwrap();

    let entries = repo
        .list_entries(SemesterId::new(1), UserId::new(1))
        .await
        .unwrap();
    assert_eq!(entries[0].start_time.format("%H:%M:%S").to_string(), "08:00:00");
    assert_eq!(entries[0].end_time.format("%H:%M:%S").to_string(), "09:30:00");
}

#[tokio::test]
async fn test_second_precision_is_preserved() {
    let repo = LocalRepository::new();
    repo.create_entry(&entry("Toán", Some(2), "08:00:15", "09:30:45"))
        .await
        .unwrap();

    let entries = repo
        .list_entries(SemesterId::new(1), UserId::new(1))
        .await
        .unwrap();
    assert_eq!(entries[0].start_time.format("%H:%M:%S").to_string(), "08:00:15");
}

#[tokio::test]
async fn test_unparseable_time_is_rejected() {
    let repo = LocalRepository::new();
    for bad in ["8h30", "25:00", "notatime", ""] {
        let err = repo
            .create_entry(&entry("Toán", Some(2), bad, "09:30"))
            .await
            .unwrap_err();
        assert!(
            matches!(err, RepositoryError::ValidationError(_)),
            "time {bad:?} should be rejected"
        );
    }
}

#[tokio::test]
async fn test_end_before_start_is_accepted() {
    // No ordering check exists between the two times anywhere in the
    // pipeline or the store.
    let repo = LocalRepository::new();
    repo.create_entry(&entry("Toán", Some(2), "10:00", "08:00"))
        .await
        .unwrap();
    assert_eq!(repo.entry_count(), 1);
}

#[tokio::test]
async fn test_overlapping_sessions_are_both_accepted() {
    // No conflict detection: two sessions in the same room and slot.
    let repo = LocalRepository::new();
    let mut first = entry("Toán", Some(2), "08:00", "09:30");
    first.room = Some("A101".to_string());
    let mut second = entry("Lý", Some(2), "08:00", "09:30");
    second.room = Some("A101".to_string());

    repo.create_entry(&first).await.unwrap();
    repo.create_entry(&second).await.unwrap();
    assert_eq!(repo.entry_count(), 2);
}

#[tokio::test]
async fn test_list_orders_by_day_then_start_time() {
    let repo = LocalRepository::new();
    repo.create_entry(&entry("Hóa", Some(4), "08:00", "09:30"))
        .await
        .unwrap();
    repo.create_entry(&entry("Lý", Some(2), "10:00", "11:30"))
        .await
        .unwrap();
    repo.create_entry(&entry("Toán", Some(2), "07:00", "08:30"))
        .await
        .unwrap();

    let entries = repo
        .list_entries(SemesterId::new(1), UserId::new(1))
        .await
        .unwrap();
    let subjects: Vec<&str> = entries.iter().map(|e| e.subject_name.as_str()).collect();
    assert_eq!(subjects, ["Toán", "Lý", "Hóa"]);
}

#[tokio::test]
async fn test_update_validates_like_create() {
    let repo = LocalRepository::new();
    let id = repo
        .create_entry(&entry("Toán", Some(2), "08:00", "09:30"))
        .await
        .unwrap();

    let err = repo
        .update_entry(id, &entry("Toán", Some(9), "08:00", "09:30"))
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::ValidationError(_)));

    let err = repo
        .update_entry(EntryId::new(42), &entry("Toán", Some(2), "08:00", "09:30"))
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound(_)));
}

#[tokio::test]
async fn test_unhealthy_store_rejects_operations() {
    let repo = LocalRepository::new();
    repo.set_healthy(false);

    let err = repo
        .create_entry(&entry("Toán", Some(2), "08:00", "09:30"))
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::ConnectionError(_)));

    let err = repo
        .list_entries(SemesterId::new(1), UserId::new(1))
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::ConnectionError(_)));
}

#[tokio::test]
async fn test_clear_keeps_health_resets_data() {
    let repo = LocalRepository::new();
    repo.create_entry(&entry("Toán", Some(2), "08:00", "09:30"))
        .await
        .unwrap();
    repo.clear();
    assert_eq!(repo.entry_count(), 0);
    assert!(repo.health_check().await.unwrap());
}
