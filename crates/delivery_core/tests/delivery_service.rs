use delivery_core::{
    sample_deliveries, sample_id, DeliveryFilter, DeliveryRepository, DeliveryService,
    DeliveryStatus, DeliverySubmission, InMemoryDeliveryRepository, RepoError, ServiceError,
    SubmissionError,
};
use uuid::Uuid;

fn seeded_repo() -> InMemoryDeliveryRepository {
    InMemoryDeliveryRepository::with_records(sample_deliveries().unwrap()).unwrap()
}

#[test]
fn submit_stores_valid_record() {
    let repo = InMemoryDeliveryRepository::new();
    let service = DeliveryService::new(&repo);

    let mut submission = DeliverySubmission::new("Rita Lopes", "Fornecedor ABC", "2025-11-20");
    submission.notes = Some("Portão lateral".to_string());
    let record = service.submit(&submission).unwrap();

    assert_eq!(record.status, DeliveryStatus::Pending);
    assert_eq!(record.notes.as_deref(), Some("Portão lateral"));
    assert_eq!(repo.get(record.id()).unwrap(), Some(record));
}

#[test]
fn invalid_submission_blocks_creation() {
    let repo = InMemoryDeliveryRepository::new();
    let service = DeliveryService::new(&repo);

    let mut submission = DeliverySubmission::new("X", "Y", "2025-01-01");
    submission.status = "shipped".to_string();
    let err = service.submit(&submission).unwrap_err();

    assert_eq!(
        err,
        ServiceError::Submission(SubmissionError::InvalidStatus {
            value: "shipped".to_string()
        })
    );
    assert!(repo.is_empty().unwrap());
}

#[test]
fn history_filters_current_snapshot() {
    let service = DeliveryService::new(seeded_repo());

    let all = service.history(&DeliveryFilter::default()).unwrap();
    assert_eq!(all.len(), 6);

    let delayed = service
        .history(&DeliveryFilter::default().with_status(DeliveryStatus::Delayed))
        .unwrap();
    assert_eq!(delayed.len(), 1);
    assert_eq!(delayed[0].id(), sample_id(3));
}

#[test]
fn set_status_is_visible_in_history_and_dashboard() {
    let service = DeliveryService::new(seeded_repo());

    service
        .set_status(sample_id(3), DeliveryStatus::Delivered)
        .unwrap();

    let delayed = service
        .history(&DeliveryFilter::default().with_status(DeliveryStatus::Delayed))
        .unwrap();
    assert!(delayed.is_empty());

    let dashboard = service.dashboard(4).unwrap();
    assert_eq!(dashboard.summary.total, 6);
    assert_eq!(dashboard.summary.count(DeliveryStatus::Delivered), 4);
    assert_eq!(dashboard.summary.count(DeliveryStatus::Delayed), 0);
    assert_eq!(dashboard.recent.len(), 4);
}

#[test]
fn set_status_unknown_id_is_not_found() {
    let service = DeliveryService::new(seeded_repo());
    let id = Uuid::from_u128(99);

    let err = service.set_status(id, DeliveryStatus::Delayed).unwrap_err();
    assert_eq!(err, ServiceError::Repo(RepoError::NotFound(id)));
}

#[test]
fn dashboard_on_empty_store_is_all_zero() {
    let service = DeliveryService::new(InMemoryDeliveryRepository::new());
    let dashboard = service.dashboard(4).unwrap();

    assert_eq!(dashboard.summary.total, 0);
    assert!(dashboard.summary.by_status.values().all(|count| *count == 0));
    assert!(dashboard.recent.is_empty());
}
