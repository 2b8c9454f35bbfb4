use chrono::NaiveDate;
use delivery_core::{recent, sample_deliveries, sample_id, summarize, DeliveryRecord, DeliveryStatus};
use proptest::prelude::*;
use std::collections::BTreeMap;

fn nov(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 11, day).unwrap()
}

#[test]
fn summary_of_two_records_counts_each_status() {
    let records = vec![
        DeliveryRecord::new("João Silva", "Centro de Distribuição", nov(15))
            .with_status(DeliveryStatus::Delivered),
        DeliveryRecord::new("Maria Santos", "Fornecedor ABC", nov(15)),
    ];

    let summary = summarize(&records);
    assert_eq!(summary.total, 2);
    assert_eq!(
        summary.by_status,
        BTreeMap::from([
            (DeliveryStatus::Pending, 1),
            (DeliveryStatus::Delivered, 1),
            (DeliveryStatus::Delayed, 0),
        ])
    );
}

#[test]
fn sample_history_summary() {
    let summary = summarize(&sample_deliveries().unwrap());
    assert_eq!(summary.total, 6);
    assert_eq!(summary.count(DeliveryStatus::Delivered), 3);
    assert_eq!(summary.count(DeliveryStatus::Pending), 2);
    assert_eq!(summary.count(DeliveryStatus::Delayed), 1);
}

#[test]
fn summary_serializes_status_keys_as_wire_codes() {
    let json = serde_json::to_value(summarize(&[])).unwrap();
    assert_eq!(json["total"], 0);
    assert_eq!(json["by_status"]["pending"], 0);
    assert_eq!(json["by_status"]["delivered"], 0);
    assert_eq!(json["by_status"]["delayed"], 0);
}

#[test]
fn recent_sample_deliveries_newest_first() {
    let records = sample_deliveries().unwrap();
    let ids: Vec<_> = recent(&records, 4).iter().map(DeliveryRecord::id).collect();
    assert_eq!(ids, vec![sample_id(6), sample_id(2), sample_id(1), sample_id(4)]);
}

fn arb_status() -> impl Strategy<Value = DeliveryStatus> {
    prop_oneof![
        Just(DeliveryStatus::Pending),
        Just(DeliveryStatus::Delivered),
        Just(DeliveryStatus::Delayed),
    ]
}

proptest! {
    #[test]
    fn totals_match_length_and_sum(statuses in prop::collection::vec(arb_status(), 0..50)) {
        let records: Vec<_> = statuses
            .iter()
            .map(|status| DeliveryRecord::new("R", "O", nov(1)).with_status(*status))
            .collect();

        let summary = summarize(&records);
        prop_assert_eq!(summary.total, records.len());
        prop_assert_eq!(summary.by_status.values().sum::<usize>(), summary.total);
        prop_assert_eq!(summary.by_status.len(), 3);
    }
}
