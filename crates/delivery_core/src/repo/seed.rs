//! Sample deliveries for the CLI, demos and tests.

use crate::model::delivery::{DeliveryId, DeliveryRecord};
use crate::model::submission::{DeliverySubmission, SubmissionError};

// (recipient, origin, status, date, time, notes)
const SAMPLE_ROWS: [(&str, &str, &str, &str, &str, &str); 6] = [
    ("João Silva", "Centro de Distribuição", "entregue", "2025-11-15", "14:30", "Entregue com sucesso"),
    ("Maria Santos", "Fornecedor ABC", "pendente", "2025-11-15", "15:00", "Aguardando confirmação"),
    ("Carlos Oliveira", "Centro de Distribuição", "atrasada", "2025-11-14", "10:00", "Cliente não estava no local"),
    ("Ana Costa", "Importadora XYZ", "entregue", "2025-11-15", "13:15", "Recebido por porteiro"),
    ("Pedro Martins", "Centro de Distribuição", "entregue", "2025-11-14", "16:45", "Entrega confirmada"),
    ("Juliana Ferreira", "Fornecedor ABC", "pendente", "2025-11-16", "09:00", "Entrega programada"),
];

/// Stable ID of the `n`-th sample record (1-based).
pub fn sample_id(n: u128) -> DeliveryId {
    DeliveryId::from_u128(n)
}

/// Returns the sample history, validated through the submission contract.
///
/// Rows use the legacy status codes; IDs are `sample_id(1..=6)`.
pub fn sample_deliveries() -> Result<Vec<DeliveryRecord>, SubmissionError> {
    SAMPLE_ROWS
        .iter()
        .zip(1u128..)
        .map(|(&(recipient, origin, status, date, time, notes), n)| {
            let submission = DeliverySubmission {
                recipient: recipient.to_string(),
                origin: origin.to_string(),
                expected_date: date.to_string(),
                status: status.to_string(),
                time: Some(time.to_string()),
                notes: Some(notes.to_string()),
            };
            Ok(submission.validate()?.into_record_with_id(sample_id(n)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{sample_deliveries, sample_id};
    use crate::model::delivery::DeliveryStatus;

    #[test]
    fn sample_rows_validate() {
        let records = sample_deliveries().unwrap();
        assert_eq!(records.len(), 6);
        assert_eq!(records[0].id(), sample_id(1));
        assert_eq!(records[2].status, DeliveryStatus::Delayed);
        assert!(records.iter().all(|r| r.time.is_some()));
    }
}
