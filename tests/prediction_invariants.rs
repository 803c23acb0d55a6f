//! Prediction Invariant Tests
//!
//! - predict_and_explain is total over in-bounds records: a result or a
//!   reported error, never a panic
//! - probability_of_cancellation always lies in [0, 1]
//! - the label agrees with the artifact's own decision threshold
//! - out-of-bounds records are rejected without poisoning the service
//! - riskier inputs move the probability in the expected direction

mod common;

use stayscore::booking::{
    BookingRecord, Country, CustomerType, DepositType, MarketSegment, ReservedRoomType,
};
use stayscore::service::{Outcome, ServiceError};
use tempfile::TempDir;

use common::ready_service;

fn record_grid() -> Vec<BookingRecord> {
    let mut records = Vec::new();
    for country in ["PRT", "GBR", "JPN", "Other"] {
        for deposit_type in DepositType::ALL {
            for previous_cancellations in [0, 1, 26] {
                records.push(BookingRecord {
                    country: Country::new(country).unwrap(),
                    deposit_type,
                    previous_cancellations,
                    ..BookingRecord::default()
                });
            }
        }
    }
    for market_segment in MarketSegment::ALL {
        for customer_type in CustomerType::ALL {
            records.push(BookingRecord {
                market_segment,
                customer_type,
                reserved_room_type: ReservedRoomType::P,
                booking_changes: 21,
                days_in_waiting_list: 400,
                required_car_parking_spaces: 8,
                total_of_special_requests: 5,
                ..BookingRecord::default()
            });
        }
    }
    records
}

// =============================================================================
// Totality and probability bounds
// =============================================================================

#[test]
fn test_every_in_bounds_record_produces_a_result() {
    let tmp = TempDir::new().unwrap();
    let service = ready_service(tmp.path());
    for record in record_grid() {
        let (prediction, explanation) = service
            .predict_and_explain(&record)
            .unwrap_or_else(|e| panic!("record {:?} failed: {}", record, e));
        assert!(
            (0.0..=1.0).contains(&prediction.probability_of_cancellation),
            "probability out of range for {:?}",
            record
        );
        assert!(!explanation.contributions.is_empty());
    }
}

#[test]
fn test_label_agrees_with_decision_threshold() {
    let tmp = TempDir::new().unwrap();
    let service = ready_service(tmp.path());
    // Fixture threshold is 0.5
    for record in record_grid() {
        let (prediction, _) = service.predict_and_explain(&record).unwrap();
        let expected = if prediction.probability_of_cancellation >= 0.5 {
            Outcome::WillCancel
        } else {
            Outcome::WillProceed
        };
        assert_eq!(prediction.label, expected, "for record {:?}", record);
    }
}

// =============================================================================
// Bounds rejection
// =============================================================================

#[test]
fn test_out_of_bounds_record_is_rejected_not_fatal() {
    let tmp = TempDir::new().unwrap();
    let service = ready_service(tmp.path());

    let bad = BookingRecord {
        previous_cancellations: 27,
        ..BookingRecord::default()
    };
    assert!(matches!(
        service.predict_and_explain(&bad).unwrap_err(),
        ServiceError::InvalidRecord(_)
    ));

    // The next request still succeeds
    assert!(service.predict_and_explain(&BookingRecord::default()).is_ok());
}

// =============================================================================
// Directional behavior (Scenario A)
// =============================================================================

#[test]
fn test_non_refund_with_history_raises_cancellation_probability() {
    let tmp = TempDir::new().unwrap();
    let service = ready_service(tmp.path());

    let baseline = BookingRecord {
        deposit_type: DepositType::NoDeposit,
        previous_cancellations: 0,
        ..BookingRecord::default()
    };
    let risky = BookingRecord {
        deposit_type: DepositType::NonRefund,
        previous_cancellations: 5,
        ..BookingRecord::default()
    };

    let (base_pred, _) = service.predict_and_explain(&baseline).unwrap();
    let (risky_pred, _) = service.predict_and_explain(&risky).unwrap();

    assert!(
        risky_pred.probability_of_cancellation > base_pred.probability_of_cancellation,
        "expected {} > {}",
        risky_pred.probability_of_cancellation,
        base_pred.probability_of_cancellation
    );
}

#[test]
fn test_default_record_is_low_risk_under_fixture_model() {
    let tmp = TempDir::new().unwrap();
    let service = ready_service(tmp.path());
    let (prediction, _) = service
        .predict_and_explain(&BookingRecord::default())
        .unwrap();
    assert_eq!(prediction.label, Outcome::WillProceed);
}
