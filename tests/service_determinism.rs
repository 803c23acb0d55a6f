//! Service Determinism Tests (Scenario B)
//!
//! Given a fixed loaded artifact pair, identical inputs produce identical
//! prediction and explanation results, across repeated calls and across
//! independent loads of the same artifact files.

mod common;

use stayscore::artifact::{ArtifactStore, OutputLayout};
use stayscore::booking::{BookingRecord, Country, DepositType, MarketSegment};
use stayscore::service::PredictionService;
use tempfile::TempDir;

use common::{fixture_explainer, fixture_pipeline, ready_service, write_artifacts};

fn sample_record() -> BookingRecord {
    BookingRecord {
        country: Country::new("GBR").unwrap(),
        market_segment: MarketSegment::Groups,
        deposit_type: DepositType::NonRefund,
        previous_cancellations: 2,
        booking_changes: 1,
        days_in_waiting_list: 30,
        ..BookingRecord::default()
    }
}

#[test]
fn test_repeated_calls_return_identical_results() {
    let tmp = TempDir::new().unwrap();
    let service = ready_service(tmp.path());
    let record = sample_record();

    let first = service.predict_and_explain(&record).unwrap();
    for _ in 0..50 {
        let next = service.predict_and_explain(&record).unwrap();
        assert_eq!(first, next);
    }
}

#[test]
fn test_independent_loads_of_the_same_files_agree() {
    let tmp = TempDir::new().unwrap();
    let paths = write_artifacts(
        tmp.path(),
        &fixture_pipeline(),
        &fixture_explainer(OutputLayout::ClassAxis),
    );

    let service_a = PredictionService::new(ArtifactStore::new(paths.clone()).get().unwrap());
    let service_b = PredictionService::new(ArtifactStore::new(paths).get().unwrap());

    let record = sample_record();
    assert_eq!(
        service_a.predict_and_explain(&record).unwrap(),
        service_b.predict_and_explain(&record).unwrap()
    );
}

#[test]
fn test_cloned_records_are_interchangeable() {
    let tmp = TempDir::new().unwrap();
    let service = ready_service(tmp.path());
    let record = sample_record();
    let clone = record.clone();
    assert_eq!(
        service.predict_and_explain(&record).unwrap(),
        service.predict_and_explain(&clone).unwrap()
    );
}
