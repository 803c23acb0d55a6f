//! The single-row booking record passed to inference
//!
//! A `BookingRecord` is ephemeral: constructed per request, validated at the
//! service boundary, never stored. Field defaults are the lowest-risk
//! baseline (first category of each enumeration, zero for every counter), so
//! a defaulted record is always valid.

use serde::{Deserialize, Serialize};

use super::errors::RecordError;
use super::fields::{Country, CustomerType, DepositType, MarketSegment, ReservedRoomType};

/// Raw column names in the exact order the pipeline was trained with
pub const COLUMNS: [&str; 10] = [
    "country",
    "market_segment",
    "deposit_type",
    "customer_type",
    "reserved_room_type",
    "previous_cancellations",
    "booking_changes",
    "days_in_waiting_list",
    "required_car_parking_spaces",
    "total_of_special_requests",
];

pub const PREVIOUS_CANCELLATIONS_MAX: u32 = 26;
pub const BOOKING_CHANGES_MAX: u32 = 21;
pub const DAYS_IN_WAITING_LIST_MAX: u32 = 400;
pub const REQUIRED_CAR_PARKING_SPACES_MAX: u32 = 8;
pub const TOTAL_OF_SPECIAL_REQUESTS_MAX: u32 = 5;

/// One booking, as collected from the input form
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BookingRecord {
    #[serde(default)]
    pub country: Country,
    #[serde(default)]
    pub market_segment: MarketSegment,
    #[serde(default)]
    pub deposit_type: DepositType,
    #[serde(default)]
    pub customer_type: CustomerType,
    #[serde(default)]
    pub reserved_room_type: ReservedRoomType,
    #[serde(default)]
    pub previous_cancellations: u32,
    #[serde(default)]
    pub booking_changes: u32,
    #[serde(default)]
    pub days_in_waiting_list: u32,
    #[serde(default)]
    pub required_car_parking_spaces: u32,
    #[serde(default)]
    pub total_of_special_requests: u32,
}

impl BookingRecord {
    /// Check every integer field against its declared bound
    ///
    /// Categorical fields cannot hold out-of-domain values by construction,
    /// so only the counters need a range check here.
    pub fn validate(&self) -> Result<(), RecordError> {
        check_range(
            "previous_cancellations",
            self.previous_cancellations,
            PREVIOUS_CANCELLATIONS_MAX,
        )?;
        check_range("booking_changes", self.booking_changes, BOOKING_CHANGES_MAX)?;
        check_range(
            "days_in_waiting_list",
            self.days_in_waiting_list,
            DAYS_IN_WAITING_LIST_MAX,
        )?;
        check_range(
            "required_car_parking_spaces",
            self.required_car_parking_spaces,
            REQUIRED_CAR_PARKING_SPACES_MAX,
        )?;
        check_range(
            "total_of_special_requests",
            self.total_of_special_requests,
            TOTAL_OF_SPECIAL_REQUESTS_MAX,
        )?;
        Ok(())
    }
}

fn check_range(field: &'static str, value: u32, max: u32) -> Result<(), RecordError> {
    if value > max {
        return Err(RecordError::OutOfRange {
            field,
            min: 0,
            max,
            value,
        });
    }
    Ok(())
}
