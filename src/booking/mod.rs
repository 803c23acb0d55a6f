//! Booking input domain for stayscore
//!
//! The booking module owns the typed request surface:
//!
//! - Closed categorical domains (country codes, market segments, deposit
//!   types, customer types, room types)
//! - Bounded integer fields
//! - The `BookingRecord` row handed to the inference service
//! - Form-schema metadata so the input widget can enforce the same bounds
//!
//! Validation is deterministic: a record either satisfies every declared
//! domain and bound or fails with a `RecordError` naming the field.

mod errors;
mod fields;
mod record;

pub use errors::RecordError;
pub use fields::{
    form_schema, Country, CustomerType, DepositType, FieldSpec, MarketSegment, ReservedRoomType,
    COUNTRY_CODES,
};
pub use record::{BookingRecord, COLUMNS};
