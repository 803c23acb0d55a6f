//! Closed field domains for booking records
//!
//! Every categorical field is a closed enumeration matching the values the
//! pipeline was trained on; the wire strings (serde renames) are the exact
//! training-data category labels. Integer bounds mirror the input widget.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::errors::RecordError;

/// Closed set of country codes the pipeline was trained on, with an
/// explicit `Other` fallback as the final entry.
pub const COUNTRY_CODES: [&str; 53] = [
    "PRT", "GBR", "USA", "ESP", "IRL", "FRA", "DEU", "ITA", "BEL", "NLD", "CHN", "BRA", "CHE",
    "AUT", "POL", "SWE", "CZE", "DNK", "RUS", "ROU", "NOR", "FIN", "ISR", "TUR", "AUS", "SGP",
    "IND", "JPN", "KOR", "NZL", "ZAF", "ARG", "MEX", "CHL", "ARE", "SAU", "EGY", "MAR", "UKR",
    "GRC", "HKG", "TWN", "BGD", "PAK", "LBN", "IRN", "IRQ", "IDN", "THA", "MYS", "VNM", "PHL",
    "Other",
];

/// Validated country code
///
/// Newtype over the closed `COUNTRY_CODES` set; construction fails for any
/// code outside the set, so a held value is always a trained category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Country(String);

impl Country {
    /// Create a country from a code in the closed set
    pub fn new(code: &str) -> Result<Self, RecordError> {
        if COUNTRY_CODES.contains(&code) {
            Ok(Country(code.to_string()))
        } else {
            Err(RecordError::UnknownCountry(code.to_string()))
        }
    }

    /// The `Other` fallback entry
    pub fn other() -> Self {
        Country("Other".to_string())
    }

    /// Wire string for this country
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Country {
    fn default() -> Self {
        Country(COUNTRY_CODES[0].to_string())
    }
}

impl TryFrom<String> for Country {
    type Error = RecordError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Country::new(&value)
    }
}

impl From<Country> for String {
    fn from(country: Country) -> String {
        country.0
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Market segment of the booking channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MarketSegment {
    #[default]
    #[serde(rename = "Online TA")]
    OnlineTa,
    #[serde(rename = "Offline TA/TO")]
    OfflineTaTo,
    Direct,
    Groups,
    Corporate,
    Complementary,
    Aviation,
    Undefined,
}

impl MarketSegment {
    pub const ALL: [MarketSegment; 8] = [
        MarketSegment::OnlineTa,
        MarketSegment::OfflineTaTo,
        MarketSegment::Direct,
        MarketSegment::Groups,
        MarketSegment::Corporate,
        MarketSegment::Complementary,
        MarketSegment::Aviation,
        MarketSegment::Undefined,
    ];

    /// Wire string (the trained category label)
    pub fn as_str(&self) -> &'static str {
        match self {
            MarketSegment::OnlineTa => "Online TA",
            MarketSegment::OfflineTaTo => "Offline TA/TO",
            MarketSegment::Direct => "Direct",
            MarketSegment::Groups => "Groups",
            MarketSegment::Corporate => "Corporate",
            MarketSegment::Complementary => "Complementary",
            MarketSegment::Aviation => "Aviation",
            MarketSegment::Undefined => "Undefined",
        }
    }
}

/// Deposit arrangement for the booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DepositType {
    #[default]
    #[serde(rename = "No Deposit")]
    NoDeposit,
    #[serde(rename = "Non Refund")]
    NonRefund,
    Refundable,
}

impl DepositType {
    pub const ALL: [DepositType; 3] = [
        DepositType::NoDeposit,
        DepositType::NonRefund,
        DepositType::Refundable,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DepositType::NoDeposit => "No Deposit",
            DepositType::NonRefund => "Non Refund",
            DepositType::Refundable => "Refundable",
        }
    }
}

/// Customer category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CustomerType {
    #[default]
    Transient,
    #[serde(rename = "Transient-Party")]
    TransientParty,
    Contract,
    Group,
}

impl CustomerType {
    pub const ALL: [CustomerType; 4] = [
        CustomerType::Transient,
        CustomerType::TransientParty,
        CustomerType::Contract,
        CustomerType::Group,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CustomerType::Transient => "Transient",
            CustomerType::TransientParty => "Transient-Party",
            CustomerType::Contract => "Contract",
            CustomerType::Group => "Group",
        }
    }
}

/// Reserved room type letter code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ReservedRoomType {
    #[default]
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    L,
    P,
}

impl ReservedRoomType {
    pub const ALL: [ReservedRoomType; 10] = [
        ReservedRoomType::A,
        ReservedRoomType::B,
        ReservedRoomType::C,
        ReservedRoomType::D,
        ReservedRoomType::E,
        ReservedRoomType::F,
        ReservedRoomType::G,
        ReservedRoomType::H,
        ReservedRoomType::L,
        ReservedRoomType::P,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReservedRoomType::A => "A",
            ReservedRoomType::B => "B",
            ReservedRoomType::C => "C",
            ReservedRoomType::D => "D",
            ReservedRoomType::E => "E",
            ReservedRoomType::F => "F",
            ReservedRoomType::G => "G",
            ReservedRoomType::H => "H",
            ReservedRoomType::L => "L",
            ReservedRoomType::P => "P",
        }
    }
}

/// One form field description served to the input widget
///
/// The widget is the bounds-enforcement layer: it renders closed option
/// lists for categoricals and min/max-clamped number inputs for integers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldSpec {
    Categorical {
        name: &'static str,
        label: &'static str,
        options: Vec<String>,
        default: String,
    },
    Integer {
        name: &'static str,
        label: &'static str,
        min: u32,
        max: u32,
        default: u32,
    },
}

/// Form schema in pipeline column order
pub fn form_schema() -> Vec<FieldSpec> {
    vec![
        FieldSpec::Categorical {
            name: "country",
            label: "Country",
            options: COUNTRY_CODES.iter().map(|c| c.to_string()).collect(),
            default: Country::default().as_str().to_string(),
        },
        FieldSpec::Categorical {
            name: "market_segment",
            label: "Market Segment",
            options: MarketSegment::ALL.iter().map(|v| v.as_str().to_string()).collect(),
            default: MarketSegment::default().as_str().to_string(),
        },
        FieldSpec::Categorical {
            name: "deposit_type",
            label: "Deposit Type",
            options: DepositType::ALL.iter().map(|v| v.as_str().to_string()).collect(),
            default: DepositType::default().as_str().to_string(),
        },
        FieldSpec::Categorical {
            name: "customer_type",
            label: "Customer Type",
            options: CustomerType::ALL.iter().map(|v| v.as_str().to_string()).collect(),
            default: CustomerType::default().as_str().to_string(),
        },
        FieldSpec::Categorical {
            name: "reserved_room_type",
            label: "Reserved Room Type",
            options: ReservedRoomType::ALL.iter().map(|v| v.as_str().to_string()).collect(),
            default: ReservedRoomType::default().as_str().to_string(),
        },
        FieldSpec::Integer {
            name: "previous_cancellations",
            label: "Previous Cancellations",
            min: 0,
            max: super::record::PREVIOUS_CANCELLATIONS_MAX,
            default: 0,
        },
        FieldSpec::Integer {
            name: "booking_changes",
            label: "Booking Changes",
            min: 0,
            max: super::record::BOOKING_CHANGES_MAX,
            default: 0,
        },
        FieldSpec::Integer {
            name: "days_in_waiting_list",
            label: "Days in Waiting List",
            min: 0,
            max: super::record::DAYS_IN_WAITING_LIST_MAX,
            default: 0,
        },
        FieldSpec::Integer {
            name: "required_car_parking_spaces",
            label: "Required Car Parking Spaces",
            min: 0,
            max: super::record::REQUIRED_CAR_PARKING_SPACES_MAX,
            default: 0,
        },
        FieldSpec::Integer {
            name: "total_of_special_requests",
            label: "Total Special Requests",
            min: 0,
            max: super::record::TOTAL_OF_SPECIAL_REQUESTS_MAX,
            default: 0,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_accepts_closed_set() {
        assert!(Country::new("PRT").is_ok());
        assert!(Country::new("Other").is_ok());
    }

    #[test]
    fn test_country_rejects_unknown_code() {
        let err = Country::new("XXX").unwrap_err();
        assert_eq!(err, RecordError::UnknownCountry("XXX".to_string()));
    }

    #[test]
    fn test_country_is_case_sensitive() {
        assert!(Country::new("prt").is_err());
    }

    #[test]
    fn test_country_default_is_first_option() {
        assert_eq!(Country::default().as_str(), "PRT");
    }

    #[test]
    fn test_market_segment_wire_strings() {
        let json = serde_json::to_string(&MarketSegment::OfflineTaTo).unwrap();
        assert_eq!(json, "\"Offline TA/TO\"");
        let parsed: MarketSegment = serde_json::from_str("\"Online TA\"").unwrap();
        assert_eq!(parsed, MarketSegment::OnlineTa);
    }

    #[test]
    fn test_deposit_type_wire_strings() {
        let parsed: DepositType = serde_json::from_str("\"Non Refund\"").unwrap();
        assert_eq!(parsed, DepositType::NonRefund);
        assert_eq!(DepositType::NoDeposit.as_str(), "No Deposit");
    }

    #[test]
    fn test_unknown_enum_value_rejected() {
        let result: Result<DepositType, _> = serde_json::from_str("\"Partial\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_as_str_round_trips_through_serde() {
        for segment in MarketSegment::ALL {
            let json = serde_json::to_string(&segment).unwrap();
            assert_eq!(json, format!("\"{}\"", segment.as_str()));
        }
        for customer in CustomerType::ALL {
            let json = serde_json::to_string(&customer).unwrap();
            assert_eq!(json, format!("\"{}\"", customer.as_str()));
        }
    }

    #[test]
    fn test_form_schema_covers_all_columns() {
        let schema = form_schema();
        assert_eq!(schema.len(), 10);

        let names: Vec<&str> = schema
            .iter()
            .map(|f| match f {
                FieldSpec::Categorical { name, .. } => *name,
                FieldSpec::Integer { name, .. } => *name,
            })
            .collect();
        assert_eq!(names, super::super::record::COLUMNS);
    }

    #[test]
    fn test_form_schema_defaults_are_lowest_risk_baseline() {
        for field in form_schema() {
            match field {
                FieldSpec::Categorical { options, default, .. } => {
                    assert_eq!(options[0], default);
                }
                FieldSpec::Integer { min, default, .. } => {
                    assert_eq!(min, default);
                }
            }
        }
    }
}
