//! Domain data structures for addresses, waste types, and pickup calendars.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
/// Canonical waste categories collected by the supported providers.
///
/// Providers speak different wire vocabularies for the same categories; a
/// [`TypeVocabulary`](crate::profile::TypeVocabulary) normalizes their tokens
/// to this enum.
pub enum WasteType {
    /// Residual/grey bin.
    NonRecyclable,
    /// Organic waste, the green bin.
    Organic,
    /// Paper and cardboard.
    Paper,
    /// Plastic, metal, and drink cartons (light packaging).
    Packages,
    /// Christmas tree collection.
    Tree,
}

impl fmt::Display for WasteType {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            WasteType::NonRecyclable => "Non-recyclable",
            WasteType::Organic => "Organic",
            WasteType::Paper => "Paper",
            WasteType::Packages => "Packages",
            WasteType::Tree => "Tree",
        };
        write!(formatter, "{label}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
/// Opaque provider-assigned key correlating an address to its calendar.
///
/// Ximmio backends return it as a number, the 2go-mobile backend as a string;
/// both shapes are echoed back verbatim in calendar requests.
pub enum UniqueAddressId {
    /// Numeric identifier.
    Number(i64),
    /// Textual identifier.
    Text(String),
}

impl fmt::Display for UniqueAddressId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UniqueAddressId::Number(value) => write!(formatter, "{value}"),
            UniqueAddressId::Text(value) => write!(formatter, "{value}"),
        }
    }
}

impl From<i64> for UniqueAddressId {
    fn from(value: i64) -> Self {
        UniqueAddressId::Number(value)
    }
}

impl From<&str> for UniqueAddressId {
    fn from(value: &str) -> Self {
        UniqueAddressId::Text(value.to_owned())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Upcoming pickups per waste type, as returned by one calendar fetch.
///
/// The calendar is rebuilt in full on every fetch: a type with no pickups in
/// the queried window maps to an empty date list, never to a stale value from
/// an earlier fetch. Date lists are sorted ascending; under the
/// nearest-date-only aggregation policy they hold at most one entry.
pub struct PickupCalendar {
    pickups: BTreeMap<WasteType, Vec<NaiveDate>>,
}

impl PickupCalendar {
    /// Upcoming pickup dates for the given waste type, sorted ascending.
    ///
    /// Empty when the type had no pickups in the queried window or was absent
    /// from the provider response.
    #[must_use]
    pub fn dates(&self, waste_type: WasteType) -> &[NaiveDate] {
        self.pickups
            .get(&waste_type)
            .map_or(&[], |dates| dates.as_slice())
    }

    /// Date of the next pickup of the given waste type, if any is scheduled.
    #[must_use]
    pub fn next_pickup(&self, waste_type: WasteType) -> Option<NaiveDate> {
        self.dates(waste_type).first().copied()
    }

    /// Whether no pickups at all are scheduled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pickups.values().all(Vec::is_empty)
    }

    /// Iterator over all waste types and their pickup dates.
    pub fn iter(&self) -> impl Iterator<Item = (WasteType, &[NaiveDate])> {
        self.pickups
            .iter()
            .map(|(waste_type, dates)| (*waste_type, dates.as_slice()))
    }

    pub(crate) fn ensure(&mut self, waste_type: WasteType) {
        self.pickups.entry(waste_type).or_default();
    }

    pub(crate) fn append(&mut self, waste_type: WasteType, dates: Vec<NaiveDate>) {
        self.pickups.entry(waste_type).or_default().extend(dates);
    }

    pub(crate) fn replace(&mut self, waste_type: WasteType, dates: Vec<NaiveDate>) {
        self.pickups.insert(waste_type, dates);
    }

    pub(crate) fn sort(&mut self) {
        for dates in self.pickups.values_mut() {
            dates.sort_unstable();
        }
    }
}

/// Envelope wrapping every response body of the supported backends.
#[derive(Debug, Deserialize)]
pub(crate) struct DataList<Entry> {
    #[serde(rename = "dataList", default = "Vec::new")]
    pub(crate) data_list: Vec<Entry>,
}

/// Single match from the address-lookup endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct AddressMatch {
    #[serde(rename = "UniqueId")]
    pub(crate) unique_id: UniqueAddressId,
}

#[derive(Debug, Clone, Deserialize)]
/// Raw calendar entry as returned by the calendar endpoint.
///
/// Which of the two type fields is populated depends on the provider; the
/// profile's vocabulary knows which one to read.
pub struct CalendarEntry {
    /// Numeric type code, read by code-based vocabularies.
    #[serde(rename = "pickupType", default)]
    pub pickup_type: Option<i64>,
    /// Textual type label, read by label-based vocabularies.
    #[serde(rename = "_pickupTypeText", default)]
    pub pickup_type_text: Option<String>,
    /// Pickup timestamps in `YYYY-MM-DDTHH:MM:SS` format.
    #[serde(rename = "pickupDates", default)]
    pub pickup_dates: Vec<String>,
}
