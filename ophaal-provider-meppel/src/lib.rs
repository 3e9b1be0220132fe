//! Provider profile for the Meppel Afvalkalender API.
//!
//! Meppel runs the older Ximmio backend: JSON request bodies, textual waste
//! type labels, a 100-day window, and only the nearest pickup date kept per
//! waste type.

use ophaal_core::{
    client::WasteClient,
    model::WasteType,
    profile::{Aggregation, BodyEncoding, ProviderProfile, ResponsePolicy, TypeVocabulary},
};

/// Company code the Meppel calendar is registered under at Ximmio.
pub const COMPANY_CODE: &str = "b7a594c7-2490-4413-88f9-94749a3ec62a";

/// Labels the calendar endpoint tags its entries with.
const WASTE_LABELS: &[(&str, WasteType)] = &[
    ("GREEN", WasteType::Organic),
    ("GREY", WasteType::NonRecyclable),
    ("PACKAGES", WasteType::Packages),
    ("PAPER", WasteType::Paper),
];

/// Profile describing the Meppel Afvalkalender backend.
pub const PROFILE: ProviderProfile = ProviderProfile {
    host: "wasteapi.ximmio.com",
    company_code: Some(COMPANY_CODE),
    address_path: "FetchAdress",
    calendar_path: "GetCalendar",
    user_agent_product: "OphaalMeppelAfvalkalender",
    encoding: BodyEncoding::Json,
    response_policy: ResponsePolicy::Lenient,
    aggregation: Aggregation::NearestOnly,
    vocabulary: TypeVocabulary::Labels(WASTE_LABELS),
    window_days: 100,
};

/// Build a Meppel Afvalkalender client for the given address.
#[must_use]
pub fn client(post_code: impl Into<String>, house_number: impl ToString) -> WasteClient {
    WasteClient::new(PROFILE, post_code, house_number)
}
