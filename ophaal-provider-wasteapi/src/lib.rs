//! Provider profile for the generic WasteAPI backend.
//!
//! Several Dutch collectors share this 2go-mobile hosted backend and are told
//! apart only by their company code, which the caller must supply. Request
//! bodies are form-encoded, entries carry textual labels, and only the
//! nearest pickup date is kept per waste type.

use ophaal_core::{
    client::WasteClient,
    model::WasteType,
    profile::{Aggregation, BodyEncoding, ProviderProfile, ResponsePolicy, TypeVocabulary},
};

/// Labels the calendar endpoint tags its entries with.
const WASTE_LABELS: &[(&str, WasteType)] = &[
    ("GREEN", WasteType::Organic),
    ("GREY", WasteType::NonRecyclable),
    ("PACKAGES", WasteType::Packages),
    ("PAPER", WasteType::Paper),
];

/// Profile describing the shared WasteAPI backend.
///
/// Carries no company code of its own; [`client`] injects the caller's.
pub const PROFILE: ProviderProfile = ProviderProfile {
    host: "wasteapi.2go-mobile.com",
    company_code: None,
    address_path: "FetchAdress",
    calendar_path: "GetCalendar",
    user_agent_product: "OphaalWasteApi",
    encoding: BodyEncoding::Form,
    response_policy: ResponsePolicy::Lenient,
    aggregation: Aggregation::NearestOnly,
    vocabulary: TypeVocabulary::Labels(WASTE_LABELS),
    window_days: 100,
};

/// Build a WasteAPI client for the given collector and address.
#[must_use]
pub fn client(
    company_code: impl Into<String>,
    post_code: impl Into<String>,
    house_number: impl ToString,
) -> WasteClient {
    WasteClient::new(PROFILE, post_code, house_number).with_company_code(company_code)
}
