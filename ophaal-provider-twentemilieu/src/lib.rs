//! Provider profile for the Twente Milieu waste collection API.
//!
//! Twente Milieu runs the newer Ximmio backend: JSON request bodies, numeric
//! waste type codes, a year-long pickup window with every date kept, and a
//! strict JSON-only response contract.

use ophaal_core::{
    client::WasteClient,
    model::WasteType,
    profile::{Aggregation, BodyEncoding, ProviderProfile, ResponsePolicy, TypeVocabulary},
};

/// Company code Twente Milieu is registered under at Ximmio.
pub const COMPANY_CODE: &str = "8d97bb56-5afd-4cbc-a651-b4f7314264b4";

/// Numeric codes the calendar endpoint labels its entries with.
///
/// Code 56 is the communal packaging point used by high-density housing;
/// collection-wise it is the same category as the packages container.
const WASTE_CODES: &[(i64, WasteType)] = &[
    (0, WasteType::NonRecyclable),
    (1, WasteType::Organic),
    (2, WasteType::Paper),
    (6, WasteType::Tree),
    (10, WasteType::Packages),
    (56, WasteType::Packages),
];

/// Profile describing the Twente Milieu backend.
pub const PROFILE: ProviderProfile = ProviderProfile {
    host: "twentemilieuapi.ximmio.com",
    company_code: Some(COMPANY_CODE),
    address_path: "FetchAdress",
    calendar_path: "GetCalendar",
    user_agent_product: "OphaalTwenteMilieu",
    encoding: BodyEncoding::Json,
    response_policy: ResponsePolicy::JsonOnly,
    aggregation: Aggregation::AllSorted,
    vocabulary: TypeVocabulary::Codes(WASTE_CODES),
    window_days: 365,
};

/// Build a Twente Milieu client for the given address.
#[must_use]
pub fn client(post_code: impl Into<String>, house_number: impl ToString) -> WasteClient {
    WasteClient::new(PROFILE, post_code, house_number)
}

#[cfg(test)]
mod tests {
    use ophaal_core::model::CalendarEntry;

    use super::*;

    fn entry(code: i64) -> CalendarEntry {
        CalendarEntry {
            pickup_type: Some(code),
            pickup_type_text: None,
            pickup_dates: Vec::new(),
        }
    }

    #[test]
    fn maps_the_documented_codes() {
        let expectations = [
            (0, WasteType::NonRecyclable),
            (1, WasteType::Organic),
            (2, WasteType::Paper),
            (6, WasteType::Tree),
            (10, WasteType::Packages),
        ];
        for (code, expected) in expectations {
            assert_eq!(
                PROFILE.vocabulary.classify(&entry(code)),
                Some(expected),
                "code {code} should map to {expected}",
            );
        }
    }

    #[test]
    fn communal_packaging_is_a_packages_synonym() {
        assert_eq!(
            PROFILE.vocabulary.classify(&entry(56)),
            Some(WasteType::Packages),
            "code 56 is collected as packages",
        );
    }

    #[test]
    fn unknown_codes_classify_to_none() {
        assert_eq!(
            PROFILE.vocabulary.classify(&entry(999)),
            None,
            "unknown codes are dropped, not mapped",
        );
    }
}
