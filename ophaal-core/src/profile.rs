//! Provider profiles describing how each backend deviates from the shared
//! request pattern.

use crate::model::{CalendarEntry, WasteType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// How request bodies are encoded on the wire.
pub enum BodyEncoding {
    /// Body is a JSON document.
    Json,
    /// Body is `application/x-www-form-urlencoded`.
    Form,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// How a successful response with a non-JSON content type is treated.
pub enum ResponsePolicy {
    /// Pass the text body through to the caller.
    Lenient,
    /// Treat anything but JSON as an unexpected response error.
    JsonOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// How multiple pickup dates per waste type are aggregated.
pub enum Aggregation {
    /// Keep every date in the window, sorted ascending.
    AllSorted,
    /// Keep only the nearest date, discarding the rest.
    NearestOnly,
}

#[derive(Debug, Clone, Copy)]
/// Mapping from a provider's wire vocabulary to the canonical [`WasteType`]s.
///
/// The table is total over the tokens the provider is known to emit,
/// including synonyms (two wire tokens may map to the same type). Tokens not
/// in the table classify to `None` and are dropped by the calendar fetch,
/// since upstream vocabularies grow without notice.
pub enum TypeVocabulary {
    /// Provider labels entries through the `_pickupTypeText` field.
    Labels(&'static [(&'static str, WasteType)]),
    /// Provider labels entries through the numeric `pickupType` field.
    Codes(&'static [(i64, WasteType)]),
}

impl TypeVocabulary {
    /// Resolve a raw calendar entry to its canonical waste type.
    ///
    /// Returns `None` when the relevant field is missing or carries a token
    /// outside the table.
    #[must_use]
    pub fn classify(&self, entry: &CalendarEntry) -> Option<WasteType> {
        match self {
            TypeVocabulary::Labels(table) => {
                let label = entry.pickup_type_text.as_deref()?;
                table
                    .iter()
                    .find(|(token, _)| *token == label)
                    .map(|&(_, waste_type)| waste_type)
            }
            TypeVocabulary::Codes(table) => {
                let code = entry.pickup_type?;
                table
                    .iter()
                    .find(|(token, _)| *token == code)
                    .map(|&(_, waste_type)| waste_type)
            }
        }
    }

    /// Iterator over every canonical waste type the vocabulary can produce.
    ///
    /// Synonym rows yield their shared type more than once.
    pub fn waste_types(&self) -> impl Iterator<Item = WasteType> + '_ {
        let types: Vec<WasteType> = match self {
            TypeVocabulary::Labels(table) => {
                table.iter().map(|&(_, waste_type)| waste_type).collect()
            }
            TypeVocabulary::Codes(table) => {
                table.iter().map(|&(_, waste_type)| waste_type).collect()
            }
        };
        types.into_iter()
    }
}

#[derive(Debug, Clone, Copy)]
/// Static description of one waste calendar backend.
///
/// A profile is the only thing that differs between providers; the generic
/// [`WasteClient`](crate::client::WasteClient) does the rest.
pub struct ProviderProfile {
    /// Host serving the API, connected to over HTTPS on port 443.
    pub host: &'static str,
    /// Company code fixed for this provider, if it has one.
    ///
    /// Profiles without one (the generic WasteAPI) require the caller to
    /// supply a code at client construction.
    pub company_code: Option<&'static str>,
    /// Path of the address-lookup endpoint below `/api/`.
    pub address_path: &'static str,
    /// Path of the calendar endpoint below `/api/`.
    pub calendar_path: &'static str,
    /// Product token used to build the default `User-Agent` string.
    pub user_agent_product: &'static str,
    /// Request body encoding the backend expects.
    pub encoding: BodyEncoding,
    /// Handling of successful responses with a non-JSON content type.
    pub response_policy: ResponsePolicy,
    /// Aggregation applied to the pickup dates of each waste type.
    pub aggregation: Aggregation,
    /// Wire-to-canonical waste type table.
    pub vocabulary: TypeVocabulary,
    /// Length of the queried pickup window in days, counted from today.
    ///
    /// The window additionally reaches one day back to absorb timezone skew
    /// between client and provider.
    pub window_days: u64,
}
