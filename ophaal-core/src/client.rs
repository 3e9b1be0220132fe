//! Generic waste calendar client, parameterized by a provider profile.

use std::time::Duration;

use chrono::{Days, NaiveDate, NaiveDateTime, Utc};
use reqwest::Client as HttpClient;
use serde::Serialize;

use crate::error::ClientError;
use crate::model::{
    AddressMatch, CalendarEntry, DataList, PickupCalendar, UniqueAddressId, WasteType,
};
use crate::profile::{Aggregation, ProviderProfile};
use crate::transport::Transport;

/// Wire format of the timestamps inside `pickupDates`.
const PICKUP_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Days the pickup window reaches back before today.
///
/// Guards against the provider's notion of "today" trailing the client's.
const LOOKBACK_DAYS: u64 = 1;

#[derive(Serialize)]
struct AddressQuery<'req> {
    #[serde(rename = "companyCode")]
    company_code: &'req str,
    #[serde(rename = "postCode")]
    post_code: &'req str,
    #[serde(rename = "houseNumber")]
    house_number: &'req str,
    #[serde(rename = "houseLetter")]
    house_letter: &'req str,
}

#[derive(Serialize)]
struct CalendarQuery<'req> {
    #[serde(rename = "companyCode")]
    company_code: &'req str,
    #[serde(rename = "uniqueAddressID")]
    unique_address_id: &'req UniqueAddressId,
    #[serde(rename = "startDate")]
    start_date: NaiveDate,
    #[serde(rename = "endDate")]
    end_date: NaiveDate,
}

#[derive(Debug, Clone)]
/// Client for one address against one waste calendar backend.
///
/// The address is fixed at construction. Its provider-assigned identifier is
/// resolved lazily on the first call that needs it and memoized for the
/// lifetime of the client. The calendar is rebuilt in full by every
/// [`update`](WasteClient::update).
///
/// Calls take `&mut self`; a single client is used sequentially. Independent
/// clients are fully isolated and may run concurrently, sharing an HTTP
/// client through [`with_http_client`](WasteClient::with_http_client) if
/// desired.
pub struct WasteClient {
    profile: ProviderProfile,
    transport: Transport,
    company_code: Option<String>,
    post_code: String,
    house_number: String,
    house_letter: String,
    unique_id: Option<UniqueAddressId>,
    calendar: PickupCalendar,
}

impl WasteClient {
    /// Create a client for the given profile and address.
    ///
    /// The postal code is normalized by stripping spaces and upper-casing;
    /// the house number is coerced to a string for transmission.
    #[must_use]
    pub fn new(
        profile: ProviderProfile,
        post_code: impl Into<String>,
        house_number: impl ToString,
    ) -> Self {
        Self {
            transport: Transport::new(&profile),
            company_code: profile.company_code.map(str::to_owned),
            post_code: post_code.into().replace(' ', "").to_uppercase(),
            house_number: house_number.to_string(),
            house_letter: String::new(),
            unique_id: None,
            calendar: PickupCalendar::default(),
            profile,
        }
    }

    /// Set the house letter of the address.
    #[must_use]
    pub fn with_house_letter(mut self, house_letter: impl ToString) -> Self {
        self.house_letter = house_letter.to_string();
        self
    }

    /// Override the company code the provider is addressed with.
    ///
    /// Required for profiles that carry no fixed code of their own.
    #[must_use]
    pub fn with_company_code(mut self, company_code: impl Into<String>) -> Self {
        self.company_code = Some(company_code.into());
        self
    }

    /// Override the per-request timeout (default 10 seconds).
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.transport.timeout = timeout;
        self
    }

    /// Use a shared HTTP client instead of an internally owned one.
    ///
    /// `reqwest::Client` is reference counted, so the pool it owns outlives
    /// this client and is released when its last user drops.
    #[must_use]
    pub fn with_http_client(mut self, http: HttpClient) -> Self {
        self.transport.http = http;
        self
    }

    /// Override the `User-Agent` header sent with every request.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.transport.user_agent = user_agent.into();
        self
    }

    /// Override the base URL requests are issued against.
    ///
    /// Defaults to `https://{host}:443/api` from the profile. Intended for
    /// tests and self-hosted gateways.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.transport.base_url = base_url.into();
        self
    }

    /// Resolve the provider-assigned identifier for the configured address.
    ///
    /// Idempotent: the first successful call memoizes the identifier and
    /// later calls return it without touching the network.
    ///
    /// # Errors
    ///
    /// - [`ClientError::AddressNotFound`] when the lookup succeeds but
    ///   matches no address in the provider's service area.
    /// - [`ClientError::MissingCompanyCode`] when neither the profile nor the
    ///   caller supplied a company code.
    /// - Any transport or API error from the underlying request.
    pub async fn unique_address_id(&mut self) -> Result<UniqueAddressId, ClientError> {
        if let Some(unique_id) = &self.unique_id {
            return Ok(unique_id.clone());
        }

        let query = AddressQuery {
            company_code: self.company_code()?,
            post_code: &self.post_code,
            house_number: &self.house_number,
            house_letter: &self.house_letter,
        };
        let payload = self
            .transport
            .execute(self.profile.address_path, &query)
            .await?;
        let response: DataList<AddressMatch> = serde_json::from_value(payload.into_json()?)?;

        // First match wins when the provider returns several.
        let unique_id = response
            .data_list
            .into_iter()
            .next()
            .map(|matched| matched.unique_id)
            .ok_or(ClientError::AddressNotFound)?;

        self.unique_id = Some(unique_id.clone());
        Ok(unique_id)
    }

    /// Fetch the pickup calendar for the configured address.
    ///
    /// Resolves the address identifier first if that has not happened yet.
    /// Queries the window from yesterday through the profile's horizon and
    /// replaces the whole calendar with the result: waste types without
    /// pickups in the window end up with an empty date list, never with
    /// values from an earlier fetch. Entries with a wire token outside the
    /// profile's vocabulary are dropped.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Parse`] when a pickup timestamp is malformed.
    /// - Any error [`unique_address_id`](WasteClient::unique_address_id) can
    ///   return, plus transport and API errors from the calendar request.
    pub async fn update(&mut self) -> Result<PickupCalendar, ClientError> {
        let unique_address_id = self.unique_address_id().await?;

        let today = Utc::now().date_naive();
        let query = CalendarQuery {
            company_code: self.company_code()?,
            unique_address_id: &unique_address_id,
            start_date: today - Days::new(LOOKBACK_DAYS),
            end_date: today + Days::new(self.profile.window_days),
        };
        let payload = self
            .transport
            .execute(self.profile.calendar_path, &query)
            .await?;
        let response: DataList<CalendarEntry> = serde_json::from_value(payload.into_json()?)?;

        let mut calendar = PickupCalendar::default();
        if self.profile.aggregation == Aggregation::AllSorted {
            for waste_type in self.profile.vocabulary.waste_types() {
                calendar.ensure(waste_type);
            }
        }

        for entry in response.data_list {
            let Some(waste_type) = self.profile.vocabulary.classify(&entry) else {
                // Unknown token: upstream vocabularies drift, skip the entry.
                continue;
            };

            let mut dates = Vec::with_capacity(entry.pickup_dates.len());
            for raw_date in &entry.pickup_dates {
                let timestamp = NaiveDateTime::parse_from_str(raw_date, PICKUP_DATE_FORMAT)?;
                dates.push(timestamp.date());
            }

            match self.profile.aggregation {
                Aggregation::AllSorted => calendar.append(waste_type, dates),
                Aggregation::NearestOnly => {
                    let nearest: Vec<NaiveDate> = dates.into_iter().min().into_iter().collect();
                    calendar.replace(waste_type, nearest);
                }
            }
        }
        calendar.sort();

        self.calendar = calendar.clone();
        Ok(calendar)
    }

    /// Date of the next pickup of the given waste type, from the last
    /// successful [`update`](WasteClient::update).
    #[must_use]
    pub fn next_pickup(&self, waste_type: WasteType) -> Option<NaiveDate> {
        self.calendar.next_pickup(waste_type)
    }

    /// Calendar from the last successful [`update`](WasteClient::update).
    #[must_use]
    pub fn calendar(&self) -> &PickupCalendar {
        &self.calendar
    }

    fn company_code(&self) -> Result<&str, ClientError> {
        self.company_code
            .as_deref()
            .ok_or(ClientError::MissingCompanyCode)
    }
}
