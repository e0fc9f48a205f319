//! Per-category endpoint methods.
//!
//! Every method here is declarative: validate and shape the caller's
//! parameters, build a [`RequestSpec`](zoomkit_core::RequestSpec), and hand
//! it to [`ApiClient::call`] with the category's status policy. No method
//! touches the transport directly.
//!
//! Vendor-assigned identifiers are always opaque strings. Several of them
//! exceed ten digits and would silently lose precision as 32-bit integers,
//! so no ID parameter is ever numeric.

pub mod archiving;
pub mod cloud_recordings;
pub mod contacts;
pub mod dashboards;
pub mod devices;
pub mod meetings;
pub mod pac;
pub mod reports;
pub mod rooms;
pub mod rooms_devices;

use chrono::{DateTime, Days, NaiveDate, Utc};
use zoomkit_core::CallError;

use crate::engine::ApiClient;

impl ApiClient {
    pub fn meetings(&self) -> meetings::Meetings<'_> {
        meetings::Meetings::new(self)
    }

    pub fn cloud_recordings(&self) -> cloud_recordings::CloudRecordings<'_> {
        cloud_recordings::CloudRecordings::new(self)
    }

    pub fn archiving(&self) -> archiving::Archiving<'_> {
        archiving::Archiving::new(self)
    }

    pub fn contacts(&self) -> contacts::Contacts<'_> {
        contacts::Contacts::new(self)
    }

    pub fn dashboards(&self) -> dashboards::Dashboards<'_> {
        dashboards::Dashboards::new(self)
    }

    pub fn devices(&self) -> devices::Devices<'_> {
        devices::Devices::new(self)
    }

    pub fn pac(&self) -> pac::Pac<'_> {
        pac::Pac::new(self)
    }

    pub fn reports(&self) -> reports::Reports<'_> {
        reports::Reports::new(self)
    }

    pub fn rooms(&self) -> rooms::Rooms<'_> {
        rooms::Rooms::new(self)
    }

    pub fn rooms_devices(&self) -> rooms_devices::RoomsDevices<'_> {
        rooms_devices::RoomsDevices::new(self)
    }
}

/// Pagination window shared by most list endpoints.
#[derive(Debug, Clone)]
pub struct Paging {
    pub page_size: u32,
    pub next_page_token: Option<String>,
}

impl Default for Paging {
    fn default() -> Self {
        Paging {
            page_size: 30,
            next_page_token: None,
        }
    }
}

/// Date window for reporting endpoints. Unset bounds default to
/// yesterday/today at call time.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub(crate) fn resolve(self) -> (String, String) {
        let today = Utc::now().date_naive();
        let from = self.from.unwrap_or(today - Days::new(1));
        let to = self.to.unwrap_or(today);
        (date(from), date(to))
    }
}

pub(crate) fn check_page_size(page_size: u32) -> Result<(), CallError> {
    if !(30..=300).contains(&page_size) {
        return Err(CallError::invalid_argument(
            "Page size is minimum 30, maximum 300 results.",
        ));
    }
    Ok(())
}

pub(crate) fn date(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

pub(crate) fn instant(t: DateTime<Utc>) -> String {
    t.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

pub(crate) fn flag(b: bool) -> &'static str {
    if b {
        "true"
    } else {
        "false"
    }
}
