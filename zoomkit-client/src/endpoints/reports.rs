//! Account usage reports.

use serde_json::Value;
use zoomkit_core::{CallError, Method, RequestSpec, StatusPolicy};

use crate::engine::ApiClient;

const POLICY: StatusPolicy = StatusPolicy::ok_only();

pub struct Reports<'a> {
    client: &'a ApiClient,
}

impl<'a> Reports<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Reports { client }
    }

    /// GET `/report/daily`: day-by-day usage (new users, meetings,
    /// participants, meeting minutes) for one month.
    pub async fn daily_usage(&self, year: i32, month: u32) -> Result<Value, CallError> {
        if !(1..=12).contains(&month) {
            return Err(CallError::invalid_argument("Invalid month."));
        }
        let spec = RequestSpec::new(Method::Get, "/report/daily")
            .query("year", year.to_string())
            .query("month", month.to_string());
        self.client.call(spec, &POLICY).await
    }
}
