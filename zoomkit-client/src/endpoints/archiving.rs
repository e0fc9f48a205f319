//! Compliance archive listings. Requires the archiving feature to be
//! enabled on the account.

use chrono::{DateTime, Duration, Utc};
use serde_json::Value;
use zoomkit_core::{CallError, Method, RequestSpec, StatusPolicy};

use crate::endpoints::{check_page_size, instant, Paging};
use crate::engine::ApiClient;

const POLICY: StatusPolicy = StatusPolicy::ok_only();

/// Window for [`Archiving::list_files`]; defaults to the trailing week.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArchiveWindow {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

pub struct Archiving<'a> {
    client: &'a ApiClient,
}

impl<'a> Archiving<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Archiving { client }
    }

    /// GET `/archive_files`: archived meeting and webinar files across
    /// the account. The maximum queryable range is one week.
    pub async fn list_files(
        &self,
        window: ArchiveWindow,
        paging: Paging,
    ) -> Result<Value, CallError> {
        check_page_size(paging.page_size)?;
        let to = window.to.unwrap_or_else(Utc::now);
        let from = window.from.unwrap_or(to - Duration::days(7));
        let spec = RequestSpec::new(Method::Get, "/archive_files")
            .query("from", instant(from))
            .query("to", instant(to))
            .query("page_size", paging.page_size.to_string())
            .query_opt("next_page_token", paging.next_page_token);
        self.client.call(spec, &POLICY).await
    }

    /// GET `/past_meetings/{meetingUUID}/archive_files`: archived files
    /// of one meeting instance. A UUID that begins with `/` or contains
    /// `//` must be double-encoded by the caller.
    pub async fn meeting_files(&self, meeting_uuid: &str) -> Result<Value, CallError> {
        let spec = RequestSpec::new(Method::Get, "/past_meetings/{meetingUUID}/archive_files")
            .path_param("meetingUUID", meeting_uuid);
        self.client.call(spec, &POLICY).await
    }
}
