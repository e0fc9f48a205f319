//! Cloud recording listings.

use chrono::NaiveDate;
use serde_json::Value;
use zoomkit_core::{CallError, Method, RequestSpec, StatusPolicy};

use crate::endpoints::{check_page_size, date, flag};
use crate::engine::ApiClient;

const POLICY: StatusPolicy = StatusPolicy::ok_only();

/// What to list from the recording trash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrashType {
    #[default]
    MeetingRecordings,
    RecordingFile,
}

impl TrashType {
    pub fn as_str(self) -> &'static str {
        match self {
            TrashType::MeetingRecordings => "meeting_recordings",
            TrashType::RecordingFile => "recording_file",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ListRecordings {
    pub page_size: u32,
    pub next_page_token: Option<String>,
    /// Meeting-connector metadata query.
    pub mc: Option<String>,
    /// List recordings from the trash instead.
    pub trash: bool,
    /// Narrow to recordings from this date on. Trash listings ignore dates.
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub trash_type: TrashType,
    pub meeting_id: Option<String>,
}

impl Default for ListRecordings {
    fn default() -> Self {
        ListRecordings {
            page_size: 30,
            next_page_token: None,
            mc: None,
            trash: false,
            from: None,
            to: None,
            trash_type: TrashType::default(),
            meeting_id: None,
        }
    }
}

pub struct CloudRecordings<'a> {
    client: &'a ApiClient,
}

impl<'a> CloudRecordings<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        CloudRecordings { client }
    }

    /// GET `/users/{userId}/recordings`: all cloud recordings of a user.
    pub async fn list_all(
        &self,
        user_id: &str,
        params: ListRecordings,
    ) -> Result<Value, CallError> {
        check_page_size(params.page_size)?;
        let spec = RequestSpec::new(Method::Get, "/users/{userId}/recordings")
            .path_param("userId", user_id)
            .query("page_size", params.page_size.to_string())
            .query_opt("next_page_token", params.next_page_token)
            .query_opt("mc", params.mc)
            .query("trash", flag(params.trash))
            .query_opt("from", params.from.map(date))
            .query_opt("to", params.to.map(date))
            .query("trash_type", params.trash_type.as_str())
            .query_opt("meeting_id", params.meeting_id);
        self.client.call(spec, &POLICY).await
    }
}
