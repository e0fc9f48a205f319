//! Meeting scheduling, registrants, and status changes.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use zoomkit_core::{CallError, Method, RequestSpec, StatusPolicy};

use crate::endpoints::{check_page_size, flag, instant};
use crate::engine::ApiClient;

const POLICY: StatusPolicy = StatusPolicy::broad();

/// Which scheduled meetings to list for a host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MeetingListType {
    #[default]
    Live,
    Upcoming,
    Scheduled,
}

impl MeetingListType {
    pub fn as_str(self) -> &'static str {
        match self {
            MeetingListType::Live => "live",
            MeetingListType::Upcoming => "upcoming",
            MeetingListType::Scheduled => "scheduled",
        }
    }
}

/// Vendor meeting types. The wire codes are 1/2/3/8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MeetingType {
    Instant,
    #[default]
    Scheduled,
    RecurringNoFixedTime,
    RecurringFixedTime,
}

impl MeetingType {
    pub fn code(self) -> u8 {
        match self {
            MeetingType::Instant => 1,
            MeetingType::Scheduled => 2,
            MeetingType::RecurringNoFixedTime => 3,
            MeetingType::RecurringFixedTime => 8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegistrantStatus {
    Pending,
    #[default]
    Approved,
    Denied,
}

impl RegistrantStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            RegistrantStatus::Pending => "pending",
            RegistrantStatus::Approved => "approved",
            RegistrantStatus::Denied => "denied",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeetingStatusAction {
    End,
    Recover,
}

impl MeetingStatusAction {
    pub fn as_str(self) -> &'static str {
        match self {
            MeetingStatusAction::End => "end",
            MeetingStatusAction::Recover => "recover",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ListMeetings {
    pub list_type: MeetingListType,
    pub page_size: u32,
    pub page_number: Option<u32>,
    pub next_page_token: Option<String>,
}

impl Default for ListMeetings {
    fn default() -> Self {
        ListMeetings {
            list_type: MeetingListType::default(),
            page_size: 30,
            page_number: None,
            next_page_token: None,
        }
    }
}

/// Optional fields for [`Meetings::create`]. Unset fields are left out of
/// the request body entirely.
#[derive(Debug, Clone, Default)]
pub struct CreateMeeting {
    pub meeting_type: MeetingType,
    pub agenda: Option<String>,
    /// Start time in UTC; only meaningful for scheduled and
    /// fixed-time-recurring meetings.
    pub start_time: Option<DateTime<Utc>>,
    /// Duration in minutes; only for scheduled meetings.
    pub duration: Option<u32>,
    pub password: Option<String>,
    pub default_password: bool,
    pub tracking_fields: Option<Value>,
    pub recurrence: Option<Value>,
    pub settings: Option<Value>,
    pub pre_schedule: bool,
    /// Defaults to the host the meeting is created under.
    pub schedule_for: Option<String>,
    pub template_id: Option<String>,
}

/// Fields for [`Meetings::update`]; only set fields are sent.
#[derive(Debug, Clone, Default)]
pub struct UpdateMeeting {
    pub occurrence_id: Option<String>,
    pub schedule_for: Option<String>,
    pub topic: Option<String>,
    pub agenda: Option<String>,
    pub meeting_type: Option<MeetingType>,
    pub pre_schedule: Option<bool>,
    pub start_time: Option<DateTime<Utc>>,
    pub duration: Option<u32>,
    pub password: Option<String>,
    pub template_id: Option<String>,
    pub tracking_fields: Option<Value>,
    pub recurrence: Option<Value>,
    pub settings: Option<Value>,
}

#[derive(Debug, Clone)]
pub struct DeleteMeeting {
    pub occurrence_id: Option<String>,
    /// Email the host and alternative hosts about the cancellation.
    pub schedule_for_reminder: bool,
    /// Email registrants about the cancellation.
    pub cancel_meeting_reminder: bool,
}

impl Default for DeleteMeeting {
    fn default() -> Self {
        DeleteMeeting {
            occurrence_id: None,
            schedule_for_reminder: true,
            cancel_meeting_reminder: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ListRegistrants {
    pub occurrence_id: Option<String>,
    pub status: RegistrantStatus,
    pub page_size: u32,
    pub next_page_token: Option<String>,
}

impl Default for ListRegistrants {
    fn default() -> Self {
        ListRegistrants {
            occurrence_id: None,
            status: RegistrantStatus::default(),
            page_size: 30,
            next_page_token: None,
        }
    }
}

/// Optional registrant profile fields for [`Meetings::add_registrant`].
#[derive(Debug, Clone, Default)]
pub struct AddRegistrant {
    pub occurrence_ids: Vec<String>,
    pub last_name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub zip: Option<String>,
    pub state: Option<String>,
    pub phone: Option<String>,
    pub industry: Option<String>,
    pub org: Option<String>,
    pub job_title: Option<String>,
    pub purchasing_time_frame: Option<String>,
    pub role_in_purchase_process: Option<String>,
    pub no_of_employees: Option<String>,
    pub comments: Option<String>,
    pub custom_questions: Option<Value>,
    pub language: Option<String>,
    pub auto_approve: Option<bool>,
}

pub struct Meetings<'a> {
    client: &'a ApiClient,
}

impl<'a> Meetings<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Meetings { client }
    }

    /// GET `/users/{userId}/meetings`: scheduled meetings for a host.
    /// Instant meetings never appear here.
    pub async fn list(&self, user_id: &str, params: ListMeetings) -> Result<Value, CallError> {
        check_page_size(params.page_size)?;
        let spec = RequestSpec::new(Method::Get, "/users/{userId}/meetings")
            .path_param("userId", user_id)
            .query("type", params.list_type.as_str())
            .query("page_size", params.page_size.to_string())
            .query_opt("page_number", params.page_number.map(|n| n.to_string()))
            .query_opt("next_page_token", params.next_page_token);
        self.client.call(spec, &POLICY).await
    }

    /// POST `/users/{userId}/meetings`: create a meeting for a host.
    pub async fn create(
        &self,
        user_id: &str,
        topic: &str,
        params: CreateMeeting,
    ) -> Result<Value, CallError> {
        let mut fields = Map::new();
        fields.insert("topic".to_string(), topic.into());
        fields.insert("type".to_string(), params.meeting_type.code().into());
        fields.insert("pre_schedule".to_string(), params.pre_schedule.into());
        fields.insert(
            "schedule_for".to_string(),
            params
                .schedule_for
                .unwrap_or_else(|| user_id.to_string())
                .into(),
        );
        fields.insert("default_password".to_string(), params.default_password.into());
        if let Some(start) = params.start_time {
            fields.insert("start_time".to_string(), instant(start).into());
        }
        if let Some(duration) = params.duration {
            fields.insert("duration".to_string(), duration.into());
        }
        if let Some(password) = params.password {
            fields.insert("password".to_string(), password.into());
        }
        if let Some(agenda) = params.agenda {
            fields.insert("agenda".to_string(), agenda.into());
        }
        if let Some(tracking) = params.tracking_fields {
            fields.insert("tracking_fields".to_string(), tracking);
        }
        if let Some(recurrence) = params.recurrence {
            fields.insert("recurrence".to_string(), recurrence);
        }
        if let Some(settings) = params.settings {
            fields.insert("settings".to_string(), settings);
        }
        if let Some(template_id) = params.template_id {
            fields.insert("template_id".to_string(), template_id.into());
        }

        let spec = RequestSpec::new(Method::Post, "/users/{userId}/meetings")
            .path_param("userId", user_id)
            .json_body(fields);
        self.client.call(spec, &POLICY).await
    }

    /// GET `/meetings/{meetingId}`: details of one meeting.
    pub async fn get(
        &self,
        meeting_id: &str,
        occurrence_id: Option<&str>,
        show_previous_occurrences: bool,
    ) -> Result<Value, CallError> {
        let spec = RequestSpec::new(Method::Get, "/meetings/{meetingId}")
            .path_param("meetingId", meeting_id)
            .query_opt("occurrence_id", occurrence_id)
            .query(
                "show_previous_occurrences",
                flag(show_previous_occurrences),
            );
        self.client.call(spec, &POLICY).await
    }

    /// PATCH `/meetings/{meetingId}`: update a meeting; only the fields
    /// set in `params` are sent.
    pub async fn update(
        &self,
        meeting_id: &str,
        params: UpdateMeeting,
    ) -> Result<Value, CallError> {
        let mut fields = Map::new();
        if let Some(schedule_for) = params.schedule_for {
            fields.insert("schedule_for".to_string(), schedule_for.into());
        }
        if let Some(topic) = params.topic {
            fields.insert("topic".to_string(), topic.into());
        }
        if let Some(agenda) = params.agenda {
            fields.insert("agenda".to_string(), agenda.into());
        }
        if let Some(meeting_type) = params.meeting_type {
            fields.insert("type".to_string(), meeting_type.code().into());
        }
        if let Some(pre_schedule) = params.pre_schedule {
            fields.insert("pre_schedule".to_string(), pre_schedule.into());
        }
        if let Some(start) = params.start_time {
            fields.insert("start_time".to_string(), instant(start).into());
        }
        if let Some(duration) = params.duration {
            fields.insert("duration".to_string(), duration.into());
        }
        if let Some(password) = params.password {
            fields.insert("password".to_string(), password.into());
        }
        if let Some(template_id) = params.template_id {
            fields.insert("template_id".to_string(), template_id.into());
        }
        if let Some(tracking) = params.tracking_fields {
            fields.insert("tracking_fields".to_string(), tracking);
        }
        if let Some(recurrence) = params.recurrence {
            fields.insert("recurrence".to_string(), recurrence);
        }
        if let Some(settings) = params.settings {
            fields.insert("settings".to_string(), settings);
        }

        let spec = RequestSpec::new(Method::Patch, "/meetings/{meetingId}")
            .path_param("meetingId", meeting_id)
            .query_opt("occurrence_id", params.occurrence_id)
            .json_body(fields);
        self.client.call(spec, &POLICY).await
    }

    /// DELETE `/meetings/{meetingId}`: delete a meeting. Never carries a
    /// body; the cancellation options ride in the query string.
    pub async fn delete(
        &self,
        meeting_id: &str,
        params: DeleteMeeting,
    ) -> Result<Value, CallError> {
        let spec = RequestSpec::new(Method::Delete, "/meetings/{meetingId}")
            .path_param("meetingId", meeting_id)
            .query_opt("occurrence_id", params.occurrence_id)
            .query("schedule_for_reminder", flag(params.schedule_for_reminder))
            .query(
                "cancel_meeting_reminder",
                flag(params.cancel_meeting_reminder),
            );
        self.client.call(spec, &POLICY).await
    }

    /// PUT `/meetings/{meetingId}/status`: end a running meeting or
    /// recover a deleted one.
    pub async fn update_status(
        &self,
        meeting_id: &str,
        action: MeetingStatusAction,
    ) -> Result<Value, CallError> {
        let mut fields = Map::new();
        fields.insert("action".to_string(), action.as_str().into());
        let spec = RequestSpec::new(Method::Put, "/meetings/{meetingId}/status")
            .path_param("meetingId", meeting_id)
            .json_body(fields);
        self.client.call(spec, &POLICY).await
    }

    /// GET `/meetings/{meetingId}/registrants`.
    pub async fn list_registrants(
        &self,
        meeting_id: &str,
        params: ListRegistrants,
    ) -> Result<Value, CallError> {
        check_page_size(params.page_size)?;
        let spec = RequestSpec::new(Method::Get, "/meetings/{meetingId}/registrants")
            .path_param("meetingId", meeting_id)
            .query_opt("occurrence_id", params.occurrence_id)
            .query("status", params.status.as_str())
            .query("page_size", params.page_size.to_string())
            .query_opt("next_page_token", params.next_page_token);
        self.client.call(spec, &POLICY).await
    }

    /// POST `/meetings/{meetingId}/registrants`: register a participant.
    pub async fn add_registrant(
        &self,
        meeting_id: &str,
        email: &str,
        first_name: &str,
        params: AddRegistrant,
    ) -> Result<Value, CallError> {
        let mut fields = Map::new();
        fields.insert("email".to_string(), email.into());
        fields.insert("first_name".to_string(), first_name.into());
        if let Some(last_name) = params.last_name {
            fields.insert("last_name".to_string(), last_name.into());
        }
        if let Some(address) = params.address {
            fields.insert("address".to_string(), address.into());
        }
        if let Some(city) = params.city {
            fields.insert("city".to_string(), city.into());
        }
        if let Some(country) = params.country {
            fields.insert("country".to_string(), country.into());
        }
        if let Some(zip) = params.zip {
            fields.insert("zip".to_string(), zip.into());
        }
        if let Some(state) = params.state {
            fields.insert("state".to_string(), state.into());
        }
        if let Some(phone) = params.phone {
            fields.insert("phone".to_string(), phone.into());
        }
        if let Some(industry) = params.industry {
            fields.insert("industry".to_string(), industry.into());
        }
        if let Some(org) = params.org {
            fields.insert("org".to_string(), org.into());
        }
        if let Some(job_title) = params.job_title {
            fields.insert("job_title".to_string(), job_title.into());
        }
        if let Some(tf) = params.purchasing_time_frame {
            fields.insert("purchasing_time_frame".to_string(), tf.into());
        }
        if let Some(role) = params.role_in_purchase_process {
            fields.insert("role_in_purchase_process".to_string(), role.into());
        }
        if let Some(n) = params.no_of_employees {
            fields.insert("no_of_employees".to_string(), n.into());
        }
        if let Some(comments) = params.comments {
            fields.insert("comments".to_string(), comments.into());
        }
        if let Some(questions) = params.custom_questions {
            fields.insert("custom_questions".to_string(), questions);
        }
        if let Some(language) = params.language {
            fields.insert("language".to_string(), language.into());
        }
        if let Some(auto_approve) = params.auto_approve {
            fields.insert("auto_approve".to_string(), auto_approve.into());
        }

        let occurrence_ids = params.occurrence_ids;
        let spec = RequestSpec::new(Method::Post, "/meetings/{meetingId}/registrants")
            .path_param("meetingId", meeting_id)
            .query_opt(
                "occurrence_ids",
                (!occurrence_ids.is_empty()).then(|| occurrence_ids.join(",")),
            )
            .json_body(fields);
        self.client.call(spec, &POLICY).await
    }

    /// DELETE `/meetings/{meetingId}/registrants/{registrantId}`.
    pub async fn delete_registrant(
        &self,
        meeting_id: &str,
        registrant_id: &str,
        occurrence_id: Option<&str>,
    ) -> Result<Value, CallError> {
        let spec = RequestSpec::new(
            Method::Delete,
            "/meetings/{meetingId}/registrants/{registrantId}",
        )
        .path_param("meetingId", meeting_id)
        .path_param("registrantId", registrant_id)
        .query_opt("occurrence_id", occurrence_id);
        self.client.call(spec, &POLICY).await
    }

    /// GET `/meetings/{meetingId}/registrants/{registrantId}`.
    pub async fn get_registrant(
        &self,
        meeting_id: &str,
        registrant_id: &str,
    ) -> Result<Value, CallError> {
        let spec = RequestSpec::new(
            Method::Get,
            "/meetings/{meetingId}/registrants/{registrantId}",
        )
        .path_param("meetingId", meeting_id)
        .path_param("registrantId", registrant_id);
        self.client.call(spec, &POLICY).await
    }

    /// Convenience wrapper over [`create`](Self::create) for instant
    /// (type-1) meetings; start time and duration do not apply.
    pub async fn create_instant(
        &self,
        user_id: &str,
        topic: &str,
        mut params: CreateMeeting,
    ) -> Result<Value, CallError> {
        params.meeting_type = MeetingType::Instant;
        params.start_time = None;
        params.duration = None;
        self.create(user_id, topic, params).await
    }

    /// Convenience wrapper over [`create`](Self::create) for scheduled
    /// (type-2) meetings.
    pub async fn create_scheduled(
        &self,
        user_id: &str,
        topic: &str,
        start_time: DateTime<Utc>,
        duration: u32,
        mut params: CreateMeeting,
    ) -> Result<Value, CallError> {
        params.meeting_type = MeetingType::Scheduled;
        params.start_time = Some(start_time);
        params.duration = Some(duration);
        self.create(user_id, topic, params).await
    }

    /// End a running meeting.
    pub async fn end(&self, meeting_id: &str) -> Result<Value, CallError> {
        self.update_status(meeting_id, MeetingStatusAction::End).await
    }
}
