//! Dashboard metrics: meetings, webinars, Zoom Rooms, CRC, chat, and
//! client-feedback surveys. Everything here is a GET under `/metrics`.
//!
//! The deprecated IM-metrics endpoint is intentionally absent; the chat
//! metrics endpoint replaced it.

use serde_json::Value;
use zoomkit_core::{CallError, Method, RequestSpec, StatusPolicy};

use crate::endpoints::{check_page_size, DateRange, Paging};
use crate::engine::ApiClient;

const POLICY: StatusPolicy = StatusPolicy::ok_only();

/// Which meetings a metrics query targets: currently live, all past, or
/// the most recent past instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MetricsType {
    #[default]
    Live,
    Past,
    PastOne,
}

impl MetricsType {
    pub fn as_str(self) -> &'static str {
        match self {
            MetricsType::Live => "live",
            MetricsType::Past => "past",
            MetricsType::PastOne => "pastOne",
        }
    }
}

/// Query window for the endpoints that only distinguish live and past.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MetricsWindow {
    #[default]
    Live,
    Past,
}

impl MetricsWindow {
    pub fn as_str(self) -> &'static str {
        match self {
            MetricsWindow::Live => "live",
            MetricsWindow::Past => "past",
        }
    }
}

/// Meeting-quality score aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QualityType {
    #[default]
    Meeting,
    Participants,
}

impl QualityType {
    pub fn as_str(self) -> &'static str {
        match self {
            QualityType::Meeting => "meeting",
            QualityType::Participants => "participants",
        }
    }
}

pub struct Dashboards<'a> {
    client: &'a ApiClient,
}

impl<'a> Dashboards<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Dashboards { client }
    }

    /// GET `/metrics/meetings`: live or past meetings in a window.
    pub async fn list_meetings(
        &self,
        metrics_type: MetricsType,
        range: DateRange,
        paging: Paging,
        tracking_fields: bool,
    ) -> Result<Value, CallError> {
        check_page_size(paging.page_size)?;
        let (from, to) = range.resolve();
        let spec = RequestSpec::new(Method::Get, "/metrics/meetings")
            .query("type", metrics_type.as_str())
            .query("from", from)
            .query("to", to)
            .query("page_size", paging.page_size.to_string())
            .query_opt("next_page_token", paging.next_page_token)
            .query(
                "include_fields",
                if tracking_fields { "tracking_fields" } else { "" },
            );
        self.client.call(spec, &POLICY).await
    }

    /// GET `/metrics/meetings/{meetingId}`: one meeting's metrics.
    pub async fn meeting_details(
        &self,
        meeting_id: &str,
        metrics_type: MetricsType,
    ) -> Result<Value, CallError> {
        let spec = RequestSpec::new(Method::Get, "/metrics/meetings/{meetingId}")
            .path_param("meetingId", meeting_id)
            .query("type", metrics_type.as_str());
        self.client.call(spec, &POLICY).await
    }

    /// GET `/metrics/meetings/{meetingId}/participants`.
    pub async fn meeting_participants(
        &self,
        meeting_id: &str,
        metrics_type: MetricsType,
        paging: Paging,
        registrant_id: bool,
    ) -> Result<Value, CallError> {
        check_page_size(paging.page_size)?;
        let spec = RequestSpec::new(Method::Get, "/metrics/meetings/{meetingId}/participants")
            .path_param("meetingId", meeting_id)
            .query("type", metrics_type.as_str())
            .query("page_size", paging.page_size.to_string())
            .query_opt("next_page_token", paging.next_page_token)
            .query(
                "include_fields",
                if registrant_id { "registrant_id" } else { "" },
            );
        self.client.call(spec, &POLICY).await
    }

    /// GET `/metrics/meetings/{meetingId}/participants/{participantId}/qos`
    ///: one participant's connection-quality report. Returns nothing when
    /// no data is flowing at request time.
    pub async fn meeting_participant_qos(
        &self,
        meeting_id: &str,
        participant_id: &str,
        window: MetricsWindow,
    ) -> Result<Value, CallError> {
        let spec = RequestSpec::new(
            Method::Get,
            "/metrics/meetings/{meetingId}/participants/{participantId}/qos",
        )
        .path_param("meetingId", meeting_id)
        .path_param("participantId", participant_id)
        .query("type", window.as_str());
        self.client.call(spec, &POLICY).await
    }

    /// GET `/metrics/meetings/{meetingId}/participants/qos`: QoS for all
    /// participants of a meeting.
    pub async fn meeting_participants_qos(
        &self,
        meeting_id: &str,
        window: MetricsWindow,
        paging: Paging,
    ) -> Result<Value, CallError> {
        check_page_size(paging.page_size)?;
        let spec = RequestSpec::new(Method::Get, "/metrics/meetings/{meetingId}/participants/qos")
            .path_param("meetingId", meeting_id)
            .query("type", window.as_str())
            .query("page_size", paging.page_size.to_string())
            .query_opt("next_page_token", paging.next_page_token);
        self.client.call(spec, &POLICY).await
    }

    /// GET `/metrics/meetings/{meetingId}/participants/sharing`: sharing
    /// and recording details of a meeting's participants.
    pub async fn meeting_sharing_details(
        &self,
        meeting_id: &str,
        window: MetricsWindow,
        paging: Paging,
    ) -> Result<Value, CallError> {
        check_page_size(paging.page_size)?;
        let spec = RequestSpec::new(
            Method::Get,
            "/metrics/meetings/{meetingId}/participants/sharing",
        )
        .path_param("meetingId", meeting_id)
        .query("type", window.as_str())
        .query("page_size", paging.page_size.to_string())
        .query_opt("next_page_token", paging.next_page_token);
        self.client.call(spec, &POLICY).await
    }

    /// GET `/metrics/webinars`: live or past webinars in a window.
    pub async fn list_webinars(
        &self,
        window: MetricsWindow,
        range: DateRange,
        paging: Paging,
    ) -> Result<Value, CallError> {
        check_page_size(paging.page_size)?;
        let (from, to) = range.resolve();
        let spec = RequestSpec::new(Method::Get, "/metrics/webinars")
            .query("type", window.as_str())
            .query("from", from)
            .query("to", to)
            .query("page_size", paging.page_size.to_string())
            .query_opt("next_page_token", paging.next_page_token);
        self.client.call(spec, &POLICY).await
    }

    /// GET `/metrics/webinars/{webinarId}`.
    pub async fn webinar_details(
        &self,
        webinar_id: &str,
        window: MetricsWindow,
    ) -> Result<Value, CallError> {
        let spec = RequestSpec::new(Method::Get, "/metrics/webinars/{webinarId}")
            .path_param("webinarId", webinar_id)
            .query("type", window.as_str());
        self.client.call(spec, &POLICY).await
    }

    /// GET `/metrics/webinars/{webinarId}/participants`.
    pub async fn webinar_participants(
        &self,
        webinar_id: &str,
        window: MetricsWindow,
        paging: Paging,
        registrant_id: bool,
    ) -> Result<Value, CallError> {
        check_page_size(paging.page_size)?;
        let spec = RequestSpec::new(Method::Get, "/metrics/webinars/{webinarId}/participants")
            .path_param("webinarId", webinar_id)
            .query("type", window.as_str())
            .query("page_size", paging.page_size.to_string())
            .query_opt("next_page_token", paging.next_page_token)
            .query(
                "include_fields",
                if registrant_id { "registrant_id" } else { "" },
            );
        self.client.call(spec, &POLICY).await
    }

    /// GET `/metrics/webinars/{webinarId}/participants/{participantId}/qos`.
    pub async fn webinar_participant_qos(
        &self,
        webinar_id: &str,
        participant_id: &str,
        window: MetricsWindow,
    ) -> Result<Value, CallError> {
        let spec = RequestSpec::new(
            Method::Get,
            "/metrics/webinars/{webinarId}/participants/{participantId}/qos",
        )
        .path_param("webinarId", webinar_id)
        .path_param("participantId", participant_id)
        .query("type", window.as_str());
        self.client.call(spec, &POLICY).await
    }

    /// GET `/metrics/webinars/{webinarId}/participants/qos`.
    pub async fn webinar_participants_qos(
        &self,
        webinar_id: &str,
        window: MetricsWindow,
        paging: Paging,
    ) -> Result<Value, CallError> {
        check_page_size(paging.page_size)?;
        let spec = RequestSpec::new(Method::Get, "/metrics/webinars/{webinarId}/participants/qos")
            .path_param("webinarId", webinar_id)
            .query("type", window.as_str())
            .query("page_size", paging.page_size.to_string())
            .query_opt("next_page_token", paging.next_page_token);
        self.client.call(spec, &POLICY).await
    }

    /// GET `/metrics/webinars/{webinarId}/participants/sharing`.
    pub async fn webinar_sharing_details(
        &self,
        webinar_id: &str,
        window: MetricsWindow,
        paging: Paging,
    ) -> Result<Value, CallError> {
        check_page_size(paging.page_size)?;
        let spec = RequestSpec::new(
            Method::Get,
            "/metrics/webinars/{webinarId}/participants/sharing",
        )
        .path_param("webinarId", webinar_id)
        .query("type", window.as_str())
        .query("page_size", paging.page_size.to_string())
        .query_opt("next_page_token", paging.next_page_token);
        self.client.call(spec, &POLICY).await
    }

    /// GET `/metrics/zoomrooms`: all Zoom Rooms on the account.
    pub async fn list_rooms(
        &self,
        paging: Paging,
        page_number: Option<u32>,
    ) -> Result<Value, CallError> {
        check_page_size(paging.page_size)?;
        let spec = RequestSpec::new(Method::Get, "/metrics/zoomrooms")
            .query("page_size", paging.page_size.to_string())
            .query_opt("page_number", page_number.map(|n| n.to_string()))
            .query_opt("next_page_token", paging.next_page_token);
        self.client.call(spec, &POLICY).await
    }

    /// GET `/metrics/zoomrooms/{zoomroomId}`: one room's configuration
    /// and meeting activity.
    pub async fn room_details(
        &self,
        room_id: &str,
        range: DateRange,
        paging: Paging,
    ) -> Result<Value, CallError> {
        check_page_size(paging.page_size)?;
        let (from, to) = range.resolve();
        let spec = RequestSpec::new(Method::Get, "/metrics/zoomrooms/{zoomroomId}")
            .path_param("zoomroomId", room_id)
            .query("page_size", paging.page_size.to_string())
            .query_opt("next_page_token", paging.next_page_token)
            .query("from", from)
            .query("to", to);
        self.client.call(spec, &POLICY).await
    }

    /// GET `/metrics/crc`: hour-by-hour Cloud Room Connector port usage.
    pub async fn crc_port_usage(&self, range: DateRange) -> Result<Value, CallError> {
        let (from, to) = range.resolve();
        let spec = RequestSpec::new(Method::Get, "/metrics/crc")
            .query("from", from)
            .query("to", to);
        self.client.call(spec, &POLICY).await
    }

    /// GET `/metrics/chat`: chat usage metrics.
    pub async fn chat_metrics(
        &self,
        range: DateRange,
        paging: Paging,
    ) -> Result<Value, CallError> {
        check_page_size(paging.page_size)?;
        let (from, to) = range.resolve();
        let spec = RequestSpec::new(Method::Get, "/metrics/chat")
            .query("page_size", paging.page_size.to_string())
            .query_opt("next_page_token", paging.next_page_token)
            .query("from", from)
            .query("to", to);
        self.client.call(spec, &POLICY).await
    }

    /// GET `/metrics/client/feedback`: client feedback survey results.
    /// Requires the "Feedback to Zoom" option.
    pub async fn list_client_feedback(&self, range: DateRange) -> Result<Value, CallError> {
        let (from, to) = range.resolve();
        let spec = RequestSpec::new(Method::Get, "/metrics/client/feedback")
            .query("from", from)
            .query("to", to);
        self.client.call(spec, &POLICY).await
    }

    /// GET `/metrics/client/feedback/{feedbackId}`: detail on one
    /// feedback item.
    pub async fn client_feedback_details(
        &self,
        feedback_id: &str,
        range: DateRange,
        paging: Paging,
    ) -> Result<Value, CallError> {
        check_page_size(paging.page_size)?;
        let (from, to) = range.resolve();
        let spec = RequestSpec::new(Method::Get, "/metrics/client/feedback/{feedbackId}")
            .path_param("feedbackId", feedback_id)
            .query("page_size", paging.page_size.to_string())
            .query_opt("next_page_token", paging.next_page_token)
            .query("from", from)
            .query("to", to);
        self.client.call(spec, &POLICY).await
    }

    /// GET `/metrics/zoomrooms/issues`: top 25 Zoom Rooms issues.
    pub async fn top_room_issues(&self, range: DateRange) -> Result<Value, CallError> {
        let (from, to) = range.resolve();
        let spec = RequestSpec::new(Method::Get, "/metrics/zoomrooms/issues")
            .query("from", from)
            .query("to", to);
        self.client.call(spec, &POLICY).await
    }

    /// GET `/metrics/issues/zoomrooms`: top 25 rooms with issues.
    pub async fn top_rooms_with_issues(&self, range: DateRange) -> Result<Value, CallError> {
        let (from, to) = range.resolve();
        let spec = RequestSpec::new(Method::Get, "/metrics/issues/zoomrooms")
            .query("from", from)
            .query("to", to);
        self.client.call(spec, &POLICY).await
    }

    /// GET `/metrics/issues/zoomrooms/{zoomroomId}`: issues of one room
    /// (disconnected hardware, bandwidth, and the like).
    pub async fn room_issues(
        &self,
        room_id: &str,
        range: DateRange,
        paging: Paging,
    ) -> Result<Value, CallError> {
        check_page_size(paging.page_size)?;
        let (from, to) = range.resolve();
        let spec = RequestSpec::new(Method::Get, "/metrics/issues/zoomrooms/{zoomroomId}")
            .path_param("zoomroomId", room_id)
            .query("page_size", paging.page_size.to_string())
            .query_opt("next_page_token", paging.next_page_token)
            .query("from", from)
            .query("to", to);
        self.client.call(spec, &POLICY).await
    }

    /// GET `/metrics/quality`: mean-opinion-score quality buckets.
    pub async fn quality_scores(
        &self,
        quality_type: QualityType,
        range: DateRange,
    ) -> Result<Value, CallError> {
        let (from, to) = range.resolve();
        let spec = RequestSpec::new(Method::Get, "/metrics/quality")
            .query("from", from)
            .query("to", to)
            .query("type", quality_type.as_str());
        self.client.call(spec, &POLICY).await
    }

    /// GET `/metrics/client/satisfaction`: thumbs up/down meeting
    /// satisfaction counts.
    pub async fn client_satisfaction(&self, range: DateRange) -> Result<Value, CallError> {
        let (from, to) = range.resolve();
        let spec = RequestSpec::new(Method::Get, "/metrics/client/satisfaction")
            .query("from", from)
            .query("to", to);
        self.client.call(spec, &POLICY).await
    }

    /// GET `/metrics/meetings/{meetingId}/participants/satisfaction`:
    /// post-meeting feedback. Only meetings scheduled after 2020-12-20
    /// have data.
    pub async fn post_meeting_feedback(
        &self,
        meeting_id: &str,
        metrics_type: MetricsType,
        paging: Paging,
    ) -> Result<Value, CallError> {
        check_page_size(paging.page_size)?;
        let spec = RequestSpec::new(
            Method::Get,
            "/metrics/meetings/{meetingId}/participants/satisfaction",
        )
        .path_param("meetingId", meeting_id)
        .query("type", metrics_type.as_str())
        .query("page_size", paging.page_size.to_string())
        .query_opt("next_page_token", paging.next_page_token);
        self.client.call(spec, &POLICY).await
    }

    /// GET `/metrics/webinars/{webinarId}/participants/satisfaction`:
    /// post-webinar feedback.
    pub async fn post_webinar_feedback(
        &self,
        webinar_id: &str,
        window: MetricsWindow,
        paging: Paging,
    ) -> Result<Value, CallError> {
        check_page_size(paging.page_size)?;
        let spec = RequestSpec::new(
            Method::Get,
            "/metrics/webinars/{webinarId}/participants/satisfaction",
        )
        .path_param("webinarId", webinar_id)
        .query("type", window.as_str())
        .query("page_size", paging.page_size.to_string())
        .query_opt("next_page_token", paging.next_page_token);
        self.client.call(spec, &POLICY).await
    }
}
