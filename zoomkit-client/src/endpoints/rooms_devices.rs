//! Zoom Rooms device app-version control.

use serde_json::{Map, Value};
use zoomkit_core::{CallError, Method, RequestSpec, StatusPolicy};

use crate::engine::ApiClient;

const POLICY: StatusPolicy = StatusPolicy::broad();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppVersionAction {
    Upgrade,
    Downgrade,
    Cancel,
}

impl AppVersionAction {
    pub fn as_str(self) -> &'static str {
        match self {
            AppVersionAction::Upgrade => "upgrade",
            AppVersionAction::Downgrade => "downgrade",
            AppVersionAction::Cancel => "cancel",
        }
    }
}

pub struct RoomsDevices<'a> {
    client: &'a ApiClient,
}

impl<'a> RoomsDevices<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        RoomsDevices { client }
    }

    /// PUT `/rooms/{roomId}/devices/{deviceId}/app_version`: upgrade,
    /// downgrade, or cancel a pending change of the Rooms app on a Mac or
    /// Windows device.
    pub async fn change_app_version(
        &self,
        room_id: &str,
        device_id: &str,
        action: AppVersionAction,
    ) -> Result<Value, CallError> {
        let mut fields = Map::new();
        fields.insert("action".to_string(), action.as_str().into());
        let spec = RequestSpec::new(Method::Put, "/rooms/{roomId}/devices/{deviceId}/app_version")
            .path_param("roomId", room_id)
            .path_param("deviceId", device_id)
            .json_body(fields);
        self.client.call(spec, &POLICY).await
    }
}
