//! Zoom Rooms account profile and settings.

use serde_json::{Map, Value};
use zoomkit_core::{CallError, Method, RequestSpec, StatusPolicy};

use crate::engine::ApiClient;

const POLICY: StatusPolicy = StatusPolicy::broad();

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoomSettingType {
    #[default]
    Meeting,
    Alert,
    Signage,
}

impl RoomSettingType {
    pub fn as_str(self) -> &'static str {
        match self {
            RoomSettingType::Meeting => "meeting",
            RoomSettingType::Alert => "alert",
            RoomSettingType::Signage => "signage",
        }
    }
}

/// Fields for [`Rooms::update_account_profile`]; only set fields are sent.
#[derive(Debug, Clone, Default)]
pub struct AccountProfileUpdate {
    pub support_email: Option<String>,
    pub support_phone: Option<String>,
    /// 1-16 characters; required to change settings or log out of the
    /// Rooms application.
    pub room_passcode: Option<String>,
    pub required_code_to_ext: Option<bool>,
}

pub struct Rooms<'a> {
    client: &'a ApiClient,
}

impl<'a> Rooms<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Rooms { client }
    }

    /// GET `/rooms/account_profile`: the account-wide Rooms profile.
    pub async fn account_profile(&self) -> Result<Value, CallError> {
        let spec = RequestSpec::new(Method::Get, "/rooms/account_profile");
        self.client.call(spec, &POLICY).await
    }

    /// PATCH `/rooms/account_profile`: update the account-wide Rooms
    /// profile. The vendor nests the fields under a `basic` object.
    pub async fn update_account_profile(
        &self,
        params: AccountProfileUpdate,
    ) -> Result<Value, CallError> {
        if let Some(passcode) = &params.room_passcode {
            if passcode.len() > 16 {
                return Err(CallError::invalid_argument("Room passcode is too long."));
            }
            if passcode.is_empty() {
                return Err(CallError::invalid_argument("Room passcode is too short."));
            }
        }

        let mut basic = Map::new();
        if let Some(email) = params.support_email {
            basic.insert("support_email".to_string(), email.into());
        }
        if let Some(phone) = params.support_phone {
            basic.insert("support_phone".to_string(), phone.into());
        }
        if let Some(passcode) = params.room_passcode {
            basic.insert("room_passcode".to_string(), passcode.into());
        }
        if let Some(required) = params.required_code_to_ext {
            basic.insert("required_code_to_ext".to_string(), required.into());
        }

        let mut fields = Map::new();
        fields.insert("basic".to_string(), Value::Object(basic));
        let spec = RequestSpec::new(Method::Patch, "/rooms/account_profile").json_body(fields);
        self.client.call(spec, &POLICY).await
    }

    /// GET `/rooms/account_settings`: meeting, alert, or signage settings
    /// for the Rooms account.
    pub async fn account_settings(
        &self,
        setting_type: RoomSettingType,
    ) -> Result<Value, CallError> {
        let spec = RequestSpec::new(Method::Get, "/rooms/account_settings")
            .query("setting_type", setting_type.as_str());
        self.client.call(spec, &POLICY).await
    }

    /// PATCH `/rooms/account_settings`: update one settings group. The
    /// settings document varies wildly per group, so the body is the
    /// caller's to shape.
    pub async fn update_account_settings(
        &self,
        setting_type: RoomSettingType,
        settings: Map<String, Value>,
    ) -> Result<Value, CallError> {
        let spec = RequestSpec::new(Method::Patch, "/rooms/account_settings")
            .query("setting_type", setting_type.as_str())
            .json_body(settings);
        self.client.call(spec, &POLICY).await
    }
}
