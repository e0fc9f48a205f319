//! H.323/SIP device management.

use serde_json::{Map, Value};
use zoomkit_core::{CallError, Method, RequestSpec, StatusPolicy};

use crate::endpoints::{check_page_size, Paging};
use crate::engine::ApiClient;

const POLICY: StatusPolicy = StatusPolicy::broad();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceProtocol {
    H323,
    Sip,
}

impl DeviceProtocol {
    pub fn as_str(self) -> &'static str {
        match self {
            DeviceProtocol::H323 => "H.323",
            DeviceProtocol::Sip => "SIP",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeviceEncryption {
    #[default]
    Auto,
    Yes,
    No,
}

impl DeviceEncryption {
    pub fn as_str(self) -> &'static str {
        match self {
            DeviceEncryption::Auto => "auto",
            DeviceEncryption::Yes => "yes",
            DeviceEncryption::No => "no",
        }
    }
}

/// Fields for [`Devices::update`]; only set fields are sent.
#[derive(Debug, Clone, Default)]
pub struct UpdateDevice {
    pub name: Option<String>,
    pub protocol: Option<DeviceProtocol>,
    pub ip: Option<String>,
    pub encryption: Option<DeviceEncryption>,
}

pub struct Devices<'a> {
    client: &'a ApiClient,
}

impl<'a> Devices<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Devices { client }
    }

    /// GET `/h323/devices`: all H.323/SIP devices on the account.
    pub async fn list(&self, paging: Paging) -> Result<Value, CallError> {
        check_page_size(paging.page_size)?;
        let spec = RequestSpec::new(Method::Get, "/h323/devices")
            .query("page_size", paging.page_size.to_string())
            .query_opt("next_page_token", paging.next_page_token);
        self.client.call(spec, &POLICY).await
    }

    /// POST `/h323/devices`: register a device.
    pub async fn create(
        &self,
        name: &str,
        protocol: DeviceProtocol,
        ip: &str,
        encryption: DeviceEncryption,
    ) -> Result<Value, CallError> {
        let mut fields = Map::new();
        fields.insert("name".to_string(), name.into());
        fields.insert("protocol".to_string(), protocol.as_str().into());
        fields.insert("ip".to_string(), ip.into());
        fields.insert("encryption".to_string(), encryption.as_str().into());
        let spec = RequestSpec::new(Method::Post, "/h323/devices").json_body(fields);
        self.client.call(spec, &POLICY).await
    }

    /// PATCH `/h323/devices/{deviceId}`: edit a device.
    pub async fn update(
        &self,
        device_id: &str,
        params: UpdateDevice,
    ) -> Result<Value, CallError> {
        let mut fields = Map::new();
        if let Some(name) = params.name {
            fields.insert("name".to_string(), name.into());
        }
        if let Some(protocol) = params.protocol {
            fields.insert("protocol".to_string(), protocol.as_str().into());
        }
        if let Some(ip) = params.ip {
            fields.insert("ip".to_string(), ip.into());
        }
        if let Some(encryption) = params.encryption {
            fields.insert("encryption".to_string(), encryption.as_str().into());
        }
        let spec = RequestSpec::new(Method::Patch, "/h323/devices/{deviceId}")
            .path_param("deviceId", device_id)
            .json_body(fields);
        self.client.call(spec, &POLICY).await
    }

    /// DELETE `/h323/devices/{deviceId}`: remove a device.
    pub async fn delete(&self, device_id: &str) -> Result<Value, CallError> {
        let spec = RequestSpec::new(Method::Delete, "/h323/devices/{deviceId}")
            .path_param("deviceId", device_id);
        self.client.call(spec, &POLICY).await
    }
}
