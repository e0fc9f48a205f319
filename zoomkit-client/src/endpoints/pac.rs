//! Personal Audio Conference accounts.

use serde_json::Value;
use zoomkit_core::{CallError, Method, RequestSpec, StatusPolicy};

use crate::engine::ApiClient;

const POLICY: StatusPolicy = StatusPolicy::ok_only();

pub struct Pac<'a> {
    client: &'a ApiClient,
}

impl<'a> Pac<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Pac { client }
    }

    /// GET `/users/{userId}/pac`: a user's PAC accounts. Pass `me` for
    /// user-level apps.
    pub async fn list_user_accounts(&self, user_id: &str) -> Result<Value, CallError> {
        let spec =
            RequestSpec::new(Method::Get, "/users/{userId}/pac").path_param("userId", user_id);
        self.client.call(spec, &POLICY).await
    }
}
