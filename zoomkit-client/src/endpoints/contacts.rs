//! Company and personal contact lookups.

use serde_json::Value;
use zoomkit_core::{CallError, Method, RequestSpec, StatusPolicy};

use crate::endpoints::flag;
use crate::engine::ApiClient;

const POLICY: StatusPolicy = StatusPolicy::ok_only();

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactType {
    #[default]
    Company,
    External,
}

impl ContactType {
    pub fn as_str(self) -> &'static str {
        match self {
            ContactType::Company => "company",
            ContactType::External => "external",
        }
    }
}

#[derive(Debug, Clone)]
pub struct SearchContacts {
    pub query_presence_status: bool,
    /// 1..=7 accepted; the vendor caps directory searches well below the
    /// usual page sizes.
    pub page_size: u32,
    /// Vendor contact-type code: 1 user, 2 auto receptionist, 3 common
    /// area phone, 4 call queue, 5 shared line group, 6 shared global
    /// directory, 7 shared office contact.
    pub contact_types: u32,
    pub next_page_token: Option<String>,
}

impl Default for SearchContacts {
    fn default() -> Self {
        SearchContacts {
            query_presence_status: false,
            page_size: 1,
            contact_types: 1,
            next_page_token: None,
        }
    }
}

pub struct Contacts<'a> {
    client: &'a ApiClient,
}

impl<'a> Contacts<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Contacts { client }
    }

    /// GET `/contacts`: search company contacts by name or email.
    pub async fn search_company(
        &self,
        search_key: &str,
        params: SearchContacts,
    ) -> Result<Value, CallError> {
        if params.page_size > 7 {
            return Err(CallError::invalid_argument("Unsupported page size."));
        }
        let spec = RequestSpec::new(Method::Get, "/contacts")
            .query("search_key", search_key)
            .query("query_presence_status", flag(params.query_presence_status))
            .query("page_size", params.page_size.to_string())
            .query("contact_types", params.contact_types.to_string())
            .query_opt("next_page_token", params.next_page_token);
        self.client.call(spec, &POLICY).await
    }

    /// GET `/chat/users/me/contacts`: the calling user's own contacts.
    /// Only works for user-managed OAuth apps.
    pub async fn list_user_contacts(
        &self,
        contact_type: ContactType,
        page_size: u32,
        next_page_token: Option<String>,
    ) -> Result<Value, CallError> {
        if !(10..=50).contains(&page_size) {
            return Err(CallError::invalid_argument("Unsupported page size."));
        }
        let spec = RequestSpec::new(Method::Get, "/chat/users/me/contacts")
            .query("type", contact_type.as_str())
            .query("page_size", page_size.to_string())
            .query_opt("next_page_token", next_page_token);
        self.client.call(spec, &POLICY).await
    }

    /// GET `/chat/users/me/contacts/{contactId}`: one contact's details.
    pub async fn get_user_contact(
        &self,
        contact_id: &str,
        query_presence_status: bool,
    ) -> Result<Value, CallError> {
        let spec = RequestSpec::new(Method::Get, "/chat/users/me/contacts/{contactId}")
            .path_param("contactId", contact_id)
            .query("query_presence_status", flag(query_presence_status));
        self.client.call(spec, &POLICY).await
    }
}
