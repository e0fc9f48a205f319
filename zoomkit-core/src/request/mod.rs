//! Declarative description of one API call.

pub mod path;
pub mod query;

use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// HTTP verbs the vendor API uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }

    /// DELETE never carries a payload; every other mutating verb may.
    pub fn allows_body(&self) -> bool {
        !matches!(self, Method::Get | Method::Delete)
    }
}

/// Request payload: nothing, pre-encoded text, or a mapping serialized to
/// JSON at send time. An empty mapping is the same as no body.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Body {
    #[default]
    Empty,
    Raw(String),
    Json(Map<String, Value>),
}

impl Body {
    /// The JSON text to put on the wire, if any.
    pub fn encoded(&self) -> Option<String> {
        match self {
            Body::Empty => None,
            Body::Raw(s) if s.is_empty() => None,
            Body::Raw(s) => Some(s.clone()),
            Body::Json(map) if map.is_empty() => None,
            Body::Json(map) => Some(Value::Object(map.clone()).to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Body::Empty)
            || matches!(self, Body::Raw(s) if s.is_empty())
            || matches!(self, Body::Json(map) if map.is_empty())
    }
}

/// Everything needed to issue one call: verb, `{name}`-templated path,
/// path and query parameters, and body.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSpec {
    pub method: Method,
    pub path: String,
    pub path_params: BTreeMap<String, String>,
    pub query: Vec<(String, String)>,
    pub body: Body,
}

impl RequestSpec {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        RequestSpec {
            method,
            path: path.into(),
            path_params: BTreeMap::new(),
            query: Vec::new(),
            body: Body::Empty,
        }
    }

    pub fn path_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.path_params.insert(name.into(), value.into());
        self
    }

    /// Add a query parameter. Entries whose value ends up empty are dropped
    /// when the query string is encoded, not here, so the spec stays a
    /// faithful record of what the caller asked for.
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    /// Add a query parameter only when a value is present.
    pub fn query_opt(mut self, name: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        if let Some(value) = value {
            self.query.push((name.into(), value.into()));
        }
        self
    }

    pub fn body(mut self, body: Body) -> Self {
        self.body = body;
        self
    }

    pub fn json_body(mut self, fields: Map<String, Value>) -> Self {
        self.body = Body::Json(fields);
        self
    }
}
