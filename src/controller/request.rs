use crate::model::Document;
use std::collections::HashMap;

/// Name of the path parameter holding the book identifier.
pub const ID_PARAM: &str = "id";

/// What the routing layer extracted from an inbound HTTP request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Request {
    pub params: HashMap<String, String>,
    pub body: Option<Document>,
}

impl Request {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Shorthand for `with_param(ID_PARAM, id)`.
    pub fn with_id(self, id: impl Into<String>) -> Self {
        self.with_param(ID_PARAM, id)
    }

    pub fn with_body(mut self, body: Document) -> Self {
        self.body = Some(body);
        self
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}
