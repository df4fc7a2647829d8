use serde_json::{json, Value};

pub const OK: u16 = 200;
pub const CREATED: u16 = 201;
pub const NOT_FOUND: u16 = 404;

/// Body message sent when an update matches no book.
pub const BOOK_NOT_FOUND: &str = "Libro no encontrado";

/// Status code plus JSON body, ready for the web framework to write out.
///
/// Built the same way a handler answers in most HTTP frameworks:
/// `Response::status(201).json(body)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: u16,
    pub body: Value,
}

impl Response {
    /// Starts a response with the given status and a `null` body.
    pub fn status(status: u16) -> Self {
        Self {
            status,
            body: Value::Null,
        }
    }

    pub fn json(mut self, body: impl Into<Value>) -> Self {
        self.body = body.into();
        self
    }

    /// `{ "error": message }` with the given status.
    pub fn error(status: u16, message: &str) -> Self {
        Self::status(status).json(json!({ "error": message }))
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_then_json() {
        let response = Response::status(CREATED).json(json!({ "id": "1" }));
        assert_eq!(response.status, 201);
        assert_eq!(response.body, json!({ "id": "1" }));
        assert!(response.is_success());
    }

    #[test]
    fn test_status_alone_has_null_body() {
        let response = Response::status(OK);
        assert_eq!(response.body, Value::Null);
    }

    #[test]
    fn test_error_body() {
        let response = Response::error(NOT_FOUND, BOOK_NOT_FOUND);
        assert_eq!(response.status, 404);
        assert_eq!(response.body, json!({ "error": "Libro no encontrado" }));
        assert!(!response.is_success());
    }
}
