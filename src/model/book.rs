use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An open JSON object used as the create and update payload.
///
/// The controller never inspects or filters it: whatever fields the caller
/// sends are handed to the store as-is.
pub type Document = Map<String, Value>;

/// A book as persisted by the document store.
///
/// # Open Schema
/// A book *is* its document. Nothing is typed or checked on the way in, so a
/// `null` title or a numeric author survive untouched and the book serializes
/// to exactly the document the store returned.
///
/// [`id`](Self::id), [`title`](Self::title) and [`author`](Self::author) are
/// read-only conveniences; they return `None` when the field is missing or is
/// not a string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Book(Document);

impl Book {
    /// Creates a new Book without an identifier.
    ///
    /// # Notes
    /// The `id` is left empty and will be set by the store on insert.
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self::default()
            .with_field("title", title.into())
            .with_field("author", author.into())
    }

    pub fn with_id(self, id: impl Into<String>) -> Self {
        self.with_field("id", id.into())
    }

    /// Sets any field, named or not (e.g. `"isbn"`).
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Identifier assigned by the store. Never generated or changed here.
    pub fn id(&self) -> Option<&str> {
        self.str_field("id")
    }

    pub fn title(&self) -> Option<&str> {
        self.str_field("title")
    }

    pub fn author(&self) -> Option<&str> {
        self.str_field("author")
    }

    /// Raw value of any field, including explicit `null`s.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn as_document(&self) -> &Document {
        &self.0
    }

    pub fn into_document(self) -> Document {
        self.0
    }

    pub fn to_json(&self) -> Value {
        Value::Object(self.0.clone())
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }
}

impl From<Document> for Book {
    fn from(document: Document) -> Self {
        Self(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_fields_are_kept() {
        let raw = json!({ "id": "1", "titulo": "Libro encontrado", "autor": "Juan perez" });

        let book: Book = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(book.id(), Some("1"));
        assert!(book.title().is_none());
        assert_eq!(book.get("titulo"), Some(&json!("Libro encontrado")));

        assert_eq!(book.to_json(), raw);
        assert_eq!(serde_json::to_value(&book).unwrap(), raw);
    }

    #[test]
    fn test_null_and_non_string_fields_round_trip() {
        let raw = json!({ "id": "1", "title": null, "author": 1984, "tags": ["distopia"] });

        let book: Book = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(book.get("title"), Some(&Value::Null));
        assert!(book.title().is_none());
        assert!(book.author().is_none());

        assert_eq!(serde_json::to_value(&book).unwrap(), raw);
    }

    #[test]
    fn test_non_object_is_rejected() {
        assert!(serde_json::from_value::<Book>(json!(["not", "a", "book"])).is_err());
    }

    #[test]
    fn test_builders() {
        let book = Book::new("Ficciones", "Jorge Luis Borges")
            .with_id("42")
            .with_field("year", 1944);

        assert_eq!(book.title(), Some("Ficciones"));
        assert_eq!(book.author(), Some("Jorge Luis Borges"));
        assert_eq!(
            book.to_json(),
            json!({ "id": "42", "title": "Ficciones", "author": "Jorge Luis Borges", "year": 1944 })
        );
    }

    #[test]
    fn test_from_document() {
        let mut document = Document::new();
        document.insert("id".into(), json!("7"));

        let book = Book::from(document.clone());
        assert_eq!(book.id(), Some("7"));
        assert_eq!(book.into_document(), document);
    }
}
