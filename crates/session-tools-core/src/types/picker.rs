//! Raw results produced by the external file picker

use serde::{Deserialize, Serialize};

/// Doc type the picker reports for folders
pub const FOLDER_DOC_TYPE: &str = "folder";

/// One picked document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerDoc {
    /// "folder" or any other document type
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl PickerDoc {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            id: None,
            name: None,
        }
    }

    pub fn folder() -> Self {
        Self::new(FOLDER_DOC_TYPE)
    }

    pub fn file() -> Self {
        Self::new("file")
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn is_folder(&self) -> bool {
        self.kind == FOLDER_DOC_TYPE
    }
}

/// The picker's selection, passed through untouched once accepted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerResult {
    /// Missing and empty both mean the user closed the picker
    #[serde(default)]
    pub docs: Vec<PickerDoc>,
}

impl PickerResult {
    pub fn new(docs: Vec<PickerDoc>) -> Self {
        Self { docs }
    }

    /// Split the selection into `(folders, files)`
    pub fn partition(&self) -> (Vec<&PickerDoc>, Vec<&PickerDoc>) {
        self.docs.iter().partition(|d| d.is_folder())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_partition() {
        let result = PickerResult::new(vec![
            PickerDoc::folder(),
            PickerDoc::file(),
            PickerDoc::new("document"),
        ]);
        let (folders, files) = result.partition();
        assert_eq!(folders.len(), 1);
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_missing_docs_is_empty() {
        let result: PickerResult = serde_json::from_value(json!({})).unwrap();
        assert!(result.docs.is_empty());

        let result: PickerResult =
            serde_json::from_value(json!({ "docs": [{ "type": "folder", "id": "f1" }] })).unwrap();
        assert!(result.docs[0].is_folder());
        assert_eq!(result.docs[0].id.as_deref(), Some("f1"));
    }
}
