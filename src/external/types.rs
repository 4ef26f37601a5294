//! Data exchanged with the marksheet extraction service.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::StudentDetails;

/// A marksheet image or PDF ready to be sent for extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarksheetDocument {
    /// MIME type of the payload (e.g., "image/png").
    pub mime_type: String,
    /// Base64-encoded document bytes.
    pub data: String,
}

impl MarksheetDocument {
    /// Creates a document from a MIME type and base64 payload.
    pub fn new(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }

    /// Renders the document as a `data:` URI.
    ///
    /// # Examples
    ///
    /// ```
    /// use gpa_engine::external::MarksheetDocument;
    ///
    /// let doc = MarksheetDocument::new("image/png", "iVBORw0KGgo=");
    /// assert_eq!(doc.data_uri(), "data:image/png;base64,iVBORw0KGgo=");
    /// ```
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}

/// One subject row as read off a marksheet, before credits are known.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedSubject {
    /// The subject title.
    #[serde(default)]
    pub subject_name: String,
    /// The subject code; may be empty when unreadable.
    #[serde(default)]
    pub subject_code: String,
    /// Internal evaluation marks.
    #[serde(default)]
    pub internal_marks: Decimal,
    /// End examination marks.
    #[serde(default)]
    pub external_marks: Decimal,
    /// Total marks as printed.
    #[serde(default)]
    pub total_marks: Decimal,
}

/// Everything the extraction service read from one marksheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedMarksheet {
    /// Student identification block.
    #[serde(default)]
    pub student_details: StudentDetails,
    /// Subject rows in marksheet order.
    #[serde(default)]
    pub subject_details: Vec<ExtractedSubject>,
}
