//! Submission Form
//!
//! Form fields for reporting a found item, the selected image, and its
//! local preview.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::error::ValidationFailure;

/// Raw text fields as typed into the modal
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmissionForm {
    pub description: String,
    pub location: String,
    pub item_description: String,
}

impl SubmissionForm {
    /// Check required fields and build the outgoing payload
    pub fn validate(&self, image: Option<ImageUpload>) -> Result<NewItem, ValidationFailure> {
        let description = self.description.trim();
        let location = self.location.trim();
        if description.is_empty() {
            return Err(ValidationFailure::MissingDescription);
        }
        if location.is_empty() {
            return Err(ValidationFailure::MissingLocation);
        }
        Ok(NewItem {
            description: description.to_string(),
            location: location.to_string(),
            item_description: self.item_description.trim().to_string(),
            image,
        })
    }
}

/// A locally selected image file, read into memory
#[derive(Debug, Clone, PartialEq)]
pub struct ImageUpload {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        let mime_type = mime_type.into();
        Self {
            file_name: file_name.into(),
            // Some pickers report no type at all
            mime_type: if mime_type.is_empty() { "application/octet-stream".to_string() } else { mime_type },
            bytes,
        }
    }

    /// `data:` URL built from the raw bytes
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, STANDARD.encode(&self.bytes))
    }
}

/// Validated payload for the create endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub description: String,
    pub location: String,
    /// May be empty
    pub item_description: String,
    pub image: Option<ImageUpload>,
}

/// Where a preview image's `src` comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImagePreview {
    /// Built from file bytes (file picker)
    DataUrl(String),
    /// Transient browser object URL (camera); must be revoked when dropped
    ObjectUrl(String),
}

impl ImagePreview {
    pub fn src(&self) -> &str {
        match self {
            ImagePreview::DataUrl(url) | ImagePreview::ObjectUrl(url) => url,
        }
    }

    /// Object URL to release when this preview is cleared
    pub fn revocable(&self) -> Option<&str> {
        match self {
            ImagePreview::ObjectUrl(url) => Some(url),
            ImagePreview::DataUrl(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(description: &str, location: &str) -> SubmissionForm {
        SubmissionForm {
            description: description.to_string(),
            location: location.to_string(),
            item_description: "  ".to_string(),
        }
    }

    #[test]
    fn test_validate_trims() {
        let item = form("  Blue bottle ", " Gym ").validate(None).unwrap();
        assert_eq!(item.description, "Blue bottle");
        assert_eq!(item.location, "Gym");
        assert_eq!(item.item_description, "");
        assert!(item.image.is_none());
    }

    #[test]
    fn test_validate_requires_fields() {
        assert_eq!(form("   ", "Gym").validate(None), Err(ValidationFailure::MissingDescription));
        assert_eq!(form("Keys", "\t").validate(None), Err(ValidationFailure::MissingLocation));
    }

    #[test]
    fn test_image_carried_through() {
        let image = ImageUpload::new("a.png", "image/png", vec![1, 2, 3]);
        let item = form("Keys", "Gym").validate(Some(image.clone())).unwrap();
        assert_eq!(item.image, Some(image));
    }

    #[test]
    fn test_data_url() {
        let image = ImageUpload::new("a.png", "image/png", b"hi".to_vec());
        assert_eq!(image.data_url(), "data:image/png;base64,aGk=");
        let untyped = ImageUpload::new("blob", "", vec![]);
        assert_eq!(untyped.mime_type, "application/octet-stream");
    }

    #[test]
    fn test_preview_revocable() {
        assert_eq!(ImagePreview::ObjectUrl("blob:x".into()).revocable(), Some("blob:x"));
        assert_eq!(ImagePreview::DataUrl("data:x".into()).revocable(), None);
        assert_eq!(ImagePreview::DataUrl("data:x".into()).src(), "data:x");
    }
}
