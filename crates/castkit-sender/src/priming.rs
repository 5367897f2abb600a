//! State priming for remote-rendering casts, and local media locators.

use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use castkit_core::{Error, Result};

use crate::types::{MediaType, Receiver, SelectionOutcome};

/// Structured state handed to the target context before the mirroring
/// entry module runs there. A serializable record rather than interpolated
/// source text, so the payload carries no quoting hazards and can be
/// checked on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimingPayload {
    #[serde(rename = "selectedMedia")]
    pub selected_media: MediaType,
    #[serde(rename = "selectedReceiver")]
    pub selected_receiver: Receiver,
}

impl PrimingPayload {
    /// Build the priming record for a selection.
    pub fn from_selection(selection: &SelectionOutcome) -> Self {
        Self {
            selected_media: selection.media_type(),
            selected_receiver: selection.receiver().clone(),
        }
    }
}

/// Canonicalize a user-chosen local path into a `file://` locator.
///
/// The path is appended after the scheme unchanged, so a path without a
/// leading separator still yields a parseable locator. Empty or
/// unparseable paths fail fast with a media-path error.
pub fn file_locator(path: &Path) -> Result<Url> {
    let raw = path
        .to_str()
        .ok_or_else(|| Error::MediaPath(format!("path is not valid UTF-8: {}", path.display())))?;
    if raw.is_empty() {
        return Err(Error::MediaPath("empty file path".into()));
    }
    Url::parse(&format!("file://{}", raw))
        .map_err(|e| Error::MediaPath(format!("{}: {}", raw, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_priming_payload_from_selection() {
        let selection = SelectionOutcome::Tab {
            receiver: "R1".into(),
        };
        let payload = PrimingPayload::from_selection(&selection);
        assert_eq!(payload.selected_media, MediaType::Tab);
        assert_eq!(payload.selected_receiver, "R1".into());
    }

    #[test]
    fn test_priming_payload_wire_names() {
        let payload = PrimingPayload {
            selected_media: MediaType::Screen,
            selected_receiver: "R2".into(),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["selectedMedia"], "screen");
        assert_eq!(json["selectedReceiver"], "R2");
    }

    #[test]
    fn test_file_locator_absolute() {
        let url = file_locator(Path::new("/home/u/video.mp4")).unwrap();
        assert_eq!(url.as_str(), "file:///home/u/video.mp4");
    }

    #[test]
    fn test_file_locator_no_leading_separator() {
        // Appended unchanged, still a well-formed locator.
        let url = file_locator(Path::new("videos/clip.mp4")).unwrap();
        assert_eq!(url.as_str(), "file://videos/clip.mp4");
    }

    #[test]
    fn test_file_locator_empty_path() {
        let err = file_locator(&PathBuf::new()).unwrap_err();
        assert!(matches!(err, Error::MediaPath(_)));
    }
}
