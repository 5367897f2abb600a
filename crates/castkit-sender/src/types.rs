//! Sender dispatcher types — the receiver-selection contract.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use url::Url;

/// Media source chosen in the receiver-selection flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Tab,
    Screen,
    File,
}

impl MediaType {
    pub fn all() -> &'static [MediaType] {
        &[Self::Tab, Self::Screen, Self::File]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Tab => "tab",
            Self::Screen => "screen",
            Self::File => "file",
        }
    }

    /// Tab and screen casts render remotely inside the target page
    /// context; file casts play back locally in the extension context.
    pub fn is_remote_rendering(&self) -> bool {
        matches!(self, Self::Tab | Self::Screen)
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Opaque descriptor of the chosen receiver device.
///
/// The dispatcher forwards it verbatim and never inspects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Receiver(pub serde_json::Value);

impl From<&str> for Receiver {
    fn from(id: &str) -> Self {
        Receiver(serde_json::Value::String(id.to_string()))
    }
}

impl From<serde_json::Value> for Receiver {
    fn from(value: serde_json::Value) -> Self {
        Receiver(value)
    }
}

/// A tab plus a frame within it, into which code may be injected.
///
/// Owned by the browser platform, not by this component. The caller
/// guarantees validity for the duration of one dispatch call; a stale
/// handle surfaces as an injection error on the first call against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetContext {
    #[serde(rename = "tabId")]
    pub tab_id: i64,
    #[serde(rename = "frameId")]
    pub frame_id: i64,
}

/// Completed receiver selection.
///
/// `filePath` exists only on the `File` variant, so the pairing invariant
/// holds by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mediaType", rename_all = "lowercase")]
pub enum SelectionOutcome {
    Tab {
        receiver: Receiver,
    },
    Screen {
        receiver: Receiver,
    },
    File {
        receiver: Receiver,
        #[serde(rename = "filePath")]
        file_path: PathBuf,
    },
}

impl SelectionOutcome {
    pub fn media_type(&self) -> MediaType {
        match self {
            Self::Tab { .. } => MediaType::Tab,
            Self::Screen { .. } => MediaType::Screen,
            Self::File { .. } => MediaType::File,
        }
    }

    pub fn receiver(&self) -> &Receiver {
        match self {
            Self::Tab { receiver } | Self::Screen { receiver } | Self::File { receiver, .. } => {
                receiver
            }
        }
    }
}

/// One cast action: where to inject, plus what the user selected.
///
/// `selection: None` means the selection flow was cancelled. Constructed
/// once per cast action and consumed exactly once by the dispatcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadRequest {
    pub target: TargetContext,
    #[serde(default)]
    pub selection: Option<SelectionOutcome>,
}

/// What a dispatch call did.
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchOutcome {
    /// Selection was cancelled; no side effects anywhere.
    Cancelled,
    /// Mirroring sender was primed and loaded into the target context.
    RemoteRendering { media_type: MediaType },
    /// Local playback sender was loaded and initialized.
    LocalPlayback { media_url: Url },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_type_names() {
        assert_eq!(MediaType::Tab.name(), "tab");
        assert_eq!(MediaType::Screen.name(), "screen");
        assert_eq!(MediaType::File.name(), "file");
        assert_eq!(MediaType::all().len(), 3);
    }

    #[test]
    fn test_media_type_families() {
        assert!(MediaType::Tab.is_remote_rendering());
        assert!(MediaType::Screen.is_remote_rendering());
        assert!(!MediaType::File.is_remote_rendering());
    }

    #[test]
    fn test_media_type_wire_name() {
        let json = serde_json::to_value(MediaType::Screen).unwrap();
        assert_eq!(json, serde_json::json!("screen"));
    }

    #[test]
    fn test_selection_file_shape() {
        let selection = SelectionOutcome::File {
            receiver: "R1".into(),
            file_path: PathBuf::from("/home/u/video.mp4"),
        };
        let json = serde_json::to_value(&selection).unwrap();
        assert_eq!(json["mediaType"], "file");
        assert_eq!(json["receiver"], "R1");
        assert_eq!(json["filePath"], "/home/u/video.mp4");
    }

    #[test]
    fn test_selection_tab_has_no_file_path() {
        let selection = SelectionOutcome::Tab {
            receiver: "R1".into(),
        };
        let json = serde_json::to_value(&selection).unwrap();
        assert_eq!(json["mediaType"], "tab");
        assert!(json.get("filePath").is_none());
    }

    #[test]
    fn test_selection_deserialize() {
        let selection: SelectionOutcome = serde_json::from_str(
            r#"{"mediaType": "screen", "receiver": {"id": "R2", "friendlyName": "Living Room"}}"#,
        )
        .unwrap();
        assert_eq!(selection.media_type(), MediaType::Screen);
        assert_eq!(selection.receiver().0["id"], "R2");
    }

    #[test]
    fn test_load_request_cancelled_shapes() {
        // Explicit null and absent selection both mean cancelled.
        let explicit: LoadRequest = serde_json::from_str(
            r#"{"target": {"tabId": 7, "frameId": 0}, "selection": null}"#,
        )
        .unwrap();
        assert!(explicit.selection.is_none());

        let absent: LoadRequest =
            serde_json::from_str(r#"{"target": {"tabId": 7, "frameId": 0}}"#).unwrap();
        assert!(absent.selection.is_none());
        assert_eq!(absent.target.tab_id, 7);
        assert_eq!(absent.target.frame_id, 0);
    }
}
