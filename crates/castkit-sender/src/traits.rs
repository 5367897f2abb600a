//! Collaborator seams: target-context execution and extension-context
//! module loading.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use url::Url;

use castkit_core::Result;

use crate::priming::PrimingPayload;
use crate::types::{Receiver, TargetContext};

/// One payload for the single execution primitive: either the structured
/// priming record or an entry-module path.
#[derive(Debug, Clone, Copy)]
pub enum ContextPayload<'a> {
    Priming(&'a PrimingPayload),
    Module(&'a str),
}

/// Executes payloads inside a target browsing context.
///
/// Implementations must preserve ordering for sequential calls against the
/// same context. Failures (context destroyed, permission denied, navigated
/// away) surface as `Error::Injection`; the dispatcher never retries them.
#[async_trait]
pub trait ContextExecutor: Send + Sync {
    async fn run_in_context(
        &self,
        target: &TargetContext,
        payload: ContextPayload<'_>,
    ) -> Result<()>;
}

/// Arguments handed to the local-playback sender's entry point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MediaSenderArgs {
    #[serde(rename = "mediaUrl")]
    pub media_url: Url,
    pub receiver: Receiver,
}

/// A loaded local-playback sender module.
#[async_trait]
pub trait SenderModule: Send + Sync {
    /// The sender's documented entry point. A failure here is an
    /// activation error.
    async fn init(&self, args: MediaSenderArgs) -> Result<()>;
}

/// Dynamically loads sender modules into the extension's own privileged
/// context.
#[async_trait]
pub trait SenderModuleLoader: Send + Sync {
    async fn load(&self, module_path: &str) -> Result<Arc<dyn SenderModule>>;
}
