//! Sender dispatcher — decides which sender runs, where, with what state.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use castkit_core::{Error, Result};

use crate::config::SenderConfig;
use crate::priming::{file_locator, PrimingPayload};
use crate::traits::{ContextExecutor, ContextPayload, MediaSenderArgs, SenderModuleLoader};
use crate::types::{DispatchOutcome, LoadRequest, MediaType, SelectionOutcome, TargetContext};

/// Activation strategy for one sender family.
#[async_trait]
pub trait SenderActivation: Send + Sync {
    async fn activate(
        &self,
        selection: &SelectionOutcome,
        target: &TargetContext,
    ) -> Result<DispatchOutcome>;
}

/// Tab/screen mirroring: prime the target context, then run the mirroring
/// entry module in the same frame.
///
/// The two injections are strictly ordered; the entry module is never
/// issued if priming fails.
pub struct RemoteRenderingActivation {
    executor: Arc<dyn ContextExecutor>,
    entry_module: String,
}

impl RemoteRenderingActivation {
    pub fn new(executor: Arc<dyn ContextExecutor>, entry_module: impl Into<String>) -> Self {
        Self {
            executor,
            entry_module: entry_module.into(),
        }
    }
}

#[async_trait]
impl SenderActivation for RemoteRenderingActivation {
    async fn activate(
        &self,
        selection: &SelectionOutcome,
        target: &TargetContext,
    ) -> Result<DispatchOutcome> {
        let payload = PrimingPayload::from_selection(selection);
        self.executor
            .run_in_context(target, ContextPayload::Priming(&payload))
            .await?;
        debug!(
            "Primed tab {} frame {} for {} mirroring",
            target.tab_id, target.frame_id, payload.selected_media
        );

        self.executor
            .run_in_context(target, ContextPayload::Module(&self.entry_module))
            .await?;
        info!(
            "Mirroring sender loaded into tab {} frame {}",
            target.tab_id, target.frame_id
        );

        Ok(DispatchOutcome::RemoteRendering {
            media_type: selection.media_type(),
        })
    }
}

/// File playback: build a `file://` locator, load the local-playback
/// module into the extension's own context, hand it the locator and the
/// untouched receiver descriptor.
///
/// `init` is never called if the load fails.
pub struct LocalPlaybackActivation {
    loader: Arc<dyn SenderModuleLoader>,
    entry_module: String,
}

impl LocalPlaybackActivation {
    pub fn new(loader: Arc<dyn SenderModuleLoader>, entry_module: impl Into<String>) -> Self {
        Self {
            loader,
            entry_module: entry_module.into(),
        }
    }
}

#[async_trait]
impl SenderActivation for LocalPlaybackActivation {
    async fn activate(
        &self,
        selection: &SelectionOutcome,
        _target: &TargetContext,
    ) -> Result<DispatchOutcome> {
        let SelectionOutcome::File {
            receiver,
            file_path,
        } = selection
        else {
            return Err(Error::Activation(format!(
                "local playback requires a file selection, got {}",
                selection.media_type()
            )));
        };

        let media_url = file_locator(file_path)?;
        let module = self.loader.load(&self.entry_module).await?;
        module
            .init(MediaSenderArgs {
                media_url: media_url.clone(),
                receiver: receiver.clone(),
            })
            .await?;
        info!("Local playback sender initialized for {}", media_url);

        Ok(DispatchOutcome::LocalPlayback { media_url })
    }
}

/// Decides which sender implementation runs for a completed receiver
/// selection and performs the hand-off.
///
/// Holds no state beyond its collaborators; every input for one cast
/// action arrives in the `LoadRequest`. Once a dispatch has begun it runs
/// to completion or failure; cancellation exists only as an absent
/// selection. Concurrent dispatches against the same target context are a
/// caller responsibility.
pub struct SenderDispatcher {
    remote: RemoteRenderingActivation,
    local: LocalPlaybackActivation,
}

impl SenderDispatcher {
    pub fn new(
        executor: Arc<dyn ContextExecutor>,
        loader: Arc<dyn SenderModuleLoader>,
        config: SenderConfig,
    ) -> Self {
        Self {
            remote: RemoteRenderingActivation::new(executor, config.mirroring_module),
            local: LocalPlaybackActivation::new(loader, config.local_media_module),
        }
    }

    /// Dispatch one cast action.
    ///
    /// Completes when the chosen sender has been handed its initial state,
    /// not necessarily when the sender has finished its own startup. A
    /// request without a selection is a cancelled flow: no collaborator is
    /// called and nothing changes anywhere.
    pub async fn dispatch(&self, request: LoadRequest) -> Result<DispatchOutcome> {
        let Some(selection) = request.selection else {
            debug!("Receiver selection cancelled, nothing to dispatch");
            return Ok(DispatchOutcome::Cancelled);
        };

        let strategy: &dyn SenderActivation = match selection.media_type() {
            MediaType::Tab | MediaType::Screen => &self.remote,
            MediaType::File => &self.local,
        };

        strategy.activate(&selection, &request.target).await
    }
}
