//! Sender dispatcher — hands a completed receiver selection to the right
//! sender, in the right execution context.
//!
//! One `LoadRequest` in, exactly one of three actions out: nothing (the
//! selection flow was cancelled), a two-step injection into the target
//! browsing context (tab/screen mirroring), or a module load plus init in
//! the extension's own context (local file playback).

pub mod config;
pub mod dispatch;
pub mod priming;
pub mod testing;
pub mod traits;
pub mod types;

pub use config::SenderConfig;
pub use dispatch::{
    LocalPlaybackActivation, RemoteRenderingActivation, SenderActivation, SenderDispatcher,
};
pub use priming::{file_locator, PrimingPayload};
pub use traits::{
    ContextExecutor, ContextPayload, MediaSenderArgs, SenderModule, SenderModuleLoader,
};
pub use types::*;
