//! Scripted collaborators for dispatcher tests and hosts without a live
//! browser platform.
//!
//! Both mocks record calls in issue order and can be scripted to fail any
//! single step, so tests can check ordering and failure isolation.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use castkit_core::{Error, Result};

use crate::priming::PrimingPayload;
use crate::traits::{
    ContextExecutor, ContextPayload, MediaSenderArgs, SenderModule, SenderModuleLoader,
};
use crate::types::TargetContext;

/// One recorded call against the target-context executor.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedInjection {
    Priming {
        target: TargetContext,
        payload: PrimingPayload,
    },
    Module {
        target: TargetContext,
        module_path: String,
    },
}

/// Target-context executor mock.
///
/// The optional priming delay exercises the ordering guarantee under
/// collaborator latency.
#[derive(Default)]
pub struct MockContextExecutor {
    calls: Mutex<Vec<RecordedInjection>>,
    fail_priming: bool,
    fail_module: bool,
    priming_delay: Option<Duration>,
}

impl MockContextExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_priming(mut self) -> Self {
        self.fail_priming = true;
        self
    }

    pub fn fail_module(mut self) -> Self {
        self.fail_module = true;
        self
    }

    pub fn with_priming_delay(mut self, delay: Duration) -> Self {
        self.priming_delay = Some(delay);
        self
    }

    /// Calls recorded so far, in issue order. Failed steps are not
    /// recorded.
    pub fn calls(&self) -> Vec<RecordedInjection> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl ContextExecutor for MockContextExecutor {
    async fn run_in_context(
        &self,
        target: &TargetContext,
        payload: ContextPayload<'_>,
    ) -> Result<()> {
        match payload {
            ContextPayload::Priming(payload) => {
                if let Some(delay) = self.priming_delay {
                    tokio::time::sleep(delay).await;
                }
                if self.fail_priming {
                    return Err(Error::Injection("target context destroyed".into()));
                }
                self.calls.lock().push(RecordedInjection::Priming {
                    target: *target,
                    payload: payload.clone(),
                });
            }
            ContextPayload::Module(module_path) => {
                if self.fail_module {
                    return Err(Error::Injection(format!(
                        "failed to execute {} in tab {}",
                        module_path, target.tab_id
                    )));
                }
                self.calls.lock().push(RecordedInjection::Module {
                    target: *target,
                    module_path: module_path.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Local-playback module mock: records `init` arguments.
#[derive(Default)]
pub struct MockSenderModule {
    init_calls: Mutex<Vec<MediaSenderArgs>>,
    fail_init: bool,
}

impl MockSenderModule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_init(mut self) -> Self {
        self.fail_init = true;
        self
    }

    pub fn init_calls(&self) -> Vec<MediaSenderArgs> {
        self.init_calls.lock().clone()
    }
}

#[async_trait]
impl SenderModule for MockSenderModule {
    async fn init(&self, args: MediaSenderArgs) -> Result<()> {
        if self.fail_init {
            return Err(Error::Activation("sender init rejected".into()));
        }
        self.init_calls.lock().push(args);
        Ok(())
    }
}

/// Extension-context loader mock: hands out one shared module instance and
/// records requested paths.
pub struct MockModuleLoader {
    module: Arc<MockSenderModule>,
    loads: Mutex<Vec<String>>,
    fail_load: bool,
}

impl MockModuleLoader {
    pub fn new(module: Arc<MockSenderModule>) -> Self {
        Self {
            module,
            loads: Mutex::new(Vec::new()),
            fail_load: false,
        }
    }

    pub fn fail_load(mut self) -> Self {
        self.fail_load = true;
        self
    }

    pub fn loads(&self) -> Vec<String> {
        self.loads.lock().clone()
    }
}

#[async_trait]
impl SenderModuleLoader for MockModuleLoader {
    async fn load(&self, module_path: &str) -> Result<Arc<dyn SenderModule>> {
        if self.fail_load {
            return Err(Error::Activation(format!(
                "module not found: {}",
                module_path
            )));
        }
        self.loads.lock().push(module_path.to_string());
        Ok(self.module.clone() as Arc<dyn SenderModule>)
    }
}
