//! Deployment Driver
//!
//! Runs the blocking provider deployment on a worker thread and hands the
//! single outcome back through a one-shot channel.

use std::path::PathBuf;
use std::sync::mpsc::{sync_channel, Receiver, RecvTimeoutError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::domain::entities::DeploymentResult;
use crate::domain::ports::DeploymentProvider;
use crate::domain::value_objects::{CancellationToken, DeploymentTarget};
use crate::error::{ProvisionError, ProvisionResult};

const WORKER_LOST: &str = "deployment worker exited without reporting a result";

/// Starts deployments in the background.
pub struct DeploymentDriver;

impl DeploymentDriver {
    /// Spawn the worker and return a handle to its eventual result.
    pub fn start(
        provider: Arc<dyn DeploymentProvider>,
        target: DeploymentTarget,
        template_path: PathBuf,
        parameters_path: PathBuf,
        cancel: CancellationToken,
    ) -> DeploymentHandle {
        let (tx, rx) = sync_channel(1);

        let worker = thread::spawn(move || {
            tracing::debug!(deployment = target.deployment_name(), "deployment started");
            let result = provider.deploy(&target, &template_path, &parameters_path, &cancel);
            // Receiver gone means nobody is waiting any more
            let _ = tx.send(result);
        });

        DeploymentHandle {
            rx,
            worker: Some(worker),
        }
    }
}

/// The pending outcome of a started deployment.
pub struct DeploymentHandle {
    rx: Receiver<ProvisionResult<DeploymentResult>>,
    worker: Option<JoinHandle<()>>,
}

impl DeploymentHandle {
    /// Wait up to `timeout` for the deployment to finish.
    ///
    /// Returns `None` when the timeout elapsed first. Once a result has been
    /// returned the handle is spent; further calls report the worker as lost.
    pub fn wait_timeout(&mut self, timeout: Duration) -> Option<ProvisionResult<DeploymentResult>> {
        match self.rx.recv_timeout(timeout) {
            Ok(result) => {
                self.join();
                Some(result)
            }
            Err(RecvTimeoutError::Timeout) => None,
            Err(RecvTimeoutError::Disconnected) => {
                self.join();
                Some(Err(ProvisionError::Deployment(WORKER_LOST.to_string())))
            }
        }
    }

    fn join(&mut self) {
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                tracing::warn!("deployment worker panicked");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Location, ResourceOperation};
    use std::path::Path;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct SlowProvider {
        delay: Duration,
        deploys: AtomicUsize,
        panic: bool,
    }

    impl DeploymentProvider for SlowProvider {
        fn deploy(
            &self,
            target: &DeploymentTarget,
            _template_path: &Path,
            _parameters_path: &Path,
            _cancel: &CancellationToken,
        ) -> ProvisionResult<DeploymentResult> {
            self.deploys.fetch_add(1, Ordering::SeqCst);
            thread::sleep(self.delay);
            if self.panic {
                panic!("provider blew up");
            }
            Ok(DeploymentResult::new(target.deployment_name()))
        }

        fn get_deployment_resource_operations(
            &self,
            _subscription_id: &str,
            _deployment_name: &str,
        ) -> ProvisionResult<Vec<ResourceOperation>> {
            Ok(Vec::new())
        }

        fn get_subscription_deployment(
            &self,
            _subscription_id: &str,
            deployment_name: &str,
        ) -> ProvisionResult<DeploymentResult> {
            Ok(DeploymentResult::new(deployment_name))
        }

        fn list_locations(&self, _subscription_id: &str) -> ProvisionResult<Vec<Location>> {
            Ok(Vec::new())
        }
    }

    fn start(provider: Arc<SlowProvider>) -> DeploymentHandle {
        let target = DeploymentTarget::new("sub", "eastus", "dev").unwrap();
        DeploymentDriver::start(
            provider,
            target,
            PathBuf::from("main.bicep"),
            PathBuf::from("main.parameters.json"),
            CancellationToken::new(),
        )
    }

    #[test]
    fn times_out_then_delivers_result_once() {
        let provider = Arc::new(SlowProvider {
            delay: Duration::from_millis(300),
            deploys: AtomicUsize::new(0),
            panic: false,
        });
        let mut handle = start(provider.clone());

        assert!(handle.wait_timeout(Duration::from_millis(10)).is_none());

        let result = handle.wait_timeout(Duration::from_secs(10)).unwrap().unwrap();
        assert_eq!(result.name, "dev");
        assert_eq!(provider.deploys.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn panicking_worker_surfaces_as_deployment_failure() {
        let provider = Arc::new(SlowProvider {
            delay: Duration::from_millis(0),
            deploys: AtomicUsize::new(0),
            panic: true,
        });
        let mut handle = start(provider);

        let err = handle
            .wait_timeout(Duration::from_secs(10))
            .unwrap()
            .unwrap_err();
        assert!(err.is_deployment_failure());
        assert!(err.to_string().contains(WORKER_LOST));
    }
}
