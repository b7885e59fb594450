//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::oneshot;
use usekit::guard::PromiseGuard;

pub type TestGuard = PromiseGuard<u32, u32, String>;

type Outcome = Result<u32, String>;

/// Operation whose invocations stay pending until the test settles them.
///
/// Invocations are numbered in the order the guard started them, so
/// `resolve(0, ..)` settles the first one regardless of its argument.
#[derive(Clone, Default)]
pub struct Gate {
    inner: Arc<Mutex<GateInner>>,
}

#[derive(Default)]
struct GateInner {
    calls: Vec<u32>,
    senders: Vec<Option<oneshot::Sender<Outcome>>>,
}

impl Gate {
    pub fn guard(&self) -> TestGuard {
        let gate = self.clone();
        PromiseGuard::labeled("test", move |arg: u32| {
            let rx = gate.register(arg);
            async move {
                rx.await
                    .unwrap_or_else(|_| Err("gate dropped".to_string()))
            }
        })
    }

    fn register(&self, arg: u32) -> oneshot::Receiver<Outcome> {
        let (tx, rx) = oneshot::channel();
        let mut inner = self.inner.lock();
        inner.calls.push(arg);
        inner.senders.push(Some(tx));
        rx
    }

    /// Arguments of every invocation that reached the operation.
    pub fn calls(&self) -> Vec<u32> {
        self.inner.lock().calls.clone()
    }

    pub fn resolve(&self, nth: usize, value: u32) {
        self.settle(nth, Ok(value));
    }

    pub fn reject(&self, nth: usize, error: &str) {
        self.settle(nth, Err(error.to_string()));
    }

    fn settle(&self, nth: usize, outcome: Outcome) {
        let tx = self.inner.lock().senders[nth]
            .take()
            .expect("invocation already settled");
        tx.send(outcome).expect("invocation future dropped");
    }
}

/// Path of a file shipped under `demos/`.
pub fn demo_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("demos")
        .join(name)
}
