//! Background dispatcher
//!
//! The panels hand finished requests to the host, and the host forwards them
//! here. A dedicated thread stands in for the external image backend: the
//! built-in loopback acknowledges each request after a fixed latency.

use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossbeam_channel::{unbounded, Receiver, Sender};
use thiserror::Error;
use tracing::{debug, info};

/// Messages sent from the UI thread to the dispatcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditRequest {
    /// Restyle the image as ASCII art using a composed prompt
    AsciiArt { prompt: String },
    /// Upscale the current image
    Upscale,
    /// Shutdown signal
    Shutdown,
}

impl EditRequest {
    pub fn kind(&self) -> RequestKind {
        match self {
            EditRequest::AsciiArt { .. } => RequestKind::AsciiArt,
            EditRequest::Upscale => RequestKind::Upscale,
            EditRequest::Shutdown => RequestKind::Shutdown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    AsciiArt,
    Upscale,
    Shutdown,
}

impl RequestKind {
    pub fn name(&self) -> &'static str {
        match self {
            RequestKind::AsciiArt => "ASCII Art",
            RequestKind::Upscale => "Upscale",
            RequestKind::Shutdown => "Shutdown",
        }
    }
}

/// Responses sent from the dispatcher back to the UI thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditResponse {
    Completed { kind: RequestKind, elapsed_ms: u64 },
    Failed { kind: RequestKind, message: String },
}

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("dispatcher is not running")]
    Disconnected,
}

/// Something that carries out edit requests
pub trait EditBackend: Send + 'static {
    fn process(&mut self, request: &EditRequest) -> Result<(), String>;
}

/// Acknowledges every request after sleeping for `latency`
#[derive(Debug, Clone)]
pub struct LoopbackBackend {
    pub latency: Duration,
}

impl LoopbackBackend {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl EditBackend for LoopbackBackend {
    fn process(&mut self, request: &EditRequest) -> Result<(), String> {
        if let EditRequest::AsciiArt { prompt } = request {
            debug!(chars = prompt.chars().count(), "loopback received prompt");
        }
        thread::sleep(self.latency);
        Ok(())
    }
}

/// Handle to the dispatcher thread and its channels
pub struct DispatcherHandle {
    request_tx: Sender<EditRequest>,
    pub response_rx: Receiver<EditResponse>,
    thread: Option<JoinHandle<()>>,
}

impl DispatcherHandle {
    /// Sender for the host state to submit requests through
    pub fn request_sender(&self) -> Sender<EditRequest> {
        self.request_tx.clone()
    }

    pub fn submit(&self, request: EditRequest) -> Result<(), DispatchError> {
        self.request_tx
            .send(request)
            .map_err(|_| DispatchError::Disconnected)
    }

    /// Stop the dispatcher thread and wait for it
    pub fn shutdown(mut self) {
        let _ = self.request_tx.send(EditRequest::Shutdown);
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }
}

/// Spawn the dispatcher thread around a backend
pub fn spawn_dispatcher<B: EditBackend>(backend: B) -> std::io::Result<DispatcherHandle> {
    let (request_tx, request_rx) = unbounded::<EditRequest>();
    let (response_tx, response_rx) = unbounded::<EditResponse>();

    let handle = thread::Builder::new()
        .name("edit-dispatcher".to_string())
        .spawn(move || dispatcher_loop(backend, request_rx, response_tx))?;

    Ok(DispatcherHandle {
        request_tx,
        response_rx,
        thread: Some(handle),
    })
}

/// Main dispatcher loop - processes requests until shutdown
fn dispatcher_loop<B: EditBackend>(
    mut backend: B,
    rx: Receiver<EditRequest>,
    tx: Sender<EditResponse>,
) {
    while let Ok(request) = rx.recv() {
        let kind = request.kind();
        if kind == RequestKind::Shutdown {
            break;
        }

        let start = Instant::now();
        let response = match backend.process(&request) {
            Ok(()) => EditResponse::Completed {
                kind,
                elapsed_ms: start.elapsed().as_millis() as u64,
            },
            Err(message) => EditResponse::Failed { kind, message },
        };
        info!(request = kind.name(), ?response, "request finished");

        if tx.send(response).is_err() {
            break;
        }
    }
    debug!("dispatcher stopped");
}
