use softbuffer::SoftBufferError;
use thiserror::Error;
use winit::error::{EventLoopError, OsError};

/// Failures while bringing up or driving the desktop host
#[derive(Debug, Error)]
pub enum HostError {
    #[error("event loop error: {0}")]
    EventLoop(#[from] EventLoopError),
    #[error("could not create window: {0}")]
    Window(#[from] OsError),
    #[error("framebuffer surface error: {0}")]
    Surface(#[from] SoftBufferError),
}
