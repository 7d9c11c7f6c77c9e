pub mod controller;
pub mod error;
pub mod source;

pub use controller::{CaptureController, CaptureToggle, Snapshot};
pub use error::{CaptureError, Result};
pub use source::{CaptureConstraints, CaptureSession, CaptureSource, StubCameraSource, VideoTrack};
