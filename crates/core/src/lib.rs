pub mod checks;
pub mod manifest;
pub mod model;

pub use checks::{run_checklist, Recorder};
pub use manifest::{has_field, load_manifest, ManifestError};
pub use model::{Assertion, AssertionStatus, CheckReport, RunReport};
