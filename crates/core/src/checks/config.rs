use crate::checks::Recorder;
use crate::manifest::{has_field, load_manifest};
use std::path::Path;

/// Manifest fields the backend scaffolding depends on, as JSON pointers
const REQUIRED_MANIFEST_FIELDS: [(&str, &str); 3] = [
    ("/scripts/start", "package.json has start script"),
    ("/dependencies/express", "Express is in dependencies"),
    ("/dependencies/mongoose", "Mongoose is in dependencies"),
];

/// Verify environment and package-manifest configuration
///
/// `.env.example` is optional and stays out of the tally entirely: its
/// absence is a warning, its presence adds nothing. A manifest that fails to
/// read or parse fails every field assertion, since none of the fields can
/// be shown present.
pub fn check(project_root: &Path, recorder: &mut Recorder) {
    recorder.begin("Configuration");

    if !project_root.join(".env.example").is_file() {
        recorder.warn(".env.example not found (optional)");
    }

    let manifest = match load_manifest(&project_root.join("package.json")) {
        Ok(manifest) => Some(manifest),
        Err(error) => {
            recorder.warn(format!("package.json could not be loaded: {error}"));
            None
        }
    };

    for (pointer, label) in REQUIRED_MANIFEST_FIELDS {
        let present = manifest
            .as_ref()
            .is_some_and(|manifest| has_field(manifest, pointer));
        recorder.record(present, label);
    }
}
