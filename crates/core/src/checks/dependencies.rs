use crate::checks::Recorder;
use crate::manifest::load_manifest;
use std::path::Path;
use tracing::debug;

/// Modules the backend cannot run without
const REQUIRED_MODULES: [&str; 4] = ["express", "mongoose", "cors", "dotenv"];

/// Verify the required npm modules resolve under the project root
///
/// Resolution mirrors `require(name)` scoped to the project: the module's
/// directory must exist under `node_modules` and carry a parseable
/// `package.json`. Missing and malformed are the same failure.
pub fn check(project_root: &Path, recorder: &mut Recorder) {
    recorder.begin("Dependencies");

    for module in REQUIRED_MODULES {
        let resolved = resolve_module(project_root, module);
        debug!(module, resolved, "dependency resolution");
        recorder.record(resolved, format!("{module} is installed"));
    }
}

fn resolve_module(project_root: &Path, name: &str) -> bool {
    let manifest_path = project_root
        .join("node_modules")
        .join(name)
        .join("package.json");

    load_manifest(&manifest_path).is_ok()
}
