use crate::checks::Recorder;
use std::path::Path;

const REQUIRED_FILES: [&str; 3] = ["src/server.js", "package.json", "Dockerfile"];

const REQUIRED_DIRS: [&str; 3] = ["src/controllers", "src/models", "src/middleware"];

/// Verify the expected scaffolding files and directories exist
///
/// Each path gets its own assertion; one missing entry does not short-circuit
/// the rest.
pub fn check(project_root: &Path, recorder: &mut Recorder) {
    recorder.begin("File Structure");

    for file in REQUIRED_FILES {
        let exists = project_root.join(file).is_file();
        recorder.record(exists, format!("{file} exists"));
    }

    for dir in REQUIRED_DIRS {
        let exists = project_root.join(dir).is_dir();
        recorder.record(exists, format!("{dir} directory exists"));
    }
}
