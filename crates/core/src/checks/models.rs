use crate::checks::Recorder;
use std::path::Path;
use tracing::debug;

const MODELS_DIR: &str = "src/models";
const MODEL_EXTENSION: &str = "js";

/// Verify the models directory holds at least one loadable model file
///
/// "Loadable" is deliberately shallow: the file must be readable and
/// non-empty. No knowledge of the model's internal shape is assumed. A load
/// failure becomes a failed assertion carrying the underlying error message,
/// never a crash.
pub fn check(project_root: &Path, recorder: &mut Recorder) {
    recorder.begin("Database Models");

    let models_dir = project_root.join(MODELS_DIR);
    if !models_dir.is_dir() {
        recorder.record(false, "Models directory exists");
        return;
    }

    let model_files = list_model_files(&models_dir);
    debug!(count = model_files.len(), "model files discovered");
    recorder.record(
        !model_files.is_empty(),
        format!("Found {} model file(s)", model_files.len()),
    );

    for file_name in model_files {
        match std::fs::read_to_string(models_dir.join(&file_name)) {
            Ok(content) if !content.trim().is_empty() => {
                recorder.record(true, format!("{file_name} loads successfully"));
            }
            Ok(_) => {
                recorder.record(false, format!("{file_name} loads successfully - file is empty"));
            }
            Err(error) => {
                recorder.record(
                    false,
                    format!("{file_name} loads successfully - Error: {error}"),
                );
            }
        }
    }
}

/// Model file names with the expected extension, sorted for stable output
fn list_model_files(models_dir: &Path) -> Vec<String> {
    let mut files: Vec<String> = std::fs::read_dir(models_dir)
        .into_iter()
        .flatten()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| {
            Path::new(name)
                .extension()
                .is_some_and(|ext| ext == MODEL_EXTENSION)
        })
        .collect();

    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AssertionStatus;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn populated_models_directory_passes_count_and_per_file_assertions() {
        let temp = TempDir::new().unwrap();
        let models = temp.path().join("src/models");
        fs::create_dir_all(&models).unwrap();
        fs::write(models.join("user.js"), "module.exports = {};").unwrap();
        fs::write(models.join("order.js"), "module.exports = {};").unwrap();
        fs::write(models.join("README.md"), "not a model").unwrap();

        let mut recorder = Recorder::new();
        check(temp.path(), &mut recorder);

        let report = recorder.into_report();
        assert_eq!(report.total, 3);
        assert_eq!(report.failed, 0);
        assert_eq!(
            report.checks[0].assertions[0].label,
            "Found 2 model file(s)"
        );
        // Sorted enumeration keeps output stable across runs
        assert_eq!(
            report.checks[0].assertions[1].label,
            "order.js loads successfully"
        );
        assert_eq!(
            report.checks[0].assertions[2].label,
            "user.js loads successfully"
        );
    }

    #[test]
    fn missing_directory_is_one_failed_assertion_without_enumeration() {
        let temp = TempDir::new().unwrap();

        let mut recorder = Recorder::new();
        check(temp.path(), &mut recorder);

        let report = recorder.into_report();
        assert_eq!(report.total, 1);
        assert_eq!(report.failed, 1);
        assert_eq!(report.checks[0].assertions[0].label, "Models directory exists");
    }

    #[test]
    fn empty_directory_fails_the_count_assertion_only() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("src/models")).unwrap();

        let mut recorder = Recorder::new();
        check(temp.path(), &mut recorder);

        let report = recorder.into_report();
        assert_eq!(report.total, 1);
        assert_eq!(report.failed, 1);
        assert_eq!(
            report.checks[0].assertions[0].label,
            "Found 0 model file(s)"
        );
    }

    #[test]
    fn empty_model_file_fails_its_load_assertion_with_context() {
        let temp = TempDir::new().unwrap();
        let models = temp.path().join("src/models");
        fs::create_dir_all(&models).unwrap();
        fs::write(models.join("empty.js"), "   \n").unwrap();

        let mut recorder = Recorder::new();
        check(temp.path(), &mut recorder);

        let report = recorder.into_report();
        assert_eq!(report.total, 2);
        let load = &report.checks[0].assertions[1];
        assert_eq!(load.status, AssertionStatus::Fail);
        assert!(load.label.contains("empty.js"));
        assert!(load.label.contains("file is empty"));
    }

    #[test]
    fn unreadable_model_file_carries_the_error_in_the_label() {
        let temp = TempDir::new().unwrap();
        let models = temp.path().join("src/models");
        fs::create_dir_all(&models).unwrap();
        // Invalid UTF-8 makes read_to_string fail without permissions games
        fs::write(models.join("binary.js"), [0xffu8, 0xfe, 0x00]).unwrap();

        let mut recorder = Recorder::new();
        check(temp.path(), &mut recorder);

        let report = recorder.into_report();
        let load = &report.checks[0].assertions[1];
        assert_eq!(load.status, AssertionStatus::Fail);
        assert!(load.label.contains("Error:"));
    }
}
