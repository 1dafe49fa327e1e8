use crate::checks::Recorder;
use std::path::Path;

const DESCRIPTOR: &str = "Dockerfile";

/// Instruction keywords every usable backend Dockerfile carries
const REQUIRED_KEYWORDS: [&str; 5] = ["FROM", "WORKDIR", "COPY", "EXPOSE", "CMD"];

/// Verify the container descriptor contains the expected instructions
///
/// Pure substring search: order and position do not matter. A missing
/// descriptor is a single failed assertion and the keyword checks are
/// skipped entirely.
pub fn check(project_root: &Path, recorder: &mut Recorder) {
    recorder.begin("Dockerfile");

    let descriptor_path = project_root.join(DESCRIPTOR);
    if !descriptor_path.is_file() {
        recorder.record(false, "Dockerfile exists");
        return;
    }

    let content = match std::fs::read_to_string(&descriptor_path) {
        Ok(content) => content,
        Err(error) => {
            recorder.record_with_detail(
                false,
                "Dockerfile is readable",
                Some(error.to_string()),
            );
            return;
        }
    };

    for keyword in REQUIRED_KEYWORDS {
        recorder.record(
            content.contains(keyword),
            format!("Dockerfile has {keyword} instruction"),
        );
    }
}
