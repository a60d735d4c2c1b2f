//! Reading back the results of a check run.
//!
//! Process output may be captured to the file named by `DROIDNOTIFY_CONSOLE`;
//! a check run always writes its transcript to `last.txt` under the
//! application root.

use crate::report::Report;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Environment variable naming the console capture file.
pub const CONSOLE_ENV: &str = "DROIDNOTIFY_CONSOLE";

/// File name of the last run's transcript.
pub const LOG_FILE_NAME: &str = "last.txt";

/// Console capture file, if one is configured.
pub fn console_path() -> Option<PathBuf> {
    std::env::var_os(CONSOLE_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Transcript file under `app_root`.
pub fn log_path(app_root: &Path) -> PathBuf {
    app_root.join(LOG_FILE_NAME)
}

/// Build the "Refreshed Results" report.
///
/// Shows the console capture and the transcript, each in its own section.
/// Fails only when neither can be read.
pub fn refresh(console: Option<&Path>, log: &Path) -> Report {
    let console_output = console.map(|path| (path, fs::read_to_string(path)));
    let log_output = fs::read_to_string(log);

    let console_read = matches!(console_output, Some((_, Ok(_))));
    if !console_read && log_output.is_err() {
        let mut report = Report::failure("Error Refreshing");
        if let Some((path, Err(err))) = &console_output {
            log::warn!("failed to read {}: {err}", path.display());
            report = report
                .field("Console File", path.display())
                .field("Error", err);
        }
        if let Err(err) = &log_output {
            log::warn!("failed to read {}: {err}", log.display());
            report = report.field("Log File", log.display()).field("Error", err);
        }
        return report;
    }

    let mut report = Report::new("🔄", "Refreshed Results");
    if let Some((path, output)) = console_output {
        report = section(report, "Console Output", path, output);
    }
    section(report, "Log File", log, log_output)
}

fn section(report: Report, heading: &str, path: &Path, output: io::Result<String>) -> Report {
    let report = report.heading(heading).field("Path", path.display());
    match output {
        Ok(content) => report.code(content),
        Err(err) => report.field("Error", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_lives_under_app_root() {
        assert_eq!(log_path(Path::new("/data/app")), Path::new("/data/app/last.txt"));
    }

    #[test]
    fn shows_console_capture_and_transcript() {
        let dir = tempfile::tempdir().unwrap();
        let console = dir.path().join("console.log");
        let log = log_path(dir.path());
        fs::write(&console, "process stdout").unwrap();
        fs::write(&log, "Ran 6 checks\n\nOK").unwrap();

        let rendered = refresh(Some(&console), &log).render();
        assert!(rendered.starts_with("# 🔄 Refreshed Results"));
        assert!(rendered.contains("## Console Output"));
        assert!(rendered.contains("process stdout"));
        assert!(rendered.contains("## Log File"));
        assert!(rendered.contains("Ran 6 checks"));
        let console_at = rendered.find("process stdout").unwrap();
        assert!(console_at < rendered.find("Ran 6 checks").unwrap());
    }

    #[test]
    fn unreadable_console_still_shows_transcript() {
        let dir = tempfile::tempdir().unwrap();
        let log = log_path(dir.path());
        fs::write(&log, "Ran 6 checks\n\nOK").unwrap();

        let missing_console = dir.path().join("missing.log");
        let report = refresh(Some(&missing_console), &log);
        assert!(!report.is_failure());
        let rendered = report.render();
        assert!(rendered.contains("## Console Output"));
        assert!(rendered.contains("Ran 6 checks"));
    }

    #[test]
    fn console_alone_is_enough() {
        let dir = tempfile::tempdir().unwrap();
        let console = dir.path().join("console.log");
        fs::write(&console, "process stdout").unwrap();

        let report = refresh(Some(&console), &log_path(dir.path()));
        assert!(!report.is_failure());
        assert!(report.render().contains("process stdout"));
    }

    #[test]
    fn missing_files_report_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let report = refresh(None, &log_path(dir.path()));
        assert!(report.is_failure());
        assert!(report.render().starts_with("# ❌ Error Refreshing"));
    }
}
