//! Markdown reports shown in the test activity.

use droidnotify_notification::SendOutcome;
use droidnotify_permission::{PermissionError, PermissionStatus};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Section {
    Text(String),
    Field(String, String),
    Heading(String),
    Code(String),
}

/// A titled markdown document built section by section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    marker: &'static str,
    title: String,
    sections: Vec<Section>,
}

impl Report {
    /// Report with a custom leading marker.
    pub fn new(marker: &'static str, title: impl Into<String>) -> Self {
        Self {
            marker,
            title: title.into(),
            sections: Vec::new(),
        }
    }

    /// Report for an action that went through.
    pub fn success(title: impl Into<String>) -> Self {
        Self::new("✅", title)
    }

    /// Report for an action that did not.
    pub fn failure(title: impl Into<String>) -> Self {
        Self::new("❌", title)
    }

    /// Append a paragraph.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.sections.push(Section::Text(text.into()));
        self
    }

    /// Append a bold `label: value` line.
    #[must_use]
    pub fn field(mut self, label: impl Into<String>, value: impl fmt::Display) -> Self {
        self.sections
            .push(Section::Field(label.into(), value.to_string()));
        self
    }

    /// Append a second-level heading.
    #[must_use]
    pub fn heading(mut self, heading: impl Into<String>) -> Self {
        self.sections.push(Section::Heading(heading.into()));
        self
    }

    /// Append a fenced block shown verbatim.
    #[must_use]
    pub fn code(mut self, content: impl Into<String>) -> Self {
        self.sections.push(Section::Code(content.into()));
        self
    }

    /// Whether this report describes a failure.
    pub fn is_failure(&self) -> bool {
        self.marker == "❌"
    }

    /// Render as markdown.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "# {} {}", self.marker, self.title)?;
        for section in &self.sections {
            f.write_str("\n\n")?;
            match section {
                Section::Text(text) => f.write_str(text)?,
                Section::Field(label, value) => write!(f, "**{label}:** {value}")?,
                Section::Heading(heading) => write!(f, "## {heading}")?,
                Section::Code(content) => {
                    let fence = fence_for(content);
                    write!(f, "{fence}\n{content}\n{fence}")?;
                }
            }
        }
        Ok(())
    }
}

/// A backtick fence longer than any backtick run inside `content`.
fn fence_for(content: &str) -> String {
    let longest = content
        .split(|c| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    "`".repeat(longest.max(2) + 1)
}

/// Report for a send, listing every downgraded step.
pub fn sent(title: &str, description: &str, outcome: &SendOutcome) -> Report {
    let Some(id) = outcome.id else {
        return Report::failure(format!("{title} Not Sent"))
            .text("The notification platform is not available in this process.");
    };

    let report = Report::success(title)
        .text(description)
        .field("Notification Id", id);
    if outcome.diagnostics.is_empty() {
        return report;
    }

    let lines: Vec<String> = outcome
        .diagnostics
        .iter()
        .map(ToString::to_string)
        .collect();
    report.heading("Warnings").code(lines.join("\n"))
}

/// Report for the "Check Permission" action.
pub fn permission_status(status: Result<PermissionStatus, PermissionError>) -> Report {
    match status {
        Ok(status) => {
            let label = match status {
                PermissionStatus::Granted => "✅ Granted",
                PermissionStatus::NotRequired => "✅ Not required on this Android version",
                PermissionStatus::Denied => "❌ Denied",
            };
            Report::new("🔐", "Permission Status").field("Notification Permission", label)
        }
        Err(err) => Report::failure("Permission Check Failed").field("Error", err),
    }
}

/// Report for the "Request Permission" action.
pub fn permission_requested(result: Result<PermissionStatus, PermissionError>) -> Report {
    match result {
        Ok(status) if status.is_granted() => Report::new("📝", "Permission Requested")
            .text("Notification permission is already held, no prompt was shown."),
        Ok(_) => Report::new("📝", "Permission Requested")
            .text("Notification permission has been requested."),
        Err(err) => Report::failure("Permission Request Failed").field("Error", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use droidnotify_notification::{Diagnostic, NotificationId};

    #[test]
    fn renders_sections_in_order() {
        let report = Report::new("🧪", "Checks Complete")
            .field("Check Cases", 3)
            .heading("Results")
            .code("all good");
        assert_eq!(
            report.render(),
            "# 🧪 Checks Complete\n\n**Check Cases:** 3\n\n## Results\n\n```\nall good\n```"
        );
    }

    #[test]
    fn fence_outgrows_embedded_backticks() {
        let report = Report::success("Log").code("before ```rust after");
        assert!(report.render().contains("````\nbefore ```rust after\n````"));
    }

    #[test]
    fn sent_lists_diagnostics() {
        let outcome = SendOutcome {
            id: Some(NotificationId::new(12)),
            diagnostics: vec![Diagnostic::IconDecode("adaptive icon".into())],
        };
        let rendered =
            sent("Notification Sent Successfully", "Basic notification.", &outcome).render();
        assert!(rendered.starts_with("# ✅ Notification Sent Successfully"));
        assert!(rendered.contains("**Notification Id:** 12"));
        assert!(rendered.contains("## Warnings"));
        assert!(rendered.contains("failed to decode icon: adaptive icon"));
    }

    #[test]
    fn sent_without_id_is_a_failure() {
        let outcome = SendOutcome {
            id: None,
            diagnostics: vec![Diagnostic::PlatformUnsupported],
        };
        let report = sent("Icon Test", "", &outcome);
        assert!(report.is_failure());
        assert!(report.render().starts_with("# ❌ Icon Test Not Sent"));
    }

    #[test]
    fn permission_reports() {
        assert!(
            permission_status(Ok(PermissionStatus::Denied))
                .render()
                .contains("**Notification Permission:** ❌ Denied")
        );
        assert!(permission_status(Err(PermissionError::NotSupported)).is_failure());
        assert!(
            permission_requested(Ok(PermissionStatus::Granted))
                .render()
                .contains("already held")
        );
        assert!(
            permission_requested(Ok(PermissionStatus::Denied))
                .render()
                .contains("has been requested")
        );
    }
}
