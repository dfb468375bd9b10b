//! Error adapter for converting WireframeError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error type
//! and miette's rich diagnostic formatting used in the CLI. Every error
//! variant gets a stable code and, where the fix is usually the same, a help
//! line.

use std::fmt;

use miette::Diagnostic as MietteDiagnostic;

use wireframe::WireframeError;

/// Adapter rendering a [`WireframeError`] as a miette diagnostic.
pub struct ErrorAdapter<'a>(pub &'a WireframeError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            WireframeError::Io(_) => "wireframe::io",
            WireframeError::Write { .. } => "wireframe::write",
            WireframeError::Serialize(_) => "wireframe::serialize",
            WireframeError::Config(_) => "wireframe::config",
            WireframeError::Export(_) => "wireframe::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            WireframeError::Write { .. } => {
                "the output directory must exist; it is not created automatically"
            }
            WireframeError::Config(_) => {
                "check the [canvas] and [theme] sections of the configuration file"
            }
            WireframeError::Export(_) => "check the path given to --svg",
            WireframeError::Io(_) | WireframeError::Serialize(_) => return None,
        };
        Some(Box::new(help))
    }
}

/// Convert a [`WireframeError`] into a reportable diagnostic.
pub fn to_reportable(err: &WireframeError) -> ErrorAdapter<'_> {
    ErrorAdapter(err)
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    fn render(err: &WireframeError) -> String {
        let mut out = String::new();
        miette::GraphicalReportHandler::new_themed(miette::GraphicalTheme::unicode_nocolor())
            .render_report(&mut out, &to_reportable(err))
            .unwrap();
        out
    }

    #[test]
    fn test_codes() {
        let err = WireframeError::Config("bad".to_string());
        let code = to_reportable(&err).code().unwrap().to_string();
        assert_eq!(code, "wireframe::config");

        let err = WireframeError::Io(io::Error::other("boom"));
        let code = to_reportable(&err).code().unwrap().to_string();
        assert_eq!(code, "wireframe::io");
    }

    #[test]
    fn test_write_error_report_has_help() {
        let err = WireframeError::new_write_error(
            "docs/diagrams/out.excalidraw",
            io::Error::from(io::ErrorKind::NotFound),
        );
        let report = render(&err);
        assert!(report.contains("wireframe::write"), "{report}");
        assert!(report.contains("out.excalidraw"), "{report}");
        assert!(report.contains("output directory must exist"), "{report}");
    }

    #[test]
    fn test_io_error_has_no_help() {
        let err = WireframeError::Io(io::Error::other("boom"));
        assert!(to_reportable(&err).help().is_none());
    }
}
