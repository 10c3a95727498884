//! Rendering compile errors against the pattern text.

use annotate_snippets::{AnnotationKind, Level, Renderer, Snippet};

use crate::error::CompileError;

/// Builder-pattern printer for a [`CompileError`].
pub struct ErrorPrinter<'e> {
    error: &'e CompileError,
    path: Option<&'e str>,
    colored: bool,
}

impl<'e> ErrorPrinter<'e> {
    pub fn new(error: &'e CompileError) -> Self {
        Self {
            error,
            path: None,
            colored: false,
        }
    }

    /// Origin shown in the snippet header, e.g. a file name.
    pub fn path(mut self, path: &'e str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let pattern = self.error.pattern();
        let kind = self.error.kind();
        let range = adjust_range(self.error.span(), pattern.len());

        let mut snippet = Snippet::source(pattern)
            .line_start(1)
            .annotation(AnnotationKind::Primary.span(range).label(kind.hint()));
        if let Some(path) = self.path {
            snippet = snippet.path(path);
        }

        let report = vec![Level::ERROR.primary_title(kind.message()).element(snippet)];

        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };
        renderer.render(&report).to_string()
    }
}

impl CompileError {
    pub fn printer(&self) -> ErrorPrinter<'_> {
        ErrorPrinter::new(self)
    }
}

/// Zero-width spans (end of pattern) still need a visible caret.
fn adjust_range(range: std::ops::Range<usize>, limit: usize) -> std::ops::Range<usize> {
    if range.start == range.end {
        return range.start..(range.start + 1).min(limit);
    }
    range
}
