#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
    Intro,
    Echo,
    Answer,
    Notice,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputLine {
    pub kind: LineKind,
    pub text: String,
}

impl OutputLine {
    pub fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self { kind, text: text.into() }
    }

    /// Text as shown on screen. Intro lines carry their own marker.
    pub fn display(&self, marker: &str) -> String {
        match self.kind {
            LineKind::Intro => self.text.clone(),
            _ => format!("{} {}", marker, self.text),
        }
    }
}

/// Display surface for terminal output.
///
/// Implementations keep the newest line visible after every append.
/// Lines are appended from timer tasks, hence the `Send + Sync` bound.
pub trait TerminalOutput: Send + Sync + Clone + 'static {
    fn append_line(&self, line: OutputLine);
}

/// Marks a pre-rendered intro line, keeping its leading whitespace.
/// Lines that already start with the marker are left alone.
pub fn decorate_intro_line(marker: &str, line: &str) -> String {
    let trimmed = line.trim_start();
    if trimmed.starts_with(marker) {
        return line.to_string();
    }
    let indent = &line[..line.len() - trimmed.len()];
    format!("{}{} {}", indent, marker, trimmed.trim_end())
}
