use std::time::Duration;

use crate::id_generator::generate_display_name;
use crate::log;
use super::{CommandTable, LineKind, OutputLine, TerminalSettings};

const USER_COMMAND: &str = "user";
const NAME_PLACEHOLDER: &str = "[name]";

/// A line to reveal `delay` after the submission that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScheduledLine {
    pub slot: u32,
    pub delay: Duration,
    pub line: OutputLine,
}

/// Everything one submitted command produces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub command: String,
    pub immediate: Vec<OutputLine>,
    pub scheduled: Vec<ScheduledLine>,
}

/// Command interpreter state for one terminal: the command table and the
/// display name substituted into responses.
pub struct TerminalSession {
    commands: CommandTable,
    display_name: String,
    reveal_delay: Duration,
}

impl TerminalSession {
    pub fn new(settings: &TerminalSettings) -> Self {
        Self::with_display_name(settings, generate_display_name())
    }

    pub fn with_display_name(settings: &TerminalSettings, display_name: String) -> Self {
        let commands = CommandTable::from_items(&settings.commands);
        if commands.is_empty() {
            log!("No commands configured, every input will be reported as not found");
        }
        log!(
            "Terminal session for {} with {} commands",
            display_name,
            commands.len()
        );

        Self {
            commands,
            display_name,
            reveal_delay: settings.reveal_delay(),
        }
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Interprets one line of user input.
    ///
    /// Returns `None` when the input is blank. Every other input produces an
    /// echo plus either immediate lines (`user`) or lines scheduled at
    /// `slot * reveal_delay` (table hit, slot 0 first) or one line at
    /// `reveal_delay` (unknown command).
    pub fn submit(&mut self, raw_input: &str) -> Option<Submission> {
        let command = normalize_command(raw_input);
        if command.is_empty() {
            return None;
        }

        let mut immediate = vec![OutputLine::new(LineKind::Echo, command.clone())];
        let mut scheduled = Vec::new();

        if let Some(new_name) = parse_user_command(&command) {
            immediate.push(self.rename(new_name));
        } else if let Some(template) = self.commands.lookup(&command) {
            scheduled = template
                .split('\n')
                .enumerate()
                .map(|(index, line)| {
                    let text = substitute_name(line.trim_end_matches('\r'), &self.display_name);
                    ScheduledLine {
                        slot: index as u32,
                        delay: self.reveal_delay * index as u32,
                        line: OutputLine::new(LineKind::Answer, text),
                    }
                })
                .collect();
        } else {
            scheduled.push(ScheduledLine {
                slot: 1,
                delay: self.reveal_delay,
                line: OutputLine::new(
                    LineKind::Error,
                    format!("Command not found: \"{}\"", command),
                ),
            });
        }

        Some(Submission {
            command,
            immediate,
            scheduled,
        })
    }

    fn rename(&mut self, new_name: &str) -> OutputLine {
        if new_name.is_empty() {
            return OutputLine::new(LineKind::Error, "Usage: user <name>");
        }

        log!("Display name changed from {} to {}", self.display_name, new_name);
        self.display_name = new_name.to_string();
        OutputLine::new(LineKind::Notice, format!("Welcome, {}!", self.display_name))
    }
}

pub fn normalize_command(raw_input: &str) -> String {
    raw_input.trim().to_lowercase()
}

/// Returns the trimmed argument when `command` is the `user` pseudo-command.
fn parse_user_command(command: &str) -> Option<&str> {
    let rest = command.strip_prefix(USER_COMMAND)?;
    if rest.is_empty() || rest.starts_with(char::is_whitespace) {
        Some(rest.trim())
    } else {
        None
    }
}

/// Replaces every `[name]` (any letter case) in `line` with `name`.
pub fn substitute_name(line: &str, name: &str) -> String {
    // ASCII lowercasing keeps byte offsets, so matches index `line` directly.
    let lowered = line.to_ascii_lowercase();
    let mut result = String::with_capacity(line.len());
    let mut cursor = 0;

    while let Some(found) = lowered[cursor..].find(NAME_PLACEHOLDER) {
        let start = cursor + found;
        result.push_str(&line[cursor..start]);
        result.push_str(name);
        cursor = start + NAME_PLACEHOLDER.len();
    }

    result.push_str(&line[cursor..]);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::CommandItem;

    fn create_session(commands: Vec<CommandItem>) -> TerminalSession {
        let settings = TerminalSettings {
            commands,
            ..TerminalSettings::default()
        };
        TerminalSession::with_display_name(&settings, "anon12345".to_string())
    }

    fn texts(lines: &[ScheduledLine]) -> Vec<&str> {
        lines.iter().map(|l| l.line.text.as_str()).collect()
    }

    #[test]
    fn test_help_scenario_reveals_lines_in_slots() {
        let mut session = create_session(vec![CommandItem::new("help", "line1\n[name] line2")]);

        let submission = session.submit("help").unwrap();

        assert_eq!(submission.immediate, vec![OutputLine::new(LineKind::Echo, "help")]);
        assert_eq!(texts(&submission.scheduled), vec!["line1", "anon12345 line2"]);
        assert_eq!(submission.scheduled[0].slot, 0);
        assert_eq!(submission.scheduled[0].delay, Duration::ZERO);
        assert_eq!(submission.scheduled[1].slot, 1);
        assert_eq!(submission.scheduled[1].delay, Duration::from_millis(100));
    }

    #[test]
    fn test_input_is_trimmed_and_lowercased() {
        let mut session = create_session(vec![CommandItem::new("about", "us")]);

        let submission = session.submit("   ABOUT \t").unwrap();

        assert_eq!(submission.command, "about");
        assert_eq!(texts(&submission.scheduled), vec!["us"]);
    }

    #[test]
    fn test_blank_input_produces_nothing() {
        let mut session = create_session(vec![]);
        assert!(session.submit("").is_none());
        assert!(session.submit("   ").is_none());
    }

    #[test]
    fn test_unknown_command_reports_after_one_delay() {
        let mut session = create_session(vec![]);

        let submission = session.submit("sudo rm").unwrap();

        assert_eq!(submission.immediate.len(), 1);
        assert_eq!(submission.scheduled.len(), 1);
        let line = &submission.scheduled[0];
        assert_eq!(line.delay, Duration::from_millis(100));
        assert_eq!(line.line.kind, LineKind::Error);
        assert_eq!(line.line.text, "Command not found: \"sudo rm\"");
    }

    #[test]
    fn test_user_command_renames_immediately() {
        let mut session = create_session(vec![CommandItem::new("whoami", "[name]")]);

        let submission = session.submit("user alice").unwrap();

        assert_eq!(session.display_name(), "alice");
        assert!(submission.scheduled.is_empty());
        assert_eq!(submission.immediate[1].kind, LineKind::Notice);
        assert!(submission.immediate[1].text.contains("alice"));

        let whoami = session.submit("whoami").unwrap();
        assert_eq!(texts(&whoami.scheduled), vec!["alice"]);
    }

    #[test]
    fn test_user_command_trims_name() {
        let mut session = create_session(vec![]);
        session.submit("user    bob   ").unwrap();
        assert_eq!(session.display_name(), "bob");
    }

    #[test]
    fn test_user_without_name_is_an_error() {
        let mut session = create_session(vec![]);

        let submission = session.submit("user").unwrap();

        assert_eq!(session.display_name(), "anon12345");
        assert_eq!(submission.immediate[1].kind, LineKind::Error);
        assert!(submission.scheduled.is_empty());
    }

    #[test]
    fn test_user_command_bypasses_table() {
        let mut session = create_session(vec![CommandItem::new("user carol", "from table")]);

        let submission = session.submit("user carol").unwrap();

        assert_eq!(session.display_name(), "carol");
        assert!(submission.scheduled.is_empty());
    }

    #[test]
    fn test_username_is_not_the_user_command() {
        let mut session = create_session(vec![CommandItem::new("username", "[name]")]);

        let submission = session.submit("username").unwrap();

        assert_eq!(texts(&submission.scheduled), vec!["anon12345"]);
    }

    #[test]
    fn test_substitute_name_is_case_insensitive() {
        assert_eq!(substitute_name("[NAME] and [Name] and [name]", "x"), "x and x and x");
        assert_eq!(substitute_name("no placeholder", "x"), "no placeholder");
        assert_eq!(substitute_name("héllo [name]!", "zoé"), "héllo zoé!");
    }

    #[test]
    fn test_carriage_returns_are_dropped() {
        let mut session = create_session(vec![CommandItem::new("crlf", "one\r\ntwo")]);

        let submission = session.submit("crlf").unwrap();

        assert_eq!(texts(&submission.scheduled), vec!["one", "two"]);
    }
}
