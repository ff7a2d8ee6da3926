mod command_table;
mod output;
mod runner;
mod session;
mod settings;

pub use command_table::CommandTable;
pub use output::{LineKind, OutputLine, TerminalOutput, decorate_intro_line};
pub use runner::Terminal;
pub use session::{ScheduledLine, Submission, TerminalSession, normalize_command, substitute_name};
pub use settings::{CommandItem, TerminalSettings};
