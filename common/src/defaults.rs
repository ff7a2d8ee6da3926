use crate::terminal::CommandItem;

pub const DEFAULT_MARKER: &str = ">";
pub const DEFAULT_REVEAL_DELAY_MS: u64 = 100;
pub const DEFAULT_SCROLLBACK: usize = 500;

pub const DEFAULT_GRID_SIZE: usize = 20;
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 150;

const DEFAULT_INTRO: &[&str] = &[
    "Welcome to the manifesto.",
    "We build small, fast and slightly strange websites.",
    "Type help to see what this terminal understands.",
];

const DEFAULT_COMMANDS: &[(&str, &str)] = &[
    (
        "help",
        "Available commands:\n  help     this list\n  about    who we are\n  whoami   your current name\n  contact  how to reach us\n  user <name>  change your name",
    ),
    (
        "about",
        "A two-person studio working between design and code.\nWe like grids, monospace and things that boot.",
    ),
    ("whoami", "[name]"),
    ("contact", "Write to hello@retro.site\nWe answer within a day, [name]."),
    ("hello", "Hello, [NAME]. Nice to see you here."),
];

pub fn default_intro() -> Vec<String> {
    DEFAULT_INTRO.iter().map(|line| line.to_string()).collect()
}

pub fn default_commands() -> Vec<CommandItem> {
    DEFAULT_COMMANDS
        .iter()
        .map(|(command, response)| CommandItem::new(*command, *response))
        .collect()
}
