use std::collections::HashMap;

use crate::log;
use super::CommandItem;

/// Immutable lookup from lowercase command name to response template.
#[derive(Debug, Clone, Default)]
pub struct CommandTable {
    responses: HashMap<String, String>,
}

impl CommandTable {
    pub fn from_items<'a, I>(items: I) -> Self
    where
        I: IntoIterator<Item = &'a CommandItem>,
    {
        let mut responses = HashMap::new();

        for item in items {
            match (&item.command, &item.response) {
                (Some(command), Some(response)) if !command.trim().is_empty() => {
                    responses.insert(command.trim().to_lowercase(), response.clone());
                }
                _ => {
                    log!("Skipping incomplete command item: {:?}", item);
                }
            }
        }

        Self { responses }
    }

    pub fn lookup(&self, command: &str) -> Option<&str> {
        self.responses.get(command).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }
}
