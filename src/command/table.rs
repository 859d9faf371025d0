// ABOUTME: The static command table - token and alias lookup to descriptors.
// ABOUTME: Built once at startup from the palette plus the fixed admin commands.

use std::collections::HashMap;

use super::palette::PALETTE;
use crate::device::Rgb;

/// What a resolved command does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandAction {
    SetColor(Rgb),
    PowerOn,
    PowerOff,
    Enable,
    Disable,
    Status,
}

/// Permission required to run a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Any,
    Admin,
}

/// One command table entry.
#[derive(Debug, Clone)]
pub struct CommandDescriptor {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub action: CommandAction,
    pub permission: Permission,
}

/// Token to descriptor lookup, built once and never mutated at runtime.
///
/// Dispatch works by lookup in this explicit table; there are no
/// per-color handlers.
pub struct CommandTable {
    entries: Vec<CommandDescriptor>,
    by_token: HashMap<&'static str, usize>,
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl CommandTable {
    /// Build the standard table: every palette color plus power,
    /// enable/disable, and status.
    pub fn standard() -> Self {
        let mut entries: Vec<CommandDescriptor> = PALETTE
            .iter()
            .map(|&(name, rgb)| CommandDescriptor {
                name,
                aliases: &[],
                action: CommandAction::SetColor(rgb),
                permission: Permission::Any,
            })
            .collect();

        entries.push(CommandDescriptor {
            name: "on",
            aliases: &["lightson"],
            action: CommandAction::PowerOn,
            permission: Permission::Admin,
        });
        entries.push(CommandDescriptor {
            name: "off",
            aliases: &["lightsoff"],
            action: CommandAction::PowerOff,
            permission: Permission::Admin,
        });
        entries.push(CommandDescriptor {
            name: "goveeon",
            aliases: &["gon", "enable"],
            action: CommandAction::Enable,
            permission: Permission::Admin,
        });
        entries.push(CommandDescriptor {
            name: "goveeoff",
            aliases: &["goff", "disable"],
            action: CommandAction::Disable,
            permission: Permission::Admin,
        });
        entries.push(CommandDescriptor {
            name: "status",
            aliases: &[],
            action: CommandAction::Status,
            permission: Permission::Any,
        });

        let mut by_token = HashMap::new();
        for (index, entry) in entries.iter().enumerate() {
            by_token.insert(entry.name, index);
            for &alias in entry.aliases {
                by_token.insert(alias, index);
            }
        }

        Self { entries, by_token }
    }

    /// Resolve a lowercase token to its descriptor. Unknown tokens resolve
    /// to `None` and are ignored by the dispatcher.
    pub fn resolve(&self, token: &str) -> Option<&CommandDescriptor> {
        self.by_token.get(token).map(|&index| &self.entries[index])
    }

    /// All entries, palette first, in table order.
    pub fn entries(&self) -> &[CommandDescriptor] {
        &self.entries
    }
}
