//! # Commands
//!
//! Toolbar commands and their hotkeys. The workbench only routes them;
//! what they do lives with the collaborators.

/// A toolbar command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Save,
    OpenElement,
    SearchReplace,
    /// Shuts the module server down.
    StopServer,
}

impl Command {
    /// Every command, in toolbar order.
    pub const ALL: [Command; 4] = [
        Command::Save,
        Command::OpenElement,
        Command::SearchReplace,
        Command::StopServer,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Command::Save => "Save",
            Command::OpenElement => "Open element",
            Command::SearchReplace => "Search/replace",
            Command::StopServer => "Stop server",
        }
    }

    pub fn hotkey(&self) -> Option<&'static str> {
        match self {
            Command::Save => Some("ctrl+shift+S"),
            Command::OpenElement => Some("ctrl+shift+E"),
            Command::SearchReplace => Some("ctrl+shift+F"),
            Command::StopServer => None,
        }
    }

    pub fn is_destructive(&self) -> bool {
        matches!(self, Command::StopServer)
    }

    /// Resolves a hotkey like `Ctrl+Shift+S`. The whole string is compared
    /// ignoring ASCII case, so `ctrl+shift+s` resolves to `Save` as well.
    pub fn from_hotkey(hotkey: &str) -> Option<Command> {
        let wanted = hotkey.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|cmd| {
            cmd.hotkey()
                .is_some_and(|key| key.to_ascii_lowercase() == wanted)
        })
    }
}

/// Registered commands, in registration order.
#[derive(Debug, Default)]
pub struct Toolbar {
    commands: Vec<Command>,
}

impl Toolbar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toolbar with every command registered.
    pub fn standard() -> Self {
        let mut toolbar = Self::new();
        for cmd in Command::ALL {
            toolbar.add_command(cmd);
        }
        toolbar
    }

    pub fn add_command(&mut self, command: Command) {
        if !self.commands.contains(&command) {
            self.commands.push(command);
        }
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Looks up a hotkey among the registered commands only.
    pub fn resolve_hotkey(&self, hotkey: &str) -> Option<Command> {
        Command::from_hotkey(hotkey).filter(|cmd| self.commands.contains(cmd))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hotkeys_resolve() {
        assert_eq!(Command::from_hotkey("ctrl+shift+S"), Some(Command::Save));
        assert_eq!(Command::from_hotkey("CTRL+SHIFT+e"), Some(Command::OpenElement));
        assert_eq!(Command::from_hotkey(" ctrl+shift+f "), Some(Command::SearchReplace));
        assert_eq!(Command::from_hotkey("ctrl+x"), None);
    }

    #[test]
    fn test_hotkey_key_letter_ignores_case() {
        assert_eq!(Command::from_hotkey("ctrl+shift+s"), Some(Command::Save));
        assert_eq!(Command::from_hotkey("Ctrl+Shift+S"), Some(Command::Save));
        assert_eq!(Command::from_hotkey("ctrl+S"), None);
    }

    #[test]
    fn test_stop_server_is_destructive_and_unbound() {
        assert!(Command::StopServer.is_destructive());
        assert!(Command::StopServer.hotkey().is_none());
        assert!(!Command::Save.is_destructive());
    }

    #[test]
    fn test_standard_toolbar_order() {
        let toolbar = Toolbar::standard();
        assert_eq!(toolbar.commands(), &Command::ALL);
    }

    #[test]
    fn test_unregistered_hotkey_does_not_resolve() {
        let mut toolbar = Toolbar::new();
        toolbar.add_command(Command::Save);
        toolbar.add_command(Command::Save);
        assert_eq!(toolbar.commands().len(), 1);
        assert_eq!(toolbar.resolve_hotkey("ctrl+shift+S"), Some(Command::Save));
        assert_eq!(toolbar.resolve_hotkey("ctrl+shift+E"), None);
    }
}
