//! # Console Driver
//!
//! Line-oriented stand-in for the browser page. Widgets print to stdout,
//! commands are read from stdin:
//!
//! ```text
//! open <module>[:<ident>]   follow a reference
//! goto <fragment>           edit the location bar by hand
//! back | forward            location history
//! edit <json>               replace the selected module's content
//! save | reload | resize
//! elements | search | stop! toolbar commands (`!` confirms destructive ones)
//! key <hotkey>              e.g. key ctrl+shift+S
//! quit
//! ```

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use log::{info, warn};
use serde_json::Value;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::core::action::Action;
use crate::core::address::{self, Address};
use crate::core::command::{Command, Toolbar};
use crate::core::config::ResolvedConfig;
use crate::store::{HttpStore, ModuleSummary, SaveRequest};
use crate::workbench::collaborators::{
    ActionSender, Collaborators, Dialogs, Editor, Layout, ModuleBrowser, Notifier,
    action_channel,
};
use crate::workbench::{Coordinator, MemoryLocation};

/// A parsed stdin line.
#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleCommand {
    Open(Address),
    Goto(String),
    Back,
    Forward,
    Edit(Value),
    Save,
    Reload,
    Resize,
    Run(Command),
    Key(String),
    Quit,
}

/// Parses one input line. Returns an error message for bad input.
pub fn parse_command(line: &str) -> Result<ConsoleCommand, String> {
    let line = line.trim();
    let (word, rest) = line
        .split_once(char::is_whitespace)
        .map(|(w, r)| (w, r.trim()))
        .unwrap_or((line, ""));

    match word {
        "open" => {
            let target = address::decode(&format!("#{rest}"));
            if target.is_set() {
                Ok(ConsoleCommand::Open(target))
            } else {
                Err("usage: open <module>[:<ident>]".to_string())
            }
        }
        "goto" => Ok(ConsoleCommand::Goto(rest.to_string())),
        "back" => Ok(ConsoleCommand::Back),
        "forward" => Ok(ConsoleCommand::Forward),
        "edit" => serde_json::from_str(rest)
            .map(ConsoleCommand::Edit)
            .map_err(|e| format!("invalid JSON: {e}")),
        "save" => Ok(ConsoleCommand::Save),
        "reload" => Ok(ConsoleCommand::Reload),
        "resize" => Ok(ConsoleCommand::Resize),
        "elements" => toolbar_command(word, Command::OpenElement),
        "search" => toolbar_command(word, Command::SearchReplace),
        "stop" | "stop!" => toolbar_command(word, Command::StopServer),
        "key" if !rest.is_empty() => Ok(ConsoleCommand::Key(rest.to_string())),
        "quit" | "exit" => Ok(ConsoleCommand::Quit),
        "" => Err(String::new()),
        other => Err(format!("unknown command: {other}")),
    }
}

/// Destructive commands only run when the word ends in `!`.
fn toolbar_command(word: &str, command: Command) -> Result<ConsoleCommand, String> {
    if command.is_destructive() && !word.ends_with('!') {
        return Err(format!(
            "{} is destructive, type `{word}!` to confirm",
            command.label()
        ));
    }
    Ok(ConsoleCommand::Run(command))
}

// ============================================================================
// Widgets
// ============================================================================

#[derive(Debug, Default)]
struct EditorState {
    selected: Option<Address>,
    draft: Option<Value>,
}

/// Prints selections and holds one pending draft.
#[derive(Clone, Default)]
pub struct ConsoleEditor {
    state: Arc<Mutex<EditorState>>,
}

impl ConsoleEditor {
    /// Stages new content for the selected module. False if nothing is selected.
    pub fn set_draft(&self, content: Value) -> bool {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if state.selected.is_none() {
            return false;
        }
        state.draft = Some(content);
        true
    }
}

impl Editor for ConsoleEditor {
    fn select(&mut self, module: &str, identifier: Option<&str>) {
        let address = Address::new(module, identifier);
        println!("[editor] {address}");
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if state.selected.as_ref().map(Address::module) != Some(module) {
            state.draft = None;
        }
        state.selected = Some(address);
    }

    fn save_request(&mut self) -> Option<SaveRequest> {
        let state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let module = state.selected.as_ref()?.module().to_string();
        let content = state.draft.clone()?;
        Some(SaveRequest { module, content })
    }
}

struct ConsoleBrowser;

impl ModuleBrowser for ConsoleBrowser {
    fn load_index(&mut self, entries: &[ModuleSummary]) {
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        println!("[browser] {} modules: {}", names.len(), names.join(", "));
    }
}

struct ConsoleLayout {
    toolbar: Vec<&'static str>,
}

impl Layout for ConsoleLayout {
    fn layout(&mut self) {
        println!("[layout] {}", self.toolbar_line());
    }
}

impl ConsoleLayout {
    fn toolbar_line(&self) -> String {
        format!("toolbar: {}", self.toolbar.join(" | "))
    }
}

/// Dialogs and notices, printed inline.
struct ConsolePopups;

impl Dialogs for ConsolePopups {
    fn open_element(&mut self, modules: &[ModuleSummary]) {
        println!("[open element] pick one with `open <module>`:");
        for module in modules {
            println!("  {}", module.name);
        }
    }

    fn search_replace(&mut self) {
        println!("[search/replace] not available in the console");
    }
}

impl Notifier for ConsolePopups {
    fn notify(&mut self, message: &str) {
        println!("[!] {message}");
    }
}

// ============================================================================
// Driver
// ============================================================================

pub async fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let store = HttpStore::new(
        config.base_url.clone(),
        Duration::from_secs(config.request_timeout_secs),
    )
    .map_err(std::io::Error::other)?;
    info!("Using module server at {}", store.base_url());

    let toolbar = Toolbar::standard();
    let labels = toolbar.commands().iter().map(Command::label).collect();

    let (tx, rx) = action_channel();
    let location = MemoryLocation::new(&config.initial_address, tx.clone());
    let editor = ConsoleEditor::default();

    let parts = Collaborators {
        layout: Box::new(ConsoleLayout { toolbar: labels }),
        editor: Box::new(editor.clone()),
        browser: Box::new(ConsoleBrowser),
        location: Box::new(location.clone()),
        dialogs: Box::new(ConsolePopups),
        notifier: Box::new(ConsolePopups),
    };
    let coordinator = Coordinator::new(toolbar, Arc::new(store), parts, tx.clone(), rx);

    tokio::spawn(read_commands(tx, location, editor));
    coordinator.run().await;
    Ok(())
}

async fn read_commands(tx: ActionSender, location: MemoryLocation, editor: ConsoleEditor) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                warn!("Failed to read stdin: {}", e);
                break;
            }
        };

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(msg) => {
                if !msg.is_empty() {
                    println!("{msg}");
                }
                continue;
            }
        };

        match command {
            ConsoleCommand::Open(target) => {
                tx.follow_reference(target.module(), target.identifier());
            }
            ConsoleCommand::Goto(raw) => {
                location.edit(&raw);
            }
            ConsoleCommand::Back => {
                if !location.back() {
                    println!("no history");
                }
            }
            ConsoleCommand::Forward => {
                if !location.forward() {
                    println!("no history");
                }
            }
            ConsoleCommand::Edit(content) => {
                if !editor.set_draft(content) {
                    println!("select a module first");
                }
            }
            ConsoleCommand::Save => tx.send(Action::Command(Command::Save)),
            ConsoleCommand::Reload => tx.send(Action::ReloadIndex),
            ConsoleCommand::Resize => tx.send(Action::Resize),
            ConsoleCommand::Run(command) => tx.send(Action::Command(command)),
            ConsoleCommand::Key(key) => tx.send(Action::Hotkey(key)),
            ConsoleCommand::Quit => break,
        }
    }
    tx.send(Action::Quit);
}
