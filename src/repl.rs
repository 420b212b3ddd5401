//! Line-oriented front end for the connections dialog.

use serde_json::Value;

use crate::app::controller::ConnectionsDialog;
use crate::app::form_state::FieldUpdate;
use crate::app::outcome::{Operation, Outcome};
use crate::app::page::Page;
use crate::app::state::DialogState;
use crate::domain::{ConnectionId, ConnectionType};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Open,
    Close,
    List,
    Add,
    Edit(ConnectionId),
    Back,
    Name(String),
    Type(ConnectionType),
    Set { key: String, value: Value },
    Test,
    Save,
    Delete(ConnectionId),
    Reindex(ConnectionId),
    Retry,
    Show,
    Help,
    Quit,
    /// Known command with missing arguments; carries the usage line.
    Usage(&'static str),
    Unknown(String),
}

pub const HELP: &[&str] = &[
    "open | close | list | show | retry",
    "add | edit <id> | back",
    "name <text> | type <tag> | set <key> <json-or-text>",
    "test | save | delete <id> | reindex <id>",
    "quit",
];

/// Parse a command line into a Command enum
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    let (head, rest) = match input.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (input, ""),
    };

    match (head, rest) {
        ("open", _) => Command::Open,
        ("close", _) => Command::Close,
        ("list" | "ls", _) => Command::List,
        ("add", _) => Command::Add,
        ("back", _) => Command::Back,
        ("test", _) => Command::Test,
        ("save", _) => Command::Save,
        ("retry", _) => Command::Retry,
        ("show", _) => Command::Show,
        ("?" | "help", _) => Command::Help,
        ("q" | "quit", _) => Command::Quit,
        ("name", text) => Command::Name(text.to_string()),
        ("edit", "") => Command::Usage("edit <id>"),
        ("edit", id) => Command::Edit(ConnectionId::from(id)),
        ("delete", "") => Command::Usage("delete <id>"),
        ("delete", id) => Command::Delete(ConnectionId::from(id)),
        ("reindex", "") => Command::Usage("reindex <id>"),
        ("reindex", id) => Command::Reindex(ConnectionId::from(id)),
        ("type", "") => Command::Usage("type <tag>"),
        ("type", tag) => Command::Type(ConnectionType::new(tag)),
        ("set", args) => match args.split_once(char::is_whitespace) {
            Some((key, raw)) => Command::Set {
                key: key.to_string(),
                value: parse_value(raw.trim()),
            },
            None => Command::Usage("set <key> <json-or-text>"),
        },
        _ => Command::Unknown(input.to_string()),
    }
}

/// JSON literals are taken as-is; anything else becomes a string.
fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Lines to print after running a command, and whether to stop.
#[derive(Debug, Default)]
pub struct Reply {
    pub lines: Vec<String>,
    pub quit: bool,
}

impl Reply {
    fn lines(lines: Vec<String>) -> Self {
        Self { lines, quit: false }
    }

    fn line(line: impl Into<String>) -> Self {
        Self::lines(vec![line.into()])
    }
}

pub async fn execute(dialog: &mut ConnectionsDialog, command: Command) -> Reply {
    match command {
        Command::Open => {
            let outcome = dialog.open().await;
            let mut lines = vec![describe(Operation::Load, &outcome)];
            lines.extend(render_page(dialog.state()));
            Reply::lines(lines)
        }
        Command::Close => {
            dialog.close();
            Reply::line("closed")
        }
        Command::List => Reply::lines(render_list(dialog.state())),
        Command::Show => Reply::lines(render_page(dialog.state())),
        Command::Retry => Reply::line(describe(Operation::Load, &dialog.retry_load().await)),
        Command::Add => {
            dialog.add_click();
            Reply::lines(render_page(dialog.state()))
        }
        Command::Edit(id) => {
            if dialog.edit_by_id(&id) {
                Reply::lines(render_page(dialog.state()))
            } else {
                Reply::line(format!("no connection with id {}", id))
            }
        }
        Command::Back => {
            if !dialog.state().can_go_back() {
                return Reply::line("back is not available here");
            }
            dialog.back();
            Reply::lines(render_page(dialog.state()))
        }
        Command::Name(text) => {
            dialog.set_field(FieldUpdate::Name(text));
            Reply::lines(render_errors(dialog.state()))
        }
        Command::Type(ty) => {
            dialog.change_type(ty);
            Reply::lines(render_errors(dialog.state()))
        }
        Command::Set { key, value } => {
            dialog.set_field(FieldUpdate::Config { key, value });
            Reply::lines(render_errors(dialog.state()))
        }
        Command::Test => Reply::line(describe(Operation::Test, &dialog.test().await)),
        Command::Save => {
            let operation = match dialog.state().page() {
                Page::Edit => Operation::Update,
                _ => Operation::Create,
            };
            Reply::line(describe(operation, &dialog.submit().await))
        }
        Command::Delete(id) => Reply::line(describe(Operation::Delete, &dialog.delete(&id).await)),
        Command::Reindex(id) => Reply::line(describe(Operation::Reindex, &dialog.reindex(&id))),
        Command::Help => Reply::lines(HELP.iter().map(ToString::to_string).collect()),
        Command::Quit => Reply {
            lines: vec![],
            quit: true,
        },
        Command::Usage(usage) => Reply::line(format!("usage: {}", usage)),
        Command::Unknown(input) if input.is_empty() => Reply::default(),
        Command::Unknown(input) => Reply::line(format!("unknown command: {} (try `help`)", input)),
    }
}

pub fn describe(operation: Operation, outcome: &Outcome) -> String {
    match outcome {
        Outcome::Pending => format!("{}: started", operation),
        Outcome::Succeeded(msg) => format!("{}: ok: {}", operation, msg),
        Outcome::Failed(msg) => format!("{}: failed: {}", operation, msg),
        Outcome::Rejected(msg) => format!("{}: rejected: {}", operation, msg),
        Outcome::Ignored => format!("{}: ignored (already in progress)", operation),
    }
}

pub fn render_list(state: &DialogState) -> Vec<String> {
    if state.list.loading {
        return vec!["loading connections...".to_string()];
    }
    if let Some(error) = &state.list.error {
        return vec![format!("error: {} (type `retry`)", error)];
    }
    if state.list.is_empty() {
        return vec!["no connections yet (type `add`)".to_string()];
    }

    state
        .list
        .connections
        .iter()
        .map(|c| {
            let mut line = format!("{}  {}  [{}]", c.id, c.name, c.connection_type.label());
            if state.reindex.is_in_flight(&c.id) {
                line.push_str("  (re-indexing)");
            } else if c.supports_reindex() && state.can_reindex(&c.id) {
                line.push_str("  (reindex available)");
            }
            line
        })
        .collect()
}

pub fn render_page(state: &DialogState) -> Vec<String> {
    let page = state.page();
    let mut lines = vec![format!("== {} ==", page.title())];
    if !page.is_form() {
        lines.extend(render_list(state));
        return lines;
    }

    let form = &state.form;
    let draft = &form.draft;
    let ty = draft
        .connection_type
        .as_ref()
        .map_or_else(|| "(none)".to_string(), ConnectionType::label);
    let locked = if form.is_type_locked() { " (locked)" } else { "" };
    lines.push(format!("name:   {}", draft.name));
    lines.push(format!("type:   {}{}", ty, locked));
    lines.push(format!(
        "config: {}",
        Value::Object(draft.config.clone())
    ));
    if let Some(result) = &form.test_result {
        let mark = if result.valid { "ok" } else { "failed" };
        lines.push(format!("test:   {} ({})", result.display_message(), mark));
    }
    lines.extend(render_errors(state));
    if form.busy.any() {
        lines.push("busy...".to_string());
    }
    lines
}

fn render_errors(state: &DialogState) -> Vec<String> {
    state
        .form
        .dialog_error
        .iter()
        .map(|e| format!("error:  {}", e))
        .collect()
}
