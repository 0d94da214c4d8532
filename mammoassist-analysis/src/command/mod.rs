//! Voice-command dispatch.
//!
//! An ordered list of (predicate, action) rules over a lowercased
//! transcript, evaluated first-match-wins with an explicit fallback.
//! The ordering lives in one place (`CommandTable::standard`) instead
//! of nested conditionals, and each rule carries a name so match
//! behavior is testable.
//!
//! Speech-to-text itself is out of scope; input here is already a
//! transcript string.

pub mod table;

use serde::{Deserialize, Serialize};

use mammoassist_core::types::Verdict;

pub use table::CommandTable;

/// Navigation target of a recognized command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    Queue,
    Audit,
    Bias,
    Settings,
    NextCase,
    PreviousCase,
}

impl Route {
    /// Dashboard path for page routes; relative moves use pseudo-paths.
    pub fn as_path(&self) -> &'static str {
        match self {
            Route::Queue => "/queue",
            Route::Audit => "/audit",
            Route::Bias => "/bias",
            Route::Settings => "/settings",
            Route::NextCase => "next-case",
            Route::PreviousCase => "previous-case",
        }
    }
}

/// Action a transcript resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "kind", content = "target")]
pub enum CommandAction {
    Navigate(Route),
    Decide(Verdict),
    ShowHelp,
    Unknown,
}

/// Result of dispatching one transcript.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedCommand {
    /// The lowercased transcript the rules ran against.
    pub transcript: String,
    pub action: CommandAction,
    /// Name of the rule that matched (`"unknown"` for the fallback).
    pub rule: &'static str,
}

impl ParsedCommand {
    /// Whether a real rule matched (not the fallback).
    pub fn recognized(&self) -> bool {
        self.action != CommandAction::Unknown
    }
}
