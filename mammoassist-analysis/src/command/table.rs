//! The standard command rule table.

use mammoassist_core::types::Verdict;

use super::{CommandAction, ParsedCommand, Route};

/// One dispatch rule: a named predicate over the lowercased transcript
/// and the action it resolves to.
struct CommandRule {
    name: &'static str,
    predicate: fn(&str) -> bool,
    action: CommandAction,
}

/// Ordered rule table. Rules are tried top to bottom; the first
/// matching rule wins, and a transcript matching no rule resolves to
/// `CommandAction::Unknown`.
pub struct CommandTable {
    rules: Vec<CommandRule>,
}

impl CommandTable {
    /// The standard rule set, in dispatch order: page navigation
    /// (open/show + page name), decision verbs, relative case moves,
    /// help.
    pub fn standard() -> Self {
        let rules = vec![
            CommandRule {
                name: "open-queue",
                predicate: |t| wants_open(t) && t.contains("queue"),
                action: CommandAction::Navigate(Route::Queue),
            },
            CommandRule {
                name: "open-audit",
                predicate: |t| wants_open(t) && t.contains("audit"),
                action: CommandAction::Navigate(Route::Audit),
            },
            CommandRule {
                name: "open-bias",
                predicate: |t| wants_open(t) && t.contains("bias"),
                action: CommandAction::Navigate(Route::Bias),
            },
            CommandRule {
                name: "open-settings",
                predicate: |t| wants_open(t) && t.contains("settings"),
                action: CommandAction::Navigate(Route::Settings),
            },
            CommandRule {
                name: "approve",
                predicate: |t| t.contains("approve") || t.contains("accept"),
                action: CommandAction::Decide(Verdict::ConfirmFinding),
            },
            CommandRule {
                name: "reject",
                predicate: |t| t.contains("reject") || t.contains("deny"),
                action: CommandAction::Decide(Verdict::RejectFinding),
            },
            CommandRule {
                name: "refer",
                predicate: |t| t.contains("refer") || t.contains("escalate"),
                action: CommandAction::Decide(Verdict::RequestSecondReview),
            },
            CommandRule {
                name: "next-case",
                predicate: |t| t.contains("next case"),
                action: CommandAction::Navigate(Route::NextCase),
            },
            CommandRule {
                name: "previous-case",
                predicate: |t| t.contains("previous case"),
                action: CommandAction::Navigate(Route::PreviousCase),
            },
            CommandRule {
                name: "help",
                predicate: |t| t.contains("help"),
                action: CommandAction::ShowHelp,
            },
        ];
        Self { rules }
    }

    /// Dispatch one transcript. The transcript is lowercased before the
    /// rules run.
    pub fn parse(&self, transcript: &str) -> ParsedCommand {
        let lowered = transcript.to_lowercase();
        for rule in &self.rules {
            if (rule.predicate)(&lowered) {
                tracing::debug!(rule = rule.name, "Command matched");
                return ParsedCommand {
                    transcript: lowered,
                    action: rule.action,
                    rule: rule.name,
                };
            }
        }
        ParsedCommand {
            transcript: lowered,
            action: CommandAction::Unknown,
            rule: "unknown",
        }
    }

    /// Rule names in dispatch order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name).collect()
    }
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::standard()
    }
}

fn wants_open(transcript: &str) -> bool {
    transcript.contains("open") || transcript.contains("show")
}
