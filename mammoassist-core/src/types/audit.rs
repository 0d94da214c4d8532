//! Audit trail and decision value types.

use serde::{Deserialize, Serialize};

/// Kind of user or system action recorded in the audit trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuditAction {
    Viewed,
    DecisionMade,
    FlagUncertain,
    ManualReviewEnabled,
    ChatQuery,
    VoiceCommand,
    Exported,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditAction::Viewed => "viewed",
            AuditAction::DecisionMade => "decision-made",
            AuditAction::FlagUncertain => "flag-uncertain",
            AuditAction::ManualReviewEnabled => "manual-review-enabled",
            AuditAction::ChatQuery => "chat-query",
            AuditAction::VoiceCommand => "voice-command",
            AuditAction::Exported => "exported",
        }
    }
}

/// One immutable audit trail entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEvent {
    pub id: String,
    /// RFC 3339 timestamp, supplied by the caller. The store never reads
    /// a clock.
    pub timestamp: String,
    pub user: String,
    pub case_id: String,
    pub action: AuditAction,
    pub details: String,
}

/// Reviewer verdict on an AI finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Verdict {
    ConfirmFinding,
    RejectFinding,
    RequestSecondReview,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::ConfirmFinding => "confirm-finding",
            Verdict::RejectFinding => "reject-finding",
            Verdict::RequestSecondReview => "request-second-review",
        }
    }
}

/// A recorded reviewer decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub id: String,
    pub case_id: String,
    pub verdict: Verdict,
    #[serde(default)]
    pub feedback_tags: Vec<String>,
    #[serde(default)]
    pub feedback_note: String,
    #[serde(default)]
    pub draft_report: String,
    pub user_id: String,
    /// RFC 3339 timestamp, supplied by the caller.
    pub timestamp: String,
    #[serde(default)]
    pub requires_confirmation: bool,
}
