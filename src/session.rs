//! Per-screen check flow: `Idle -> (Rejected | Sending -> Displaying)`.

use crate::client::CheckClient;
use crate::error::RejectionReason;
use crate::validator::{validate, CandidateUrl};
use crate::verdict::ParsedVerdict;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowState {
    Idle,
    Rejected(RejectionReason),
    Sending,
    Displaying(ParsedVerdict),
}

/// Identifies one outstanding request; only the newest ticket may resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("a check is already in progress")]
    Busy,

    #[error(transparent)]
    Rejected(#[from] RejectionReason),

    #[error("the check was abandoned before its verdict arrived")]
    Superseded,
}

#[derive(Debug)]
pub struct Session {
    state: FlowState,
    generation: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Session {
            state: FlowState::Idle,
            generation: 0,
        }
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    /// The submit control is disabled while a request is outstanding.
    pub fn can_submit(&self) -> bool {
        self.state != FlowState::Sending
    }

    pub fn submit(&mut self, raw: &str) -> Result<(Ticket, CandidateUrl), SubmitError> {
        if !self.can_submit() {
            return Err(SubmitError::Busy);
        }

        match validate(raw) {
            Ok(candidate) => {
                self.generation += 1;
                self.state = FlowState::Sending;
                Ok((Ticket(self.generation), candidate))
            }
            Err(reason) => {
                self.state = FlowState::Rejected(reason);
                Err(SubmitError::Rejected(reason))
            }
        }
    }

    /// Returns `false` when the ticket is stale and the verdict was dropped.
    pub fn resolve(&mut self, ticket: Ticket, verdict: ParsedVerdict) -> bool {
        if ticket.0 != self.generation || self.state != FlowState::Sending {
            tracing::debug!(ticket = ticket.0, current = self.generation, "dropping late verdict");
            return false;
        }
        self.state = FlowState::Displaying(verdict);
        true
    }

    /// Leaves the result screen (or abandons a pending check) for a fresh input.
    pub fn back(&mut self) {
        if self.state == FlowState::Sending {
            self.generation += 1;
        }
        self.state = FlowState::Idle;
    }

    /// Typing after a rejection clears the inline hint.
    pub fn edit(&mut self) {
        if matches!(self.state, FlowState::Rejected(_)) {
            self.state = FlowState::Idle;
        }
    }

    pub async fn run(&mut self, client: &CheckClient, raw: &str) -> Result<ParsedVerdict, SubmitError> {
        let (ticket, candidate) = self.submit(raw)?;
        let verdict = client.check_url(&candidate).await;

        let shown = verdict.clone();
        if self.resolve(ticket, verdict) {
            Ok(shown)
        } else {
            Err(SubmitError::Superseded)
        }
    }
}
