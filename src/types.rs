multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use crate::errors::{ERR_NO_PROPOSAL_OPEN, ERR_PROPOSAL_ALREADY_OPEN};

// ============================================================
// Governance State — the two states of the proposal cycle
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum GovernanceState {
    /// No payout pending. Initial state, and the state after every execution.
    NoProposal,
    /// The owner proposed a payout and contributors can vote on it.
    ProposalOpen,
}

impl GovernanceState {
    pub fn is_open(&self) -> bool {
        *self == GovernanceState::ProposalOpen
    }
}

// ============================================================
// Operation — dispatch table of state preconditions
// ============================================================

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Operation {
    /// Accepted in every state; it never touches the proposal.
    Contribute,
    ProposeSend,
    Vote,
    ExecuteSend,
}

impl Operation {
    /// State the contract must be in for this operation, `None` when any state is fine.
    pub fn required_state(&self) -> Option<GovernanceState> {
        match self {
            Operation::Contribute => None,
            Operation::ProposeSend => Some(GovernanceState::NoProposal),
            Operation::Vote | Operation::ExecuteSend => Some(GovernanceState::ProposalOpen),
        }
    }

    /// Error raised when the contract is in the wrong state for this operation.
    pub fn state_conflict_error(&self) -> &'static str {
        match self.required_state() {
            Some(GovernanceState::NoProposal) => ERR_PROPOSAL_ALREADY_OPEN,
            _ => ERR_NO_PROPOSAL_OPEN,
        }
    }

    pub fn permitted_in(&self, state: GovernanceState) -> bool {
        match self.required_state() {
            Some(required) => required == state,
            None => true,
        }
    }
}

// ============================================================
// Proposal — the single pending payout
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub recipient: ManagedAddress<M>,
    pub amount: BigUint<M>,
    /// Approvals collected so far
    pub votes: u64,
}

// ============================================================
// Contributor Record — per-account state created on opt-in
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct ContributorRecord<M: ManagedTypeApi> {
    pub contributed: BigUint<M>,
    /// Set on the first vote and never cleared afterwards
    pub voted: bool,
}

impl<M: ManagedTypeApi> ContributorRecord<M> {
    pub fn new() -> Self {
        ContributorRecord {
            contributed: BigUint::zero(),
            voted: false,
        }
    }

    pub fn is_contributor(&self) -> bool {
        self.contributed > 0u64
    }
}

impl<M: ManagedTypeApi> Default for ContributorRecord<M> {
    fn default() -> Self {
        Self::new()
    }
}
