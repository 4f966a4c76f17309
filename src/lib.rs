#![no_std]

multiversx_sc::imports!();

pub mod errors;
pub mod governance_sender_proxy;
pub mod quorum;
pub mod types;

use errors::*;
use quorum::{quorum_reached, votes_needed, QUORUM_DENOMINATOR, QUORUM_NUMERATOR};
use types::{ContributorRecord, GovernanceState, Operation, Proposal};

// ============================================================
// Contract
// ============================================================

/// Pooled EGLD that leaves the contract only through an owner proposal
/// approved by at least 75% of everyone who ever contributed.
#[multiversx_sc::contract]
pub trait GovernanceSender {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    /// EGLD attached to the deployment seeds the custodial balance without
    /// counting as a contribution.
    #[init]
    #[payable("EGLD")]
    fn init(&self) {
        let deployer = self.blockchain().get_caller();
        self.owner().set(&deployer);
        self.total_contributors().set(0u64);
        self.total_sent().set(BigUint::zero());
        self.governance_state().set(GovernanceState::NoProposal);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: optIn
    // Creates the caller's local record. Required before contributing.
    // ========================================================

    #[endpoint(optIn)]
    fn opt_in(&self) {
        let caller = self.blockchain().get_caller();
        require!(self.contributors(&caller).is_empty(), ERR_ALREADY_OPTED_IN);

        self.contributors(&caller).set(ContributorRecord::new());

        self.opt_in_event(&caller);
    }

    // ========================================================
    // ENDPOINT: contribute
    // Allowed in any state. The first positive contribution of
    // an account makes it a contributor.
    // ========================================================

    #[endpoint(contribute)]
    #[payable("EGLD")]
    fn contribute(&self) {
        let caller = self.blockchain().get_caller();
        let payment_amount = self.call_value().egld_value().clone_value();

        require!(payment_amount > 0u64, ERR_ZERO_CONTRIBUTION);
        require!(!self.contributors(&caller).is_empty(), ERR_NOT_OPTED_IN);
        self.require_state_for(Operation::Contribute);

        let mut record = self.contributors(&caller).get();
        if !record.is_contributor() {
            self.total_contributors().update(|count| *count += 1);
        }
        record.contributed += &payment_amount;
        self.contributors(&caller).set(&record);

        self.contribution_event(&caller, &payment_amount, &record.contributed);
    }

    // ========================================================
    // ENDPOINT: proposeSend
    // Owner only. Opens the single proposal slot.
    // ========================================================

    #[endpoint(proposeSend)]
    fn propose_send(&self, recipient: ManagedAddress, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.owner().get(), ERR_NOT_OWNER);
        self.require_state_for(Operation::ProposeSend);

        let proposal = Proposal {
            recipient,
            amount,
            votes: 0u64,
        };
        self.proposal().set(&proposal);
        self.governance_state().set(GovernanceState::ProposalOpen);

        self.proposal_created_event(&proposal.recipient, &proposal.amount);
    }

    // ========================================================
    // ENDPOINT: vote
    // One approval per contributor. The voted flag is never
    // cleared, so it also blocks voting on later proposals.
    // ========================================================

    #[endpoint(vote)]
    fn vote(&self) {
        let caller = self.blockchain().get_caller();
        self.require_state_for(Operation::Vote);

        require!(!self.contributors(&caller).is_empty(), ERR_NOT_CONTRIBUTOR);
        let mut record = self.contributors(&caller).get();
        require!(record.is_contributor(), ERR_NOT_CONTRIBUTOR);
        require!(!record.voted, ERR_ALREADY_VOTED);

        record.voted = true;
        self.contributors(&caller).set(&record);

        let mut proposal = self.proposal().get();
        proposal.votes += 1;
        self.proposal().set(&proposal);

        self.vote_event(&caller, proposal.votes);
    }

    // ========================================================
    // ENDPOINT: executeSend
    // Anyone can trigger once quorum is reached. Pays out and
    // returns the contract to NoProposal.
    // ========================================================

    #[endpoint(executeSend)]
    fn execute_send(&self) {
        self.require_state_for(Operation::ExecuteSend);

        let proposal = self.proposal().get();
        let contributors = self.total_contributors().get();
        require!(
            quorum_reached(proposal.votes, contributors),
            ERR_QUORUM_NOT_MET
        );

        self.issue_payment(&proposal.recipient, &proposal.amount);

        self.total_sent().update(|sent| *sent += &proposal.amount);
        self.proposal().clear();
        self.governance_state().set(GovernanceState::NoProposal);

        let total_sent = self.total_sent().get();
        self.proposal_executed_event(&proposal.recipient, &proposal.amount, &total_sent);
    }

    // ========================================================
    // INTERNAL: state precondition from the dispatch table
    // ========================================================

    fn require_state_for(&self, operation: Operation) {
        let state = self.governance_state().get();
        let message = operation.state_conflict_error();
        require!(operation.permitted_in(state), message);
    }

    // ========================================================
    // INTERNAL: inner payment
    // Exactly one transfer; if it cannot be made the whole call
    // reverts and no state change survives.
    // ========================================================

    fn issue_payment(&self, recipient: &ManagedAddress, amount: &BigUint) {
        let balance = self
            .blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0);
        require!(&balance >= amount, ERR_INSUFFICIENT_BALANCE);

        self.send().direct_egld(recipient, amount);
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(getGovernanceState)]
    fn get_governance_state(&self) -> GovernanceState {
        self.governance_state().get()
    }

    #[view(isProposalActive)]
    fn is_proposal_active(&self) -> bool {
        self.governance_state().get().is_open()
    }

    /// Empty while no proposal is open; stale fields are never returned.
    #[view(getProposal)]
    fn get_proposal(&self) -> OptionalValue<Proposal<Self::Api>> {
        if self.governance_state().get().is_open() {
            OptionalValue::Some(self.proposal().get())
        } else {
            OptionalValue::None
        }
    }

    #[view(getProposalVotes)]
    fn get_proposal_votes(&self) -> u64 {
        if self.proposal().is_empty() {
            return 0;
        }
        self.proposal().get().votes
    }

    #[view(getContribution)]
    fn get_contribution(&self, account: &ManagedAddress) -> BigUint {
        if self.contributors(account).is_empty() {
            return BigUint::zero();
        }
        self.contributors(account).get().contributed
    }

    #[view(hasVoted)]
    fn has_voted(&self, account: &ManagedAddress) -> bool {
        !self.contributors(account).is_empty() && self.contributors(account).get().voted
    }

    #[view(isOptedIn)]
    fn is_opted_in(&self, account: &ManagedAddress) -> bool {
        !self.contributors(account).is_empty()
    }

    /// (votes, contributors, votes needed, quorum reached)
    #[view(getQuorumStatus)]
    fn get_quorum_status(&self) -> MultiValue4<u64, u64, u64, bool> {
        let votes = self.get_proposal_votes();
        let contributors = self.total_contributors().get();
        let reached =
            self.governance_state().get().is_open() && quorum_reached(votes, contributors);
        (votes, contributors, votes_needed(contributors), reached).into()
    }

    #[view(getContractBalance)]
    fn get_contract_balance(&self) -> BigUint {
        self.blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0)
    }

    #[view(getGovernanceConfig)]
    fn get_governance_config(&self) -> MultiValue3<ManagedAddress, u64, u64> {
        let owner = self.owner().get();
        (owner, QUORUM_NUMERATOR, QUORUM_DENOMINATOR).into()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("optIn")]
    fn opt_in_event(&self, #[indexed] account: &ManagedAddress);

    #[event("contribution")]
    fn contribution_event(
        &self,
        #[indexed] contributor: &ManagedAddress,
        #[indexed] amount: &BigUint,
        total_contributed: &BigUint,
    );

    #[event("proposalCreated")]
    fn proposal_created_event(
        &self,
        #[indexed] recipient: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("vote")]
    fn vote_event(&self, #[indexed] voter: &ManagedAddress, votes: u64);

    #[event("proposalExecuted")]
    fn proposal_executed_event(
        &self,
        #[indexed] recipient: &ManagedAddress,
        #[indexed] amount: &BigUint,
        total_sent: &BigUint,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Global record ──

    #[view(getOwner)]
    #[storage_mapper("owner")]
    fn owner(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getTotalContributors)]
    #[storage_mapper("totalContributors")]
    fn total_contributors(&self) -> SingleValueMapper<u64>;

    #[view(getTotalSent)]
    #[storage_mapper("totalSent")]
    fn total_sent(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("governanceState")]
    fn governance_state(&self) -> SingleValueMapper<GovernanceState>;

    #[storage_mapper("proposal")]
    fn proposal(&self) -> SingleValueMapper<Proposal<Self::Api>>;

    // ── Local records ──

    #[storage_mapper("contributors")]
    fn contributors(
        &self,
        account: &ManagedAddress,
    ) -> SingleValueMapper<ContributorRecord<Self::Api>>;
}
