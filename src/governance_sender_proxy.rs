use multiversx_sc::proxy_imports::*;

use crate::types::{GovernanceState, Proposal};

pub struct GovernanceSenderProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for GovernanceSenderProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = GovernanceSenderProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        GovernanceSenderProxyMethods { wrapped_tx: tx }
    }
}

pub struct GovernanceSenderProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

// ── Deploy ──

impl<Env, From, Gas> GovernanceSenderProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    /// Payable: an attached `.egld(..)` seeds the custodial balance.
    pub fn init(self) -> TxTypedDeploy<Env, From, (), Gas, ()> {
        self.wrapped_tx.raw_deploy().original_result()
    }
}

// ── Upgrade ──

impl<Env, From, To, Gas> GovernanceSenderProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn upgrade(self) -> TxTypedUpgrade<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_upgrade()
            .original_result()
    }
}

// ── Endpoints and views ──

impl<Env, From, To, Gas> GovernanceSenderProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn opt_in(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("optIn")
            .original_result()
    }

    /// Payable: attach the EGLD contribution with `.egld(..)`.
    pub fn contribute(self) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx.raw_call("contribute").original_result()
    }

    pub fn propose_send<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
    >(
        self,
        recipient: Arg0,
        amount: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("proposeSend")
            .argument(&recipient)
            .argument(&amount)
            .original_result()
    }

    pub fn vote(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("vote")
            .original_result()
    }

    pub fn execute_send(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("executeSend")
            .original_result()
    }

    pub fn governance_state(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, GovernanceState> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getGovernanceState")
            .original_result()
    }

    pub fn is_proposal_active(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isProposalActive")
            .original_result()
    }

    pub fn proposal(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, OptionalValue<Proposal<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getProposal")
            .original_result()
    }

    pub fn proposal_votes(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getProposalVotes")
            .original_result()
    }

    pub fn contribution<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        account: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getContribution")
            .argument(&account)
            .original_result()
    }

    pub fn has_voted<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        account: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("hasVoted")
            .argument(&account)
            .original_result()
    }

    pub fn is_opted_in<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        account: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isOptedIn")
            .argument(&account)
            .original_result()
    }

    pub fn quorum_status(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValue4<u64, u64, u64, bool>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getQuorumStatus")
            .original_result()
    }

    pub fn contract_balance(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getContractBalance")
            .original_result()
    }

    pub fn governance_config(
        self,
    ) -> TxTypedCall<
        Env,
        From,
        To,
        NotPayable,
        Gas,
        MultiValue3<ManagedAddress<Env::Api>, u64, u64>,
    > {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getGovernanceConfig")
            .original_result()
    }

    pub fn owner(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getOwner")
            .original_result()
    }

    pub fn total_contributors(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getTotalContributors")
            .original_result()
    }

    pub fn total_sent(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getTotalSent")
            .original_result()
    }
}
