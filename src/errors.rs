// Error messages raised through `require!`. Each one reverts the whole
// transaction; the prefix names the error class.

// ── Authorization ──

pub const ERR_NOT_OWNER: &str = "AuthorizationError: only the owner can propose a send";

// ── State conflicts ──

pub const ERR_PROPOSAL_ALREADY_OPEN: &str = "StateConflictError: a proposal is already open";
pub const ERR_NO_PROPOSAL_OPEN: &str = "StateConflictError: no proposal is open";
pub const ERR_ALREADY_OPTED_IN: &str = "StateConflictError: account already opted in";

// ── Duplicate actions ──

pub const ERR_ALREADY_VOTED: &str = "DuplicateActionError: account already voted";

// ── Ineligible callers ──

pub const ERR_NOT_OPTED_IN: &str = "IneligibleCallerError: account has not opted in";
pub const ERR_NOT_CONTRIBUTOR: &str = "IneligibleCallerError: only contributors can vote";

// ── Quorum ──

pub const ERR_QUORUM_NOT_MET: &str = "QuorumNotMetError: less than 75% of contributors approved";

// ── Validation ──

pub const ERR_ZERO_CONTRIBUTION: &str = "ValidationError: contribution must be greater than zero";

// ── Inner payment ──

pub const ERR_INSUFFICIENT_BALANCE: &str = "PaymentError: contract balance cannot cover the send";
