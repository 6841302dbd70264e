//! End-to-end proposal lifecycle scenarios through the outward facade.

use agora_governance::{GovernanceEngine, GovernanceError, ProposalState};
use agora_nullables::{NullClock, NullOracle, NullTransfer};
use agora_treasury::TreasuryError;
use agora_types::{Amount, HolderAddress};

fn holder(name: &str) -> HolderAddress {
    HolderAddress::new(name)
}

/// Supply 10,000 split 3,000 / 2,000 / 1,000 across alice, carol, dave.
fn stakeholder_oracle() -> NullOracle {
    let mut oracle = NullOracle::with_supply(10_000);
    oracle.set_balance(&holder("alice"), 3_000);
    oracle.set_balance(&holder("carol"), 2_000);
    oracle.set_balance(&holder("dave"), 1_000);
    oracle
}

fn engine() -> GovernanceEngine<NullOracle, NullTransfer> {
    GovernanceEngine::new(stakeholder_oracle(), NullTransfer::new())
}

#[test]
fn funded_proposal_approved_and_paid() {
    let clock = NullClock::new(1_000);
    let mut engine = engine();
    engine.deposit(Amount::new(10)).unwrap();

    let id = engine
        .create_proposal(
            holder("alice"),
            holder("recipient"),
            Amount::new(1),
            "fund the workshop".into(),
            clock.now(),
        )
        .unwrap();
    assert_eq!(id, 1);

    for voter in ["alice", "carol", "dave"] {
        clock.advance(60);
        engine.vote(id, &holder(voter), true, clock.now()).unwrap();
    }

    let deadline = engine.get_proposal(id).unwrap().voting_deadline;
    clock.advance_past(deadline);
    let state = engine.execute_proposal(id, clock.now()).unwrap();

    assert_eq!(state, ProposalState::Executed);
    assert_eq!(engine.treasury_balance(), Amount::new(9));
    assert_eq!(
        engine.transfer().received_by(&holder("recipient")),
        Amount::new(1)
    );
    let proposal = engine.get_proposal(id).unwrap();
    assert_eq!(proposal.state, ProposalState::Executed);
    assert_eq!(proposal.votes_for, Amount::new(6_000));
    assert_eq!(proposal.votes_against, Amount::ZERO);
}

#[test]
fn split_vote_meets_quorum_and_majority() {
    // 3,000 for / 2,000 against of 10,000 supply: quorum 50% met exactly,
    // majority 60% >= 51% — approved under the quorum+majority policy.
    let clock = NullClock::new(1_000);
    let mut engine = engine();
    engine.deposit(Amount::new(10)).unwrap();
    let id = engine
        .create_proposal(
            holder("alice"),
            holder("recipient"),
            Amount::new(1),
            String::new(),
            clock.now(),
        )
        .unwrap();

    engine.vote(id, &holder("alice"), true, clock.now()).unwrap();
    engine.vote(id, &holder("carol"), false, clock.now()).unwrap();

    let deadline = engine.get_proposal(id).unwrap().voting_deadline;
    clock.advance_past(deadline);
    assert_eq!(
        engine.execute_proposal(id, clock.now()).unwrap(),
        ProposalState::Executed
    );
}

#[test]
fn low_turnout_fails_quorum() {
    let clock = NullClock::new(1_000);
    let mut engine = engine();
    engine.deposit(Amount::new(10)).unwrap();
    let id = engine
        .create_proposal(
            holder("alice"),
            holder("recipient"),
            Amount::new(1),
            String::new(),
            clock.now(),
        )
        .unwrap();

    // Only 1,000 of 10,000 voted.
    engine.vote(id, &holder("dave"), true, clock.now()).unwrap();

    let deadline = engine.get_proposal(id).unwrap().voting_deadline;
    clock.advance_past(deadline);
    let err = engine.execute_proposal(id, clock.now()).unwrap_err();
    assert_eq!(
        err,
        GovernanceError::QuorumNotReached {
            votes_cast: 1_000,
            total_supply: 10_000,
        }
    );
    // Dead end by design: still Active, but the window is closed.
    assert_eq!(engine.get_proposal(id).unwrap().state, ProposalState::Active);
    assert_eq!(
        engine.vote(id, &holder("alice"), true, clock.now()).unwrap_err(),
        GovernanceError::VotingWindowClosed
    );
}

#[test]
fn against_majority_rejects_without_payout() {
    let clock = NullClock::new(1_000);
    let mut oracle = stakeholder_oracle();
    oracle.set_balance(&holder("carol"), 4_000);
    let mut engine = GovernanceEngine::new(oracle, NullTransfer::new());
    engine.deposit(Amount::new(10)).unwrap();
    let id = engine
        .create_proposal(
            holder("alice"),
            holder("recipient"),
            Amount::new(1),
            String::new(),
            clock.now(),
        )
        .unwrap();

    // 7,000 cast, 3,000 for = 42% < 51%.
    engine.vote(id, &holder("alice"), true, clock.now()).unwrap();
    engine.vote(id, &holder("carol"), false, clock.now()).unwrap();

    let deadline = engine.get_proposal(id).unwrap().voting_deadline;
    clock.advance_past(deadline);
    assert_eq!(
        engine.execute_proposal(id, clock.now()).unwrap(),
        ProposalState::Rejected
    );
    assert_eq!(engine.treasury_balance(), Amount::new(10));
}

#[test]
fn double_vote_rejected_tally_unchanged() {
    let clock = NullClock::new(1_000);
    let mut engine = engine();
    engine.deposit(Amount::new(10)).unwrap();
    let id = engine
        .create_proposal(
            holder("alice"),
            holder("recipient"),
            Amount::new(1),
            String::new(),
            clock.now(),
        )
        .unwrap();

    engine.vote(id, &holder("alice"), true, clock.now()).unwrap();
    let err = engine.vote(id, &holder("alice"), false, clock.now()).unwrap_err();
    assert_eq!(err, GovernanceError::AlreadyVoted("alice".into()));

    let proposal = engine.get_proposal(id).unwrap();
    assert_eq!(proposal.votes_for, Amount::new(3_000));
    assert_eq!(proposal.votes_against, Amount::ZERO);
    assert!(engine.has_voted(id, &holder("alice")).unwrap());
    assert_eq!(engine.voter_weight(id, &holder("alice")).unwrap(), Amount::new(3_000));
}

#[test]
fn execution_before_deadline_fails() {
    let clock = NullClock::new(1_000);
    let mut engine = engine();
    engine.deposit(Amount::new(10)).unwrap();
    let id = engine
        .create_proposal(
            holder("alice"),
            holder("recipient"),
            Amount::new(1),
            String::new(),
            clock.now(),
        )
        .unwrap();
    engine.vote(id, &holder("alice"), true, clock.now()).unwrap();
    engine.vote(id, &holder("carol"), true, clock.now()).unwrap();

    let err = engine.execute_proposal(id, clock.now()).unwrap_err();
    assert_eq!(err, GovernanceError::VotingWindowNotClosed);
    assert_eq!(engine.get_proposal(id).unwrap().state, ProposalState::Active);
}

#[test]
fn overdraft_request_rejected_without_consuming_id() {
    let clock = NullClock::new(1_000);
    let mut engine = engine();
    engine.deposit(Amount::new(10)).unwrap();

    let err = engine
        .create_proposal(
            holder("alice"),
            holder("recipient"),
            Amount::new(11),
            String::new(),
            clock.now(),
        )
        .unwrap_err();
    assert_eq!(
        err,
        GovernanceError::InsufficientTreasuryFunds {
            requested: 11,
            available: 10,
        }
    );
    assert_eq!(engine.proposal_count(), 0);

    // The next successful creation still gets id 1.
    let id = engine
        .create_proposal(
            holder("alice"),
            holder("recipient"),
            Amount::new(10),
            String::new(),
            clock.now(),
        )
        .unwrap();
    assert_eq!(id, 1);
}

#[test]
fn non_stakeholder_cannot_propose() {
    let clock = NullClock::new(1_000);
    let mut engine = engine();
    engine.deposit(Amount::new(10)).unwrap();

    let err = engine
        .create_proposal(
            holder("mallory"),
            holder("recipient"),
            Amount::new(1),
            String::new(),
            clock.now(),
        )
        .unwrap_err();
    assert_eq!(err, GovernanceError::NotAStakeholder("mallory".into()));
    assert_eq!(engine.proposal_count(), 0);
}

#[test]
fn null_recipient_and_zero_amount_rejected_first() {
    let clock = NullClock::new(1_000);
    let mut engine = engine();
    // Empty treasury: the recipient/amount checks still fire first.
    assert_eq!(
        engine
            .create_proposal(
                holder("alice"),
                HolderAddress::new(HolderAddress::NULL),
                Amount::new(1),
                String::new(),
                clock.now(),
            )
            .unwrap_err(),
        GovernanceError::InvalidRecipient
    );
    assert_eq!(
        engine
            .create_proposal(
                holder("alice"),
                holder("recipient"),
                Amount::ZERO,
                String::new(),
                clock.now(),
            )
            .unwrap_err(),
        GovernanceError::InvalidAmount
    );
}

#[test]
fn configuration_setters_validate_ranges() {
    let mut engine = engine();
    assert!(engine.set_voting_period(86_400).is_ok());
    assert!(engine.set_voting_period(0).is_err());
    assert!(engine.set_quorum_percent(30).is_ok());
    assert!(engine.set_quorum_percent(0).is_err());
    assert!(engine.set_quorum_percent(101).is_err());
    assert!(engine.set_majority_percent(67).is_ok());
    assert!(engine.set_majority_percent(0).is_err());
    assert_eq!(engine.params().voting_period_secs, 86_400);
    assert_eq!(engine.params().quorum_percent, 30);
    assert_eq!(engine.params().majority_percent, 67);
}

#[test]
fn shorter_voting_period_applies_to_new_proposals() {
    let clock = NullClock::new(1_000);
    let mut engine = engine();
    engine.deposit(Amount::new(10)).unwrap();
    engine.set_voting_period(3_600).unwrap();

    let id = engine
        .create_proposal(
            holder("alice"),
            holder("recipient"),
            Amount::new(1),
            String::new(),
            clock.now(),
        )
        .unwrap();
    let proposal = engine.get_proposal(id).unwrap();
    assert_eq!(
        proposal.voting_deadline.as_secs(),
        proposal.created_at.as_secs() + 3_600
    );
}

#[test]
fn zero_deposit_rejected() {
    let mut engine = engine();
    assert_eq!(
        engine.deposit(Amount::ZERO).unwrap_err(),
        GovernanceError::InvalidAmount
    );
    assert_eq!(engine.treasury_balance(), Amount::ZERO);
}

#[test]
fn deposit_overflow_surfaced_not_misreported() {
    let mut engine = engine();
    engine.deposit(Amount::new(u128::MAX)).unwrap();
    let err = engine.deposit(Amount::new(1)).unwrap_err();
    assert_eq!(err, GovernanceError::Treasury(TreasuryError::Overflow));
    assert_eq!(engine.treasury_balance(), Amount::new(u128::MAX));
}
