//! Executor integration tests
//!
//! Runs the order executor and performance recalculator against the
//! in-memory store, covering:
//! 1. the capital invariant across a sequence of executes
//! 2. insufficient-capital rejection with no side effects
//! 3. the non-atomic execute/settle saga and ledger reconciliation
//! 4. recompute determinism and empty-ledger behavior

use plutus_clock::FixedClock;
use plutus_core::{Agent, RiskTolerance, TradeSide};
use plutus_executor::{ExecutorError, OrderExecutor, PerformanceRecalculator, TradeRequest};
use plutus_ports::PersistenceStore;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;
use store_sim::MemoryStore;

fn request(agent: &Agent, side: TradeSide, quantity: u64, price: Decimal) -> TradeRequest {
    TradeRequest {
        agent_id: agent.id,
        ticker: "SPY".to_string(),
        side,
        quantity,
        price,
        reasoning: Some("test order".to_string()),
    }
}

fn setup(initial_capital: Decimal) -> (Arc<MemoryStore>, OrderExecutor, Agent) {
    let _ = env_logger::try_init();
    let store = Arc::new(MemoryStore::new());
    let clock = Arc::new(FixedClock::default_epoch());
    let agent = Agent::new("tester", None, RiskTolerance::Medium, initial_capital);
    store.insert_agent(agent.clone());
    let executor = OrderExecutor::new(store.clone(), clock);
    (store, executor, agent)
}

#[tokio::test]
async fn test_capital_invariant_over_trade_sequence() {
    let (store, executor, agent) = setup(dec!(100000));

    // buy 100 @ 100 (-10_000), sell 50 @ 110 (+5_500), short 20 @ 90 (+1_800),
    // cover 20 @ 85 (-1_700)
    let sequence = [
        (TradeSide::Buy, 100, dec!(100)),
        (TradeSide::Sell, 50, dec!(110)),
        (TradeSide::SellShort, 20, dec!(90)),
        (TradeSide::BuyToCover, 20, dec!(85)),
    ];

    let mut expected = agent.initial_capital;
    for (side, quantity, price) in sequence {
        let execution = executor
            .execute(request(&agent, side, quantity, price))
            .await
            .unwrap();
        expected += side.cash_flow(Decimal::from(quantity) * price);
        assert_eq!(execution.new_capital, expected);
        assert_eq!(
            store.agent(agent.id).await.unwrap().current_capital,
            expected
        );
    }

    // Capital equals initial plus the sum of signed ledger cash flows
    let ledger_sum: Decimal = store
        .executed_trades(agent.id)
        .await
        .unwrap()
        .iter()
        .map(|t| t.cash_flow())
        .sum();
    assert_eq!(expected, agent.initial_capital + ledger_sum);
    assert_eq!(store.trade_count(agent.id), 4);
}

#[tokio::test]
async fn test_insufficient_capital_rejects_before_persistence() {
    let (store, executor, agent) = setup(dec!(500));

    // 10 x 100 = 1000 > 500
    let err = executor
        .execute(request(&agent, TradeSide::Buy, 10, dec!(100)))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ExecutorError::InsufficientCapital {
            required: dec!(1000),
            available: dec!(500),
        }
    );

    // No trade record, no capital change
    assert_eq!(store.trade_count(agent.id), 0);
    assert_eq!(
        store.agent(agent.id).await.unwrap().current_capital,
        dec!(500)
    );
}

#[tokio::test]
async fn test_sells_skip_the_capital_check() {
    let (_store, executor, agent) = setup(dec!(1));

    // Value far above capital, but sell-type sides are unconditionally allowed
    let execution = executor
        .execute(request(&agent, TradeSide::SellShort, 100, dec!(250)))
        .await
        .unwrap();
    assert_eq!(execution.new_capital, dec!(25001));
}

#[tokio::test]
async fn test_invalid_arguments_rejected() {
    let (_store, executor, agent) = setup(dec!(1000));

    assert_eq!(
        executor
            .execute(request(&agent, TradeSide::Buy, 0, dec!(100)))
            .await
            .unwrap_err(),
        ExecutorError::InvalidQuantity
    );
    assert!(matches!(
        executor
            .execute(request(&agent, TradeSide::Buy, 1, dec!(0)))
            .await
            .unwrap_err(),
        ExecutorError::InvalidPrice { .. }
    ));
}

#[tokio::test]
async fn test_unknown_agent_rejected() {
    let (_store, executor, _agent) = setup(dec!(1000));
    let ghost = Agent::new("ghost", None, RiskTolerance::Low, dec!(1000));

    assert_eq!(
        executor
            .execute(request(&ghost, TradeSide::Buy, 1, dec!(10)))
            .await
            .unwrap_err(),
        ExecutorError::AgentNotFound(ghost.id)
    );
}

#[tokio::test]
async fn test_insert_failure_aborts_without_capital_mutation() {
    let (store, executor, agent) = setup(dec!(10000));
    store.fail_next_insert();

    let err = executor
        .execute(request(&agent, TradeSide::Buy, 10, dec!(100)))
        .await
        .unwrap_err();
    assert!(matches!(err, ExecutorError::Store(_)));
    assert_eq!(store.trade_count(agent.id), 0);
    assert_eq!(
        store.agent(agent.id).await.unwrap().current_capital,
        dec!(10000)
    );
}

#[tokio::test]
async fn test_capital_update_failure_surfaces_and_reconciles() {
    let (store, executor, agent) = setup(dec!(10000));
    store.fail_next_capital_update();

    // Step 1 persists the trade; step 2 fails -> recoverable saga error
    let err = executor
        .execute(request(&agent, TradeSide::Buy, 10, dec!(100)))
        .await
        .unwrap_err();
    assert!(matches!(err, ExecutorError::CapitalUpdateFailed { .. }));
    assert_eq!(store.trade_count(agent.id), 1);
    // Capital diverged from the ledger
    assert_eq!(
        store.agent(agent.id).await.unwrap().current_capital,
        dec!(10000)
    );

    // The ledger is authoritative: reconciliation repairs the divergence
    let capital = executor.reconcile_capital(agent.id).await.unwrap();
    assert_eq!(capital, dec!(9000));
    assert_eq!(
        store.agent(agent.id).await.unwrap().current_capital,
        dec!(9000)
    );
}

#[tokio::test]
async fn test_reconcile_trade_free_agent_is_a_no_op() {
    let (store, executor, agent) = setup(dec!(10000));

    let capital = executor.reconcile_capital(agent.id).await.unwrap();
    assert_eq!(capital, dec!(10000));

    // No trades, so no trade timestamp gets invented
    let reconciled = store.agent(agent.id).await.unwrap();
    assert_eq!(reconciled.current_capital, dec!(10000));
    assert!(reconciled.last_trade_at.is_none());
}

#[tokio::test]
async fn test_recompute_empty_ledger_writes_nothing() {
    let (store, _executor, agent) = setup(dec!(1000));
    let clock = Arc::new(FixedClock::default_epoch());
    let recalc = PerformanceRecalculator::new(store.clone(), clock, 7);

    assert!(recalc.recompute(agent.id).await.unwrap().is_none());
    assert!(store.performance(agent.id).is_none());
}

#[tokio::test]
async fn test_recompute_upserts_and_is_seed_deterministic() {
    let (store, executor, agent) = setup(dec!(100000));
    for (side, qty, price) in [
        (TradeSide::Buy, 100, dec!(100)),
        (TradeSide::Sell, 100, dec!(105)),
        (TradeSide::Sell, 10, dec!(50)),
    ] {
        executor
            .execute(request(&agent, side, qty, price))
            .await
            .unwrap();
    }

    let clock = Arc::new(FixedClock::default_epoch());
    let first = PerformanceRecalculator::new(store.clone(), clock.clone(), 99)
        .recompute(agent.id)
        .await
        .unwrap()
        .unwrap();
    let second = PerformanceRecalculator::new(store.clone(), clock.clone(), 99)
        .recompute(agent.id)
        .await
        .unwrap()
        .unwrap();

    // Identical seeds: identical metrics, including sampled P&L
    assert_eq!(first, second);
    assert_eq!(first.total_trades, 3);
    assert_eq!(first.winning_trades, 2);
    assert_eq!(first.total_volume, dec!(21000));
    assert_eq!(store.performance(agent.id).unwrap(), second);

    // Different seed: structural counters unchanged
    let reseeded = PerformanceRecalculator::new(store.clone(), clock, 1)
        .recompute(agent.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reseeded.total_trades, first.total_trades);
    assert_eq!(reseeded.winning_trades, first.winning_trades);
    assert_eq!(reseeded.total_volume, first.total_volume);
}
