//! Per-strategy signal rules
//!
//! Each rule is a stateless threshold test over one market snapshot.
//! Dispatch is a match on the agent's strategy kind; an unset or unknown
//! strategy always holds. Rules only suggest - the scheduler's confidence
//! gate decides whether anything executes.

use plutus_core::{Agent, Quote, RiskTolerance, SignalAction, StrategyKind, TradeSignal};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::sizing::position_size;

/// Generate the trade signal for one agent against one snapshot
///
/// Pure and deterministic: same agent configuration and same quote always
/// yield the same signal.
pub fn generate(agent: &Agent, quote: &Quote) -> TradeSignal {
    match agent.strategy {
        Some(StrategyKind::Momentum) => momentum(agent, quote),
        Some(StrategyKind::MeanReversion) => mean_reversion(agent, quote),
        Some(StrategyKind::Value) => value(agent, quote),
        Some(StrategyKind::Growth) => growth(agent, quote),
        Some(StrategyKind::Dividend) => dividend(agent, quote),
        Some(StrategyKind::Arbitrage) => arbitrage(agent, quote),
        Some(StrategyKind::Swing) => swing(agent, quote),
        Some(StrategyKind::Scalping) => scalping(agent, quote),
        Some(StrategyKind::Breakout) => breakout(agent, quote),
        Some(StrategyKind::Contrarian) => contrarian(agent, quote),
        None => TradeSignal::hold(),
    }
}

/// Size a proposed entry with the rule's base risk fraction
fn sized(agent: &Agent, price: Decimal, risk_fraction: Decimal) -> u64 {
    position_size(
        agent.risk_tolerance,
        agent.current_capital,
        price,
        risk_fraction,
    )
}

/// Ride strong moves in their direction; eagerness scales with tolerance
fn momentum(agent: &Agent, quote: &Quote) -> TradeSignal {
    let threshold = match agent.risk_tolerance {
        RiskTolerance::Low => dec!(5),
        RiskTolerance::Medium => dec!(3),
        RiskTolerance::High => dec!(2),
    };
    let pct = quote.change_percent;

    if pct > threshold {
        let confidence = (pct.abs() / dec!(10)).min(dec!(0.9));
        return TradeSignal::new(
            SignalAction::Buy,
            confidence,
            format!("Strong upward momentum detected: {pct:.2}% gain"),
        )
        .with_quantity(sized(agent, quote.price, dec!(0.1)));
    }

    if pct < -threshold {
        let confidence = (pct.abs() / dec!(10)).min(dec!(0.8));
        return TradeSignal::new(
            SignalAction::SellShort,
            confidence,
            format!("Strong downward momentum detected: {pct:.2}% decline"),
        )
        .with_quantity(sized(agent, quote.price, dec!(0.08)));
    }

    TradeSignal::hold()
}

/// Fade moves toward the edges of the day range
fn mean_reversion(agent: &Agent, quote: &Quote) -> TradeSignal {
    let Some(range_pos) = quote.range_position() else {
        return TradeSignal::hold();
    };
    let pct_of_range = range_pos * Decimal::ONE_HUNDRED;

    if range_pos < dec!(0.2) && quote.change_percent < dec!(-2) {
        return TradeSignal::new(
            SignalAction::Buy,
            dec!(0.7),
            format!("Price near daily low ({pct_of_range:.1}% of range), expecting mean reversion"),
        )
        .with_quantity(sized(agent, quote.price, dec!(0.15)));
    }

    if range_pos > dec!(0.8) && quote.change_percent > dec!(2) {
        return TradeSignal::new(
            SignalAction::Sell,
            dec!(0.6),
            format!("Price near daily high ({pct_of_range:.1}% of range), expecting reversion"),
        )
        .with_quantity(sized(agent, quote.price, dec!(0.1)));
    }

    TradeSignal::hold()
}

/// Buy oversold names on outsized declines
fn value(agent: &Agent, quote: &Quote) -> TradeSignal {
    let pct = quote.change_percent;
    if pct < dec!(-5) {
        return TradeSignal::new(
            SignalAction::Buy,
            dec!(0.8),
            format!("Potential value opportunity: {pct:.2}% decline may be overdone"),
        )
        .with_quantity(sized(agent, quote.price, dec!(0.2)));
    }
    TradeSignal::hold()
}

/// Chase positive momentum only when volume confirms it
fn growth(agent: &Agent, quote: &Quote) -> TradeSignal {
    let pct = quote.change_percent;
    if pct > dec!(3) && quote.volume > 1_000_000 {
        return TradeSignal::new(
            SignalAction::Buy,
            dec!(0.75),
            format!("Growth momentum with volume: {pct:.2}% gain on strong volume"),
        )
        .with_quantity(sized(agent, quote.price, dec!(0.12)));
    }
    TradeSignal::hold()
}

/// Accumulate on modest dips, sit out anything dramatic
fn dividend(agent: &Agent, quote: &Quote) -> TradeSignal {
    let pct = quote.change_percent;
    if pct < dec!(-1) && pct > dec!(-3) {
        return TradeSignal::new(
            SignalAction::Buy,
            dec!(0.6),
            format!("Modest dip for dividend stock: {pct:.2}% decline"),
        )
        .with_quantity(sized(agent, quote.price, dec!(0.05)));
    }
    TradeSignal::hold()
}

/// Trade gaps versus the previous close, betting on closure
fn arbitrage(agent: &Agent, quote: &Quote) -> TradeSignal {
    let Some(gap) = quote.gap_percent() else {
        return TradeSignal::hold();
    };
    if gap > Decimal::ONE {
        let action = if quote.price > quote.previous_close {
            SignalAction::Sell
        } else {
            SignalAction::Buy
        };
        return TradeSignal::new(
            action,
            dec!(0.5),
            format!("Potential arbitrage opportunity: {gap:.2}% gap from previous close"),
        )
        .with_quantity(sized(agent, quote.price, dec!(0.03)));
    }
    TradeSignal::hold()
}

/// Take profit at swing highs, enter at swing lows
fn swing(agent: &Agent, quote: &Quote) -> TradeSignal {
    let pct = quote.change_percent;

    if pct > dec!(4) {
        return TradeSignal::new(
            SignalAction::Sell,
            dec!(0.7),
            format!("Swing high reached: {pct:.2}% gain, taking profits"),
        )
        .with_quantity(sized(agent, quote.price, dec!(0.1)));
    }

    if pct < dec!(-4) {
        return TradeSignal::new(
            SignalAction::Buy,
            dec!(0.7),
            format!("Swing low reached: {pct:.2}% decline, entering position"),
        )
        .with_quantity(sized(agent, quote.price, dec!(0.1)));
    }

    TradeSignal::hold()
}

/// Fade every small move, tiny size, low conviction
fn scalping(agent: &Agent, quote: &Quote) -> TradeSignal {
    let pct = quote.change_percent;
    if pct.abs() > dec!(0.5) {
        let action = if pct > Decimal::ZERO {
            SignalAction::Sell
        } else {
            SignalAction::Buy
        };
        return TradeSignal::new(
            action,
            dec!(0.4),
            format!("Scalping opportunity: {pct:.2}% move"),
        )
        .with_quantity(sized(agent, quote.price, dec!(0.02)));
    }
    TradeSignal::hold()
}

/// Follow decisive moves out of the recent range
fn breakout(agent: &Agent, quote: &Quote) -> TradeSignal {
    let pct = quote.change_percent;
    let threshold = dec!(5);

    if pct > threshold {
        return TradeSignal::new(
            SignalAction::Buy,
            dec!(0.8),
            format!("Upward breakout detected: {pct:.2}% move"),
        )
        .with_quantity(sized(agent, quote.price, dec!(0.15)));
    }

    if pct < -threshold {
        return TradeSignal::new(
            SignalAction::SellShort,
            dec!(0.8),
            format!("Downward breakout detected: {pct:.2}% move"),
        )
        .with_quantity(sized(agent, quote.price, dec!(0.15)));
    }

    TradeSignal::hold()
}

/// Bet against the crowd on outsized moves either way
fn contrarian(agent: &Agent, quote: &Quote) -> TradeSignal {
    let pct = quote.change_percent;

    if pct > dec!(3) {
        return TradeSignal::new(
            SignalAction::Sell,
            dec!(0.6),
            format!("Contrarian sell: {pct:.2}% gain seems excessive"),
        )
        .with_quantity(sized(agent, quote.price, dec!(0.08)));
    }

    if pct < dec!(-3) {
        return TradeSignal::new(
            SignalAction::Buy,
            dec!(0.6),
            format!("Contrarian buy: {pct:.2}% decline seems excessive"),
        )
        .with_quantity(sized(agent, quote.price, dec!(0.08)));
    }

    TradeSignal::hold()
}
