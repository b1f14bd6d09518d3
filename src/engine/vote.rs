//! Weighted indicator voting.
//!
//! Per timeframe, each configured indicator's latest value casts at
//! most one vote to Buy or Sell through a fixed threshold rule. Votes
//! carry integer weights; the winning side's weight over the total
//! configured weight gives the confidence. Across timeframes, each
//! timeframe's confidence accumulates into a buy or sell bucket
//! according to its forecast to form the master signal.

use crate::types::{Forecast, MasterSignal, TimeframeSignal};
use serde::{Deserialize, Serialize};

/// Integer vote weight per voting indicator.
///
/// Invariant: every indicator consulted by the vote has exactly one
/// weight entry here, and every weight is positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteWeights {
    pub rsi: u32,
    pub macd: u32,
    pub stochastic: u32,
    pub cci: u32,
    pub obv: u32,
    pub vwap: u32,
}

impl Default for VoteWeights {
    fn default() -> Self {
        Self {
            rsi: 1,
            macd: 2,
            stochastic: 1,
            cci: 1,
            obv: 1,
            vwap: 2,
        }
    }
}

impl VoteWeights {
    /// Sum of all configured weights. This is the confidence
    /// denominator regardless of how many indicators actually voted.
    pub fn total(&self) -> u32 {
        self.rsi + self.macd + self.stochastic + self.cci + self.obv + self.vwap
    }
}

/// Latest indicator values for one timeframe. A `None` means the
/// indicator had insufficient history and abstains from the vote; its
/// weight still counts in the confidence denominator.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IndicatorSnapshot {
    pub rsi: Option<f64>,
    /// (macd line, signal line).
    pub macd: Option<(f64, f64)>,
    pub stochastic: Option<f64>,
    pub cci: Option<f64>,
    /// (latest OBV, previous OBV).
    pub obv: Option<(f64, f64)>,
    pub vwap: Option<f64>,
    pub close: Option<f64>,
}

/// Apply the threshold rules and produce the timeframe signal.
///
/// Rules, each casting zero or one vote:
/// RSI < 30 Buy / > 70 Sell; MACD above signal Buy / below Sell;
/// Stochastic < 20 Buy / > 80 Sell; CCI < -100 Buy / > 100 Sell;
/// OBV rising Buy / falling Sell; close above VWAP Buy / below Sell.
pub fn evaluate(snapshot: &IndicatorSnapshot, weights: &VoteWeights) -> TimeframeSignal {
    let mut buy_score = 0u32;
    let mut sell_score = 0u32;

    let mut vote = |buy: bool, sell: bool, weight: u32| {
        if buy {
            buy_score += weight;
        } else if sell {
            sell_score += weight;
        }
    };

    if let Some(rsi) = snapshot.rsi {
        vote(rsi < 30.0, rsi > 70.0, weights.rsi);
    }
    if let Some((macd, signal)) = snapshot.macd {
        vote(macd > signal, macd < signal, weights.macd);
    }
    if let Some(k) = snapshot.stochastic {
        vote(k < 20.0, k > 80.0, weights.stochastic);
    }
    if let Some(cci) = snapshot.cci {
        vote(cci < -100.0, cci > 100.0, weights.cci);
    }
    if let Some((latest, previous)) = snapshot.obv {
        vote(latest > previous, latest < previous, weights.obv);
    }
    if let (Some(close), Some(vwap)) = (snapshot.close, snapshot.vwap) {
        vote(close > vwap, close < vwap, weights.vwap);
    }

    let forecast = if buy_score > sell_score {
        Forecast::Buy
    } else if sell_score > buy_score {
        Forecast::Sell
    } else {
        Forecast::Flat
    };

    let total = weights.total();
    let confidence = if total == 0 {
        0
    } else {
        (buy_score.max(sell_score) as f64 / total as f64 * 100.0).round() as u8
    };

    TimeframeSignal {
        forecast,
        confidence,
    }
}

/// Combine per-timeframe signals into the master signal.
///
/// Each timeframe contributes its confidence to a buy or sell
/// accumulator according to its forecast; Flat contributes to
/// neither. Master confidence is the winning accumulator over the
/// combined total. With no winner (both accumulators 0, or an exact
/// tie) the master is Flat with confidence 0.
pub fn master_signal(signals: &[TimeframeSignal]) -> MasterSignal {
    let mut buy = 0u32;
    let mut sell = 0u32;

    for signal in signals {
        match signal.forecast {
            Forecast::Buy => buy += signal.confidence as u32,
            Forecast::Sell => sell += signal.confidence as u32,
            Forecast::Flat => {}
        }
    }

    if buy == sell {
        return MasterSignal {
            forecast: Forecast::Flat,
            confidence: 0,
        };
    }

    let forecast = if buy > sell {
        Forecast::Buy
    } else {
        Forecast::Sell
    };

    MasterSignal {
        forecast,
        confidence: (buy.max(sell) as f64 / (buy + sell) as f64 * 100.0).round() as u8,
    }
}
