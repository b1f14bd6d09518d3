//! Signal engine: indicator computation, alignment and voting.
//!
//! Everything here is pure and stateless per call: a computation
//! consumes an ordered candle window and produces fresh immutable
//! series. Nothing is cached between calls, so recomputing on the
//! same input is bit-identical.

pub mod align;
pub mod indicators;
pub mod vote;

pub use vote::{evaluate, master_signal, IndicatorSnapshot, VoteWeights};

use crate::types::{
    BandPoint, Candle, IchimokuSeries, IndicatorPoint, MacdPoint, PivotLevels, SupertrendSeries,
    TimeframeSignal,
};
use align::{atr_offset, attach_times, macd_offset, rsi_offset, supertrend_offset, window_offset};
use serde::{Deserialize, Serialize};

/// Default indicator parameters, matching the dashboard the engine
/// feeds.
pub const SMA_PERIOD: usize = 20;
pub const EMA_PERIOD: usize = 20;
pub const RSI_PERIOD: usize = 14;
pub const STOCHASTIC_PERIOD: usize = 14;
pub const CCI_PERIOD: usize = 20;
pub const ATR_PERIOD: usize = 14;
pub const MACD_FAST: usize = 12;
pub const MACD_SLOW: usize = 26;
pub const MACD_SIGNAL: usize = 9;
pub const BOLLINGER_PERIOD: usize = 20;
pub const BOLLINGER_MULT: f64 = 2.0;
pub const SUPERTREND_ATR_PERIOD: usize = 10;
pub const SUPERTREND_MULT: f64 = 3.0;
pub const ICHIMOKU_TENKAN: usize = 9;
pub const ICHIMOKU_KIJUN: usize = 26;
pub const ICHIMOKU_SPAN_B: usize = 52;

/// The full set of indicator series derived from one candle window.
///
/// Each series is aligned onto absolute candle timestamps; series
/// with insufficient history are simply empty. Produced fresh on
/// every computation and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorSet {
    pub sma: Vec<IndicatorPoint>,
    pub ema: Vec<IndicatorPoint>,
    pub vwap: Vec<IndicatorPoint>,
    pub obv: Vec<IndicatorPoint>,
    pub rsi: Vec<IndicatorPoint>,
    pub stochastic: Vec<IndicatorPoint>,
    pub cci: Vec<IndicatorPoint>,
    pub atr: Vec<IndicatorPoint>,
    pub macd: Vec<MacdPoint>,
    pub bollinger: Vec<BandPoint>,
    pub supertrend: SupertrendSeries,
    pub ichimoku: IchimokuSeries,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pivots: Option<PivotLevels>,
    pub regression: Vec<BandPoint>,
}

impl IndicatorSet {
    /// Compute every indicator over the supplied window.
    pub fn compute(candles: &[Candle]) -> Self {
        let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();

        let macd_series = indicators::macd(&closes, MACD_FAST, MACD_SLOW, MACD_SIGNAL);
        let macd_points = candles
            .iter()
            .skip(macd_offset(MACD_SLOW, MACD_SIGNAL))
            .zip(macd_series.macd.iter().enumerate())
            .map(|(candle, (i, &macd))| MacdPoint {
                time: candle.time,
                macd,
                signal: macd_series.signal[i],
                histogram: macd_series.histogram[i],
            })
            .collect();

        let bands = indicators::bollinger(&closes, BOLLINGER_PERIOD, BOLLINGER_MULT);
        let bollinger_points = candles
            .iter()
            .skip(window_offset(BOLLINGER_PERIOD))
            .zip(bands.middle.iter().enumerate())
            .map(|(candle, (i, &middle))| BandPoint {
                time: candle.time,
                middle,
                upper: bands.upper[i],
                lower: bands.lower[i],
            })
            .collect();

        let channel = indicators::regression_channel(&closes);
        let regression_points = candles
            .iter()
            .zip(channel.middle.iter().enumerate())
            .map(|(candle, (i, &middle))| BandPoint {
                time: candle.time,
                middle,
                upper: channel.upper[i],
                lower: channel.lower[i],
            })
            .collect();

        let st = indicators::supertrend(candles, SUPERTREND_ATR_PERIOD, SUPERTREND_MULT);
        let supertrend = SupertrendSeries {
            line: attach_times(candles, st.line, supertrend_offset(SUPERTREND_ATR_PERIOD)),
            trend: st.trend,
        };

        let lines = indicators::ichimoku(candles, ICHIMOKU_TENKAN, ICHIMOKU_KIJUN, ICHIMOKU_SPAN_B);
        let ichimoku = IchimokuSeries {
            tenkan: attach_times(candles, lines.tenkan, window_offset(ICHIMOKU_TENKAN)),
            kijun: attach_times(candles, lines.kijun, window_offset(ICHIMOKU_KIJUN)),
            span_a: attach_times(candles, lines.span_a, window_offset(ICHIMOKU_KIJUN)),
            span_b: attach_times(candles, lines.span_b, window_offset(ICHIMOKU_SPAN_B)),
            displacement: lines.displacement,
        };

        Self {
            sma: attach_times(
                candles,
                indicators::sma(&closes, SMA_PERIOD),
                window_offset(SMA_PERIOD),
            ),
            ema: attach_times(
                candles,
                indicators::ema(&closes, EMA_PERIOD),
                window_offset(EMA_PERIOD),
            ),
            vwap: attach_times(candles, indicators::vwap(candles), 0),
            obv: attach_times(candles, indicators::obv(candles), 0),
            rsi: attach_times(
                candles,
                indicators::rsi(&closes, RSI_PERIOD),
                rsi_offset(RSI_PERIOD),
            ),
            stochastic: attach_times(
                candles,
                indicators::stochastic_k(candles, STOCHASTIC_PERIOD),
                window_offset(STOCHASTIC_PERIOD),
            ),
            cci: attach_times(
                candles,
                indicators::cci(candles, CCI_PERIOD),
                window_offset(CCI_PERIOD),
            ),
            atr: attach_times(
                candles,
                indicators::atr(candles, ATR_PERIOD),
                atr_offset(ATR_PERIOD),
            ),
            macd: macd_points,
            bollinger: bollinger_points,
            supertrend,
            ichimoku,
            pivots: indicators::daily_pivots(candles),
            regression: regression_points,
        }
    }

    /// Latest values of the voting indicators. Empty series abstain.
    pub fn snapshot(&self, candles: &[Candle]) -> IndicatorSnapshot {
        let obv = match self.obv.as_slice() {
            [.., prev, last] => Some((last.value, prev.value)),
            // A single OBV point has no direction to vote on.
            _ => None,
        };

        IndicatorSnapshot {
            rsi: self.rsi.last().map(|p| p.value),
            macd: self.macd.last().map(|p| (p.macd, p.signal)),
            stochastic: self.stochastic.last().map(|p| p.value),
            cci: self.cci.last().map(|p| p.value),
            obv,
            vwap: self.vwap.last().map(|p| p.value),
            close: candles.last().map(|c| c.close),
        }
    }
}

/// One-shot pipeline: compute all indicators over a window and vote.
pub fn compute_signal(candles: &[Candle], weights: &VoteWeights) -> TimeframeSignal {
    if candles.is_empty() {
        return TimeframeSignal::neutral();
    }
    let set = IndicatorSet::compute(candles);
    evaluate(&set.snapshot(candles), weights)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candles(n: usize) -> Vec<Candle> {
        (0..n)
            .map(|i| {
                let base = 100.0 + (i as f64 * 0.4).sin() * 8.0;
                Candle {
                    time: 1_700_000_000 + i as i64 * 60,
                    open: base,
                    high: base + 1.5,
                    low: base - 1.5,
                    close: base + 0.5,
                    volume: 10.0 + (i % 7) as f64,
                }
            })
            .collect()
    }

    #[test]
    fn test_compute_alignment_offsets() {
        let n = 200;
        let input = candles(n);
        let set = IndicatorSet::compute(&input);

        assert_eq!(set.sma.len(), n - window_offset(SMA_PERIOD));
        assert_eq!(set.ema.len(), n - window_offset(EMA_PERIOD));
        assert_eq!(set.rsi.len(), n - rsi_offset(RSI_PERIOD));
        assert_eq!(set.atr.len(), n - atr_offset(ATR_PERIOD));
        assert_eq!(set.macd.len(), n - macd_offset(MACD_SLOW, MACD_SIGNAL));
        assert_eq!(set.stochastic.len(), n - window_offset(STOCHASTIC_PERIOD));
        assert_eq!(set.cci.len(), n - window_offset(CCI_PERIOD));
        assert_eq!(set.vwap.len(), n);
        assert_eq!(set.obv.len(), n);
        assert_eq!(set.regression.len(), n);
        assert_eq!(
            set.supertrend.line.len(),
            n - supertrend_offset(SUPERTREND_ATR_PERIOD)
        );
    }

    #[test]
    fn test_compute_timestamps_land_on_candles() {
        let input = candles(100);
        let set = IndicatorSet::compute(&input);

        assert_eq!(set.sma[0].time, input[window_offset(SMA_PERIOD)].time);
        assert_eq!(set.rsi[0].time, input[rsi_offset(RSI_PERIOD)].time);
        assert_eq!(
            set.macd[0].time,
            input[macd_offset(MACD_SLOW, MACD_SIGNAL)].time
        );
        assert_eq!(set.vwap[0].time, input[0].time);
    }

    #[test]
    fn test_compute_short_window_is_empty_not_error() {
        let input = candles(5);
        let set = IndicatorSet::compute(&input);
        assert!(set.sma.is_empty());
        assert!(set.rsi.is_empty());
        assert!(set.macd.is_empty());
        assert!(set.pivots.is_none());
        // No-lookback series still cover the window.
        assert_eq!(set.obv.len(), 5);
        assert_eq!(set.vwap.len(), 5);
    }

    #[test]
    fn test_compute_is_idempotent() {
        let input = candles(150);
        let first = IndicatorSet::compute(&input);
        let second = IndicatorSet::compute(&input);
        assert_eq!(first.rsi, second.rsi);
        assert_eq!(first.macd, second.macd);
        assert_eq!(first.supertrend, second.supertrend);
        assert_eq!(first.regression, second.regression);
    }

    #[test]
    fn test_snapshot_abstains_on_short_window() {
        let input = candles(10);
        let set = IndicatorSet::compute(&input);
        let snapshot = set.snapshot(&input);
        assert!(snapshot.rsi.is_none());
        assert!(snapshot.macd.is_none());
        assert!(snapshot.obv.is_some());
        assert!(snapshot.close.is_some());
    }

    #[test]
    fn test_compute_signal_empty_window_is_neutral() {
        let signal = compute_signal(&[], &VoteWeights::default());
        assert_eq!(signal, TimeframeSignal::neutral());
    }

    #[test]
    fn test_compute_signal_deterministic() {
        let input = candles(180);
        let weights = VoteWeights::default();
        assert_eq!(
            compute_signal(&input, &weights),
            compute_signal(&input, &weights)
        );
    }
}
