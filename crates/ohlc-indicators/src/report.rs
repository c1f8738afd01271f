//! Indicator report aggregation.
//!
//! [`analyze_sequence`] runs every indicator over one candle sequence and
//! collects the latest values into an immutable [`IndicatorReport`].

use ohlc_core::{candle::closes, Candle, Indicator, Result, TaFloat};
use tracing::{debug, debug_span, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::momentum::{cci, rsi, stochastic, CciConfig, RsiConfig, StochasticConfig, StochasticOutput};
use crate::smoothing::sma;
use crate::trend::{adx_with, macd_with, AdxConfig, MacdConfig, MacdOutput};
use crate::volatility::{atr, bollinger_bands, AtrConfig, BollingerConfig, BollingerOutput};
use crate::volume::{vwap, VwapConfig};

/// Latest close SMAs over the fixed 10/20/50/100/200 periods.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: TaFloat"))]
pub struct MovingAverages<T: TaFloat> {
    /// 10-period SMA.
    pub sma10: T,
    /// 20-period SMA.
    pub sma20: T,
    /// 50-period SMA.
    pub sma50: T,
    /// 100-period SMA.
    pub sma100: T,
    /// 200-period SMA.
    pub sma200: T,
}

impl<T: TaFloat> MovingAverages<T> {
    /// Periods of the bundle, in field order.
    pub const PERIODS: [usize; 5] = [10, 20, 50, 100, 200];

    /// Compute the bundle over a close series.
    #[must_use]
    pub fn from_closes(closes: &[T]) -> Self {
        Self {
            sma10: sma(closes, 10),
            sma20: sma(closes, 20),
            sma50: sma(closes, 50),
            sma100: sma(closes, 100),
            sma200: sma(closes, 200),
        }
    }

    /// The averages in period order.
    pub fn values(&self) -> [T; 5] {
        [self.sma10, self.sma20, self.sma50, self.sma100, self.sma200]
    }
}

/// Snapshot of every indicator for the latest candle of a sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: TaFloat"))]
pub struct IndicatorReport<T: TaFloat> {
    /// Relative Strength Index.
    pub rsi: T,
    /// Stochastic %K / %D.
    pub stochastic: StochasticOutput<T>,
    /// Commodity Channel Index. NaN when the typical price window is flat.
    pub cci: T,
    /// Trend strength estimate (simplified ADX).
    pub adx: T,
    /// MACD line, signal and histogram.
    pub macd: MacdOutput<T>,
    /// Bollinger Bands.
    pub bollinger: BollingerOutput<T>,
    /// Cumulative volume weighted average price.
    pub vwap: T,
    /// Average True Range.
    pub atr: T,
    /// SMA bundle.
    pub moving_averages: MovingAverages<T>,
}

impl<T: TaFloat> IndicatorReport<T> {
    /// Names of the fields whose value is NaN or infinite.
    ///
    /// With the default configuration only `cci` can appear here, when the
    /// trailing typical prices have zero deviation.
    #[must_use]
    pub fn non_finite_fields(&self) -> Vec<&'static str> {
        let ma = self.moving_averages;
        let fields = [
            ("rsi", self.rsi),
            ("stochastic.k", self.stochastic.k),
            ("stochastic.d", self.stochastic.d),
            ("cci", self.cci),
            ("adx", self.adx),
            ("macd.macd", self.macd.macd),
            ("macd.signal", self.macd.signal),
            ("macd.histogram", self.macd.histogram),
            ("bollinger.upper", self.bollinger.upper),
            ("bollinger.middle", self.bollinger.middle),
            ("bollinger.lower", self.bollinger.lower),
            ("vwap", self.vwap),
            ("atr", self.atr),
            ("moving_averages.sma10", ma.sma10),
            ("moving_averages.sma20", ma.sma20),
            ("moving_averages.sma50", ma.sma50),
            ("moving_averages.sma100", ma.sma100),
            ("moving_averages.sma200", ma.sma200),
        ];
        fields
            .iter()
            .filter(|(_, value)| !value.is_valid())
            .map(|(name, _)| *name)
            .collect()
    }
}

/// Parameters for every indicator in the report.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReportConfig {
    /// RSI parameters.
    pub rsi: RsiConfig,
    /// Stochastic parameters.
    pub stochastic: StochasticConfig,
    /// CCI parameters.
    pub cci: CciConfig,
    /// Trend strength parameters.
    pub adx: AdxConfig,
    /// MACD parameters.
    pub macd: MacdConfig,
    /// Bollinger Bands parameters.
    pub bollinger: BollingerConfig,
    /// ATR parameters.
    pub atr: AtrConfig,
    /// VWAP parameters.
    pub vwap: VwapConfig,
}

fn note_fallback<T: TaFloat, I: Indicator<T>>(indicator: &I, candles: &[Candle<T>]) {
    if !indicator.is_ready(candles) {
        debug!(
            indicator = indicator.name(),
            required = indicator.min_periods(),
            available = candles.len(),
            "insufficient history, using fallback"
        );
    }
}

/// Build a report using custom indicator parameters.
///
/// Close prices are extracted once and shared by every close-based
/// indicator. The configuration is not validated here; call
/// [`Indicator::validate`] on it first if it comes from user input.
#[must_use]
pub fn analyze_sequence_with<T: TaFloat>(
    candles: &[Candle<T>],
    config: &ReportConfig,
) -> IndicatorReport<T> {
    let span = debug_span!("analyze_sequence", candles = candles.len());
    let _enter = span.enter();

    note_fallback(&config.rsi, candles);
    note_fallback(&config.stochastic, candles);
    note_fallback(&config.cci, candles);
    note_fallback(&config.adx, candles);
    note_fallback(&config.macd, candles);
    note_fallback(&config.bollinger, candles);
    note_fallback(&config.atr, candles);

    let closes = closes(candles);

    let report = IndicatorReport {
        rsi: rsi(&closes, config.rsi.period),
        stochastic: stochastic(
            candles,
            config.stochastic.period,
            config.stochastic.smooth_k,
            config.stochastic.smooth_d,
        ),
        cci: cci(candles, config.cci.period),
        adx: adx_with(candles, &config.adx),
        macd: macd_with(&closes, config.macd.fast, config.macd.slow, config.macd.signal),
        bollinger: bollinger_bands(
            &closes,
            config.bollinger.period,
            T::from_f64_lossy(config.bollinger.multiplier),
        ),
        vwap: vwap(candles),
        atr: atr(candles, config.atr.period),
        moving_averages: MovingAverages::from_closes(&closes),
    };

    if !report.cci.is_valid() {
        warn!(
            cci = report.cci.to_f64_lossy(),
            "CCI is not finite: typical prices have zero deviation"
        );
    }

    report
}

/// Build a report with every indicator at its default parameters.
///
/// Never fails: short or empty input produces each indicator's fallback value.
///
/// # Example
///
/// ```rust
/// use ohlc_core::Candle;
/// use ohlc_indicators::analyze_sequence;
///
/// let report = analyze_sequence::<f64>(&[]);
/// assert_eq!(report.rsi, 50.0);
/// assert_eq!(report.adx, 25.0);
/// assert_eq!(report.stochastic.k, 50.0);
/// ```
#[must_use]
pub fn analyze_sequence<T: TaFloat>(candles: &[Candle<T>]) -> IndicatorReport<T> {
    analyze_sequence_with(candles, &ReportConfig::default())
}

impl<T: TaFloat> Indicator<T> for ReportConfig {
    type Output = IndicatorReport<T>;

    fn name(&self) -> &'static str {
        "report"
    }

    fn min_periods(&self) -> usize {
        let indicators = [
            Indicator::<T>::min_periods(&self.rsi),
            Indicator::<T>::min_periods(&self.stochastic),
            Indicator::<T>::min_periods(&self.cci),
            Indicator::<T>::min_periods(&self.adx),
            Indicator::<T>::min_periods(&self.macd),
            Indicator::<T>::min_periods(&self.bollinger),
            Indicator::<T>::min_periods(&self.atr),
        ];
        let averages = MovingAverages::<T>::PERIODS;
        indicators.into_iter().chain(averages).max().unwrap_or(0)
    }

    fn compute(&self, candles: &[Candle<T>]) -> IndicatorReport<T> {
        analyze_sequence_with(candles, self)
    }

    fn validate(&self) -> Result<()> {
        Indicator::<T>::validate(&self.rsi)?;
        Indicator::<T>::validate(&self.stochastic)?;
        Indicator::<T>::validate(&self.cci)?;
        Indicator::<T>::validate(&self.adx)?;
        Indicator::<T>::validate(&self.macd)?;
        Indicator::<T>::validate(&self.bollinger)?;
        Indicator::<T>::validate(&self.atr)
    }
}
