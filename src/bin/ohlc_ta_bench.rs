//! Benchmark binary for the ohlc-ta indicator engine.
//!
//! Usage:
//!     ohlc_ta_bench <data_file> <iterations> [config_file]
//!     ohlc_ta_bench --synthetic <candles> <iterations> [config_file]
//!
//! `data_file` is JSON with columnar `ohlcv` arrays (`volume` optional).
//! `config_file` is a JSON `ReportConfig`; missing fields keep their defaults.
//!
//! Outputs a JSON object with the timing results and the final report to
//! stdout. Progress is logged to stderr (`RUST_LOG`, default `info`).

use std::error::Error;
use std::fs::File;
use std::hint::black_box;
use std::io::BufReader;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use ohlc_core::candle::{closes, validate_candles};
use ohlc_core::{Candle, Indicator};
use ohlc_indicators::prelude::*;

#[derive(Debug, Deserialize)]
struct OhlcvData {
    ohlcv: OhlcvRaw,
}

#[derive(Debug, Deserialize)]
struct OhlcvRaw {
    open: Vec<f64>,
    high: Vec<f64>,
    low: Vec<f64>,
    close: Vec<f64>,
    #[serde(default)]
    volume: Option<Vec<f64>>,
}

#[derive(Debug, Serialize)]
struct BenchmarkResult {
    name: String,
    candles: usize,
    iterations: usize,
    total_time_ms: f64,
    avg_time_ms: f64,
    min_time_ms: f64,
    max_time_ms: f64,
    throughput_candles_per_sec: f64,
}

#[derive(Debug, Serialize)]
struct BenchmarkOutput {
    results: Vec<BenchmarkResult>,
    report: IndicatorReport<f64>,
    non_finite_fields: Vec<&'static str>,
}

fn load_candles(path: &str) -> Result<Vec<Candle<f64>>, Box<dyn Error>> {
    let reader = BufReader::new(File::open(path)?);
    let data: OhlcvData = serde_json::from_reader(reader)?;
    let raw = data.ohlcv;

    let len = raw.close.len();
    if raw.open.len() != len || raw.high.len() != len || raw.low.len() != len {
        return Err(format!("{path}: open/high/low/close arrays differ in length").into());
    }
    if let Some(volume) = &raw.volume {
        if volume.len() != len {
            return Err(format!("{path}: volume array differs in length").into());
        }
    }

    let candles = (0..len)
        .map(|i| Candle {
            open: raw.open[i],
            high: raw.high[i],
            low: raw.low[i],
            close: raw.close[i],
            volume: raw.volume.as_ref().map(|v| v[i]),
        })
        .collect();
    Ok(candles)
}

/// Deterministic random-walk candles (LCG, fixed seed).
fn synthetic_candles(len: usize) -> Vec<Candle<f64>> {
    let mut state: u64 = 0x5DEE_CE66_D1CE_5EED;
    let mut next = move || {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (state >> 11) as f64 / (1u64 << 53) as f64
    };

    let mut candles = Vec::with_capacity(len);
    let mut close = 100.0_f64;
    for _ in 0..len {
        let open = close;
        close = (close + (next() - 0.5) * 2.0).max(0.01);
        let high = open.max(close) + next();
        let low = (open.min(close) - next()).max(0.0);
        let volume = 1_000.0 + next() * 9_000.0;
        candles.push(Candle::new(open, high, low, close).with_volume(volume));
    }
    candles
}

fn benchmark<F>(name: &str, iterations: usize, candles: usize, mut f: F) -> BenchmarkResult
where
    F: FnMut(),
{
    info!(name, "running");
    let mut times = Vec::with_capacity(iterations);

    for _ in 0..iterations {
        let start = Instant::now();
        f();
        times.push(start.elapsed().as_secs_f64() * 1000.0);
    }

    let total_time: f64 = times.iter().sum();
    let avg_time = if iterations > 0 {
        total_time / iterations as f64
    } else {
        0.0
    };
    let min_time = times.iter().copied().fold(f64::INFINITY, f64::min);
    let max_time = times.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let throughput = if avg_time > 0.0 {
        (candles as f64 / avg_time) * 1000.0
    } else {
        0.0
    };

    BenchmarkResult {
        name: name.to_string(),
        candles,
        iterations,
        total_time_ms: total_time,
        avg_time_ms: avg_time,
        min_time_ms: min_time,
        max_time_ms: max_time,
        throughput_candles_per_sec: throughput,
    }
}

fn load_config(path: Option<&String>) -> Result<ReportConfig, Box<dyn Error>> {
    let Some(path) = path else {
        return Ok(ReportConfig::default());
    };
    let config: ReportConfig = serde_json::from_reader(BufReader::new(File::open(path)?))?;
    Indicator::<f64>::validate(&config)?;
    info!(path = %path, "loaded report config");
    Ok(config)
}

fn run(args: &[String]) -> Result<(), Box<dyn Error>> {
    let (candles, rest) = match args {
        [_, flag, len, rest @ ..] if flag == "--synthetic" => {
            let len: usize = len.parse()?;
            info!(candles = len, "generating synthetic candles");
            (synthetic_candles(len), rest)
        }
        [_, path, rest @ ..] => {
            info!(path = %path, "loading candles");
            (load_candles(path)?, rest)
        }
        _ => return Err("missing data source".into()),
    };

    let iterations: usize = rest.first().ok_or("missing iterations")?.parse()?;
    let config = load_config(rest.get(1))?;

    let invalid = validate_candles(&candles).err();
    if let Some(err) = &invalid {
        warn!(error = %err, "input contains invalid candles; continuing");
    }

    let n = candles.len();
    let closes = closes(&candles);
    info!(candles = n, iterations, "starting benchmarks");

    let mut results = Vec::new();
    results.push(benchmark("SMA(20)", iterations, n, || {
        black_box(sma(&closes, 20));
    }));
    results.push(benchmark("SMA(200)", iterations, n, || {
        black_box(sma(&closes, 200));
    }));
    results.push(benchmark("EMA(26)", iterations, n, || {
        black_box(ema(&closes, 26));
    }));
    results.push(benchmark("RSI", iterations, n, || {
        black_box(rsi(&closes, config.rsi.period));
    }));
    results.push(benchmark("Stochastic", iterations, n, || {
        black_box(config.stochastic.compute(&candles));
    }));
    results.push(benchmark("CCI", iterations, n, || {
        black_box(cci(&candles, config.cci.period));
    }));
    results.push(benchmark("MACD", iterations, n, || {
        black_box(macd_with(&closes, config.macd.fast, config.macd.slow, config.macd.signal));
    }));
    results.push(benchmark("Bollinger", iterations, n, || {
        black_box(config.bollinger.compute(&candles));
    }));
    results.push(benchmark("ATR", iterations, n, || {
        black_box(atr(&candles, config.atr.period));
    }));
    results.push(benchmark("ADX", iterations, n, || {
        black_box(adx_with(&candles, &config.adx));
    }));
    results.push(benchmark("VWAP", iterations, n, || {
        black_box(vwap(&candles));
    }));
    results.push(benchmark("Report", iterations, n, || {
        black_box(analyze_sequence_with(&candles, &config));
    }));

    let report = analyze_sequence_with(&candles, &config);
    let output = BenchmarkOutput {
        results,
        non_finite_fields: report.non_finite_fields(),
        report,
    };
    println!("{}", serde_json::to_string(&output)?);
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if let Err(err) = run(&args) {
        let program = args.first().map_or("ohlc_ta_bench", String::as_str);
        eprintln!("error: {err}");
        eprintln!("Usage: {program} <data_file> <iterations> [config_file]");
        eprintln!("       {program} --synthetic <candles> <iterations> [config_file]");
        std::process::exit(1);
    }
}
