use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

/// Fields per raw record; the state code sits in the last one.
const FIELDS: usize = 47;
const DATA_FIELD: usize = 4;
const STATE_FIELD: usize = 46;
const HEADER_LINES: usize = 9;

#[derive(Parser, Debug)]
#[command(about = "Write a synthetic raw DDC2 log for raw_to_hist")]
struct Args {
    /// Output path
    #[arg(long, default_value = "sample_raw.txt")]
    out: PathBuf,

    /// Records in the acquisition run (state 3)
    #[arg(long, default_value_t = 2000)]
    run_len: usize,

    /// Baseline ADC count
    #[arg(long, default_value_t = 8188.0)]
    baseline: f64,

    /// Noise sigma in ADC counts
    #[arg(long, default_value_t = 1.5)]
    sigma: f64,

    #[arg(long, default_value_t = 42)]
    seed: u64,
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// One comma-space record: a frame counter, the ADC value and the state code.
fn record(frame: usize, adc: i64, state: i64) -> String {
    let mut fields: Vec<String> = (0..FIELDS).map(|_| "0".to_string()).collect();
    fields[0] = frame.to_string();
    fields[DATA_FIELD] = adc.to_string();
    fields[STATE_FIELD] = state.to_string();
    fields.join(", ")
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut rng = SimpleRng::new(args.seed);

    // State sequence: header, idle, start (2), run (3), stop (4), trailer.
    let mut states: Vec<i64> = Vec::new();
    states.extend(std::iter::repeat(0).take(HEADER_LINES));
    states.extend(std::iter::repeat(1).take(20));
    states.push(2);
    states.extend(std::iter::repeat(3).take(args.run_len));
    states.push(4);
    states.extend(std::iter::repeat(0).take(10));

    let file = File::create(&args.out)
        .with_context(|| format!("creating {}", args.out.display()))?;
    let mut out = BufWriter::new(file);

    for (frame, &state) in states.iter().enumerate() {
        let adc = rng.gauss(args.baseline, args.sigma).round() as i64;
        writeln!(out, "{}", record(frame, adc, state))?;
    }
    out.flush()?;

    println!(
        "Wrote {} records ({} in run) to {}",
        states.len(),
        args.run_len,
        args.out.display()
    );
    Ok(())
}
