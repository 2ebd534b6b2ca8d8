//! Writes `weather-sample.txt`: a month of synthetic daily temperature
//! observations in the NOAA-style layout the viewer and tests expect —
//! 8 metadata lines (the last one blank), a header, 30 data rows.

use std::fmt::Write as _;

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

fn main() -> anyhow::Result<()> {
    let mut rng = SimpleRng::new(42);

    let mut out = String::new();
    out.push_str(
        "# Data file contents: Daily temperatures (mean, min, max) for Kumpula, Helsinki\n\
         #                     for June 1-30, 2016\n\
         # Data source: https://www.ncdc.noaa.gov/cdo-web/search?datasetid=GHCND\n\
         # Data processing: Extracted temperatures from raw data file, converted to\n\
         #                  comma-separated format\n\
         #\n\
         # Generated sample data (deterministic seed 42)\n\
         \n",
    );
    out.push_str("YEARMODA,TEMP,MAX,MIN\n");

    for day in 1..=30u32 {
        // warm mid-month bump over a 58 °F June baseline
        let season = (day as f64 / 30.0 * std::f64::consts::PI).sin() * 8.0;
        let temp = rng.gauss(58.0 + season, 3.0);
        let max = temp + rng.gauss(7.0, 2.0).abs();
        let min = temp - rng.gauss(7.0, 2.0).abs();

        write!(out, "201606{day:02},{temp:.1},{max:.1},")?;
        // a couple of gaps to exercise missing-value handling
        if day == 11 || day == 23 {
            out.push_str("NaN\n");
        } else {
            writeln!(out, "{min:.1}")?;
        }
    }

    let output_path = "weather-sample.txt";
    std::fs::write(output_path, &out)?;
    println!("Wrote 30 days of observations to {output_path}");
    Ok(())
}
