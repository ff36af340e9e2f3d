use std::fs::File;
use std::io::{BufWriter, Write};

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

/// Saturating learning curve: 0 at the start, approaching 1.
fn progress(iter: u64, scale: f64) -> f64 {
    1.0 - (-(iter as f64) / scale).exp()
}

fn main() {
    let mut rng = SimpleRng::new(42);
    let iterations = 500u64;

    let output_path = "sample_training.log";
    let file = File::create(output_path).expect("Failed to create output file");
    let mut out = BufWriter::new(file);

    writeln!(out, "[trainer] starting run: env=DriveTrack-v2 agent=PPO").expect("write failed");

    for iter in 1..=iterations {
        let p = progress(iter, 150.0);

        let reward = -1.0 + 2.5 * p + rng.gauss(0.0, 0.35);
        let ret = -20.0 + 60.0 * p + rng.gauss(0.0, 6.0);
        let value = -5.0 + 18.0 * p + rng.gauss(0.0, 1.5);
        let length = (40.0 + 360.0 * p + rng.gauss(0.0, 30.0)).max(1.0);

        writeln!(
            out,
            "Iter: {iter} | Avg Reward: {reward:.4} | Avg Return: {ret:.4} | Avg Value: {value:.4} | Avg Episode Length: {length:.1}"
        )
        .expect("write failed");

        // Unrelated noise the viewer must skip.
        if iter % 50 == 0 {
            writeln!(out, "[trainer] checkpoint saved: ckpt_{iter:05}.pt").expect("write failed");
        }
        if rng.next_f64() < 0.02 {
            writeln!(out, "[env] WARN episode truncated (timeout)").expect("write failed");
        }
    }

    out.flush().expect("Failed to flush output file");

    println!("Wrote {iterations} iterations to {output_path}");
}
