//! Uniform random numbers in `[0, 1)` for button placement and background hearts.

pub trait RandomSource {
    /// Next value, uniformly distributed in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

/// Backed by `crypto.getRandomValues` in the browser (getrandom's `js` feature)
/// and by the OS generator on native targets.
#[derive(Default)]
pub struct BrowserRng;

impl RandomSource for BrowserRng {
    fn next_unit(&mut self) -> f64 {
        let mut buf = [0u8; 8];
        if getrandom::getrandom(&mut buf).is_err() {
            log::warn!("getrandom failed; falling back to midpoint");
            return 0.5;
        }
        unit_from_bits(u64::from_le_bytes(buf))
    }
}

/// Map the top 53 bits onto `[0, 1)`; the result can never reach 1.0.
pub fn unit_from_bits(bits: u64) -> f64 {
    (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
}

/// Replays a fixed list of values, cycling. Handy for deterministic layouts.
pub struct SequenceRng {
    values: Vec<f64>,
    idx: usize,
}

impl SequenceRng {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, idx: 0 }
    }
}

impl RandomSource for SequenceRng {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let v = self.values[self.idx % self.values.len()];
        self.idx = self.idx.wrapping_add(1);
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_from_bits_stays_below_one() {
        assert_eq!(unit_from_bits(0), 0.0);
        let top = unit_from_bits(u64::MAX);
        assert!(top < 1.0 && top > 0.999_999);
    }

    #[test]
    fn browser_rng_in_range() {
        let mut rng = BrowserRng;
        for _ in 0..256 {
            let v = rng.next_unit();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn sequence_cycles() {
        let mut rng = SequenceRng::new(vec![0.1, 0.9]);
        assert_eq!(rng.next_unit(), 0.1);
        assert_eq!(rng.next_unit(), 0.9);
        assert_eq!(rng.next_unit(), 0.1);
        assert_eq!(SequenceRng::new(vec![]).next_unit(), 0.0);
    }
}
