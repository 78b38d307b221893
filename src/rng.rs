// rng.rs - xorshift32 random source
//
// Deterministic for a given seed so scenes can be rebuilt in tests.

const FALLBACK_SEED: u32 = 0xDEADBEEF;

#[derive(Debug, Clone)]
pub struct Rng {
    state: u32,
}

impl Rng {
    /// Zero is a fixpoint of xorshift and is replaced.
    pub fn new(seed: u32) -> Self {
        Self { state: if seed == 0 { FALLBACK_SEED } else { seed } }
    }

    /// Seed from the browser's `Math.random`.
    pub fn from_browser() -> Self {
        Self::new((js_sys::Math::random() * u32::MAX as f64) as u32)
    }

    /// Uniform in [0, 1)
    #[inline(always)]
    pub fn next_f32(&mut self) -> f32 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        (self.state >> 8) as f32 * (1.0 / 16777216.0)
    }

    /// Uniform in [lo, hi)
    #[inline]
    pub fn range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + (hi - lo) * self.next_f32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_in_unit_interval() {
        let mut rng = Rng::new(7);
        for _ in 0..10_000 {
            let v = rng.next_f32();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn zero_seed_still_moves() {
        let mut rng = Rng::new(0);
        let a = rng.next_f32();
        let b = rng.next_f32();
        assert_ne!(a, b);
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = Rng::new(42);
        let mut b = Rng::new(42);
        for _ in 0..100 {
            assert_eq!(a.range(-5.0, 5.0), b.range(-5.0, 5.0));
        }
    }
}
