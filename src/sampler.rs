//! Draw one symbol from an alphabet.

/* crate use */
use rand::Rng;

/* project use */
use crate::alphabet::Alphabet;
use crate::params::GenerationParameters;

/// Sample a symbol in primary alphabet with probability p and in secondary otherwise.
///
/// One uniform draw `r` in [0, 1) choose partition and symbol. If `r < p` symbol is
/// `primary[(p - r) / p * len]`, else symbol is `secondary[(r - p) / (1 - p) * len]`.
#[derive(Debug, Clone)]
pub struct BaseSampler {
    alphabet: Alphabet,
    probability: f64,
}

impl BaseSampler {
    /// Build sampler and his alphabet from parameters
    pub fn new(params: &GenerationParameters) -> Self {
        Self::with_alphabet(Alphabet::new(params), params)
    }

    /// Build sampler from an existing alphabet, probability comes from checked parameters
    pub fn with_alphabet(alphabet: Alphabet, params: &GenerationParameters) -> Self {
        Self {
            alphabet,
            probability: params.primary_base_probability(),
        }
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// Get a random symbol
    pub fn sample<R>(&self, rng: &mut R) -> u8
    where
        R: Rng + ?Sized,
    {
        self.symbol(rng.gen::<f64>())
    }

    /// Map a draw in [0, 1) on a symbol
    pub fn symbol(&self, draw: f64) -> u8 {
        let p = self.probability;

        if draw < p {
            pick(self.alphabet.primary(), (p - draw) / p)
        } else {
            pick(
                self.alphabet.secondary(),
                (draw - p) / (1.0 - p).max(f64::MIN_POSITIVE),
            )
        }
    }
}

/// Select symbol at position ratio * len, index is clamped on last symbol
fn pick(symbols: &[u8], ratio: f64) -> u8 {
    let index = (ratio * symbols.len() as f64) as usize;

    symbols[index.min(symbols.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::SeedableRng;

    fn sampler(p: f64, rna: bool, iupac: bool, mix_case: bool) -> BaseSampler {
        BaseSampler::new(&GenerationParameters::new(p, rna, iupac, mix_case).unwrap())
    }

    #[test]
    fn symbol_mapping() {
        let s = sampler(0.5, false, false, false);

        // (0.5 - r) / 0.5 * 4
        assert_eq!(s.symbol(0.49), b'A');
        assert_eq!(s.symbol(0.3), b'C');
        assert_eq!(s.symbol(0.2), b'G');
        assert_eq!(s.symbol(0.1), b'T');

        assert_eq!(s.symbol(0.5), b'N');
        assert_eq!(s.symbol(0.99), b'N');
    }

    #[test]
    fn index_clamped() {
        let s = sampler(0.5, false, false, false);
        assert_eq!(s.symbol(0.0), b'T');

        let s = sampler(0.0, false, true, false);
        assert_eq!(s.symbol(1.0 - f64::EPSILON), b'-');
        assert_eq!(s.symbol(1.0), b'-');
    }

    #[test]
    fn custom_alphabet() {
        let alphabet = Alphabet::new(&GenerationParameters::new(1.0, true, true, false).unwrap());

        let s = BaseSampler::with_alphabet(
            alphabet.clone(),
            &GenerationParameters::new(2.0, false, false, false).unwrap(),
        );
        assert_eq!(s.probability(), 1.0);
        assert_eq!(s.alphabet(), &alphabet);
        assert_eq!(s.symbol(0.99), b'A');

        let s = BaseSampler::with_alphabet(
            alphabet,
            &GenerationParameters::new(-3.0, false, false, false).unwrap(),
        );
        assert_eq!(s.probability(), 0.0);
        assert_eq!(s.symbol(0.0), b'R');
        assert_eq!(s.symbol(0.99), b'-');
    }

    #[test]
    fn only_primary() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        let s = sampler(1.0, false, true, true);

        for _ in 0..10_000 {
            assert!(s.alphabet().primary().contains(&s.sample(&mut rng)));
        }
    }

    #[test]
    fn only_secondary() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        let s = sampler(0.0, false, true, true);

        for _ in 0..10_000 {
            assert!(s.alphabet().secondary().contains(&s.sample(&mut rng)));
        }
    }

    #[test]
    fn primary_fraction() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        let s = sampler(0.3, false, true, false);

        let nb_draw = 100_000;
        let nb_primary = (0..nb_draw)
            .filter(|_| s.alphabet().primary().contains(&s.sample(&mut rng)))
            .count();

        let fraction = nb_primary as f64 / nb_draw as f64;
        assert!((fraction - 0.3).abs() < 0.01, "fraction {}", fraction);
    }

    #[test]
    fn all_symbols_reached() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        let s = sampler(0.5, true, true, true);

        let mut seen = std::collections::HashSet::new();
        for _ in 0..100_000 {
            seen.insert(s.sample(&mut rng));
        }

        for symbol in s.alphabet().primary().iter().chain(s.alphabet().secondary()) {
            assert!(seen.contains(symbol), "{} never drawn", *symbol as char);
        }
        assert_eq!(seen.len(), 8 + 24);
    }

    #[test]
    fn upper_case_only() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        let s = sampler(0.5, false, true, false);

        for _ in 0..10_000 {
            assert!(!s.sample(&mut rng).is_ascii_lowercase());
        }
    }
}
