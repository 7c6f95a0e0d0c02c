//! Build random sequences from a [BaseSampler].

/* crate use */
use rand::Rng;

/* project use */
use crate::params::GenerationParameters;
use crate::sampler::BaseSampler;

/// Generate sequences, each base is sampled independently
#[derive(Debug, Clone)]
pub struct SequenceGenerator {
    sampler: BaseSampler,
}

impl SequenceGenerator {
    pub fn new(params: &GenerationParameters) -> Self {
        Self::with_sampler(BaseSampler::new(params))
    }

    pub fn with_sampler(sampler: BaseSampler) -> Self {
        Self { sampler }
    }

    pub fn sampler(&self) -> &BaseSampler {
        &self.sampler
    }

    /// Generate a sequence of `length` bases
    pub fn next_sequence<R>(&self, length: usize, rng: &mut R) -> String
    where
        R: Rng + ?Sized,
    {
        (0..length)
            .map(|_| self.sampler.sample(rng) as char)
            .collect::<String>()
    }

    /// Lazy iterator over `count` sequences of `length` bases, for library users that
    /// need bare reads without record formatting
    pub fn sequences<'a, R>(&'a self, count: u64, length: usize, rng: &'a mut R) -> Sequences<'a, R>
    where
        R: Rng + ?Sized,
    {
        Sequences {
            generator: self,
            rng,
            remain: count,
            length,
        }
    }
}

/// Iterator produce by [SequenceGenerator::sequences]
pub struct Sequences<'a, R>
where
    R: Rng + ?Sized,
{
    generator: &'a SequenceGenerator,
    rng: &'a mut R,
    remain: u64,
    length: usize,
}

impl<'a, R> Iterator for Sequences<'a, R>
where
    R: Rng + ?Sized,
{
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remain == 0 {
            None
        } else {
            self.remain -= 1;
            Some(self.generator.next_sequence(self.length, &mut *self.rng))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::SeedableRng;

    #[test]
    fn sequence_length() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        let generator = SequenceGenerator::new(&GenerationParameters::default());

        for length in [1, 5, 150, 1_000] {
            let seq = generator.next_sequence(length, &mut rng);

            assert_eq!(seq.len(), length);
            assert!(seq.bytes().all(|b| b"ACGT".contains(&b)));
        }
    }

    #[test]
    fn sequences() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        let generator = SequenceGenerator::new(&GenerationParameters::default());

        let seqs: Vec<String> = generator.sequences(10, 50, &mut rng).collect();

        assert_eq!(seqs.len(), 10);
        assert!(seqs.iter().all(|s| s.len() == 50));
        assert_ne!(seqs[0], seqs[1]);
    }

    #[test]
    fn restartable_and_deterministic() {
        let generator =
            SequenceGenerator::new(&GenerationParameters::new(0.8, false, true, true).unwrap());

        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        let first: Vec<String> = generator.sequences(5, 30, &mut rng).collect();

        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        let second: Vec<String> = generator.sequences(5, 30, &mut rng).collect();

        assert_eq!(first, second);
    }

    #[test]
    fn mix_case() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        let generator =
            SequenceGenerator::new(&GenerationParameters::new(1.0, false, false, true).unwrap());

        let seq = generator.next_sequence(1_000, &mut rng);

        assert!(seq.bytes().any(|b| b.is_ascii_lowercase()));
        assert!(seq.bytes().any(|b| b.is_ascii_uppercase()));
    }
}
