//! Parameters of one generation run.

/* project use */
use crate::error;

/// Parameters that drive base sampling, build once and never mutate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParameters {
    primary_base_probability: f64,
    use_rna: bool,
    use_full_iupac: bool,
    mix_case: bool,
}

impl GenerationParameters {
    /// Create parameters, probability is clamped in [0, 1].
    pub fn new(
        primary_base_probability: f64,
        use_rna: bool,
        use_full_iupac: bool,
        mix_case: bool,
    ) -> error::Result<Self> {
        if primary_base_probability.is_nan() {
            return Err(error::Error::ProbabilityIsNan);
        }

        let clamped = primary_base_probability.clamp(0.0, 1.0);
        if clamped != primary_base_probability {
            log::warn!(
                "Primary base probability {} clamped to {}",
                primary_base_probability,
                clamped
            );
        }

        Ok(Self {
            primary_base_probability: clamped,
            use_rna,
            use_full_iupac,
            mix_case,
        })
    }

    /// Probability that a base is taken in primary alphabet
    pub fn primary_base_probability(&self) -> f64 {
        self.primary_base_probability
    }

    /// Generate U in place of T
    pub fn use_rna(&self) -> bool {
        self.use_rna
    }

    /// Use all IUPAC symbols in place of N
    pub fn use_full_iupac(&self) -> bool {
        self.use_full_iupac
    }

    /// Add lower case symbols
    pub fn mix_case(&self) -> bool {
        self.mix_case
    }
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            primary_base_probability: 1.0,
            use_rna: false,
            use_full_iupac: false,
            mix_case: false,
        }
    }
}

/// How many reads, how long, and the index of the first one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadRequest {
    count: u64,
    length: usize,
    start_index: u64,
}

impl ReadRequest {
    /// Build a request, count, length and start_index must be strictly positive
    /// and index of last read must fit in u64
    pub fn new(count: u64, length: usize, start_index: u64) -> error::Result<Self> {
        if count < 1 {
            return Err(error::Error::ReadCount { count });
        }

        if length < 1 {
            return Err(error::Error::ReadLength { length });
        }

        if start_index < 1 {
            return Err(error::Error::StartIndex { start: start_index });
        }

        start_index
            .checked_add(count)
            .ok_or(error::Error::IndexOverflow {
                start: start_index,
                count,
            })?;

        Ok(Self {
            count,
            length,
            start_index,
        })
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn start_index(&self) -> u64 {
        self.start_index
    }

    /// Range of read index covered by this request, [ReadRequest::new] reject end overflow
    pub fn indexes(&self) -> std::ops::Range<u64> {
        self.start_index..self.start_index + self.count
    }
}
