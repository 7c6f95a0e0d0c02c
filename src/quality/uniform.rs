//! Uniform quality distribution.

/* crate use */
use rand::Rng;

/* project use */
use crate::error;
use crate::quality::{QualityGenerator, MAX_PHRED, PHRED_OFFSET};

/// Range of ascii quality value, low is include high is exclude
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualityRange {
    low: u8,
    high: u8,
}

impl QualityRange {
    /// Parse `low[:high]` phred values, a single value is used for both bounds
    pub fn from_params(params: &str) -> error::Result<Self> {
        let tokens: Vec<&str> = params.split(':').map(str::trim).collect();

        let (low, high) = match tokens.as_slice() {
            [value] => {
                let value = parse_phred(value)?;
                (value, value)
            }
            [low, high] => (parse_phred(low)?, parse_phred(high)?),
            _ => {
                return Err(error::Error::TooManyQualityParameters {
                    params: params.to_string(),
                })
            }
        };

        if low > high {
            return Err(error::Error::QualityRangeInverted { low, high });
        }

        Ok(Self {
            low: low + PHRED_OFFSET,
            high: high + PHRED_OFFSET,
        })
    }

    /// Lowest ascii value
    pub fn low(&self) -> u8 {
        self.low
    }

    /// Ascii value after the highest one
    pub fn high(&self) -> u8 {
        self.high
    }
}

fn parse_phred(value: &str) -> error::Result<u8> {
    let phred = value
        .parse::<u8>()
        .map_err(|source| error::Error::QualityNotAnInteger {
            value: value.to_string(),
            source,
        })?;

    if phred > MAX_PHRED {
        Err(error::Error::QualityTooHigh {
            value: phred,
            max: MAX_PHRED,
        })
    } else {
        Ok(phred)
    }
}

/// Each quality value is drawn uniformly in [QualityRange]
#[derive(Debug, Clone)]
pub struct Uniform {
    range: QualityRange,
}

impl Uniform {
    pub fn new(params: &str) -> error::Result<Self> {
        Ok(Self::with_range(QualityRange::from_params(params)?))
    }

    pub fn with_range(range: QualityRange) -> Self {
        Self { range }
    }

    pub fn range(&self) -> &QualityRange {
        &self.range
    }
}

impl QualityGenerator for Uniform {
    fn quality_string(&self, length: usize, rng: &mut dyn rand::RngCore) -> String {
        let (low, high) = (self.range.low, self.range.high);

        // empty range, all value are low
        if low == high {
            return std::iter::repeat(low as char).take(length).collect();
        }

        (0..length)
            .map(|_| rng.gen_range(low..high) as char)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::SeedableRng;

    #[test]
    fn range_two_values() {
        let range = QualityRange::from_params("0:93").unwrap();

        assert_eq!(range.low(), 33);
        assert_eq!(range.high(), 126);
    }

    #[test]
    fn range_broadcast() {
        let range = QualityRange::from_params("40").unwrap();

        assert_eq!(range.low(), 73);
        assert_eq!(range.high(), 73);
    }

    #[test]
    fn range_errors() {
        assert!(matches!(
            QualityRange::from_params("0:10:20"),
            Err(error::Error::TooManyQualityParameters { .. })
        ));
        assert!(matches!(
            QualityRange::from_params("a:10"),
            Err(error::Error::QualityNotAnInteger { .. })
        ));
        assert!(matches!(
            QualityRange::from_params("-1:10"),
            Err(error::Error::QualityNotAnInteger { .. })
        ));
        assert!(matches!(
            QualityRange::from_params("0:94"),
            Err(error::Error::QualityTooHigh { value: 94, .. })
        ));
        assert!(matches!(
            QualityRange::from_params("30:10"),
            Err(error::Error::QualityRangeInverted { low: 30, high: 10 })
        ));
    }

    #[test]
    fn constant_quality() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);

        let generator = Uniform::new("0:0").unwrap();
        assert_eq!(generator.quality_string(20, &mut rng), "!".repeat(20));

        let generator = Uniform::new("0").unwrap();
        assert_eq!(generator.quality_string(3, &mut rng), "!!!");
    }

    #[test]
    fn uniform_bounds() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        let generator = Uniform::new("10:12").unwrap();

        let quality = generator.quality_string(1_000, &mut rng);

        assert_eq!(quality.len(), 1_000);
        assert!(quality.bytes().all(|q| q == 43 || q == 44));
        assert!(quality.bytes().any(|q| q == 43));
        assert!(quality.bytes().any(|q| q == 44));
    }
}
