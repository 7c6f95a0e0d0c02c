//! Quality string generators.
//!
//! A distribution is describe by a spec `<kind>:<params>`, kind select the
//! [QualityGenerator] implementation and params are forward to it.

/* mod declaration */
pub mod uniform;

pub use uniform::{QualityRange, Uniform};

/* project use */
use crate::error;

/// Offset between phred score and ascii value
pub const PHRED_OFFSET: u8 = 33;

/// Maximal phred score, keep quality in printable ascii
pub const MAX_PHRED: u8 = 93;

/// Default quality distribution spec
pub const DEFAULT_SPEC: &str = "u:0:93";

/// Capability of any quality distribution
pub trait QualityGenerator: std::fmt::Debug {
    /// Generate a quality string of `length` characters
    fn quality_string(&self, length: usize, rng: &mut dyn rand::RngCore) -> String;
}

/// Build quality generator match with spec
pub fn from_spec(spec: &str) -> error::Result<Box<dyn QualityGenerator>> {
    let (kind, params) = match spec.split_once(':') {
        Some((kind, params)) => (kind.trim(), params.trim()),
        None => (spec.trim(), ""),
    };

    match kind {
        "u" => Ok(Box::new(Uniform::new(params)?)),
        _ => Err(error::Error::UnknownDistribution {
            kind: kind.to_string(),
        }),
    }
}
