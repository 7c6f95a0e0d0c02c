//! Build symbols sets used by sampler.

/* project use */
use crate::params::GenerationParameters;

const DNA: [u8; 4] = [b'A', b'C', b'G', b'T'];
const RNA: [u8; 4] = [b'A', b'C', b'G', b'U'];

const UNKNOWN: [u8; 1] = [b'N'];
const IUPAC: [u8; 13] = [
    b'R', b'Y', b'S', b'W', b'K', b'M', b'B', b'D', b'H', b'V', b'N', b'.', b'-',
];

/// Primary and secondary symbols, order matter sampler map a float on index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    primary: Vec<u8>,
    secondary: Vec<u8>,
}

impl Alphabet {
    /// Build alphabet match with parameters
    pub fn new(params: &GenerationParameters) -> Self {
        let mut primary = if params.use_rna() {
            RNA.to_vec()
        } else {
            DNA.to_vec()
        };

        let mut secondary = if params.use_full_iupac() {
            IUPAC.to_vec()
        } else {
            UNKNOWN.to_vec()
        };

        if params.mix_case() {
            add_lowercase(&mut primary);
            add_lowercase(&mut secondary);
        }

        log::debug!(
            "Alphabet primary: {} secondary: {}",
            String::from_utf8_lossy(&primary),
            String::from_utf8_lossy(&secondary)
        );

        Self { primary, secondary }
    }

    /// Symbols selected with primary base probability
    pub fn primary(&self) -> &[u8] {
        &self.primary
    }

    /// Symbols selected otherwise
    pub fn secondary(&self) -> &[u8] {
        &self.secondary
    }
}

/// Append lower case version of each alphabetic symbol after all upper case
fn add_lowercase(symbols: &mut Vec<u8>) {
    let lower: Vec<u8> = symbols
        .iter()
        .filter(|s| s.is_ascii_alphabetic())
        .map(|s| s.to_ascii_lowercase())
        .collect();

    symbols.extend(lower);
}
