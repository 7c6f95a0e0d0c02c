//! Generate random fasta, fastq or raw reads.
//!
//! Bases are sampled in a primary alphabet (ACGT or ACGU) with a probability and in
//! a secondary alphabet (N or all IUPAC symbols) otherwise, both can mix lower case.
//! Fastq quality are generated by a [quality::QualityGenerator] select by a spec like `u:0:93`.
//!
//! ```
//! use rand::SeedableRng;
//! use randread::format::{Format, RecordRenderer, Renderer};
//!
//! let params = randread::GenerationParameters::new(0.9, false, true, false).unwrap();
//! let request = randread::ReadRequest::new(2, 50, 1).unwrap();
//! let renderer = Renderer::new(
//!     Format::Fastq,
//!     randread::SequenceGenerator::new(&params),
//!     randread::quality::from_spec("u:0:40").unwrap(),
//! );
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! for record in renderer.generate(&request, &mut rng) {
//!     assert!(record.starts_with("@Seq-"));
//! }
//! ```

/* mod declaration */
pub mod alphabet;
pub mod cli;
pub mod error;
pub mod format;
pub mod params;
pub mod quality;
pub mod sampler;
pub mod sequence;

pub use alphabet::Alphabet;
pub use params::{GenerationParameters, ReadRequest};
pub use sampler::BaseSampler;
pub use sequence::SequenceGenerator;
