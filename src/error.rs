#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("randread primary base probability can't be NaN")]
    ProbabilityIsNan,

    #[error("randread can't generate less than 1 read: {count}")]
    ReadCount { count: u64 },

    #[error("randread can't generate reads with less than 1 base: {length}")]
    ReadLength { length: usize },

    #[error("randread read index must start at 1 or more: {start}")]
    StartIndex { start: u64 },

    #[error("randread read index overflow: start {start} plus {count} reads is too large")]
    IndexOverflow { start: u64, count: u64 },

    #[error("randread can't find quality generator for type: {kind}")]
    UnknownDistribution { kind: String },

    #[error("Uniform generator: received more than 2 parameters: {params}")]
    TooManyQualityParameters { params: String },

    #[error("Quality parameter '{value}' isn't an unsigned integer {source}")]
    QualityNotAnInteger {
        value: String,
        source: std::num::ParseIntError,
    },

    #[error("Quality value {value} is larger than maximal phred score {max}")]
    QualityTooHigh { value: u8, max: u8 },

    #[error("Uniform generator: low bound {low} is larger than high bound {high}")]
    QualityRangeInverted { low: u8, high: u8 },

    #[error("Unrecognized sequence format: {name}: must be fasta, fastq or raw")]
    UnknownFormat { name: String },

    #[error("randread can't create output file {source}")]
    CreateOutput { source: std::io::Error },

    #[error("randread failled to write records {source}")]
    WriteOutput { source: std::io::Error },
}

pub type Result<T> = std::result::Result<T, Error>;
