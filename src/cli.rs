//! Command line interface of randread

/* crate use */
use rand::SeedableRng;

/* project use */
use crate::error;
use crate::format::Format;
use crate::params::{GenerationParameters, ReadRequest};
use crate::quality;

#[derive(clap::Parser, Debug)]
#[clap(
    name = "randread",
    version = "0.1",
    about = "Generate random fasta, fastq or raw reads"
)]
pub struct Command {
    #[clap(
        short = 'd',
        long = "dist",
        default_value = "u:0:93",
        help = "Distribution of fastq quality scores"
    )]
    pub score_dist: String,

    #[clap(
        short = 'f',
        long = "format",
        default_value = "fastq",
        help = "Format of the file to generate: fasta, fastq or raw"
    )]
    pub format: String,

    #[clap(short = 'l', long = "readlen", default_value = "100", help = "Read length")]
    pub read_len: usize,

    #[clap(
        short = 'm',
        long = "mixcase",
        help = "Generate sequences with a mix of upper and lower case characters"
    )]
    pub mix_case: bool,

    #[clap(
        short = 'n',
        long = "numreads",
        default_value = "1",
        help = "Number of reads to generate"
    )]
    pub num_reads: u64,

    #[clap(
        short = 'p',
        long = "pbase",
        default_value = "1.0",
        allow_hyphen_values = true,
        help = "Probability that a base in a sequence is A, C, G or T"
    )]
    pub prob_base: f64,

    #[clap(short = 'r', long = "rna", help = "Generate U in place of T")]
    pub seq_rna: bool,

    #[clap(
        short = 's',
        long = "seed",
        help = "Set random seed, same seed generate same reads. By default reads are random on each run"
    )]
    pub seed: Option<u64>,

    #[clap(
        short = 'u',
        long = "iupac",
        help = "Output any IUPAC nucleotide character instead of just N for each non-ACGT character"
    )]
    pub all_iupac: bool,

    #[clap(
        short = 'i',
        long = "start-index",
        default_value = "1",
        help = "Index of the first read"
    )]
    pub start_index: u64,

    #[clap(short = 'o', long = "output", help = "Output path, default stdout")]
    pub output: Option<std::path::PathBuf>,

    #[clap(
        short = 'v',
        long = "verbosity",
        parse(from_occurrences),
        help = "Verbosity level, repeat to increase"
    )]
    pub verbosity: usize,
}

impl Command {
    pub fn generation_parameters(&self) -> error::Result<GenerationParameters> {
        GenerationParameters::new(self.prob_base, self.seq_rna, self.all_iupac, self.mix_case)
    }

    pub fn read_request(&self) -> error::Result<ReadRequest> {
        ReadRequest::new(self.num_reads, self.read_len, self.start_index)
    }

    pub fn quality(&self) -> error::Result<Box<dyn quality::QualityGenerator>> {
        quality::from_spec(&self.score_dist)
    }

    pub fn format(&self) -> error::Result<Format> {
        self.format.parse()
    }

    /// Build rng from seed or from system entropy
    pub fn rng(&self) -> rand::rngs::StdRng {
        match self.seed {
            Some(seed) => rand::rngs::StdRng::seed_from_u64(seed),
            None => rand::rngs::StdRng::from_entropy(),
        }
    }

    /// Buffered writer on output file or stdout
    pub fn output(&self) -> error::Result<std::io::BufWriter<Box<dyn std::io::Write>>> {
        let writer: Box<dyn std::io::Write> = match &self.output {
            Some(path) => Box::new(
                std::fs::File::create(path)
                    .map_err(|source| error::Error::CreateOutput { source })?,
            ),
            None => Box::new(std::io::stdout()),
        };

        Ok(std::io::BufWriter::new(writer))
    }

    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbosity {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
