//! Render generated reads as fasta, fastq or raw records.

/* mod declaration */
pub mod fasta;
pub mod fastq;
pub mod raw;

pub use fasta::Fasta;
pub use fastq::Fastq;
pub use raw::Raw;

/* std use */
use std::io::Write;

/* crate use */
use rand::Rng;

/* project use */
use crate::error;
use crate::params::ReadRequest;
use crate::quality::QualityGenerator;
use crate::sequence::SequenceGenerator;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Fasta,
    Fastq,
    Raw,
}

impl Format {
    /// String insert between two records
    pub fn separator(&self) -> &'static str {
        match self {
            Format::Fasta | Format::Fastq => "\n",
            Format::Raw => "\n\n",
        }
    }
}

impl std::str::FromStr for Format {
    type Err = error::Error;

    fn from_str(name: &str) -> error::Result<Self> {
        match name.trim().to_lowercase().as_str() {
            "fasta" => Ok(Format::Fasta),
            "fastq" => Ok(Format::Fastq),
            "raw" => Ok(Format::Raw),
            _ => Err(error::Error::UnknownFormat {
                name: name.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Fasta => write!(f, "fasta"),
            Format::Fastq => write!(f, "fastq"),
            Format::Raw => write!(f, "raw"),
        }
    }
}

/// Trait shared by all record renderers
pub trait RecordRenderer {
    /// Build text of record `index` with a sequence of `length` bases
    fn render<R>(&self, index: u64, length: usize, rng: &mut R) -> String
    where
        R: Rng;

    /// Output format of renderer
    fn format(&self) -> Format;

    /// Lazy iterator over records of request
    fn generate<'a, R>(&'a self, request: &ReadRequest, rng: &'a mut R) -> Records<'a, Self, R>
    where
        Self: Sized,
        R: Rng,
    {
        Records {
            renderer: self,
            rng,
            indexes: request.indexes(),
            length: request.length(),
        }
    }
}

/// Iterator produce by [RecordRenderer::generate]
pub struct Records<'a, G, R>
where
    G: RecordRenderer,
    R: Rng,
{
    renderer: &'a G,
    rng: &'a mut R,
    indexes: std::ops::Range<u64>,
    length: usize,
}

impl<'a, G, R> Iterator for Records<'a, G, R>
where
    G: RecordRenderer,
    R: Rng,
{
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.indexes.next()?;

        Some(self.renderer.render(index, self.length, &mut *self.rng))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indexes.size_hint()
    }
}

/// Renderer selected at runtime by [Format]
#[derive(Debug)]
pub enum Renderer {
    Fasta(Fasta),
    Fastq(Fastq),
    Raw(Raw),
}

impl Renderer {
    /// Build renderer, quality generator is only used by fastq
    pub fn new(
        format: Format,
        sequence: SequenceGenerator,
        quality: Box<dyn QualityGenerator>,
    ) -> Self {
        match format {
            Format::Fasta => Renderer::Fasta(Fasta::new(sequence)),
            Format::Fastq => Renderer::Fastq(Fastq::new(sequence, quality)),
            Format::Raw => Renderer::Raw(Raw::new(sequence)),
        }
    }
}

impl RecordRenderer for Renderer {
    fn render<R>(&self, index: u64, length: usize, rng: &mut R) -> String
    where
        R: Rng,
    {
        match self {
            Renderer::Fasta(r) => r.render(index, length, rng),
            Renderer::Fastq(r) => r.render(index, length, rng),
            Renderer::Raw(r) => r.render(index, length, rng),
        }
    }

    fn format(&self) -> Format {
        match self {
            Renderer::Fasta(r) => r.format(),
            Renderer::Fastq(r) => r.format(),
            Renderer::Raw(r) => r.format(),
        }
    }
}

/// Write records joined by `separator` and end output by a new line
pub fn write_records<I, W>(records: I, separator: &str, output: &mut W) -> error::Result<u64>
where
    I: Iterator<Item = String>,
    W: Write,
{
    let mut nb_record = 0;

    for record in records {
        if nb_record != 0 {
            output
                .write_all(separator.as_bytes())
                .map_err(|source| error::Error::WriteOutput { source })?;
        }

        output
            .write_all(record.as_bytes())
            .map_err(|source| error::Error::WriteOutput { source })?;
        nb_record += 1;
    }

    output
        .write_all(b"\n")
        .map_err(|source| error::Error::WriteOutput { source })?;
    output
        .flush()
        .map_err(|source| error::Error::WriteOutput { source })?;

    Ok(nb_record)
}

/// Generate all records of request and write them in output
pub fn generate<G, R, W>(
    renderer: &G,
    request: &ReadRequest,
    rng: &mut R,
    output: &mut W,
) -> error::Result<u64>
where
    G: RecordRenderer,
    R: Rng,
    W: Write,
{
    write_records(
        renderer.generate(request, rng),
        renderer.format().separator(),
        output,
    )
}
