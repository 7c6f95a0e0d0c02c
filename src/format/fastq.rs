//! Fastq records `@Seq-{index}\n{sequence}\n+Seq-{index}\n{quality}`.

/* crate use */
use rand::Rng;

/* project use */
use crate::format::{Format, RecordRenderer};
use crate::quality::QualityGenerator;
use crate::sequence::SequenceGenerator;

#[derive(Debug)]
pub struct Fastq {
    sequence: SequenceGenerator,
    quality: Box<dyn QualityGenerator>,
}

impl Fastq {
    pub fn new(sequence: SequenceGenerator, quality: Box<dyn QualityGenerator>) -> Self {
        Self { sequence, quality }
    }
}

impl RecordRenderer for Fastq {
    fn render<R>(&self, index: u64, length: usize, rng: &mut R) -> String
    where
        R: Rng,
    {
        // sequence is always drawn before quality
        let sequence = self.sequence.next_sequence(length, rng);
        let quality = self.quality.quality_string(length, rng);

        format!("@Seq-{}\n{}\n+Seq-{}\n{}", index, sequence, index, quality)
    }

    fn format(&self) -> Format {
        Format::Fastq
    }
}
