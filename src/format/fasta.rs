//! Fasta records `>Seq-{index}\n{sequence}`.

/* crate use */
use rand::Rng;

/* project use */
use crate::format::{Format, RecordRenderer};
use crate::sequence::SequenceGenerator;

#[derive(Debug)]
pub struct Fasta {
    sequence: SequenceGenerator,
}

impl Fasta {
    pub fn new(sequence: SequenceGenerator) -> Self {
        Self { sequence }
    }
}

impl RecordRenderer for Fasta {
    fn render<R>(&self, index: u64, length: usize, rng: &mut R) -> String
    where
        R: Rng,
    {
        format!(">Seq-{}\n{}", index, self.sequence.next_sequence(length, rng))
    }

    fn format(&self) -> Format {
        Format::Fasta
    }
}
