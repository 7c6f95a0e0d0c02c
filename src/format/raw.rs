//! Raw records, just the sequence.

/* crate use */
use rand::Rng;

/* project use */
use crate::format::{Format, RecordRenderer};
use crate::sequence::SequenceGenerator;

#[derive(Debug)]
pub struct Raw {
    sequence: SequenceGenerator,
}

impl Raw {
    pub fn new(sequence: SequenceGenerator) -> Self {
        Self { sequence }
    }
}

impl RecordRenderer for Raw {
    fn render<R>(&self, _index: u64, length: usize, rng: &mut R) -> String
    where
        R: Rng,
    {
        self.sequence.next_sequence(length, rng)
    }

    fn format(&self) -> Format {
        Format::Raw
    }
}
