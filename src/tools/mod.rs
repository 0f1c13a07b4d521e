//! Support tooling: the deterministic `PRNG` used for Zobrist keys and random-position
//! generation, and the `pleco_arc` reference-counted state-stack cell used by `BoardState`.

pub mod pleco_arc;
pub mod prng;
