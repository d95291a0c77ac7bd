#![doc = include_str!("../README.md")]

pub mod cli;
pub mod conversion;
pub mod haplotype;
pub mod output;
pub mod snp;

pub use conversion::{convert, ConversionConfig, ConversionError, ConversionSummary};
