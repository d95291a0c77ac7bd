use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use crate::{convert, ConversionConfig, ConversionError, ConversionSummary};

#[derive(Debug, Parser)]
#[command(author, version, about = "Convert haplotype strings and SNP annotations to VCF", long_about = None)]
struct Cli {
    /// Haplotype file: line 1 = father haplotype, line 2 = mother haplotype
    #[arg(value_name = "HAPLOTYPES")]
    haplotypes: PathBuf,

    /// Tab-separated SNP annotation file (3 header lines, then one row per position)
    #[arg(value_name = "SNP")]
    snp: PathBuf,

    /// Output VCF path
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Logging verbosity (e.g. error, warn, info, debug)
    #[arg(long, default_value = "info")]
    log_level: String,
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let config = ConversionConfig {
        haplotypes: cli.haplotypes,
        snp: cli.snp,
        output: cli.output,
    };

    match convert(&config) {
        Ok(summary) => {
            print_summary(&summary);
            ExitCode::SUCCESS
        }
        Err(err @ ConversionError::LengthMismatch { .. }) => {
            // Legacy diagnostic, kept verbatim for downstream scripts.
            println!("Error: non-matching files");
            tracing::error!(error = %err, "conversion aborted");
            ExitCode::from(2)
        }
        Err(err) => {
            eprintln!("Error: {:#}", anyhow::Error::new(err));
            ExitCode::FAILURE
        }
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .ok();
}

fn print_summary(summary: &ConversionSummary) {
    println!(
        "Wrote {total} records ({variants} variants, {no_alt} without an alternate allele).",
        total = summary.records_written,
        variants = summary.variant_records,
        no_alt = summary.no_alt_records,
    );

    if summary.malformed_genotypes > 0 {
        println!(
            "Encountered {count} genotype fields that were not biallelic.",
            count = summary.malformed_genotypes
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parses_positional_paths() {
        let cli = Cli::parse_from(["hap2vcf", "haps.txt", "snps.tsv", "out.vcf"]);
        assert_eq!(cli.haplotypes, PathBuf::from("haps.txt"));
        assert_eq!(cli.snp, PathBuf::from("snps.tsv"));
        assert_eq!(cli.output, PathBuf::from("out.vcf"));
        assert_eq!(cli.log_level, "info");
    }

    #[test]
    fn accepts_log_level_flag() {
        let cli = Cli::parse_from(["hap2vcf", "h", "s", "o", "--log-level", "debug"]);
        assert_eq!(cli.log_level, "debug");
    }

    #[test]
    fn rejects_missing_output() {
        assert!(Cli::try_parse_from(["hap2vcf", "h", "s"]).is_err());
    }
}
