use std::{io, path::PathBuf};

use thiserror::Error;

use crate::{
    haplotype::HaplotypePair,
    output::{VcfRecord, Writer},
    snp::{resolve_alt, SnpFile},
};

/// Paths required to drive a conversion.
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    pub haplotypes: PathBuf,
    pub snp: PathBuf,
    pub output: PathBuf,
}

/// Counters accumulated over one conversion run.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct ConversionSummary {
    pub records_written: usize,
    pub variant_records: usize,
    /// Records whose ALT resolved to `.`.
    pub no_alt_records: usize,
    pub malformed_genotypes: usize,
}

impl ConversionSummary {
    fn record_emission(&mut self, is_variant: bool) {
        self.records_written += 1;
        if is_variant {
            self.variant_records += 1;
        } else {
            self.no_alt_records += 1;
        }
    }
}

/// Errors that abort a conversion. Per-record genotype anomalies are not
/// errors; they degrade the affected record and are counted in the summary.
#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("failed to read haplotype file {path}")]
    Haplotypes {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read SNP file {path}")]
    Snp {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write output {path}")]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("haplotype length {haplotype_len} does not match {snp_data_lines} SNP data lines")]
    LengthMismatch {
        haplotype_len: usize,
        snp_data_lines: i64,
    },
}

/// Convert the haplotype pair plus SNP table into a VCF file.
///
/// The output file is only created after the length precondition holds; a
/// mismatch leaves any existing file at the output path untouched.
pub fn convert(config: &ConversionConfig) -> Result<ConversionSummary, ConversionError> {
    tracing::info!(
        haplotypes = %config.haplotypes.display(),
        snp = %config.snp.display(),
        output = %config.output.display(),
        "starting conversion",
    );

    let haplotypes =
        HaplotypePair::from_path(&config.haplotypes).map_err(|source| {
            ConversionError::Haplotypes {
                path: config.haplotypes.clone(),
                source,
            }
        })?;

    let snps = SnpFile::read(&config.snp).map_err(|source| ConversionError::Snp {
        path: config.snp.clone(),
        source,
    })?;

    if haplotypes.father_len() as i64 != snps.data_line_count() {
        return Err(ConversionError::LengthMismatch {
            haplotype_len: haplotypes.father_len(),
            snp_data_lines: snps.data_line_count(),
        });
    }

    let output_error = |source| ConversionError::Output {
        path: config.output.clone(),
        source,
    };

    let mut writer = Writer::create(&config.output).map_err(output_error)?;
    writer.write_header().map_err(output_error)?;

    let mut summary = ConversionSummary::default();

    for (position, snp) in snps.records().iter().enumerate() {
        let call = resolve_alt(&snp.genotype, &snp.reference);
        if call.malformed {
            summary.malformed_genotypes += 1;
            tracing::warn!(
                chromosome = %snp.chromosome,
                position = snp.position,
                genotype = %snp.genotype,
                "genotype field is not biallelic",
            );
        }

        let record = VcfRecord::from_site(
            snp,
            &call,
            haplotypes.father_allele(position),
            haplotypes.mother_allele(position),
        );
        writer.write_record(&record).map_err(output_error)?;
        summary.record_emission(record.alt != ".");
    }

    writer.finish().map_err(output_error)?;

    tracing::info!(
        records = summary.records_written,
        variants = summary.variant_records,
        malformed = summary.malformed_genotypes,
        "conversion finished",
    );

    Ok(summary)
}
