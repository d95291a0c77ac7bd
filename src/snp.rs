use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

/// Number of header/offset lines preceding the data rows of a SNP file.
pub const HEADER_LINES: usize = 3;

const CHROMOSOME_COLUMN: usize = 1;
const POSITION_COLUMN: usize = 2;
const REFERENCE_COLUMN: usize = 7;
const GENOTYPE_COLUMN: usize = 9;

/// One data row of the SNP annotation file.
///
/// Only the columns the conversion consumes are retained. Absent columns read
/// as empty strings and a non-numeric position reads as 0; row parsing itself
/// never fails.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SnpRecord {
    pub chromosome: String,
    /// Base-0 genomic position.
    pub position: u64,
    pub reference: String,
    /// Raw genotype field, expected to hold two `/`-separated alleles.
    pub genotype: String,
}

impl SnpRecord {
    pub fn parse(line: &str) -> Self {
        let fields: Vec<&str> = line.split('\t').collect();
        let field = |index: usize| fields.get(index).copied().unwrap_or_default();

        Self {
            chromosome: field(CHROMOSOME_COLUMN).to_string(),
            position: field(POSITION_COLUMN).parse().unwrap_or(0),
            reference: field(REFERENCE_COLUMN).to_string(),
            genotype: field(GENOTYPE_COLUMN).to_string(),
        }
    }
}

/// The SNP file, read once with its data rows cached in input order.
#[derive(Clone, Debug)]
pub struct SnpFile {
    line_count: usize,
    records: Vec<SnpRecord>,
}

impl SnpFile {
    pub fn read<P>(path: P) -> io::Result<Self>
    where
        P: AsRef<Path>,
    {
        let reader = File::open(path).map(BufReader::new)?;

        let mut line_count = 0;
        let mut records = Vec::new();
        for line in reader.lines() {
            let line = line?;
            line_count += 1;
            if line_count > HEADER_LINES {
                records.push(SnpRecord::parse(&line));
            }
        }

        Ok(Self { line_count, records })
    }

    /// Total line count minus the header block. Signed so a file shorter than
    /// the header block still compares unequal to any haplotype length.
    pub fn data_line_count(&self) -> i64 {
        self.line_count as i64 - HEADER_LINES as i64
    }

    pub fn records(&self) -> &[SnpRecord] {
        &self.records
    }
}

/// Outcome of deriving the alternate allele from a genotype field.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AltCall {
    /// `.` when no allele differs from the reference or the field is malformed.
    pub alt: String,
    /// Set when the field did not hold exactly two alleles; the record's
    /// effective REF degrades to `X`.
    pub malformed: bool,
}

/// Derive the alternate allele by elimination against the reference.
///
/// With exactly two `/`-separated values, the alternate is whichever differs
/// from the reference; when both differ the second one wins. Any other shape
/// is flagged as malformed.
pub fn resolve_alt(genotype: &str, reference: &str) -> AltCall {
    let alleles: Vec<&str> = genotype.split('/').collect();

    if alleles.len() != 2 {
        return AltCall {
            alt: String::from("."),
            malformed: true,
        };
    }

    let mut alt = ".";
    for allele in alleles {
        if allele != reference {
            alt = allele;
        }
    }

    AltCall {
        alt: alt.to_string(),
        malformed: false,
    }
}
