use std::{
    fmt,
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use crate::snp::{AltCall, SnpRecord};

/// First header line of every emitted file.
pub const FILE_FORMAT_LINE: &str = "##fileformat=VCFv4.2";

/// Fixed ten-column header line.
pub const COLUMN_HEADER_LINE: &str =
    "#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tSAMPLE";

/// One VCF data line. ID, QUAL, and INFO are always `.`, FILTER is `PASS`,
/// and FORMAT is `GT`, so only the variable fields are carried.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VcfRecord {
    pub chromosome: String,
    /// 1-based position as emitted in the POS column.
    pub position: u64,
    pub reference: String,
    pub alt: String,
    /// Phased `father|mother` genotype.
    pub sample: String,
}

impl VcfRecord {
    /// Assemble one record from a SNP row, its resolved alternate allele, and
    /// the haplotype alleles at this position. A malformed genotype field
    /// forces the effective reference to `X`; a missing allele renders empty.
    pub fn from_site(
        snp: &SnpRecord,
        call: &AltCall,
        father: Option<char>,
        mother: Option<char>,
    ) -> Self {
        let reference = if call.malformed {
            String::from("X")
        } else {
            snp.reference.clone()
        };

        Self {
            chromosome: snp.chromosome.clone(),
            position: snp.position + 1,
            reference,
            alt: call.alt.clone(),
            sample: format!(
                "{}|{}",
                father.map(String::from).unwrap_or_default(),
                mother.map(String::from).unwrap_or_default()
            ),
        }
    }
}

impl fmt::Display for VcfRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{chrom}\t{pos}\t.\t{reference}\t{alt}\t.\tPASS\t.\tGT\t{sample}",
            chrom = self.chromosome,
            pos = self.position,
            reference = self.reference,
            alt = self.alt,
            sample = self.sample,
        )
    }
}

/// Streaming VCF text writer over a single buffered handle.
pub struct Writer<W> {
    inner: W,
}

impl Writer<BufWriter<File>> {
    pub fn create<P>(path: P) -> io::Result<Self>
    where
        P: AsRef<Path>,
    {
        File::create(path).map(BufWriter::new).map(Self::new)
    }
}

impl<W> Writer<W>
where
    W: Write,
{
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn write_header(&mut self) -> io::Result<()> {
        writeln!(self.inner, "{FILE_FORMAT_LINE}")?;
        writeln!(self.inner, "{COLUMN_HEADER_LINE}")
    }

    pub fn write_record(&mut self, record: &VcfRecord) -> io::Result<()> {
        writeln!(self.inner, "{record}")
    }

    pub fn finish(mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
