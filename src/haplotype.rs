use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

/// Return the `n`th line (1-based) of a text file with the trailing newline
/// stripped, or an empty string when the file has fewer than `n` lines.
pub fn read_nth_line<P>(path: P, n: usize) -> io::Result<String>
where
    P: AsRef<Path>,
{
    let reader = File::open(path).map(BufReader::new)?;
    let mut lines = reader.lines();

    for _ in 1..n {
        if lines.next().transpose()?.is_none() {
            return Ok(String::new());
        }
    }

    Ok(lines.next().transpose()?.unwrap_or_default())
}

/// The father and mother haplotype strings, loaded once from lines 1 and 2 of
/// the haplotype file and held as per-position allele characters.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HaplotypePair {
    father: Vec<char>,
    mother: Vec<char>,
}

impl HaplotypePair {
    pub fn from_path<P>(path: P) -> io::Result<Self>
    where
        P: AsRef<Path>,
    {
        let father = read_nth_line(&path, 1)?;
        let mother = read_nth_line(&path, 2)?;
        Ok(Self {
            father: father.chars().collect(),
            mother: mother.chars().collect(),
        })
    }

    /// Number of positions, defined by the father haplotype.
    pub fn father_len(&self) -> usize {
        self.father.len()
    }

    pub fn father_allele(&self, position: usize) -> Option<char> {
        self.father.get(position).copied()
    }

    /// The mother string may be shorter than the father; positions past its
    /// end resolve to `None` and render as an empty allele downstream.
    pub fn mother_allele(&self, position: usize) -> Option<char> {
        self.mother.get(position).copied()
    }
}
