//! FASTA reading for references and query reads.
//!
//! Supports plain files and gzip/bgzip compressed files (`.gz`, `.bgz`).

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use tracing::debug;

use crate::error::{Result, SearchError};

#[derive(Debug, Clone)]
pub struct FastaRecord {
    pub id: String,
    pub desc: Option<String>,
    pub seq: Vec<u8>,
}

pub struct FastaReader<R: BufRead> {
    reader: R,
    buf: Vec<u8>,
    done: bool,
    peek_header: Option<Vec<u8>>,
}

impl<R: BufRead> FastaReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            done: false,
            peek_header: None,
        }
    }

    fn read_line(&mut self) -> Result<bool> {
        self.buf.clear();
        let n = self.reader.read_until(b'\n', &mut self.buf)?;
        if n == 0 {
            self.done = true;
        }
        Ok(n > 0)
    }

    pub fn next_record(&mut self) -> Result<Option<FastaRecord>> {
        if self.done && self.peek_header.is_none() {
            return Ok(None);
        }

        // Find header line; anything before the first '>' is skipped
        let header = match self.peek_header.take() {
            Some(h) => h,
            None => loop {
                if !self.read_line()? {
                    return Ok(None);
                }
                if self.buf.first() == Some(&b'>') {
                    break self.buf[1..].to_vec();
                }
            },
        };

        let header = String::from_utf8_lossy(&header);
        let header = header.trim();
        let mut parts = header.splitn(2, char::is_whitespace);
        let id = parts.next().unwrap_or("").to_string();
        let desc = parts
            .next()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        // Sequence lines up to the next header
        let mut seq: Vec<u8> = Vec::new();
        while !self.done {
            if !self.read_line()? {
                break;
            }
            if self.buf.first() == Some(&b'>') {
                self.peek_header = Some(self.buf[1..].to_vec());
                break;
            }
            seq.extend(
                self.buf
                    .iter()
                    .filter(|b| !b.is_ascii_whitespace())
                    .map(u8::to_ascii_uppercase),
            );
        }

        Ok(Some(FastaRecord { id, desc, seq }))
    }
}

impl<R: BufRead> Iterator for FastaReader<R> {
    type Item = Result<FastaRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}

fn is_gzipped(path: &Path) -> bool {
    let p = path.to_string_lossy().to_lowercase();
    p.ends_with(".gz") || p.ends_with(".bgz")
}

/// Open a FASTA file, decompressing on the fly when the name ends in `.gz`/`.bgz`.
pub fn open_fasta(path: &Path) -> Result<FastaReader<Box<dyn BufRead>>> {
    let file = File::open(path)?;
    let inner: Box<dyn BufRead> = if is_gzipped(path) {
        Box::new(BufReader::new(MultiGzDecoder::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };
    Ok(FastaReader::new(inner))
}

/// Load a reference, concatenating every record into one flat sequence.
pub fn read_reference(path: &Path) -> Result<Vec<u8>> {
    let mut text = Vec::new();
    let mut n_seqs = 0usize;
    for rec in open_fasta(path)? {
        let rec = rec?;
        debug!(id = %rec.id, len = rec.seq.len(), "reference record");
        text.extend_from_slice(&rec.seq);
        n_seqs += 1;
    }

    if n_seqs == 0 {
        return Err(SearchError::InvalidInput(format!(
            "FASTA file '{}' contains no sequences",
            path.display()
        )));
    }
    if text.is_empty() {
        return Err(SearchError::InvalidInput(format!(
            "FASTA file '{}' contains only empty sequences",
            path.display()
        )));
    }
    Ok(text)
}

/// Load query reads, one sequence per record in file order.
pub fn read_queries(path: &Path) -> Result<Vec<Vec<u8>>> {
    open_fasta(path)?
        .map(|rec| rec.map(|r| r.seq))
        .collect()
}
