use std::io::Write;

use chrono::{DateTime, Utc};

use crate::search::MatchSet;

/// 一次批量检索的元信息，写在结果文件开头。
#[derive(Debug, Clone)]
pub struct RunMeta {
    pub strategy: String,
    pub reference_len: usize,
    pub query_count: usize,
    pub started: DateTime<Utc>,
}

impl RunMeta {
    pub fn new(strategy: &str, reference_len: usize, query_count: usize) -> Self {
        Self {
            strategy: strategy.to_string(),
            reference_len,
            query_count,
            started: Utc::now(),
        }
    }
}

/// 以制表符分隔写出结果：`query_index  hit_count  positions`。
///
/// 偏移按升序、逗号分隔；无命中时写 `-`。
pub fn write_results<W: Write>(out: &mut W, meta: &RunMeta, results: &[MatchSet]) -> std::io::Result<()> {
    writeln!(out, "# strategy: {}", meta.strategy)?;
    writeln!(out, "# reference_len: {}", meta.reference_len)?;
    writeln!(out, "# queries: {}", meta.query_count)?;
    writeln!(out, "# started: {}", meta.started.to_rfc3339())?;
    writeln!(out, "#query\thits\tpositions")?;

    for (qi, m) in results.iter().enumerate() {
        write!(out, "{}\t{}\t", qi, m.len())?;
        if m.is_empty() {
            out.write_all(b"-")?;
        } else {
            for (k, pos) in m.sorted().iter().enumerate() {
                if k > 0 {
                    out.write_all(b",")?;
                }
                write!(out, "{}", pos)?;
            }
        }
        out.write_all(b"\n")?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_header_and_sorted_rows() {
        let meta = RunMeta::new("suffixarray", 8, 2);
        let results = vec![MatchSet::from(vec![4, 0]), MatchSet::default()];
        let mut buf = Vec::new();
        write_results(&mut buf, &meta, &results).unwrap();
        let s = String::from_utf8(buf).unwrap();

        assert!(s.starts_with("# strategy: suffixarray\n# reference_len: 8\n# queries: 2\n# started: "));
        let rows: Vec<&str> = s.lines().filter(|l| !l.starts_with('#')).collect();
        assert_eq!(rows, vec!["0\t2\t0,4", "1\t0\t-"]);
    }
}
