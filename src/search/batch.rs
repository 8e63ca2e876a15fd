use std::time::Instant;

use rayon::prelude::*;
use tracing::debug;

use super::{ExactMatcher, MatchSet};
use crate::error::{Result, SearchError};

/// 批量检索参数。
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchOptions {
    /// 工作线程数，0 表示使用 rayon 全局线程池。
    pub threads: usize,
}

/// 对同一参考批量检索多个查询，结果下标与 `queries` 一一对应。
///
/// 每个查询只读共享的参考与索引，彼此独立，因此并行分发；
/// 结果按查询下标收集，输出顺序与线程调度无关。
pub fn search_batch<M, Q>(matcher: &M, queries: &[Q], opt: BatchOptions) -> Result<Vec<MatchSet>>
where
    M: ExactMatcher + ?Sized,
    Q: AsRef<[u8]> + Sync,
{
    let t0 = Instant::now();
    let run = || -> Vec<MatchSet> {
        queries
            .par_iter()
            .map(|q| matcher.find_all(q.as_ref()))
            .collect()
    };

    let results = if opt.threads == 0 {
        run()
    } else {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(opt.threads)
            .thread_name(|idx| format!("sa-search-worker-{}", idx))
            .build()
            .map_err(|e| SearchError::InvalidInput(format!("cannot start {} worker threads: {}", opt.threads, e)))?;
        pool.install(run)
    };

    let hits: usize = results.iter().map(MatchSet::len).sum();
    debug!(
        strategy = matcher.name(),
        queries = queries.len(),
        hits,
        elapsed_ms = t0.elapsed().as_millis() as u64,
        "batch search finished"
    );
    Ok(results)
}

/// 把查询集循环重复或截断到恰好 `count` 条。
///
/// 查询不足时按原顺序重复补齐，多余时保留前 `count` 条。
pub fn replicate_queries<T: Clone>(queries: &[T], count: usize) -> Result<Vec<T>> {
    if count > 0 && queries.is_empty() {
        return Err(SearchError::InvalidInput(format!(
            "requested {} queries but the query set is empty",
            count
        )));
    }
    Ok(queries.iter().cycle().take(count).cloned().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::SuffixArray;
    use crate::search::{NaiveMatcher, SuffixArraySearcher};

    fn queries() -> Vec<Vec<u8>> {
        vec![b"ACGT".to_vec(), b"GG".to_vec(), b"T".to_vec(), Vec::new(), b"CGTAC".to_vec()]
    }

    #[test]
    fn batch_preserves_query_order() {
        let text = b"ACGTACGTTT";
        let naive = NaiveMatcher::new(text);
        let res = search_batch(&naive, &queries(), BatchOptions::default()).unwrap();
        assert_eq!(res.len(), 5);
        assert_eq!(res[0].as_slice(), &[0, 4]);
        assert!(res[1].is_empty());
        assert_eq!(res[2].as_slice(), &[3, 7, 8, 9]);
        assert_eq!(res[3].len(), text.len());
        assert_eq!(res[4].as_slice(), &[1]);
    }

    #[test]
    fn batch_strategies_agree_with_explicit_pool() {
        let text = b"TTGACGTACGTTGACCA";
        let idx = SuffixArray::build(text).unwrap();
        let sa = SuffixArraySearcher::new(&idx);
        let naive = NaiveMatcher::new(text);
        let opt = BatchOptions { threads: 2 };
        let a = search_batch(&sa, &queries(), opt).unwrap();
        let b = search_batch(&naive, &queries(), opt).unwrap();
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(&b) {
            assert!(x.same_positions(y));
        }
    }

    #[test]
    fn batch_accepts_trait_objects() {
        let naive = NaiveMatcher::new(b"AAA");
        let m: &dyn ExactMatcher = &naive;
        let res = search_batch(m, &["A", "AA"], BatchOptions::default()).unwrap();
        assert_eq!(res[1].as_slice(), &[0, 1]);
    }

    #[test]
    fn replicate_cycles_and_truncates() {
        let q = ["a", "b", "c"];
        assert_eq!(replicate_queries(&q, 7).unwrap(), vec!["a", "b", "c", "a", "b", "c", "a"]);
        assert_eq!(replicate_queries(&q, 2).unwrap(), vec!["a", "b"]);
        assert!(replicate_queries(&q, 0).unwrap().is_empty());
    }

    #[test]
    fn replicate_from_empty_set_is_invalid() {
        let q: [&str; 0] = [];
        assert!(matches!(
            replicate_queries(&q, 3),
            Err(SearchError::InvalidInput(_))
        ));
        assert!(replicate_queries(&q, 0).unwrap().is_empty());
    }
}
