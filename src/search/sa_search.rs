use std::ops::Range;

use super::{ExactMatcher, MatchSet};
use crate::index::SuffixArray;

impl SuffixArray<'_> {
    /// 后缀数组中以 `query` 开头的后缀所占的区间 `[lo, hi)`，O(m log n)。
    ///
    /// 未命中时返回空区间（`lo == hi`），位置即 `query` 应插入之处。
    pub fn range(&self, query: &[u8]) -> Range<usize> {
        let lo = self.lower_bound(query);
        let hi = self.upper_bound(query, lo);
        lo..hi
    }

    /// 第一个不小于 `query` 的后缀下标。
    ///
    /// 只比较后缀的前 `min(len, m)` 个字节；比 `query` 短且为其前缀的后缀视为更小。
    fn lower_bound(&self, query: &[u8]) -> usize {
        let text = self.text();
        self.as_slice().partition_point(|&p| {
            let suffix = &text[p as usize..];
            let cmp_len = query.len().min(suffix.len());
            &suffix[..cmp_len] < query
        })
    }

    /// 从 `start` 起第一个不以 `query` 开头的后缀下标。
    fn upper_bound(&self, query: &[u8], start: usize) -> usize {
        let text = self.text();
        start
            + self.as_slice()[start..]
                .partition_point(|&p| text[p as usize..].starts_with(query))
    }

    /// 命中位置，按后缀数组顺序（非偏移顺序）。
    pub fn positions(&self, query: &[u8]) -> &[u32] {
        &self.as_slice()[self.range(query)]
    }

    pub fn count(&self, query: &[u8]) -> usize {
        self.range(query).len()
    }

    pub fn contains(&self, query: &[u8]) -> bool {
        !self.range(query).is_empty()
    }
}

/// 基于后缀数组的检索器。
///
/// 借用一个已构建的 [`SuffixArray`]，因此参考序列与数组必然配套；
/// 多个查询可在同一索引上并发执行。
#[derive(Debug, Clone, Copy)]
pub struct SuffixArraySearcher<'a, 't> {
    index: &'a SuffixArray<'t>,
}

impl<'a, 't> SuffixArraySearcher<'a, 't> {
    pub fn new(index: &'a SuffixArray<'t>) -> Self {
        Self { index }
    }

    pub fn index(&self) -> &'a SuffixArray<'t> {
        self.index
    }
}

impl ExactMatcher for SuffixArraySearcher<'_, '_> {
    fn name(&self) -> &'static str {
        "suffixarray"
    }

    fn reference(&self) -> &[u8] {
        self.index.text()
    }

    fn find_all(&self, query: &[u8]) -> MatchSet {
        MatchSet::new(self.index.positions(query).to_vec())
    }
}
