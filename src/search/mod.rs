//! 精确匹配检索。
//!
//! 两种策略实现同一个 [`ExactMatcher`] 接口：
//!
//! - [`NaiveMatcher`] — 滑动窗口逐位比较，无预处理，作为正确性基准
//! - [`SuffixArraySearcher`] — 在后缀数组上二分查找匹配区间
//!
//! ## 空查询约定
//!
//! 空串是每个后缀的前缀，因此空查询匹配参考序列的每个起始偏移 `0..n`。
//! 两种策略都遵守这一约定；空参考上的任何查询都返回空结果。

pub mod batch;
pub mod naive;
pub mod sa_search;

pub use batch::{replicate_queries, search_batch, BatchOptions};
pub use naive::NaiveMatcher;
pub use sa_search::SuffixArraySearcher;

/// 一个查询在参考序列中的全部起始偏移（0-based）。
///
/// 偏移的顺序由产生它的策略决定：朴素扫描为升序，后缀数组检索为后缀数组顺序。
/// 比较两个结果时请使用 [`MatchSet::sorted`] 或 [`MatchSet::same_positions`]。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchSet {
    positions: Vec<u32>,
}

impl MatchSet {
    pub fn new(positions: Vec<u32>) -> Self {
        Self { positions }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[u32] {
        &self.positions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, u32> {
        self.positions.iter()
    }

    /// 按偏移升序排列的副本。
    pub fn sorted(&self) -> Vec<u32> {
        let mut v = self.positions.clone();
        v.sort_unstable();
        v
    }

    /// 作为集合比较（忽略顺序）。
    pub fn same_positions(&self, other: &MatchSet) -> bool {
        self.len() == other.len() && self.sorted() == other.sorted()
    }

    pub fn into_vec(self) -> Vec<u32> {
        self.positions
    }
}

impl From<Vec<u32>> for MatchSet {
    fn from(positions: Vec<u32>) -> Self {
        Self { positions }
    }
}

impl<'a> IntoIterator for &'a MatchSet {
    type Item = &'a u32;
    type IntoIter = std::slice::Iter<'a, u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.positions.iter()
    }
}

/// 精确子串匹配策略。
///
/// 实现者持有（或借用）参考序列，`find_all` 对单个查询返回全部出现位置。
/// 该操作只读，因此实现需为 `Sync`，以便批量检索时并行调用。
pub trait ExactMatcher: Sync {
    /// 策略名称，用于日志和报告。
    fn name(&self) -> &'static str;

    /// 被检索的参考序列。
    fn reference(&self) -> &[u8];

    fn find_all(&self, query: &[u8]) -> MatchSet;
}
