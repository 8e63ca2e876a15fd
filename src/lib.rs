//! # sa-search
//!
//! 短序列（reads）在参考序列上的精确子串检索：朴素扫描与后缀数组检索的对照实现。
//!
//! 本 crate 适用于任意字节序列（不限于 DNA 四字母表），包括：
//!
//! - **后缀数组构建**：倍增法 O(n log n) 轮排序，结果与按完整后缀比较排序一致
//! - **后缀数组检索**：两次二分查找得到匹配区间，O(m log n)
//! - **朴素检索**：滑动窗口逐位比较，作为正确性基准
//! - **批量检索**：一个参考、多个查询，rayon 并行分发，结果按查询下标返回
//!
//! ## 快速示例
//!
//! ```rust
//! use sa_search::index::SuffixArray;
//! use sa_search::search::{ExactMatcher, NaiveMatcher, SuffixArraySearcher};
//!
//! let reference = b"ACGTACGTAGCTGATCGTAG";
//! let idx = SuffixArray::build(reference).unwrap();
//! let sa = SuffixArraySearcher::new(&idx);
//! let naive = NaiveMatcher::new(reference);
//!
//! let hits = sa.find_all(b"CGTA");
//! assert_eq!(hits.sorted(), vec![1, 5, 15]);
//! assert!(hits.same_positions(&naive.find_all(b"CGTA")));
//! ```
//!
//! ## 模块说明
//!
//! - [`index`] — 后缀数组构建与校验，[`SuffixArray`](index::SuffixArray) 绑定其参考序列
//! - [`search`] — [`ExactMatcher`](search::ExactMatcher) 接口、两种检索策略与批量入口
//! - [`io`] — FASTA（含 gzip）读取
//! - [`report`] — 检索结果输出
//! - [`error`] — 错误类型

pub mod error;
pub mod index;
pub mod io;
pub mod report;
pub mod search;

pub use error::{Result, SearchError};
pub use index::SuffixArray;
pub use search::{ExactMatcher, MatchSet, NaiveMatcher, SuffixArraySearcher};
