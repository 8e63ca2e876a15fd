//! 后缀数组索引。
//!
//! [`SuffixArray`] 把偏移数组和它所对应的参考序列绑定在一起，
//! 检索时无法再把一个数组错配到另一条序列上。

pub mod sa;

use std::time::Instant;

use tracing::{info, warn};

use crate::error::{Result, SearchError};

/// 与参考序列绑定的后缀数组。
///
/// 参考序列以借用方式持有，构建之后不再修改；
/// 偏移 `sa[i]` 对应后缀 `text[sa[i]..]`，按字典序非降排列。
#[derive(Debug, Clone)]
pub struct SuffixArray<'t> {
    text: &'t [u8],
    sa: Vec<u32>,
}

impl<'t> SuffixArray<'t> {
    /// 从参考序列构建后缀数组。
    pub fn build(text: &'t [u8]) -> Result<Self> {
        let t0 = Instant::now();
        let sa = sa::build_sa(text)?;
        info!(
            len = text.len(),
            elapsed_ms = t0.elapsed().as_millis() as u64,
            "suffix array built"
        );
        Ok(Self { text, sa })
    }

    /// 用外部给出的偏移数组组装索引，先校验其确为 `text` 的后缀数组。
    pub fn from_parts(text: &'t [u8], sa: Vec<u32>) -> Result<Self> {
        if let Err(msg) = sa::verify_sa(text, &sa) {
            warn!(%msg, "rejected suffix array");
            return Err(SearchError::PreconditionViolation(msg));
        }
        Ok(Self { text, sa })
    }

    /// 建立索引时所用的参考序列。
    #[inline]
    pub fn text(&self) -> &'t [u8] {
        self.text
    }

    #[inline]
    pub fn as_slice(&self) -> &[u32] {
        &self.sa
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sa.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sa.is_empty()
    }

    /// 第 `i` 个（按字典序）后缀。
    #[inline]
    pub fn suffix(&self, i: usize) -> &'t [u8] {
        &self.text[self.sa[i] as usize..]
    }

    pub fn into_inner(self) -> Vec<u32> {
        self.sa
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_binds_text() {
        let text = b"ACGTACGT";
        let idx = SuffixArray::build(text).unwrap();
        assert_eq!(idx.len(), 8);
        assert_eq!(idx.text(), text);
        assert_eq!(idx.suffix(0), b"ACGT");
        assert_eq!(idx.suffix(7), b"TACGT");
    }

    #[test]
    fn empty_reference_gives_empty_index() {
        let idx = SuffixArray::build(b"").unwrap();
        assert!(idx.is_empty());
    }

    #[test]
    fn from_parts_round_trips_a_valid_array() {
        let text = b"GATTACA";
        let sa = SuffixArray::build(text).unwrap().into_inner();
        let idx = SuffixArray::from_parts(text, sa.clone()).unwrap();
        assert_eq!(idx.as_slice(), &sa[..]);
    }

    #[test]
    fn from_parts_rejects_array_of_another_reference() {
        let sa = SuffixArray::build(b"GATTACA").unwrap().into_inner();
        let err = SuffixArray::from_parts(b"ACGT", sa).unwrap_err();
        assert!(matches!(err, SearchError::PreconditionViolation(_)));

        // 等长但内容不同的参考，顺序校验会失败
        let sa = SuffixArray::build(b"AAAC").unwrap().into_inner();
        let err = SuffixArray::from_parts(b"CAAA", sa).unwrap_err();
        assert!(matches!(err, SearchError::PreconditionViolation(_)));
    }
}
