use super::{ExactMatcher, MatchSet};

/// 朴素检索：在参考序列上滑动长度为 `m` 的窗口逐一比较，O(n·m)。
///
/// 不做任何预处理，也不持有状态，可独立作为后缀数组检索的对照。
#[derive(Debug, Clone, Copy)]
pub struct NaiveMatcher<'t> {
    text: &'t [u8],
}

impl<'t> NaiveMatcher<'t> {
    pub fn new(text: &'t [u8]) -> Self {
        Self { text }
    }
}

impl ExactMatcher for NaiveMatcher<'_> {
    fn name(&self) -> &'static str {
        "naive"
    }

    fn reference(&self) -> &[u8] {
        self.text
    }

    fn find_all(&self, query: &[u8]) -> MatchSet {
        find_all(self.text, query)
    }
}

/// 返回 `query` 在 `text` 中所有（可重叠的）出现位置，升序。
///
/// 空查询匹配 `0..n` 的每个偏移。
pub fn find_all(text: &[u8], query: &[u8]) -> MatchSet {
    let n = text.len();
    let m = query.len();
    if m == 0 {
        return MatchSet::new((0..n as u32).collect());
    }
    if m > n {
        return MatchSet::default();
    }

    let mut positions = Vec::new();
    for (i, window) in text.windows(m).enumerate() {
        if window == query {
            positions.push(i as u32);
        }
    }
    MatchSet::new(positions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_overlapping_occurrences_in_order() {
        assert_eq!(find_all(b"AAAA", b"AA").as_slice(), &[0, 1, 2]);
        assert_eq!(find_all(b"ABABABA", b"ABA").as_slice(), &[0, 2, 4]);
    }

    #[test]
    fn exact_length_window() {
        assert_eq!(find_all(b"ACGT", b"ACGT").as_slice(), &[0]);
        assert!(find_all(b"ACGT", b"ACGA").is_empty());
    }

    #[test]
    fn query_longer_than_text() {
        assert!(find_all(b"AC", b"ACGT").is_empty());
        assert!(find_all(b"", b"A").is_empty());
    }

    #[test]
    fn arbitrary_bytes() {
        let text = [0u8, 255, 0, 255, 0];
        assert_eq!(find_all(&text, &[0, 255]).as_slice(), &[0, 2]);
    }

    #[test]
    fn matcher_reports_reference() {
        let m = NaiveMatcher::new(b"GATTACA");
        assert_eq!(m.reference(), b"GATTACA");
        assert_eq!(m.find_all(b"A").as_slice(), &[1, 4, 6]);
    }
}
