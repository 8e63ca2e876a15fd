use thiserror::Error;

/// 检索内核的错误分类。
///
/// 查询未命中不是错误，返回空的 [`MatchSet`](crate::search::MatchSet)。
#[derive(Debug, Error)]
pub enum SearchError {
    /// 输入本身不合法，例如参考序列超出 `u32` 偏移可表示的长度。
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// 后缀数组与参考序列不配套（长度、排列或顺序不符）。
    #[error("precondition violation: {0}")]
    PreconditionViolation(String),

    /// 构建所需内存无法分配。
    #[error("resource exhausted: cannot allocate {requested} entries for {what}")]
    ResourceExhausted { what: &'static str, requested: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SearchError>;

/// 按 `len` 预留一个 Vec，分配失败时返回 `ResourceExhausted` 而不是 abort。
pub(crate) fn try_alloc<T>(len: usize, what: &'static str) -> Result<Vec<T>> {
    let mut v = Vec::new();
    v.try_reserve_exact(len)
        .map_err(|_| SearchError::ResourceExhausted { what, requested: len })?;
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_alloc_small_succeeds() {
        let v: Vec<u32> = try_alloc(16, "test").unwrap();
        assert!(v.capacity() >= 16);
        assert!(v.is_empty());
    }

    #[test]
    fn try_alloc_absurd_size_is_resource_exhausted() {
        let err = try_alloc::<u64>(usize::MAX / 4, "ranks").unwrap_err();
        assert!(matches!(
            err,
            SearchError::ResourceExhausted { what: "ranks", .. }
        ));
    }

    #[test]
    fn messages_are_readable() {
        let e = SearchError::PreconditionViolation("length 3 != 4".into());
        assert_eq!(e.to_string(), "precondition violation: length 3 != 4");
    }
}
