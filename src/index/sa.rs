use rayon::prelude::*;
use tracing::debug;

use crate::error::{try_alloc, Result, SearchError};

/// 可建索引的最大参考长度。偏移与秩都以 `u32` 存储。
pub const MAX_REFERENCE_LEN: usize = u32::MAX as usize;

/// 构建后缀数组（基于倍增法，O(n log n) 轮排序）。
///
/// 输入为任意字节序列，不需要也不假设末尾哨兵：
/// 较短的后缀若是较长后缀的前缀，则排在前面（等价于在末尾追加一个比所有字节都小的 `$`）。
pub fn build_sa(text: &[u8]) -> Result<Vec<u32>> {
    let n = text.len();
    if n > MAX_REFERENCE_LEN {
        return Err(SearchError::InvalidInput(format!(
            "reference length {} exceeds the maximum of {} symbols",
            n, MAX_REFERENCE_LEN
        )));
    }
    if n == 0 {
        return Ok(Vec::new());
    }

    let mut sa: Vec<u32> = try_alloc(n, "suffix array")?;
    sa.extend(0..n as u32);
    let mut rank: Vec<u32> = try_alloc(n, "rank buffer")?;
    rank.extend(text.iter().map(|&b| u32::from(b)));
    let mut tmp: Vec<u32> = try_alloc(n, "rank buffer")?;
    tmp.resize(n, 0);

    let mut k = 1usize;
    let mut rounds = 0usize;
    while k < n {
        // 排序键：(rank[i], rank[i+k] + 1)，越界部分记为 0，使短后缀排在前面
        let key = |i: u32, rank: &[u32]| -> u64 {
            let i = i as usize;
            let hi = u64::from(rank[i]);
            let lo = if i + k < n { u64::from(rank[i + k]) + 1 } else { 0 };
            (hi << 32) | lo
        };
        sa.par_sort_unstable_by_key(|&i| key(i, &rank));

        tmp[sa[0] as usize] = 0;
        for w in 1..n {
            let a = sa[w - 1];
            let b = sa[w];
            let bump = u32::from(key(a, &rank) != key(b, &rank));
            tmp[b as usize] = tmp[a as usize] + bump;
        }

        // 复制回 rank
        rank.copy_from_slice(&tmp);
        rounds += 1;
        if rank[sa[n - 1] as usize] as usize == n - 1 {
            break;
        }
        k <<= 1;
    }

    debug!(len = n, rounds, "suffix array sorted");
    Ok(sa)
}

/// 朴素构建：直接以完整后缀切片为键做比较排序，最坏 O(n² log n)。
///
/// 仅适合小规模输入，用作 [`build_sa`] 的正确性基准。
pub fn build_sa_naive(text: &[u8]) -> Vec<u32> {
    let mut sa: Vec<u32> = (0..text.len() as u32).collect();
    sa.sort_by(|&a, &b| text[a as usize..].cmp(&text[b as usize..]));
    sa
}

/// 检查 `sa` 是否恰为 `text` 的后缀数组，线性时间。
///
/// 先验证排列性质，再利用逆数组比较相邻后缀：
/// 首字节相同时，两者的顺序由去掉首字节后的后缀决定。
pub fn verify_sa(text: &[u8], sa: &[u32]) -> std::result::Result<(), String> {
    let n = text.len();
    if sa.len() != n {
        return Err(format!(
            "suffix array has {} entries but reference has {} symbols",
            sa.len(),
            n
        ));
    }

    let mut inv = vec![u32::MAX; n];
    for (i, &p) in sa.iter().enumerate() {
        let p = p as usize;
        if p >= n {
            return Err(format!("offset {} at index {} is out of range", p, i));
        }
        if inv[p] != u32::MAX {
            return Err(format!("offset {} appears more than once", p));
        }
        inv[p] = i as u32;
    }

    for w in 1..n {
        let a = sa[w - 1] as usize;
        let b = sa[w] as usize;
        let ordered = match text[a].cmp(&text[b]) {
            std::cmp::Ordering::Less => true,
            std::cmp::Ordering::Greater => false,
            std::cmp::Ordering::Equal => {
                if a + 1 == n {
                    true
                } else if b + 1 == n {
                    false
                } else {
                    inv[a + 1] < inv[b + 1]
                }
            }
        };
        if !ordered {
            return Err(format!(
                "suffixes at offsets {} and {} (indices {}, {}) are out of order",
                a,
                b,
                w - 1,
                w
            ));
        }
    }
    Ok(())
}
