//! 演示如何在 library 模式下使用 sa-search 进行精确检索。
//!
//! 运行方式：
//! ```bash
//! cargo run --example simple_search
//! ```

use sa_search::index::SuffixArray;
use sa_search::search::{self, BatchOptions, ExactMatcher, NaiveMatcher, SuffixArraySearcher};

fn main() -> sa_search::Result<()> {
    // 1. 参考序列
    let reference = b"ACGTACGTAGCTGATCGTAGCTAGCTAGCTGATCGTAGCTAGCTAGCTGAT";
    println!("参考序列: {}", String::from_utf8_lossy(reference));
    println!("参考长度: {} bp", reference.len());

    // 2. 构建后缀数组（与参考序列绑定）
    let idx = SuffixArray::build(reference)?;
    println!("后缀数组构建完成：SA 长度={}", idx.len());

    // 3. 单个查询：区间与位置
    let pattern = b"GCTGATCGTAG";
    let range = idx.range(pattern);
    println!(
        "\n精确匹配 '{}': SA 区间 [{}, {}), 找到 {} 处",
        String::from_utf8_lossy(pattern),
        range.start,
        range.end,
        range.len()
    );
    for pos in idx.positions(pattern) {
        println!("  offset={}", pos);
    }

    // 4. 两种策略的批量检索与比对
    let reads: Vec<&[u8]> = vec![&b"CTAG"[..], &b"GATC"[..], &b"TTTT"[..], &b"ACGTACGT"[..]];
    let sa = SuffixArraySearcher::new(&idx);
    let naive = NaiveMatcher::new(reference);
    let opt = BatchOptions { threads: 2 };
    let by_sa = search::search_batch(&sa, &reads, opt)?;
    let by_naive = search::search_batch(&naive, &reads, opt)?;

    println!("\n批量检索（{} vs {}）:", sa.name(), naive.name());
    for (i, (a, b)) in by_sa.iter().zip(&by_naive).enumerate() {
        println!(
            "  read{} '{}': {:?} (一致: {})",
            i,
            String::from_utf8_lossy(reads[i]),
            a.sorted(),
            a.same_positions(b)
        );
    }

    println!("\n完成！");
    Ok(())
}
