//! 性能基准演示：生成合成树并测量 find_all / set_all

use anyhow::Context;
use maptraverse::model::performance::run_performance_suite;
use maptraverse::{normalize_number, TreeView};
use tracing_subscriber::fmt::SubscriberBuilder;

fn main() -> anyhow::Result<()> {
    SubscriberBuilder::default()
        .with_max_level(tracing::Level::INFO)
        .init();

    let tree = TreeView::from_json_str(r#"{"foo": 111, "nested": {"bar": 444.5}, "array": [555, {"foo": 777}]}"#)
        .context("示例数据解析失败")?;
    let changed = tree.set_all(normalize_number);
    tracing::info!("示例数据归一化：替换了 {} 个位置", changed);
    tracing::info!("含 foo 的映射：{} 个", tree.find_all_with_key("foo").len());

    for r in run_performance_suite() {
        let status = if r.success { "OK" } else { "FAIL" };
        println!("[{}] {:<24} {:>6}ms  {}", status, r.operation, r.duration_ms, r.details);
    }

    Ok(())
}
