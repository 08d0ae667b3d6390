//! 性能基准测试模块
//!
//! 生成大规模合成树，测量 find_all / set_all 在整树上的耗时

use std::time::Instant;

use serde_json::{json, Value};

use crate::model::config::WalkConfig;
use crate::model::convert::{normalize_number, TreeError};
use crate::model::tree_view::TreeView;

/// 性能测试结果
#[derive(Debug)]
pub struct PerformanceResult {
    pub operation: String,
    pub duration_ms: u128,
    pub success: bool,
    pub details: String,
}

impl PerformanceResult {
    pub fn new(operation: &str, duration_ms: u128, success: bool, details: &str) -> Self {
        Self {
            operation: operation.to_string(),
            duration_ms,
            success,
            details: details.to_string(),
        }
    }
}

/// 生成大型测试JSON数据
pub fn generate_large_json(depth: usize, width: usize) -> Value {
    fn create_nested_object(current_depth: usize, max_depth: usize, width: usize) -> Value {
        if current_depth >= max_depth {
            return json!("叶子节点值");
        }

        let mut obj = serde_json::Map::new();
        for i in 0..width {
            let key = format!("field_{}", i);
            let value = match i % 5 {
                0 => json!(format!("字符串值_{}", i)),
                1 => json!(i as i64),
                2 => json!(i % 2 == 0),
                3 => json!([1, 2.5, 3, i]),
                _ => create_nested_object(current_depth + 1, max_depth, width / 2),
            };
            obj.insert(key, value);
        }

        Value::Object(obj)
    }

    let mut root = serde_json::Map::new();
    root.insert(
        "metadata".to_string(),
        json!({
            "depth": depth,
            "width": width,
            "description": "性能测试用大型树"
        }),
    );
    root.insert("data".to_string(), create_nested_object(0, depth, width));

    let large_array: Vec<Value> = (0..width * 10)
        .map(|i| {
            json!({
                "id": i,
                "name": format!("项目_{}", i),
                "value": i * 2,
                "active": i % 3 == 0
            })
        })
        .collect();
    root.insert("items".to_string(), json!(large_array));

    Value::Object(root)
}

/// 生成大型测试树
pub fn generate_large_tree(depth: usize, width: usize) -> Result<TreeView, TreeError> {
    TreeView::from_json(generate_large_json(depth, width))
}

/// 测试按键搜索性能
pub fn benchmark_find_all(tree: &TreeView, key: &str) -> PerformanceResult {
    let start = Instant::now();
    let hits = tree.find_all_with_key(key);
    let duration = start.elapsed();

    PerformanceResult::new(
        &format!("按键搜索: {}", key),
        duration.as_millis(),
        true,
        &format!("命中 {} 个映射", hits.len()),
    )
}

/// 测试批量变换性能（数字归一化）
pub fn benchmark_set_all(tree: &TreeView, cfg: &WalkConfig) -> PerformanceResult {
    let start = Instant::now();
    let changed = tree.set_all_with_config(cfg, normalize_number);
    let duration = start.elapsed();

    PerformanceResult::new(
        "数字归一化",
        duration.as_millis(),
        true,
        &format!("替换了 {} 个位置", changed),
    )
}

/// 运行综合性能测试
pub fn run_performance_suite() -> Vec<PerformanceResult> {
    let mut results = Vec::new();

    let test_cases = [
        (3, 10), // 小型：深度3，宽度10
        (4, 20), // 中型：深度4，宽度20
        (5, 30), // 大型：深度5，宽度30
    ];

    for (depth, width) in test_cases {
        tracing::info!("测试规模：深度{}，宽度{}", depth, width);

        let start = Instant::now();
        let tree = match generate_large_tree(depth, width) {
            Ok(tree) => tree,
            Err(e) => {
                results.push(PerformanceResult::new(
                    &format!("数据生成({}x{})", depth, width),
                    start.elapsed().as_millis(),
                    false,
                    &format!("生成失败: {}", e),
                ));
                continue;
            }
        };
        results.push(PerformanceResult::new(
            &format!("数据生成({}x{})", depth, width),
            start.elapsed().as_millis(),
            true,
            &format!("生成了深度{}宽度{}的树", depth, width),
        ));

        results.push(benchmark_find_all(&tree, "id"));
        results.push(benchmark_find_all(&tree, "field_0"));
        results.push(benchmark_set_all(&tree, &WalkConfig::default()));
    }

    results
}
