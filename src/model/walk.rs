//! 递归遍历：TreeView::find_all / set_all 委托到这里的自由函数
//!
//! 两个遍历对映射与列表的处理并不对称：
//! - 搜索时列表只负责下探，自身永远不会作为结果；
//! - 变换时映射条目无论值类型都会交给回调，列表元素中的映射则直接下探、
//!   不经回调，其余元素（标量或嵌套列表）以空键交给回调，嵌套列表不再下探。

use crate::model::config::WalkConfig;
use crate::model::node::{ListRef, MapRef, Node};
use crate::model::tree_view::TreeView;

/// 空键：列表元素没有键名
pub const ELEMENT_KEY: &str = "";

fn descend(cfg: &WalkConfig, depth: usize) -> bool {
    if cfg.allows(depth) {
        true
    } else {
        tracing::warn!(depth, max_depth = ?cfg.max_depth, "超出最大遍历深度，跳过该分支");
        false
    }
}

/// 收集直接包含满足谓词条目的映射（每命中一个键收集一次，不去重）
pub(crate) fn find_in_map<F>(
    map: &MapRef,
    depth: usize,
    cfg: &WalkConfig,
    pred: &mut F,
    out: &mut Vec<TreeView>,
) where
    F: FnMut(&str, &Node) -> bool,
{
    let entries = map.borrow();
    for (k, v) in entries.iter() {
        if pred(k.as_str(), v) {
            out.push(TreeView::new(map.clone()));
        }
        find_in_node(v, depth + 1, cfg, pred, out);
    }
}

fn find_in_node<F>(node: &Node, depth: usize, cfg: &WalkConfig, pred: &mut F, out: &mut Vec<TreeView>)
where
    F: FnMut(&str, &Node) -> bool,
{
    match node {
        Node::Map(map) => {
            if descend(cfg, depth) {
                find_in_map(map, depth, cfg, pred, out);
            }
        }
        Node::List(items) => {
            if descend(cfg, depth) {
                for item in items.borrow().iter() {
                    find_in_node(item, depth + 1, cfg, pred, out);
                }
            }
        }
        Node::Scalar(_) => {}
    }
}

/// 对映射条目逐个调用变换，返回实际替换的位置数
pub(crate) fn set_in_map<F>(map: &MapRef, depth: usize, cfg: &WalkConfig, f: &mut F) -> usize
where
    F: FnMut(&str, &Node) -> Option<Node>,
{
    let mut changed = 0;
    let mut entries = map.borrow_mut();
    for (k, slot) in entries.iter_mut() {
        if let Some(new_value) = f(k.as_str(), slot) {
            tracing::trace!(key = %k, from = %slot.preview(), to = %new_value.preview(), "替换节点");
            *slot = new_value;
            changed += 1;
        }
        // 按替换后的值继续下探
        match slot {
            Node::Map(child) => {
                if descend(cfg, depth + 1) {
                    changed += set_in_map(child, depth + 1, cfg, f);
                }
            }
            Node::List(items) => {
                if descend(cfg, depth + 1) {
                    changed += set_in_list(items, depth + 1, cfg, f);
                }
            }
            Node::Scalar(_) => {}
        }
    }
    changed
}

fn set_in_list<F>(items: &ListRef, depth: usize, cfg: &WalkConfig, f: &mut F) -> usize
where
    F: FnMut(&str, &Node) -> Option<Node>,
{
    let mut changed = 0;
    let mut items = items.borrow_mut();
    for (idx, slot) in items.iter_mut().enumerate() {
        match slot {
            Node::Map(child) => {
                if descend(cfg, depth + 1) {
                    changed += set_in_map(child, depth + 1, cfg, f);
                }
            }
            other => {
                if let Some(new_value) = f(ELEMENT_KEY, other) {
                    tracing::trace!(index = idx, from = %other.preview(), to = %new_value.preview(), "替换列表元素");
                    *other = new_value;
                    changed += 1;
                }
            }
        }
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::node::Scalar;

    fn nested(depth: usize) -> MapRef {
        // {"v": 0, "next": {"v": 1, "next": {...}}}
        let mut node = Node::map_from([("v", depth as i64)]);
        for d in (0..depth).rev() {
            node = Node::map_from([("v", Node::from(d as i64)), ("next", node)]);
        }
        node.as_map().cloned().unwrap()
    }

    #[test]
    fn test_find_respects_max_depth() {
        let root = nested(5);
        let mut out = Vec::new();
        find_in_map(&root, 0, &WalkConfig::with_max_depth(2), &mut |k, _| k == "v", &mut out);
        assert_eq!(out.len(), 3, "深度0、1、2三层映射");

        let mut out = Vec::new();
        find_in_map(&root, 0, &WalkConfig::unbounded(), &mut |k, _| k == "v", &mut out);
        assert_eq!(out.len(), 6);
    }

    #[test]
    fn test_set_respects_max_depth() {
        let root = nested(5);
        let mut bump = |_: &str, v: &Node| match v {
            Node::Scalar(Scalar::Int(i)) => Some(Node::from(i + 100)),
            _ => None,
        };
        let changed = set_in_map(&root, 0, &WalkConfig::with_max_depth(0), &mut bump);
        assert_eq!(changed, 1, "只变换根映射自身的条目");
    }

    #[test]
    fn test_list_depth_counts_as_level() {
        // 根(0) -> list(1) -> map(2)
        let root = Node::map_from([("items", Node::list_from([Node::map_from([("v", 1i64)])]))]);
        let root = root.as_map().cloned().unwrap();

        let mut out = Vec::new();
        find_in_map(&root, 0, &WalkConfig::with_max_depth(1), &mut |k, _| k == "v", &mut out);
        assert!(out.is_empty());

        let mut out = Vec::new();
        find_in_map(&root, 0, &WalkConfig::with_max_depth(2), &mut |k, _| k == "v", &mut out);
        assert_eq!(out.len(), 1);
    }
}
