//! 类型化取值：`FromNode` 按节点类型精确匹配，类型不符统一返回 None

use crate::model::node::{ListRef, MapRef, Node, Scalar};

/// 从节点中按目标类型提取值
///
/// 匹配是精确的：`Int` 不会被当作 `f64` 取出，延迟定型的 `Number`
/// 也只能以 `serde_json::Number` 取出。
pub trait FromNode: Sized {
    fn from_node(node: &Node) -> Option<Self>;
}

impl FromNode for String {
    fn from_node(node: &Node) -> Option<Self> {
        match node {
            Node::Scalar(Scalar::Str(s)) => Some(s.clone()),
            _ => None,
        }
    }
}

impl FromNode for bool {
    fn from_node(node: &Node) -> Option<Self> {
        match node {
            Node::Scalar(Scalar::Bool(b)) => Some(*b),
            _ => None,
        }
    }
}

impl FromNode for i64 {
    fn from_node(node: &Node) -> Option<Self> {
        match node {
            Node::Scalar(Scalar::Int(i)) => Some(*i),
            _ => None,
        }
    }
}

impl FromNode for f64 {
    fn from_node(node: &Node) -> Option<Self> {
        match node {
            Node::Scalar(Scalar::Float(f)) => Some(*f),
            _ => None,
        }
    }
}

impl FromNode for serde_json::Number {
    fn from_node(node: &Node) -> Option<Self> {
        match node {
            Node::Scalar(Scalar::Number(n)) => Some(n.clone()),
            _ => None,
        }
    }
}

/// null
impl FromNode for () {
    fn from_node(node: &Node) -> Option<Self> {
        match node {
            Node::Scalar(Scalar::Null) => Some(()),
            _ => None,
        }
    }
}

impl FromNode for Scalar {
    fn from_node(node: &Node) -> Option<Self> {
        node.as_scalar().cloned()
    }
}

/// 任意类型
impl FromNode for Node {
    fn from_node(node: &Node) -> Option<Self> {
        Some(node.clone())
    }
}

impl FromNode for MapRef {
    fn from_node(node: &Node) -> Option<Self> {
        node.as_map().cloned()
    }
}

impl FromNode for ListRef {
    fn from_node(node: &Node) -> Option<Self> {
        node.as_list().cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn test_exact_kind_matching() {
        assert_eq!(String::from_node(&Node::from("bar")), Some("bar".to_string()));
        assert_eq!(String::from_node(&Node::from(123i64)), None);
        assert_eq!(i64::from_node(&Node::from(123i64)), Some(123));
        assert_eq!(i64::from_node(&Node::from(123.0)), None);
        assert_eq!(f64::from_node(&Node::from(1.5)), Some(1.5));
        assert_eq!(bool::from_node(&Node::from(false)), Some(false));
        assert_eq!(<()>::from_node(&Node::null()), Some(()));
        assert_eq!(<()>::from_node(&Node::from("")), None);
    }

    #[test]
    fn test_deferred_number_only_as_number() {
        let node = Node::from(serde_json::Number::from(555));
        assert_eq!(i64::from_node(&node), None, "未归一化的数字不应被当作整数");
        assert_eq!(
            serde_json::Number::from_node(&node),
            Some(serde_json::Number::from(555))
        );
    }

    #[test]
    fn test_container_extraction_shares_node() {
        let node = Node::map_from([("a", 1i64)]);
        let map = MapRef::from_node(&node).expect("应取出映射");
        assert!(Rc::ptr_eq(&map, node.as_map().unwrap()));
        assert!(ListRef::from_node(&node).is_none());
        assert!(Scalar::from_node(&node).is_none());
        assert!(Node::from_node(&node).is_some());
    }
}
