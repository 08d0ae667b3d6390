//! serde_json 互转与数字归一化
//!
//! 解码交给 serde_json，这里只负责 `serde_json::Value` 与 `Node` 的相互转换。
//! 数字以 `Scalar::Number` 保留（延迟定型），由 `normalize_number` 在 set_all 中收敛。

use serde_json::{Map, Number, Value};
use thiserror::Error;

use crate::model::node::{Node, NodeKind, Scalar};
use crate::model::tree_view::TreeView;

#[derive(Error, Debug)]
pub enum TreeError {
    #[error("根节点不是映射: {0:?}")]
    NotAMap(NodeKind),
    #[error("浮点数无法表示为JSON: {0}")]
    NonFiniteFloat(f64),
    #[error("JSON解析失败: {0}")]
    Parse(#[from] serde_json::Error),
}

impl From<Value> for Node {
    fn from(v: Value) -> Self {
        match v {
            Value::Null => Node::null(),
            Value::Bool(b) => Node::from(b),
            Value::Number(n) => Node::from(n),
            Value::String(s) => Node::from(s),
            Value::Array(items) => Node::list_from(items),
            Value::Object(map) => Node::map_from(map),
        }
    }
}

impl TryFrom<&Node> for Value {
    type Error = TreeError;

    fn try_from(node: &Node) -> Result<Self, Self::Error> {
        let v = match node {
            Node::Scalar(Scalar::Null) => Value::Null,
            Node::Scalar(Scalar::Bool(b)) => Value::Bool(*b),
            Node::Scalar(Scalar::Int(i)) => Value::Number((*i).into()),
            Node::Scalar(Scalar::Float(f)) => Number::from_f64(*f)
                .map(Value::Number)
                .ok_or(TreeError::NonFiniteFloat(*f))?,
            Node::Scalar(Scalar::Number(n)) => Value::Number(n.clone()),
            Node::Scalar(Scalar::Str(s)) => Value::String(s.clone()),
            Node::List(items) => Value::Array(
                items
                    .borrow()
                    .iter()
                    .map(Value::try_from)
                    .collect::<Result<Vec<_>, _>>()?,
            ),
            Node::Map(map) => {
                let map = map.borrow();
                let mut out = Map::with_capacity(map.len());
                for (k, v) in map.iter() {
                    out.insert(k.clone(), Value::try_from(v)?);
                }
                Value::Object(out)
            }
        };
        Ok(v)
    }
}

impl TreeView {
    /// 包裹解码后的 JSON 对象；根不是对象时报错
    pub fn from_json(value: Value) -> Result<TreeView, TreeError> {
        match Node::from(value) {
            Node::Map(map) => Ok(TreeView::new(map)),
            other => Err(TreeError::NotAMap(other.kind())),
        }
    }

    /// 用 serde_json 解码字符串后包裹
    pub fn from_json_str(s: &str) -> Result<TreeView, TreeError> {
        let value: Value = serde_json::from_str(s)?;
        Self::from_json(value)
    }

    /// 导出为 JSON；空句柄导出 null
    pub fn to_json(&self) -> Result<Value, TreeError> {
        match self.map_ref() {
            Some(map) => Value::try_from(&Node::Map(map.clone())),
            None => Ok(Value::Null),
        }
    }
}

/// set_all 用的数字归一化变换
///
/// 延迟定型的数字优先收敛为 `Int`，超出 i64 的收敛为 `Float`，
/// 两者都不行时保留原文为字符串。其余节点不变。
pub fn normalize_number(_key: &str, node: &Node) -> Option<Node> {
    let Node::Scalar(Scalar::Number(n)) = node else {
        return None;
    };
    if let Some(i) = n.as_i64() {
        Some(Node::from(i))
    } else if let Some(f) = n.as_f64() {
        Some(Node::from(f))
    } else {
        Some(Node::from(n.to_string()))
    }
}
