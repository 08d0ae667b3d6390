//! 树节点：Map / List / Scalar 三态标签联合
//!
//! 容器节点以 `Rc<RefCell<..>>` 持有，克隆节点只增加引用计数，不复制结构，
//! 因此经任意引用做的修改对所有共享者可见。

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// 共享的映射节点
pub type MapRef = Rc<RefCell<HashMap<String, Node>>>;
/// 共享的列表节点
pub type ListRef = Rc<RefCell<Vec<Node>>>;

/// 节点类型标签（取值时的类型比较依据）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Map,
    List,
    Null,
    Bool,
    Int,
    Float,
    Number,
    Str,
}

impl NodeKind {
    pub fn is_container(self) -> bool {
        matches!(self, NodeKind::Map | NodeKind::List)
    }
}

/// 叶子值
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    /// 延迟定型的数字（解码器保留原始数字，由调用方在 set_all 中归一化）
    Number(serde_json::Number),
    Str(String),
}

impl Scalar {
    pub fn kind(&self) -> NodeKind {
        match self {
            Scalar::Null => NodeKind::Null,
            Scalar::Bool(_) => NodeKind::Bool,
            Scalar::Int(_) => NodeKind::Int,
            Scalar::Float(_) => NodeKind::Float,
            Scalar::Number(_) => NodeKind::Number,
            Scalar::Str(_) => NodeKind::Str,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Node {
    Map(MapRef),
    List(ListRef),
    Scalar(Scalar),
}

impl Node {
    /// 新建空映射节点
    pub fn new_map() -> Self {
        Node::Map(Rc::new(RefCell::new(HashMap::new())))
    }

    /// 新建空列表节点
    pub fn new_list() -> Self {
        Node::List(Rc::new(RefCell::new(Vec::new())))
    }

    /// 由键值对构建映射节点
    pub fn map_from<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Node>,
    {
        let map: HashMap<String, Node> = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Node::Map(Rc::new(RefCell::new(map)))
    }

    /// 由元素序列构建列表节点
    pub fn list_from<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Node>,
    {
        let list: Vec<Node> = items.into_iter().map(Into::into).collect();
        Node::List(Rc::new(RefCell::new(list)))
    }

    pub fn null() -> Self {
        Node::Scalar(Scalar::Null)
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Map(_) => NodeKind::Map,
            Node::List(_) => NodeKind::List,
            Node::Scalar(s) => s.kind(),
        }
    }

    pub fn is_container(&self) -> bool {
        self.kind().is_container()
    }

    pub fn as_map(&self) -> Option<&MapRef> {
        match self {
            Node::Map(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&ListRef> {
        match self {
            Node::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Node::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// 同一性比较：容器比较是否指向同一底层节点，标量按值比较
    pub fn ptr_eq(&self, other: &Node) -> bool {
        match (self, other) {
            (Node::Map(a), Node::Map(b)) => Rc::ptr_eq(a, b),
            (Node::List(a), Node::List(b)) => Rc::ptr_eq(a, b),
            (Node::Scalar(a), Node::Scalar(b)) => a == b,
            _ => false,
        }
    }

    /// 结构相等（递归比较内容）
    pub fn deep_eq(&self, other: &Node) -> bool {
        match (self, other) {
            (Node::Map(a), Node::Map(b)) => {
                if Rc::ptr_eq(a, b) {
                    return true;
                }
                let (a, b) = (a.borrow(), b.borrow());
                a.len() == b.len()
                    && a
                        .iter()
                        .all(|(k, v)| b.get(k).is_some_and(|w| v.deep_eq(w)))
            }
            (Node::List(a), Node::List(b)) => {
                if Rc::ptr_eq(a, b) {
                    return true;
                }
                let (a, b) = (a.borrow(), b.borrow());
                a.len() == b.len() && a.iter().zip(b.iter()).all(|(v, w)| v.deep_eq(w))
            }
            (Node::Scalar(a), Node::Scalar(b)) => a == b,
            _ => false,
        }
    }

    /// 轻量预览（字符串截断、容器只显示大小），用于日志
    pub fn preview(&self) -> String {
        match self {
            Node::Scalar(Scalar::Str(s)) => {
                if s.chars().count() > 32 {
                    let truncated: String = s.chars().take(32).collect();
                    format!("\"{}...\"", truncated)
                } else {
                    format!("\"{}\"", s)
                }
            }
            Node::Scalar(Scalar::Number(n)) => n.to_string(),
            Node::Scalar(Scalar::Int(i)) => i.to_string(),
            Node::Scalar(Scalar::Float(f)) => f.to_string(),
            Node::Scalar(Scalar::Bool(b)) => b.to_string(),
            Node::Scalar(Scalar::Null) => "null".to_string(),
            Node::Map(m) => format!("{{..}} ({} keys)", m.borrow().len()),
            Node::List(a) => format!("[..] ({} items)", a.borrow().len()),
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.deep_eq(other)
    }
}

impl From<Scalar> for Node {
    fn from(s: Scalar) -> Self {
        Node::Scalar(s)
    }
}

impl From<bool> for Node {
    fn from(b: bool) -> Self {
        Node::Scalar(Scalar::Bool(b))
    }
}

impl From<i64> for Node {
    fn from(i: i64) -> Self {
        Node::Scalar(Scalar::Int(i))
    }
}

impl From<i32> for Node {
    fn from(i: i32) -> Self {
        Node::Scalar(Scalar::Int(i64::from(i)))
    }
}

impl From<f64> for Node {
    fn from(f: f64) -> Self {
        Node::Scalar(Scalar::Float(f))
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::Scalar(Scalar::Str(s.to_string()))
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::Scalar(Scalar::Str(s))
    }
}

impl From<serde_json::Number> for Node {
    fn from(n: serde_json::Number) -> Self {
        Node::Scalar(Scalar::Number(n))
    }
}

impl From<()> for Node {
    fn from(_: ()) -> Self {
        Node::null()
    }
}

impl From<MapRef> for Node {
    fn from(m: MapRef) -> Self {
        Node::Map(m)
    }
}

impl From<ListRef> for Node {
    fn from(l: ListRef) -> Self {
        Node::List(l)
    }
}

impl From<Vec<Node>> for Node {
    fn from(items: Vec<Node>) -> Self {
        Node::List(Rc::new(RefCell::new(items)))
    }
}
