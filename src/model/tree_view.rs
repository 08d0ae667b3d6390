//! TreeView：映射节点上的轻量句柄
//!
//! 句柄只持有共享引用，不复制结构。空句柄（未包裹任何映射）是合法值：
//! 读操作返回未找到，写操作返回 false，搜索返回空，变换返回 0。

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::model::config::WalkConfig;
use crate::model::extract::FromNode;
use crate::model::node::{MapRef, Node, NodeKind};
use crate::model::walk;

#[derive(Debug, Clone, Default)]
pub struct TreeView {
    map: Option<MapRef>,
}

impl TreeView {
    /// 包裹已有的映射节点
    pub fn new(map: MapRef) -> Self {
        Self { map: Some(map) }
    }

    /// 空句柄
    pub fn empty() -> Self {
        Self { map: None }
    }

    /// 接管一个映射并包裹
    pub fn from_map(map: HashMap<String, Node>) -> Self {
        Self::new(Rc::new(RefCell::new(map)))
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_none()
    }

    /// 底层映射节点（空句柄为 None）
    pub fn map_ref(&self) -> Option<&MapRef> {
        self.map.as_ref()
    }

    /// 当前映射的键（顺序不保证）
    pub fn keys(&self) -> Vec<String> {
        self.map
            .as_ref()
            .map(|m| m.borrow().keys().cloned().collect())
            .unwrap_or_default()
    }

    /// 当前映射的条目数
    pub fn len(&self) -> usize {
        self.map.as_ref().map_or(0, |m| m.borrow().len())
    }

    fn get(&self, key: &str) -> Option<Node> {
        self.map.as_ref()?.borrow().get(key).cloned()
    }

    /// 按键路径逐层进入子映射
    ///
    /// 任一步键不存在或值不是映射时，其后各步都得到空句柄；空路径返回自身。
    pub fn child<I, K>(&self, path: I) -> TreeView
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        path.into_iter().fold(self.clone(), |view, key| {
            view.value::<TreeView>(key.as_ref()).unwrap_or_default()
        })
    }

    /// 按类型取值：键不存在与类型不符都返回 None
    pub fn value<T: FromNode>(&self, key: &str) -> Option<T> {
        self.get(key).and_then(|node| T::from_node(&node))
    }

    /// 以样例节点的类型取值
    pub fn value_like(&self, key: &str, sample: &Node) -> Option<Node> {
        self.get(key).filter(|node| node.kind() == sample.kind())
    }

    /// 键对应值的类型；配合 value 区分“不存在”与“类型不符”
    pub fn kind_of(&self, key: &str) -> Option<NodeKind> {
        self.map.as_ref()?.borrow().get(key).map(Node::kind)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.map
            .as_ref()
            .is_some_and(|m| m.borrow().contains_key(key))
    }

    /// 插入或覆盖当前映射中的键，只有空句柄返回 false
    pub fn set(&self, key: &str, value: impl Into<Node>) -> bool {
        let Some(map) = self.map.as_ref() else {
            return false;
        };
        map.borrow_mut().insert(key.to_string(), value.into());
        true
    }

    /// 删除当前映射中的键；键本不存在也视为成功，只有空句柄返回 false
    pub fn delete(&self, key: &str) -> bool {
        let Some(map) = self.map.as_ref() else {
            return false;
        };
        map.borrow_mut().remove(key);
        true
    }

    /// 深度优先搜索整棵树，返回直接包含满足谓词条目的映射句柄
    ///
    /// 一个映射有几个键命中就出现几次；结果顺序不保证。
    pub fn find_all<F>(&self, pred: F) -> Vec<TreeView>
    where
        F: FnMut(&str, &Node) -> bool,
    {
        self.find_all_with_config(&WalkConfig::default(), pred)
    }

    pub fn find_all_with_config<F>(&self, cfg: &WalkConfig, mut pred: F) -> Vec<TreeView>
    where
        F: FnMut(&str, &Node) -> bool,
    {
        let Some(map) = self.map.as_ref() else {
            return Vec::new();
        };
        let mut out = Vec::new();
        walk::find_in_map(map, 0, cfg, &mut pred, &mut out);
        tracing::debug!("find_all: 命中 {} 个映射", out.len());
        out
    }

    /// 查找所有直接包含 `key` 的映射
    pub fn find_all_with_key(&self, key: &str) -> Vec<TreeView> {
        self.find_all(|k, _| k == key)
    }

    /// 原地批量变换，返回实际替换的位置数
    ///
    /// 映射条目无论值类型都会交给 `f`（键为真实键名），容器值需由 `f` 自行返回 None；
    /// 列表中的非映射元素以空键交给 `f`。`f` 返回 Some 时替换该位置。
    pub fn set_all<F>(&self, f: F) -> usize
    where
        F: FnMut(&str, &Node) -> Option<Node>,
    {
        self.set_all_with_config(&WalkConfig::default(), f)
    }

    pub fn set_all_with_config<F>(&self, cfg: &WalkConfig, mut f: F) -> usize
    where
        F: FnMut(&str, &Node) -> Option<Node>,
    {
        let Some(map) = self.map.as_ref() else {
            return 0;
        };
        let changed = walk::set_in_map(map, 0, cfg, &mut f);
        tracing::debug!("set_all: 替换了 {} 个位置", changed);
        changed
    }
}

/// 按节点同一性比较；两个空句柄相等
impl PartialEq for TreeView {
    fn eq(&self, other: &Self) -> bool {
        match (&self.map, &other.map) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl Eq for TreeView {}

impl From<MapRef> for TreeView {
    fn from(map: MapRef) -> Self {
        Self::new(map)
    }
}

/// 空句柄转为 null
impl From<TreeView> for Node {
    fn from(view: TreeView) -> Self {
        view.map.map_or_else(Node::null, Node::Map)
    }
}

impl FromNode for TreeView {
    fn from_node(node: &Node) -> Option<Self> {
        node.as_map().cloned().map(TreeView::new)
    }
}
