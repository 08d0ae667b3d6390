//! 动态树遍历工具库
//!
//! 面向自描述文档（JSON 等）解码后的内存树：按键路径导航、类型安全取值、
//! 谓词全树搜索以及原地批量变换。
//! 所有句柄共享底层节点（Rc），经任一句柄的修改对其它句柄可见。

pub mod model;

// 重新导出主要类型
pub use model::config::WalkConfig;
pub use model::convert::{normalize_number, TreeError};
pub use model::extract::FromNode;
pub use model::node::{ListRef, MapRef, Node, NodeKind, Scalar};
pub use model::tree_view::TreeView;
