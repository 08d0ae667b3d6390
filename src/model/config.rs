//! 遍历配置

use serde::Deserialize;

/// 默认不限制深度
pub const DEFAULT_MAX_DEPTH: Option<usize> = None;

/// find_all / set_all 的遍历限制
///
/// 根映射深度为 0，每进入一层容器（映射或列表）深度加一；
/// 超过 `max_depth` 的容器不再下探。输入树不可信时设置上限以避免栈溢出。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WalkConfig {
    pub max_depth: Option<usize>,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl WalkConfig {
    pub fn unbounded() -> Self {
        Self { max_depth: None }
    }

    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth: Some(max_depth),
        }
    }

    /// 深度 `depth` 的容器是否允许进入
    pub fn allows(&self, depth: usize) -> bool {
        self.max_depth.map_or(true, |max| depth <= max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unbounded() {
        let cfg = WalkConfig::default();
        assert_eq!(cfg, WalkConfig::unbounded());
        assert!(cfg.allows(usize::MAX));
    }

    #[test]
    fn test_allows_up_to_max_depth() {
        let cfg = WalkConfig::with_max_depth(2);
        assert!(cfg.allows(0));
        assert!(cfg.allows(2));
        assert!(!cfg.allows(3));
    }

    #[test]
    fn test_deserialize_from_json() {
        let cfg: WalkConfig = serde_json::from_str(r#"{"max_depth": 8}"#).unwrap();
        assert_eq!(cfg.max_depth, Some(8));

        let cfg: WalkConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, WalkConfig::default(), "缺省字段应使用默认值");
    }
}
