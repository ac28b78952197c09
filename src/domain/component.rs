// ==========================================
// 库存投影引擎 - 元件领域模型
// ==========================================
// 职责: 库存快照中的元件(零部件)记录
// 来源: 外部库存快照,投影计算期间只读
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// Component - 元件库存记录
// ==========================================
// 用途: 投影计算的库存侧输入
// 约定: part_code 为唯一键; stock 允许为负(超额占用)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    pub part_code: String,         // 元件编码 (唯一键)
    #[serde(default)]
    pub stock: f64,                // 当前在库量 (SOH, 可为负)
    #[serde(default)]
    pub safety_stock: Option<f64>, // 安全库存 (可选)
}

impl Component {
    /// 构造元件记录 (测试与调用方便捷构造)
    pub fn new(part_code: impl Into<String>, stock: f64) -> Self {
        Self {
            part_code: part_code.into(),
            stock,
            safety_stock: None,
        }
    }
}
