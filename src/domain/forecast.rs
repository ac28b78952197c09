// ==========================================
// 库存投影引擎 - 销售预测领域模型
// ==========================================
// 职责: 按产品的稀疏月度预测
// 红线: 月份键固定为 "YYYY-MM" 零填充格式,
//       字符串排序即时间顺序,禁止改用日期类型重推
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// Forecast - 产品月度预测
// ==========================================
// 约定: 未出现的月份视为零需求; 预测值单位为 shipper
// BTreeMap 保证月份按 "YYYY-MM" 字符串升序迭代
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Forecast {
    pub product_code: String,                     // 产品编码
    #[serde(default)]
    pub monthly_forecast: BTreeMap<String, f64>,  // 月份 -> 预测 shipper 数
}

impl Forecast {
    /// 构造预测记录 (测试与调用方便捷构造)
    pub fn new(
        product_code: impl Into<String>,
        months: impl IntoIterator<Item = (&'static str, f64)>,
    ) -> Self {
        Self {
            product_code: product_code.into(),
            monthly_forecast: months
                .into_iter()
                .map(|(m, qty)| (m.to_string(), qty))
                .collect(),
        }
    }
}
