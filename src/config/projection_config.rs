// ==========================================
// 库存投影引擎 - 投影配置
// ==========================================
// 职责: 投影计算的业务参数,默认值即生产口径
// ==========================================

use crate::domain::product::PART_TYPE_BULK_SUPPLIED;
use serde::{Deserialize, Serialize};

// ==========================================
// ProjectionConfig - 投影配置
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionConfig {
    pub demand_window_months: usize,      // 近期需求窗口: 4 个月 (有预测的月份,非日历月)
    pub days_per_month: f64,              // 覆盖天数换算: 统一 30 天月约定
    pub excluded_part_types: Vec<String>, // 不纳入需求的元件类型
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            demand_window_months: 4,
            days_per_month: 30.0,
            excluded_part_types: vec![PART_TYPE_BULK_SUPPLIED.to_string()],
        }
    }
}

impl ProjectionConfig {
    /// 判断元件类型是否被排除
    pub fn is_excluded_part_type(&self, part_type: &str) -> bool {
        self.excluded_part_types.iter().any(|t| t == part_type)
    }
}
