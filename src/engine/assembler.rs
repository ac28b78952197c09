// ==========================================
// 库存投影引擎 - 投影装配器
// ==========================================
// 职责: 合并聚合需求/风险评估/月度曲线为元件投影报告,
//       并提供表格导出用的扁平行表示
// 红线: 纯合并,不做二次计算; 导出列按月份时间顺序,不补齐固定视野
// ==========================================

use crate::domain::component::Component;
use crate::domain::projection::{
    ComponentDemand, InventoryProjection, MonthlyProjection, RiskAssessment,
};
use chrono::NaiveDateTime;
use serde_json::{json, Value as JsonValue};
use uuid::Uuid;

// ==========================================
// ExportRow - 导出扁平行
// ==========================================
// 列为 (表头, 值) 有序对; 各行月份列数随预测月数变化
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRow {
    pub columns: Vec<(String, JsonValue)>,
}

impl ExportRow {
    /// 按表头取值
    pub fn get(&self, header: &str) -> Option<&JsonValue> {
        self.columns
            .iter()
            .find(|(h, _)| h == header)
            .map(|(_, v)| v)
    }
}

// ==========================================
// ProjectionAssembler - 投影装配器
// ==========================================
pub struct ProjectionAssembler;

impl ProjectionAssembler {
    /// 构造函数
    pub fn new() -> Self {
        Self
    }

    /// 装配元件投影报告
    ///
    /// # 参数
    /// - `component`: 元件库存记录
    /// - `demand`: 聚合需求 (含溯源集合)
    /// - `assessment`: 风险评估
    /// - `monthly_projections`: 月度投影曲线
    /// - `generated_at`: 报告生成时间 (由调用方提供)
    ///
    /// # 不变式
    /// 投影ID 由元件编码确定性派生 (UUID v5),
    /// 相同输入两次装配产出完全相同的报告
    pub fn assemble(
        &self,
        component: &Component,
        demand: &ComponentDemand,
        assessment: RiskAssessment,
        monthly_projections: Vec<MonthlyProjection>,
        generated_at: NaiveDateTime,
    ) -> InventoryProjection {
        InventoryProjection {
            projection_id: Uuid::new_v5(&Uuid::NAMESPACE_OID, component.part_code.as_bytes())
                .to_string(),
            part_code: component.part_code.clone(),
            current_stock: component.stock,
            safety_stock: component.safety_stock,
            part_types: demand.part_types.iter().cloned().collect(),
            descriptions: demand.descriptions.iter().cloned().collect(),
            skus_used_in: demand.skus.iter().cloned().collect(),
            net_four_month_demand: assessment.net_four_month_demand,
            total_annual_demand: assessment.total_annual_demand,
            average_monthly_demand: assessment.average_monthly_demand,
            overall_health: assessment.overall_health,
            priority: assessment.priority,
            recommended_action: assessment.recommended_action,
            health_reason: assessment.health_reason,
            monthly_projections,
            generated_at,
        }
    }

    /// 生成表格导出用的扁平行
    ///
    /// # 列结构
    /// 固定列 + 每个预测月份三列:
    /// "Month N Demand" / "Month N Coverage %" / "Month N Projected SOH"
    /// N 为月份时间顺序序号 (1 起), 不对齐日历,不补齐固定视野
    pub fn export_rows(&self, projections: &[InventoryProjection]) -> Vec<ExportRow> {
        projections
            .iter()
            .map(|p| self.export_row(p))
            .collect()
    }

    fn export_row(&self, projection: &InventoryProjection) -> ExportRow {
        let mut columns: Vec<(String, JsonValue)> = vec![
            ("Part Code".to_string(), json!(projection.part_code)),
            (
                "Description".to_string(),
                json!(projection.descriptions.join("; ")),
            ),
            (
                "Part Type".to_string(),
                json!(projection.part_types.join("; ")),
            ),
            ("Current Stock".to_string(), json!(projection.current_stock)),
            (
                "SKUs Used In".to_string(),
                json!(projection.skus_used_in.join(", ")),
            ),
            (
                "Overall Health".to_string(),
                json!(projection.overall_health.to_string()),
            ),
            (
                "Priority".to_string(),
                json!(projection.priority.to_string()),
            ),
            (
                "Recommended Action".to_string(),
                json!(projection.recommended_action),
            ),
            (
                "Net 4-Month Demand".to_string(),
                json!(projection.net_four_month_demand),
            ),
            (
                "Total Annual Demand".to_string(),
                json!(projection.total_annual_demand),
            ),
            (
                "Average Monthly Demand".to_string(),
                json!(projection.average_monthly_demand),
            ),
        ];

        for (idx, monthly) in projection.monthly_projections.iter().enumerate() {
            let n = idx + 1;
            columns.push((format!("Month {} Demand", n), json!(monthly.total_demand)));
            columns.push((
                format!("Month {} Coverage %", n),
                json!(monthly.coverage_percentage),
            ));
            columns.push((
                format!("Month {} Projected SOH", n),
                json!(monthly.projected_soh),
            ));
        }

        ExportRow { columns }
    }
}

impl Default for ProjectionAssembler {
    fn default() -> Self {
        Self::new()
    }
}
