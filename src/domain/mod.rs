// ==========================================
// 库存投影引擎 - 领域模型层
// ==========================================
// 职责: 定义领域实体与类型
// 红线: 不含引擎逻辑,不含 I/O
// ==========================================

pub mod component;
pub mod forecast;
pub mod product;
pub mod projection;
pub mod types;

// 重导出核心类型
pub use component::Component;
pub use forecast::Forecast;
pub use product::{BomLine, Product, PART_TYPE_BULK_SUPPLIED};
pub use projection::{
    ComponentDemand, InventoryProjection, MonthlyProjection, RiskAssessment,
};
pub use types::{OverallHealth, Priority};
