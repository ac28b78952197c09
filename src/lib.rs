// ==========================================
// 生产计划看板 - 库存投影引擎核心库
// ==========================================
// 系统定位: 决策支持 (采购建议,人工最终控制权)
// 职责: 销售预测经 BOM 展开为元件月度需求,
//       推演库存消耗并分级供应风险
// 红线: 引擎为纯函数; 持久化/传输/界面均为外部协作方
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 业务规则
pub mod engine;

// 配置层 - 投影参数
pub mod config;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{OverallHealth, Priority};

// 领域实体
pub use domain::{
    BomLine, Component, ComponentDemand, Forecast, InventoryProjection, MonthlyProjection,
    Product, RiskAssessment,
};

// 引擎
pub use engine::{
    DemandAggregator, EngineError, ExportRow, ProjectionAssembler, ProjectionEngine,
    RiskClassifier, StockSimulator,
};

// 配置
pub use config::ProjectionConfig;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "库存投影引擎";

// ==========================================
// 预编译检查
// ==========================================
