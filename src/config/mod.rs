// ==========================================
// 库存投影引擎 - 配置层
// ==========================================
// 职责: 投影计算参数
// ==========================================

pub mod projection_config;

// 重导出核心配置
pub use projection_config::ProjectionConfig;
