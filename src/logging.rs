// ==========================================
// 库存投影引擎 - 日志系统初始化
// ==========================================
// 基于 tracing / tracing-subscriber
// 调用方 (如 run_projection) 在进入引擎前初始化一次
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// 初始化日志系统
///
/// 日志级别由 RUST_LOG 控制,默认 info。
/// 引擎的运行统计在 info 级, 聚合明细在 debug 级,
/// 例如: RUST_LOG=inventory_projection=debug
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true)
        .init();
}

/// 初始化测试环境的日志系统
///
/// 固定 debug 级并写入测试捕获器,重复调用安全
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
