//! User Roster TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置与数据加载 (`backend/`)
//!
//!
//! main.rs
//! User Roster TUI 的程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     init_logging()              // 日志写入文件（终端归 UI 所有）
//!     LocalConfigService::load()  // 读取配置：默认值 → config.json → 环境变量
//!     set_language / set_theme    // 应用语言与主题
//!     spawn_initial_load()        // 在 tokio 上发起唯一一次用户请求
//!     init_terminal()             // 初始化终端
//!     app::run()                  // 运行 app.rs 主循环
//!     restore_terminal()          // 无论成功与否，都恢复终端
//!
//! }
//!
//!
//! 用户请求与主循环并行进行：
//!     请求完成前表格显示 "Loading users..."，
//!     完成后 RosterService 通过通道发送 AppMessage::UsersLoaded，
//!     主循环在下一轮取出并交给 Update 层。

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;
use user_roster_core::{HttpUserSource, UserSource};

use backend::{start_initial_load, ConfigService, LocalConfigService};
use util::{init_logging, init_terminal, log_dir, restore_terminal};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // 1. 初始化日志
    // guard 保留到 main 结束，退出时刷新日志
    let log_dir = log_dir();
    let _log_guard = match init_logging(&log_dir) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Logging disabled ({}): {e}", log_dir.display());
            None
        }
    };

    // 2. 读取配置
    let config_service = LocalConfigService::new();
    let config = config_service.load()?;
    log::info!(
        "Starting User Roster (config: {}, endpoint: {})",
        config_service.path().display(),
        config.endpoint
    );

    // 3. 语言与主题
    i18n::set_language(config.language());
    view::theme::set_theme(config.theme());
    log::debug!("Language: {}", i18n::current_language().display_name());

    // 4. 后台加载用户
    let source = HttpUserSource::new(config.source_config())
        .map(|source| Arc::new(source) as Arc<dyn UserSource>);
    let (tx, mut rx) = mpsc::unbounded_channel();
    let _loader = start_initial_load(source, tx);

    // 5. 初始化终端
    let mut terminal = init_terminal()?;

    // 6. 创建应用实例
    let mut app = model::App::with_row_coloring(config.row_coloring);

    // 7. 运行主循环
    let result = app::run(&mut terminal, &mut app, &mut rx);

    // 8. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    log::info!("User Roster exited");

    // 9. 返回结果
    result
}
