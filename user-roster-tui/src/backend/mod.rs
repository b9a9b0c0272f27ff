//!
//! src/backend/mod.rs
//! Backend 层：业务服务
//!
//! Backend 层与 UI 完全解耦，负责配置读取与数据加载。
//! 通过 user-roster-core 库访问用户 API。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_service;     // 配置（默认值 / JSON 文件 / 环境变量）
//!         mod roster_service;     // 启动时加载用户
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、配置服务（LocalConfigService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     存储位置：~/.config/user-roster/config.json
//!
//!         {
//!             "endpoint": "https://randomuser.me/api/",
//!             "results": 100,
//!             "timeout_secs": 30,
//!             "language": "es-ES",
//!             "theme": "dark",
//!             "row_coloring": false
//!         }
//!
//!     所有字段可选。文件不存在不算错误，格式错误时记录日志并使用默认值。
//!     环境变量 USER_ROSTER_ENDPOINT / USER_ROSTER_RESULTS /
//!     USER_ROSTER_LANG / USER_ROSTER_THEME 覆盖文件中的值。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、用户加载服务（RosterService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     持有一个 `Arc<dyn UserSource>`（正式运行时为 HttpUserSource）。
//!
//!     数据流：
//!         main.rs 创建 mpsc 通道
//!             ↓
//!         start_initial_load(source, tx)
//!             ↓                                    数据源创建失败时直接发送空列表
//!         RosterService::spawn_initial_load(tx)   （tokio::spawn）
//!             ↓
//!         user_roster_core::load_users()           失败时记录日志并返回空列表
//!             ↓
//!         tx.send(AppMessage::UsersLoaded(users))
//!             ↓
//!         app.rs 主循环 try_recv() 取出消息，交给 Update 层
//!             ↓
//!         ViewState::dispatch(Action::Loaded(users))
//!
//!     只在启动时请求一次，没有刷新、重试或取消。
//!

mod config_service;
mod roster_service;

pub use config_service::{ConfigService, LocalConfigService};
pub use roster_service::start_initial_load;
