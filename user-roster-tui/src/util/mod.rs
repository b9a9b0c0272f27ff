//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! Util 层提供与业务逻辑无关的基础设施代码。
//!
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod logging;        // 文件日志
//!         mod terminal;       // 终端初始化和恢复
//!         mod text;           // 按显示宽度截断文本
//!
//!
//!     终端类型定义：
//!
//!             pub type Term = Terminal<CrosstermBackend<Stdout>>;
//!
//!
//!     初始化终端 init_terminal()：
//!
//!         · Raw Mode（原始模式）
//!             - 关闭行缓冲：无需按 Enter，每个按键立即生效
//!             - 关闭字符回显：按键不会显示在终端上
//!             - 捕获所有按键：包括 Ctrl+C、箭头键等特殊键
//!
//!         · Alternate Screen（备用屏幕）
//!             - TUI 应用在备用屏幕运行
//!             - 退出后自动恢复主屏幕内容
//!
//!
//!     恢复终端 restore_terminal()：
//!
//!         无论程序是正常退出还是发生错误，都必须调用此函数！
//!         否则终端会保持在原始模式，用户输入不会正常显示。
//!
//!
//!     日志 init_logging()：
//!
//!         stdout / stderr 归终端界面所有，因此日志写入
//!         `<data dir>/user-roster/user-roster.log`。
//!         级别由 RUST_LOG 控制，默认 info。
//!

mod logging;
mod terminal;
mod text;

pub use logging::{init_logging, log_dir};
pub use terminal::{init_terminal, restore_terminal, Term};
pub use text::truncate_display;
