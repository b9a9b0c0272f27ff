//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘等输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event , poll_event};
//!
//!
//!     其中有：
//!         · poll_event      事件轮询，受 ~/app.rs 调用，最长阻塞 timeout
//!
//!         · handle_event    事件分发
//!
//!         接收以下 Event 类型：
//!             Event::Key(KeyEvent)                // 键盘事件
//!             Event::Resize(width , height)       // 终端窗口大小发生变化，下一帧自动重绘
//!             其他                                 // 暂不处理
//!
//!             当接收到键盘事件时，转入 handle_key_event()
//!             判断顺序：
//!                 - 有弹窗打开时，调用 handle_modal_keys 处理
//!                 - Ctrl+C 在任何地方都退出
//!                 - 焦点位于过滤输入框，调用 handle_filter_keys 处理
//!                   （此时 q、c、r 等字母都作为输入字符，不会触发快捷键）
//!                 - 焦点位于表格，调用 handle_table_keys 处理
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 按键一览
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     表格：
//!         ↑/k ↓/j Home End    移动选中行
//!         1 / 2 / 3           按 名 / 姓 / 国家 排序
//!         c                   切换行着色
//!         r                   恢复初始状态
//!         / 或 Tab            聚焦过滤输入框
//!         d 或 Delete         删除选中行（弹出确认框）
//!         ?                   帮助
//!         q                   退出
//!
//!     过滤输入框：
//!         字符                追加到过滤文本
//!         Backspace           删除最后一个字符
//!         Ctrl+U              清空过滤文本
//!         Esc / Enter / Tab   回到表格
//!
//!     确认删除弹窗：
//!         ←/→/Tab             在“取消”和“删除”之间切换
//!         Enter               确认当前按钮
//!         Esc                 关闭
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
