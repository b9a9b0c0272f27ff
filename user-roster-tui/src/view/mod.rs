//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! View 层只读取 Model，不修改任何状态。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;         // 主布局（标题栏 / 控制栏 / 表格 / 状态栏）
//!         mod components;     // 控制栏、状态栏、弹窗
//!         mod pages;          // 用户表格
//!         pub mod theme;      // 主题与样式
//!
//!
//!     屏幕布局：
//!         ┌──────────────────────────────────────────────────────────┐
//!         │ 标题栏                                                    │
//!         ├──────────────────────────────────────────────────────────┤
//!         │ [c] 着色  [3] 按国家排序 ↓  [r] 恢复  过滤: ______         │
//!         ├──────────────────────────────────────────────────────────┤
//!         │ Photo | First Name ↓ | Last Name ↓ | Country ↓ | Actions │
//!         │ ...                                                      │
//!         ├──────────────────────────────────────────────────────────┤
//!         │ 状态栏（快捷键提示 + 状态消息）                            │
//!         └──────────────────────────────────────────────────────────┘
//!
//!     弹窗最后渲染，覆盖在最上层。
//!

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
