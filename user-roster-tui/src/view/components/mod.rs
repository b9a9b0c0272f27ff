//! 界面组件

pub mod header;
pub mod modal;
pub mod statusbar;
