//! 弹窗消息

/// 弹窗消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalMessage {
    /// 关闭弹窗
    Close,
    /// 确认当前焦点按钮
    Confirm,
    /// 在“取消”和“删除”之间切换
    ToggleFocus,
}
