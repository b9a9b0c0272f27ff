//! 过滤输入框消息

/// 过滤输入框消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMessage {
    /// 输入字符
    Input(char),
    /// 删除最后一个字符
    Backspace,
    /// 清空过滤文本
    Clear,
    /// 离开输入框，回到表格
    Leave,
}
