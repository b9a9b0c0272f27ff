//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **弹窗内容归 `modal.*`**
//! 3. **键盘提示归 `hints.*`**：按键说明
//! 4. **状态栏消息归 `status.*`**

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本
    pub common: CommonTexts,
    /// 控制栏文本
    pub header: HeaderTexts,
    /// 表格文本
    pub table: TableTexts,
    /// 键盘提示
    pub hints: HintTexts,
    /// 状态栏消息
    pub status: StatusTexts,
    /// 弹窗文本
    pub modal: ModalTexts,
}

/// 通用文本
pub struct CommonTexts {
    pub app_name: &'static str,
    pub title: &'static str,
    pub loading: &'static str,
    pub no_users: &'static str,
}

/// 控制栏文本（着色、排序、恢复、过滤）
pub struct HeaderTexts {
    pub color_rows: &'static str,
    pub uncolor_rows: &'static str,
    pub sort_by_country: &'static str,
    pub restore: &'static str,
    pub filter_label: &'static str,
    pub filter_placeholder: &'static str,
}

/// 表格文本
pub struct TableTexts {
    pub photo: &'static str,
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub country: &'static str,
    pub actions: &'static str,
    pub delete_action: &'static str,
    pub no_match: &'static str,
}

/// 键盘提示文本
pub struct HintTexts {
    pub move_selection: &'static str,
    pub sort: &'static str,
    pub color: &'static str,
    pub restore: &'static str,
    pub filter: &'static str,
    pub delete: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
    pub done: &'static str,
    pub clear: &'static str,
    pub confirm: &'static str,
    pub cancel: &'static str,
}

/// 状态栏消息
pub struct StatusTexts {
    pub users: &'static str,
    pub shown: &'static str,
    pub deleted: &'static str,
    pub restored: &'static str,
    pub sorted_by: &'static str,
    pub ascending: &'static str,
    pub descending: &'static str,
    pub nothing_selected: &'static str,
}

/// 弹窗文本
pub struct ModalTexts {
    pub confirm_delete_title: &'static str,
    pub confirm_delete_question: &'static str,
    pub cancel: &'static str,
    pub delete: &'static str,
    pub help_title: &'static str,
    pub help_table_section: &'static str,
    pub help_filter_section: &'static str,
    pub help_close_hint: &'static str,
}
