//! 文本显示宽度处理

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// 按显示宽度截断字符串，超出时以 `…` 结尾
pub fn truncate_display(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    // 为省略号预留一列
    let budget = max_width - 1;
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}
