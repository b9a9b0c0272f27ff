//! 国际化（i18n）
//!
//! 翻译表在编译期确定（见 `keys.rs`），运行时只切换当前语言索引。
//! 语言在启动时由配置决定，之后不再改变。

use std::sync::atomic::{AtomicUsize, Ordering};

mod en_us;
mod es_es;
pub mod keys;

pub use keys::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// 英语（美国）
    #[default]
    EnUs,
    /// 西班牙语（西班牙）
    EsEs,
}

impl Language {
    /// 获取所有支持的语言
    pub fn all() -> &'static [Language] {
        &[Language::EnUs, Language::EsEs]
    }

    /// 获取语言的显示名称（使用该语言本身的文字）
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::EnUs => "English",
            Language::EsEs => "Español",
        }
    }

    /// 获取语言代码（BCP 47 标准）
    pub fn code(&self) -> &'static str {
        match self {
            Language::EnUs => "en-US",
            Language::EsEs => "es-ES",
        }
    }

    /// 从语言代码解析（大小写不敏感）
    pub fn from_code(code: &str) -> Option<Language> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en-us" | "en" => Some(Language::EnUs),
            "es-es" | "es" => Some(Language::EsEs),
            _ => None,
        }
    }

    fn index(self) -> usize {
        match self {
            Language::EnUs => 0,
            Language::EsEs => 1,
        }
    }

    fn translations(self) -> &'static Translations {
        match self {
            Language::EnUs => &en_us::TRANSLATIONS,
            Language::EsEs => &es_es::TRANSLATIONS,
        }
    }
}

static CURRENT_LANGUAGE: AtomicUsize = AtomicUsize::new(0); // 0 = EnUs

/// 当前语言的翻译表
pub fn t() -> &'static Translations {
    current_language().translations()
}

pub fn set_language(lang: Language) {
    CURRENT_LANGUAGE.store(lang.index(), Ordering::Relaxed);
}

pub fn current_language() -> Language {
    match CURRENT_LANGUAGE.load(Ordering::Relaxed) {
        1 => Language::EsEs,
        _ => Language::EnUs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_code_accepts_short_and_long_forms() {
        assert_eq!(Language::from_code("en-US"), Some(Language::EnUs));
        assert_eq!(Language::from_code("es"), Some(Language::EsEs));
        assert_eq!(Language::from_code(" ES-es "), Some(Language::EsEs));
        assert_eq!(Language::from_code("zh-CN"), None);
    }

    #[test]
    fn code_round_trips() {
        for lang in Language::all() {
            assert_eq!(Language::from_code(lang.code()), Some(*lang));
        }
    }

    #[test]
    fn tables_differ_per_language() {
        assert_eq!(Language::EnUs.translations().table.country, "Country");
        assert_eq!(Language::EsEs.translations().table.country, "País");
    }
}
