use crate::config::Settings;

/// Map loose language tags ("en_US.UTF-8", "zh-Hant", "KO") onto a bundled locale.
pub fn normalize_locale(lang: &str) -> &'static str {
    let tag = lang.trim().replace('_', "-").to_lowercase();
    let primary = tag.split(['-', '.']).next().unwrap_or_default();
    match primary {
        "en" => "en",
        "zh" => "zh-TW",
        _ => "ko",
    }
}

pub fn set_locale(lang: &str) -> &'static str {
    let locale = normalize_locale(lang);
    rust_i18n::set_locale(locale);
    locale
}

/// Decoration around the `first-last` label pair in output file names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelStyle {
    pub prefix: String,
    pub suffix: String,
}

impl LabelStyle {
    pub fn for_locale(lang: &str) -> Self {
        let (prefix, suffix) = match normalize_locale(lang) {
            "en" => ("ch", ""),
            "zh-TW" => ("第", "章"),
            _ => ("제", "장"),
        };
        Self {
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let mut style = Self::for_locale(&settings.language);
        if let Some(prefix) = &settings.label_prefix {
            style.prefix = prefix.clone();
        }
        if let Some(suffix) = &settings.label_suffix {
            style.suffix = suffix.clone();
        }
        style
    }

    pub fn decorate(&self, first: &str, last: &str) -> String {
        format!("{}{}-{}{}", self.prefix, first, last, self.suffix)
    }
}
