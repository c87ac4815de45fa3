use std::collections::BTreeMap;

use crate::error::{Result, SplitError};

/// Heading convention shipped with the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinPreset {
    pub name: &'static str,
    pub pattern: &'static str,
    pub example: &'static str,
}

pub const DEFAULT_PRESET: &str = "korean";

pub const BUILTIN_PRESETS: &[BuiltinPreset] = &[
    BuiltinPreset { name: "korean", pattern: r"#?\s*제\d+장", example: "# 제1장, 제12장" },
    BuiltinPreset { name: "korean_hanja", pattern: r"第\d+章", example: "第1章, 第100章" },
    BuiltinPreset { name: "chapter_en", pattern: r"[Cc]hapter\s*\d+", example: "Chapter 1, chapter 001" },
    BuiltinPreset { name: "chapter_num", pattern: r"[Cc]h\.?\s*\d+", example: "Ch.1, ch 5" },
    BuiltinPreset { name: "episode", pattern: r"[Ee]p\.?\s*\d+", example: "Ep.1, ep 10" },
    BuiltinPreset { name: "part", pattern: r"[Pp]art\s*\d+", example: "Part 1, part 5" },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preset {
    pub name: String,
    pub pattern: String,
    /// Present for built-in presets only.
    pub example: Option<&'static str>,
}

/// Built-in presets merged with the ones defined in settings.
#[derive(Debug, Clone)]
pub struct PresetCatalog {
    presets: Vec<Preset>,
}

impl PresetCatalog {
    pub fn new(custom: &BTreeMap<String, String>) -> Self {
        let mut presets: Vec<Preset> = BUILTIN_PRESETS
            .iter()
            .map(|p| Preset {
                name: p.name.to_string(),
                pattern: custom.get(p.name).cloned().unwrap_or_else(|| p.pattern.to_string()),
                example: if custom.contains_key(p.name) { None } else { Some(p.example) },
            })
            .collect();

        for (name, pattern) in custom {
            if !BUILTIN_PRESETS.iter().any(|p| p.name == name.as_str()) {
                presets.push(Preset {
                    name: name.clone(),
                    pattern: pattern.clone(),
                    example: None,
                });
            }
        }

        Self { presets }
    }

    #[cfg(test)]
    pub fn builtin() -> Self {
        Self::new(&BTreeMap::new())
    }

    pub fn get(&self, name: &str) -> Result<&Preset> {
        self.presets
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| SplitError::UnknownPreset {
                name: name.to_string(),
                available: self.names().join(", "),
            })
    }

    pub fn names(&self) -> Vec<&str> {
        self.presets.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Preset> {
        self.presets.iter()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    /// A custom pattern always wins over the preset name.
    pub fn resolve_pattern<'a>(&'a self, pattern: Option<&'a str>, preset: &str) -> Result<&'a str> {
        match pattern {
            Some(p) => Ok(p),
            None => Ok(self.get(preset)?.pattern.as_str()),
        }
    }
}
