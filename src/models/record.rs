//! Awardee record data structure.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Award period label. Chunks carry it either as text or as a bare number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Period {
    Number(i64),
    Text(String),
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::Number(n) => write!(f, "{n}"),
            Period::Text(s) => f.write_str(s),
        }
    }
}

/// One awardee entry as stored in a chunk file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    /// Display name, usually Chinese characters
    pub name: String,

    /// Numeric identifier
    pub base_id: u64,

    /// Formatted identifier shown next to the name
    pub full_id: String,

    /// Romanized name
    pub pinyin: String,

    /// First letter of each pinyin syllable
    pub pinyin_initials: String,

    /// School name, absent in older batches
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub school: Option<String>,

    /// Award year
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u32>,

    /// Period or batch label
    pub period: Period,
}

impl Record {
    /// Format the record for display using a template.
    ///
    /// Supported placeholders:
    /// - `{name}`, `{full_id}`, `{base_id}`, `{pinyin}`, `{initials}`
    /// - `{school}`, `{year}` (replaced by the given fallbacks when absent)
    /// - `{period}`
    pub fn format(&self, template: &str, unknown_school: &str, unknown_year: &str) -> String {
        let school = self
            .school
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(unknown_school);
        let year = self
            .year
            .map(|y| y.to_string())
            .unwrap_or_else(|| unknown_year.to_string());

        template
            .replace("{name}", &self.name)
            .replace("{full_id}", &self.full_id)
            .replace("{base_id}", &self.base_id.to_string())
            .replace("{pinyin}", &self.pinyin)
            .replace("{initials}", &self.pinyin_initials)
            .replace("{school}", school)
            .replace("{year}", &year)
            .replace("{period}", &self.period.to_string())
    }
}

/// Normalized matching targets derived from a [`Record`].
///
/// Computed once at load time so queries only do substring tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchKeys {
    /// Lowercased name
    pub name: String,
    /// `base_id` as decimal text
    pub id: String,
    /// Pinyin with spaces removed
    pub pinyin: String,
    /// Lowercased initials
    pub initials: String,
    /// School name, empty when absent
    pub school: String,
}

impl From<&Record> for SearchKeys {
    fn from(record: &Record) -> Self {
        Self {
            name: record.name.to_lowercase(),
            id: record.base_id.to_string(),
            pinyin: record.pinyin.replace(' ', ""),
            initials: record.pinyin_initials.to_lowercase(),
            school: record.school.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> Record {
        Record {
            name: "李明".to_string(),
            base_id: 2023,
            full_id: "2023-001".to_string(),
            pinyin: "li ming".to_string(),
            pinyin_initials: "LM".to_string(),
            school: Some("北京大学".to_string()),
            year: Some(2023),
            period: Period::Number(12),
        }
    }

    #[test]
    fn test_format() {
        let record = sample_record();
        let result = record.format("{name} [{full_id}] {school} {year} #{period}", "-", "-");
        assert_eq!(result, "李明 [2023-001] 北京大学 2023 #12");
    }

    #[test]
    fn test_format_uses_fallbacks() {
        let mut record = sample_record();
        record.school = None;
        record.year = None;
        let result = record.format("{school}|{year}", "未知学校", "未知年份");
        assert_eq!(result, "未知学校|未知年份");
    }

    #[test]
    fn test_deserialize_optional_fields_missing() {
        let json = r#"{
            "name": "王芳",
            "base_id": 7,
            "full_id": "0007",
            "pinyin": "wang fang",
            "pinyin_initials": "wf",
            "period": "第三期"
        }"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert!(record.school.is_none());
        assert!(record.year.is_none());
        assert_eq!(record.period, Period::Text("第三期".to_string()));
    }

    #[test]
    fn test_search_keys_normalization() {
        let keys = SearchKeys::from(&sample_record());
        assert_eq!(keys.name, "李明");
        assert_eq!(keys.id, "2023");
        assert_eq!(keys.pinyin, "liming");
        assert_eq!(keys.initials, "lm");
        assert_eq!(keys.school, "北京大学");
    }
}
