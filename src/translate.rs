//! Table headers of the results page are localized, everything downstream
//! works with canonical field names.

use std::str::FromStr;

use tracing::warn;

use crate::error::{Error, Result};

/// Header translations for the Chinese portal
const ZH_CN: &[(&str, &str)] = &[
    ("课程名", "course_name"),
    ("课程类别", "course_type"),
    ("学分", "credit"),
    ("周学时", "course_periods"),
    ("教师", "teacher"),
    ("班号", "class_no"),
    ("开课单位", "faculty"),
    ("教室信息", "info"),
    ("选课结果", "result"),
    ("IP地址", "ip"),
    ("操作时间", "operation_time"),
];

/// Languages the portal headers can be translated from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Language {
    ZhCn,
}

impl Language {
    /// Tag as used on the command line
    pub fn tag(self) -> &'static str {
        match self {
            Self::ZhCn => "zh-CN",
        }
    }

    fn table(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::ZhCn => ZH_CN,
        }
    }

    /// Canonical name of a localized key
    pub fn canonical(self, key: &str) -> Option<&'static str> {
        self.table()
            .iter()
            .find(|(localized, _)| *localized == key)
            .map(|(_, canonical)| *canonical)
    }

    fn is_canonical(self, key: &str) -> bool {
        self.table().iter().any(|(_, canonical)| *canonical == key)
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "zh-CN" => Ok(Self::ZhCn),
            other => Err(Error::InvalidLanguage(other.to_owned())),
        }
    }
}

/// Ordered field name -> cell text mapping, one per table row
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Fields(Vec<(String, String)>);

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, replacing the value in place if the key already exists
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Fields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = Self::new();
        for (key, value) in iter {
            fields.insert(key, value);
        }
        fields
    }
}

impl IntoIterator for Fields {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Rewrite every known key of `src` to its canonical name.
///
/// Values are untouched. Unknown keys are kept as they are and reported with
/// a warning; keys that already are canonical pass through silently, so
/// translating twice changes nothing.
///
/// # Errors
/// [`Error::InvalidLanguage`] when `from_lang` has no translation table.
pub fn translate(src: &Fields, from_lang: &str) -> Result<Fields> {
    let lang = from_lang.parse::<Language>()?;

    Ok(src
        .iter()
        .map(|(key, value)| match lang.canonical(key) {
            Some(canonical) => (canonical.to_owned(), value.to_owned()),
            None => {
                if !lang.is_canonical(key) {
                    warn!(key, lang = lang.tag(), "Key not found in translation table");
                }
                (key.to_owned(), value.to_owned())
            }
        })
        .collect())
}
