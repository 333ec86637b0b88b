//! Sectioned key-value text store (`keybindings.conf`)
//!
//! The format is the desktop "key file" layout:
//!
//! ```text
//! # comment
//! [Section]
//! key=value
//! ```
//!
//! The store keeps every line it parsed, so rewriting a file after changing a
//! few values leaves comments, blank lines and unrelated keys untouched.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Syntax error in a key file; line numbers are 1-based
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyFileError {
    #[error("line {line}: key/value pair before the first section")]
    EntryOutsideSection { line: usize },
    #[error("line {line}: malformed section header")]
    MalformedSection { line: usize },
    #[error("line {line}: expected `key=value`")]
    MalformedEntry { line: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Line {
    Blank,
    Comment(String),
    Section(String),
    Entry { key: String, value: String },
}

/// A parsed key file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyFile {
    lines: Vec<Line>,
}

impl KeyFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Value of `key` in `section`; the last occurrence wins
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.entry_index(section, key).and_then(|i| match &self.lines[i] {
            Line::Entry { value, .. } => Some(value.as_str()),
            _ => None,
        })
    }

    pub fn has_section(&self, section: &str) -> bool {
        self.lines
            .iter()
            .any(|line| matches!(line, Line::Section(name) if name == section))
    }

    /// Section names in first-appearance order
    pub fn sections(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for line in &self.lines {
            if let Line::Section(name) = line {
                if !names.contains(&name.as_str()) {
                    names.push(name.as_str());
                }
            }
        }
        names
    }

    /// Keys of `section` in file order
    pub fn keys(&self, section: &str) -> Vec<&str> {
        let mut current: Option<&str> = None;
        let mut keys = Vec::new();
        for line in &self.lines {
            match line {
                Line::Section(name) => current = Some(name.as_str()),
                Line::Entry { key, .. } if current == Some(section) => {
                    if !keys.contains(&key.as_str()) {
                        keys.push(key.as_str());
                    }
                }
                _ => {}
            }
        }
        keys
    }

    /// Set `key` in `section`, updating it in place or appending it to the
    /// section (which is created at the end of the file when absent)
    pub fn set(&mut self, section: &str, key: &str, value: &str) {
        if let Some(i) = self.entry_index(section, key) {
            if let Line::Entry { value: v, .. } = &mut self.lines[i] {
                *v = value.to_string();
            }
            return;
        }

        let entry = Line::Entry {
            key: key.to_string(),
            value: value.to_string(),
        };
        match self.section_end(section) {
            Some(at) => self.lines.insert(at, entry),
            None => {
                if self.lines.last().is_some_and(|l| *l != Line::Blank) {
                    self.lines.push(Line::Blank);
                }
                self.lines.push(Line::Section(section.to_string()));
                self.lines.push(entry);
            }
        }
    }

    /// Replace the comment block at the top of the file
    ///
    /// Each line of `text` becomes a `#` comment, followed by a blank line.
    pub fn set_header_comment(&mut self, text: &str) {
        let first_section = self
            .lines
            .iter()
            .position(|l| matches!(l, Line::Section(_)))
            .unwrap_or(self.lines.len());
        let keep_from = self.lines[..first_section]
            .iter()
            .position(|l| !matches!(l, Line::Comment(_) | Line::Blank))
            .unwrap_or(first_section);

        let mut header: Vec<Line> = text
            .lines()
            .map(|l| Line::Comment(format!("#{}", prefix_space(l))))
            .collect();
        header.push(Line::Blank);
        self.lines.splice(..keep_from, header);
    }

    /// Index of the effective entry for (section, key)
    fn entry_index(&self, section: &str, key: &str) -> Option<usize> {
        let mut current: Option<&str> = None;
        let mut found = None;
        for (i, line) in self.lines.iter().enumerate() {
            match line {
                Line::Section(name) => current = Some(name.as_str()),
                Line::Entry { key: k, .. } if current == Some(section) && k == key => {
                    found = Some(i);
                }
                _ => {}
            }
        }
        found
    }

    /// Insertion point after the last non-blank line of the last block of `section`
    fn section_end(&self, section: &str) -> Option<usize> {
        let start = self
            .lines
            .iter()
            .rposition(|l| matches!(l, Line::Section(name) if name == section))?;
        let mut end = start + 1;
        for (i, line) in self.lines.iter().enumerate().skip(start + 1) {
            match line {
                Line::Section(_) => break,
                Line::Blank => {}
                _ => end = i + 1,
            }
        }
        Some(end)
    }
}

fn prefix_space(line: &str) -> String {
    if line.is_empty() {
        String::new()
    } else {
        format!(" {}", line)
    }
}

impl FromStr for KeyFile {
    type Err = KeyFileError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut lines = Vec::new();
        let mut in_section = false;

        for (i, raw) in text.lines().enumerate() {
            let line_no = i + 1;
            let trimmed = raw.trim();

            if trimmed.is_empty() {
                lines.push(Line::Blank);
            } else if trimmed.starts_with('#') {
                lines.push(Line::Comment(trimmed.to_string()));
            } else if let Some(rest) = trimmed.strip_prefix('[') {
                let name = rest
                    .strip_suffix(']')
                    .filter(|n| !n.is_empty() && !n.contains(['[', ']']))
                    .ok_or(KeyFileError::MalformedSection { line: line_no })?;
                lines.push(Line::Section(name.to_string()));
                in_section = true;
            } else {
                let (key, value) = trimmed
                    .split_once('=')
                    .ok_or(KeyFileError::MalformedEntry { line: line_no })?;
                let key = key.trim_end();
                if key.is_empty() {
                    return Err(KeyFileError::MalformedEntry { line: line_no });
                }
                if !in_section {
                    return Err(KeyFileError::EntryOutsideSection { line: line_no });
                }
                lines.push(Line::Entry {
                    key: key.to_string(),
                    value: value.trim_start().to_string(),
                });
            }
        }

        Ok(Self { lines })
    }
}

impl fmt::Display for KeyFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            match line {
                Line::Blank => writeln!(f)?,
                Line::Comment(text) => writeln!(f, "{}", text)?,
                Line::Section(name) => writeln!(f, "[{}]", name)?,
                Line::Entry { key, value } => writeln!(f, "{}={}", key, value)?,
            }
        }
        Ok(())
    }
}
