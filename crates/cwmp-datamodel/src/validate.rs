// crates/cwmp-datamodel/src/validate.rs

//! Explicit constraint checking over an entity tree.
//!
//! Setters never reject values. This module reads the static schema tables
//! and reports every parameter whose current value breaks its declared
//! range, length, pattern or enumeration, every `...NumberOfEntries`
//! parameter that disagrees with its table, and every pair of table rows
//! sharing a unique key.
//!
//! Patterns must match the whole value. Each one is compiled once per
//! process.

use crate::error::ModelError;
use crate::log::{LogContext, my_debug, my_warn};
use crate::schema::{Child, Entity, EntitySpec, FieldSpec, ParameterValue, ValueType};
use core::fmt;
use regex::Regex;
use std::collections::HashMap;
use std::sync::{Mutex, OnceLock, PoisonError};

// --- Configuration ---

/// Which parameters the constraint checks look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scope {
    /// Every set parameter.
    #[default]
    All,
    /// Only parameters an ACS may write. Useful before applying a
    /// `SetParameterValues` batch.
    Writable,
}

/// Options controlling a validation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOptions {
    pub scope: Scope,
    /// Descend into child objects and table rows.
    pub recurse: bool,
    /// Check unique-key sets among sibling table rows.
    pub check_unique_keys: bool,
    /// Compare `...NumberOfEntries` parameters with their table length.
    pub check_entry_counts: bool,
    /// Stop after this many violations.
    pub max_violations: Option<usize>,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            scope: Scope::All,
            recurse: true,
            check_unique_keys: true,
            check_entry_counts: true,
            max_violations: None,
        }
    }
}

// --- Violations ---

/// What was wrong with a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    BelowMinimum {
        value: i128,
        min: i64,
    },
    AboveMaximum {
        value: i128,
        max: i64,
    },
    /// Characters for strings, bytes for hexBinary.
    TooLong {
        len: usize,
        max: usize,
    },
    NotInEnumeration {
        value: String,
    },
    PatternMismatch {
        value: String,
        pattern: &'static str,
    },
    EntryCountMismatch {
        table: &'static str,
        declared: u64,
        actual: usize,
    },
    /// This row repeats the unique key of row `first` (1-based).
    DuplicateKey {
        keys: &'static [&'static str],
        first: usize,
    },
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationKind::BelowMinimum { value, min } => {
                write!(f, "value {} is below the minimum {}", value, min)
            }
            ViolationKind::AboveMaximum { value, max } => {
                write!(f, "value {} is above the maximum {}", value, max)
            }
            ViolationKind::TooLong { len, max } => {
                write!(f, "length {} exceeds the maximum {}", len, max)
            }
            ViolationKind::NotInEnumeration { value } => {
                write!(f, "'{}' is not an allowed value", value)
            }
            ViolationKind::PatternMismatch { value, pattern } => {
                write!(f, "'{}' does not match the pattern {}", value, pattern)
            }
            ViolationKind::EntryCountMismatch {
                table,
                declared,
                actual,
            } => write!(
                f,
                "declares {} entries but table {} holds {}",
                declared, table, actual
            ),
            ViolationKind::DuplicateKey { keys, first } => write!(
                f,
                "unique key ({}) repeats instance {}",
                keys.join(", "),
                first
            ),
        }
    }
}

/// One failed check, located by concrete path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Parameter path, or object path for duplicate keys.
    pub path: String,
    pub kind: ViolationKind,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.kind)
    }
}

// --- Validator ---

/// Walks an entity tree and collects [`Violation`]s.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    options: ValidationOptions,
}

impl Validator {
    pub fn new(options: ValidationOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ValidationOptions {
        &self.options
    }

    /// Validates `root`, using its path template as the path prefix.
    ///
    /// For table rows prefer [`Validator::validate_at`] so reported paths
    /// carry real instance numbers.
    pub fn validate(&self, root: &dyn Entity) -> Vec<Violation> {
        self.validate_at(root, root.spec().path)
    }

    /// Validates `root` located at the concrete object path `path`
    /// (ending in `.`).
    pub fn validate_at(&self, root: &dyn Entity, path: &str) -> Vec<Violation> {
        let mut walk = Walk {
            options: &self.options,
            violations: Vec::new(),
        };
        walk.entity(root, path);
        walk.violations
    }

    /// Like [`Validator::validate`], failing on the first run with any
    /// violation.
    pub fn ensure_valid(&self, root: &dyn Entity) -> Result<(), ModelError> {
        let violations = self.validate(root);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(ModelError::Validation(violations))
        }
    }
}

/// Validates `root` with default options.
pub fn validate(root: &dyn Entity) -> Vec<Violation> {
    Validator::default().validate(root)
}

struct Walk<'o> {
    options: &'o ValidationOptions,
    violations: Vec<Violation>,
}

impl Walk<'_> {
    fn is_full(&self) -> bool {
        self.options
            .max_violations
            .is_some_and(|max| self.violations.len() >= max)
    }

    fn report(&mut self, spec: &EntitySpec, path: String, kind: ViolationKind) {
        if self.is_full() {
            return;
        }
        my_debug!(
            LogContext {
                entity: spec.name,
                path: &path,
            },
            "{}",
            kind
        );
        self.violations.push(Violation { path, kind });
    }

    fn entity(&mut self, entity: &dyn Entity, path: &str) {
        let spec = entity.spec();
        if path != spec.path && !spec.matches_path(path) {
            my_warn!(
                LogContext {
                    entity: spec.name,
                    path,
                },
                "Path does not match template {}",
                spec.path
            );
        }

        for field in spec.parameters() {
            if self.is_full() {
                return;
            }
            if self.options.scope == Scope::Writable && !field.is_writable() {
                continue;
            }
            if let Some(value) = entity.parameter(field.name) {
                self.parameter(spec, field, &value, path);
            }
        }

        if self.options.check_entry_counts {
            self.entry_counts(entity, path);
        }

        let children = entity.children();
        if self.options.check_unique_keys {
            self.unique_keys(spec, &children, path);
        }
        if self.options.recurse {
            for child in &children {
                if self.is_full() {
                    return;
                }
                let child_path = match child.index {
                    Some(i) => format!("{}{}.{}.", path, child.name, i),
                    None => format!("{}{}.", path, child.name),
                };
                self.entity(child.entity, &child_path);
            }
        }
    }

    fn parameter(&mut self, spec: &EntitySpec, field: &FieldSpec, value: &ParameterValue, path: &str) {
        let param_path = || format!("{}{}", path, field.name);

        if let Some(n) = value.as_i128() {
            if let Some(min) = field.min.filter(|&min| n < i128::from(min)) {
                self.report(spec, param_path(), ViolationKind::BelowMinimum { value: n, min });
            }
            if let Some(max) = field.max.filter(|&max| n > i128::from(max)) {
                self.report(spec, param_path(), ViolationKind::AboveMaximum { value: n, max });
            }
        }

        if let Some(max) = field.max_length {
            let len = match value {
                ParameterValue::Text(s) => Some(s.chars().count()),
                ParameterValue::Binary(b) => Some(b.len()),
                _ => None,
            };
            if let Some(len) = len.filter(|&len| len > max) {
                self.report(spec, param_path(), ViolationKind::TooLong { len, max });
            }
        }

        if let Some(pattern) = field.pattern {
            if let Some(text) = value.as_text() {
                if !pattern_matches(spec, pattern, text) {
                    self.report(
                        spec,
                        param_path(),
                        ViolationKind::PatternMismatch {
                            value: text.into(),
                            pattern,
                        },
                    );
                }
            }
        }

        if field.values.is_empty() {
            return;
        }
        if let Some(text) = value.as_text() {
            let items: Vec<&str> = if field.list {
                text.split(',').map(str::trim).filter(|s| !s.is_empty()).collect()
            } else {
                vec![text]
            };
            for item in items {
                if !field.values.contains(&item) {
                    self.report(
                        spec,
                        param_path(),
                        ViolationKind::NotInEnumeration { value: item.into() },
                    );
                }
            }
        }
    }

    fn entry_counts(&mut self, entity: &dyn Entity, path: &str) {
        let spec = entity.spec();
        for field in spec.fields {
            let Some(table) = field.counts else { continue };
            let Some(ParameterValue::Unsigned(declared)) = entity.parameter(field.name) else {
                continue;
            };
            let Some(actual) = entity.table_len(table) else {
                my_warn!(*spec, "{} counts unknown table {}", field.name, table);
                continue;
            };
            if usize::try_from(declared).map_or(true, |d| d != actual) {
                self.report(
                    spec,
                    format!("{}{}", path, field.name),
                    ViolationKind::EntryCountMismatch {
                        table,
                        declared,
                        actual,
                    },
                );
            }
        }
    }

    fn unique_keys(&mut self, spec: &EntitySpec, children: &[Child<'_>], path: &str) {
        let tables = spec
            .fields
            .iter()
            .filter(|f| f.value_type == ValueType::Table);
        for table in tables {
            let rows: Vec<&Child<'_>> = children.iter().filter(|c| c.name == table.name).collect();
            let Some(first_row) = rows.first() else { continue };
            let row_spec = first_row.entity.spec();

            for &keys in row_spec.unique {
                let mut seen: HashMap<Vec<String>, usize> = HashMap::new();
                for row in &rows {
                    let Some(index) = row.index else { continue };
                    let Some(values) = key_values(row_spec, row.entity, keys) else {
                        continue;
                    };
                    if let Some(&first) = seen.get(&values) {
                        self.report(
                            row_spec,
                            format!("{}{}.{}.", path, table.name, index),
                            ViolationKind::DuplicateKey { keys, first },
                        );
                    } else {
                        seen.insert(values, index);
                    }
                }
            }
        }
    }
}

/// The wire values of one row's unique key. An unset part stands for its
/// declared default, or the empty string. Rows with no part set have no key.
fn key_values(spec: &EntitySpec, row: &dyn Entity, keys: &[&str]) -> Option<Vec<String>> {
    let mut any_set = false;
    let values: Vec<String> = keys
        .iter()
        .map(|&k| match row.parameter(k) {
            Some(v) => {
                any_set = true;
                v.to_string()
            }
            None => spec
                .field(k)
                .and_then(|f| f.default)
                .unwrap_or_default()
                .to_string(),
        })
        .collect();
    any_set.then_some(values)
}

// --- Patterns ---

static PATTERNS: OnceLock<Mutex<HashMap<&'static str, Option<Regex>>>> = OnceLock::new();

/// Full-match test of `text` against a schema pattern. A pattern that does
/// not compile is logged once and then accepts everything.
fn pattern_matches(spec: &EntitySpec, pattern: &'static str, text: &str) -> bool {
    let cache = PATTERNS.get_or_init(|| Mutex::new(HashMap::new()));
    let regex = {
        let mut cache = cache.lock().unwrap_or_else(PoisonError::into_inner);
        cache
            .entry(pattern)
            .or_insert_with(|| match Regex::new(&format!("^(?:{})$", pattern)) {
                Ok(regex) => Some(regex),
                Err(e) => {
                    my_warn!(*spec, "Ignoring pattern {}: {}", pattern, e);
                    None
                }
            })
            .clone()
    };
    regex.is_none_or(|regex| regex.is_match(text))
}
