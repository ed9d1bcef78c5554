//! # Validation Engine
//!
//! Every entity reports its defects as an ordered list of human-readable
//! strings. An empty list means the entity is valid. Validation is purely
//! observational: nothing is corrected, nothing is raised.
//!
//! ## Message Forms
//!
//! | Condition | Message |
//! |-----------|---------|
//! | required field absent | `No <Field> in <Entity> Class.` |
//! | required string empty | `Empty <Field> in <Entity> Class.` |
//! | number outside range | `<Field> in <Entity> Class not in the range of <lo> to <hi>.` |
//! | unknown enumerated value | `Invalid <Field> in <Entity> Class.` |
//! | child entity invalid | `Invalid <Field> in <Entity> Class.` |
//! | required list absent or empty | `No <noun> data in <Entity> Class.` |
//! | list element invalid | `Invalid <Item> in <Field> in <Entity> Class.` |
//!
//! Each rule is evaluated independently, so a single call surfaces the
//! complete defect set of the entity's own fields.

use std::str::FromStr;

use crate::config::{ListPolicy, ValidationConfig};

// ---------------------------------------------------------------------------
// Validate trait
// ---------------------------------------------------------------------------

/// An entity that can report its own validation defects.
pub trait Validate {
    /// Entity name used in defect messages (`"Pick"` in `No ID in Pick Class.`).
    const CLASS: &'static str;

    /// Record every defect of this entity into `defects`.
    fn check(&self, defects: &mut Defects<'_>);

    /// Defects under an explicit configuration.
    fn errors_with(&self, config: &ValidationConfig) -> Vec<String> {
        let mut defects = Defects::new(Self::CLASS, config);
        self.check(&mut defects);
        defects.into_messages()
    }

    /// Defects under the default configuration.
    fn errors(&self) -> Vec<String> {
        self.errors_with(&ValidationConfig::default())
    }

    /// `true` when [`errors`](Validate::errors) is empty.
    fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }
}

// ---------------------------------------------------------------------------
// List fields
// ---------------------------------------------------------------------------

/// How an invalid list element is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListDetail {
    /// One message naming the element type.
    Summary,
    /// The element's own defects are appended to the message.
    Inline,
}

/// Describes a list-valued field for defect reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListField {
    /// Wire key of the list (`InputData`).
    pub key: &'static str,
    /// Noun used when the list is missing (`input` in `No input data in ...`).
    pub noun: &'static str,
    /// Element type name (`Pick`).
    pub item: &'static str,
    /// Reporting detail for invalid elements.
    pub detail: ListDetail,
}

// ---------------------------------------------------------------------------
// Defect collector
// ---------------------------------------------------------------------------

/// Ordered defect messages for one entity.
#[derive(Debug)]
pub struct Defects<'a> {
    class: &'static str,
    config: &'a ValidationConfig,
    messages: Vec<String>,
}

impl<'a> Defects<'a> {
    /// Start an empty collector for `class`.
    pub fn new(class: &'static str, config: &'a ValidationConfig) -> Self {
        Self {
            class,
            config,
            messages: Vec::new(),
        }
    }

    /// Entity name messages are attributed to.
    pub fn class(&self) -> &'static str {
        self.class
    }

    /// Configuration children are validated with.
    pub fn config(&self) -> &'a ValidationConfig {
        self.config
    }

    /// Record a free-form defect.
    pub fn add(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    /// Record `No <field> in <class> Class.`
    pub fn missing(&mut self, field: &str) {
        self.add(format!("No {field} in {} Class.", self.class));
    }

    /// Record `Invalid <field> in <class> Class.`
    pub fn invalid(&mut self, field: &str) {
        self.add(format!("Invalid {field} in {} Class.", self.class));
    }

    /// Required field of any type. Returns the value when present.
    pub fn require<'v, T>(&mut self, field: &str, value: &'v Option<T>) -> Option<&'v T> {
        if value.is_none() {
            self.missing(field);
        }
        value.as_ref()
    }

    /// Required, non-empty string.
    pub fn require_text(&mut self, field: &str, value: &Option<String>) {
        match value {
            None => self.missing(field),
            Some(text) if text.is_empty() => self.empty(field),
            Some(_) => {}
        }
    }

    /// Optional string that must not be empty when present.
    pub fn optional_text(&mut self, field: &str, value: &Option<String>) {
        if matches!(value, Some(text) if text.is_empty()) {
            self.empty(field);
        }
    }

    /// Required number within the closed range `[lo, hi]`.
    pub fn require_range(&mut self, field: &str, value: Option<f64>, lo: f64, hi: f64) {
        match value {
            None => self.missing(field),
            Some(v) => self.range(field, v, lo, hi),
        }
    }

    /// Optional number within the closed range `[lo, hi]` when present.
    pub fn optional_range(&mut self, field: &str, value: Option<f64>, lo: f64, hi: f64) {
        if let Some(v) = value {
            self.range(field, v, lo, hi);
        }
    }

    /// Optional number that must not be below `lo` when present.
    pub fn optional_at_least(&mut self, field: &str, value: Option<f64>, lo: f64) {
        if matches!(value, Some(v) if v < lo || v.is_nan()) {
            self.add(format!("{field} in {} Class is not greater than {lo}.", self.class));
        }
    }

    /// Required string that must parse as `T`.
    pub fn require_variant<T: FromStr>(&mut self, field: &str, value: &Option<String>) {
        match value {
            None => self.missing(field),
            Some(text) if text.is_empty() => self.empty(field),
            Some(text) if text.parse::<T>().is_err() => self.invalid(field),
            Some(_) => {}
        }
    }

    /// Optional string that must parse as `T` when present.
    pub fn optional_variant<T: FromStr>(&mut self, field: &str, value: &Option<String>) {
        if matches!(value, Some(text) if text.parse::<T>().is_err()) {
            self.invalid(field);
        }
    }

    /// Required child entity that must itself be valid.
    pub fn require_child<C: Validate>(&mut self, field: &str, value: &Option<C>) {
        match value {
            None => self.missing(field),
            Some(child) => self.child(field, child),
        }
    }

    /// Optional child entity that must be valid when present.
    pub fn optional_child<C: Validate>(&mut self, field: &str, value: &Option<C>) {
        if let Some(child) = value {
            self.child(field, child);
        }
    }

    /// Required, non-empty list whose elements must be valid.
    pub fn require_list<C: Validate>(&mut self, list: &ListField, value: &Option<Vec<C>>) {
        match value {
            Some(items) if !items.is_empty() => self.scan(list, items),
            _ => self.add(format!("No {} data in {} Class.", list.noun, self.class)),
        }
    }

    /// Optional list whose elements must be valid when present.
    pub fn optional_list<C: Validate>(&mut self, list: &ListField, value: &Option<Vec<C>>) {
        if let Some(items) = value {
            self.scan(list, items);
        }
    }

    /// Validate `items` under the configured [`ListPolicy`].
    pub fn scan<C: Validate>(&mut self, list: &ListField, items: &[C]) {
        for (index, item) in items.iter().enumerate() {
            let errors = item.errors_with(self.config);
            if errors.is_empty() {
                continue;
            }
            let mut message = match self.config.list_policy {
                ListPolicy::FirstInvalid => {
                    format!("Invalid {} in {} in {} Class", list.item, list.key, self.class)
                }
                ListPolicy::ReportAll => format!(
                    "Invalid {} in {}[{index}] in {} Class",
                    list.item, list.key, self.class
                ),
            };
            match list.detail {
                ListDetail::Summary => message.push('.'),
                ListDetail::Inline => {
                    message.push_str(": ");
                    message.push_str(&errors.join(" "));
                }
            }
            self.messages.push(message);
            if self.config.list_policy == ListPolicy::FirstInvalid {
                break;
            }
        }
    }

    /// Number of defects recorded so far.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// `true` when no defect has been recorded.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Recorded defects, in order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Consume the collector, returning the defects.
    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }

    fn empty(&mut self, field: &str) {
        self.add(format!("Empty {field} in {} Class.", self.class));
    }

    fn range(&mut self, field: &str, value: f64, lo: f64, hi: f64) {
        // NaN compares false both ways; treat it as out of range.
        if !(lo..=hi).contains(&value) {
            self.add(format!(
                "{field} in {} Class not in the range of {lo} to {hi}.",
                self.class
            ));
        }
    }

    fn child<C: Validate>(&mut self, field: &str, child: &C) {
        if !child.errors_with(self.config).is_empty() {
            self.invalid(field);
        }
    }
}
