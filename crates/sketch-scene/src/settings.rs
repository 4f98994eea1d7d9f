//! Host runtime settings

use std::fmt;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::{SceneError, SceneResult};

/// A setting value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SettingValue {
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i32),
    /// Single float value
    Float(f32),
}

impl SettingValue {
    /// Try to get as bool
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SettingValue::Bool(v) => Some(*v),
            SettingValue::Int(v) => Some(*v != 0),
            SettingValue::Float(v) => Some(*v != 0.0),
        }
    }

    /// Try to get as int
    pub fn as_int(&self) -> Option<i32> {
        match self {
            SettingValue::Int(v) => Some(*v),
            SettingValue::Bool(v) => Some(if *v { 1 } else { 0 }),
            SettingValue::Float(v) => Some(*v as i32),
        }
    }

    /// Try to get as float
    pub fn as_float(&self) -> Option<f32> {
        match self {
            SettingValue::Float(v) => Some(*v),
            SettingValue::Int(v) => Some(*v as f32),
            SettingValue::Bool(v) => Some(if *v { 1.0 } else { 0.0 }),
        }
    }

    /// Convert to the variant of `target`, keeping the stored type stable
    fn coerce_like(self, target: SettingValue) -> SettingValue {
        match target {
            SettingValue::Bool(_) => SettingValue::Bool(self.as_bool().unwrap_or(false)),
            SettingValue::Int(_) => SettingValue::Int(self.as_int().unwrap_or(0)),
            SettingValue::Float(_) => SettingValue::Float(self.as_float().unwrap_or(0.0)),
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::Bool(v) => write!(f, "{}", if *v { "on" } else { "off" }),
            SettingValue::Int(v) => write!(f, "{}", v),
            SettingValue::Float(v) => write!(f, "{:.5}", v),
        }
    }
}

impl From<bool> for SettingValue {
    fn from(v: bool) -> Self {
        SettingValue::Bool(v)
    }
}

impl From<i32> for SettingValue {
    fn from(v: i32) -> Self {
        SettingValue::Int(v)
    }
}

impl From<f32> for SettingValue {
    fn from(v: f32) -> Self {
        SettingValue::Float(v)
    }
}

/// Known settings and their defaults
const DEFAULTS: &[(&str, SettingValue)] = &[
    ("auto_zoom", SettingValue::Int(-1)),
    ("state", SettingValue::Int(1)),
];

/// Session-wide settings store
///
/// Only registered names can be read or written. Writes are coerced to the
/// registered type, so `set("auto_zoom", 0.0)` stores `Int(0)`.
#[derive(Debug, Clone)]
pub struct SettingStore {
    values: AHashMap<String, SettingValue>,
}

impl Default for SettingStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingStore {
    /// Create a store seeded with the defaults
    pub fn new() -> Self {
        Self {
            values: DEFAULTS
                .iter()
                .map(|(name, value)| (name.to_string(), *value))
                .collect(),
        }
    }

    /// Register a new setting with its default
    pub fn register(&mut self, name: &str, default: SettingValue) {
        self.values.insert(name.to_string(), default);
    }

    pub fn get(&self, name: &str) -> SceneResult<SettingValue> {
        self.values
            .get(name)
            .copied()
            .ok_or_else(|| SceneError::UnknownSetting(name.to_string()))
    }

    /// Set a value and return the previous one
    pub fn set(&mut self, name: &str, value: impl Into<SettingValue>) -> SceneResult<SettingValue> {
        let slot = self
            .values
            .get_mut(name)
            .ok_or_else(|| SceneError::UnknownSetting(name.to_string()))?;
        let previous = *slot;
        *slot = value.into().coerce_like(previous);
        Ok(previous)
    }

    pub fn get_int(&self, name: &str) -> SceneResult<i32> {
        Ok(self.get(name)?.as_int().unwrap_or(0))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Get all setting names
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.values.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }
}
