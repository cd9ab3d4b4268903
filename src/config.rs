#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::sync::{Arc, OnceLock};

use crate::{
    constants::{
        CONSOLE_TOTAL_CLASSES, CONSOLE_TOTAL_CLASSES_ENV, FAILURE_THRESHOLD,
        FAILURE_THRESHOLD_ENV, FORM_TOTAL_CLASSES, FORM_TOTAL_CLASSES_ENV,
    },
    engine::{Policy, Variant},
};

/// Grading configuration shared across the crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigState {
    /// Sessions held for the form variant.
    form_total_classes:    u32,
    /// Sessions held for the console variant.
    console_total_classes: u32,
    /// Unexcused absences that fail a form variant student automatically.
    failure_threshold:     u32,
}

impl Default for ConfigState {
    fn default() -> Self {
        Self {
            form_total_classes:    FORM_TOTAL_CLASSES,
            console_total_classes: CONSOLE_TOTAL_CLASSES,
            failure_threshold:     FAILURE_THRESHOLD,
        }
    }
}

impl ConfigState {
    /// Construct a configuration from the process environment.
    fn new() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Construct a configuration from `lookup`, which maps variable names to
    /// values. Missing, unparseable, or zero values keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            form_total_classes:    read_positive(
                &lookup,
                FORM_TOTAL_CLASSES_ENV,
                FORM_TOTAL_CLASSES,
            ),
            console_total_classes: read_positive(
                &lookup,
                CONSOLE_TOTAL_CLASSES_ENV,
                CONSOLE_TOTAL_CLASSES,
            ),
            failure_threshold:     read_positive(&lookup, FAILURE_THRESHOLD_ENV, FAILURE_THRESHOLD),
        }
    }

    /// Sessions held for the form variant.
    pub fn form_total_classes(&self) -> u32 {
        self.form_total_classes
    }

    /// Sessions held for the console variant.
    pub fn console_total_classes(&self) -> u32 {
        self.console_total_classes
    }

    /// Unexcused absences that fail a form variant student automatically.
    pub fn failure_threshold(&self) -> u32 {
        self.failure_threshold
    }

    /// The effective rules for `variant`.
    pub fn policy(&self, variant: Variant) -> Policy {
        match variant {
            Variant::Form => Policy::form()
                .with_total_classes(self.form_total_classes)
                .with_failure_threshold(Some(self.failure_threshold)),
            Variant::Console => Policy::console().with_total_classes(self.console_total_classes),
        }
    }
}

/// Shared configuration handle used throughout the crate.
#[derive(Clone)]
pub struct ConfigHandle(Arc<ConfigState>);

impl std::ops::Deref for ConfigHandle {
    type Target = ConfigState;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Global storage for the lazily constructed configuration state.
static CONFIG_SLOT: OnceLock<Arc<ConfigState>> = OnceLock::new();

/// Returns the active configuration, reading the environment on first use.
pub fn get() -> ConfigHandle {
    let state = CONFIG_SLOT.get_or_init(|| Arc::new(ConfigState::new()));
    ConfigHandle(Arc::clone(state))
}

/// Returns the effective rules for `variant`.
pub fn policy(variant: Variant) -> Policy {
    get().policy(variant)
}

/// Reads a positive whole number from `lookup`, falling back to `default`
/// when the variable is missing or unusable.
fn read_positive(lookup: &impl Fn(&str) -> Option<String>, env: &str, default: u32) -> u32 {
    let Some(raw) = lookup(env) else {
        return default;
    };
    match raw.trim().parse::<u32>() {
        Ok(value) if value > 0 => value,
        _ => {
            tracing::warn!("Ignoring {env}={raw:?}, expected a positive whole number");
            default
        }
    }
}
