//! Process-wide runner registry.
//!
//! Maps a backend name (the configured `agent.command`) to a constructor, so
//! callers can select an adapter without depending on concrete adapter types.
//!
//! Registration is expected during startup, before any conversation begins.
//! Built-in adapters register themselves on first access to the registry.
//! Registering a name twice replaces the earlier constructor; tests rely on
//! this to swap in doubles.

use super::Runner;
use crate::config::AgentConfig;
use crate::error::{Result, SpektError};
use std::collections::BTreeMap;
use std::sync::{LazyLock, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Builds a fresh runner instance.
pub type Constructor = fn() -> Box<dyn Runner>;

static REGISTRY: LazyLock<RwLock<BTreeMap<String, Constructor>>> = LazyLock::new(|| {
    let builtins: BTreeMap<String, Constructor> = super::builtin_runners()
        .into_iter()
        .map(|(name, constructor)| (name.to_string(), constructor))
        .collect();
    RwLock::new(builtins)
});

// A panic while holding the lock cannot leave the map half-written, so a
// poisoned lock is still safe to use.
fn read() -> RwLockReadGuard<'static, BTreeMap<String, Constructor>> {
    REGISTRY.read().unwrap_or_else(|poison| poison.into_inner())
}

fn write() -> RwLockWriteGuard<'static, BTreeMap<String, Constructor>> {
    REGISTRY.write().unwrap_or_else(|poison| poison.into_inner())
}

/// Register `constructor` under `name`, replacing any previous registration.
pub fn register(name: impl Into<String>, constructor: Constructor) {
    let name = name.into();
    tracing::debug!(runner = %name, "registering runner");
    write().insert(name, constructor);
}

/// Create the runner registered for `config.command`.
///
/// # Errors
///
/// `SpektError::UnsupportedRunner` listing the registered names (sorted) when
/// nothing is registered under that name. No process is spawned.
pub fn new_runner(config: &AgentConfig) -> Result<Box<dyn Runner>> {
    let constructor = read().get(&config.command).copied();
    match constructor {
        Some(constructor) => Ok(constructor()),
        None => Err(SpektError::UnsupportedRunner {
            name: config.command.clone(),
            available: registered_names(),
        }),
    }
}

/// Names of all registered runners, sorted.
pub fn registered_names() -> Vec<String> {
    read().keys().cloned().collect()
}

#[cfg(test)]
pub(crate) fn unregister(name: &str) {
    write().remove(name);
}
