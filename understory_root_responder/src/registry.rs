// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Named action targets.
//!
//! Actions may name their target by a dotted path such as `"App.controller"`
//! instead of holding a key. A [`TargetRegistry`] maps such paths to keys.
//! Paths are namespaces: `"App"` and `"App.controller"` are independent entries,
//! and a path resolves only if every segment along the way exists.
//!
//! ```
//! use understory_root_responder::registry::TargetRegistry;
//!
//! let mut targets = TargetRegistry::new();
//! targets.register("App.controller", 7_u32).unwrap();
//!
//! assert_eq!(targets.resolve("App.controller"), Some(7));
//! assert_eq!(targets.resolve("App"), None);
//! assert_eq!(targets.resolve("App.missing.item"), None);
//! ```

use alloc::string::{String, ToString};
use hashbrown::HashMap;
use thiserror::Error;

/// Why a path could not be registered.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// The path is the empty string.
    #[error("target path is empty")]
    EmptyPath,
    /// The path has an empty segment, as in `"a..b"` or `".a"`.
    #[error("target path `{0}` has an empty segment")]
    EmptySegment(String),
    /// Another target is already registered at the path.
    #[error("target path `{0}` is already registered")]
    Occupied(String),
}

#[derive(Clone, Debug)]
struct Namespace<K> {
    target: Option<K>,
    children: HashMap<String, Namespace<K>>,
}

impl<K> Namespace<K> {
    fn new() -> Self {
        Self {
            target: None,
            children: HashMap::new(),
        }
    }
}

/// Dotted-path lookup table for action targets.
#[derive(Clone, Debug)]
pub struct TargetRegistry<K> {
    root: Namespace<K>,
}

impl<K: Copy> TargetRegistry<K> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            root: Namespace::new(),
        }
    }

    /// Register `target` at `path`.
    pub fn register(&mut self, path: &str, target: K) -> Result<(), RegistryError> {
        validate(path)?;
        let mut ns = &mut self.root;
        for segment in path.split('.') {
            ns = ns
                .children
                .entry(segment.to_string())
                .or_insert_with(Namespace::new);
        }
        if ns.target.is_some() {
            return Err(RegistryError::Occupied(path.to_string()));
        }
        ns.target = Some(target);
        Ok(())
    }

    /// Remove and return the target at `path`.
    ///
    /// Namespaces below `path` stay registered.
    pub fn unregister(&mut self, path: &str) -> Option<K> {
        let mut ns = &mut self.root;
        for segment in path.split('.') {
            ns = ns.children.get_mut(segment)?;
        }
        ns.target.take()
    }

    /// Look up the target at `path`. Any missing segment resolves to `None`.
    pub fn resolve(&self, path: &str) -> Option<K> {
        let mut ns = &self.root;
        for segment in path.split('.') {
            ns = ns.children.get(segment)?;
        }
        ns.target
    }
}

impl<K: Copy> Default for TargetRegistry<K> {
    fn default() -> Self {
        Self::new()
    }
}

fn validate(path: &str) -> Result<(), RegistryError> {
    if path.is_empty() {
        return Err(RegistryError::EmptyPath);
    }
    if path.split('.').any(str::is_empty) {
        return Err(RegistryError::EmptySegment(path.to_string()));
    }
    Ok(())
}
