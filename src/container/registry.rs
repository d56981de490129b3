// SPDX-FileCopyrightText: 2026 h5series Contributors
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Container backend registry.
//!
//! File-path dispatch to the registered container backends. Opening a path
//! no backend claims is a resource error and aborts the run, mirroring the
//! behavior of a missing native decoding library.

use std::path::Path;

use crate::core::{ConvertError, Result};

use super::ContainerSource;

/// A format backend that can open container files.
pub trait ContainerBackend: Send + Sync {
    /// Backend name for diagnostics.
    fn name(&self) -> &'static str;

    /// Check if this backend claims the given path.
    fn matches(&self, path: &Path) -> bool;

    /// Open the container at `path`.
    fn open(&self, path: &Path) -> Result<Box<dyn ContainerSource>>;
}

/// Ordered collection of container backends.
#[derive(Default)]
pub struct BackendRegistry {
    backends: Vec<Box<dyn ContainerBackend>>,
}

impl BackendRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the built-in backends registered.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(super::JsonContainerBackend));
        registry
    }

    /// Register a backend. Backends are tried in registration order.
    pub fn register(&mut self, backend: Box<dyn ContainerBackend>) {
        self.backends.push(backend);
    }

    /// Names of the registered backends.
    pub fn backend_names(&self) -> Vec<&'static str> {
        self.backends.iter().map(|b| b.name()).collect()
    }

    /// Open the container at `path` with the first matching backend.
    pub fn open(&self, path: &Path) -> Result<Box<dyn ContainerSource>> {
        if !path.exists() {
            return Err(ConvertError::config(
                "input",
                format!("input file '{}' does not exist", path.display()),
            ));
        }
        for backend in &self.backends {
            if backend.matches(path) {
                return backend.open(path);
            }
        }
        Err(ConvertError::resource(
            path.display().to_string(),
            "no container backend available for this file",
        ))
    }
}
