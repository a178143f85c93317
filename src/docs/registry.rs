// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Supported documentation libraries
//!
//! Compiled-in table; adding a library means editing [`LIBRARIES`].

use serde::Serialize;

/// A supported library and the documentation root it is scoped to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LibraryEntry {
    /// Identifier callers pass in (case-sensitive)
    pub id: &'static str,
    /// Documentation domain (and optional path prefix), without scheme
    pub domain: &'static str,
}

impl LibraryEntry {
    /// Browsable URL of the documentation root
    pub fn url(&self) -> String {
        format!("https://{}", self.domain)
    }
}

/// Registry order is the order used for listings and error messages
pub const LIBRARIES: &[LibraryEntry] = &[
    LibraryEntry { id: "langchain", domain: "python.langchain.com/docs" },
    LibraryEntry { id: "llama-index", domain: "docs.llamaindex.ai/en/stable" },
    LibraryEntry { id: "openai", domain: "platform.openai.com/docs" },
    LibraryEntry { id: "anthropic", domain: "docs.anthropic.com" },
    LibraryEntry { id: "fastapi", domain: "fastapi.tiangolo.com" },
    LibraryEntry { id: "django", domain: "docs.djangoproject.com" },
    LibraryEntry { id: "flask", domain: "flask.palletsprojects.com" },
    LibraryEntry { id: "pytorch", domain: "pytorch.org/docs" },
    LibraryEntry { id: "tensorflow", domain: "www.tensorflow.org/api_docs" },
];

/// Read-only view over [`LIBRARIES`]
#[derive(Debug, Clone, Copy, Default)]
pub struct LibraryRegistry;

impl LibraryRegistry {
    /// All entries in registry order
    pub fn list(&self) -> &'static [LibraryEntry] {
        LIBRARIES
    }

    /// Documentation domain for an identifier (exact match)
    pub fn resolve(&self, id: &str) -> Option<&'static str> {
        LIBRARIES.iter().find(|e| e.id == id).map(|e| e.domain)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.resolve(id).is_some()
    }

    /// Identifiers in registry order
    pub fn identifiers(&self) -> Vec<&'static str> {
        LIBRARIES.iter().map(|e| e.id).collect()
    }

    /// Multi-line listing, one `• id: https://domain` line per entry
    pub fn render_listing(&self) -> String {
        let mut out = String::from("Supported documentation libraries:\n\n");
        for entry in LIBRARIES {
            out.push_str(&format!("• {}: {}\n", entry.id, entry.url()));
        }
        out
    }
}
