//! countrydb-cli
//! =============
//!
//! Command-line interface for the `countrydb-core` country lookup engine.
//!
//! This crate primarily provides a binary (`countrydb-cli`). We include a
//! small library target so that docs.rs renders a documentation page and
//! shows this overview.
//!
//! Basic usage:
//!
//! ```text
//! countrydb-cli --help
//! countrydb-cli stats
//! countrydb-cli country fra
//! countrydb-cli currency EUR
//! countrydb-cli filter --continent europe --border DE
//! ```
//!
//! For programmatic access use the [`countrydb-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable.
