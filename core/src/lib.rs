// Retaguarda
// Copyright 2025 The Retaguarda Authors
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not
// use this file except in compliance with the License.  You may obtain a copy
// of the License at:
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.  See the
// License for the specific language governing permissions and limitations
// under the License.

//! Core abstractions for the Retaguarda NFe back-office service.
//!
//! The service adheres to the following layered architecture, and the crates
//! that build on top of this one should structure their code to have these
//! modules as well:
//!
//! 1.  `model`: This is the base layer, providing high-level data types that
//!     represent concepts in the fiscal domain of the application.  There
//!     should be no logic in here other than construction-time validation.
//!
//! 1.  `db`: This is the persistence layer.  Services provide free functions
//!     that take an `Executor` and issue exactly one parameterized query (or
//!     a small, fixed set of them) against the store.
//!
//! 1.  `driver`: This is the business logic layer.  Services provide their
//!     own `Driver` type that owns the injected database handle and clock and
//!     coordinates access to the database.
//!
//! 1.  `rest`: This is the HTTP layer.  Services provide their own
//!     `axum::Router` and back every API with a `Driver`.
//!
//! 1.  `main`: This is the app launcher.  Its sole purpose is to gather
//!     configuration data from environment variables and start the server.
//!
//! There are result and error types in every layer, such as `DbResult` and
//! `DbError`.  Errors float to the top of the app using the `?` operator and
//! are translated to HTTP status codes once they exit the REST layer.  The
//! categories are explicit on purpose: callers and tests assert on the
//! category of a failure (validation, not-found, backend) instead of on
//! message text.

// Keep these in sync with other top-level files.
#![warn(anonymous_parameters, bad_style, clippy::missing_docs_in_private_items, missing_docs)]
#![warn(unused, unused_extern_crates, unused_import_braces, unused_qualifications)]
#![warn(unsafe_code)]

pub mod clocks;
pub mod db;
pub mod driver;
pub mod env;
pub mod l10n;
pub mod model;
pub mod rest;
