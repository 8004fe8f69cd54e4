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

//! Common data types for the fiscal domain.
//!
//! The types in this module use the newtype pattern so that a value that made
//! it past construction is known to be well-formed everywhere else in the
//! program.  Validation messages are user-visible and therefore written in
//! Portuguese, matching the language of the API error contract.

mod cep;
mod cnpj;
mod inscricao_estadual;

pub use cep::Cep;
pub use cnpj::Cnpj;
pub use inscricao_estadual::InscricaoEstadual;

/// Indicates that a raw value was not valid for the domain type that tried to
/// hold it.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{0}")]
pub struct ModelError(pub String);

/// Result type for this module.
pub type ModelResult<T> = Result<T, ModelError>;

/// Checks that `s` is composed of exactly `count` ASCII digits.
pub(crate) fn is_digits(s: &str, count: usize) -> bool {
    s.len() == count && s.bytes().all(|b| b.is_ascii_digit())
}
