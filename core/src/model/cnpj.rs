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

//! The `Cnpj` data type.

use crate::model::{ModelError, ModelResult, is_digits};
use serde::{Deserialize, Serialize, de::Visitor};

/// Number of digits in a CNPJ.
const CNPJ_LENGTH: usize = 14;

/// Represents a well-formed CNPJ, the 14-digit Brazilian legal-entity tax
/// identifier.
///
/// The value is held as bare digits.  Use `l10n::format_cnpj` to render the
/// canonical punctuated form for display.
#[derive(Clone, Debug, Eq, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Cnpj(String);

impl Cnpj {
    /// Creates a new CNPJ from an untrusted string `s`, making sure it is
    /// composed of exactly 14 digits.
    pub fn new<S: Into<String>>(s: S) -> ModelResult<Self> {
        let s = s.into();

        if !is_digits(&s, CNPJ_LENGTH) {
            return Err(ModelError(format!("CNPJ '{}' deve conter exatamente 14 dígitos", s)));
        }

        Ok(Self(s))
    }

    /// Returns a string view of the CNPJ digits.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

#[cfg(any(test, feature = "testutils"))]
impl From<&'static str> for Cnpj {
    /// Creates a new CNPJ from a hardcoded string, which must be valid.
    fn from(raw: &'static str) -> Self {
        Cnpj::new(raw).expect("Hardcoded CNPJs must be valid")
    }
}

/// A deserialization visitor for a `Cnpj`.
struct CnpjVisitor;

impl Visitor<'_> for CnpjVisitor {
    type Value = Cnpj;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a string")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Cnpj::new(v).map_err(|e| E::custom(e.to_string()))
    }

    fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Cnpj::new(v).map_err(|e| E::custom(e.to_string()))
    }
}

impl<'de> Deserialize<'de> for Cnpj {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_string(CnpjVisitor)
    }
}
