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

//! The `InscricaoEstadual` data type.

use crate::model::{ModelError, ModelResult, is_digits};
use serde::{Deserialize, Serialize, de::Visitor};

/// Number of digits in a state tax registration.
const INSCRICAO_LENGTH: usize = 12;

/// Represents a well-formed state tax registration (inscrição estadual),
/// held as bare digits.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct InscricaoEstadual(String);

impl InscricaoEstadual {
    /// Creates a new registration from an untrusted string `s`, making sure
    /// it is composed of exactly 12 digits.
    pub fn new<S: Into<String>>(s: S) -> ModelResult<Self> {
        let s = s.into();

        if !is_digits(&s, INSCRICAO_LENGTH) {
            return Err(ModelError(format!(
                "Inscrição estadual '{}' deve conter exatamente 12 dígitos",
                s
            )));
        }

        Ok(Self(s))
    }

    /// Returns a string view of the registration digits.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

#[cfg(any(test, feature = "testutils"))]
impl From<&'static str> for InscricaoEstadual {
    /// Creates a new registration from a hardcoded string, which must be valid.
    fn from(raw: &'static str) -> Self {
        InscricaoEstadual::new(raw).expect("Hardcoded registrations must be valid")
    }
}

/// A deserialization visitor for an `InscricaoEstadual`.
struct InscricaoEstadualVisitor;

impl Visitor<'_> for InscricaoEstadualVisitor {
    type Value = InscricaoEstadual;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a string")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        InscricaoEstadual::new(v).map_err(|e| E::custom(e.to_string()))
    }

    fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        InscricaoEstadual::new(v).map_err(|e| E::custom(e.to_string()))
    }
}

impl<'de> Deserialize<'de> for InscricaoEstadual {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_string(InscricaoEstadualVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_test::{Token, assert_tokens};

    #[test]
    fn test_inscricao_ok() {
        assert_eq!("123456789012", InscricaoEstadual::new("123456789012").unwrap().as_str());
    }

    #[test]
    fn test_inscricao_error() {
        assert!(InscricaoEstadual::new("").is_err());
        assert!(InscricaoEstadual::new("12345678901").is_err());
        assert!(InscricaoEstadual::new("1234567890123").is_err());
        assert!(InscricaoEstadual::new("123.456.789.012").is_err());
    }

    #[test]
    fn test_inscricao_ser_de_ok() {
        let inscricao = InscricaoEstadual::new("123456789012").unwrap();
        assert_tokens(&inscricao, &[Token::String("123456789012")]);
    }
}
