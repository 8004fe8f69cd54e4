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

//! The `Cep` data type.

use crate::model::{ModelError, ModelResult, is_digits};
use serde::{Deserialize, Serialize, de::Visitor};

/// Number of digits in a CEP.
const CEP_LENGTH: usize = 8;

/// Represents a well-formed CEP, the 8-digit Brazilian postal code, held as
/// bare digits.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Cep(String);

impl Cep {
    /// Creates a new CEP from an untrusted string `s`, making sure it is
    /// composed of exactly 8 digits.
    pub fn new<S: Into<String>>(s: S) -> ModelResult<Self> {
        let s = s.into();

        if !is_digits(&s, CEP_LENGTH) {
            return Err(ModelError(format!("CEP '{}' deve conter exatamente 8 dígitos", s)));
        }

        Ok(Self(s))
    }

    /// Returns a string view of the CEP digits.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

#[cfg(any(test, feature = "testutils"))]
impl From<&'static str> for Cep {
    /// Creates a new CEP from a hardcoded string, which must be valid.
    fn from(raw: &'static str) -> Self {
        Cep::new(raw).expect("Hardcoded CEPs must be valid")
    }
}

/// A deserialization visitor for a `Cep`.
struct CepVisitor;

impl Visitor<'_> for CepVisitor {
    type Value = Cep;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a string")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Cep::new(v).map_err(|e| E::custom(e.to_string()))
    }

    fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Cep::new(v).map_err(|e| E::custom(e.to_string()))
    }
}

impl<'de> Deserialize<'de> for Cep {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_string(CepVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_test::{Token, assert_de_tokens_error, assert_tokens};

    #[test]
    fn test_cep_ok() {
        assert_eq!("01310100", Cep::new("01310100").unwrap().as_str());
    }

    #[test]
    fn test_cep_error() {
        assert!(Cep::new("").is_err());
        assert!(Cep::new("0131010").is_err());
        assert!(Cep::new("013101000").is_err());
        assert!(Cep::new("01310-100").is_err());
    }

    #[test]
    fn test_cep_ser_de_ok() {
        let cep = Cep::new("01310100").unwrap();
        assert_tokens(&cep, &[Token::String("01310100")]);
    }

    #[test]
    fn test_cep_de_error() {
        assert_de_tokens_error::<Cep>(
            &[Token::String("123")],
            "CEP '123' deve conter exatamente 8 dígitos",
        );
    }
}
