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

//! Geographic entities: countries, states and cities.

use derive_getters::Getters;
use derive_more::Constructor;
use serde::{Deserialize, Serialize};

/// A unit of the federation.  States are reference data: cities point at them
/// and the service never exposes them as a standalone resource.
#[derive(Constructor, Getters, Serialize)]
#[cfg_attr(test, derive(Debug, Deserialize, PartialEq))]
pub(crate) struct Estado {
    /// Identifier of the state (the official IBGE code).
    id: i32,

    /// Display name of the state.
    nome: String,

    /// Two-letter federative unit code.
    uf: String,
}

/// A city together with the denormalized name of its owning state.
#[derive(Constructor, Getters, Serialize)]
#[cfg_attr(test, derive(Debug, Deserialize, PartialEq))]
pub(crate) struct Cidade {
    /// Identifier of the city.
    id: i32,

    /// Display name of the city.
    nome: String,

    /// Identifier of the owning state.
    estado_id: i32,

    /// Display name of the owning state.
    estado: String,

    /// Two-letter code of the owning state.
    uf: String,
}

/// Projection returned by the city autocomplete search.
#[derive(Constructor, Serialize)]
#[cfg_attr(test, derive(Debug, Deserialize, PartialEq))]
pub(crate) struct CidadeSugestao {
    /// Identifier of the city.
    id: i32,

    /// Display name of the city.
    nome: String,

    /// Two-letter code of the owning state.
    estado: String,
}

/// Payload to create or replace a city.
#[derive(Deserialize, Getters)]
#[cfg_attr(test, derive(Debug, Serialize))]
pub(crate) struct NovaCidade {
    /// Display name of the city.
    nome: String,

    /// Identifier of the owning state, which must exist.
    estado_id: i32,
}

#[cfg(test)]
impl NovaCidade {
    /// Creates a payload from its parts, for testing purposes.
    pub(crate) fn new<S: Into<String>>(nome: S, estado_id: i32) -> Self {
        Self { nome: nome.into(), estado_id }
    }
}

/// A country as used in foreign supplier registrations.
#[derive(Constructor, Getters, Serialize)]
#[cfg_attr(test, derive(Debug, Deserialize, PartialEq))]
pub(crate) struct Pais {
    /// Identifying country code (the BACEN code as a string).
    codigo: String,

    /// Display name of the country.
    nome: String,
}
