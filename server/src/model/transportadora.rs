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

//! The carrier entity and its composed read model.

use crate::model::FornecedorResumo;
use derive_getters::Getters;
use derive_more::Constructor;
use retaguarda_core::model::Cnpj;
use serde::{Deserialize, Serialize};

/// A carrier (freight company) registration.
#[derive(Constructor, Getters, Serialize)]
#[cfg_attr(test, derive(Debug, Deserialize, PartialEq))]
pub(crate) struct Transportadora {
    /// Identifier of the carrier.
    id: i32,

    /// Legal name of the carrier.
    razao_social: String,

    /// Legal-entity tax identifier.
    cnpj: Cnpj,

    /// Street address.
    endereco: String,

    /// Identifier of the city the carrier is registered in.
    cidade_id: i32,
}

/// Projection returned by the carrier autocomplete search.
#[derive(Constructor, Serialize)]
#[cfg_attr(test, derive(Debug, Deserialize, PartialEq))]
pub(crate) struct TransportadoraSugestao {
    /// Identifier of the carrier.
    id: i32,

    /// Legal name of the carrier.
    razao_social: String,

    /// Display name of the carrier's city.
    cidade: String,
}

/// A vehicle operated by a carrier, identified by its license plate.
#[derive(Constructor, Serialize)]
#[cfg_attr(test, derive(Debug, Deserialize, PartialEq))]
pub(crate) struct Veiculo {
    /// License plate of the vehicle.
    placa: String,
}

/// Full read model of a carrier: the registration plus the denormalized
/// city/state names, the associated suppliers and the vehicle fleet.
#[derive(Constructor, Getters, Serialize)]
#[cfg_attr(test, derive(Debug, Deserialize, PartialEq))]
pub(crate) struct TransportadoraDetalhe {
    /// The carrier registration itself.
    #[serde(flatten)]
    transportadora: Transportadora,

    /// Display name of the carrier's city.
    cidade: String,

    /// Two-letter code of the carrier's state.
    uf: String,

    /// Suppliers served by this carrier, ordered by legal name.
    fornecedores: Vec<FornecedorResumo>,

    /// Vehicles operated by this carrier, ordered by plate.
    veiculos: Vec<Veiculo>,
}
