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

//! The supplier entity and its projections.

use crate::model::ProdutoResumo;
use derive_getters::Getters;
use derive_more::Constructor;
use retaguarda_core::model::{Cep, Cnpj, InscricaoEstadual};
use serde::{Deserialize, Serialize};

/// A supplier (legal entity) registration.
#[derive(Constructor, Getters, Serialize)]
#[cfg_attr(test, derive(Debug, Deserialize, PartialEq))]
pub(crate) struct Fornecedor {
    /// Identifier of the supplier.
    id: i32,

    /// Legal name of the supplier.
    razao_social: String,

    /// Legal-entity tax identifier.
    cnpj: Cnpj,

    /// State tax registration, when the supplier has one.
    inscricao_estadual: Option<InscricaoEstadual>,

    /// Street address.
    endereco: String,

    /// Street number.
    numero: String,

    /// Neighborhood.
    bairro: String,

    /// Postal code.
    cep: Cep,

    /// Identifier of the city the supplier is registered in.
    cidade_id: i32,

    /// Contact phone number.
    telefone: Option<String>,

    /// Contact e-mail address.
    email: Option<String>,
}

/// Projection returned by the supplier autocomplete search.
#[derive(Constructor, Serialize)]
#[cfg_attr(test, derive(Debug, Deserialize, PartialEq))]
pub(crate) struct FornecedorSugestao {
    /// Identifier of the supplier.
    id: i32,

    /// Legal name of the supplier.
    razao_social: String,

    /// Display name of the supplier's city.
    cidade: String,
}

/// Minimal projection of a supplier used inside composed views.
#[derive(Constructor, Serialize)]
#[cfg_attr(test, derive(Debug, Deserialize, PartialEq))]
pub(crate) struct FornecedorResumo {
    /// Identifier of the supplier.
    id: i32,

    /// Legal name of the supplier.
    razao_social: String,
}

/// Full read model of a supplier: the registration plus the denormalized
/// city/state names and the products the supplier is associated with.
#[derive(Constructor, Getters, Serialize)]
#[cfg_attr(test, derive(Debug, Deserialize, PartialEq))]
pub(crate) struct FornecedorDetalhe {
    /// The supplier registration itself.
    #[serde(flatten)]
    fornecedor: Fornecedor,

    /// Display name of the supplier's city.
    cidade: String,

    /// Two-letter code of the supplier's state.
    uf: String,

    /// Products supplied, ordered by description.
    produtos: Vec<ProdutoResumo>,
}

/// Payload to create or replace a supplier.
#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug, Serialize))]
pub(crate) struct NovoFornecedor {
    /// Legal name of the supplier.
    pub(crate) razao_social: String,

    /// Legal-entity tax identifier.
    pub(crate) cnpj: Cnpj,

    /// State tax registration.
    #[serde(default)]
    pub(crate) inscricao_estadual: Option<InscricaoEstadual>,

    /// Street address.
    pub(crate) endereco: String,

    /// Street number.
    pub(crate) numero: String,

    /// Neighborhood.
    pub(crate) bairro: String,

    /// Postal code.
    pub(crate) cep: Cep,

    /// Identifier of the city the supplier is registered in, which must exist.
    pub(crate) cidade_id: i32,

    /// Contact phone number.
    #[serde(default)]
    pub(crate) telefone: Option<String>,

    /// Contact e-mail address.
    #[serde(default)]
    pub(crate) email: Option<String>,

    /// Identifiers of the products this supplier provides.  Replaces any
    /// previous association set.
    #[serde(default)]
    pub(crate) produtos: Vec<i32>,
}
