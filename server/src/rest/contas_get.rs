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

//! API to list the payable or receivable accounts of a party.

use crate::driver::Driver;
use crate::model::{Conta, SituacaoConta, TipoConta};
use axum::Json;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use retaguarda_core::rest::{EmptyBody, RestError};
use serde::{Deserialize, Serialize};

/// Query parameters accepted by this API.
#[derive(Deserialize)]
pub(crate) struct ContasParams {
    /// Identifier of the party whose accounts to list.
    fornecedor: Option<i32>,

    /// Whether to list payable or receivable accounts.
    tipo: Option<TipoConta>,
}

/// One account installment annotated with its standing as of today.
#[derive(Serialize)]
#[cfg_attr(test, derive(Debug, Deserialize, PartialEq))]
pub(crate) struct ContaResponse {
    /// The installment itself.
    #[serde(flatten)]
    pub(crate) conta: Conta,

    /// Standing of the installment relative to the current date.
    pub(crate) situacao: SituacaoConta,
}

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    Query(params): Query<ContasParams>,
    _: EmptyBody,
) -> Result<impl IntoResponse, RestError> {
    let contas = driver.contas_do_fornecedor(params.fornecedor, params.tipo).await?;
    let response = contas
        .into_iter()
        .map(|(conta, situacao)| ContaResponse { conta, situacao })
        .collect::<Vec<ContaResponse>>();
    Ok(Json(response))
}
