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

//! API to create or replace a supplier.

use crate::driver::Driver;
use crate::model::NovoFornecedor;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::{Json, http};
use retaguarda_core::rest::RestError;

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    Path(id): Path<i32>,
    Json(dados): Json<NovoFornecedor>,
) -> Result<(http::StatusCode, impl IntoResponse), RestError> {
    let (fornecedor, created) = driver.put_fornecedor(id, dados).await?;
    let code = if created { http::StatusCode::CREATED } else { http::StatusCode::OK };
    Ok((code, Json(fornecedor)))
}
