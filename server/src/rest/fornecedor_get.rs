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

//! API to get one supplier by id, with its composed read model.

use crate::driver::Driver;
use axum::Json;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use retaguarda_core::rest::{EmptyBody, RestError};

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    Path(id): Path<i32>,
    _: EmptyBody,
) -> Result<impl IntoResponse, RestError> {
    let fornecedor = driver.get_fornecedor(id).await?;
    Ok(Json(fornecedor))
}

#[cfg(test)]
mod tests {
    use crate::model::FornecedorDetalhe;
    use crate::rest::testutils::*;
    use axum::http;
    use retaguarda_core::rest::testutils::*;
    use retaguarda_core::test_payload_must_be_empty;

    fn route(id: &str) -> (http::Method, String) {
        (http::Method::GET, format!("/api/fornecedores/{}", id))
    }

    #[tokio::test]
    async fn test_ok() {
        let context = TestContext::setup().await;
        context.insert_estado(35, "São Paulo", "SP").await;
        context.insert_cidade(1, "Campinas", 35).await;
        context.insert_fornecedor(10, "Papelaria Central Ltda", 1).await;

        let response = OneShotBuilder::new(context.into_app(), route("10"))
            .send_empty()
            .await
            .expect_json::<FornecedorDetalhe>()
            .await;
        assert_eq!("Campinas", response.cidade());
        assert_eq!("SP", response.uf());
        assert_eq!("Papelaria Central Ltda", response.fornecedor().razao_social());
        assert!(response.produtos().is_empty());
    }

    #[tokio::test]
    async fn test_missing() {
        let context = TestContext::setup().await;

        OneShotBuilder::new(context.into_app(), route("10"))
            .send_empty()
            .await
            .expect_status(http::StatusCode::NOT_FOUND)
            .expect_error("Fornecedor não encontrado")
            .await;
    }

    test_payload_must_be_empty!(TestContext::setup().await.into_app(), route("10"));
}
