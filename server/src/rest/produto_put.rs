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

//! API to create or replace a product.

use crate::driver::Driver;
use crate::model::NovoProduto;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::{Json, http};
use retaguarda_core::rest::RestError;

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    Path(id): Path<i32>,
    Json(dados): Json<NovoProduto>,
) -> Result<(http::StatusCode, impl IntoResponse), RestError> {
    let (produto, created) = driver.put_produto(id, dados).await?;
    let code = if created { http::StatusCode::CREATED } else { http::StatusCode::OK };
    Ok((code, Json(produto)))
}

#[cfg(test)]
mod tests {
    use crate::model::{NovoProduto, Produto};
    use crate::rest::testutils::*;
    use axum::http;
    use retaguarda_core::rest::testutils::*;
    use rust_decimal::Decimal;

    fn route(id: &str) -> (http::Method, String) {
        (http::Method::PUT, format!("/api/produtos/{}", id))
    }

    /// Builds a product payload with the given description and price.
    fn novo_produto(descricao: &str, preco_unitario: Decimal) -> NovoProduto {
        NovoProduto {
            descricao: descricao.to_owned(),
            ncm: "96081000".to_owned(),
            unidade: "UN".to_owned(),
            preco_unitario,
            data_cadastro: None,
            aliquota_icms: Decimal::new(18, 0),
            aliquota_ipi: Decimal::ZERO,
            aliquota_pis: Decimal::ZERO,
            aliquota_cofins: Decimal::ZERO,
        }
    }

    #[tokio::test]
    async fn test_create() {
        let context = TestContext::setup().await;

        let response = OneShotBuilder::new(context.app(), route("1"))
            .send_json(novo_produto("Caneta", Decimal::new(250, 2)))
            .await
            .expect_status(http::StatusCode::CREATED)
            .expect_json::<Produto>()
            .await;
        assert_eq!("Caneta", response.descricao());
        assert_eq!(Decimal::new(18, 0), *response.aliquota_icms());

        assert!(context.has_produto(1).await);
    }

    #[tokio::test]
    async fn test_replace() {
        let context = TestContext::setup().await;
        context.insert_produto(1, "Caneta", Decimal::new(250, 2)).await;

        let response = OneShotBuilder::new(context.into_app(), route("1"))
            .send_json(novo_produto("Caneta azul", Decimal::new(300, 2)))
            .await
            .expect_json::<Produto>()
            .await;
        assert_eq!("Caneta azul", response.descricao());
    }

    #[tokio::test]
    async fn test_negative_price() {
        let context = TestContext::setup().await;

        OneShotBuilder::new(context.app(), route("1"))
            .send_json(novo_produto("Caneta", Decimal::new(-250, 2)))
            .await
            .expect_status(http::StatusCode::BAD_REQUEST)
            .expect_error("não pode ser negativo")
            .await;

        assert!(!context.has_produto(1).await);
    }
}
