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

//! API to create or replace a payment condition.

use crate::driver::Driver;
use crate::model::NovaCondicaoPagamento;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::{Json, http};
use retaguarda_core::rest::RestError;

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    Path(id): Path<i32>,
    Json(dados): Json<NovaCondicaoPagamento>,
) -> Result<(http::StatusCode, impl IntoResponse), RestError> {
    let (condicao, created) = driver.put_condicao(id, dados).await?;
    let code = if created { http::StatusCode::CREATED } else { http::StatusCode::OK };
    Ok((code, Json(condicao)))
}

#[cfg(test)]
mod tests {
    use crate::model::{CondicaoPagamento, NovaCondicaoPagamento, Parcela};
    use crate::rest::testutils::*;
    use axum::http;
    use retaguarda_core::rest::testutils::*;
    use rust_decimal::Decimal;

    fn route(id: &str) -> (http::Method, String) {
        (http::Method::PUT, format!("/api/condicoes-pagamento/{}", id))
    }

    /// Builds a payload whose installments add up to `total`%.
    fn nova_condicao(total: Decimal) -> NovaCondicaoPagamento {
        NovaCondicaoPagamento {
            descricao: "30/60 dias".to_owned(),
            juros: Decimal::new(2, 0),
            multa: Decimal::new(1, 0),
            desconto: Decimal::ZERO,
            parcelas: vec![
                Parcela::new(1, "BOL".to_owned(), 30, Decimal::new(50, 0)),
                Parcela::new(2, "BOL".to_owned(), 60, total - Decimal::new(50, 0)),
            ],
        }
    }

    #[tokio::test]
    async fn test_create() {
        let context = TestContext::setup().await;
        context.insert_forma_pagamento("BOL", "Boleto bancário").await;

        let response = OneShotBuilder::new(context.into_app(), route("1"))
            .send_json(nova_condicao(Decimal::new(100, 0)))
            .await
            .expect_status(http::StatusCode::CREATED)
            .expect_json::<CondicaoPagamento>()
            .await;
        assert_eq!("30/60 dias", response.descricao());
        assert_eq!(2, response.parcelas().len());
    }

    #[tokio::test]
    async fn test_replace() {
        let context = TestContext::setup().await;
        context.insert_forma_pagamento("BOL", "Boleto bancário").await;
        context.insert_condicao(1, "antiga").await;

        let response = OneShotBuilder::new(context.into_app(), route("1"))
            .send_json(nova_condicao(Decimal::new(100, 0)))
            .await
            .expect_json::<CondicaoPagamento>()
            .await;
        assert_eq!("30/60 dias", response.descricao());
    }

    #[tokio::test]
    async fn test_percentuais_must_add_up() {
        let context = TestContext::setup().await;
        context.insert_forma_pagamento("BOL", "Boleto bancário").await;

        OneShotBuilder::new(context.into_app(), route("1"))
            .send_json(nova_condicao(Decimal::new(99, 0)))
            .await
            .expect_status(http::StatusCode::BAD_REQUEST)
            .expect_error("devem somar 100%")
            .await;
    }

    #[tokio::test]
    async fn test_unknown_forma_pagamento() {
        let context = TestContext::setup().await;

        OneShotBuilder::new(context.into_app(), route("1"))
            .send_json(nova_condicao(Decimal::new(100, 0)))
            .await
            .expect_status(http::StatusCode::BAD_REQUEST)
            .expect_error("Forma de pagamento 'BOL' não cadastrada")
            .await;
    }
}
