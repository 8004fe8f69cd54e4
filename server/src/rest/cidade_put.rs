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

//! API to create or replace a city.

use crate::driver::Driver;
use crate::model::NovaCidade;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::{Json, http};
use retaguarda_core::rest::RestError;

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    Path(id): Path<i32>,
    Json(dados): Json<NovaCidade>,
) -> Result<(http::StatusCode, impl IntoResponse), RestError> {
    let (cidade, created) = driver.put_cidade(id, dados).await?;
    let code = if created { http::StatusCode::CREATED } else { http::StatusCode::OK };
    Ok((code, Json(cidade)))
}

#[cfg(test)]
mod tests {
    use crate::model::{Cidade, NovaCidade};
    use crate::rest::testutils::*;
    use axum::http;
    use retaguarda_core::rest::testutils::*;

    fn route(id: &str) -> (http::Method, String) {
        (http::Method::PUT, format!("/api/cidades/{}", id))
    }

    #[tokio::test]
    async fn test_create() {
        let context = TestContext::setup().await;
        context.insert_estado(35, "São Paulo", "SP").await;

        let response = OneShotBuilder::new(context.app(), route("1"))
            .send_json(NovaCidade::new("Sorocaba", 35))
            .await
            .expect_status(http::StatusCode::CREATED)
            .expect_json::<Cidade>()
            .await;
        assert_eq!(
            Cidade::new(1, "Sorocaba".to_owned(), 35, "São Paulo".to_owned(), "SP".to_owned()),
            response
        );

        assert!(context.has_cidade(1).await);
    }

    #[tokio::test]
    async fn test_replace() {
        let context = TestContext::setup().await;
        context.insert_estado(35, "São Paulo", "SP").await;
        context.insert_cidade(1, "Sorocava", 35).await;

        let response = OneShotBuilder::new(context.into_app(), route("1"))
            .send_json(NovaCidade::new("Sorocaba", 35))
            .await
            .expect_json::<Cidade>()
            .await;
        assert_eq!("Sorocaba", response.nome());
    }

    #[tokio::test]
    async fn test_unknown_estado() {
        let context = TestContext::setup().await;

        OneShotBuilder::new(context.into_app(), route("1"))
            .send_json(NovaCidade::new("Nenhures", 99))
            .await
            .expect_status(http::StatusCode::BAD_REQUEST)
            .expect_error("Estado informado não cadastrado")
            .await;
    }
}
