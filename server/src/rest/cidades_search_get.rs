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

//! API to search for cities by name fragment.

use crate::driver::Driver;
use axum::Json;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use retaguarda_core::rest::{EmptyBody, RestError};
use serde::Deserialize;

/// Query parameters accepted by this API.
#[derive(Deserialize)]
pub(crate) struct SearchParams {
    /// Name fragment to look for.
    q: Option<String>,
}

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    Query(params): Query<SearchParams>,
    _: EmptyBody,
) -> Result<impl IntoResponse, RestError> {
    let sugestoes = driver.search_cidades(&params.q.unwrap_or_default()).await?;
    Ok(Json(sugestoes))
}

#[cfg(test)]
mod tests {
    use crate::model::CidadeSugestao;
    use crate::rest::testutils::*;
    use axum::http;
    use retaguarda_core::rest::testutils::*;
    use retaguarda_core::test_payload_must_be_empty;

    fn route() -> (http::Method, String) {
        (http::Method::GET, "/api/cidades/search".to_owned())
    }

    #[tokio::test]
    async fn test_ok() {
        let context = TestContext::setup().await;
        context.insert_estado(35, "São Paulo", "SP").await;
        context.insert_cidade(1, "Santos", 35).await;
        context.insert_cidade(2, "Campinas", 35).await;
        context.insert_cidade(3, "Santo André", 35).await;

        let response = OneShotBuilder::new(context.into_app(), route())
            .with_query(vec![("q", "sant")])
            .send_empty()
            .await
            .expect_json::<Vec<CidadeSugestao>>()
            .await;
        assert_eq!(
            vec![
                CidadeSugestao::new(3, "Santo André".to_owned(), "SP".to_owned()),
                CidadeSugestao::new(1, "Santos".to_owned(), "SP".to_owned()),
            ],
            response
        );
    }

    #[tokio::test]
    async fn test_no_matches() {
        let context = TestContext::setup().await;
        context.insert_estado(35, "São Paulo", "SP").await;
        context.insert_cidade(1, "Santos", 35).await;

        let response = OneShotBuilder::new(context.into_app(), route())
            .with_query(vec![("q", "inexistente")])
            .send_empty()
            .await
            .expect_json::<Vec<CidadeSugestao>>()
            .await;
        assert!(response.is_empty());
    }

    #[tokio::test]
    async fn test_missing_term() {
        let context = TestContext::setup().await;

        OneShotBuilder::new(context.app(), route())
            .send_empty()
            .await
            .expect_status(http::StatusCode::BAD_REQUEST)
            .expect_error("Informe o termo de busca")
            .await;

        OneShotBuilder::new(context.into_app(), route())
            .with_query(vec![("q", "   ")])
            .send_empty()
            .await
            .expect_status(http::StatusCode::BAD_REQUEST)
            .expect_error("Informe o termo de busca")
            .await;
    }

    test_payload_must_be_empty!(TestContext::setup().await.into_app(), route(), vec![("q", "x")]);
}
