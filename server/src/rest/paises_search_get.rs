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

//! API to search for countries by name fragment.

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
    let paises = driver.search_paises(&params.q.unwrap_or_default()).await?;
    Ok(Json(paises))
}

#[cfg(test)]
mod tests {
    use crate::model::Pais;
    use crate::rest::testutils::*;
    use axum::http;
    use retaguarda_core::rest::testutils::*;
    use retaguarda_core::test_payload_must_be_empty;

    fn route() -> (http::Method, String) {
        (http::Method::GET, "/api/paises/search".to_owned())
    }

    #[tokio::test]
    async fn test_ok() {
        let context = TestContext::setup().await;
        context.insert_pais("1058", "Brasil").await;
        context.insert_pais("0639", "Argentina").await;

        let response = OneShotBuilder::new(context.into_app(), route())
            .with_query(vec![("q", "bra")])
            .send_empty()
            .await
            .expect_json::<Vec<Pais>>()
            .await;
        assert_eq!(vec![Pais::new("1058".to_owned(), "Brasil".to_owned())], response);
    }

    #[tokio::test]
    async fn test_missing_term() {
        let context = TestContext::setup().await;

        OneShotBuilder::new(context.into_app(), route())
            .send_empty()
            .await
            .expect_status(http::StatusCode::BAD_REQUEST)
            .expect_error("Informe o termo de busca")
            .await;
    }

    test_payload_must_be_empty!(TestContext::setup().await.into_app(), route(), vec![("q", "x")]);
}
