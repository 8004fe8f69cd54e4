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

//! API to get one country by code.

use crate::driver::Driver;
use axum::Json;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use retaguarda_core::rest::{EmptyBody, RestError};

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    Path(codigo): Path<String>,
    _: EmptyBody,
) -> Result<impl IntoResponse, RestError> {
    let pais = driver.get_pais(&codigo).await?;
    Ok(Json(pais))
}

#[cfg(test)]
mod tests {
    use crate::model::Pais;
    use crate::rest::testutils::*;
    use axum::http;
    use retaguarda_core::rest::testutils::*;
    use retaguarda_core::test_payload_must_be_empty;

    fn route(codigo: &str) -> (http::Method, String) {
        (http::Method::GET, format!("/api/paises/{}", codigo))
    }

    #[tokio::test]
    async fn test_ok() {
        let context = TestContext::setup().await;
        context.insert_pais("1058", "Brasil").await;

        let response = OneShotBuilder::new(context.into_app(), route("1058"))
            .send_empty()
            .await
            .expect_json::<Pais>()
            .await;
        assert_eq!(Pais::new("1058".to_owned(), "Brasil".to_owned()), response);
    }

    #[tokio::test]
    async fn test_missing() {
        let context = TestContext::setup().await;

        OneShotBuilder::new(context.into_app(), route("9999"))
            .send_empty()
            .await
            .expect_status(http::StatusCode::NOT_FOUND)
            .expect_error("País não encontrado")
            .await;
    }

    test_payload_must_be_empty!(TestContext::setup().await.into_app(), route("1058"));
}
