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

//! Entry point to the REST server.

use crate::driver::Driver;
use axum::Router;
use tower_http::cors::CorsLayer;

mod cidade_delete;
mod cidade_get;
mod cidade_put;
mod cidades_search_get;
mod condicao_get;
mod condicao_put;
mod condicoes_search_get;
mod contas_get;
mod fornecedor_delete;
mod fornecedor_get;
mod fornecedor_put;
mod fornecedores_search_get;
mod pais_get;
mod paises_search_get;
mod produto_delete;
mod produto_get;
mod produto_put;
mod produtos_search_get;
#[cfg(test)]
mod testutils;
mod transportadora_get;
mod transportadoras_search_get;

/// Creates the router for the application.
///
/// The permissive CORS layer exists because the management UI is served from
/// a different origin and consumes these APIs directly.
pub(crate) fn app(driver: Driver) -> Router {
    use axum::routing::get;
    Router::new()
        .route("/api/cidades/search", get(cidades_search_get::handler))
        .route(
            "/api/cidades/:id",
            get(cidade_get::handler).put(cidade_put::handler).delete(cidade_delete::handler),
        )
        .route("/api/paises/search", get(paises_search_get::handler))
        .route("/api/paises/:codigo", get(pais_get::handler))
        .route("/api/produtos/search", get(produtos_search_get::handler))
        .route(
            "/api/produtos/:id",
            get(produto_get::handler).put(produto_put::handler).delete(produto_delete::handler),
        )
        .route("/api/fornecedores/search", get(fornecedores_search_get::handler))
        .route(
            "/api/fornecedores/:id",
            get(fornecedor_get::handler)
                .put(fornecedor_put::handler)
                .delete(fornecedor_delete::handler),
        )
        .route("/api/transportadoras/search", get(transportadoras_search_get::handler))
        .route("/api/transportadoras/:id", get(transportadora_get::handler))
        .route("/api/condicoes-pagamento/search", get(condicoes_search_get::handler))
        .route("/api/condicoes-pagamento/:id", get(condicao_get::handler).put(condicao_put::handler))
        .route("/api/contas", get(contas_get::handler))
        .layer(CorsLayer::permissive())
        .with_state(driver)
}
