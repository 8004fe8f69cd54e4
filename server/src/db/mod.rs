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

//! Database abstraction in terms of the operations needed by the service.
//!
//! Every operation is a free function over an `Executor` that issues one
//! parameterized query.  The autocomplete searches share a fixed read-model
//! contract: case-insensitive substring match on the name field, the
//! denormalized related-entity display name where one exists, ascending order
//! by the matched name, and at most `MAX_SUGESTOES` rows.

use retaguarda_core::db::{DbResult, Executor};
#[cfg(feature = "postgres")]
use retaguarda_core::db::postgres;
#[cfg(any(feature = "sqlite", test))]
use retaguarda_core::db::sqlite;

mod cidades;
mod condicoes;
mod contas;
mod fornecedores;
mod paises;
mod produtos;
mod transportadoras;

pub(crate) use cidades::*;
pub(crate) use condicoes::*;
pub(crate) use contas::*;
pub(crate) use fornecedores::*;
pub(crate) use paises::*;
pub(crate) use produtos::*;
pub(crate) use transportadoras::*;

/// Maximum number of rows returned by the autocomplete searches.
pub(crate) const MAX_SUGESTOES: i64 = 10;

/// Initializes the database schema.
pub async fn init_schema(ex: &mut Executor) -> DbResult<()> {
    match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => postgres::run_schema(ex, include_str!("postgres.sql")).await,

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => sqlite::run_schema(ex, include_str!("sqlite.sql")).await,

        #[allow(unused)]
        _ => unreachable!(),
    }
}
