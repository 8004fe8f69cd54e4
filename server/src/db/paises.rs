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

//! Data-access operations for paises.

use crate::db::MAX_SUGESTOES;
use crate::model::Pais;
#[cfg(feature = "postgres")]
use retaguarda_core::db::postgres;
#[cfg(any(feature = "sqlite", test))]
use retaguarda_core::db::sqlite;
use retaguarda_core::db::{DbError, DbResult, Executor};
use sqlx::Row;
#[cfg(feature = "postgres")]
use sqlx::postgres::PgRow;
#[cfg(any(feature = "sqlite", test))]
use sqlx::sqlite::SqliteRow;

#[cfg(feature = "postgres")]
impl TryFrom<PgRow> for Pais {
    type Error = DbError;

    fn try_from(row: PgRow) -> DbResult<Self> {
        let codigo: String = row.try_get("codigo").map_err(postgres::map_sqlx_error)?;
        let nome: String = row.try_get("nome").map_err(postgres::map_sqlx_error)?;

        Ok(Pais::new(codigo, nome))
    }
}

#[cfg(any(feature = "sqlite", test))]
impl TryFrom<SqliteRow> for Pais {
    type Error = DbError;

    fn try_from(row: SqliteRow) -> DbResult<Self> {
        let codigo: String = row.try_get("codigo").map_err(sqlite::map_sqlx_error)?;
        let nome: String = row.try_get("nome").map_err(sqlite::map_sqlx_error)?;

        Ok(Pais::new(codigo, nome))
    }
}

/// Creates or replaces the country described by `pais`.
pub(crate) async fn put_pais(ex: &mut Executor, pais: &Pais) -> DbResult<()> {
    let rows_affected = match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "
                INSERT INTO paises (codigo, nome) VALUES ($1, $2)
                ON CONFLICT (codigo) DO UPDATE SET nome = EXCLUDED.nome";
            sqlx::query(query_str)
                .bind(pais.codigo())
                .bind(pais.nome())
                .execute(ex)
                .await
                .map_err(postgres::map_sqlx_error)?
                .rows_affected()
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "
                INSERT INTO paises (codigo, nome) VALUES (?, ?)
                ON CONFLICT (codigo) DO UPDATE SET nome = excluded.nome";
            sqlx::query(query_str)
                .bind(pais.codigo())
                .bind(pais.nome())
                .execute(ex)
                .await
                .map_err(sqlite::map_sqlx_error)?
                .rows_affected()
        }

        #[allow(unused)]
        _ => unreachable!(),
    };

    if rows_affected != 1 {
        return Err(DbError::BackendError("Upsert affected more than one row".to_owned()));
    }
    Ok(())
}

/// Searches for countries whose name contains `termo`.
pub(crate) async fn search_paises(ex: &mut Executor, termo: &str) -> DbResult<Vec<Pais>> {
    match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "
                SELECT codigo, nome FROM paises
                WHERE nome ILIKE '%' || $1 || '%'
                ORDER BY nome
                LIMIT $2";
            let rows = sqlx::query(query_str)
                .bind(termo)
                .bind(MAX_SUGESTOES)
                .fetch_all(ex)
                .await
                .map_err(postgres::map_sqlx_error)?;
            rows.into_iter().map(Pais::try_from).collect()
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "
                SELECT codigo, nome FROM paises
                WHERE nome LIKE '%' || ? || '%'
                ORDER BY nome
                LIMIT ?";
            let rows = sqlx::query(query_str)
                .bind(termo)
                .bind(MAX_SUGESTOES)
                .fetch_all(ex)
                .await
                .map_err(sqlite::map_sqlx_error)?;
            rows.into_iter().map(Pais::try_from).collect()
        }

        #[allow(unused)]
        _ => unreachable!(),
    }
}

/// Gets the country identified by `codigo`.
pub(crate) async fn get_pais(ex: &mut Executor, codigo: &str) -> DbResult<Pais> {
    match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "SELECT codigo, nome FROM paises WHERE codigo = $1";
            let row = sqlx::query(query_str)
                .bind(codigo)
                .fetch_one(ex)
                .await
                .map_err(postgres::map_sqlx_error)?;
            Pais::try_from(row)
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "SELECT codigo, nome FROM paises WHERE codigo = ?";
            let row = sqlx::query(query_str)
                .bind(codigo)
                .fetch_one(ex)
                .await
                .map_err(sqlite::map_sqlx_error)?;
            Pais::try_from(row)
        }

        #[allow(unused)]
        _ => unreachable!(),
    }
}
