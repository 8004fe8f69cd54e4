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

//! Data-access operations for estados and cidades.

use crate::db::MAX_SUGESTOES;
use crate::model::{Cidade, CidadeSugestao, Estado, NovaCidade};
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
impl TryFrom<PgRow> for Cidade {
    type Error = DbError;

    fn try_from(row: PgRow) -> DbResult<Self> {
        let id: i32 = row.try_get("id").map_err(postgres::map_sqlx_error)?;
        let nome: String = row.try_get("nome").map_err(postgres::map_sqlx_error)?;
        let estado_id: i32 = row.try_get("estado_id").map_err(postgres::map_sqlx_error)?;
        let estado: String = row.try_get("estado").map_err(postgres::map_sqlx_error)?;
        let uf: String = row.try_get("uf").map_err(postgres::map_sqlx_error)?;

        Ok(Cidade::new(id, nome, estado_id, estado, uf))
    }
}

#[cfg(any(feature = "sqlite", test))]
impl TryFrom<SqliteRow> for Cidade {
    type Error = DbError;

    fn try_from(row: SqliteRow) -> DbResult<Self> {
        let id: i32 = row.try_get("id").map_err(sqlite::map_sqlx_error)?;
        let nome: String = row.try_get("nome").map_err(sqlite::map_sqlx_error)?;
        let estado_id: i32 = row.try_get("estado_id").map_err(sqlite::map_sqlx_error)?;
        let estado: String = row.try_get("estado").map_err(sqlite::map_sqlx_error)?;
        let uf: String = row.try_get("uf").map_err(sqlite::map_sqlx_error)?;

        Ok(Cidade::new(id, nome, estado_id, estado, uf))
    }
}

#[cfg(feature = "postgres")]
impl TryFrom<PgRow> for CidadeSugestao {
    type Error = DbError;

    fn try_from(row: PgRow) -> DbResult<Self> {
        let id: i32 = row.try_get("id").map_err(postgres::map_sqlx_error)?;
        let nome: String = row.try_get("nome").map_err(postgres::map_sqlx_error)?;
        let estado: String = row.try_get("estado").map_err(postgres::map_sqlx_error)?;

        Ok(CidadeSugestao::new(id, nome, estado))
    }
}

#[cfg(any(feature = "sqlite", test))]
impl TryFrom<SqliteRow> for CidadeSugestao {
    type Error = DbError;

    fn try_from(row: SqliteRow) -> DbResult<Self> {
        let id: i32 = row.try_get("id").map_err(sqlite::map_sqlx_error)?;
        let nome: String = row.try_get("nome").map_err(sqlite::map_sqlx_error)?;
        let estado: String = row.try_get("estado").map_err(sqlite::map_sqlx_error)?;

        Ok(CidadeSugestao::new(id, nome, estado))
    }
}

/// Creates or replaces the state described by `estado`.
pub(crate) async fn put_estado(ex: &mut Executor, estado: &Estado) -> DbResult<()> {
    let rows_affected = match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "
                INSERT INTO estados (id, nome, uf) VALUES ($1, $2, $3)
                ON CONFLICT (id) DO UPDATE SET nome = EXCLUDED.nome, uf = EXCLUDED.uf";
            sqlx::query(query_str)
                .bind(estado.id())
                .bind(estado.nome())
                .bind(estado.uf())
                .execute(ex)
                .await
                .map_err(postgres::map_sqlx_error)?
                .rows_affected()
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "
                INSERT INTO estados (id, nome, uf) VALUES (?, ?, ?)
                ON CONFLICT (id) DO UPDATE SET nome = excluded.nome, uf = excluded.uf";
            sqlx::query(query_str)
                .bind(estado.id())
                .bind(estado.nome())
                .bind(estado.uf())
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

/// Searches for cities whose name contains `termo`, annotated with the UF of
/// their owning state.
pub(crate) async fn search_cidades(
    ex: &mut Executor,
    termo: &str,
) -> DbResult<Vec<CidadeSugestao>> {
    match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "
                SELECT c.id, c.nome, e.uf AS estado
                FROM cidades c JOIN estados e ON e.id = c.estado_id
                WHERE c.nome ILIKE '%' || $1 || '%'
                ORDER BY c.nome
                LIMIT $2";
            let rows = sqlx::query(query_str)
                .bind(termo)
                .bind(MAX_SUGESTOES)
                .fetch_all(ex)
                .await
                .map_err(postgres::map_sqlx_error)?;
            rows.into_iter().map(CidadeSugestao::try_from).collect()
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "
                SELECT c.id, c.nome, e.uf AS estado
                FROM cidades c JOIN estados e ON e.id = c.estado_id
                WHERE c.nome LIKE '%' || ? || '%'
                ORDER BY c.nome
                LIMIT ?";
            let rows = sqlx::query(query_str)
                .bind(termo)
                .bind(MAX_SUGESTOES)
                .fetch_all(ex)
                .await
                .map_err(sqlite::map_sqlx_error)?;
            rows.into_iter().map(CidadeSugestao::try_from).collect()
        }

        #[allow(unused)]
        _ => unreachable!(),
    }
}

/// Gets the city identified by `id` with the denormalized name of its state.
pub(crate) async fn get_cidade(ex: &mut Executor, id: i32) -> DbResult<Cidade> {
    match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "
                SELECT c.id, c.nome, c.estado_id, e.nome AS estado, e.uf
                FROM cidades c JOIN estados e ON e.id = c.estado_id
                WHERE c.id = $1";
            let row = sqlx::query(query_str)
                .bind(id)
                .fetch_one(ex)
                .await
                .map_err(postgres::map_sqlx_error)?;
            Cidade::try_from(row)
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "
                SELECT c.id, c.nome, c.estado_id, e.nome AS estado, e.uf
                FROM cidades c JOIN estados e ON e.id = c.estado_id
                WHERE c.id = ?";
            let row =
                sqlx::query(query_str).bind(id).fetch_one(ex).await.map_err(sqlite::map_sqlx_error)?;
            Cidade::try_from(row)
        }

        #[allow(unused)]
        _ => unreachable!(),
    }
}

/// Creates or replaces the city `id` with the data in `dados`.
pub(crate) async fn put_cidade(ex: &mut Executor, id: i32, dados: &NovaCidade) -> DbResult<()> {
    let rows_affected = match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "
                INSERT INTO cidades (id, nome, estado_id) VALUES ($1, $2, $3)
                ON CONFLICT (id) DO UPDATE
                    SET nome = EXCLUDED.nome, estado_id = EXCLUDED.estado_id";
            sqlx::query(query_str)
                .bind(id)
                .bind(dados.nome())
                .bind(dados.estado_id())
                .execute(ex)
                .await
                .map_err(postgres::map_sqlx_error)?
                .rows_affected()
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "
                INSERT INTO cidades (id, nome, estado_id) VALUES (?, ?, ?)
                ON CONFLICT (id) DO UPDATE
                    SET nome = excluded.nome, estado_id = excluded.estado_id";
            sqlx::query(query_str)
                .bind(id)
                .bind(dados.nome())
                .bind(dados.estado_id())
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

/// Deletes the city `id`.
pub(crate) async fn delete_cidade(ex: &mut Executor, id: i32) -> DbResult<()> {
    let rows_affected = match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "DELETE FROM cidades WHERE id = $1";
            sqlx::query(query_str)
                .bind(id)
                .execute(ex)
                .await
                .map_err(postgres::map_sqlx_error)?
                .rows_affected()
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "DELETE FROM cidades WHERE id = ?";
            sqlx::query(query_str)
                .bind(id)
                .execute(ex)
                .await
                .map_err(sqlite::map_sqlx_error)?
                .rows_affected()
        }

        #[allow(unused)]
        _ => unreachable!(),
    };

    match rows_affected {
        0 => Err(DbError::NotFound),
        1 => Ok(()),
        _ => Err(DbError::BackendError("Deletion affected more than one row".to_owned())),
    }
}
