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

//! Data-access operations for transportadoras, their supplier associations
//! and their vehicle fleet.

use crate::db::MAX_SUGESTOES;
use crate::model::{FornecedorResumo, Transportadora, TransportadoraSugestao, Veiculo};
#[cfg(feature = "postgres")]
use retaguarda_core::db::postgres;
#[cfg(any(feature = "sqlite", test))]
use retaguarda_core::db::sqlite;
use retaguarda_core::db::{DbError, DbResult, Executor};
use retaguarda_core::model::Cnpj;
use sqlx::Row;
#[cfg(feature = "postgres")]
use sqlx::postgres::PgRow;
#[cfg(any(feature = "sqlite", test))]
use sqlx::sqlite::SqliteRow;

#[cfg(feature = "postgres")]
impl TryFrom<PgRow> for Transportadora {
    type Error = DbError;

    fn try_from(row: PgRow) -> DbResult<Self> {
        let id: i32 = row.try_get("id").map_err(postgres::map_sqlx_error)?;
        let razao_social: String = row.try_get("razao_social").map_err(postgres::map_sqlx_error)?;
        let cnpj: String = row.try_get("cnpj").map_err(postgres::map_sqlx_error)?;
        let endereco: String = row.try_get("endereco").map_err(postgres::map_sqlx_error)?;
        let cidade_id: i32 = row.try_get("cidade_id").map_err(postgres::map_sqlx_error)?;

        Ok(Transportadora::new(id, razao_social, Cnpj::new(cnpj)?, endereco, cidade_id))
    }
}

#[cfg(any(feature = "sqlite", test))]
impl TryFrom<SqliteRow> for Transportadora {
    type Error = DbError;

    fn try_from(row: SqliteRow) -> DbResult<Self> {
        let id: i32 = row.try_get("id").map_err(sqlite::map_sqlx_error)?;
        let razao_social: String = row.try_get("razao_social").map_err(sqlite::map_sqlx_error)?;
        let cnpj: String = row.try_get("cnpj").map_err(sqlite::map_sqlx_error)?;
        let endereco: String = row.try_get("endereco").map_err(sqlite::map_sqlx_error)?;
        let cidade_id: i32 = row.try_get("cidade_id").map_err(sqlite::map_sqlx_error)?;

        Ok(Transportadora::new(id, razao_social, Cnpj::new(cnpj)?, endereco, cidade_id))
    }
}

/// Searches for carriers whose legal name contains `termo`, annotated with
/// the name of their city.
pub(crate) async fn search_transportadoras(
    ex: &mut Executor,
    termo: &str,
) -> DbResult<Vec<TransportadoraSugestao>> {
    let rows = match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "
                SELECT t.id, t.razao_social, c.nome AS cidade
                FROM transportadoras t JOIN cidades c ON c.id = t.cidade_id
                WHERE t.razao_social ILIKE '%' || $1 || '%'
                ORDER BY t.razao_social
                LIMIT $2";
            sqlx::query(query_str)
                .bind(termo)
                .bind(MAX_SUGESTOES)
                .fetch_all(ex)
                .await
                .map_err(postgres::map_sqlx_error)?
                .into_iter()
                .map(|row| {
                    let id: i32 = row.try_get("id").map_err(postgres::map_sqlx_error)?;
                    let razao_social: String =
                        row.try_get("razao_social").map_err(postgres::map_sqlx_error)?;
                    let cidade: String = row.try_get("cidade").map_err(postgres::map_sqlx_error)?;
                    Ok(TransportadoraSugestao::new(id, razao_social, cidade))
                })
                .collect::<DbResult<Vec<TransportadoraSugestao>>>()?
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "
                SELECT t.id, t.razao_social, c.nome AS cidade
                FROM transportadoras t JOIN cidades c ON c.id = t.cidade_id
                WHERE t.razao_social LIKE '%' || ? || '%'
                ORDER BY t.razao_social
                LIMIT ?";
            sqlx::query(query_str)
                .bind(termo)
                .bind(MAX_SUGESTOES)
                .fetch_all(ex)
                .await
                .map_err(sqlite::map_sqlx_error)?
                .into_iter()
                .map(|row| {
                    let id: i32 = row.try_get("id").map_err(sqlite::map_sqlx_error)?;
                    let razao_social: String =
                        row.try_get("razao_social").map_err(sqlite::map_sqlx_error)?;
                    let cidade: String = row.try_get("cidade").map_err(sqlite::map_sqlx_error)?;
                    Ok(TransportadoraSugestao::new(id, razao_social, cidade))
                })
                .collect::<DbResult<Vec<TransportadoraSugestao>>>()?
        }

        #[allow(unused)]
        _ => unreachable!(),
    };
    Ok(rows)
}

/// Gets the carrier identified by `id`.
pub(crate) async fn get_transportadora(ex: &mut Executor, id: i32) -> DbResult<Transportadora> {
    match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "
                SELECT id, razao_social, cnpj, endereco, cidade_id
                FROM transportadoras
                WHERE id = $1";
            let row = sqlx::query(query_str)
                .bind(id)
                .fetch_one(ex)
                .await
                .map_err(postgres::map_sqlx_error)?;
            Transportadora::try_from(row)
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "
                SELECT id, razao_social, cnpj, endereco, cidade_id
                FROM transportadoras
                WHERE id = ?";
            let row =
                sqlx::query(query_str).bind(id).fetch_one(ex).await.map_err(sqlite::map_sqlx_error)?;
            Transportadora::try_from(row)
        }

        #[allow(unused)]
        _ => unreachable!(),
    }
}

/// Creates or replaces the carrier described by `transportadora`.
pub(crate) async fn put_transportadora(
    ex: &mut Executor,
    transportadora: &Transportadora,
) -> DbResult<()> {
    let rows_affected = match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "
                INSERT INTO transportadoras (id, razao_social, cnpj, endereco, cidade_id)
                VALUES ($1, $2, $3, $4, $5)
                ON CONFLICT (id) DO UPDATE SET
                    razao_social = EXCLUDED.razao_social,
                    cnpj = EXCLUDED.cnpj,
                    endereco = EXCLUDED.endereco,
                    cidade_id = EXCLUDED.cidade_id";
            sqlx::query(query_str)
                .bind(transportadora.id())
                .bind(transportadora.razao_social())
                .bind(transportadora.cnpj().as_str())
                .bind(transportadora.endereco())
                .bind(transportadora.cidade_id())
                .execute(ex)
                .await
                .map_err(postgres::map_sqlx_error)?
                .rows_affected()
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "
                INSERT INTO transportadoras (id, razao_social, cnpj, endereco, cidade_id)
                VALUES (?, ?, ?, ?, ?)
                ON CONFLICT (id) DO UPDATE SET
                    razao_social = excluded.razao_social,
                    cnpj = excluded.cnpj,
                    endereco = excluded.endereco,
                    cidade_id = excluded.cidade_id";
            sqlx::query(query_str)
                .bind(transportadora.id())
                .bind(transportadora.razao_social())
                .bind(transportadora.cnpj().as_str())
                .bind(transportadora.endereco())
                .bind(transportadora.cidade_id())
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

/// Lists the suppliers associated with the carrier `id`, ordered by legal
/// name.
pub(crate) async fn fornecedores_da_transportadora(
    ex: &mut Executor,
    id: i32,
) -> DbResult<Vec<FornecedorResumo>> {
    let rows = match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "
                SELECT f.id, f.razao_social
                FROM fornecedores f
                JOIN transportadora_fornecedores tf ON tf.fornecedor_id = f.id
                WHERE tf.transportadora_id = $1
                ORDER BY f.razao_social";
            sqlx::query(query_str)
                .bind(id)
                .fetch_all(ex)
                .await
                .map_err(postgres::map_sqlx_error)?
                .into_iter()
                .map(|row| {
                    let id: i32 = row.try_get("id").map_err(postgres::map_sqlx_error)?;
                    let razao_social: String =
                        row.try_get("razao_social").map_err(postgres::map_sqlx_error)?;
                    Ok(FornecedorResumo::new(id, razao_social))
                })
                .collect::<DbResult<Vec<FornecedorResumo>>>()?
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "
                SELECT f.id, f.razao_social
                FROM fornecedores f
                JOIN transportadora_fornecedores tf ON tf.fornecedor_id = f.id
                WHERE tf.transportadora_id = ?
                ORDER BY f.razao_social";
            sqlx::query(query_str)
                .bind(id)
                .fetch_all(ex)
                .await
                .map_err(sqlite::map_sqlx_error)?
                .into_iter()
                .map(|row| {
                    let id: i32 = row.try_get("id").map_err(sqlite::map_sqlx_error)?;
                    let razao_social: String =
                        row.try_get("razao_social").map_err(sqlite::map_sqlx_error)?;
                    Ok(FornecedorResumo::new(id, razao_social))
                })
                .collect::<DbResult<Vec<FornecedorResumo>>>()?
        }

        #[allow(unused)]
        _ => unreachable!(),
    };
    Ok(rows)
}

/// Associates the supplier `fornecedor_id` with the carrier
/// `transportadora_id`.
pub(crate) async fn add_fornecedor_da_transportadora(
    ex: &mut Executor,
    transportadora_id: i32,
    fornecedor_id: i32,
) -> DbResult<()> {
    let rows_affected = match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "
                INSERT INTO transportadora_fornecedores (transportadora_id, fornecedor_id)
                VALUES ($1, $2)";
            sqlx::query(query_str)
                .bind(transportadora_id)
                .bind(fornecedor_id)
                .execute(ex)
                .await
                .map_err(postgres::map_sqlx_error)?
                .rows_affected()
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "
                INSERT INTO transportadora_fornecedores (transportadora_id, fornecedor_id)
                VALUES (?, ?)";
            sqlx::query(query_str)
                .bind(transportadora_id)
                .bind(fornecedor_id)
                .execute(ex)
                .await
                .map_err(sqlite::map_sqlx_error)?
                .rows_affected()
        }

        #[allow(unused)]
        _ => unreachable!(),
    };

    if rows_affected != 1 {
        return Err(DbError::BackendError("Insertion affected more than one row".to_owned()));
    }
    Ok(())
}

/// Lists the vehicles of the carrier `id`, ordered by plate.
pub(crate) async fn veiculos_da_transportadora(
    ex: &mut Executor,
    id: i32,
) -> DbResult<Vec<Veiculo>> {
    let rows = match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "
                SELECT placa FROM veiculos WHERE transportadora_id = $1 ORDER BY placa";
            sqlx::query(query_str)
                .bind(id)
                .fetch_all(ex)
                .await
                .map_err(postgres::map_sqlx_error)?
                .into_iter()
                .map(|row| {
                    let placa: String = row.try_get("placa").map_err(postgres::map_sqlx_error)?;
                    Ok(Veiculo::new(placa))
                })
                .collect::<DbResult<Vec<Veiculo>>>()?
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "
                SELECT placa FROM veiculos WHERE transportadora_id = ? ORDER BY placa";
            sqlx::query(query_str)
                .bind(id)
                .fetch_all(ex)
                .await
                .map_err(sqlite::map_sqlx_error)?
                .into_iter()
                .map(|row| {
                    let placa: String = row.try_get("placa").map_err(sqlite::map_sqlx_error)?;
                    Ok(Veiculo::new(placa))
                })
                .collect::<DbResult<Vec<Veiculo>>>()?
        }

        #[allow(unused)]
        _ => unreachable!(),
    };
    Ok(rows)
}

/// Registers the vehicle `placa` for the carrier `transportadora_id`.
pub(crate) async fn put_veiculo(
    ex: &mut Executor,
    transportadora_id: i32,
    placa: &str,
) -> DbResult<()> {
    let rows_affected = match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "
                INSERT INTO veiculos (placa, transportadora_id) VALUES ($1, $2)
                ON CONFLICT (placa) DO UPDATE
                    SET transportadora_id = EXCLUDED.transportadora_id";
            sqlx::query(query_str)
                .bind(placa)
                .bind(transportadora_id)
                .execute(ex)
                .await
                .map_err(postgres::map_sqlx_error)?
                .rows_affected()
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "
                INSERT INTO veiculos (placa, transportadora_id) VALUES (?, ?)
                ON CONFLICT (placa) DO UPDATE
                    SET transportadora_id = excluded.transportadora_id";
            sqlx::query(query_str)
                .bind(placa)
                .bind(transportadora_id)
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
