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

//! Data-access operations for produtos.

use crate::db::MAX_SUGESTOES;
use crate::model::{Produto, ProdutoSugestao};
#[cfg(feature = "postgres")]
use retaguarda_core::db::postgres;
#[cfg(any(feature = "sqlite", test))]
use retaguarda_core::db::sqlite::{self, build_date, build_decimal, unpack_date, unpack_decimal};
use retaguarda_core::db::{DbError, DbResult, Executor};
#[cfg(feature = "postgres")]
use rust_decimal::Decimal;
use sqlx::Row;
#[cfg(feature = "postgres")]
use sqlx::postgres::PgRow;
#[cfg(any(feature = "sqlite", test))]
use sqlx::sqlite::SqliteRow;
#[cfg(feature = "postgres")]
use time::Date;

#[cfg(feature = "postgres")]
impl TryFrom<PgRow> for Produto {
    type Error = DbError;

    fn try_from(row: PgRow) -> DbResult<Self> {
        let id: i32 = row.try_get("id").map_err(postgres::map_sqlx_error)?;
        let descricao: String = row.try_get("descricao").map_err(postgres::map_sqlx_error)?;
        let ncm: String = row.try_get("ncm").map_err(postgres::map_sqlx_error)?;
        let unidade: String = row.try_get("unidade").map_err(postgres::map_sqlx_error)?;
        let preco_unitario: Decimal =
            row.try_get("preco_unitario").map_err(postgres::map_sqlx_error)?;
        let data_cadastro: Option<Date> =
            row.try_get("data_cadastro").map_err(postgres::map_sqlx_error)?;
        let icms: Decimal = row.try_get("aliquota_icms").map_err(postgres::map_sqlx_error)?;
        let ipi: Decimal = row.try_get("aliquota_ipi").map_err(postgres::map_sqlx_error)?;
        let pis: Decimal = row.try_get("aliquota_pis").map_err(postgres::map_sqlx_error)?;
        let cofins: Decimal = row.try_get("aliquota_cofins").map_err(postgres::map_sqlx_error)?;

        Ok(Produto::new(id, descricao, ncm, unidade, preco_unitario)?
            .with_data_cadastro(data_cadastro)
            .with_aliquotas(icms, ipi, pis, cofins)?)
    }
}

#[cfg(any(feature = "sqlite", test))]
impl TryFrom<SqliteRow> for Produto {
    type Error = DbError;

    fn try_from(row: SqliteRow) -> DbResult<Self> {
        let id: i32 = row.try_get("id").map_err(sqlite::map_sqlx_error)?;
        let descricao: String = row.try_get("descricao").map_err(sqlite::map_sqlx_error)?;
        let ncm: String = row.try_get("ncm").map_err(sqlite::map_sqlx_error)?;
        let unidade: String = row.try_get("unidade").map_err(sqlite::map_sqlx_error)?;
        let preco_unitario: String =
            row.try_get("preco_unitario").map_err(sqlite::map_sqlx_error)?;
        let data_cadastro: Option<String> =
            row.try_get("data_cadastro").map_err(sqlite::map_sqlx_error)?;
        let icms: String = row.try_get("aliquota_icms").map_err(sqlite::map_sqlx_error)?;
        let ipi: String = row.try_get("aliquota_ipi").map_err(sqlite::map_sqlx_error)?;
        let pis: String = row.try_get("aliquota_pis").map_err(sqlite::map_sqlx_error)?;
        let cofins: String = row.try_get("aliquota_cofins").map_err(sqlite::map_sqlx_error)?;

        let data_cadastro = match data_cadastro {
            Some(raw) => Some(build_date(&raw)?),
            None => None,
        };

        Ok(Produto::new(id, descricao, ncm, unidade, build_decimal(&preco_unitario)?)?
            .with_data_cadastro(data_cadastro)
            .with_aliquotas(
                build_decimal(&icms)?,
                build_decimal(&ipi)?,
                build_decimal(&pis)?,
                build_decimal(&cofins)?,
            )?)
    }
}

#[cfg(feature = "postgres")]
impl TryFrom<PgRow> for ProdutoSugestao {
    type Error = DbError;

    fn try_from(row: PgRow) -> DbResult<Self> {
        let id: i32 = row.try_get("id").map_err(postgres::map_sqlx_error)?;
        let descricao: String = row.try_get("descricao").map_err(postgres::map_sqlx_error)?;
        let unidade: String = row.try_get("unidade").map_err(postgres::map_sqlx_error)?;

        Ok(ProdutoSugestao::new(id, descricao, unidade))
    }
}

#[cfg(any(feature = "sqlite", test))]
impl TryFrom<SqliteRow> for ProdutoSugestao {
    type Error = DbError;

    fn try_from(row: SqliteRow) -> DbResult<Self> {
        let id: i32 = row.try_get("id").map_err(sqlite::map_sqlx_error)?;
        let descricao: String = row.try_get("descricao").map_err(sqlite::map_sqlx_error)?;
        let unidade: String = row.try_get("unidade").map_err(sqlite::map_sqlx_error)?;

        Ok(ProdutoSugestao::new(id, descricao, unidade))
    }
}

/// Searches for products whose description contains `termo`.
pub(crate) async fn search_produtos(
    ex: &mut Executor,
    termo: &str,
) -> DbResult<Vec<ProdutoSugestao>> {
    match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "
                SELECT id, descricao, unidade FROM produtos
                WHERE descricao ILIKE '%' || $1 || '%'
                ORDER BY descricao
                LIMIT $2";
            let rows = sqlx::query(query_str)
                .bind(termo)
                .bind(MAX_SUGESTOES)
                .fetch_all(ex)
                .await
                .map_err(postgres::map_sqlx_error)?;
            rows.into_iter().map(ProdutoSugestao::try_from).collect()
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "
                SELECT id, descricao, unidade FROM produtos
                WHERE descricao LIKE '%' || ? || '%'
                ORDER BY descricao
                LIMIT ?";
            let rows = sqlx::query(query_str)
                .bind(termo)
                .bind(MAX_SUGESTOES)
                .fetch_all(ex)
                .await
                .map_err(sqlite::map_sqlx_error)?;
            rows.into_iter().map(ProdutoSugestao::try_from).collect()
        }

        #[allow(unused)]
        _ => unreachable!(),
    }
}

/// Gets the product identified by `id`.
pub(crate) async fn get_produto(ex: &mut Executor, id: i32) -> DbResult<Produto> {
    match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "
                SELECT id, descricao, ncm, unidade, preco_unitario, data_cadastro,
                       aliquota_icms, aliquota_ipi, aliquota_pis, aliquota_cofins
                FROM produtos
                WHERE id = $1";
            let row = sqlx::query(query_str)
                .bind(id)
                .fetch_one(ex)
                .await
                .map_err(postgres::map_sqlx_error)?;
            Produto::try_from(row)
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "
                SELECT id, descricao, ncm, unidade, preco_unitario, data_cadastro,
                       aliquota_icms, aliquota_ipi, aliquota_pis, aliquota_cofins
                FROM produtos
                WHERE id = ?";
            let row =
                sqlx::query(query_str).bind(id).fetch_one(ex).await.map_err(sqlite::map_sqlx_error)?;
            Produto::try_from(row)
        }

        #[allow(unused)]
        _ => unreachable!(),
    }
}

/// Creates or replaces the product described by `produto`.
pub(crate) async fn put_produto(ex: &mut Executor, produto: &Produto) -> DbResult<()> {
    let rows_affected = match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "
                INSERT INTO produtos (id, descricao, ncm, unidade, preco_unitario, data_cadastro,
                                      aliquota_icms, aliquota_ipi, aliquota_pis, aliquota_cofins)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
                ON CONFLICT (id) DO UPDATE SET
                    descricao = EXCLUDED.descricao,
                    ncm = EXCLUDED.ncm,
                    unidade = EXCLUDED.unidade,
                    preco_unitario = EXCLUDED.preco_unitario,
                    data_cadastro = EXCLUDED.data_cadastro,
                    aliquota_icms = EXCLUDED.aliquota_icms,
                    aliquota_ipi = EXCLUDED.aliquota_ipi,
                    aliquota_pis = EXCLUDED.aliquota_pis,
                    aliquota_cofins = EXCLUDED.aliquota_cofins";
            sqlx::query(query_str)
                .bind(produto.id())
                .bind(produto.descricao())
                .bind(produto.ncm())
                .bind(produto.unidade())
                .bind(produto.preco_unitario())
                .bind(produto.data_cadastro())
                .bind(produto.aliquota_icms())
                .bind(produto.aliquota_ipi())
                .bind(produto.aliquota_pis())
                .bind(produto.aliquota_cofins())
                .execute(ex)
                .await
                .map_err(postgres::map_sqlx_error)?
                .rows_affected()
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "
                INSERT INTO produtos (id, descricao, ncm, unidade, preco_unitario, data_cadastro,
                                      aliquota_icms, aliquota_ipi, aliquota_pis, aliquota_cofins)
                VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
                ON CONFLICT (id) DO UPDATE SET
                    descricao = excluded.descricao,
                    ncm = excluded.ncm,
                    unidade = excluded.unidade,
                    preco_unitario = excluded.preco_unitario,
                    data_cadastro = excluded.data_cadastro,
                    aliquota_icms = excluded.aliquota_icms,
                    aliquota_ipi = excluded.aliquota_ipi,
                    aliquota_pis = excluded.aliquota_pis,
                    aliquota_cofins = excluded.aliquota_cofins";
            sqlx::query(query_str)
                .bind(produto.id())
                .bind(produto.descricao())
                .bind(produto.ncm())
                .bind(produto.unidade())
                .bind(unpack_decimal(produto.preco_unitario()))
                .bind(produto.data_cadastro().as_ref().map(|d| unpack_date(*d)))
                .bind(unpack_decimal(produto.aliquota_icms()))
                .bind(unpack_decimal(produto.aliquota_ipi()))
                .bind(unpack_decimal(produto.aliquota_pis()))
                .bind(unpack_decimal(produto.aliquota_cofins()))
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

/// Deletes the product `id`.
pub(crate) async fn delete_produto(ex: &mut Executor, id: i32) -> DbResult<()> {
    let rows_affected = match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "DELETE FROM produtos WHERE id = $1";
            sqlx::query(query_str)
                .bind(id)
                .execute(ex)
                .await
                .map_err(postgres::map_sqlx_error)?
                .rows_affected()
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "DELETE FROM produtos WHERE id = ?";
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
