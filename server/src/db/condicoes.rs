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

//! Data-access operations for payment conditions, their installments and the
//! payment method reference table.

use crate::db::MAX_SUGESTOES;
use crate::model::{CondicaoPagamento, CondicaoSugestao, Parcela};
#[cfg(feature = "postgres")]
use retaguarda_core::db::postgres;
#[cfg(any(feature = "sqlite", test))]
use retaguarda_core::db::sqlite::{self, build_decimal, unpack_decimal};
use retaguarda_core::db::{DbError, DbResult, Executor};
#[cfg(feature = "postgres")]
use rust_decimal::Decimal;
use sqlx::Row;
#[cfg(feature = "postgres")]
use sqlx::postgres::PgRow;
#[cfg(any(feature = "sqlite", test))]
use sqlx::sqlite::SqliteRow;

#[cfg(feature = "postgres")]
impl TryFrom<PgRow> for Parcela {
    type Error = DbError;

    fn try_from(row: PgRow) -> DbResult<Self> {
        let numero: i32 = row.try_get("numero").map_err(postgres::map_sqlx_error)?;
        let forma_pagamento: String =
            row.try_get("forma_pagamento").map_err(postgres::map_sqlx_error)?;
        let dias: i32 = row.try_get("dias").map_err(postgres::map_sqlx_error)?;
        let percentual: Decimal = row.try_get("percentual").map_err(postgres::map_sqlx_error)?;

        Ok(Parcela::new(numero, forma_pagamento, dias, percentual))
    }
}

#[cfg(any(feature = "sqlite", test))]
impl TryFrom<SqliteRow> for Parcela {
    type Error = DbError;

    fn try_from(row: SqliteRow) -> DbResult<Self> {
        let numero: i32 = row.try_get("numero").map_err(sqlite::map_sqlx_error)?;
        let forma_pagamento: String =
            row.try_get("forma_pagamento").map_err(sqlite::map_sqlx_error)?;
        let dias: i32 = row.try_get("dias").map_err(sqlite::map_sqlx_error)?;
        let percentual: String = row.try_get("percentual").map_err(sqlite::map_sqlx_error)?;

        Ok(Parcela::new(numero, forma_pagamento, dias, build_decimal(&percentual)?))
    }
}

/// Creates or replaces the payment method `codigo`.
pub(crate) async fn put_forma_pagamento(
    ex: &mut Executor,
    codigo: &str,
    descricao: &str,
) -> DbResult<()> {
    let rows_affected = match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "
                INSERT INTO formas_pagamento (codigo, descricao) VALUES ($1, $2)
                ON CONFLICT (codigo) DO UPDATE SET descricao = EXCLUDED.descricao";
            sqlx::query(query_str)
                .bind(codigo)
                .bind(descricao)
                .execute(ex)
                .await
                .map_err(postgres::map_sqlx_error)?
                .rows_affected()
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "
                INSERT INTO formas_pagamento (codigo, descricao) VALUES (?, ?)
                ON CONFLICT (codigo) DO UPDATE SET descricao = excluded.descricao";
            sqlx::query(query_str)
                .bind(codigo)
                .bind(descricao)
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

/// Searches for payment conditions whose description contains `termo`.
pub(crate) async fn search_condicoes(
    ex: &mut Executor,
    termo: &str,
) -> DbResult<Vec<CondicaoSugestao>> {
    let rows = match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "
                SELECT id, descricao FROM condicoes_pagamento
                WHERE descricao ILIKE '%' || $1 || '%'
                ORDER BY descricao
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
                    let descricao: String =
                        row.try_get("descricao").map_err(postgres::map_sqlx_error)?;
                    Ok(CondicaoSugestao::new(id, descricao))
                })
                .collect::<DbResult<Vec<CondicaoSugestao>>>()?
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "
                SELECT id, descricao FROM condicoes_pagamento
                WHERE descricao LIKE '%' || ? || '%'
                ORDER BY descricao
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
                    let descricao: String =
                        row.try_get("descricao").map_err(sqlite::map_sqlx_error)?;
                    Ok(CondicaoSugestao::new(id, descricao))
                })
                .collect::<DbResult<Vec<CondicaoSugestao>>>()?
        }

        #[allow(unused)]
        _ => unreachable!(),
    };
    Ok(rows)
}

/// Gets the payment condition identified by `id`, including its installments
/// ordered by number.
pub(crate) async fn get_condicao(ex: &mut Executor, id: i32) -> DbResult<CondicaoPagamento> {
    match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "
                SELECT id, descricao, juros, multa, desconto
                FROM condicoes_pagamento
                WHERE id = $1";
            let row = sqlx::query(query_str)
                .bind(id)
                .fetch_one(&mut *ex)
                .await
                .map_err(postgres::map_sqlx_error)?;
            let descricao: String = row.try_get("descricao").map_err(postgres::map_sqlx_error)?;
            let juros: Decimal = row.try_get("juros").map_err(postgres::map_sqlx_error)?;
            let multa: Decimal = row.try_get("multa").map_err(postgres::map_sqlx_error)?;
            let desconto: Decimal = row.try_get("desconto").map_err(postgres::map_sqlx_error)?;

            let query_str = "
                SELECT numero, forma_pagamento, dias, percentual
                FROM parcelas
                WHERE condicao_id = $1
                ORDER BY numero";
            let parcelas = sqlx::query(query_str)
                .bind(id)
                .fetch_all(ex)
                .await
                .map_err(postgres::map_sqlx_error)?
                .into_iter()
                .map(Parcela::try_from)
                .collect::<DbResult<Vec<Parcela>>>()?;

            Ok(CondicaoPagamento::new(id, descricao, juros, multa, desconto, parcelas)?)
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "
                SELECT id, descricao, juros, multa, desconto
                FROM condicoes_pagamento
                WHERE id = ?";
            let row = sqlx::query(query_str)
                .bind(id)
                .fetch_one(&mut *ex)
                .await
                .map_err(sqlite::map_sqlx_error)?;
            let descricao: String = row.try_get("descricao").map_err(sqlite::map_sqlx_error)?;
            let juros: String = row.try_get("juros").map_err(sqlite::map_sqlx_error)?;
            let multa: String = row.try_get("multa").map_err(sqlite::map_sqlx_error)?;
            let desconto: String = row.try_get("desconto").map_err(sqlite::map_sqlx_error)?;

            let query_str = "
                SELECT numero, forma_pagamento, dias, percentual
                FROM parcelas
                WHERE condicao_id = ?
                ORDER BY numero";
            let parcelas = sqlx::query(query_str)
                .bind(id)
                .fetch_all(ex)
                .await
                .map_err(sqlite::map_sqlx_error)?
                .into_iter()
                .map(Parcela::try_from)
                .collect::<DbResult<Vec<Parcela>>>()?;

            Ok(CondicaoPagamento::new(
                id,
                descricao,
                build_decimal(&juros)?,
                build_decimal(&multa)?,
                build_decimal(&desconto)?,
                parcelas,
            )?)
        }

        #[allow(unused)]
        _ => unreachable!(),
    }
}

/// Creates or replaces the header row of the payment condition described by
/// `condicao`.  The installments are maintained separately.
pub(crate) async fn put_condicao(ex: &mut Executor, condicao: &CondicaoPagamento) -> DbResult<()> {
    let rows_affected = match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "
                INSERT INTO condicoes_pagamento (id, descricao, juros, multa, desconto)
                VALUES ($1, $2, $3, $4, $5)
                ON CONFLICT (id) DO UPDATE SET
                    descricao = EXCLUDED.descricao,
                    juros = EXCLUDED.juros,
                    multa = EXCLUDED.multa,
                    desconto = EXCLUDED.desconto";
            sqlx::query(query_str)
                .bind(condicao.id())
                .bind(condicao.descricao())
                .bind(condicao.juros())
                .bind(condicao.multa())
                .bind(condicao.desconto())
                .execute(ex)
                .await
                .map_err(postgres::map_sqlx_error)?
                .rows_affected()
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "
                INSERT INTO condicoes_pagamento (id, descricao, juros, multa, desconto)
                VALUES (?, ?, ?, ?, ?)
                ON CONFLICT (id) DO UPDATE SET
                    descricao = excluded.descricao,
                    juros = excluded.juros,
                    multa = excluded.multa,
                    desconto = excluded.desconto";
            sqlx::query(query_str)
                .bind(condicao.id())
                .bind(condicao.descricao())
                .bind(unpack_decimal(condicao.juros()))
                .bind(unpack_decimal(condicao.multa()))
                .bind(unpack_decimal(condicao.desconto()))
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

/// Removes every installment of the payment condition `id`.
pub(crate) async fn delete_parcelas_da_condicao(ex: &mut Executor, id: i32) -> DbResult<()> {
    match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "DELETE FROM parcelas WHERE condicao_id = $1";
            sqlx::query(query_str)
                .bind(id)
                .execute(ex)
                .await
                .map_err(postgres::map_sqlx_error)?;
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "DELETE FROM parcelas WHERE condicao_id = ?";
            sqlx::query(query_str).bind(id).execute(ex).await.map_err(sqlite::map_sqlx_error)?;
        }

        #[allow(unused)]
        _ => unreachable!(),
    }
    Ok(())
}

/// Adds `parcela` to the payment condition `condicao_id`.
pub(crate) async fn add_parcela(
    ex: &mut Executor,
    condicao_id: i32,
    parcela: &Parcela,
) -> DbResult<()> {
    let rows_affected = match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "
                INSERT INTO parcelas (condicao_id, numero, forma_pagamento, dias, percentual)
                VALUES ($1, $2, $3, $4, $5)";
            sqlx::query(query_str)
                .bind(condicao_id)
                .bind(parcela.numero())
                .bind(parcela.forma_pagamento())
                .bind(parcela.dias())
                .bind(parcela.percentual())
                .execute(ex)
                .await
                .map_err(postgres::map_sqlx_error)?
                .rows_affected()
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "
                INSERT INTO parcelas (condicao_id, numero, forma_pagamento, dias, percentual)
                VALUES (?, ?, ?, ?, ?)";
            sqlx::query(query_str)
                .bind(condicao_id)
                .bind(parcela.numero())
                .bind(parcela.forma_pagamento())
                .bind(parcela.dias())
                .bind(unpack_decimal(parcela.percentual()))
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
