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

//! Data-access operations for payable and receivable accounts.

use crate::model::{Conta, TipoConta};
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
impl TryFrom<PgRow> for Conta {
    type Error = DbError;

    fn try_from(row: PgRow) -> DbResult<Self> {
        let modelo: i32 = row.try_get("modelo").map_err(postgres::map_sqlx_error)?;
        let serie: i32 = row.try_get("serie").map_err(postgres::map_sqlx_error)?;
        let numero: i32 = row.try_get("numero").map_err(postgres::map_sqlx_error)?;
        let fornecedor_id: i32 = row.try_get("fornecedor_id").map_err(postgres::map_sqlx_error)?;
        let parcela: i32 = row.try_get("parcela").map_err(postgres::map_sqlx_error)?;
        let tipo: String = row.try_get("tipo").map_err(postgres::map_sqlx_error)?;
        let data_vencimento: Date =
            row.try_get("data_vencimento").map_err(postgres::map_sqlx_error)?;
        let valor_parcela: Decimal =
            row.try_get("valor_parcela").map_err(postgres::map_sqlx_error)?;
        let data_pagamento: Option<Date> =
            row.try_get("data_pagamento").map_err(postgres::map_sqlx_error)?;
        let valor_pago: Option<Decimal> =
            row.try_get("valor_pago").map_err(postgres::map_sqlx_error)?;
        let forma_pagamento: String =
            row.try_get("forma_pagamento").map_err(postgres::map_sqlx_error)?;
        let juros: Decimal = row.try_get("juros").map_err(postgres::map_sqlx_error)?;
        let multa: Decimal = row.try_get("multa").map_err(postgres::map_sqlx_error)?;
        let desconto: Decimal = row.try_get("desconto").map_err(postgres::map_sqlx_error)?;

        Ok(Conta::new(
            modelo,
            serie,
            numero,
            fornecedor_id,
            parcela,
            TipoConta::from_db_str(&tipo)?,
            data_vencimento,
            valor_parcela,
            data_pagamento,
            valor_pago,
            forma_pagamento,
            juros,
            multa,
            desconto,
        ))
    }
}

#[cfg(any(feature = "sqlite", test))]
impl TryFrom<SqliteRow> for Conta {
    type Error = DbError;

    fn try_from(row: SqliteRow) -> DbResult<Self> {
        let modelo: i32 = row.try_get("modelo").map_err(sqlite::map_sqlx_error)?;
        let serie: i32 = row.try_get("serie").map_err(sqlite::map_sqlx_error)?;
        let numero: i32 = row.try_get("numero").map_err(sqlite::map_sqlx_error)?;
        let fornecedor_id: i32 = row.try_get("fornecedor_id").map_err(sqlite::map_sqlx_error)?;
        let parcela: i32 = row.try_get("parcela").map_err(sqlite::map_sqlx_error)?;
        let tipo: String = row.try_get("tipo").map_err(sqlite::map_sqlx_error)?;
        let data_vencimento: String =
            row.try_get("data_vencimento").map_err(sqlite::map_sqlx_error)?;
        let valor_parcela: String =
            row.try_get("valor_parcela").map_err(sqlite::map_sqlx_error)?;
        let data_pagamento: Option<String> =
            row.try_get("data_pagamento").map_err(sqlite::map_sqlx_error)?;
        let valor_pago: Option<String> =
            row.try_get("valor_pago").map_err(sqlite::map_sqlx_error)?;
        let forma_pagamento: String =
            row.try_get("forma_pagamento").map_err(sqlite::map_sqlx_error)?;
        let juros: String = row.try_get("juros").map_err(sqlite::map_sqlx_error)?;
        let multa: String = row.try_get("multa").map_err(sqlite::map_sqlx_error)?;
        let desconto: String = row.try_get("desconto").map_err(sqlite::map_sqlx_error)?;

        let data_pagamento = match data_pagamento {
            Some(raw) => Some(build_date(&raw)?),
            None => None,
        };
        let valor_pago = match valor_pago {
            Some(raw) => Some(build_decimal(&raw)?),
            None => None,
        };

        Ok(Conta::new(
            modelo,
            serie,
            numero,
            fornecedor_id,
            parcela,
            TipoConta::from_db_str(&tipo)?,
            build_date(&data_vencimento)?,
            build_decimal(&valor_parcela)?,
            data_pagamento,
            valor_pago,
            forma_pagamento,
            build_decimal(&juros)?,
            build_decimal(&multa)?,
            build_decimal(&desconto)?,
        ))
    }
}

/// Lists the account installments of type `tipo` that belong to the party
/// `fornecedor_id`, ordered by due date and installment number.
pub(crate) async fn contas_do_fornecedor(
    ex: &mut Executor,
    fornecedor_id: i32,
    tipo: TipoConta,
) -> DbResult<Vec<Conta>> {
    match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "
                SELECT modelo, serie, numero, fornecedor_id, parcela, tipo, data_vencimento,
                       valor_parcela, data_pagamento, valor_pago, forma_pagamento, juros, multa,
                       desconto
                FROM contas
                WHERE fornecedor_id = $1 AND tipo = $2
                ORDER BY data_vencimento, parcela";
            let rows = sqlx::query(query_str)
                .bind(fornecedor_id)
                .bind(tipo.as_db_str())
                .fetch_all(ex)
                .await
                .map_err(postgres::map_sqlx_error)?;
            rows.into_iter().map(Conta::try_from).collect()
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "
                SELECT modelo, serie, numero, fornecedor_id, parcela, tipo, data_vencimento,
                       valor_parcela, data_pagamento, valor_pago, forma_pagamento, juros, multa,
                       desconto
                FROM contas
                WHERE fornecedor_id = ? AND tipo = ?
                ORDER BY data_vencimento, parcela";
            let rows = sqlx::query(query_str)
                .bind(fornecedor_id)
                .bind(tipo.as_db_str())
                .fetch_all(ex)
                .await
                .map_err(sqlite::map_sqlx_error)?;
            rows.into_iter().map(Conta::try_from).collect()
        }

        #[allow(unused)]
        _ => unreachable!(),
    }
}

/// Creates or replaces the account installment described by `conta`.
pub(crate) async fn put_conta(ex: &mut Executor, conta: &Conta) -> DbResult<()> {
    let rows_affected = match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "
                INSERT INTO contas (modelo, serie, numero, fornecedor_id, parcela, tipo,
                                    data_vencimento, valor_parcela, data_pagamento, valor_pago,
                                    forma_pagamento, juros, multa, desconto)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
                ON CONFLICT (modelo, serie, numero, fornecedor_id, parcela) DO UPDATE SET
                    tipo = EXCLUDED.tipo,
                    data_vencimento = EXCLUDED.data_vencimento,
                    valor_parcela = EXCLUDED.valor_parcela,
                    data_pagamento = EXCLUDED.data_pagamento,
                    valor_pago = EXCLUDED.valor_pago,
                    forma_pagamento = EXCLUDED.forma_pagamento,
                    juros = EXCLUDED.juros,
                    multa = EXCLUDED.multa,
                    desconto = EXCLUDED.desconto";
            sqlx::query(query_str)
                .bind(conta.modelo())
                .bind(conta.serie())
                .bind(conta.numero())
                .bind(conta.fornecedor_id())
                .bind(conta.parcela())
                .bind(conta.tipo().as_db_str())
                .bind(conta.data_vencimento())
                .bind(conta.valor_parcela())
                .bind(conta.data_pagamento())
                .bind(conta.valor_pago())
                .bind(conta.forma_pagamento())
                .bind(conta.juros())
                .bind(conta.multa())
                .bind(conta.desconto())
                .execute(ex)
                .await
                .map_err(postgres::map_sqlx_error)?
                .rows_affected()
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "
                INSERT INTO contas (modelo, serie, numero, fornecedor_id, parcela, tipo,
                                    data_vencimento, valor_parcela, data_pagamento, valor_pago,
                                    forma_pagamento, juros, multa, desconto)
                VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
                ON CONFLICT (modelo, serie, numero, fornecedor_id, parcela) DO UPDATE SET
                    tipo = excluded.tipo,
                    data_vencimento = excluded.data_vencimento,
                    valor_parcela = excluded.valor_parcela,
                    data_pagamento = excluded.data_pagamento,
                    valor_pago = excluded.valor_pago,
                    forma_pagamento = excluded.forma_pagamento,
                    juros = excluded.juros,
                    multa = excluded.multa,
                    desconto = excluded.desconto";
            sqlx::query(query_str)
                .bind(conta.modelo())
                .bind(conta.serie())
                .bind(conta.numero())
                .bind(conta.fornecedor_id())
                .bind(conta.parcela())
                .bind(conta.tipo().as_db_str())
                .bind(unpack_date(*conta.data_vencimento()))
                .bind(unpack_decimal(conta.valor_parcela()))
                .bind(conta.data_pagamento().as_ref().map(|d| unpack_date(*d)))
                .bind(conta.valor_pago().as_ref().map(unpack_decimal))
                .bind(conta.forma_pagamento())
                .bind(unpack_decimal(conta.juros()))
                .bind(unpack_decimal(conta.multa()))
                .bind(unpack_decimal(conta.desconto()))
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
