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

//! Data-access operations for fornecedores and their product associations.

use crate::db::MAX_SUGESTOES;
use crate::model::{Fornecedor, FornecedorSugestao, NovoFornecedor, ProdutoResumo};
#[cfg(feature = "postgres")]
use retaguarda_core::db::postgres;
#[cfg(any(feature = "sqlite", test))]
use retaguarda_core::db::sqlite;
use retaguarda_core::db::{DbError, DbResult, Executor};
use retaguarda_core::model::{Cep, Cnpj, InscricaoEstadual};
use sqlx::Row;
#[cfg(feature = "postgres")]
use sqlx::postgres::PgRow;
#[cfg(any(feature = "sqlite", test))]
use sqlx::sqlite::SqliteRow;

#[cfg(feature = "postgres")]
impl TryFrom<PgRow> for Fornecedor {
    type Error = DbError;

    fn try_from(row: PgRow) -> DbResult<Self> {
        let id: i32 = row.try_get("id").map_err(postgres::map_sqlx_error)?;
        let razao_social: String = row.try_get("razao_social").map_err(postgres::map_sqlx_error)?;
        let cnpj: String = row.try_get("cnpj").map_err(postgres::map_sqlx_error)?;
        let inscricao_estadual: Option<String> =
            row.try_get("inscricao_estadual").map_err(postgres::map_sqlx_error)?;
        let endereco: String = row.try_get("endereco").map_err(postgres::map_sqlx_error)?;
        let numero: String = row.try_get("numero").map_err(postgres::map_sqlx_error)?;
        let bairro: String = row.try_get("bairro").map_err(postgres::map_sqlx_error)?;
        let cep: String = row.try_get("cep").map_err(postgres::map_sqlx_error)?;
        let cidade_id: i32 = row.try_get("cidade_id").map_err(postgres::map_sqlx_error)?;
        let telefone: Option<String> = row.try_get("telefone").map_err(postgres::map_sqlx_error)?;
        let email: Option<String> = row.try_get("email").map_err(postgres::map_sqlx_error)?;

        let inscricao_estadual = match inscricao_estadual {
            Some(raw) => Some(InscricaoEstadual::new(raw)?),
            None => None,
        };

        Ok(Fornecedor::new(
            id,
            razao_social,
            Cnpj::new(cnpj)?,
            inscricao_estadual,
            endereco,
            numero,
            bairro,
            Cep::new(cep)?,
            cidade_id,
            telefone,
            email,
        ))
    }
}

#[cfg(any(feature = "sqlite", test))]
impl TryFrom<SqliteRow> for Fornecedor {
    type Error = DbError;

    fn try_from(row: SqliteRow) -> DbResult<Self> {
        let id: i32 = row.try_get("id").map_err(sqlite::map_sqlx_error)?;
        let razao_social: String = row.try_get("razao_social").map_err(sqlite::map_sqlx_error)?;
        let cnpj: String = row.try_get("cnpj").map_err(sqlite::map_sqlx_error)?;
        let inscricao_estadual: Option<String> =
            row.try_get("inscricao_estadual").map_err(sqlite::map_sqlx_error)?;
        let endereco: String = row.try_get("endereco").map_err(sqlite::map_sqlx_error)?;
        let numero: String = row.try_get("numero").map_err(sqlite::map_sqlx_error)?;
        let bairro: String = row.try_get("bairro").map_err(sqlite::map_sqlx_error)?;
        let cep: String = row.try_get("cep").map_err(sqlite::map_sqlx_error)?;
        let cidade_id: i32 = row.try_get("cidade_id").map_err(sqlite::map_sqlx_error)?;
        let telefone: Option<String> = row.try_get("telefone").map_err(sqlite::map_sqlx_error)?;
        let email: Option<String> = row.try_get("email").map_err(sqlite::map_sqlx_error)?;

        let inscricao_estadual = match inscricao_estadual {
            Some(raw) => Some(InscricaoEstadual::new(raw)?),
            None => None,
        };

        Ok(Fornecedor::new(
            id,
            razao_social,
            Cnpj::new(cnpj)?,
            inscricao_estadual,
            endereco,
            numero,
            bairro,
            Cep::new(cep)?,
            cidade_id,
            telefone,
            email,
        ))
    }
}

#[cfg(feature = "postgres")]
impl TryFrom<PgRow> for FornecedorSugestao {
    type Error = DbError;

    fn try_from(row: PgRow) -> DbResult<Self> {
        let id: i32 = row.try_get("id").map_err(postgres::map_sqlx_error)?;
        let razao_social: String = row.try_get("razao_social").map_err(postgres::map_sqlx_error)?;
        let cidade: String = row.try_get("cidade").map_err(postgres::map_sqlx_error)?;

        Ok(FornecedorSugestao::new(id, razao_social, cidade))
    }
}

#[cfg(any(feature = "sqlite", test))]
impl TryFrom<SqliteRow> for FornecedorSugestao {
    type Error = DbError;

    fn try_from(row: SqliteRow) -> DbResult<Self> {
        let id: i32 = row.try_get("id").map_err(sqlite::map_sqlx_error)?;
        let razao_social: String = row.try_get("razao_social").map_err(sqlite::map_sqlx_error)?;
        let cidade: String = row.try_get("cidade").map_err(sqlite::map_sqlx_error)?;

        Ok(FornecedorSugestao::new(id, razao_social, cidade))
    }
}

/// Searches for suppliers whose legal name contains `termo`, annotated with
/// the name of their city.
pub(crate) async fn search_fornecedores(
    ex: &mut Executor,
    termo: &str,
) -> DbResult<Vec<FornecedorSugestao>> {
    match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "
                SELECT f.id, f.razao_social, c.nome AS cidade
                FROM fornecedores f JOIN cidades c ON c.id = f.cidade_id
                WHERE f.razao_social ILIKE '%' || $1 || '%'
                ORDER BY f.razao_social
                LIMIT $2";
            let rows = sqlx::query(query_str)
                .bind(termo)
                .bind(MAX_SUGESTOES)
                .fetch_all(ex)
                .await
                .map_err(postgres::map_sqlx_error)?;
            rows.into_iter().map(FornecedorSugestao::try_from).collect()
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "
                SELECT f.id, f.razao_social, c.nome AS cidade
                FROM fornecedores f JOIN cidades c ON c.id = f.cidade_id
                WHERE f.razao_social LIKE '%' || ? || '%'
                ORDER BY f.razao_social
                LIMIT ?";
            let rows = sqlx::query(query_str)
                .bind(termo)
                .bind(MAX_SUGESTOES)
                .fetch_all(ex)
                .await
                .map_err(sqlite::map_sqlx_error)?;
            rows.into_iter().map(FornecedorSugestao::try_from).collect()
        }

        #[allow(unused)]
        _ => unreachable!(),
    }
}

/// Gets the supplier identified by `id`.
pub(crate) async fn get_fornecedor(ex: &mut Executor, id: i32) -> DbResult<Fornecedor> {
    match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "
                SELECT id, razao_social, cnpj, inscricao_estadual, endereco, numero, bairro,
                       cep, cidade_id, telefone, email
                FROM fornecedores
                WHERE id = $1";
            let row = sqlx::query(query_str)
                .bind(id)
                .fetch_one(ex)
                .await
                .map_err(postgres::map_sqlx_error)?;
            Fornecedor::try_from(row)
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "
                SELECT id, razao_social, cnpj, inscricao_estadual, endereco, numero, bairro,
                       cep, cidade_id, telefone, email
                FROM fornecedores
                WHERE id = ?";
            let row =
                sqlx::query(query_str).bind(id).fetch_one(ex).await.map_err(sqlite::map_sqlx_error)?;
            Fornecedor::try_from(row)
        }

        #[allow(unused)]
        _ => unreachable!(),
    }
}

/// Creates or replaces the supplier `id` with the data in `dados`.
pub(crate) async fn put_fornecedor(
    ex: &mut Executor,
    id: i32,
    dados: &NovoFornecedor,
) -> DbResult<()> {
    let rows_affected = match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "
                INSERT INTO fornecedores (id, razao_social, cnpj, inscricao_estadual, endereco,
                                          numero, bairro, cep, cidade_id, telefone, email)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
                ON CONFLICT (id) DO UPDATE SET
                    razao_social = EXCLUDED.razao_social,
                    cnpj = EXCLUDED.cnpj,
                    inscricao_estadual = EXCLUDED.inscricao_estadual,
                    endereco = EXCLUDED.endereco,
                    numero = EXCLUDED.numero,
                    bairro = EXCLUDED.bairro,
                    cep = EXCLUDED.cep,
                    cidade_id = EXCLUDED.cidade_id,
                    telefone = EXCLUDED.telefone,
                    email = EXCLUDED.email";
            sqlx::query(query_str)
                .bind(id)
                .bind(&dados.razao_social)
                .bind(dados.cnpj.as_str())
                .bind(dados.inscricao_estadual.as_ref().map(|i| i.as_str()))
                .bind(&dados.endereco)
                .bind(&dados.numero)
                .bind(&dados.bairro)
                .bind(dados.cep.as_str())
                .bind(dados.cidade_id)
                .bind(&dados.telefone)
                .bind(&dados.email)
                .execute(ex)
                .await
                .map_err(postgres::map_sqlx_error)?
                .rows_affected()
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "
                INSERT INTO fornecedores (id, razao_social, cnpj, inscricao_estadual, endereco,
                                          numero, bairro, cep, cidade_id, telefone, email)
                VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
                ON CONFLICT (id) DO UPDATE SET
                    razao_social = excluded.razao_social,
                    cnpj = excluded.cnpj,
                    inscricao_estadual = excluded.inscricao_estadual,
                    endereco = excluded.endereco,
                    numero = excluded.numero,
                    bairro = excluded.bairro,
                    cep = excluded.cep,
                    cidade_id = excluded.cidade_id,
                    telefone = excluded.telefone,
                    email = excluded.email";
            sqlx::query(query_str)
                .bind(id)
                .bind(&dados.razao_social)
                .bind(dados.cnpj.as_str())
                .bind(dados.inscricao_estadual.as_ref().map(|i| i.as_str()))
                .bind(&dados.endereco)
                .bind(&dados.numero)
                .bind(&dados.bairro)
                .bind(dados.cep.as_str())
                .bind(dados.cidade_id)
                .bind(&dados.telefone)
                .bind(&dados.email)
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

/// Deletes the supplier `id`.
pub(crate) async fn delete_fornecedor(ex: &mut Executor, id: i32) -> DbResult<()> {
    let rows_affected = match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "DELETE FROM fornecedores WHERE id = $1";
            sqlx::query(query_str)
                .bind(id)
                .execute(ex)
                .await
                .map_err(postgres::map_sqlx_error)?
                .rows_affected()
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "DELETE FROM fornecedores WHERE id = ?";
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

/// Lists the products associated with the supplier `id`, ordered by
/// description.
pub(crate) async fn produtos_do_fornecedor(
    ex: &mut Executor,
    id: i32,
) -> DbResult<Vec<ProdutoResumo>> {
    let rows = match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "
                SELECT p.id, p.descricao
                FROM produtos p JOIN produto_fornecedores pf ON pf.produto_id = p.id
                WHERE pf.fornecedor_id = $1
                ORDER BY p.descricao";
            sqlx::query(query_str)
                .bind(id)
                .fetch_all(ex)
                .await
                .map_err(postgres::map_sqlx_error)?
                .into_iter()
                .map(|row| {
                    let id: i32 = row.try_get("id").map_err(postgres::map_sqlx_error)?;
                    let descricao: String =
                        row.try_get("descricao").map_err(postgres::map_sqlx_error)?;
                    Ok(ProdutoResumo::new(id, descricao))
                })
                .collect::<DbResult<Vec<ProdutoResumo>>>()?
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "
                SELECT p.id, p.descricao
                FROM produtos p JOIN produto_fornecedores pf ON pf.produto_id = p.id
                WHERE pf.fornecedor_id = ?
                ORDER BY p.descricao";
            sqlx::query(query_str)
                .bind(id)
                .fetch_all(ex)
                .await
                .map_err(sqlite::map_sqlx_error)?
                .into_iter()
                .map(|row| {
                    let id: i32 = row.try_get("id").map_err(sqlite::map_sqlx_error)?;
                    let descricao: String =
                        row.try_get("descricao").map_err(sqlite::map_sqlx_error)?;
                    Ok(ProdutoResumo::new(id, descricao))
                })
                .collect::<DbResult<Vec<ProdutoResumo>>>()?
        }

        #[allow(unused)]
        _ => unreachable!(),
    };
    Ok(rows)
}

/// Removes every product association of the supplier `id`.
pub(crate) async fn delete_produtos_do_fornecedor(ex: &mut Executor, id: i32) -> DbResult<()> {
    match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "DELETE FROM produto_fornecedores WHERE fornecedor_id = $1";
            sqlx::query(query_str)
                .bind(id)
                .execute(ex)
                .await
                .map_err(postgres::map_sqlx_error)?;
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "DELETE FROM produto_fornecedores WHERE fornecedor_id = ?";
            sqlx::query(query_str).bind(id).execute(ex).await.map_err(sqlite::map_sqlx_error)?;
        }

        #[allow(unused)]
        _ => unreachable!(),
    }
    Ok(())
}

/// Associates the product `produto_id` with the supplier `fornecedor_id`.
pub(crate) async fn add_produto_do_fornecedor(
    ex: &mut Executor,
    fornecedor_id: i32,
    produto_id: i32,
) -> DbResult<()> {
    let rows_affected = match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "
                INSERT INTO produto_fornecedores (produto_id, fornecedor_id) VALUES ($1, $2)";
            sqlx::query(query_str)
                .bind(produto_id)
                .bind(fornecedor_id)
                .execute(ex)
                .await
                .map_err(postgres::map_sqlx_error)?
                .rows_affected()
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "
                INSERT INTO produto_fornecedores (produto_id, fornecedor_id) VALUES (?, ?)";
            sqlx::query(query_str)
                .bind(produto_id)
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
