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

//! Operations on payment conditions.

use crate::db;
use crate::driver::{Driver, map_db_error};
use crate::model::{CondicaoPagamento, CondicaoSugestao, NovaCondicaoPagamento};
use retaguarda_core::db::DbError;
use retaguarda_core::driver::{DriverError, DriverResult};

impl Driver {
    /// Searches for payment conditions whose description contains `termo`.
    pub(crate) async fn search_condicoes(self, termo: &str) -> DriverResult<Vec<CondicaoSugestao>> {
        let termo = Driver::termo_valido(termo)?;
        db::search_condicoes(&mut self.db.ex().await?, termo)
            .await
            .map_err(|e| map_db_error("busca de condições de pagamento", e))
    }

    /// Gets the payment condition identified by `id`, installments included.
    pub(crate) async fn get_condicao(self, id: i32) -> DriverResult<CondicaoPagamento> {
        match db::get_condicao(&mut self.db.ex().await?, id).await {
            Err(DbError::NotFound) => {
                Err(DriverError::NotFound("Condição de pagamento não encontrada".to_owned()))
            }
            result => result.map_err(|e| map_db_error("consulta de condição de pagamento", e)),
        }
    }

    /// Creates or replaces the payment condition `id`, replacing its whole
    /// installment set atomically.  Returns the stored record and whether it
    /// had to be created.
    pub(crate) async fn put_condicao(
        self,
        id: i32,
        dados: NovaCondicaoPagamento,
    ) -> DriverResult<(CondicaoPagamento, bool)> {
        let condicao = dados.into_condicao(id)?;

        let mut tx = self.db.begin().await?;
        let existed = match db::get_condicao(tx.ex(), id).await {
            Ok(_) => true,
            Err(DbError::NotFound) => false,
            Err(e) => return Err(map_db_error("cadastro de condição de pagamento", e)),
        };
        db::put_condicao(tx.ex(), &condicao)
            .await
            .map_err(|e| map_db_error("cadastro de condição de pagamento", e))?;
        db::delete_parcelas_da_condicao(tx.ex(), id)
            .await
            .map_err(|e| map_db_error("cadastro de condição de pagamento", e))?;
        for parcela in condicao.parcelas() {
            match db::add_parcela(tx.ex(), id, parcela).await {
                Ok(()) => (),
                Err(DbError::NotFound) => {
                    return Err(DriverError::InvalidInput(format!(
                        "Forma de pagamento '{}' não cadastrada",
                        parcela.forma_pagamento()
                    )));
                }
                Err(e) => return Err(map_db_error("cadastro de condição de pagamento", e)),
            }
        }
        tx.commit().await?;

        Ok((condicao, !existed))
    }
}
