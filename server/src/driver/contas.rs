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

//! Operations on payable and receivable accounts.

use crate::db;
use crate::driver::{Driver, map_db_error};
use crate::model::{Conta, SituacaoConta, TipoConta};
use retaguarda_core::driver::{DriverError, DriverResult};

impl Driver {
    /// Lists the account installments of `tipo` that belong to the party
    /// `fornecedor`, pairing each with its standing as of today.
    ///
    /// Both parameters are required; they arrive as options because the REST
    /// layer forwards them exactly as the caller sent them.
    pub(crate) async fn contas_do_fornecedor(
        self,
        fornecedor: Option<i32>,
        tipo: Option<TipoConta>,
    ) -> DriverResult<Vec<(Conta, SituacaoConta)>> {
        let fornecedor = fornecedor
            .ok_or_else(|| DriverError::InvalidInput("Informe o fornecedor".to_owned()))?;
        let tipo = tipo.ok_or_else(|| {
            DriverError::InvalidInput("Informe o tipo da conta (pagar ou receber)".to_owned())
        })?;

        let contas = db::contas_do_fornecedor(&mut self.db.ex().await?, fornecedor, tipo)
            .await
            .map_err(|e| map_db_error("consulta de contas", e))?;

        let hoje = self.clock.today_utc();
        Ok(contas
            .into_iter()
            .map(|conta| {
                let situacao = conta.situacao(hoje);
                (conta, situacao)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::testutils::*;
    use crate::model::NovoFornecedor;
    use retaguarda_core::model::{Cep, Cnpj};
    use rust_decimal::Decimal;
    use time::macros::{date, datetime};

    /// Seeds a supplier and one open installment due on 2026-08-10.
    async fn insert_fixtures(context: &TestContext) {
        context.insert_estado(35, "São Paulo", "SP").await;
        context.insert_cidade(1, "Campinas", 35).await;
        context.insert_forma_pagamento("BOL", "Boleto bancário").await;

        let dados = NovoFornecedor {
            razao_social: "Fornecedor Central".to_owned(),
            cnpj: Cnpj::from("12345678000199"),
            inscricao_estadual: None,
            endereco: "Rua das Laranjeiras".to_owned(),
            numero: "100".to_owned(),
            bairro: "Centro".to_owned(),
            cep: Cep::from("01310100"),
            cidade_id: 1,
            telefone: None,
            email: None,
            produtos: vec![],
        };
        db::put_fornecedor(&mut context.ex().await, 10, &dados).await.unwrap();

        let conta = Conta::new(
            55,
            1,
            1234,
            10,
            1,
            TipoConta::Pagar,
            date!(2026 - 08 - 10),
            Decimal::new(50000, 2),
            None,
            None,
            "BOL".to_owned(),
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
        );
        db::put_conta(&mut context.ex().await, &conta).await.unwrap();
    }

    #[tokio::test]
    async fn test_contas_situacao_follows_clock() {
        let context = TestContext::setup().await;
        insert_fixtures(&context).await;

        let contas =
            context.driver().contas_do_fornecedor(Some(10), Some(TipoConta::Pagar)).await.unwrap();
        assert_eq!(1, contas.len());
        assert_eq!(SituacaoConta::Aberta, contas[0].1);

        // Move past the due date and the same row reads as overdue.
        context.clock().set(datetime!(2026-08-11 00:00:00 UTC));
        let contas =
            context.driver().contas_do_fornecedor(Some(10), Some(TipoConta::Pagar)).await.unwrap();
        assert_eq!(SituacaoConta::Vencida, contas[0].1);
    }

    #[tokio::test]
    async fn test_contas_filter_by_tipo() {
        let context = TestContext::setup().await;
        insert_fixtures(&context).await;

        let contas = context
            .driver()
            .contas_do_fornecedor(Some(10), Some(TipoConta::Receber))
            .await
            .unwrap();
        assert!(contas.is_empty());
    }

    #[tokio::test]
    async fn test_contas_missing_parameters() {
        let context = TestContext::setup().await;

        assert_eq!(
            DriverError::InvalidInput("Informe o fornecedor".to_owned()),
            context
                .driver()
                .contas_do_fornecedor(None, Some(TipoConta::Pagar))
                .await
                .unwrap_err()
        );
        assert_eq!(
            DriverError::InvalidInput("Informe o tipo da conta (pagar ou receber)".to_owned()),
            context.driver().contas_do_fornecedor(Some(10), None).await.unwrap_err()
        );
    }
}
