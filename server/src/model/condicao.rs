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

//! The payment condition entity and its installments.

use derive_getters::Getters;
use derive_more::Constructor;
use retaguarda_core::model::{ModelError, ModelResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One installment of a payment condition.
#[derive(Clone, Constructor, Deserialize, Getters, Serialize)]
#[cfg_attr(test, derive(Debug, PartialEq))]
pub(crate) struct Parcela {
    /// Ordinal number of the installment, starting at 1.
    numero: i32,

    /// Code of the payment method used for this installment.
    forma_pagamento: String,

    /// Days between the issue date and this installment's due date.
    dias: i32,

    /// Share of the total amount assigned to this installment, as a
    /// percentage.
    percentual: Decimal,
}

/// A payment condition: penalty/discount rates plus an ordered set of
/// installments that splits the total amount.
#[derive(Getters, Serialize)]
#[cfg_attr(test, derive(Debug, Deserialize, PartialEq))]
pub(crate) struct CondicaoPagamento {
    /// Identifier of the payment condition.
    id: i32,

    /// Display description, e.g. `30/60/90 dias`.
    descricao: String,

    /// Monthly interest rate applied after the due date, as a percentage.
    juros: Decimal,

    /// One-time penalty rate applied after the due date, as a percentage.
    multa: Decimal,

    /// Discount rate applied when paying before the due date, as a
    /// percentage.
    desconto: Decimal,

    /// Installments, ordered by number.  Their percentages add up to 100.
    parcelas: Vec<Parcela>,
}

impl CondicaoPagamento {
    /// Creates a new payment condition, making sure there is at least one
    /// installment and that the installment percentages add up to exactly
    /// 100% of the total.  The installments are kept ordered by number.
    pub(crate) fn new(
        id: i32,
        descricao: String,
        juros: Decimal,
        multa: Decimal,
        desconto: Decimal,
        mut parcelas: Vec<Parcela>,
    ) -> ModelResult<Self> {
        if parcelas.is_empty() {
            return Err(ModelError(
                "Condição de pagamento deve ter ao menos uma parcela".to_owned(),
            ));
        }

        let total: Decimal = parcelas.iter().map(|p| p.percentual).sum();
        if total != Decimal::ONE_HUNDRED {
            return Err(ModelError(format!(
                "Percentuais das parcelas somam {}% mas devem somar 100%",
                total
            )));
        }

        parcelas.sort_by_key(|p| p.numero);

        Ok(Self { id, descricao, juros, multa, desconto, parcelas })
    }
}

/// Projection returned by the payment condition autocomplete search.
#[derive(Constructor, Serialize)]
#[cfg_attr(test, derive(Debug, Deserialize, PartialEq))]
pub(crate) struct CondicaoSugestao {
    /// Identifier of the payment condition.
    id: i32,

    /// Display description of the payment condition.
    descricao: String,
}

/// Payload to create or replace a payment condition.
#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug, Serialize))]
pub(crate) struct NovaCondicaoPagamento {
    /// Display description of the payment condition.
    pub(crate) descricao: String,

    /// Monthly interest rate applied after the due date, as a percentage.
    #[serde(default)]
    pub(crate) juros: Decimal,

    /// One-time penalty rate applied after the due date, as a percentage.
    #[serde(default)]
    pub(crate) multa: Decimal,

    /// Discount rate applied when paying before the due date, as a
    /// percentage.
    #[serde(default)]
    pub(crate) desconto: Decimal,

    /// Installments of the condition.  Their percentages must add up to 100.
    pub(crate) parcelas: Vec<Parcela>,
}

impl NovaCondicaoPagamento {
    /// Validates this payload against the payment condition invariants,
    /// yielding the stored representation it would produce for `id`.
    pub(crate) fn into_condicao(self, id: i32) -> ModelResult<CondicaoPagamento> {
        CondicaoPagamento::new(
            id,
            self.descricao,
            self.juros,
            self.multa,
            self.desconto,
            self.parcelas,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds an installment covering `percentual`% at `dias` days.
    fn parcela(numero: i32, dias: i32, percentual: Decimal) -> Parcela {
        Parcela::new(numero, "BOL".to_owned(), dias, percentual)
    }

    #[test]
    fn test_condicao_new_ok() {
        let condicao = CondicaoPagamento::new(
            1,
            "30/60 dias".to_owned(),
            Decimal::new(2, 0),
            Decimal::new(1, 0),
            Decimal::ZERO,
            vec![parcela(1, 30, Decimal::new(50, 0)), parcela(2, 60, Decimal::new(50, 0))],
        )
        .unwrap();
        assert_eq!(2, condicao.parcelas().len());
    }

    #[test]
    fn test_condicao_orders_parcelas() {
        let condicao = CondicaoPagamento::new(
            1,
            "60/30 dias".to_owned(),
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
            vec![parcela(2, 60, Decimal::new(40, 0)), parcela(1, 30, Decimal::new(60, 0))],
        )
        .unwrap();
        let numeros = condicao.parcelas().iter().map(|p| *p.numero()).collect::<Vec<i32>>();
        assert_eq!(vec![1, 2], numeros);
    }

    #[test]
    fn test_condicao_rejects_bad_sum() {
        let err = CondicaoPagamento::new(
            1,
            "quebrada".to_owned(),
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
            vec![parcela(1, 30, Decimal::new(50, 0)), parcela(2, 60, Decimal::new(499, 1))],
        )
        .unwrap_err();
        assert!(err.to_string().contains("devem somar 100%"));
    }

    #[test]
    fn test_condicao_rejects_empty() {
        assert!(
            CondicaoPagamento::new(
                1,
                "vazia".to_owned(),
                Decimal::ZERO,
                Decimal::ZERO,
                Decimal::ZERO,
                vec![],
            )
            .is_err()
        );
    }
}
