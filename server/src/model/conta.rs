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

//! Payable and receivable account installments.

use derive_getters::Getters;
use derive_more::Constructor;
use retaguarda_core::model::{ModelError, ModelResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::Date;

/// Distinguishes accounts payable from accounts receivable.
#[derive(Clone, Copy, Deserialize, Eq, PartialEq, Serialize)]
#[cfg_attr(test, derive(Debug))]
#[serde(rename_all = "lowercase")]
pub(crate) enum TipoConta {
    /// An amount the company owes to the party.
    Pagar,

    /// An amount the party owes to the company.
    Receber,
}

impl TipoConta {
    /// Returns the single-letter code stored in the database.
    pub(crate) fn as_db_str(&self) -> &'static str {
        match self {
            TipoConta::Pagar => "P",
            TipoConta::Receber => "R",
        }
    }

    /// Parses the single-letter code stored in the database.
    pub(crate) fn from_db_str(raw: &str) -> ModelResult<Self> {
        match raw {
            "P" => Ok(TipoConta::Pagar),
            "R" => Ok(TipoConta::Receber),
            raw => Err(ModelError(format!("Tipo de conta '{}' desconhecido", raw))),
        }
    }
}

/// Standing of an account installment relative to a reference date.
#[derive(Clone, Copy, Eq, PartialEq, Serialize)]
#[cfg_attr(test, derive(Debug, Deserialize))]
#[serde(rename_all = "lowercase")]
pub(crate) enum SituacaoConta {
    /// Not yet paid and not yet due.
    Aberta,

    /// Not yet paid and past its due date.
    Vencida,

    /// Fully settled.
    Quitada,
}

/// One installment of a payable or receivable account.
///
/// Installments are identified by the composite key (modelo, serie, numero,
/// fornecedor_id, parcela), mirroring the fiscal document they come from.
#[derive(Constructor, Getters, Serialize)]
#[cfg_attr(test, derive(Debug, Deserialize, PartialEq))]
pub(crate) struct Conta {
    /// Fiscal document model code.
    modelo: i32,

    /// Fiscal document series.
    serie: i32,

    /// Fiscal document number.
    numero: i32,

    /// Identifier of the party the account belongs to.
    fornecedor_id: i32,

    /// Ordinal number of this installment within the document.
    parcela: i32,

    /// Whether this is payable or receivable.
    tipo: TipoConta,

    /// Date this installment falls due.
    data_vencimento: Date,

    /// Amount of this installment.
    valor_parcela: Decimal,

    /// Date this installment was settled, if it was.
    data_pagamento: Option<Date>,

    /// Amount effectively paid, if settled.
    valor_pago: Option<Decimal>,

    /// Code of the payment method.
    forma_pagamento: String,

    /// Interest accrued on this installment.
    juros: Decimal,

    /// Penalty applied to this installment.
    multa: Decimal,

    /// Discount granted on this installment.
    desconto: Decimal,
}

impl Conta {
    /// Computes the standing of this installment as of `hoje`.
    pub(crate) fn situacao(&self, hoje: Date) -> SituacaoConta {
        if self.data_pagamento.is_some() {
            SituacaoConta::Quitada
        } else if self.data_vencimento < hoje {
            SituacaoConta::Vencida
        } else {
            SituacaoConta::Aberta
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    /// Builds an open installment due on `data_vencimento`.
    fn conta_aberta(data_vencimento: Date) -> Conta {
        Conta::new(
            55,
            1,
            1234,
            1,
            1,
            TipoConta::Pagar,
            data_vencimento,
            Decimal::new(10000, 2),
            None,
            None,
            "BOL".to_owned(),
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
        )
    }

    #[test]
    fn test_tipo_conta_db_roundtrip() {
        assert_eq!(TipoConta::Pagar, TipoConta::from_db_str("P").unwrap());
        assert_eq!(TipoConta::Receber, TipoConta::from_db_str("R").unwrap());
        assert_eq!("P", TipoConta::Pagar.as_db_str());
        assert_eq!("R", TipoConta::Receber.as_db_str());
        assert!(TipoConta::from_db_str("X").is_err());
    }

    #[test]
    fn test_situacao_aberta_until_due_date() {
        let conta = conta_aberta(date!(2026 - 08 - 10));
        assert_eq!(SituacaoConta::Aberta, conta.situacao(date!(2026 - 08 - 05)));
        assert_eq!(SituacaoConta::Aberta, conta.situacao(date!(2026 - 08 - 10)));
    }

    #[test]
    fn test_situacao_vencida_after_due_date() {
        let conta = conta_aberta(date!(2026 - 08 - 10));
        assert_eq!(SituacaoConta::Vencida, conta.situacao(date!(2026 - 08 - 11)));
    }

    #[test]
    fn test_situacao_quitada_takes_precedence() {
        let mut conta = conta_aberta(date!(2026 - 08 - 10));
        conta.data_pagamento = Some(date!(2026 - 08 - 20));
        conta.valor_pago = Some(Decimal::new(10000, 2));
        assert_eq!(SituacaoConta::Quitada, conta.situacao(date!(2026 - 09 - 01)));
    }
}
