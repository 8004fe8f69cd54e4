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

//! The product entity and its projections.

use derive_getters::Getters;
use derive_more::Constructor;
use retaguarda_core::model::{ModelError, ModelResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::Date;

/// A sellable product with its fiscal classification and tax rates.
#[derive(Getters, Serialize)]
#[cfg_attr(test, derive(Debug, Deserialize, PartialEq))]
pub(crate) struct Produto {
    /// Identifier of the product.
    id: i32,

    /// Display description of the product.
    descricao: String,

    /// Mercosur tax classification code (NCM).
    ncm: String,

    /// Unit of measure, e.g. `UN` or `KG`.
    unidade: String,

    /// Unit price.  Never negative.
    preco_unitario: Decimal,

    /// Date the product was registered, when known.
    data_cadastro: Option<Date>,

    /// ICMS tax rate as a percentage.
    aliquota_icms: Decimal,

    /// IPI tax rate as a percentage.
    aliquota_ipi: Decimal,

    /// PIS tax rate as a percentage.
    aliquota_pis: Decimal,

    /// COFINS tax rate as a percentage.
    aliquota_cofins: Decimal,
}

impl Produto {
    /// Creates a new product with zeroed tax rates and no registration date,
    /// making sure the unit price is not negative.
    pub(crate) fn new<S1, S2, S3>(
        id: i32,
        descricao: S1,
        ncm: S2,
        unidade: S3,
        preco_unitario: Decimal,
    ) -> ModelResult<Self>
    where
        S1: Into<String>,
        S2: Into<String>,
        S3: Into<String>,
    {
        if preco_unitario < Decimal::ZERO {
            return Err(ModelError(format!(
                "Preço unitário {} não pode ser negativo",
                preco_unitario
            )));
        }

        Ok(Self {
            id,
            descricao: descricao.into(),
            ncm: ncm.into(),
            unidade: unidade.into(),
            preco_unitario,
            data_cadastro: None,
            aliquota_icms: Decimal::ZERO,
            aliquota_ipi: Decimal::ZERO,
            aliquota_pis: Decimal::ZERO,
            aliquota_cofins: Decimal::ZERO,
        })
    }

    /// Sets the registration date of the product.
    pub(crate) fn with_data_cadastro(mut self, data_cadastro: Option<Date>) -> Self {
        self.data_cadastro = data_cadastro;
        self
    }

    /// Sets the tax rates of the product, making sure none is negative.
    pub(crate) fn with_aliquotas(
        mut self,
        icms: Decimal,
        ipi: Decimal,
        pis: Decimal,
        cofins: Decimal,
    ) -> ModelResult<Self> {
        for aliquota in [icms, ipi, pis, cofins] {
            if aliquota < Decimal::ZERO {
                return Err(ModelError(format!("Alíquota {} não pode ser negativa", aliquota)));
            }
        }
        self.aliquota_icms = icms;
        self.aliquota_ipi = ipi;
        self.aliquota_pis = pis;
        self.aliquota_cofins = cofins;
        Ok(self)
    }
}

/// Projection returned by the product autocomplete search.
#[derive(Constructor, Serialize)]
#[cfg_attr(test, derive(Debug, Deserialize, PartialEq))]
pub(crate) struct ProdutoSugestao {
    /// Identifier of the product.
    id: i32,

    /// Display description of the product.
    descricao: String,

    /// Unit of measure.
    unidade: String,
}

/// Minimal projection of a product used inside composed views.
#[derive(Constructor, Serialize)]
#[cfg_attr(test, derive(Debug, Deserialize, PartialEq))]
pub(crate) struct ProdutoResumo {
    /// Identifier of the product.
    id: i32,

    /// Display description of the product.
    descricao: String,
}

/// Payload to create or replace a product.
#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug, Serialize))]
pub(crate) struct NovoProduto {
    /// Display description of the product.
    pub(crate) descricao: String,

    /// Mercosur tax classification code (NCM).
    pub(crate) ncm: String,

    /// Unit of measure.
    pub(crate) unidade: String,

    /// Unit price.
    pub(crate) preco_unitario: Decimal,

    /// Date the product was registered.
    #[serde(default)]
    pub(crate) data_cadastro: Option<Date>,

    /// ICMS tax rate as a percentage.
    #[serde(default)]
    pub(crate) aliquota_icms: Decimal,

    /// IPI tax rate as a percentage.
    #[serde(default)]
    pub(crate) aliquota_ipi: Decimal,

    /// PIS tax rate as a percentage.
    #[serde(default)]
    pub(crate) aliquota_pis: Decimal,

    /// COFINS tax rate as a percentage.
    #[serde(default)]
    pub(crate) aliquota_cofins: Decimal,
}

impl NovoProduto {
    /// Validates this payload against the product invariants, yielding the
    /// stored representation it would produce for `id`.
    pub(crate) fn into_produto(self, id: i32) -> ModelResult<Produto> {
        Produto::new(id, self.descricao, self.ncm, self.unidade, self.preco_unitario)?
            .with_data_cadastro(self.data_cadastro)
            .with_aliquotas(
                self.aliquota_icms,
                self.aliquota_ipi,
                self.aliquota_pis,
                self.aliquota_cofins,
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_produto_new_ok() {
        let produto = Produto::new(1, "Caneta", "96081000", "UN", Decimal::new(250, 2)).unwrap();
        assert_eq!(Decimal::new(250, 2), *produto.preco_unitario());
        assert_eq!(Decimal::ZERO, *produto.aliquota_icms());
        assert_eq!(None, *produto.data_cadastro());
    }

    #[test]
    fn test_produto_negative_price() {
        match Produto::new(1, "Caneta", "96081000", "UN", Decimal::new(-1, 2)) {
            Err(ModelError(message)) => assert!(message.contains("negativo")),
            Ok(_) => panic!("Negative price must be rejected"),
        }
    }

    #[test]
    fn test_produto_negative_aliquota() {
        let produto = Produto::new(1, "Caneta", "96081000", "UN", Decimal::ZERO).unwrap();
        assert!(
            produto
                .with_aliquotas(Decimal::ZERO, Decimal::new(-5, 0), Decimal::ZERO, Decimal::ZERO)
                .is_err()
        );
    }
}
