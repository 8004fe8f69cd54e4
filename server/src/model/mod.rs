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

//! High-level data types for the back-office domain.
//!
//! Entities use private fields with getters; values that carry invariants
//! (prices, installment percentages, fiscal documents) are validated at
//! construction time.  The `Novo*`/`Nova*` types are the create/replace
//! payloads accepted by the REST layer and intentionally expose their fields.

mod condicao;
mod conta;
mod fornecedor;
mod geo;
mod produto;
mod transportadora;

pub(crate) use condicao::{CondicaoPagamento, CondicaoSugestao, NovaCondicaoPagamento, Parcela};
pub(crate) use conta::{Conta, SituacaoConta, TipoConta};
pub(crate) use fornecedor::{
    Fornecedor, FornecedorDetalhe, FornecedorResumo, FornecedorSugestao, NovoFornecedor,
};
pub(crate) use geo::{Cidade, CidadeSugestao, Estado, NovaCidade, Pais};
pub(crate) use produto::{NovoProduto, Produto, ProdutoResumo, ProdutoSugestao};
pub(crate) use transportadora::{
    Transportadora, TransportadoraDetalhe, TransportadoraSugestao, Veiculo,
};
