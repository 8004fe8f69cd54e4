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

//! Operations on carriers.

use crate::db;
use crate::driver::{Driver, map_db_error};
use crate::model::{TransportadoraDetalhe, TransportadoraSugestao};
use retaguarda_core::db::DbError;
use retaguarda_core::driver::{DriverError, DriverResult};

impl Driver {
    /// Searches for carriers whose legal name contains `termo`.
    pub(crate) async fn search_transportadoras(
        self,
        termo: &str,
    ) -> DriverResult<Vec<TransportadoraSugestao>> {
        let termo = Driver::termo_valido(termo)?;
        db::search_transportadoras(&mut self.db.ex().await?, termo)
            .await
            .map_err(|e| map_db_error("busca de transportadoras", e))
    }

    /// Gets the carrier identified by `id` together with its city/state
    /// names, associated suppliers and vehicle fleet.
    pub(crate) async fn get_transportadora(self, id: i32) -> DriverResult<TransportadoraDetalhe> {
        let mut ex = self.db.ex().await?;

        let transportadora = match db::get_transportadora(&mut ex, id).await {
            Err(DbError::NotFound) => {
                return Err(DriverError::NotFound("Transportadora não encontrada".to_owned()));
            }
            result => result.map_err(|e| map_db_error("consulta de transportadora", e))?,
        };
        let cidade = db::get_cidade(&mut ex, *transportadora.cidade_id())
            .await
            .map_err(|e| map_db_error("consulta de transportadora", e))?;
        let fornecedores = db::fornecedores_da_transportadora(&mut ex, id)
            .await
            .map_err(|e| map_db_error("consulta de transportadora", e))?;
        let veiculos = db::veiculos_da_transportadora(&mut ex, id)
            .await
            .map_err(|e| map_db_error("consulta de transportadora", e))?;

        let (cidade, uf) = (cidade.estado().clone(), cidade.uf().clone());
        Ok(TransportadoraDetalhe::new(transportadora, cidade, uf, fornecedores, veiculos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::testutils::*;
    use crate::model::{FornecedorResumo, NovoFornecedor, Transportadora, Veiculo};
    use retaguarda_core::model::{Cep, Cnpj};

    /// Seeds a carrier with one supplier association and two vehicles.
    async fn insert_fixtures(context: &TestContext) {
        context.insert_estado(41, "Paraná", "PR").await;
        context.insert_cidade(1, "Curitiba", 41).await;

        let dados = NovoFornecedor {
            razao_social: "Fornecedor Sul".to_owned(),
            cnpj: Cnpj::from("12345678000199"),
            inscricao_estadual: None,
            endereco: "Rua XV de Novembro".to_owned(),
            numero: "1500".to_owned(),
            bairro: "Centro".to_owned(),
            cep: Cep::from("80020310"),
            cidade_id: 1,
            telefone: None,
            email: None,
            produtos: vec![],
        };
        db::put_fornecedor(&mut context.ex().await, 10, &dados).await.unwrap();

        let transportadora = Transportadora::new(
            7,
            "Transportes Rápidos SA".to_owned(),
            Cnpj::from("98765432000110"),
            "Rodovia BR-116, km 10".to_owned(),
            1,
        );
        db::put_transportadora(&mut context.ex().await, &transportadora).await.unwrap();
        db::add_fornecedor_da_transportadora(&mut context.ex().await, 7, 10).await.unwrap();
        db::put_veiculo(&mut context.ex().await, 7, "BCD2E34").await.unwrap();
        db::put_veiculo(&mut context.ex().await, 7, "ABC1D23").await.unwrap();
    }

    #[tokio::test]
    async fn test_get_transportadora_composed() {
        let context = TestContext::setup().await;
        insert_fixtures(&context).await;

        let detalhe = context.driver().get_transportadora(7).await.unwrap();
        assert_eq!("Curitiba", detalhe.cidade());
        assert_eq!("PR", detalhe.uf());
        assert_eq!(&vec![FornecedorResumo::new(10, "Fornecedor Sul".to_owned())],
            detalhe.fornecedores());
        assert_eq!(
            &vec![Veiculo::new("ABC1D23".to_owned()), Veiculo::new("BCD2E34".to_owned())],
            detalhe.veiculos()
        );
    }

    #[tokio::test]
    async fn test_get_transportadora_not_found() {
        let context = TestContext::setup().await;

        assert_eq!(
            DriverError::NotFound("Transportadora não encontrada".to_owned()),
            context.driver().get_transportadora(7).await.unwrap_err()
        );
    }

    #[tokio::test]
    async fn test_search_transportadoras_ok() {
        let context = TestContext::setup().await;
        insert_fixtures(&context).await;

        let sugestoes = context.driver().search_transportadoras("transportes").await.unwrap();
        assert_eq!(
            vec![TransportadoraSugestao::new(
                7,
                "Transportes Rápidos SA".to_owned(),
                "Curitiba".to_owned()
            )],
            sugestoes
        );
    }
}
