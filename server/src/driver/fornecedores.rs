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

//! Operations on suppliers.

use crate::db;
use crate::driver::{Driver, map_db_error};
use crate::model::{FornecedorDetalhe, FornecedorSugestao, NovoFornecedor};
use retaguarda_core::db::DbError;
use retaguarda_core::driver::{DriverError, DriverResult};

impl Driver {
    /// Searches for suppliers whose legal name contains `termo`.
    pub(crate) async fn search_fornecedores(
        self,
        termo: &str,
    ) -> DriverResult<Vec<FornecedorSugestao>> {
        let termo = Driver::termo_valido(termo)?;
        db::search_fornecedores(&mut self.db.ex().await?, termo)
            .await
            .map_err(|e| map_db_error("busca de fornecedores", e))
    }

    /// Gets the supplier identified by `id` together with its city/state
    /// names and associated products.
    pub(crate) async fn get_fornecedor(self, id: i32) -> DriverResult<FornecedorDetalhe> {
        let mut ex = self.db.ex().await?;

        let fornecedor = match db::get_fornecedor(&mut ex, id).await {
            Err(DbError::NotFound) => {
                return Err(DriverError::NotFound("Fornecedor não encontrado".to_owned()));
            }
            result => result.map_err(|e| map_db_error("consulta de fornecedor", e))?,
        };
        let cidade = db::get_cidade(&mut ex, *fornecedor.cidade_id())
            .await
            .map_err(|e| map_db_error("consulta de fornecedor", e))?;
        let produtos = db::produtos_do_fornecedor(&mut ex, id)
            .await
            .map_err(|e| map_db_error("consulta de fornecedor", e))?;

        let (cidade, uf) = (cidade.estado().clone(), cidade.uf().clone());
        Ok(FornecedorDetalhe::new(fornecedor, cidade, uf, produtos))
    }

    /// Creates or replaces the supplier `id`, including its product
    /// association set.  Returns the stored read model and whether the
    /// supplier had to be created.
    pub(crate) async fn put_fornecedor(
        self,
        id: i32,
        dados: NovoFornecedor,
    ) -> DriverResult<(FornecedorDetalhe, bool)> {
        let mut tx = self.db.begin().await?;

        let existed = match db::get_fornecedor(tx.ex(), id).await {
            Ok(_) => true,
            Err(DbError::NotFound) => false,
            Err(e) => return Err(map_db_error("cadastro de fornecedor", e)),
        };
        match db::put_fornecedor(tx.ex(), id, &dados).await {
            Ok(()) => (),
            Err(DbError::NotFound) => {
                return Err(DriverError::InvalidInput("Cidade informada não cadastrada".to_owned()));
            }
            Err(e) => return Err(map_db_error("cadastro de fornecedor", e)),
        }

        db::delete_produtos_do_fornecedor(tx.ex(), id)
            .await
            .map_err(|e| map_db_error("cadastro de fornecedor", e))?;
        for produto_id in &dados.produtos {
            match db::add_produto_do_fornecedor(tx.ex(), id, *produto_id).await {
                Ok(()) => (),
                Err(DbError::NotFound) => {
                    return Err(DriverError::InvalidInput(format!(
                        "Produto {} não cadastrado",
                        produto_id
                    )));
                }
                Err(e) => return Err(map_db_error("cadastro de fornecedor", e)),
            }
        }

        let fornecedor = db::get_fornecedor(tx.ex(), id)
            .await
            .map_err(|e| map_db_error("cadastro de fornecedor", e))?;
        let cidade = db::get_cidade(tx.ex(), *fornecedor.cidade_id())
            .await
            .map_err(|e| map_db_error("cadastro de fornecedor", e))?;
        let produtos = db::produtos_do_fornecedor(tx.ex(), id)
            .await
            .map_err(|e| map_db_error("cadastro de fornecedor", e))?;
        tx.commit().await?;

        let (cidade, uf) = (cidade.estado().clone(), cidade.uf().clone());
        Ok((FornecedorDetalhe::new(fornecedor, cidade, uf, produtos), !existed))
    }

    /// Deletes the supplier `id` and its product associations.
    pub(crate) async fn delete_fornecedor(self, id: i32) -> DriverResult<()> {
        match db::delete_fornecedor(&mut self.db.ex().await?, id).await {
            Err(DbError::NotFound) => {
                Err(DriverError::NotFound("Fornecedor não encontrado".to_owned()))
            }
            result => result.map_err(|e| map_db_error("exclusão de fornecedor", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::testutils::*;
    use crate::model::{NovoProduto, ProdutoResumo};
    use retaguarda_core::model::{Cep, Cnpj};
    use rust_decimal::Decimal;

    /// Seeds the geography and products the supplier payloads point at.
    async fn insert_fixtures(context: &TestContext) {
        context.insert_estado(35, "São Paulo", "SP").await;
        context.insert_cidade(1, "Campinas", 35).await;
        for (id, descricao) in [(1, "Caneta"), (2, "Papel sulfite")] {
            let dados = NovoProduto {
                descricao: descricao.to_owned(),
                ncm: "96081000".to_owned(),
                unidade: "UN".to_owned(),
                preco_unitario: Decimal::new(100, 2),
                data_cadastro: None,
                aliquota_icms: Decimal::ZERO,
                aliquota_ipi: Decimal::ZERO,
                aliquota_pis: Decimal::ZERO,
                aliquota_cofins: Decimal::ZERO,
            };
            db::put_produto(&mut context.ex().await, &dados.into_produto(id).unwrap())
                .await
                .unwrap();
        }
    }

    /// Builds a supplier payload pointing at the fixture city.
    fn novo_fornecedor(produtos: Vec<i32>) -> NovoFornecedor {
        NovoFornecedor {
            razao_social: "Papelaria Central Ltda".to_owned(),
            cnpj: Cnpj::from("12345678000199"),
            inscricao_estadual: None,
            endereco: "Rua das Laranjeiras".to_owned(),
            numero: "100".to_owned(),
            bairro: "Centro".to_owned(),
            cep: Cep::from("01310100"),
            cidade_id: 1,
            telefone: None,
            email: Some("contato@papelaria.example".to_owned()),
            produtos,
        }
    }

    #[tokio::test]
    async fn test_put_and_get_fornecedor_composed() {
        let context = TestContext::setup().await;
        insert_fixtures(&context).await;

        let (detalhe, created) =
            context.driver().put_fornecedor(10, novo_fornecedor(vec![2, 1])).await.unwrap();
        assert!(created);
        assert_eq!("Campinas", detalhe.cidade());
        assert_eq!("SP", detalhe.uf());
        assert_eq!(
            &vec![
                ProdutoResumo::new(1, "Caneta".to_owned()),
                ProdutoResumo::new(2, "Papel sulfite".to_owned()),
            ],
            detalhe.produtos()
        );

        let lido = context.driver().get_fornecedor(10).await.unwrap();
        assert_eq!(detalhe, lido);
    }

    #[tokio::test]
    async fn test_put_fornecedor_replaces_associations() {
        let context = TestContext::setup().await;
        insert_fixtures(&context).await;

        context.driver().put_fornecedor(10, novo_fornecedor(vec![1, 2])).await.unwrap();
        let (detalhe, created) =
            context.driver().put_fornecedor(10, novo_fornecedor(vec![2])).await.unwrap();
        assert!(!created);
        assert_eq!(&vec![ProdutoResumo::new(2, "Papel sulfite".to_owned())], detalhe.produtos());
    }

    #[tokio::test]
    async fn test_put_fornecedor_unknown_produto_rolls_back() {
        let context = TestContext::setup().await;
        insert_fixtures(&context).await;

        assert_eq!(
            DriverError::InvalidInput("Produto 99 não cadastrado".to_owned()),
            context.driver().put_fornecedor(10, novo_fornecedor(vec![99])).await.unwrap_err()
        );

        // The aborted transaction must not leave the supplier behind.
        assert_eq!(
            DriverError::NotFound("Fornecedor não encontrado".to_owned()),
            context.driver().get_fornecedor(10).await.unwrap_err()
        );
    }

    #[tokio::test]
    async fn test_get_fornecedor_not_found() {
        let context = TestContext::setup().await;

        assert_eq!(
            DriverError::NotFound("Fornecedor não encontrado".to_owned()),
            context.driver().get_fornecedor(10).await.unwrap_err()
        );
    }
}
