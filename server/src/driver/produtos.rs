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

//! Operations on products.

use crate::db;
use crate::driver::{Driver, map_db_error};
use crate::model::{NovoProduto, Produto, ProdutoSugestao};
use retaguarda_core::db::DbError;
use retaguarda_core::driver::{DriverError, DriverResult};

impl Driver {
    /// Searches for products whose description contains `termo`.
    pub(crate) async fn search_produtos(self, termo: &str) -> DriverResult<Vec<ProdutoSugestao>> {
        let termo = Driver::termo_valido(termo)?;
        db::search_produtos(&mut self.db.ex().await?, termo)
            .await
            .map_err(|e| map_db_error("busca de produtos", e))
    }

    /// Gets the product identified by `id`.
    pub(crate) async fn get_produto(self, id: i32) -> DriverResult<Produto> {
        match db::get_produto(&mut self.db.ex().await?, id).await {
            Err(DbError::NotFound) => {
                Err(DriverError::NotFound("Produto não encontrado".to_owned()))
            }
            result => result.map_err(|e| map_db_error("consulta de produto", e)),
        }
    }

    /// Creates or replaces the product `id`.  Returns the stored record and
    /// whether it had to be created.
    pub(crate) async fn put_produto(
        self,
        id: i32,
        dados: NovoProduto,
    ) -> DriverResult<(Produto, bool)> {
        let produto = dados.into_produto(id)?;

        let mut tx = self.db.begin().await?;
        let existed = match db::get_produto(tx.ex(), id).await {
            Ok(_) => true,
            Err(DbError::NotFound) => false,
            Err(e) => return Err(map_db_error("cadastro de produto", e)),
        };
        db::put_produto(tx.ex(), &produto)
            .await
            .map_err(|e| map_db_error("cadastro de produto", e))?;
        tx.commit().await?;

        Ok((produto, !existed))
    }

    /// Deletes the product `id`.
    pub(crate) async fn delete_produto(self, id: i32) -> DriverResult<()> {
        match db::delete_produto(&mut self.db.ex().await?, id).await {
            Err(DbError::NotFound) => {
                Err(DriverError::NotFound("Produto não encontrado".to_owned()))
            }
            result => result.map_err(|e| map_db_error("exclusão de produto", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::testutils::*;
    use rust_decimal::Decimal;

    /// Builds a minimal product payload.
    fn novo_produto(descricao: &str, preco_unitario: Decimal) -> NovoProduto {
        NovoProduto {
            descricao: descricao.to_owned(),
            ncm: "96081000".to_owned(),
            unidade: "UN".to_owned(),
            preco_unitario,
            data_cadastro: None,
            aliquota_icms: Decimal::ZERO,
            aliquota_ipi: Decimal::ZERO,
            aliquota_pis: Decimal::ZERO,
            aliquota_cofins: Decimal::ZERO,
        }
    }

    #[tokio::test]
    async fn test_put_and_get_produto() {
        let context = TestContext::setup().await;

        let (produto, created) = context
            .driver()
            .put_produto(1, novo_produto("Caneta", Decimal::new(250, 2)))
            .await
            .unwrap();
        assert!(created);
        assert_eq!("Caneta", produto.descricao());

        let lido = context.driver().get_produto(1).await.unwrap();
        assert_eq!(produto, lido);
    }

    #[tokio::test]
    async fn test_put_produto_replaces() {
        let context = TestContext::setup().await;

        context
            .driver()
            .put_produto(1, novo_produto("Caneta", Decimal::new(250, 2)))
            .await
            .unwrap();
        let (produto, created) = context
            .driver()
            .put_produto(1, novo_produto("Caneta azul", Decimal::new(300, 2)))
            .await
            .unwrap();
        assert!(!created);
        assert_eq!("Caneta azul", produto.descricao());
    }

    #[tokio::test]
    async fn test_put_produto_negative_price() {
        let context = TestContext::setup().await;

        match context
            .driver()
            .put_produto(1, novo_produto("Caneta", Decimal::new(-250, 2)))
            .await
            .unwrap_err()
        {
            DriverError::InvalidInput(message) => assert!(message.contains("negativo")),
            e => panic!("Unexpected error: {:?}", e),
        }

        assert_eq!(
            DriverError::NotFound("Produto não encontrado".to_owned()),
            context.driver().get_produto(1).await.unwrap_err()
        );
    }

    #[tokio::test]
    async fn test_search_produtos_blank_term() {
        let context = TestContext::setup().await;

        assert_eq!(
            DriverError::InvalidInput("Informe o termo de busca".to_owned()),
            context.driver().search_produtos("").await.unwrap_err()
        );
    }

    #[tokio::test]
    async fn test_delete_produto_not_found() {
        let context = TestContext::setup().await;

        assert_eq!(
            DriverError::NotFound("Produto não encontrado".to_owned()),
            context.driver().delete_produto(1).await.unwrap_err()
        );
    }
}
