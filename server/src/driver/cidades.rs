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

//! Operations on cities.

use crate::db;
use crate::driver::{Driver, map_db_error};
use crate::model::{Cidade, CidadeSugestao, NovaCidade};
use retaguarda_core::db::DbError;
use retaguarda_core::driver::{DriverError, DriverResult};

impl Driver {
    /// Searches for cities whose name contains `termo`.
    pub(crate) async fn search_cidades(self, termo: &str) -> DriverResult<Vec<CidadeSugestao>> {
        let termo = Driver::termo_valido(termo)?;
        db::search_cidades(&mut self.db.ex().await?, termo)
            .await
            .map_err(|e| map_db_error("busca de cidades", e))
    }

    /// Gets the city identified by `id`.
    pub(crate) async fn get_cidade(self, id: i32) -> DriverResult<Cidade> {
        match db::get_cidade(&mut self.db.ex().await?, id).await {
            Err(DbError::NotFound) => {
                Err(DriverError::NotFound("Cidade não encontrada".to_owned()))
            }
            result => result.map_err(|e| map_db_error("consulta de cidade", e)),
        }
    }

    /// Creates or replaces the city `id`.  Returns the stored record and
    /// whether it had to be created.
    pub(crate) async fn put_cidade(
        self,
        id: i32,
        dados: NovaCidade,
    ) -> DriverResult<(Cidade, bool)> {
        let mut tx = self.db.begin().await?;

        let existed = match db::get_cidade(tx.ex(), id).await {
            Ok(_) => true,
            Err(DbError::NotFound) => false,
            Err(e) => return Err(map_db_error("cadastro de cidade", e)),
        };
        match db::put_cidade(tx.ex(), id, &dados).await {
            Ok(()) => (),
            Err(DbError::NotFound) => {
                return Err(DriverError::InvalidInput("Estado informado não cadastrado".to_owned()));
            }
            Err(e) => return Err(map_db_error("cadastro de cidade", e)),
        }
        let cidade =
            db::get_cidade(tx.ex(), id).await.map_err(|e| map_db_error("cadastro de cidade", e))?;

        tx.commit().await?;
        Ok((cidade, !existed))
    }

    /// Deletes the city `id`.
    pub(crate) async fn delete_cidade(self, id: i32) -> DriverResult<()> {
        match db::delete_cidade(&mut self.db.ex().await?, id).await {
            Err(DbError::NotFound) => {
                Err(DriverError::NotFound("Cidade não encontrada".to_owned()))
            }
            result => result.map_err(|e| map_db_error("exclusão de cidade", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::testutils::*;

    #[tokio::test]
    async fn test_search_cidades_ok() {
        let context = TestContext::setup().await;
        context.insert_estado(35, "São Paulo", "SP").await;
        context.insert_cidade(1, "Santos", 35).await;
        context.insert_cidade(2, "Santo André", 35).await;
        context.insert_cidade(3, "Campinas", 35).await;

        let sugestoes = context.driver().search_cidades("sant").await.unwrap();
        assert_eq!(
            vec![
                CidadeSugestao::new(2, "Santo André".to_owned(), "SP".to_owned()),
                CidadeSugestao::new(1, "Santos".to_owned(), "SP".to_owned()),
            ],
            sugestoes
        );
    }

    #[tokio::test]
    async fn test_search_cidades_blank_term() {
        let context = TestContext::setup().await;

        for termo in ["", "   ", "\t"] {
            assert_eq!(
                DriverError::InvalidInput("Informe o termo de busca".to_owned()),
                context.driver().search_cidades(termo).await.unwrap_err()
            );
        }
    }

    #[tokio::test]
    async fn test_get_cidade_not_found() {
        let context = TestContext::setup().await;

        assert_eq!(
            DriverError::NotFound("Cidade não encontrada".to_owned()),
            context.driver().get_cidade(123).await.unwrap_err()
        );
    }

    #[tokio::test]
    async fn test_put_cidade_create_then_replace() {
        let context = TestContext::setup().await;
        context.insert_estado(35, "São Paulo", "SP").await;

        let (cidade, created) =
            context.driver().put_cidade(1, NovaCidade::new("Sorocaba", 35)).await.unwrap();
        assert!(created);
        assert_eq!("Sorocaba", cidade.nome());
        assert_eq!("SP", cidade.uf());

        let (cidade, created) =
            context.driver().put_cidade(1, NovaCidade::new("Sorocaba do Sul", 35)).await.unwrap();
        assert!(!created);
        assert_eq!("Sorocaba do Sul", cidade.nome());
    }

    #[tokio::test]
    async fn test_put_cidade_unknown_estado() {
        let context = TestContext::setup().await;

        assert_eq!(
            DriverError::InvalidInput("Estado informado não cadastrado".to_owned()),
            context.driver().put_cidade(1, NovaCidade::new("Nenhures", 99)).await.unwrap_err()
        );
    }

    #[tokio::test]
    async fn test_delete_cidade_ok() {
        let context = TestContext::setup().await;
        context.insert_estado(35, "São Paulo", "SP").await;
        context.insert_cidade(1, "Santos", 35).await;

        context.driver().delete_cidade(1).await.unwrap();

        assert_eq!(
            DriverError::NotFound("Cidade não encontrada".to_owned()),
            context.driver().get_cidade(1).await.unwrap_err()
        );
    }

    #[tokio::test]
    async fn test_delete_cidade_not_found() {
        let context = TestContext::setup().await;

        assert_eq!(
            DriverError::NotFound("Cidade não encontrada".to_owned()),
            context.driver().delete_cidade(1).await.unwrap_err()
        );
    }
}
