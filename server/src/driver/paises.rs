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

//! Operations on countries.

use crate::db;
use crate::driver::{Driver, map_db_error};
use crate::model::Pais;
use retaguarda_core::db::DbError;
use retaguarda_core::driver::{DriverError, DriverResult};

impl Driver {
    /// Searches for countries whose name contains `termo`.
    pub(crate) async fn search_paises(self, termo: &str) -> DriverResult<Vec<Pais>> {
        let termo = Driver::termo_valido(termo)?;
        db::search_paises(&mut self.db.ex().await?, termo)
            .await
            .map_err(|e| map_db_error("busca de países", e))
    }

    /// Gets the country identified by `codigo`.
    pub(crate) async fn get_pais(self, codigo: &str) -> DriverResult<Pais> {
        let codigo = codigo.trim();
        if codigo.is_empty() {
            return Err(DriverError::InvalidInput("Informe o código do país".to_owned()));
        }
        match db::get_pais(&mut self.db.ex().await?, codigo).await {
            Err(DbError::NotFound) => Err(DriverError::NotFound("País não encontrado".to_owned())),
            result => result.map_err(|e| map_db_error("consulta de país", e)),
        }
    }
}
