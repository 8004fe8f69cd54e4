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

//! Business logic for the service.

use log::error;
use retaguarda_core::clocks::Clock;
use retaguarda_core::db::{Db, DbError};
use retaguarda_core::driver::{DriverError, DriverResult};
use std::sync::Arc;

mod cidades;
mod condicoes;
mod contas;
mod fornecedores;
mod paises;
mod produtos;
#[cfg(test)]
mod testutils;
mod transportadoras;

/// Business logic.
///
/// The public operations exposed by the driver are all "one shot": when they need a transaction,
/// they start and commit it themselves, so it's incorrect for the caller to compose two separate
/// calls.  For this reason, these operations consume the driver in an attempt to minimize the
/// possibility of executing two operations.
#[derive(Clone)]
pub(crate) struct Driver {
    /// The database that the driver uses for persistence.
    db: Arc<dyn Db + Send + Sync>,

    /// Clock used to derive day-sensitive read models.
    clock: Arc<dyn Clock + Send + Sync>,
}

impl Driver {
    /// Creates a new driver backed by the given injected components.
    pub(crate) fn new(db: Arc<dyn Db + Send + Sync>, clock: Arc<dyn Clock + Send + Sync>) -> Self {
        Self { db, clock }
    }

    /// Validates a search term, rejecting blank input before any query runs.
    fn termo_valido(termo: &str) -> DriverResult<&str> {
        let termo = termo.trim();
        if termo.is_empty() {
            return Err(DriverError::InvalidInput("Informe o termo de busca".to_owned()));
        }
        Ok(termo)
    }
}

/// Converts a database error into a driver error, logging unexpected backend failures with the
/// name of the failing operation.  Internal detail stays in the log.
fn map_db_error(operacao: &str, e: DbError) -> DriverError {
    if matches!(e, DbError::BackendError(_) | DbError::DataIntegrityError(_) | DbError::Unavailable)
    {
        error!("Erro em {}: {}", operacao, e);
    }
    DriverError::from(e)
}
