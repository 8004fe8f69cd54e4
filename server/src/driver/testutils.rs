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

//! Test utilities for the business layer.

use crate::db;
use crate::driver::Driver;
use crate::model::{Estado, NovaCidade};
use retaguarda_core::clocks::testutils::SettableClock;
use retaguarda_core::db::{Db, Executor};
use std::sync::Arc;
use time::macros::datetime;

/// State of a test: an in-memory database plus a driver pinned to a known
/// instant.
pub(crate) struct TestContext {
    /// The injected database handle.
    db: Arc<dyn Db + Send + Sync>,

    /// The injected clock, settable by tests.
    clock: Arc<SettableClock>,
}

impl TestContext {
    /// Initializes the database and the driver for a test.
    pub(crate) async fn setup() -> Self {
        let db: Arc<dyn Db + Send + Sync> =
            Arc::from(retaguarda_core::db::sqlite::testutils::setup().await);
        db::init_schema(&mut db.ex().await.unwrap()).await.unwrap();
        let clock = Arc::from(SettableClock::new(datetime!(2026-08-05 12:00:00 UTC)));
        Self { db, clock }
    }

    /// Returns a driver over the test database and clock.
    pub(crate) fn driver(&self) -> Driver {
        Driver::new(self.db.clone(), self.clock.clone())
    }

    /// Returns an executor for direct access to the test database.
    pub(crate) async fn ex(&self) -> Executor {
        self.db.ex().await.unwrap()
    }

    /// Returns the settable clock injected into the driver.
    pub(crate) fn clock(&self) -> &SettableClock {
        &self.clock
    }

    /// Seeds the state `id`.
    pub(crate) async fn insert_estado(&self, id: i32, nome: &str, uf: &str) {
        let estado = Estado::new(id, nome.to_owned(), uf.to_owned());
        db::put_estado(&mut self.ex().await, &estado).await.unwrap();
    }

    /// Seeds the city `id` in the state `estado_id`.
    pub(crate) async fn insert_cidade(&self, id: i32, nome: &str, estado_id: i32) {
        db::put_cidade(&mut self.ex().await, id, &NovaCidade::new(nome, estado_id)).await.unwrap();
    }

    /// Seeds the payment method `codigo`.
    pub(crate) async fn insert_forma_pagamento(&self, codigo: &str, descricao: &str) {
        db::put_forma_pagamento(&mut self.ex().await, codigo, descricao).await.unwrap();
    }
}
