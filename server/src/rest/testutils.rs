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

//! Test utilities for the REST API.

use crate::db;
use crate::driver::Driver;
use crate::model::*;
use crate::rest::app;
use axum::Router;
use retaguarda_core::clocks::testutils::SettableClock;
use retaguarda_core::db::{Db, Executor};
use retaguarda_core::model::{Cep, Cnpj};
use rust_decimal::Decimal;
use std::sync::Arc;
use time::Date;
use time::macros::datetime;

/// State of a test: an in-memory database, a clock pinned to a known instant
/// and the application router wired to both.
pub(crate) struct TestContext {
    /// The injected database handle.
    db: Arc<dyn Db + Send + Sync>,

    /// The injected clock, settable by tests.
    clock: Arc<SettableClock>,

    /// The application under test.
    app: Router,
}

impl TestContext {
    /// Initializes the database, the driver and the app for a test.
    pub(crate) async fn setup() -> Self {
        let db: Arc<dyn Db + Send + Sync> =
            Arc::from(retaguarda_core::db::sqlite::testutils::setup().await);
        db::init_schema(&mut db.ex().await.unwrap()).await.unwrap();
        let clock = Arc::from(SettableClock::new(datetime!(2026-08-05 12:00:00 UTC)));
        let app = app(Driver::new(db.clone(), clock.clone()));
        Self { db, clock, app }
    }

    /// Returns a clone of the app under test.
    pub(crate) fn app(&self) -> Router {
        self.app.clone()
    }

    /// Consumes the context and returns the app under test.
    pub(crate) fn into_app(self) -> Router {
        self.app
    }

    /// Returns the settable clock injected into the app.
    pub(crate) fn clock(&self) -> &SettableClock {
        &self.clock
    }

    /// Returns an executor for direct access to the test database.
    pub(crate) async fn ex(&self) -> Executor {
        self.db.ex().await.unwrap()
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

    /// Checks whether the city `id` exists.
    pub(crate) async fn has_cidade(&self, id: i32) -> bool {
        match db::get_cidade(&mut self.ex().await, id).await {
            Ok(_) => true,
            Err(retaguarda_core::db::DbError::NotFound) => false,
            Err(e) => panic!("Unexpected error: {:?}", e),
        }
    }

    /// Seeds the country `codigo`.
    pub(crate) async fn insert_pais(&self, codigo: &str, nome: &str) {
        let pais = Pais::new(codigo.to_owned(), nome.to_owned());
        db::put_pais(&mut self.ex().await, &pais).await.unwrap();
    }

    /// Seeds the product `id` with a fixed NCM/unit and the given price.
    pub(crate) async fn insert_produto(&self, id: i32, descricao: &str, preco_unitario: Decimal) {
        let produto = Produto::new(id, descricao, "96081000", "UN", preco_unitario).unwrap();
        db::put_produto(&mut self.ex().await, &produto).await.unwrap();
    }

    /// Checks whether the product `id` exists.
    pub(crate) async fn has_produto(&self, id: i32) -> bool {
        match db::get_produto(&mut self.ex().await, id).await {
            Ok(_) => true,
            Err(retaguarda_core::db::DbError::NotFound) => false,
            Err(e) => panic!("Unexpected error: {:?}", e),
        }
    }

    /// Seeds the supplier `id` in the city `cidade_id`.
    pub(crate) async fn insert_fornecedor(&self, id: i32, razao_social: &str, cidade_id: i32) {
        let dados = NovoFornecedor {
            razao_social: razao_social.to_owned(),
            cnpj: Cnpj::from("12345678000199"),
            inscricao_estadual: None,
            endereco: "Rua das Laranjeiras".to_owned(),
            numero: "100".to_owned(),
            bairro: "Centro".to_owned(),
            cep: Cep::from("01310100"),
            cidade_id,
            telefone: None,
            email: None,
            produtos: vec![],
        };
        db::put_fornecedor(&mut self.ex().await, id, &dados).await.unwrap();
    }

    /// Checks whether the supplier `id` exists.
    pub(crate) async fn has_fornecedor(&self, id: i32) -> bool {
        match db::get_fornecedor(&mut self.ex().await, id).await {
            Ok(_) => true,
            Err(retaguarda_core::db::DbError::NotFound) => false,
            Err(e) => panic!("Unexpected error: {:?}", e),
        }
    }

    /// Seeds the carrier `id` in the city `cidade_id`.
    pub(crate) async fn insert_transportadora(&self, id: i32, razao_social: &str, cidade_id: i32) {
        let transportadora = Transportadora::new(
            id,
            razao_social.to_owned(),
            Cnpj::from("98765432000110"),
            "Rodovia BR-116, km 10".to_owned(),
            cidade_id,
        );
        db::put_transportadora(&mut self.ex().await, &transportadora).await.unwrap();
    }

    /// Associates the supplier `fornecedor_id` with the carrier `id`.
    pub(crate) async fn associate_fornecedor(&self, id: i32, fornecedor_id: i32) {
        db::add_fornecedor_da_transportadora(&mut self.ex().await, id, fornecedor_id)
            .await
            .unwrap();
    }

    /// Registers the vehicle `placa` for the carrier `id`.
    pub(crate) async fn insert_veiculo(&self, id: i32, placa: &str) {
        db::put_veiculo(&mut self.ex().await, id, placa).await.unwrap();
    }

    /// Seeds the payment method `codigo`.
    pub(crate) async fn insert_forma_pagamento(&self, codigo: &str, descricao: &str) {
        db::put_forma_pagamento(&mut self.ex().await, codigo, descricao).await.unwrap();
    }

    /// Seeds the payment condition `id` with two 50% installments.
    pub(crate) async fn insert_condicao(&self, id: i32, descricao: &str) {
        let condicao = CondicaoPagamento::new(
            id,
            descricao.to_owned(),
            Decimal::new(2, 0),
            Decimal::new(1, 0),
            Decimal::ZERO,
            vec![
                Parcela::new(1, "BOL".to_owned(), 30, Decimal::new(50, 0)),
                Parcela::new(2, "BOL".to_owned(), 60, Decimal::new(50, 0)),
            ],
        )
        .unwrap();
        db::put_condicao(&mut self.ex().await, &condicao).await.unwrap();
        for parcela in condicao.parcelas() {
            db::add_parcela(&mut self.ex().await, id, parcela).await.unwrap();
        }
    }

    /// Seeds an open installment for the supplier `fornecedor_id`.
    pub(crate) async fn insert_conta(
        &self,
        numero: i32,
        parcela: i32,
        fornecedor_id: i32,
        tipo: TipoConta,
        data_vencimento: Date,
    ) {
        let conta = Conta::new(
            55,
            1,
            numero,
            fornecedor_id,
            parcela,
            tipo,
            data_vencimento,
            Decimal::new(50000, 2),
            None,
            None,
            "BOL".to_owned(),
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
        );
        db::put_conta(&mut self.ex().await, &conta).await.unwrap();
    }
}
