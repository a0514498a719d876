// src/services/request_service.rs

use chrono::Utc;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{AssetRepository, EmployeeRepository, RequestRepository, UserRepository},
    models::{
        employee::RemovalOutcome,
        request::{AssetRequest, AssignAssetPayload, RequestStatus, SubmitRequestPayload},
    },
};

/// O motor do ciclo de vida das solicitações: toda transição de status e os
/// efeitos colaterais dela (estoque, equipe, limite de assentos) passam por
/// aqui, cada operação multi-passo dentro de uma única transação.
#[derive(Clone)]
pub struct RequestService {
    request_repo: RequestRepository,
    asset_repo: AssetRepository,
    employee_repo: EmployeeRepository,
    user_repo: UserRepository,
    pool: PgPool,
}

impl RequestService {
    pub fn new(
        request_repo: RequestRepository,
        asset_repo: AssetRepository,
        employee_repo: EmployeeRepository,
        user_repo: UserRepository,
        pool: PgPool,
    ) -> Self {
        Self {
            request_repo,
            asset_repo,
            employee_repo,
            user_repo,
            pool,
        }
    }

    // ---
    // Submissão (funcionário pede um ativo)
    // ---
    // A checagem de estoque aqui é apenas consultiva: ela não reserva nada.
    // A guarda real fica na baixa condicionada dentro da aprovação.
    pub async fn submit_request(
        &self,
        caller_email: &str,
        payload: &SubmitRequestPayload,
    ) -> Result<AssetRequest, AppError> {
        // Operação self-service: o e-mail do corpo tem que ser o do token.
        if payload.email != caller_email {
            return Err(AppError::EmailMismatch);
        }

        self.user_repo
            .find_by_email(&self.pool, &payload.email)
            .await?
            .ok_or(AppError::UserNotFound)?;

        let asset = self
            .asset_repo
            .find_by_id(payload.asset_id)
            .await?
            .ok_or(AppError::AssetNotFound)?;

        if asset.quantity <= 0 {
            return Err(AppError::AssetOutOfStock);
        }

        // Denormaliza o RH dono e o nome do ativo no momento da submissão.
        let asset_name = payload
            .asset_name
            .clone()
            .unwrap_or_else(|| asset.product_name.clone());

        self.request_repo
            .insert_request(
                &self.pool,
                asset.id,
                &asset_name,
                &payload.email,
                &payload.name,
                &asset.hr_email,
                RequestStatus::Pending,
                None,
            )
            .await
    }

    // ---
    // Aprovação (RH)
    // ---
    pub async fn approve_request(&self, id: Uuid) -> Result<u64, AppError> {
        let mut tx = self.pool.begin().await?;

        // 1. Carrega a solicitação
        let request = self
            .request_repo
            .find_by_id(&mut *tx, id)
            .await?
            .ok_or(AppError::RequestNotFound)?;

        // Reaprovação não pode contar duas vezes: só `pending` segue.
        if request.status != RequestStatus::Pending {
            return Err(AppError::RequestAlreadyDecided);
        }

        // 2-3. Filiação + limite de assentos (pulado para quem já é membro)
        self.ensure_membership(
            &mut tx,
            &request.requester_email,
            &request.requester_name,
            &request.hr_email,
        )
        .await?;

        // 4. Status + carimbo de aprovação
        let modified = self
            .request_repo
            .set_status(&mut *tx, request.id, RequestStatus::Approved, Some(Utc::now()))
            .await?;

        // 5. Baixa de estoque condicionada: sem estoque, a transação
        // inteira aborta e nada do que veio antes persiste.
        let asset = self
            .asset_repo
            .find_by_id_for_update(&mut *tx, request.asset_id)
            .await?
            .ok_or(AppError::AssetNotFound)?;
        if asset.quantity <= 0 {
            return Err(AppError::AssetOutOfStock);
        }
        self.asset_repo.decrement_quantity(&mut *tx, asset.id).await?;

        tx.commit().await?;
        Ok(modified)
    }

    // ---
    // Decisão por status textual (aprovar ou negar)
    // ---
    pub async fn decide_request(&self, id: Uuid, raw_status: &str) -> Result<u64, AppError> {
        let status = raw_status
            .parse::<RequestStatus>()
            .map_err(|_| AppError::InvalidRequestStatus)?;

        match status {
            // Aprovação sempre passa pelo fluxo completo acima.
            RequestStatus::Approved => self.approve_request(id).await,

            // Negar só troca o status: sem estoque, sem equipe.
            RequestStatus::Denied => {
                let request = self
                    .request_repo
                    .find_by_id(&self.pool, id)
                    .await?
                    .ok_or(AppError::RequestNotFound)?;
                self.request_repo
                    .set_status(&self.pool, request.id, RequestStatus::Denied, None)
                    .await
            }

            RequestStatus::Pending => Err(AppError::InvalidRequestStatus),
        }
    }

    // ---
    // Atribuição direta (RH, sem solicitação prévia)
    // ---
    // Passa pela MESMA contabilidade de equipe e limite da aprovação
    // normal; o registro já nasce aprovado.
    pub async fn assign_direct(
        &self,
        hr_email: &str,
        payload: &AssignAssetPayload,
    ) -> Result<AssetRequest, AppError> {
        let mut tx = self.pool.begin().await?;

        let asset = self
            .asset_repo
            .find_by_id_for_update(&mut *tx, payload.asset_id)
            .await?
            .ok_or(AppError::AssetNotFound)?;

        // O RH só atribui ativos próprios.
        if asset.hr_email != hr_email {
            return Err(AppError::EmailMismatch);
        }
        if asset.quantity <= 0 {
            return Err(AppError::AssetOutOfStock);
        }

        self.ensure_membership(&mut tx, &payload.email, &payload.name, &asset.hr_email)
            .await?;

        let request = self
            .request_repo
            .insert_request(
                &mut *tx,
                asset.id,
                &asset.product_name,
                &payload.email,
                &payload.name,
                &asset.hr_email,
                RequestStatus::Approved,
                Some(Utc::now()),
            )
            .await?;

        self.asset_repo.decrement_quantity(&mut *tx, asset.id).await?;

        tx.commit().await?;
        Ok(request)
    }

    // ---
    // Offboarding (RH remove um funcionário da equipe)
    // ---
    pub async fn remove_employee(
        &self,
        hr_email: &str,
        employee_email: &str,
    ) -> Result<RemovalOutcome, AppError> {
        let mut tx = self.pool.begin().await?;

        self.employee_repo
            .find_membership(&mut *tx, employee_email, hr_email)
            .await?
            .ok_or(AppError::EmployeeNotFound)?;

        // 1-2. Devolve 1 unidade por solicitação aprovada. Ativo apagado
        // nesse meio-tempo não tem mais linha para receber a devolução.
        let approved = self
            .request_repo
            .list_approved_for_employee(&mut *tx, employee_email, hr_email)
            .await?;
        let mut returned_assets = 0u64;
        for request in &approved {
            returned_assets += self
                .asset_repo
                .return_quantity(&mut *tx, request.asset_id)
                .await?;
        }

        // 3. Nega tudo que existia sob essa relação, qualquer que fosse
        // o status anterior. Nada fica pendente após o offboarding.
        let requests_updated = self
            .request_repo
            .deny_all_for_employee(&mut *tx, employee_email, hr_email)
            .await?;

        // 4. Remove a filiação
        self.employee_repo
            .delete_membership(&mut *tx, employee_email, hr_email)
            .await?;

        tx.commit().await?;
        Ok(RemovalOutcome {
            returned_assets,
            requests_updated,
        })
    }

    // ---
    // Listagens (tela do RH e do funcionário)
    // ---
    pub async fn requests_for_hr(
        &self,
        hr_email: &str,
        search: Option<&str>,
    ) -> Result<Vec<AssetRequest>, AppError> {
        self.request_repo.list_for_hr(hr_email, search).await
    }

    pub async fn requests_for_requester(
        &self,
        requester_email: &str,
        search: Option<&str>,
    ) -> Result<Vec<AssetRequest>, AppError> {
        self.request_repo
            .list_for_requester(requester_email, search)
            .await
    }

    pub async fn roster(
        &self,
        hr_email: &str,
    ) -> Result<Vec<crate::models::employee::EmployeeMembership>, AppError> {
        self.employee_repo.list_for_hr(hr_email).await
    }

    // Filiação + limite de assentos, dentro da transação do chamador.
    // Quem já é membro não re-passa pelo limite nem gera linha duplicada.
    async fn ensure_membership(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        employee_email: &str,
        employee_name: &str,
        hr_email: &str,
    ) -> Result<(), AppError> {
        if self
            .employee_repo
            .find_membership(&mut **tx, employee_email, hr_email)
            .await?
            .is_some()
        {
            return Ok(());
        }

        let hr = self
            .user_repo
            .find_by_email(&mut **tx, hr_email)
            .await?
            .ok_or(AppError::UserNotFound)?;

        let roster = self.employee_repo.count_for_hr(&mut **tx, hr_email).await?;
        if roster >= i64::from(hr.max_employees) {
            return Err(AppError::SeatLimitReached);
        }

        // A UNIQUE (employee_email, hr_email) é quem decide corridas;
        // None aqui significa que outro aprovador chegou primeiro.
        self.employee_repo
            .insert_membership(&mut **tx, employee_email, employee_name, hr_email)
            .await?;

        Ok(())
    }
}
