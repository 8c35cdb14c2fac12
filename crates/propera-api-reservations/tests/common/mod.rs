//! Common test utilities for propera-api-reservations integration tests.
//!
//! Provides in-memory fakes for the data store and document storage so the
//! reservation service can be exercised without PostgreSQL or a filesystem.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use propera_api_reservations::models::{CreateReservationRequest, UploadedDocument};
use propera_api_reservations::{ApiReservationsError, DocumentStorage, ReservationService};
use propera_db::{
    Contract, CreateReservation, DbError, PaymentSchedule, Reservation, ReservationFilter,
    ReservationStore,
};
use rust_decimal::Decimal;
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// In-memory [`ReservationStore`] with switches for simulating failures.
#[derive(Default)]
pub struct MemoryStore {
    pub reservations: Mutex<Vec<Reservation>>,
    pub contracts: Mutex<Vec<Contract>>,
    pub schedules: Mutex<Vec<PaymentSchedule>>,

    /// Monotonic clock so inserted rows get distinct timestamps.
    seq: AtomicI64,

    /// When set, inserts fail with the given message.
    pub fail_inserts: AtomicBool,
    /// When set, the primary listing query fails.
    pub fail_list: AtomicBool,
    /// Contract lookups fail for these reservation ids.
    pub fail_contract_for: Mutex<HashSet<Uuid>>,
    /// Schedule lookups fail for these contract ids.
    pub fail_schedules_for: Mutex<HashSet<Uuid>>,

    /// Number of times `mark_rejected` was invoked.
    pub reject_calls: AtomicUsize,
}

impl MemoryStore {
    pub fn next_timestamp(&self) -> DateTime<Utc> {
        let tick = self.seq.fetch_add(1, Ordering::SeqCst);
        Utc.with_ymd_and_hms(2026, 5, 1, 8, 0, 0).unwrap() + Duration::seconds(tick)
    }

    /// Insert a bare reservation row directly, bypassing the service.
    pub fn push_reservation(&self, user_id: Uuid, status: &str) -> Uuid {
        let now = self.next_timestamp();
        let id = Uuid::new_v4();
        self.reservations.lock().unwrap().push(Reservation {
            id,
            tracking_number: format!("TRK-{:08}", self.seq.load(Ordering::SeqCst)),
            property_id: Uuid::new_v4(),
            property_title: "Unit 4B, Alder Court".to_string(),
            reservation_fee: Decimal::new(50000, 2),
            user_id,
            full_name: "Ade Okafor".to_string(),
            email: "ade@example.com".to_string(),
            phone: "+1 555 0100".to_string(),
            address: "12 Hill Road".to_string(),
            occupation: "Nurse".to_string(),
            employer: "City Hospital".to_string(),
            employment_status: "employed".to_string(),
            years_employed: 4,
            monthly_income: Decimal::new(380000, 2),
            other_income_source: None,
            other_income_amount: None,
            total_monthly_income: None,
            message: None,
            document_type: None,
            document_url: None,
            status: status.to_string(),
            rejected_by: None,
            rejected_reason: None,
            created_at: now,
            updated_at: now,
        });
        id
    }

    /// Attach a contract to a reservation, returning the contract id.
    pub fn push_contract(&self, reservation_id: Uuid) -> Uuid {
        let now = self.next_timestamp();
        let id = Uuid::new_v4();
        self.contracts.lock().unwrap().push(Contract {
            id,
            reservation_id,
            contract_number: "CT-0001".to_string(),
            payment_plan_months: 12,
            monthly_installment: Decimal::new(120000, 2),
            status: "active".to_string(),
            created_at: now,
            updated_at: now,
        });
        id
    }

    /// Attach an installment row to a contract.
    pub fn push_schedule(&self, contract_id: Uuid, installment_number: i32) {
        let now = self.next_timestamp();
        self.schedules.lock().unwrap().push(PaymentSchedule {
            id: Uuid::new_v4(),
            contract_id,
            installment_number,
            amount: Decimal::new(120000, 2),
            due_date: now.date_naive(),
            is_paid: false,
            created_at: now,
        });
    }
}

#[async_trait]
impl ReservationStore for MemoryStore {
    async fn insert_reservation(&self, data: CreateReservation) -> Result<Reservation, DbError> {
        if self.fail_inserts.load(Ordering::SeqCst) {
            return Err(DbError::NotFound("simulated insert failure".to_string()));
        }
        let now = self.next_timestamp();
        let reservation = Reservation {
            id: Uuid::new_v4(),
            tracking_number: data.tracking_number,
            property_id: data.property_id,
            property_title: data.property_title,
            reservation_fee: data.reservation_fee,
            user_id: data.user_id,
            full_name: data.full_name,
            email: data.email,
            phone: data.phone,
            address: data.address,
            occupation: data.occupation,
            employer: data.employer,
            employment_status: data.employment_status,
            years_employed: data.years_employed,
            monthly_income: data.monthly_income,
            other_income_source: data.other_income_source,
            other_income_amount: data.other_income_amount,
            total_monthly_income: data.total_monthly_income,
            message: data.message,
            document_type: data.document_type,
            document_url: data.document_url,
            status: "pending".to_string(),
            rejected_by: None,
            rejected_reason: None,
            created_at: now,
            updated_at: now,
        };
        self.reservations.lock().unwrap().push(reservation.clone());
        Ok(reservation)
    }

    async fn mark_rejected(
        &self,
        id: Uuid,
        rejected_by: Option<Uuid>,
        reason: Option<String>,
    ) -> Result<Reservation, DbError> {
        self.reject_calls.fetch_add(1, Ordering::SeqCst);
        let now = self.next_timestamp();
        let mut rows = self.reservations.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| DbError::NotFound(format!("reservation {id}")))?;
        row.status = "rejected".to_string();
        row.rejected_by = rejected_by;
        row.rejected_reason = reason;
        row.updated_at = now;
        Ok(row.clone())
    }

    async fn list_reservations(
        &self,
        filter: &ReservationFilter,
    ) -> Result<Vec<Reservation>, DbError> {
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(DbError::NotFound("simulated listing failure".to_string()));
        }
        let mut rows: Vec<Reservation> = self
            .reservations
            .lock()
            .unwrap()
            .iter()
            .filter(|r| filter.user_id.map_or(true, |u| r.user_id == u))
            .filter(|r| filter.status.map_or(true, |s| r.status == s.as_str()))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn find_contract(&self, reservation_id: Uuid) -> Result<Option<Contract>, DbError> {
        if self
            .fail_contract_for
            .lock()
            .unwrap()
            .contains(&reservation_id)
        {
            return Err(DbError::NotFound("simulated contract failure".to_string()));
        }
        Ok(self
            .contracts
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.reservation_id == reservation_id)
            .cloned())
    }

    async fn list_schedules(&self, contract_id: Uuid) -> Result<Vec<PaymentSchedule>, DbError> {
        if self
            .fail_schedules_for
            .lock()
            .unwrap()
            .contains(&contract_id)
        {
            return Err(DbError::NotFound("simulated schedule failure".to_string()));
        }
        // Deliberately returned in insertion order; the service owns the
        // installment-number ordering guarantee.
        Ok(self
            .schedules
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.contract_id == contract_id)
            .cloned()
            .collect())
    }
}

/// In-memory [`DocumentStorage`] recording every stored document.
#[derive(Default)]
pub struct MemoryDocuments {
    pub stored: Mutex<Vec<(String, String, Vec<u8>)>>,
    pub deletes: AtomicUsize,
    pub fail_uploads: AtomicBool,
}

#[async_trait]
impl DocumentStorage for MemoryDocuments {
    async fn store(
        &self,
        folder: &str,
        filename: &str,
        data: &[u8],
    ) -> Result<String, ApiReservationsError> {
        if self.fail_uploads.load(Ordering::SeqCst) {
            return Err(ApiReservationsError::UploadFailed(
                "simulated object-store outage".to_string(),
            ));
        }
        self.stored
            .lock()
            .unwrap()
            .push((folder.to_string(), filename.to_string(), data.to_vec()));
        Ok(format!("https://cdn.propera.test/{folder}/{filename}"))
    }

    async fn delete(&self, folder: &str, filename: &str) -> Result<(), ApiReservationsError> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        self.stored
            .lock()
            .unwrap()
            .retain(|(f, n, _)| !(f == folder && n == filename));
        Ok(())
    }
}

/// A service wired to fresh fakes, returned alongside them for assertions.
pub fn service_with_fakes() -> (ReservationService, Arc<MemoryStore>, Arc<MemoryDocuments>) {
    let store = Arc::new(MemoryStore::default());
    let documents = Arc::new(MemoryDocuments::default());
    let service = ReservationService::new(store.clone(), documents.clone());
    (service, store, documents)
}

/// A complete, valid intake payload.
pub fn valid_request() -> CreateReservationRequest {
    CreateReservationRequest {
        property_id: Some(Uuid::new_v4()),
        property_title: Some("Unit 4B, Alder Court".to_string()),
        reservation_fee: Some(Decimal::new(50000, 2)),
        user_id: Some(Uuid::new_v4()),
        full_name: Some("Ade Okafor".to_string()),
        email: Some("ade@example.com".to_string()),
        phone: Some("+1 555 0100".to_string()),
        address: Some("12 Hill Road".to_string()),
        occupation: Some("Nurse".to_string()),
        employer: Some("City Hospital".to_string()),
        employment_status: Some("employed".to_string()),
        years_employed: Some(4),
        monthly_income: Some(Decimal::new(380000, 2)),
        other_income_source: None,
        other_income_amount: None,
        total_monthly_income: None,
        message: Some("Hoping to move in before June.".to_string()),
        document_type: Some("passport".to_string()),
    }
}

/// A small PDF upload that passes the identity-document policy.
pub fn pdf_file() -> UploadedDocument {
    UploadedDocument {
        filename: "passport.pdf".to_string(),
        content_type: "application/pdf".to_string(),
        bytes: b"%PDF-1.4 fake".to_vec(),
    }
}
