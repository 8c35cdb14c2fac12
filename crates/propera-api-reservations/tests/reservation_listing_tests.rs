//! Aggregation-engine tests: filtering, recency ordering, fan-out
//! enrichment, and per-item failure degradation.

mod common;

use common::service_with_fakes;
use propera_api_reservations::ApiReservationsError;
use propera_db::{ReservationFilter, ReservationStatus};
use std::sync::atomic::Ordering;
use uuid::Uuid;

#[tokio::test]
async fn listing_returns_newest_first_with_total() {
    let (service, store, _documents) = service_with_fakes();
    let user = Uuid::new_v4();
    let oldest = store.push_reservation(user, "pending");
    let middle = store.push_reservation(user, "pending");
    let newest = store.push_reservation(user, "pending");

    let (data, total) = service
        .list_reservations(ReservationFilter::default())
        .await
        .unwrap();

    assert_eq!(total, 3);
    assert_eq!(data.len(), total);
    let ids: Vec<Uuid> = data.iter().map(|e| e.reservation.id).collect();
    assert_eq!(ids, vec![newest, middle, oldest]);
}

#[tokio::test]
async fn status_filter_returns_only_matching_reservations() {
    let (service, store, _documents) = service_with_fakes();
    let user = Uuid::new_v4();
    store.push_reservation(user, "pending");
    store.push_reservation(user, "rejected");
    store.push_reservation(user, "pending");

    let (data, total) = service
        .list_reservations(ReservationFilter {
            user_id: None,
            status: Some(ReservationStatus::Pending),
        })
        .await
        .unwrap();

    assert_eq!(total, 2);
    assert!(data.iter().all(|e| e.reservation.status == "pending"));
}

#[tokio::test]
async fn user_filter_excludes_other_users() {
    let (service, store, _documents) = service_with_fakes();
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();
    store.push_reservation(alice, "pending");
    store.push_reservation(bob, "pending");

    let (data, total) = service
        .list_reservations(ReservationFilter {
            user_id: Some(alice),
            status: None,
        })
        .await
        .unwrap();

    assert_eq!(total, 1);
    assert_eq!(data[0].reservation.user_id, alice);
}

#[tokio::test]
async fn unconverted_reservation_has_null_contract_and_null_schedules() {
    let (service, store, _documents) = service_with_fakes();
    store.push_reservation(Uuid::new_v4(), "pending");

    let (data, _) = service
        .list_reservations(ReservationFilter::default())
        .await
        .unwrap();

    assert!(data[0].contract.is_none());
    assert!(data[0].payment_schedules.is_none());
}

#[tokio::test]
async fn schedules_are_ordered_by_installment_number() {
    let (service, store, _documents) = service_with_fakes();
    let reservation = store.push_reservation(Uuid::new_v4(), "approved");
    let contract = store.push_contract(reservation);
    // Inserted out of order on purpose.
    store.push_schedule(contract, 2);
    store.push_schedule(contract, 1);
    store.push_schedule(contract, 3);

    let (data, _) = service
        .list_reservations(ReservationFilter::default())
        .await
        .unwrap();

    let schedules = data[0].payment_schedules.as_ref().unwrap();
    let numbers: Vec<i32> = schedules.iter().map(|s| s.installment_number).collect();
    assert_eq!(numbers, vec![1, 2, 3]);
}

#[tokio::test]
async fn contract_without_installments_yields_empty_array_not_null() {
    let (service, store, _documents) = service_with_fakes();
    let reservation = store.push_reservation(Uuid::new_v4(), "approved");
    store.push_contract(reservation);

    let (data, _) = service
        .list_reservations(ReservationFilter::default())
        .await
        .unwrap();

    assert!(data[0].contract.is_some());
    let schedules = data[0].payment_schedules.as_ref();
    assert!(schedules.is_some(), "schedules must be an empty array, not null");
    assert!(schedules.unwrap().is_empty());
}

#[tokio::test]
async fn contract_lookup_failure_degrades_only_that_reservation() {
    let (service, store, _documents) = service_with_fakes();
    let healthy = store.push_reservation(Uuid::new_v4(), "approved");
    let healthy_contract = store.push_contract(healthy);
    store.push_schedule(healthy_contract, 1);
    let broken = store.push_reservation(Uuid::new_v4(), "approved");
    store.push_contract(broken);
    store.fail_contract_for.lock().unwrap().insert(broken);

    let (data, total) = service
        .list_reservations(ReservationFilter::default())
        .await
        .unwrap();

    assert_eq!(total, 2);
    // Newest first: the broken reservation comes first.
    assert_eq!(data[0].reservation.id, broken);
    assert!(data[0].contract.is_none());
    assert!(data[0].payment_schedules.is_none());
    assert_eq!(data[1].reservation.id, healthy);
    assert!(data[1].contract.is_some());
    assert_eq!(data[1].payment_schedules.as_ref().unwrap().len(), 1);
}

#[tokio::test]
async fn schedule_lookup_failure_keeps_contract_but_nulls_schedules() {
    let (service, store, _documents) = service_with_fakes();
    let reservation = store.push_reservation(Uuid::new_v4(), "approved");
    let contract = store.push_contract(reservation);
    store.push_schedule(contract, 1);
    store.fail_schedules_for.lock().unwrap().insert(contract);

    let (data, _) = service
        .list_reservations(ReservationFilter::default())
        .await
        .unwrap();

    assert!(data[0].contract.is_some());
    assert!(data[0].payment_schedules.is_none());
}

#[tokio::test]
async fn primary_query_failure_aborts_the_listing() {
    let (service, store, _documents) = service_with_fakes();
    store.push_reservation(Uuid::new_v4(), "pending");
    store.fail_list.store(true, Ordering::SeqCst);

    let err = service
        .list_reservations(ReservationFilter::default())
        .await
        .unwrap_err();

    assert!(matches!(err, ApiReservationsError::Persistence(_)));
}

#[tokio::test]
async fn fan_out_preserves_input_order_across_many_reservations() {
    let (service, store, _documents) = service_with_fakes();
    let user = Uuid::new_v4();
    // More reservations than the enrichment concurrency bound.
    let mut inserted: Vec<Uuid> = (0..25)
        .map(|_| store.push_reservation(user, "pending"))
        .collect();
    inserted.reverse(); // listing order is newest first

    let (data, _) = service
        .list_reservations(ReservationFilter::default())
        .await
        .unwrap();

    let listed: Vec<Uuid> = data.iter().map(|e| e.reservation.id).collect();
    assert_eq!(listed, inserted);
}
