use crate::core::errors::ClearLedgerError;
use crate::core::models::SettlementEntry;
use crate::core::services::{LedgerService, SessionLimits};
use crate::infrastructure::storage::in_memory::InMemoryStorage;
use crate::tests::{create_test_service, tx};
use std::sync::Arc;
use std::time::Duration;

fn limited_service(limits: SessionLimits) -> LedgerService<InMemoryStorage> {
    LedgerService::with_limits(InMemoryStorage::new(), limits)
}

#[tokio::test]
async fn test_create_and_get_session() {
    let service = create_test_service();
    let session = service.create_session().await.unwrap();
    assert!(session.transactions.is_empty());

    let fetched = service.get_session(&session.id).await.unwrap();
    assert_eq!(fetched.id, session.id);
}

#[tokio::test]
async fn test_add_transactions_and_calculate() {
    let service = create_test_service();
    let session = service.create_session().await.unwrap();

    service.add_transaction(&session.id, "A", "B", 100.0).await.unwrap();
    let updated = service.add_transaction(&session.id, " B ", "C", 100.0).await.unwrap();
    assert_eq!(updated.transactions, vec![tx("A", "B", 100.0), tx("B", "C", 100.0)]);

    let result = service.calculate_session(&session.id).await.unwrap();
    assert_eq!(result.settlements, vec![SettlementEntry::new("A", "C", 100.0)]);
}

#[tokio::test]
async fn test_add_transaction_rejects_blank_names() {
    let service = create_test_service();
    let session = service.create_session().await.unwrap();

    let result = service.add_transaction(&session.id, "  ", "B", 10.0).await;
    assert!(matches!(result, Err(ClearLedgerError::InvalidInput(field, _)) if field == "debtor"));

    let result = service.add_transaction(&session.id, "A", "", 10.0).await;
    assert!(matches!(result, Err(ClearLedgerError::InvalidInput(field, _)) if field == "creditor"));
}

#[tokio::test]
async fn test_add_transaction_rejects_non_positive_amounts() {
    let service = create_test_service();
    let session = service.create_session().await.unwrap();

    for amount in [0.0, -5.0, f64::NAN, f64::INFINITY] {
        let result = service.add_transaction(&session.id, "A", "B", amount).await;
        assert!(matches!(result, Err(ClearLedgerError::InvalidInput(_, _))));
    }
    assert!(service.get_session(&session.id).await.unwrap().transactions.is_empty());
}

#[tokio::test]
async fn test_reset_session_clears_transactions() {
    let service = create_test_service();
    let session = service.create_session().await.unwrap();
    service.add_transaction(&session.id, "A", "B", 1.0).await.unwrap();

    let reset = service.reset_session(&session.id).await.unwrap();
    assert!(reset.transactions.is_empty());
    assert!(service.calculate_session(&session.id).await.unwrap().balances.is_empty());
}

#[tokio::test]
async fn test_unknown_session() {
    let service = create_test_service();
    assert!(matches!(
        service.get_session("missing").await,
        Err(ClearLedgerError::SessionNotFound(_))
    ));
    assert!(matches!(
        service.add_transaction("missing", "A", "B", 1.0).await,
        Err(ClearLedgerError::SessionNotFound(_))
    ));
    assert!(matches!(
        service.delete_session("missing").await,
        Err(ClearLedgerError::SessionNotFound(_))
    ));
}

#[tokio::test]
async fn test_delete_session() {
    let service = create_test_service();
    let session = service.create_session().await.unwrap();
    service.delete_session(&session.id).await.unwrap();
    assert!(matches!(
        service.get_session(&session.id).await,
        Err(ClearLedgerError::SessionNotFound(_))
    ));
}

#[tokio::test]
async fn test_name_length_counts_characters() {
    let service = create_test_service();
    let session = service.create_session().await.unwrap();

    let hundred = "é".repeat(100);
    assert!(service.add_transaction(&session.id, &hundred, "B", 1.0).await.is_ok());

    let too_long = "é".repeat(101);
    let result = service.add_transaction(&session.id, &too_long, "B", 1.0).await;
    assert!(matches!(result, Err(ClearLedgerError::InvalidInput(field, _)) if field == "debtor"));
}

#[tokio::test]
async fn test_session_count_is_capped() {
    let service = limited_service(SessionLimits {
        max_sessions: 2,
        ..SessionLimits::default()
    });
    service.create_session().await.unwrap();
    let second = service.create_session().await.unwrap();

    let result = service.create_session().await;
    assert!(matches!(result, Err(ClearLedgerError::InvalidInput(field, _)) if field == "session"));

    service.delete_session(&second.id).await.unwrap();
    assert!(service.create_session().await.is_ok());
}

#[tokio::test]
async fn test_transactions_per_session_are_capped() {
    let service = limited_service(SessionLimits {
        max_transactions: 2,
        ..SessionLimits::default()
    });
    let session = service.create_session().await.unwrap();
    service.add_transaction(&session.id, "A", "B", 1.0).await.unwrap();
    service.add_transaction(&session.id, "B", "C", 1.0).await.unwrap();

    let result = service.add_transaction(&session.id, "C", "A", 1.0).await;
    assert!(matches!(result, Err(ClearLedgerError::InvalidInput(field, _)) if field == "transactions"));
    assert_eq!(service.get_session(&session.id).await.unwrap().transactions.len(), 2);

    service.reset_session(&session.id).await.unwrap();
    assert!(service.add_transaction(&session.id, "C", "A", 1.0).await.is_ok());
}

#[tokio::test]
async fn test_idle_sessions_are_evicted() {
    let service = limited_service(SessionLimits {
        idle_ttl: Duration::ZERO,
        ..SessionLimits::default()
    });
    let session = service.create_session().await.unwrap();

    assert_eq!(service.evict_idle_sessions().await.unwrap(), 1);
    assert!(matches!(
        service.get_session(&session.id).await,
        Err(ClearLedgerError::SessionNotFound(_))
    ));
}

#[tokio::test]
async fn test_active_sessions_survive_eviction() {
    let service = create_test_service();
    let session = service.create_session().await.unwrap();

    assert_eq!(service.evict_idle_sessions().await.unwrap(), 0);
    assert!(service.get_session(&session.id).await.is_ok());
}

#[tokio::test]
async fn test_create_session_frees_idle_slots_first() {
    let service = limited_service(SessionLimits {
        idle_ttl: Duration::ZERO,
        max_sessions: 1,
        ..SessionLimits::default()
    });
    let stale = service.create_session().await.unwrap();
    let fresh = service.create_session().await.unwrap();

    assert_ne!(stale.id, fresh.id);
    assert!(service.get_session(&stale.id).await.is_err());
}

#[tokio::test]
async fn test_eviction_task_sweeps_in_background() {
    let service = Arc::new(limited_service(SessionLimits {
        idle_ttl: Duration::ZERO,
        ..SessionLimits::default()
    }));
    let session = service.create_session().await.unwrap();

    Arc::clone(&service).start_eviction_task(Duration::from_millis(10));
    tokio::time::sleep(Duration::from_millis(100)).await;

    assert!(matches!(
        service.get_session(&session.id).await,
        Err(ClearLedgerError::SessionNotFound(_))
    ));
}
