use distri_client::{ClientError, TransactionResult};
use distri_sdk::MachineUuid;
use distri_testing::{MockStatus, TestFixture};

/// Test that a transaction still pending when its blockhash expires ends
/// up TimedOut
///
/// **Test flow:**
/// 1. Blockhash valid up to height 102, chain at 100 and advancing one
///    block per height query
/// 2. Status never reaches finalized
/// 3. Polls at heights 100, 101 and 102 keep waiting; height 103 stops
#[tokio::test]
async fn test_submit_timed_out_after_blockhash_expiry() {
    let test = TestFixture::new();
    test.ledger.set_block_heights(100, 102, 1);
    test.ledger.set_status(MockStatus::Pending);

    let result = test
        .client()
        .make_offer(&MachineUuid::new([3u8; 16]), 10, 24, 100)
        .await
        .unwrap();

    assert!(matches!(result, TransactionResult::TimedOut { .. }));
    assert_eq!(test.ledger.status_requests(), 4);
    assert_eq!(test.ledger.send_requests(), 1);

    let err = result.into_result().unwrap_err();
    assert!(matches!(err, ClientError::ConfirmationTimedOut { .. }));
}

#[tokio::test]
async fn test_submit_timed_out_when_poll_fails() {
    let test = TestFixture::new();
    test.ledger.set_status(MockStatus::Unreachable);

    let result = test
        .client()
        .make_offer(&MachineUuid::new([3u8; 16]), 10, 24, 100)
        .await
        .unwrap();

    let signature = *result.signature();
    assert_eq!(result, TransactionResult::TimedOut { signature });
    assert_eq!(test.ledger.status_requests(), 1);
}

#[tokio::test]
async fn test_timed_out_transaction_can_land_later() {
    let test = TestFixture::new();
    test.ledger.set_status(MockStatus::Unreachable);
    let client = test.client();

    let result = client
        .make_offer(&MachineUuid::new([3u8; 16]), 10, 24, 100)
        .await
        .unwrap();
    let signature = *result.signature();
    assert!(!result.is_confirmed());

    // Out of band, the transaction finalizes
    test.ledger.set_status(MockStatus::Finalized);
    assert_eq!(
        client.query_confirmation(&signature).await.unwrap(),
        Some(TransactionResult::Confirmed { signature })
    );
}
