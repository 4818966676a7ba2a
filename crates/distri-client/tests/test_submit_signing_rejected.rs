use distri_client::ClientError;
use distri_sdk::MachineUuid;
use distri_testing::TestFixture;

/// Test that a declined signature stops the submission before sending
#[tokio::test]
async fn test_submit_signing_rejected() {
    let test = TestFixture::new();
    test.signer.reject_all();

    let err = test
        .client()
        .make_offer(&MachineUuid::new([5u8; 16]), 10, 24, 100)
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::SigningRejected(_)));
    assert!(err.is_recoverable());
    assert_eq!(test.signer.sign_calls(), 1);
    assert_eq!(test.ledger.blockhash_requests(), 1);
    assert_eq!(test.ledger.send_requests(), 0);
}

#[tokio::test]
async fn test_submit_blockhash_unavailable() {
    let test = TestFixture::new();
    test.ledger.set_blockhash_unavailable();

    let err = test
        .client()
        .cancel_offer(&MachineUuid::new([5u8; 16]))
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Rpc(_)));
    assert_eq!(test.signer.sign_calls(), 0);
    assert_eq!(test.ledger.send_requests(), 0);
}
