use distri_batch_tx::{BatchClaimClient, TxBatchError};
use distri_client::ClientError;
use distri_testing::{deterministic_keypair, TestFixture};
use solana_sdk::signer::Signer;

/// Test that a declined batch signature sends nothing
#[tokio::test]
async fn test_claim_batch_signing_rejected() {
    let test = TestFixture::new();
    test.signer.reject_all();
    let client = BatchClaimClient::new(test.address_finder, test.rpc(), test.session());
    let claims = vec![test.claim(1, 1), test.claim(2, 1)];

    let err = client
        .claim_batch(&claims, &test.wallet())
        .await
        .unwrap_err();

    assert!(matches!(err, TxBatchError::SigningRejected(_)));
    assert_eq!(test.signer.sign_all_calls(), 1);
    assert_eq!(test.ledger.send_requests(), 0);
}

#[tokio::test]
async fn test_claim_batch_foreign_payer_rejected() {
    let test = TestFixture::new();
    let client = BatchClaimClient::new(test.address_finder, test.rpc(), test.session());
    let payer = deterministic_keypair("someone else").pubkey();

    let err = client
        .claim_batch(&[test.claim(1, 1)], &payer)
        .await
        .unwrap_err();

    assert!(matches!(err, TxBatchError::SigningRejected(_)));
    assert_eq!(test.signer.sign_all_calls(), 0);
    assert_eq!(test.ledger.send_requests(), 0);
}

#[tokio::test]
async fn test_claim_batch_blockhash_unavailable() {
    let test = TestFixture::new();
    test.ledger.set_blockhash_unavailable();
    let client = BatchClaimClient::new(test.address_finder, test.rpc(), test.session());

    let err = client
        .claim_batch(&[test.claim(1, 1)], &test.wallet())
        .await
        .unwrap_err();

    assert!(matches!(err, TxBatchError::Client(ClientError::Rpc(_))));
    assert_eq!(test.signer.sign_all_calls(), 0);
}
