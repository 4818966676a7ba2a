use distri_batch_tx::BatchClaimClient;
use distri_testing::TestFixture;

/// Test that an empty batch makes no network or signer calls
#[tokio::test]
async fn test_claim_batch_empty() {
    let test = TestFixture::new();
    let client = BatchClaimClient::new(test.address_finder, test.rpc(), test.session());

    let results = client.claim_batch(&[], &test.wallet()).await.unwrap();

    assert!(results.is_empty());
    assert_eq!(test.ledger.call_count(), 0);
    assert_eq!(test.signer.sign_all_calls(), 0);
    assert_eq!(test.signer.sign_calls(), 0);
}
