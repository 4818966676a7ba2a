use distri_client::ClientError;
use distri_sdk::MachineUuid;
use distri_testing::TestFixture;
use std::time::Duration;

/// Test that concurrent submissions never call the signer concurrently
#[tokio::test]
async fn test_concurrent_submissions_share_one_signer() {
    let test = TestFixture::new();
    test.signer.set_delay(Duration::from_millis(20));
    let client = test.client();
    let first_machine = MachineUuid::new([1u8; 16]);
    let second_machine = MachineUuid::new([2u8; 16]);

    let (first, second) = tokio::join!(
        client.make_offer(&first_machine, 10, 24, 100),
        client.make_offer(&second_machine, 10, 24, 100),
    );

    assert!(first.unwrap().is_confirmed());
    assert!(second.unwrap().is_confirmed());
    assert_eq!(test.signer.sign_calls(), 2);
    assert_eq!(test.signer.max_in_flight(), 1);
    assert_eq!(test.ledger.send_requests(), 2);
}

#[tokio::test]
async fn test_short_batch_signature_is_rejected() {
    let test = TestFixture::new();
    test.signer.drop_last_signature();
    let session = test.session();

    let payer = test.wallet();
    let claim = test.claim(1, 1);
    let mut transactions = vec![
        distri_sdk::build_claim_tx(&test.address_finder, &claim, &payer, test.ledger.blockhash())
            .unwrap(),
        distri_sdk::build_claim_tx(&test.address_finder, &claim, &payer, test.ledger.blockhash())
            .unwrap(),
    ];

    let err = session.sign_all(&mut transactions).await.unwrap_err();
    assert!(matches!(err, ClientError::SigningRejected(_)));
    assert!(transactions.iter().all(|tx| !tx.is_signed()));
}
