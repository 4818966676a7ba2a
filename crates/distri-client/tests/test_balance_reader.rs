use distri_client::{BalanceReader, ClientError};
use distri_testing::{RpcCall, TestFixture};
use rust_decimal::Decimal;
use solana_sdk::pubkey::Pubkey;

/// Test that a raw base-unit balance is scaled to whole tokens
#[tokio::test]
async fn test_balance_scaled_to_whole_tokens() {
    let test = TestFixture::new();
    let owner = Pubkey::new_unique();
    let (token_account, _) = test
        .address_finder
        .find_token_account_address(&owner)
        .unwrap();
    test.ledger.set_token_balance(token_account, 1_500_000_000);

    let client = test.client();
    let balance = client.get_token_balance(Some(&owner)).await.unwrap();

    assert_eq!(balance, Decimal::new(15, 1));
    assert_eq!(
        test.ledger.calls(),
        vec![RpcCall::GetTokenAccountBalance(token_account)]
    );
}

#[tokio::test]
async fn test_missing_token_account() {
    let test = TestFixture::new();
    let (token_account, _) = test
        .address_finder
        .find_token_account_address(&test.wallet())
        .unwrap();
    let reader = BalanceReader::new(test.rpc(), test.address_finder);

    let err = reader.get_balance(&test.wallet()).await.unwrap_err();
    assert!(matches!(err, ClientError::AccountNotFound(address) if address == token_account));

    let balance = reader.get_balance_or_zero(&test.wallet()).await.unwrap();
    assert_eq!(balance, Decimal::ZERO);
}

#[tokio::test]
async fn test_wallet_balance_by_default() {
    let test = TestFixture::new();
    let (token_account, _) = test
        .address_finder
        .find_token_account_address(&test.wallet())
        .unwrap();
    test.ledger.set_token_balance(token_account, 42);

    let balance = test.client().get_token_balance(None).await.unwrap();
    assert_eq!(balance, Decimal::new(42, 9));
}

/// Test that a failing balance query is an error, never a zero balance
#[tokio::test]
async fn test_unavailable_balance_is_not_zero() {
    let test = TestFixture::new();
    test.ledger.set_balance_unavailable();
    let reader = BalanceReader::new(test.rpc(), test.address_finder);

    let err = reader.get_balance_or_zero(&test.wallet()).await.unwrap_err();
    assert!(matches!(err, ClientError::Rpc(_)));
}
