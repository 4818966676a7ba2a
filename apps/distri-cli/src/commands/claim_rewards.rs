use crate::{
    commands::{address_finder, rpc},
    config::MarketConfig,
    error::{CliError, CliResult},
};
use distri_batch_tx::BatchClaimClient;
use distri_client::{KeypairSigner, SignerSession};
use distri_sdk::RewardClaim;
use std::{io::Read, path::PathBuf, sync::Arc};

pub async fn execute(config: &MarketConfig, claims_path: PathBuf) -> CliResult<()> {
    println!("🎯 Reading claims from {}", claims_path.display());
    let claims = read_claims(std::fs::File::open(&claims_path)?)?;
    if claims.is_empty() {
        println!("❌ No claims found");
        return Ok(());
    }

    let signer = Arc::new(SignerSession::new(Arc::new(KeypairSigner::from_file(
        &config.keypair_path,
    )?)));
    let payer = signer.pubkey();
    println!("🔑 Wallet: {}", payer);

    let client = BatchClaimClient::new(address_finder(config), rpc(config), signer);

    println!("📦 Claiming {} reward(s)...", claims.len());
    let results = client.claim_batch(&claims, &payer).await?;

    let mut failed = 0;
    for (i, (claim, result)) in claims.iter().zip(&results).enumerate() {
        match result {
            Ok(signature) => println!(
                "   {}. ✅ period {} machine {}: {}",
                i + 1,
                claim.period,
                claim.machine_uuid,
                signature
            ),
            Err(e) => {
                failed += 1;
                println!(
                    "   {}. ❌ period {} machine {}: {}",
                    i + 1,
                    claim.period,
                    claim.machine_uuid,
                    e
                );
            }
        }
    }

    if failed > 0 {
        return Err(CliError::ClaimsNotSent {
            failed,
            total: claims.len(),
        });
    }

    println!("✅ Sent {} claim transaction(s)", results.len());
    Ok(())
}

/// `period,machine_uuid,owner` rows, with a header line.
pub fn read_claims(reader: impl Read) -> CliResult<Vec<RewardClaim>> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let claims = reader
        .deserialize::<RewardClaim>()
        .collect::<Result<Vec<_>, _>>()?;
    Ok(claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use distri_sdk::MachineUuid;
    use solana_sdk::pubkey::Pubkey;

    #[test]
    fn test_read_claims() {
        let owner = Pubkey::new_unique();
        let csv = format!(
            "period,machine_uuid,owner\n\
             1,000102030405060708090a0b0c0d0e0f,{owner}\n\
             2, ffffffffffffffffffffffffffffffff , {owner}\n"
        );

        let claims = read_claims(csv.as_bytes()).unwrap();

        assert_eq!(
            claims,
            vec![
                RewardClaim::new(
                    1,
                    MachineUuid::new([0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15]),
                    owner
                ),
                RewardClaim::new(2, MachineUuid::new([0xff; 16]), owner),
            ]
        );
    }

    #[test]
    fn test_read_claims_bad_uuid() {
        let csv = format!(
            "period,machine_uuid,owner\n1,abcd,{}\n",
            Pubkey::new_unique()
        );
        assert!(matches!(read_claims(csv.as_bytes()), Err(CliError::Csv(_))));
    }
}
