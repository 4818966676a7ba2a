/*!
# Client Data Types

Terminal outcomes of a submitted transaction.
*/

use crate::{ClientError, ClientResult};
use solana_sdk::{
    instruction::InstructionError, signature::Signature, transaction::TransactionError,
};

/// Where a sent transaction ended up. Only produced after the network
/// accepted the raw transaction; failures before that are `ClientError`s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionResult {
    /// Finalized without error.
    Confirmed { signature: Signature },

    /// Finalized with a program error.
    Failed {
        signature: Signature,
        error: TransactionError,
        /// Custom program error code, when the failure carries one.
        code: Option<u32>,
    },

    /// No finalized status before the blockhash expired, or the status
    /// query itself failed. The transaction may still land.
    TimedOut { signature: Signature },
}

impl TransactionResult {
    pub fn failed(signature: Signature, error: TransactionError) -> Self {
        let code = program_error_code(&error);
        Self::Failed {
            signature,
            error,
            code,
        }
    }

    pub fn signature(&self) -> &Signature {
        match self {
            Self::Confirmed { signature }
            | Self::Failed { signature, .. }
            | Self::TimedOut { signature } => signature,
        }
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self, Self::Confirmed { .. })
    }

    /// `Confirmed` becomes `Ok`, everything else the matching error.
    pub fn into_result(self) -> ClientResult<Signature> {
        match self {
            Self::Confirmed { signature } => Ok(signature),
            Self::Failed {
                signature,
                error,
                code,
            } => Err(ClientError::ConfirmationFailed {
                signature,
                error,
                code,
            }),
            Self::TimedOut { signature } => Err(ClientError::ConfirmationTimedOut { signature }),
        }
    }
}

pub fn program_error_code(error: &TransactionError) -> Option<u32> {
    match error {
        TransactionError::InstructionError(_, InstructionError::Custom(code)) => Some(*code),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_extracts_program_code() {
        let signature = Signature::new_unique();
        let result = TransactionResult::failed(
            signature,
            TransactionError::InstructionError(0, InstructionError::Custom(6001)),
        );

        assert!(!result.is_confirmed());
        assert_eq!(result.signature(), &signature);
        assert!(matches!(
            result.into_result(),
            Err(ClientError::ConfirmationFailed {
                code: Some(6001),
                ..
            })
        ));
    }

    #[test]
    fn test_failed_without_program_code() {
        let result =
            TransactionResult::failed(Signature::new_unique(), TransactionError::AccountNotFound);
        assert!(matches!(result, TransactionResult::Failed { code: None, .. }));
    }

    #[test]
    fn test_timed_out_into_result() {
        let signature = Signature::new_unique();
        assert!(matches!(
            TransactionResult::TimedOut { signature }.into_result(),
            Err(ClientError::ConfirmationTimedOut { .. })
        ));
    }
}
