/// Result code for a completed sweep.
pub const KAT_SUCCESS: i32 = 0;
/// Result code for a file open error.
///
/// Kept for compatibility with KAT tooling, the device harness never
/// produces it.
pub const KAT_FILE_OPEN_ERROR: i32 = -1;
/// Result code for a data error.
///
/// Kept for compatibility with KAT tooling, the device harness never
/// produces it.
pub const KAT_DATA_ERROR: i32 = -3;
/// Result code for a cryptographic failure.
pub const KAT_CRYPTO_FAILURE: i32 = -4;

/// Sweep step that failed.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Step {
    /// Encryption returned an error, or a ciphertext that does not fit.
    Encrypt,
    /// Decryption returned an error.
    Decrypt,
    /// Decrypted length differs from the message length.
    LengthMismatch,
    /// Decrypted bytes differ from the message.
    ContentMismatch,
    /// Hashing returned an error.
    Hash,
}

/// KAT errors.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum KatError {
    /// Test vector file could not be opened.
    FileOpen,
    /// Test vector data was malformed.
    Data,
    /// The primitive failed, or an AEAD round trip did not match.
    Crypto {
        /// Failed step.
        step: Step,
        /// Message length of the failing combination.
        msg_len: usize,
        /// Associated data length of the failing combination.
        ///
        /// Always zero for hashes.
        ad_len: usize,
    },
}

impl KatError {
    /// Process result code for this error.
    ///
    /// # Example
    ///
    /// ```
    /// use lwc_kat::{KatError, Step, KAT_CRYPTO_FAILURE};
    ///
    /// let err = KatError::Crypto {
    ///     step: Step::Decrypt,
    ///     msg_len: 8,
    ///     ad_len: 0,
    /// };
    /// assert_eq!(err.code(), KAT_CRYPTO_FAILURE);
    /// ```
    pub const fn code(&self) -> i32 {
        match self {
            KatError::FileOpen => KAT_FILE_OPEN_ERROR,
            KatError::Data => KAT_DATA_ERROR,
            KatError::Crypto { .. } => KAT_CRYPTO_FAILURE,
        }
    }

    pub(crate) const fn crypto(step: Step, msg_len: usize, ad_len: usize) -> KatError {
        KatError::Crypto {
            step,
            msg_len,
            ad_len,
        }
    }
}

impl From<KatError> for i32 {
    fn from(err: KatError) -> Self {
        err.code()
    }
}
