/// Precondition violations on engine input.
///
/// The upstream service guarantees well-formed data; each variant names the
/// guarantee that was broken rather than surfacing a bare missing-key fault.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("malformed holding: missing field `{field}`")]
    MalformedHolding { field: &'static str },
    #[error("malformed security: missing field `{field}`")]
    MalformedSecurity { field: &'static str },
    #[error("malformed transaction for security `{security}`: missing field `{field}`")]
    MalformedTransaction {
        security: String,
        field: &'static str,
    },
    #[error("investment data must be a flat list of holdings")]
    ExpectedHoldings,
    #[error("investment data must be a list of accounts")]
    ExpectedAccounts,
}
