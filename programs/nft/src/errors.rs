use anchor_lang::prelude::*;

#[error_code]
pub enum NftError {
    #[msg("Caller is neither the token owner nor an approved operator")]
    NotAuthorized,

    #[msg("Token id does not match the registry counter")]
    InvalidTokenId,

    #[msg("Token does not belong to this registry")]
    WrongRegistry,

    #[msg("Metadata URI is too long")]
    UriTooLong,

    #[msg("Registry name is too long")]
    NameTooLong,

    #[msg("Registry symbol is too long")]
    SymbolTooLong,

    #[msg("String contains non-printable characters")]
    InvalidCharacters,

    #[msg("Math overflow")]
    MathOverflow,
}
