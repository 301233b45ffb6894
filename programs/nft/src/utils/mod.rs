use anchor_lang::prelude::*;

use crate::errors::NftError;

pub fn validate_string(input: &str) -> Result<()> {
    require!(
        input.chars().all(|c| c.is_ascii_graphic() || c == ' '),
        NftError::InvalidCharacters
    );
    Ok(())
}
