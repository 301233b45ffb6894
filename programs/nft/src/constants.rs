// Seeds
pub const REGISTRY_SEED: &[u8] = b"registry";
pub const TOKEN_SEED: &[u8] = b"token";
pub const APPROVAL_SEED: &[u8] = b"approval";

// Field bounds
pub const MAX_NAME_LEN: usize = 32;
pub const MAX_SYMBOL_LEN: usize = 10;
pub const MAX_URI_LEN: usize = 200;
