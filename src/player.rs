//! Player Records
//!
//! The user-info view supplied by the owning player abstraction. Avatar bytes
//! are read once, at panel construction.

/// Server-supplied user info for one player.
#[derive(Debug, Clone, Default)]
pub struct UserInfo {
    pub name: String,
    pub level: i32,
    /// Raw encoded avatar bitmap bytes; may be empty.
    pub avatar_bmp: Vec<u8>,
}

impl UserInfo {
    pub fn new(name: impl Into<String>, level: i32, avatar_bmp: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            level,
            avatar_bmp,
        }
    }
}
