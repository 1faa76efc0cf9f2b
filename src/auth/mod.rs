mod dto;
pub mod services;

pub use dto::{Claims, JwtKeys, TokenError};
pub use services::{AdminUser, AuthUser};
