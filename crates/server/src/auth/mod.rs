pub mod cookies;
pub mod jwt;
pub mod middleware;

use jwt::Claims;

/// Whether the caller may read data belonging to `user_id`.
/// Users see their own rows; admins see everyone's.
pub fn can_access_user(claims: &Claims, user_id: i64) -> bool {
    claims.sub == user_id || claims.role == "admin"
}
