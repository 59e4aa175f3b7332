//! Print a signed access token for local development.
//!
//! Usage: `issue-token <user_id> [role]`

fn main() {
    let _ = dotenvy::dotenv();

    let user_id: i64 = std::env::args()
        .nth(1)
        .and_then(|v| v.parse().ok())
        .unwrap_or(1);
    let role = std::env::args().nth(2).unwrap_or_else(|| "user".to_string());
    let expiry = server::auth::jwt::access_token_expiry_minutes();

    let token = server::auth::jwt::create_access_token(user_id, &role, expiry)
        .expect("Failed to sign access token");
    println!("{token}");
}
