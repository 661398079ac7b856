use crate::models::{AuthResponse, LoginRequest, SignupRequest};
use crate::services::api_client::{self, ApiError};

pub async fn login(email: String, password: String) -> Result<AuthResponse, ApiError> {
    api_client::post_json("/auth/login", &LoginRequest { email, password }).await
}

pub async fn signup(request: &SignupRequest) -> Result<AuthResponse, ApiError> {
    api_client::post_json("/auth/signup", request).await
}
