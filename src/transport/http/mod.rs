pub mod router;
pub mod types;
pub mod views;
pub mod handlers {
    pub mod health;
    pub mod home;
    pub mod weather;
}

pub use router::create_router;
pub use types::AppState;
