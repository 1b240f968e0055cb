mod confirm;
mod health_check;
mod home;

pub use {
    confirm::{confirm, confirmation_page},
    health_check::health_check,
    home::home,
};
