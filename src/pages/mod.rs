//! Page components for PokeHolo.

mod card_detail;
mod home;
mod login;
mod not_found;
mod set_view;

pub use card_detail::CardDetail;
pub use home::Home;
pub use login::Login;
pub use not_found::NotFound;
pub use set_view::SetView;
