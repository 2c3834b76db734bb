//! Pages
//!
//! One component per route.

mod dashboard;
mod edit_profile;
mod inventory;
mod item_detail;
mod item_form;
mod login;
mod not_found;
mod profile;
mod register;
mod settings;

pub use dashboard::DashboardPage;
pub use edit_profile::EditProfilePage;
pub use inventory::InventoryPage;
pub use item_detail::ItemDetailPage;
pub use item_form::ItemFormPage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use profile::ProfilePage;
pub use register::RegisterPage;
pub use settings::SettingsPage;
