pub mod booking;
pub mod item;
pub mod merchant;
pub mod moderator;
pub mod rental_request;
pub mod summary;
pub mod user;

pub use booking::BookingListing;
pub use item::ItemListing;
pub use merchant::MerchantListing;
pub use moderator::{Capability, Moderator, ModeratorProfile, Role};
pub use rental_request::RequestListing;
pub use summary::DashboardSummary;
pub use user::User;
