mod layout;
pub use layout::SiteLayout;

mod home;
pub use home::Home;

mod clients;
pub use clients::Clients;

mod plants;
pub use plants::Plants;
