//! Spot command and query handlers.

mod add_spot_image;
mod create_spot;
mod delete_spot;
mod delete_spot_image;
mod get_spot;
mod list_spots;
mod update_spot;

pub use add_spot_image::{AddSpotImageCommand, AddSpotImageHandler};
pub use create_spot::{CreateSpotCommand, CreateSpotHandler};
pub use delete_spot::{DeleteSpotCommand, DeleteSpotHandler};
pub use delete_spot_image::{DeleteSpotImageCommand, DeleteSpotImageHandler};
pub use get_spot::{GetSpotHandler, GetSpotQuery, SpotView};
pub use list_spots::{ListSpotsHandler, ListSpotsQuery, SpotList, SpotSummary};
pub use update_spot::{UpdateSpotCommand, UpdateSpotHandler};
