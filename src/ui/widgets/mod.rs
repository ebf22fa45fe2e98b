//! TUI widgets.

mod earn;
mod friends;
mod leaderboard;
mod market_list;
mod notifications;
mod profile;
mod status_bar;
mod tab_bar;

pub use earn::EarnScreen;
pub use friends::FriendsScreen;
pub use leaderboard::LeaderboardTable;
pub use market_list::MarketList;
pub use notifications::render_notification;
pub use profile::ProfileScreen;
pub use status_bar::StatusBar;
pub use tab_bar::TabBar;
