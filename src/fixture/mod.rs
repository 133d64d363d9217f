//! Fixture module
//!
//! The static route table and everything it serves: fixture profiles, canned
//! page bodies, the icon blob and the index page.

pub mod icon;
pub mod index;
pub mod pages;
mod table;

pub use table::{CannedResponse, RouteTable};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Alternative route sets the server can expose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Every signature, including the ARL pages and the favicon routes
    #[default]
    Full,
    /// Same as `Full` without the ARL pages and favicon routes
    Basic,
    /// Flat page set of the older fixture (`/wordpress`, `/jenkins`, ...)
    Classic,
}

impl Profile {
    /// Port the profile listens on when `server.port` is not configured
    pub const fn default_port(self) -> u16 {
        match self {
            Self::Full => 9999,
            Self::Basic | Self::Classic => 8888,
        }
    }

    pub const fn serves_favicon(self) -> bool {
        matches!(self, Self::Full)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Basic => "basic",
            Self::Classic => "classic",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
