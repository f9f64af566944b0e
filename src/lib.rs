#[macro_use]
extern crate serde;
#[macro_use]
extern crate log;

mod certificate;
mod compression;
mod error;
mod ids;
mod inbound;
mod messages;
mod outbound;
mod profile;
mod request;
mod result;
mod soap;
mod transport;

pub use certificate::extract_common_name;
pub use compression::*;
pub use error::*;
pub use ids::*;
pub use inbound::*;
pub use messages::*;
pub use outbound::*;
pub use profile::*;
pub use request::*;
pub use result::Result;
pub use soap::*;
pub use transport::*;
