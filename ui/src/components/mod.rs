pub mod banner;
pub mod footer;
pub mod login;
pub mod search;
pub mod selection;
pub mod simple;
pub mod status;

pub use banner::*;
pub use footer::*;
pub use login::*;
pub use search::*;
pub use selection::*;
pub use simple::*;
pub use status::*;
