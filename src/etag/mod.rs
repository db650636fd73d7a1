mod conditional;
mod configuration;
mod error;
mod matching;
mod request;
mod response;
mod tag;

#[allow(unused_imports)]
pub use {
    conditional::*, configuration::*, error::*, matching::*, request::*, response::*, tag::*,
};
