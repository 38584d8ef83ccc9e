//! View state kept outside the components so it can be driven without a browser.

pub mod details;
pub mod entries;
pub mod form;
pub mod recommendation;
pub mod request;
pub mod selection;
pub mod weather;
