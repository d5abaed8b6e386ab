//! # comicdata
//!
//! Data model and payload decoding for comic catalog responses.
//!
//! ## Layout
//! - **model**: `Comic`, summaries, paged lists and the response envelope
//! - **decode**: lenient JSON decoding of the comics endpoint
//! - **error**: decode/encode errors

mod decode;
mod error;
mod model;
mod wire;

pub use decode::{decode_comics, encode_comics};
pub use error::{Error, Result};
pub use model::{
    CharacterList, CharacterSummary, Comic, ComicId, ComicList, ComicSummary, ComicsResponse,
    DataContainer, DataWrapper, ItemList,
};
