#![doc = include_str!("../README.md")]
#![doc(test(attr(deny(warnings))))]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod config;
pub mod error;
pub mod io;
pub mod mapper;
pub mod split;
pub mod statements;
pub mod through;

pub mod model {
    pub use grom_model::*;
}

pub use grom_model::local_id;
pub use io::{parse, serialize};
pub use split::split_by_subject;
pub use statements::map;
pub use through::through_graphs;
