//! Resource methods, one module per top-level API path segment. Every
//! listing endpoint has a paged variant taking a [`crate::Pagination`] and
//! an `_all` variant that walks every page through the fan-out iterator.

mod accounts;
mod addresses;
mod assets;
mod blocks;
mod epochs;
mod genesis;
mod health;
mod ipfs;
mod mempool;
mod metadata;
mod metrics;
mod network;
mod nutlink;
mod pools;
mod scripts;
mod txs;
mod utils;
