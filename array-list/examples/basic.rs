//! Walks through the list operations with trace logging enabled.
//!
//! Run with `RUST_LOG=trace` to also see buffer growth.

use array_list::{DynamicArrayList, Error, List as _, MutableList as _};

fn main() -> Result<(), Error> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let mut list = DynamicArrayList::new();

    for n in [10, 20, 30] {
        list.add(n);
        tracing::info!(len = list.len(), capacity = list.capacity(), "added {n}");
    }

    tracing::info!("element at index 1: {}", list.get(1)?);

    if list.remove(&20) {
        tracing::info!("removed 20; list is now {list:?}");
    }

    match list.get(5) {
        Ok(item) => tracing::info!("unexpected element {item}"),
        Err(err) => tracing::warn!("{err}"),
    }

    let mut cur = list.iter();
    while cur.has_next() {
        tracing::info!("cursor yielded {}", cur.try_next()?);
    }

    if let Err(err) = cur.try_next() {
        tracing::info!("cursor finished: {err}");
    }

    list.clear();
    tracing::info!(empty = list.is_empty(), capacity = list.capacity(), "cleared list");

    Ok(())
}
